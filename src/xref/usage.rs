// Tue Jan 20 2026 - Alex

use crate::model::{ArgType, ClassId, ClassNode, FieldId, FieldInfo, MethodId, MethodNode, RootNode};
use crate::xref::types::{collect_classes, BuildHints};
use crate::xref::{CodeNode, Reference, UsageInfoVisitor, UseSet, XRefError};

/// Usage data for one analysis pass over a program.
///
/// References are recorded in any order while method bodies are decoded, then
/// the data is finalized once through [`apply`](Self::apply),
/// [`apply_for_class`](Self::apply_for_class) or
/// [`visit_usage_data`](Self::visit_usage_data). Recording takes `&mut self`;
/// use [`SharedUsageInfo`](crate::xref::SharedUsageInfo) to record from
/// several threads.
pub struct UsageInfo<'a> {
    root: &'a RootNode,
    hints: BuildHints,
    cls_deps: UseSet<ClassId, ClassId>,
    cls_usage: UseSet<ClassId, ClassId>,
    cls_use_in_mth: UseSet<ClassId, MethodId>,
    field_usage: UseSet<FieldId, MethodId>,
    mth_usage: UseSet<MethodId, MethodId>,
}

impl<'a> UsageInfo<'a> {
    pub fn new(root: &'a RootNode) -> Self {
        Self {
            root,
            hints: BuildHints::default(),
            cls_deps: UseSet::new(),
            cls_usage: UseSet::new(),
            cls_use_in_mth: UseSet::new(),
            field_usage: UseSet::new(),
            mth_usage: UseSet::new(),
        }
    }

    pub fn root(&self) -> &'a RootNode {
        self.root
    }

    pub fn build_hints(&self) -> BuildHints {
        self.hints
    }

    pub fn cls_deps(&self) -> &UseSet<ClassId, ClassId> {
        &self.cls_deps
    }

    pub fn cls_usage(&self) -> &UseSet<ClassId, ClassId> {
        &self.cls_usage
    }

    pub fn cls_use_in_mth(&self) -> &UseSet<ClassId, MethodId> {
        &self.cls_use_in_mth
    }

    pub fn field_usage(&self) -> &UseSet<FieldId, MethodId> {
        &self.field_usage
    }

    pub fn mth_usage(&self) -> &UseSet<MethodId, MethodId> {
        &self.mth_usage
    }

    /// Stores sorted usage lists on every entity that has any.
    pub fn apply(&self) {
        let root = self.root;
        self.cls_deps.visit(|cls, deps| root.class(cls).set_dependencies(deps));
        self.cls_usage.visit(|cls, usage| root.class(cls).set_use_in(usage));
        self.cls_use_in_mth.visit(|cls, methods| root.class(cls).set_use_in_mth(methods));
        self.field_usage.visit(|fld, methods| root.field(fld).set_use_in(methods));
        self.mth_usage.visit(|mth, methods| root.method(mth).set_use_in(methods));
        log::debug!(
            "Applied usage data: {} class deps, {} class usages, {} field usages, {} method usages",
            self.cls_deps.len(),
            self.cls_usage.len(),
            self.field_usage.len(),
            self.mth_usage.len()
        );
    }

    /// Refreshes one class and the fields and methods it declares. Nothing
    /// else is touched.
    pub fn apply_for_class(&self, cls: ClassId) {
        let root = self.root;
        let node = root.class(cls);
        node.set_dependencies(self.cls_deps.sorted(&cls));
        node.set_use_in(self.cls_usage.sorted(&cls));
        node.set_use_in_mth(self.cls_use_in_mth.sorted(&cls));
        for &fld in node.fields() {
            root.field(fld).set_use_in(self.field_usage.sorted(&fld));
        }
        for &mth in node.methods() {
            root.method(mth).set_use_in(self.mth_usage.sorted(&mth));
        }
    }

    pub fn visit_usage_data(&self, visitor: &mut dyn UsageInfoVisitor) {
        let root = self.root;
        self.cls_deps
            .visit(|cls, deps| visitor.visit_class_deps(root.class(cls), &class_nodes(root, &deps)));
        self.cls_usage
            .visit(|cls, usage| visitor.visit_class_usage(root.class(cls), &class_nodes(root, &usage)));
        self.cls_use_in_mth.visit(|cls, methods| {
            visitor.visit_class_use_in_methods(root.class(cls), &method_nodes(root, &methods))
        });
        self.field_usage
            .visit(|fld, methods| visitor.visit_fields_usage(root.field(fld), &method_nodes(root, &methods)));
        self.mth_usage
            .visit(|mth, methods| visitor.visit_methods_usage(root.method(mth), &method_nodes(root, &methods)));
        visitor.visit_complete();
    }

    pub fn record(&mut self, reference: &Reference<'_>) -> Result<(), XRefError> {
        match reference {
            Reference::ClassUse { owner, use_type } => self.node_use_type(owner, use_type)?,
            Reference::MethodUse { mth, use_mth } => self.method_use(*mth, *use_mth),
            Reference::FieldUse { owner, field } => self.node_field_use(owner, field),
        }
        Ok(())
    }

    pub fn cls_use_type(&mut self, cls: ClassId, use_type: &ArgType) {
        for dep_cls in collect_classes(self.root, use_type, &mut self.hints) {
            self.cls_use(cls, dep_cls);
        }
    }

    pub fn mth_use_type(&mut self, mth: MethodId, use_type: &ArgType) {
        for use_cls in collect_classes(self.root, use_type, &mut self.hints) {
            self.mth_cls_use(mth, use_cls);
        }
    }

    pub fn node_use_type(&mut self, node: &CodeNode, use_type: &ArgType) -> Result<(), XRefError> {
        match node {
            CodeNode::Class(cls) => self.cls_use_type(*cls, use_type),
            CodeNode::Method(mth) => self.mth_use_type(*mth, use_type),
            CodeNode::Field(fld) => {
                let fld_cls = self.root.field(*fld).parent_class();
                self.cls_use_type(fld_cls, use_type);
            }
            CodeNode::Package(_) => return Err(XRefError::UnsupportedNodeKind(node.kind())),
        }
        Ok(())
    }

    pub fn mth_cls_use(&mut self, mth: MethodId, use_cls: ClassId) {
        let parent_class = self.root.method(mth).parent_class();
        self.cls_use(parent_class, use_cls);
        // a class is not "used" by its own methods
        if parent_class != use_cls {
            self.cls_use_in_mth.add(use_cls, mth);
        }
    }

    pub fn cls_use(&mut self, cls: ClassId, dep_cls: ClassId) {
        let top_parent = self.root.top_parent_class(cls);
        self.cls_deps.add(top_parent, self.root.top_parent_class(dep_cls));

        self.cls_usage.add(dep_cls, cls);
        self.cls_usage.add(dep_cls, top_parent);
    }

    /// `use_mth` is referenced from the code of `mth`.
    pub fn method_use(&mut self, mth: MethodId, use_mth: MethodId) {
        let root = self.root;
        let callee = root.method(use_mth);
        self.mth_cls_use(mth, callee.parent_class());
        self.mth_usage.add(use_mth, mth);
        self.mth_use_type(mth, callee.return_type());
        for arg_type in callee.arg_types() {
            self.mth_use_type(mth, arg_type);
        }
    }

    /// `use_fld` is referenced from the code of `mth`.
    pub fn field_use(&mut self, mth: MethodId, use_fld: FieldId) {
        let root = self.root;
        let field = root.field(use_fld);
        self.mth_cls_use(mth, field.parent_class());
        self.field_usage.add(use_fld, mth);
        self.mth_use_type(mth, field.field_type());
    }

    pub fn node_field_use(&mut self, node: &CodeNode, use_fld: &FieldInfo) {
        let fld = match self.root.resolve_field(use_fld) {
            Some(fld) => fld,
            None => {
                log::trace!("Field not resolved: {}", use_fld);
                return;
            }
        };
        match node {
            // field-in-class usage is not tracked, count it as class usage
            CodeNode::Class(cls) => {
                let fld_cls = self.root.field(fld).parent_class();
                self.cls_use(*cls, fld_cls);
            }
            CodeNode::Method(mth) => self.field_use(*mth, fld),
            CodeNode::Field(_) | CodeNode::Package(_) => {}
        }
    }
}

fn class_nodes<'r>(root: &'r RootNode, ids: &[ClassId]) -> Vec<&'r ClassNode> {
    ids.iter().map(|&id| root.class(id)).collect()
}

fn method_nodes<'r>(root: &'r RootNode, ids: &[MethodId]) -> Vec<&'r MethodNode> {
    ids.iter().map(|&id| root.method(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{obj, sample_program, void, Fixture};
    use crate::model::{ClassDecl, FieldNode};

    fn names(root: &RootNode, ids: &[ClassId]) -> Vec<String> {
        ids.iter().map(|&id| root.class(id).full_name().to_string()).collect()
    }

    #[derive(Default)]
    struct Lines(Vec<String>);

    impl UsageInfoVisitor for Lines {
        fn visit_class_deps(&mut self, cls: &ClassNode, deps: &[&ClassNode]) {
            self.0.push(format!("deps {} {:?}", cls, deps.iter().map(|c| c.full_name()).collect::<Vec<_>>()));
        }

        fn visit_class_usage(&mut self, cls: &ClassNode, usage: &[&ClassNode]) {
            self.0.push(format!("usage {} {:?}", cls, usage.iter().map(|c| c.full_name()).collect::<Vec<_>>()));
        }

        fn visit_class_use_in_methods(&mut self, cls: &ClassNode, methods: &[&MethodNode]) {
            self.0.push(format!("in_mth {} {:?}", cls, methods.iter().map(|m| m.full_id()).collect::<Vec<_>>()));
        }

        fn visit_fields_usage(&mut self, fld: &FieldNode, methods: &[&MethodNode]) {
            self.0.push(format!("field {} {:?}", fld, methods.iter().map(|m| m.full_id()).collect::<Vec<_>>()));
        }

        fn visit_methods_usage(&mut self, mth: &MethodNode, methods: &[&MethodNode]) {
            self.0.push(format!("method {} {:?}", mth, methods.iter().map(|m| m.full_id()).collect::<Vec<_>>()));
        }

        fn visit_complete(&mut self) {
            self.0.push("complete".to_string());
        }
    }

    #[test]
    fn test_method_use_example() {
        let fx = sample_program();
        let root = &fx.root;
        let (m1, m2) = (fx.mth("a.A", "m1"), fx.mth("b.B", "m2"));

        let mut usage = UsageInfo::new(root);
        usage.method_use(m1, m2);
        usage.apply();

        assert_eq!(root.method(m2).use_in(), vec![m1]);
        assert_eq!(names(root, &root.class(fx.cls("b.B")).use_in()), vec!["a.A"]);
        assert_eq!(root.class(fx.cls("b.B")).use_in_mth(), vec![m1]);
        assert_eq!(names(root, &root.class(fx.cls("c.C")).use_in()), vec!["a.A"]);
        assert_eq!(names(root, &root.class(fx.cls("b.P")).use_in()), vec!["a.A"]);
        assert_eq!(root.class(fx.cls("c.C")).use_in_mth(), vec![m1]);
        assert_eq!(names(root, &root.class(fx.cls("a.A")).dependencies()), vec!["b.B", "b.P", "c.C"]);
        assert!(root.class(fx.cls("c.D")).use_in().is_empty());
    }

    #[test]
    fn test_nested_class_rolls_up_to_top_parent() {
        let fx = sample_program();
        let root = &fx.root;
        let inner = fx.mth("a.A$In", "inner");

        let mut usage = UsageInfo::new(root);
        usage.method_use(inner, fx.mth("b.B", "m2"));
        usage.apply();

        assert_eq!(names(root, &root.class(fx.cls("b.B")).use_in()), vec!["a.A", "a.A$In"]);
        assert_eq!(names(root, &root.class(fx.cls("a.A")).dependencies()), vec!["b.B", "b.P", "c.C"]);
        assert!(root.class(fx.cls("a.A$In")).dependencies().is_empty());
    }

    #[test]
    fn test_self_use_not_counted_in_methods() {
        let fx = sample_program();
        let root = &fx.root;
        let a = fx.cls("a.A");
        let (m1, self_ref) = (fx.mth("a.A", "m1"), fx.mth("a.A", "self_ref"));

        let mut usage = UsageInfo::new(root);
        usage.mth_cls_use(m1, a);
        usage.mth_use_type(m1, &obj("a.A"));
        usage.method_use(m1, self_ref);
        usage.apply();

        assert!(root.class(a).use_in_mth().is_empty());
        assert_eq!(root.method(self_ref).use_in(), vec![m1]);
        assert_eq!(names(root, &root.class(a).use_in()), vec!["a.A"]);
    }

    #[test]
    fn test_field_use() {
        let fx = sample_program();
        let root = &fx.root;
        let (m1, items) = (fx.mth("a.A", "m1"), fx.fld("b.B", "items"));

        let mut usage = UsageInfo::new(root);
        usage.field_use(m1, items);
        usage.apply();

        assert_eq!(root.field(items).use_in(), vec![m1]);
        assert_eq!(names(root, &root.class(fx.cls("b.B")).use_in()), vec!["a.A"]);
        assert_eq!(names(root, &root.class(fx.cls("c.D")).use_in()), vec!["a.A"]);
        assert_eq!(root.class(fx.cls("c.D")).use_in_mth(), vec![m1]);
    }

    #[test]
    fn test_node_use_type() {
        let fx = sample_program();
        let root = &fx.root;
        let mut usage = UsageInfo::new(root);

        usage
            .node_use_type(&CodeNode::Field(fx.fld("b.B", "items")), &obj("c.C"))
            .unwrap();
        let err = usage.node_use_type(&CodeNode::Package("a".to_string()), &obj("c.C"));
        assert!(matches!(err, Err(XRefError::UnsupportedNodeKind(crate::xref::NodeKind::Package))));

        usage.apply();
        assert_eq!(names(root, &root.class(fx.cls("c.C")).use_in()), vec!["b.B"]);
        assert!(root.class(fx.cls("c.C")).use_in_mth().is_empty());
    }

    #[test]
    fn test_node_field_use() {
        let fx = sample_program();
        let root = &fx.root;
        let info = FieldInfo::new("b.B", "items", ArgType::array(obj("c.D")));
        let mut usage = UsageInfo::new(root);

        usage.node_field_use(&CodeNode::Class(fx.cls("a.A")), &info);
        usage.node_field_use(&CodeNode::Field(fx.fld("b.B", "items")), &info);
        usage.node_field_use(&CodeNode::Package("b".to_string()), &info);
        usage.node_field_use(&CodeNode::Method(fx.mth("a.A", "m1")), &FieldInfo::new("b.B", "missing", void()));
        usage.apply();

        assert_eq!(names(root, &root.class(fx.cls("b.B")).use_in()), vec!["a.A"]);
        assert!(root.field(fx.fld("b.B", "items")).use_in().is_empty());
        assert!(root.class(fx.cls("c.D")).use_in().is_empty());
        assert_eq!(usage.field_usage().len(), 0);
    }

    #[test]
    fn test_apply_for_class_is_scoped() {
        let fx = sample_program();
        let root = &fx.root;
        let (m1, m2) = (fx.mth("a.A", "m1"), fx.mth("b.B", "m2"));
        let items = fx.fld("b.B", "items");

        let mut usage = UsageInfo::new(root);
        usage.method_use(m1, m2);
        usage.field_use(m1, items);
        usage.apply_for_class(fx.cls("b.B"));

        assert_eq!(names(root, &root.class(fx.cls("b.B")).use_in()), vec!["a.A"]);
        assert_eq!(root.method(m2).use_in(), vec![m1]);
        assert_eq!(root.field(items).use_in(), vec![m1]);
        assert!(root.class(fx.cls("c.C")).use_in().is_empty());
        assert!(root.class(fx.cls("a.A")).dependencies().is_empty());
    }

    #[test]
    fn test_visit_is_deterministic() {
        let fx = Fixture::new(vec![
            ClassDecl::new("p.One").with_method("a", Vec::new(), void()).with_method("b", Vec::new(), void()),
            ClassDecl::new("p.Two").with_method("c", vec![obj("p.One")], obj("p.Three")),
            ClassDecl::new("p.Three").with_field("x", obj("p.Two")),
        ]);
        let root = &fx.root;
        let (a, b, c) = (fx.mth("p.One", "a"), fx.mth("p.One", "b"), fx.mth("p.Two", "c"));
        let x = fx.fld("p.Three", "x");

        let mut forward = UsageInfo::new(root);
        forward.method_use(a, c);
        forward.method_use(b, c);
        forward.field_use(c, x);
        forward.method_use(a, c);

        let mut backward = UsageInfo::new(root);
        backward.field_use(c, x);
        backward.method_use(b, c);
        backward.method_use(a, c);

        let mut first = Lines::default();
        forward.visit_usage_data(&mut first);
        let mut second = Lines::default();
        backward.visit_usage_data(&mut second);

        assert_eq!(first.0, second.0);
        assert_eq!(first.0.last().map(String::as_str), Some("complete"));
        assert!(first.0.contains(&"method p.Two.c(p.One):p.Three [\"p.One.a():void\", \"p.One.b():void\"]".to_string()));
        let kinds: Vec<&str> = first.0.iter().map(|l| l.split(' ').next().unwrap_or("")).collect();
        let mut grouped = kinds.clone();
        grouped.dedup();
        assert_eq!(grouped, vec!["deps", "usage", "in_mth", "field", "method", "complete"]);
        assert!(root.method(c).use_in().is_empty());
    }
}
