// Tue Jan 20 2026 - Alex

use crate::model::{
    ArgType, ClassDecl, ClassId, ClassNode, Classpath, FieldId, FieldInfo, FieldNode, MethodId,
    MethodNode, ModelError,
};
use ahash::AHashMap;

/// Program model: every class, method and field known to the decompiler,
/// plus the platform classpath used for external classes.
///
/// Entities live in flat arenas addressed by their ids. Handles from one
/// `RootNode` must not be used with another.
pub struct RootNode {
    classes: Vec<ClassNode>,
    methods: Vec<MethodNode>,
    fields: Vec<FieldNode>,
    class_index: AHashMap<String, ClassId>,
    method_index: AHashMap<String, MethodId>,
    field_index: AHashMap<String, FieldId>,
    classpath: Classpath,
}

impl RootNode {
    pub fn build(mut decls: Vec<ClassDecl>, classpath: Classpath) -> Result<Self, ModelError> {
        decls.sort_by(|a, b| a.name.cmp(&b.name));
        for pair in decls.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(ModelError::DuplicateClass(pair[0].name.clone()));
            }
        }

        let class_index: AHashMap<String, ClassId> = decls
            .iter()
            .enumerate()
            .map(|(i, decl)| (decl.name.clone(), ClassId::new(i)))
            .collect();

        let mut outers = Vec::with_capacity(decls.len());
        for decl in &decls {
            let outer = match &decl.outer {
                Some(outer) => Some(*class_index.get(outer).ok_or_else(|| {
                    ModelError::UnknownOuterClass {
                        class: decl.name.clone(),
                        outer: outer.clone(),
                    }
                })?),
                None => None,
            };
            outers.push(outer);
        }

        let mut classes: Vec<ClassNode> = decls
            .iter()
            .enumerate()
            .map(|(i, decl)| ClassNode::new(ClassId::new(i), decl.name.clone()))
            .collect();
        for (i, outer) in outers.iter().enumerate() {
            if let Some(outer) = outer {
                let top = find_top_parent(&outers, i).ok_or_else(|| ModelError::OuterCycle(decls[i].name.clone()))?;
                classes[i].set_outer(*outer, top);
            }
        }

        let mut methods = Vec::new();
        let mut fields = Vec::new();
        let mut method_index = AHashMap::new();
        let mut field_index = AHashMap::new();

        for (i, decl) in decls.into_iter().enumerate() {
            let cls_id = ClassId::new(i);

            let mut decl_methods = decl.methods;
            decl_methods.sort_by_cached_key(|m| m.short_id());
            for mth in decl_methods {
                let full_id = format!("{}.{}", decl.name, mth.short_id());
                if method_index.contains_key(&full_id) {
                    return Err(ModelError::DuplicateMethod(full_id));
                }
                let id = MethodId::new(methods.len());
                method_index.insert(full_id.clone(), id);
                classes[i].push_method(id);
                methods.push(MethodNode::new(id, cls_id, mth.name, mth.args, mth.return_type, full_id));
            }

            let mut decl_fields = decl.fields;
            decl_fields.sort_by_cached_key(|f| (f.name.clone(), f.field_type.to_string()));
            for fld in decl_fields {
                let full_id = format!("{}.{}:{}", decl.name, fld.name, fld.field_type);
                if field_index.contains_key(&full_id) {
                    return Err(ModelError::DuplicateField(full_id));
                }
                let id = FieldId::new(fields.len());
                field_index.insert(full_id.clone(), id);
                classes[i].push_field(id);
                fields.push(FieldNode::new(id, cls_id, fld.name, fld.field_type, full_id));
            }
        }

        log::debug!(
            "Built program model: {} classes, {} methods, {} fields",
            classes.len(),
            methods.len(),
            fields.len()
        );

        Ok(Self {
            classes,
            methods,
            fields,
            class_index,
            method_index,
            field_index,
            classpath,
        })
    }

    pub fn class(&self, id: ClassId) -> &ClassNode {
        &self.classes[id.index()]
    }

    pub fn method(&self, id: MethodId) -> &MethodNode {
        &self.methods[id.index()]
    }

    pub fn field(&self, id: FieldId) -> &FieldNode {
        &self.fields[id.index()]
    }

    pub fn classes(&self) -> &[ClassNode] {
        &self.classes
    }

    pub fn methods(&self) -> &[MethodNode] {
        &self.methods
    }

    pub fn fields(&self) -> &[FieldNode] {
        &self.fields
    }

    pub fn classpath(&self) -> &Classpath {
        &self.classpath
    }

    pub fn class_by_name(&self, name: &str) -> Option<ClassId> {
        self.class_index.get(name).copied()
    }

    pub fn method_by_full_id(&self, full_id: &str) -> Option<MethodId> {
        self.method_index.get(full_id).copied()
    }

    pub fn field_by_full_id(&self, full_id: &str) -> Option<FieldId> {
        self.field_index.get(full_id).copied()
    }

    /// Looks a method up by name. Argument types are needed only when the
    /// name is overloaded.
    pub fn find_method(&self, class: &str, name: &str, args: Option<&[ArgType]>) -> Result<MethodId, ModelError> {
        let cls = self
            .class_by_name(class)
            .ok_or_else(|| ModelError::ClassNotFound(class.to_string()))?;
        let candidates: Vec<MethodId> = self
            .class(cls)
            .methods()
            .iter()
            .copied()
            .filter(|&id| {
                let mth = self.method(id);
                mth.name() == name && args.map_or(true, |args| mth.arg_types() == args)
            })
            .collect();
        match candidates.as_slice() {
            [id] => Ok(*id),
            [] => Err(ModelError::MethodNotFound(format!("{}.{}", class, name))),
            _ => Err(ModelError::AmbiguousMethod(format!("{}.{}", class, name))),
        }
    }

    /// Local class behind an object type. External and unknown classes
    /// resolve to `None`.
    pub fn resolve_class(&self, ty: &ArgType) -> Option<ClassId> {
        if !ty.is_object() {
            return None;
        }
        ty.object_name().and_then(|name| self.class_by_name(name))
    }

    pub fn resolve_field(&self, info: &FieldInfo) -> Option<FieldId> {
        let cls = self.class_by_name(&info.declaring_class)?;
        self.class(cls).fields().iter().copied().find(|&id| {
            let fld = self.field(id);
            fld.name() == info.name && info.field_type.as_ref().map_or(true, |ty| fld.field_type() == ty)
        })
    }

    pub fn top_parent_class(&self, id: ClassId) -> ClassId {
        self.class(id).top_parent_class()
    }
}

fn find_top_parent(outers: &[Option<ClassId>], start: usize) -> Option<ClassId> {
    let mut current = ClassId::new(start);
    for _ in 0..=outers.len() {
        match outers[current.index()] {
            Some(outer) => current = outer,
            None => return Some(current),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrimitiveType;

    fn sample() -> RootNode {
        RootNode::build(
            vec![
                ClassDecl::new("b.Second").with_method("run", Vec::new(), ArgType::primitive(PrimitiveType::Void)),
                ClassDecl::new("a.First$Inner$Deep").with_outer("a.First$Inner"),
                ClassDecl::new("a.First")
                    .with_field("z", ArgType::primitive(PrimitiveType::Int))
                    .with_field("a", ArgType::object("b.Second"))
                    .with_method("m", vec![ArgType::primitive(PrimitiveType::Int)], ArgType::object("b.Second"))
                    .with_method("m", Vec::new(), ArgType::primitive(PrimitiveType::Void)),
                ClassDecl::new("a.First$Inner").with_outer("a.First"),
            ],
            Classpath::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_ids_follow_name_order() {
        let root = sample();
        let names: Vec<&str> = root.classes().iter().map(|c| c.full_name()).collect();
        assert_eq!(names, vec!["a.First", "a.First$Inner", "a.First$Inner$Deep", "b.Second"]);
        for (i, cls) in root.classes().iter().enumerate() {
            assert_eq!(cls.id().index(), i);
        }
        let first = root.class(root.class_by_name("a.First").unwrap());
        let field_names: Vec<&str> = first.fields().iter().map(|&f| root.field(f).name()).collect();
        assert_eq!(field_names, vec!["a", "z"]);
    }

    #[test]
    fn test_top_parent_class() {
        let root = sample();
        let first = root.class_by_name("a.First").unwrap();
        let deep = root.class_by_name("a.First$Inner$Deep").unwrap();
        assert_eq!(root.top_parent_class(deep), first);
        assert_eq!(root.class(deep).outer_class(), root.class_by_name("a.First$Inner"));
        assert_eq!(root.top_parent_class(first), first);
    }

    #[test]
    fn test_find_method_overloads() {
        let root = sample();
        assert!(matches!(root.find_method("a.First", "m", None), Err(ModelError::AmbiguousMethod(_))));
        let int_args = [ArgType::primitive(PrimitiveType::Int)];
        let mth = root.find_method("a.First", "m", Some(&int_args)).unwrap();
        assert_eq!(root.method(mth).full_id(), "a.First.m(int):b.Second");
        assert!(root.find_method("b.Second", "run", None).is_ok());
        assert!(matches!(root.find_method("x.Nope", "run", None), Err(ModelError::ClassNotFound(_))));
    }

    #[test]
    fn test_resolve() {
        let root = sample();
        assert_eq!(root.resolve_class(&ArgType::object("b.Second")), root.class_by_name("b.Second"));
        assert_eq!(root.resolve_class(&ArgType::object("java.lang.String")), None);
        assert_eq!(root.resolve_class(&ArgType::array(ArgType::object("b.Second"))), None);

        let info = FieldInfo::new("a.First", "a", ArgType::object("b.Second"));
        assert!(root.resolve_field(&info).is_some());
        let wrong_type = FieldInfo::new("a.First", "a", ArgType::primitive(PrimitiveType::Long));
        assert!(root.resolve_field(&wrong_type).is_none());
    }

    #[test]
    fn test_build_errors() {
        let dup = RootNode::build(vec![ClassDecl::new("a.A"), ClassDecl::new("a.A")], Classpath::new());
        assert!(matches!(dup, Err(ModelError::DuplicateClass(_))));

        let unknown = RootNode::build(vec![ClassDecl::new("a.A$B").with_outer("a.A")], Classpath::new());
        assert!(matches!(unknown, Err(ModelError::UnknownOuterClass { .. })));

        let cycle = RootNode::build(
            vec![ClassDecl::new("a.X").with_outer("a.Y"), ClassDecl::new("a.Y").with_outer("a.X")],
            Classpath::new(),
        );
        assert!(matches!(cycle, Err(ModelError::OuterCycle(_))));
    }
}
