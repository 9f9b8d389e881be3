// Wed Jan 21 2026 - Alex

//! Small programs shared by the unit tests.

use crate::model::{ArgType, ClassDecl, ClassId, Classpath, FieldId, MethodId, RootNode};

pub(crate) struct Fixture {
    pub root: RootNode,
}

impl Fixture {
    pub fn new(decls: Vec<ClassDecl>) -> Self {
        Self::with_classpath(decls, Classpath::new())
    }

    pub fn with_classpath(decls: Vec<ClassDecl>, classpath: Classpath) -> Self {
        Self {
            root: RootNode::build(decls, classpath).expect("fixture model"),
        }
    }

    pub fn cls(&self, name: &str) -> ClassId {
        self.root.class_by_name(name).expect("fixture class")
    }

    /// First method with this name in the class.
    pub fn mth(&self, class: &str, name: &str) -> MethodId {
        let cls = self.cls(class);
        self.root
            .class(cls)
            .methods()
            .iter()
            .copied()
            .find(|&m| self.root.method(m).name() == name)
            .expect("fixture method")
    }

    pub fn fld(&self, class: &str, name: &str) -> FieldId {
        let cls = self.cls(class);
        self.root
            .class(cls)
            .fields()
            .iter()
            .copied()
            .find(|&f| self.root.field(f).name() == name)
            .expect("fixture field")
    }
}

pub(crate) fn void() -> ArgType {
    ArgType::primitive(crate::model::PrimitiveType::Void)
}

pub(crate) fn obj(name: &str) -> ArgType {
    ArgType::object(name)
}

/// `a.A.m1()` calls `b.B.m2(b.P)` which returns `c.C`; `b.B` holds a field of
/// type `c.D[]`; `a.A$In` is nested in `a.A`.
pub(crate) fn sample_program() -> Fixture {
    Fixture::new(vec![
        ClassDecl::new("a.A")
            .with_method("m1", Vec::new(), void())
            .with_method("self_ref", Vec::new(), obj("a.A")),
        ClassDecl::new("a.A$In")
            .with_outer("a.A")
            .with_method("inner", Vec::new(), void()),
        ClassDecl::new("b.B")
            .with_field("items", ArgType::array(obj("c.D")))
            .with_method("m2", vec![obj("b.P")], obj("c.C")),
        ClassDecl::new("b.P"),
        ClassDecl::new("c.C"),
        ClassDecl::new("c.D"),
    ])
}
