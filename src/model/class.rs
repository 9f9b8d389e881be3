// Tue Jan 20 2026 - Alex

use crate::model::{ClassId, FieldId, MethodId};
use parking_lot::RwLock;
use std::fmt;

/// Usage lists attached to a class once usage data is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassUsage {
    pub dependencies: Vec<ClassId>,
    pub use_in: Vec<ClassId>,
    pub use_in_mth: Vec<MethodId>,
}

#[derive(Debug)]
pub struct ClassNode {
    id: ClassId,
    full_name: String,
    outer: Option<ClassId>,
    top_parent: ClassId,
    fields: Vec<FieldId>,
    methods: Vec<MethodId>,
    usage: RwLock<ClassUsage>,
}

impl ClassNode {
    pub(crate) fn new(id: ClassId, full_name: String) -> Self {
        Self {
            id,
            full_name,
            outer: None,
            top_parent: id,
            fields: Vec::new(),
            methods: Vec::new(),
            usage: RwLock::new(ClassUsage::default()),
        }
    }

    pub(crate) fn set_outer(&mut self, outer: ClassId, top_parent: ClassId) {
        self.outer = Some(outer);
        self.top_parent = top_parent;
    }

    pub(crate) fn push_field(&mut self, fld: FieldId) {
        self.fields.push(fld);
    }

    pub(crate) fn push_method(&mut self, mth: MethodId) {
        self.methods.push(mth);
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn short_name(&self) -> &str {
        self.full_name
            .rsplit(|c| c == '.' || c == '$')
            .next()
            .unwrap_or(&self.full_name)
    }

    pub fn outer_class(&self) -> Option<ClassId> {
        self.outer
    }

    /// Outermost declaring class, or the class itself when not nested.
    pub fn top_parent_class(&self) -> ClassId {
        self.top_parent
    }

    pub fn is_inner(&self) -> bool {
        self.outer.is_some()
    }

    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodId] {
        &self.methods
    }

    pub fn usage(&self) -> ClassUsage {
        self.usage.read().clone()
    }

    pub fn dependencies(&self) -> Vec<ClassId> {
        self.usage.read().dependencies.clone()
    }

    pub fn use_in(&self) -> Vec<ClassId> {
        self.usage.read().use_in.clone()
    }

    pub fn use_in_mth(&self) -> Vec<MethodId> {
        self.usage.read().use_in_mth.clone()
    }

    pub fn set_dependencies(&self, deps: Vec<ClassId>) {
        self.usage.write().dependencies = deps;
    }

    pub fn set_use_in(&self, use_in: Vec<ClassId>) {
        self.usage.write().use_in = use_in;
    }

    pub fn set_use_in_mth(&self, use_in_mth: Vec<MethodId>) {
        self.usage.write().use_in_mth = use_in_mth;
    }
}

impl fmt::Display for ClassNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}
