// Tue Jan 20 2026 - Alex

use crate::model::{ArgType, ClassId, MethodId};
use parking_lot::RwLock;
use std::fmt;

#[derive(Debug)]
pub struct MethodNode {
    id: MethodId,
    parent: ClassId,
    name: String,
    arg_types: Vec<ArgType>,
    return_type: ArgType,
    full_id: String,
    use_in: RwLock<Vec<MethodId>>,
}

impl MethodNode {
    pub(crate) fn new(
        id: MethodId,
        parent: ClassId,
        name: String,
        arg_types: Vec<ArgType>,
        return_type: ArgType,
        full_id: String,
    ) -> Self {
        Self {
            id,
            parent,
            name,
            arg_types,
            return_type,
            full_id,
            use_in: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> MethodId {
        self.id
    }

    pub fn parent_class(&self) -> ClassId {
        self.parent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg_types(&self) -> &[ArgType] {
        &self.arg_types
    }

    pub fn return_type(&self) -> &ArgType {
        &self.return_type
    }

    /// `pkg.Cls.name(args):ret`
    pub fn full_id(&self) -> &str {
        &self.full_id
    }

    pub fn use_in(&self) -> Vec<MethodId> {
        self.use_in.read().clone()
    }

    pub fn set_use_in(&self, use_in: Vec<MethodId>) {
        *self.use_in.write() = use_in;
    }
}

impl fmt::Display for MethodNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_id)
    }
}
