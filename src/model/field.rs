// Tue Jan 20 2026 - Alex

use crate::model::{ArgType, ClassId, FieldId, MethodId};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field reference as it appears in code, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldInfo {
    #[serde(rename = "class")]
    pub declaring_class: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<ArgType>,
}

impl FieldInfo {
    pub fn new(declaring_class: &str, name: &str, field_type: ArgType) -> Self {
        Self {
            declaring_class: declaring_class.to_string(),
            name: name.to_string(),
            field_type: Some(field_type),
        }
    }
}

impl fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_class, self.name)?;
        if let Some(ty) = &self.field_type {
            write!(f, ":{}", ty)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FieldNode {
    id: FieldId,
    parent: ClassId,
    name: String,
    field_type: ArgType,
    full_id: String,
    use_in: RwLock<Vec<MethodId>>,
}

impl FieldNode {
    pub(crate) fn new(id: FieldId, parent: ClassId, name: String, field_type: ArgType, full_id: String) -> Self {
        Self {
            id,
            parent,
            name,
            field_type,
            full_id,
            use_in: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn parent_class(&self) -> ClassId {
        self.parent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &ArgType {
        &self.field_type
    }

    /// `pkg.Cls.name:type`
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

impl fmt::Display for FieldNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_id)
    }
}
