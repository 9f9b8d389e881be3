// Tue Jan 20 2026 - Alex

use crate::model::ArgType;
use serde::{Deserialize, Serialize};

/// Declaration of a class as handed over by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub args: Vec<ArgType>,
    #[serde(rename = "return", default = "void_type")]
    pub return_type: ArgType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: ArgType,
}

fn void_type() -> ArgType {
    ArgType::Primitive(crate::model::PrimitiveType::Void)
}

impl ClassDecl {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            outer: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_outer(mut self, outer: &str) -> Self {
        self.outer = Some(outer.to_string());
        self
    }

    pub fn with_field(mut self, name: &str, field_type: ArgType) -> Self {
        self.fields.push(FieldDecl {
            name: name.to_string(),
            field_type,
        });
        self
    }

    pub fn with_method(mut self, name: &str, args: Vec<ArgType>, return_type: ArgType) -> Self {
        self.methods.push(MethodDecl {
            name: name.to_string(),
            args,
            return_type,
        });
        self
    }
}

impl MethodDecl {
    /// `name(arg1, arg2):ret`, unique within the declaring class.
    pub fn short_id(&self) -> String {
        method_short_id(&self.name, &self.args, &self.return_type)
    }
}

pub(crate) fn method_short_id(name: &str, args: &[ArgType], return_type: &ArgType) -> String {
    let args = args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
    format!("{}({}):{}", name, args, return_type)
}
