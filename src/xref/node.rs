// Tue Jan 15 2026 - Alex

use crate::model::{ClassId, FieldId, MethodId, RootNode};
use std::fmt;

/// Code location that owns a reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeNode {
    Class(ClassId),
    Method(MethodId),
    Field(FieldId),
    Package(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Class,
    Method,
    Field,
    Package,
}

impl CodeNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Class(_) => NodeKind::Class,
            Self::Method(_) => NodeKind::Method,
            Self::Field(_) => NodeKind::Field,
            Self::Package(_) => NodeKind::Package,
        }
    }

    /// Class the node is declared in; the class itself for class nodes.
    pub fn declaring_class(&self, root: &RootNode) -> Option<ClassId> {
        match self {
            Self::Class(cls) => Some(*cls),
            Self::Method(mth) => Some(root.method(*mth).parent_class()),
            Self::Field(fld) => Some(root.field(*fld).parent_class()),
            Self::Package(_) => None,
        }
    }

    pub fn display<'a>(&'a self, root: &'a RootNode) -> CodeNodeDisplay<'a> {
        CodeNodeDisplay { node: self, root }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Class => "class",
            Self::Method => "method",
            Self::Field => "field",
            Self::Package => "package",
        };
        write!(f, "{}", name)
    }
}

pub struct CodeNodeDisplay<'a> {
    node: &'a CodeNode,
    root: &'a RootNode,
}

impl fmt::Display for CodeNodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            CodeNode::Class(cls) => write!(f, "{}", self.root.class(*cls)),
            CodeNode::Method(mth) => write!(f, "{}", self.root.method(*mth)),
            CodeNode::Field(fld) => write!(f, "{}", self.root.field(*fld)),
            CodeNode::Package(name) => write!(f, "package {}", name),
        }
    }
}
