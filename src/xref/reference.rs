// Tue Jan 13 2026 - Alex

use crate::model::{ArgType, FieldInfo, MethodId, ModelError, RootNode};
use crate::xref::CodeNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference reported by the code decoder, with entities named as in the
/// input program description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum XRef {
    ClassUse {
        from: NodeRef,
        #[serde(rename = "type")]
        use_type: ArgType,
    },
    MethodUse {
        from: MethodRef,
        target: MethodRef,
    },
    FieldUse {
        from: NodeRef,
        field: FieldInfo,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRef {
    Class(String),
    Method(MethodRef),
    Field(FieldInfo),
    Package(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    pub class: String,
    pub name: String,
    /// Needed only for overloaded names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<ArgType>>,
}

/// Reference with owner and target resolved against a `RootNode`.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<'r> {
    ClassUse { owner: CodeNode, use_type: &'r ArgType },
    MethodUse { mth: MethodId, use_mth: MethodId },
    FieldUse { owner: CodeNode, field: &'r FieldInfo },
}

impl XRef {
    pub fn resolve<'r>(&'r self, root: &RootNode) -> Result<Reference<'r>, ModelError> {
        match self {
            Self::ClassUse { from, use_type } => Ok(Reference::ClassUse {
                owner: from.resolve(root)?,
                use_type,
            }),
            Self::MethodUse { from, target } => Ok(Reference::MethodUse {
                mth: from.resolve(root)?,
                use_mth: target.resolve(root)?,
            }),
            Self::FieldUse { from, field } => Ok(Reference::FieldUse {
                owner: from.resolve(root)?,
                field,
            }),
        }
    }
}

impl NodeRef {
    pub fn resolve(&self, root: &RootNode) -> Result<CodeNode, ModelError> {
        match self {
            Self::Class(name) => root
                .class_by_name(name)
                .map(CodeNode::Class)
                .ok_or_else(|| ModelError::ClassNotFound(name.clone())),
            Self::Method(mth) => mth.resolve(root).map(CodeNode::Method),
            Self::Field(info) => root
                .resolve_field(info)
                .map(CodeNode::Field)
                .ok_or_else(|| ModelError::FieldNotFound(info.to_string())),
            Self::Package(name) => Ok(CodeNode::Package(name.clone())),
        }
    }
}

impl MethodRef {
    pub fn new(class: &str, name: &str) -> Self {
        Self {
            class: class.to_string(),
            name: name.to_string(),
            args: None,
        }
    }

    pub fn with_args(mut self, args: Vec<ArgType>) -> Self {
        self.args = Some(args);
        self
    }

    pub fn resolve(&self, root: &RootNode) -> Result<MethodId, ModelError> {
        root.find_method(&self.class, &self.name, self.args.as_deref())
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class, self.name)
    }
}

impl fmt::Display for XRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassUse { from, use_type } => write!(f, "{:?} uses type {}", from, use_type),
            Self::MethodUse { from, target } => write!(f, "{} calls {}", from, target),
            Self::FieldUse { from, field } => write!(f, "{:?} uses field {}", from, field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{obj, sample_program};

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"kind": "class_use", "from": {"class": "a.A"}, "type": {"object": {"name": "c.C"}}},
            {"kind": "method_use", "from": {"class": "a.A", "name": "m1"},
             "target": {"class": "b.B", "name": "m2", "args": [{"object": {"name": "b.P"}}]}},
            {"kind": "field_use", "from": {"package": "a"}, "field": {"class": "b.B", "name": "items"}}
        ]"#;
        let refs: Vec<XRef> = serde_json::from_str(json).unwrap();
        assert_eq!(refs.len(), 3);
        assert_eq!(
            refs[1],
            XRef::MethodUse {
                from: MethodRef::new("a.A", "m1"),
                target: MethodRef::new("b.B", "m2").with_args(vec![obj("b.P")]),
            }
        );
    }

    #[test]
    fn test_resolve() {
        let fx = sample_program();
        let call = XRef::MethodUse {
            from: MethodRef::new("a.A", "m1"),
            target: MethodRef::new("b.B", "m2"),
        };
        assert_eq!(
            call.resolve(&fx.root).unwrap(),
            Reference::MethodUse {
                mth: fx.mth("a.A", "m1"),
                use_mth: fx.mth("b.B", "m2"),
            }
        );

        let external = XRef::MethodUse {
            from: MethodRef::new("a.A", "m1"),
            target: MethodRef::new("java.lang.String", "length"),
        };
        assert!(matches!(external.resolve(&fx.root), Err(ModelError::ClassNotFound(_))));

        let pkg = XRef::ClassUse {
            from: NodeRef::Package("a".to_string()),
            use_type: obj("c.C"),
        };
        assert!(matches!(
            pkg.resolve(&fx.root),
            Ok(Reference::ClassUse { owner: CodeNode::Package(_), .. })
        ));
    }
}
