// Tue Jan 20 2026 - Alex

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OBJECT_NAME: &str = "java.lang.Object";

/// Plain `java.lang.Object`. Carries no class worth recording.
pub static OBJECT: Lazy<ArgType> = Lazy::new(|| ArgType::object(OBJECT_NAME));

/// Structured type descriptor as seen in decompiled signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgType {
    Primitive(PrimitiveType),
    Object {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        generics: Vec<ArgType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        outer: Option<Box<ArgType>>,
    },
    TypeVariable {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        extends: Vec<ArgType>,
    },
    Wildcard {
        bound: WildcardBound,
        #[serde(rename = "type")]
        inner: Box<ArgType>,
    },
    Array(Box<ArgType>),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Float,
    Long,
    Double,
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WildcardBound {
    Unbound,
    Extends,
    Super,
}

impl ArgType {
    pub fn object(name: &str) -> Self {
        Self::Object {
            name: name.to_string(),
            generics: Vec::new(),
            outer: None,
        }
    }

    pub fn generic(name: &str, generics: Vec<ArgType>) -> Self {
        Self::Object {
            name: name.to_string(),
            generics,
            outer: None,
        }
    }

    /// Nested generic type, e.g. `Outer<T>.Inner<V>`.
    pub fn generic_inner(outer: ArgType, name: &str, generics: Vec<ArgType>) -> Self {
        Self::Object {
            name: name.to_string(),
            generics,
            outer: Some(Box::new(outer)),
        }
    }

    pub fn type_var(name: &str, extends: Vec<ArgType>) -> Self {
        Self::TypeVariable {
            name: name.to_string(),
            extends,
        }
    }

    pub fn wildcard(bound: WildcardBound, inner: ArgType) -> Self {
        Self::Wildcard {
            bound,
            inner: Box::new(inner),
        }
    }

    pub fn unbound_wildcard() -> Self {
        Self::wildcard(WildcardBound::Unbound, OBJECT.clone())
    }

    pub fn array(elem: ArgType) -> Self {
        Self::Array(Box::new(elem))
    }

    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object { .. } | Self::TypeVariable { .. } | Self::Wildcard { .. })
    }

    pub fn is_unbounded_object(&self) -> bool {
        match self {
            Self::Object { name, generics, outer } => {
                name == OBJECT_NAME && generics.is_empty() && outer.is_none()
            }
            _ => false,
        }
    }

    /// Class name this type points at. Wildcards erase to `java.lang.Object`.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Self::Object { name, .. } | Self::TypeVariable { name, .. } => Some(name),
            Self::Wildcard { .. } => Some(OBJECT_NAME),
            _ => None,
        }
    }

    pub fn array_dimension(&self) -> usize {
        let mut dim = 0;
        let mut ty = self;
        while let Self::Array(elem) = ty {
            dim += 1;
            ty = elem;
        }
        dim
    }

    /// Element type with every array dimension stripped.
    pub fn array_root_element(&self) -> &ArgType {
        let mut ty = self;
        while let Self::Array(elem) = ty {
            ty = elem;
        }
        ty
    }

    pub fn generic_types(&self) -> &[ArgType] {
        match self {
            Self::Object { generics, .. } => generics,
            _ => &[],
        }
    }

    pub fn extend_types(&self) -> &[ArgType] {
        match self {
            Self::TypeVariable { extends, .. } => extends,
            _ => &[],
        }
    }

    pub fn wildcard_type(&self) -> Option<&ArgType> {
        match self {
            Self::Wildcard { inner, .. } => Some(inner),
            _ => None,
        }
    }

    pub fn outer_type(&self) -> Option<&ArgType> {
        match self {
            Self::Object { outer, .. } => outer.as_deref(),
            _ => None,
        }
    }
}

impl PrimitiveType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Float => "float",
            Self::Long => "long",
            Self::Double => "double",
            Self::Void => "void",
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[ArgType], sep: &str) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", ty)?;
    }
    Ok(())
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => write!(f, "{}", ty.name()),
            Self::Object { name, generics, outer } => {
                if let Some(outer) = outer {
                    write!(f, "{}.", outer)?;
                }
                write!(f, "{}", name)?;
                if !generics.is_empty() {
                    write!(f, "<")?;
                    write_list(f, generics, ", ")?;
                    write!(f, ">")?;
                }
                Ok(())
            }
            Self::TypeVariable { name, extends } => {
                write!(f, "{}", name)?;
                if !extends.is_empty() {
                    write!(f, " extends ")?;
                    write_list(f, extends, " & ")?;
                }
                Ok(())
            }
            Self::Wildcard { bound, inner } => match bound {
                WildcardBound::Unbound => write!(f, "?"),
                WildcardBound::Extends => write!(f, "? extends {}", inner),
                WildcardBound::Super => write!(f, "? super {}", inner),
            },
            Self::Array(elem) => write!(f, "{}[]", elem),
            Self::Unknown => write!(f, "?unknown"),
        }
    }
}
