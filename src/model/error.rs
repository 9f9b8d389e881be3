// Tue Jan 20 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Duplicate class: {0}")]
    DuplicateClass(String),
    #[error("Duplicate method: {0}")]
    DuplicateMethod(String),
    #[error("Duplicate field: {0}")]
    DuplicateField(String),
    #[error("Unknown outer class {outer} for {class}")]
    UnknownOuterClass { class: String, outer: String },
    #[error("Outer class cycle through {0}")]
    OuterCycle(String),
    #[error("Class not found: {0}")]
    ClassNotFound(String),
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Ambiguous method reference {0}, argument types required")]
    AmbiguousMethod(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
