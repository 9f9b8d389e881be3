// Tue Jan 20 2026 - Alex

pub mod arg_type;
pub mod class;
pub mod clsp;
pub mod decl;
pub mod error;
pub mod field;
pub mod ids;
pub mod loader;
pub mod method;
pub mod root;

#[cfg(test)]
pub(crate) mod testing;

pub use arg_type::{ArgType, PrimitiveType, WildcardBound, OBJECT, OBJECT_NAME};
pub use class::{ClassNode, ClassUsage};
pub use clsp::{Classpath, ClspClass, ClspSource};
pub use decl::{ClassDecl, FieldDecl, MethodDecl};
pub use error::ModelError;
pub use field::{FieldInfo, FieldNode};
pub use ids::{ClassId, FieldId, MethodId};
pub use loader::ProgramDescription;
pub use method::MethodNode;
pub use root::RootNode;
