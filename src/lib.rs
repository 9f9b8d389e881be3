// Tue Jan 15 2026 - Alex

pub mod config;
pub mod model;
pub mod utils;
pub mod xref;

pub use config::{ApplyMode, Config, ConfigError};
pub use model::{ModelError, ProgramDescription, RootNode};
pub use xref::{UsageAnalyzer, UsageInfo, UsageInfoVisitor, UsageSnapshot, XRefError};
