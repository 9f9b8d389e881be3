// Tue Jan 13 2026 - Alex

//! Usage and dependency tables for the decompiled program.
//!
//! References found in method bodies are recorded into a [`UsageInfo`]
//! (directly, through [`SharedUsageInfo`] or via [`UsageAnalyzer`] for
//! name-based [`XRef`] records), then finalized onto the model or streamed to
//! a [`UsageInfoVisitor`] such as the [`SnapshotCollector`].

pub mod analyzer;
pub mod error;
pub mod node;
pub mod reference;
pub mod shared;
pub mod stats;
pub mod store;
pub mod types;
pub mod usage;
pub mod use_set;
pub mod visitor;

pub use analyzer::UsageAnalyzer;
pub use error::XRefError;
pub use node::{CodeNode, NodeKind};
pub use reference::{MethodRef, NodeRef, Reference, XRef};
pub use shared::SharedUsageInfo;
pub use stats::{RelationStats, UnusedEntities, UsageStats};
pub use store::{SnapshotCollector, UsageSnapshot};
pub use types::{process_type, BuildHints};
pub use usage::UsageInfo;
pub use use_set::UseSet;
pub use visitor::UsageInfoVisitor;
