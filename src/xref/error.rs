// Tue Jan 13 2026 - Alex

use crate::model::ModelError;
use crate::xref::NodeKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XRefError {
    #[error("Unsupported node kind for usage owner: {0}")]
    UnsupportedNodeKind(NodeKind),
    #[error("Usage snapshot does not match the program: {0}")]
    StaleSnapshot(String),
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
