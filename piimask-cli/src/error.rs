//! Error types for the batch pipeline.
//!
//! Only run-fatal failures surface here. Row-level problems (bad JSON, an
//! unreadable row) degrade in place inside the pipeline and never abort the
//! run.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read input {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write output {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
