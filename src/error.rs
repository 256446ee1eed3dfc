use std::path::PathBuf;

use thiserror::Error;

use crate::model::Source;

/// Failure of a single remote call. The pipeline skips the endpoint and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response body is not JSON: {0}")]
    Body(#[from] serde_json::Error),
}

/// Why one candidate record was discarded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("title {0:?} is shorter than 3 characters")]
    TitleTooShort(String),
    #[error("title {0:?} repeats the problem code")]
    TitleIsCode(String),
    #[error("unknown difficulty level {0}")]
    UnknownLevel(i64),
}

/// Unrecovered failure of a whole source run. Nothing is written when one occurs.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{site}: unexpected payload: {reason}")]
    Payload { site: Source, reason: String },
    #[error("{site}: no endpoint could be reached")]
    Unreachable { site: Source },
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl PipelineError {
    pub fn payload(site: Source, reason: impl Into<String>) -> Self {
        PipelineError::Payload {
            site,
            reason: reason.into(),
        }
    }
}
