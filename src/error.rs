use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsolidationError {
    #[error("malformed statement {statement} in document {document}: {reason}")]
    MalformedStatement {
        document: usize,
        statement: usize,
        reason: String,
    },

    #[error("malformed document {document}: {reason}")]
    MalformedDocument { document: usize, reason: String },

    #[error("failed to parse policy documents: {0}")]
    ParseError(String),

    #[error("failed to serialize policy documents: {0}")]
    SerializationError(String),

    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}

impl ConsolidationError {
    pub(crate) fn statement(document: usize, statement: usize, reason: impl Into<String>) -> Self {
        ConsolidationError::MalformedStatement {
            document,
            statement,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConsolidationError {
    fn from(err: serde_json::Error) -> Self {
        ConsolidationError::ParseError(err.to_string())
    }
}
