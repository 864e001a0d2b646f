//! Policy documents, as produced upstream and after normalization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ConsolidationError;

use super::statement::{CandidateStatement, Statement};

/// A policy document exactly as a producer emitted it.
///
/// Only `Version`, `Id` and `Statement` are accepted at this level, so a
/// misspelled key fails to parse instead of reading as an empty document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CandidateDocument {
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Statement", skip_serializing_if = "Option::is_none")]
    pub statement: Option<Vec<CandidateStatement>>,
}

impl CandidateDocument {
    pub fn new<S: Into<String>>(version: S, statement: Vec<CandidateStatement>) -> Self {
        CandidateDocument {
            version: Some(version.into()),
            id: None,
            statement: Some(statement),
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Normalize every statement; the first malformed one rejects the document.
    ///
    /// `document` is the position of this document in its batch, used for
    /// error reporting.
    pub fn normalize(self, document: usize) -> Result<PolicyDocument, ConsolidationError> {
        let version = self
            .version
            .ok_or_else(|| ConsolidationError::MalformedDocument {
                document,
                reason: "missing Version".to_string(),
            })?;

        let statement = self
            .statement
            .ok_or_else(|| ConsolidationError::MalformedDocument {
                document,
                reason: "missing Statement".to_string(),
            })?
            .into_iter()
            .enumerate()
            .map(|(index, candidate)| candidate.normalize(document, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PolicyDocument {
            version,
            id: self.id,
            statement,
        })
    }
}

/// A normalized policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "CandidateDocument")]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    version: String,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "Statement")]
    statement: Vec<Statement>,
}

impl PolicyDocument {
    pub(crate) fn from_parts(version: String, id: Option<String>, statement: Vec<Statement>) -> Self {
        PolicyDocument {
            version,
            id,
            statement,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statement
    }

    /// Output check run by callers before handing documents on.
    pub fn validate(&self) -> Result<(), ConsolidationError> {
        if self.statement.is_empty() {
            return Err(ConsolidationError::InvalidOutput(format!(
                "document {:?} has no statements",
                self.id
            )));
        }
        self.statement.iter().try_for_each(Statement::validate)
    }
}

/// Used when deserializing a `PolicyDocument` directly.
///
/// The document's position in any surrounding batch is unknown here, so
/// errors report document `0`; statement positions within the document are
/// exact. Use [`CandidateDocument::normalize`] when the position matters.
impl TryFrom<CandidateDocument> for PolicyDocument {
    type Error = ConsolidationError;

    fn try_from(candidate: CandidateDocument) -> Result<Self, Self::Error> {
        candidate.normalize(0)
    }
}

impl From<PolicyDocument> for CandidateDocument {
    fn from(document: PolicyDocument) -> Self {
        CandidateDocument {
            version: Some(document.version),
            id: document.id,
            statement: Some(
                document
                    .statement
                    .into_iter()
                    .map(CandidateStatement::from)
                    .collect(),
            ),
        }
    }
}
