//! Policy statements, as produced upstream and after normalization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ConsolidationError;

use super::effect::Effect;
use super::string_or_list::StringOrList;

/// A statement exactly as a producer emitted it.
///
/// Every field is optional so a malformed statement still deserializes and
/// can be rejected with a [`ConsolidationError::MalformedStatement`] that
/// says what is wrong, instead of an opaque serde error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CandidateStatement {
    #[serde(rename = "Sid", skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(rename = "Effect", skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<StringOrList>,
    #[serde(rename = "Resource", skip_serializing_if = "Option::is_none")]
    pub resource: Option<StringOrList>,
}

impl CandidateStatement {
    /// Convenience constructor for a well-formed statement.
    pub fn new<A, R>(effect: Effect, action: A, resource: R) -> Self
    where
        A: Into<StringOrList>,
        R: Into<StringOrList>,
    {
        CandidateStatement {
            sid: None,
            effect: Some(effect.to_string()),
            action: Some(action.into()),
            resource: Some(resource.into()),
        }
    }

    pub fn with_sid<S: Into<String>>(mut self, sid: S) -> Self {
        self.sid = Some(sid.into());
        self
    }

    /// Check the statement and turn it into its fixed shape.
    ///
    /// `document` and `statement` are positions used only for error reporting.
    pub fn normalize(
        self,
        document: usize,
        statement: usize,
    ) -> Result<Statement, ConsolidationError> {
        let malformed = |reason: String| ConsolidationError::statement(document, statement, reason);

        let effect = match self.effect {
            None => return Err(malformed("missing Effect".to_string())),
            Some(raw) => Effect::from_str(&raw)
                .map_err(|_| malformed(format!("unrecognized Effect '{raw}'")))?,
        };

        let action = required_values("Action", self.action).map_err(malformed)?;
        let resource = required_values("Resource", self.resource).map_err(malformed)?;

        Ok(Statement {
            sid: self.sid,
            effect,
            action,
            resource,
        })
    }
}

fn required_values(field: &str, values: Option<StringOrList>) -> Result<Vec<String>, String> {
    let values = values.ok_or_else(|| format!("missing {field}"))?.into_vec();
    if values.is_empty() {
        return Err(format!("empty {field} list"));
    }
    if values.iter().any(String::is_empty) {
        return Err(format!("empty string in {field}"));
    }
    Ok(values)
}

/// A normalized statement: a known effect and non-empty action and resource lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "CandidateStatement")]
pub struct Statement {
    #[serde(rename = "Sid", skip_serializing_if = "Option::is_none")]
    sid: Option<String>,
    #[serde(rename = "Effect")]
    effect: Effect,
    #[serde(rename = "Action")]
    action: Vec<String>,
    #[serde(rename = "Resource")]
    resource: Vec<String>,
}

impl Statement {
    /// Assemble a statement from parts the caller has already checked.
    pub(crate) fn from_parts(
        sid: Option<String>,
        effect: Effect,
        action: Vec<String>,
        resource: Vec<String>,
    ) -> Self {
        Statement {
            sid,
            effect,
            action,
            resource,
        }
    }

    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn actions(&self) -> &[String] {
        &self.action
    }

    pub fn resources(&self) -> &[String] {
        &self.resource
    }

    /// Re-check the invariants that normalization establishes.
    pub fn validate(&self) -> Result<(), ConsolidationError> {
        if self.action.is_empty() || self.action.iter().any(String::is_empty) {
            return Err(ConsolidationError::InvalidOutput(format!(
                "statement {:?} has an empty action",
                self.sid
            )));
        }
        if self.resource.is_empty() || self.resource.iter().any(String::is_empty) {
            return Err(ConsolidationError::InvalidOutput(format!(
                "statement {:?} has an empty resource",
                self.sid
            )));
        }
        Ok(())
    }
}

/// Used when deserializing a `Statement` on its own.
///
/// A lone statement has no enclosing document, so errors report position
/// `0` in document `0`. Use [`CandidateStatement::normalize`] when the
/// statement's position is known.
impl TryFrom<CandidateStatement> for Statement {
    type Error = ConsolidationError;

    fn try_from(candidate: CandidateStatement) -> Result<Self, Self::Error> {
        candidate.normalize(0, 0)
    }
}

impl From<Statement> for CandidateStatement {
    fn from(statement: Statement) -> Self {
        CandidateStatement {
            sid: statement.sid,
            effect: Some(statement.effect.to_string()),
            action: Some(StringOrList::Many(statement.action)),
            resource: Some(StringOrList::Many(statement.resource)),
        }
    }
}
