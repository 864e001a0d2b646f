use serde_json::Value;

use crate::error::ConsolidationError;
use crate::types::{CandidateDocument, PolicyDocument};

/// Name of the field wrapping documents in function-calling responses.
pub const POLICY_DOCUMENTS_FIELD: &str = "policyDocuments";

/// Parse producer JSON into candidate documents.
///
/// Accepts a single document object, an array of documents, or an envelope
/// of the form `{"policyDocuments": [...]}`. The documents are not
/// normalized here; malformed statements are reported by the engine.
///
/// Example:
/// ```rust
/// use policy_forge_core::documents_from_str;
/// let text = r#"{"policyDocuments": [
///     {"Version": "2012-10-17", "Statement": [
///         {"Effect": "Allow", "Action": "s3:GetObject", "Resource": "*"}
///     ]}
/// ]}"#;
/// let documents = documents_from_str(text).unwrap();
/// assert_eq!(documents.len(), 1);
/// ```
pub fn documents_from_str(text: &str) -> Result<Vec<CandidateDocument>, ConsolidationError> {
    let mut payload: Value = serde_json::from_str(text)?;
    let documents = match payload.as_object_mut() {
        Some(object) if object.contains_key(POLICY_DOCUMENTS_FIELD) => {
            if object.len() > 1 {
                return Err(ConsolidationError::ParseError(format!(
                    "unexpected fields next to `{POLICY_DOCUMENTS_FIELD}`"
                )));
            }
            let inner = object.remove(POLICY_DOCUMENTS_FIELD).unwrap_or(Value::Null);
            serde_json::from_value(inner)?
        }
        Some(_) => vec![serde_json::from_value(payload)?],
        None => serde_json::from_value(payload)?,
    };
    Ok(documents)
}

/// Serialize consolidated documents as a pretty-printed JSON array.
pub fn documents_to_string(documents: &[PolicyDocument]) -> Result<String, ConsolidationError> {
    serde_json::to_string_pretty(documents)
        .map_err(|e| ConsolidationError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    const STATEMENT: &str = r#"{"Effect":"Allow","Action":"s3:GetObject","Resource":"*"}"#;

    fn document() -> String {
        format!(r#"{{"Version":"2012-10-17","Statement":[{STATEMENT}]}}"#)
    }

    #[test]
    fn test_single_document() {
        let documents = documents_from_str(&document()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].version.as_deref(), Some("2012-10-17"));
    }

    #[test]
    fn test_document_array() {
        let text = format!("[{},{}]", document(), document());
        assert_eq!(documents_from_str(&text).unwrap().len(), 2);
    }

    #[test]
    fn test_envelope() {
        let text = format!(r#"{{"{POLICY_DOCUMENTS_FIELD}":[{},{},{}]}}"#, document(), document(), document());
        assert_eq!(documents_from_str(&text).unwrap().len(), 3);
    }

    #[test]
    fn test_empty_envelope() {
        assert!(documents_from_str(r#"{"policyDocuments":[]}"#).unwrap().is_empty());
    }

    #[parameterized(
        not_json = { "Version: 2012-10-17" },
        number = { "42" },
        string = { r#""policy""# },
        truncated = { r#"{"Version":"2012-10-17","Statement":["# },
        envelope_not_a_list = { r#"{"policyDocuments":{}}"# },
        envelope_with_extras = { r#"{"policyDocuments":[],"note":"x"}"# },
    )]
    fn test_unparseable_input(text: &str) {
        assert!(matches!(
            documents_from_str(text),
            Err(ConsolidationError::ParseError(_))
        ));
    }

    #[parameterized(
        misspelled_statement_in_array = {
            r#"[{"Version":"2012-10-17","Statements":[{"Effect":"Allow","Action":"s3:GetObject","Resource":"*"}]}]"#,
            "Statements",
        },
        misspelled_statement = {
            r#"{"Version":"2012-10-17","statements":[]}"#,
            "statements",
        },
        bad_action_inside_envelope = {
            r#"{"policyDocuments":[{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Action":5,"Resource":"*"}]}]}"#,
            "did not match any variant",
        },
        unknown_envelope_key = {
            r#"{"policy_documents":[]}"#,
            "policy_documents",
        },
    )]
    fn test_malformed_payload_reports_its_cause(text: &str, cause: &str) {
        match documents_from_str(text) {
            Err(ConsolidationError::ParseError(message)) => {
                assert!(message.contains(cause), "{message}");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_statement_parses_but_does_not_normalize() {
        let documents = documents_from_str(r#"{"Version":"2012-10-17"}"#).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(
            documents[0].clone().normalize(0).unwrap_err(),
            ConsolidationError::MalformedDocument {
                document: 0,
                reason: "missing Statement".to_string(),
            }
        );
    }

    #[test]
    fn test_documents_to_string_is_an_array() {
        let documents: Vec<PolicyDocument> = documents_from_str(&document())
            .unwrap()
            .into_iter()
            .map(|d| d.normalize(0).unwrap())
            .collect();
        let text = documents_to_string(&documents).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["Statement"][0]["Action"][0], "s3:GetObject");
    }
}
