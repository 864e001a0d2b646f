use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::narrowing::KeepWildcard;
use crate::types::{CandidateStatement, Effect, Statement};
use yare::parameterized;


const VERSION: &str = "2012-10-17";

const PRODUCER_RESPONSE: &str = r#"
{
  "policyDocuments": [
    {
      "Version": "2012-10-17",
      "Id": "snippet-1",
      "Statement": [
        { "Sid": "ReadObjects", "Effect": "Allow", "Action": "s3:GetObject", "Resource": "*" },
        { "Effect": "Allow", "Action": ["dynamodb:GetItem", "dynamodb:Query"], "Resource": "arn:aws:dynamodb:us-east-1:123456789012:table/Orders" }
      ]
    },
    {
      "Version": "2012-10-17",
      "Id": "snippet-2",
      "Statement": [
        { "Sid": "WriteObjects", "Effect": "Allow", "Action": ["s3:PutObject", "s3:GetObject"], "Resource": ["arn:aws:s3:::uploads/*"] },
        { "Effect": "Deny", "Action": "s3:DeleteObject", "Resource": "*" }
      ]
    }
  ]
}
"#;

fn document(statements: Vec<CandidateStatement>) -> CandidateDocument {
    CandidateDocument::new(VERSION, statements)
}

fn allow<A, R>(action: A, resource: R) -> CandidateStatement
where
    A: Into<crate::types::StringOrList>,
    R: Into<crate::types::StringOrList>,
{
    CandidateStatement::new(Effect::Allow, action, resource)
}

fn only_statement(document: &PolicyDocument) -> &Statement {
    assert_eq!(document.statements().len(), 1, "one statement per output document");
    &document.statements()[0]
}

include!("scenarios.rs");
