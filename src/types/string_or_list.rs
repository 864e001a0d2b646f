//! The scalar-or-list wire shape of `Action` and `Resource`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single string or a list of strings, as producers are allowed to emit either.
///
/// This type only exists at the ingestion boundary. Normalization turns it
/// into a plain `Vec<String>` so nothing downstream has to inspect the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// Flatten into an ordered list; a scalar becomes a list of one.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringOrList::One(value) => vec![value],
            StringOrList::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StringOrList::One(_) => 1,
            StringOrList::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        StringOrList::One(value.to_string())
    }
}

impl From<String> for StringOrList {
    fn from(value: String) -> Self {
        StringOrList::One(value)
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(values: Vec<String>) -> Self {
        StringOrList::Many(values)
    }
}

impl From<Vec<&str>> for StringOrList {
    fn from(values: Vec<&str>) -> Self {
        StringOrList::Many(values.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        scalar = { r#""s3:GetObject""#, vec!["s3:GetObject"] },
        single_element_list = { r#"["s3:GetObject"]"#, vec!["s3:GetObject"] },
        list = { r#"["s3:GetObject","s3:PutObject"]"#, vec!["s3:GetObject", "s3:PutObject"] },
        empty_list = { "[]", vec![] },
    )]
    fn test_deserialize_into_vec(json: &str, expected: Vec<&str>) {
        let value: StringOrList = serde_json::from_str(json).unwrap();
        assert_eq!(value.len(), expected.len());
        assert_eq!(value.into_vec(), expected);
    }

    #[parameterized(
        number = { "42" },
        object = { r#"{"a":"b"}"# },
        mixed_list = { r#"["a", 1]"# },
    )]
    fn test_deserialize_rejects_other_shapes(json: &str) {
        assert!(serde_json::from_str::<StringOrList>(json).is_err());
    }

    #[test]
    fn test_scalar_serializes_as_scalar() {
        let value = StringOrList::from("*");
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""*""#);
    }
}
