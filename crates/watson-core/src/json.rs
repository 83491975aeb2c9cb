use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::Result;

/// JSON conversion for every serde model
///
/// Absent optional fields are omitted on output, so a model survives
/// `from_json(to_json(x))` unchanged.
pub trait JsonModel: Serialize + DeserializeOwned {
    /// Compact JSON text
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON text
    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON value tree
    fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse from JSON text
    fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Convert from a JSON value tree
    fn from_json_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<T> JsonModel for T where T: Serialize + DeserializeOwned {}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<i64>,
    }

    #[test]
    fn omits_absent_fields() {
        let sample = Sample {
            name: "docs".to_owned(),
            limit: None,
        };

        assert_eq!(sample.to_json().unwrap(), r#"{"name":"docs"}"#);
    }

    #[test]
    fn reports_malformed_input() {
        let err = Sample::from_json(r#"{"limit": 3}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn value_conversion() {
        let value = serde_json::json!({"name": "docs", "limit": 4});
        let sample = Sample::from_json_value(value.clone()).unwrap();

        assert_eq!(sample.limit, Some(4));
        assert_eq!(sample.to_json_value().unwrap(), value);
    }
}
