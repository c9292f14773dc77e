use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnNull};

/// Success wrapper used by every endpoint: `{"response": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub response: T,
}

/// Error body returned alongside any non-200 status.
///
/// Only a JSON object is accepted; arrays and scalars are decode errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ErrorEnvelope {
    pub code: i64,
    pub message: String,
}

#[serde_as]
#[derive(Default, Deserialize)]
#[serde(default)]
struct EnvelopeFields {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    code: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    message: String,
}

impl<'de> Deserialize<'de> for ErrorEnvelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let fields =
            EnvelopeFields::deserialize(Value::Object(object)).map_err(serde::de::Error::custom)?;
        Ok(Self {
            code: fields.code,
            message: fields.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_reads_object() {
        let env: ErrorEnvelope =
            serde_json::from_str(r#"{"code":9,"message":"boom","extra":1}"#).unwrap();
        assert_eq!(env.code, 9);
        assert_eq!(env.message, "boom");
    }

    #[test]
    fn envelope_rejects_array_form() {
        assert!(serde_json::from_str::<ErrorEnvelope>(r#"[9,"boom"]"#).is_err());
        assert!(serde_json::from_str::<ErrorEnvelope>("42").is_err());
    }

    #[test]
    fn envelope_null_fields_take_defaults() {
        let env: ErrorEnvelope = serde_json::from_str(r#"{"code":null,"message":null}"#).unwrap();
        assert_eq!(env.code, 0);
        assert_eq!(env.message, "");
    }
}
