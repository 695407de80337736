use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Key carrying the diagnosis status in a push payload.
pub const STATUS_KEY: &str = "status";
/// The only status value acted upon. Matching is case-sensitive.
pub const POTENTIAL_STATUS: &str = "Potential";
/// Key under which a refreshed push token is handed to the listener.
pub const PUSH_TOKEN_KEY: &str = "pushToken";

#[derive(Debug, Error)]
pub enum InvalidPayloadError {
    #[error("push payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("push payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inbound push message: a flat map from string keys to JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PushPayload(BTreeMap<String, Value>);

impl PushPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from string pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }

    /// Synthetic payload announcing a refreshed push token.
    pub fn push_token(token: impl Into<String>) -> Self {
        Self::from_pairs([(PUSH_TOKEN_KEY, token.into())])
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidPayloadError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::try_from(value)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.get_str(STATUS_KEY)
    }

    /// Whether this payload reports a potential exposure.
    pub fn is_potential_diagnosis(&self) -> bool {
        self.status() == Some(POTENTIAL_STATUS)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for PushPayload {
    type Error = InvalidPayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            Value::Null => Err(InvalidPayloadError::NotAnObject("null")),
            Value::Bool(_) => Err(InvalidPayloadError::NotAnObject("a boolean")),
            Value::Number(_) => Err(InvalidPayloadError::NotAnObject("a number")),
            Value::String(_) => Err(InvalidPayloadError::NotAnObject("a string")),
            Value::Array(_) => Err(InvalidPayloadError::NotAnObject("an array")),
        }
    }
}
