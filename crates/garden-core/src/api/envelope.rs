//! The `{success, data | error}` envelope every endpoint answers with.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GardenError, Result};

/// Tagged response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed envelope carrying a server message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Unwrap the payload, turning a failure into `GardenError::DataFetch`.
    ///
    /// The server's own message is preferred; `fallback` is used when the
    /// server did not send one or sent an empty string.
    pub fn into_result(self, fallback: &str) -> Result<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(GardenError::data_fetch(fallback)),
            (false, _) => Err(GardenError::data_fetch(
                self.error
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }
}

/// Decode a raw JSON body into a typed payload.
///
/// A body that is not an envelope of `T` is reported as a fetch failure with
/// `fallback`, since the user can do nothing more useful with a decode error.
pub fn decode<T: DeserializeOwned>(body: Value, fallback: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_value(body).map_err(|e| {
        log::warn!("Malformed API response: {e}");
        GardenError::data_fetch(fallback)
    })?;
    envelope.into_result(fallback)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_success_payload() {
        let value: Vec<u32> = decode(json!({"success": true, "data": [1, 2]}), "nope").unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_failure_prefers_server_message() {
        let err = decode::<Vec<u32>>(json!({"success": false, "error": "Bad zip"}), "fallback")
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad zip");

        let err = decode::<Vec<u32>>(json!({"success": false}), "fallback").unwrap_err();
        assert_eq!(err.to_string(), "fallback");

        let err = decode::<Vec<u32>>(json!({"success": false, "error": ""}), "fallback")
            .unwrap_err();
        assert_eq!(err.to_string(), "fallback");
    }

    #[test]
    fn test_malformed_body_is_fetch_error() {
        let err = decode::<Vec<u32>>(json!("<html>"), "fallback").unwrap_err();
        assert!(matches!(err, GardenError::DataFetch { .. }));
    }

    #[test]
    fn test_payload_without_default() {
        use crate::models::GardenEntry;

        let entry: GardenEntry = decode(
            json!({"success": true, "data": {"id": 4, "crop": "Kale", "planting_date": "2024-03-01"}}),
            "fallback",
        )
        .unwrap();
        assert_eq!(entry.id, 4);

        let err = decode::<GardenEntry>(json!({"success": true}), "fallback").unwrap_err();
        assert_eq!(err.to_string(), "fallback");
    }
}
