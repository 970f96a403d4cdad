/*
[INPUT]:  Raw private API responses `{"success": 0|1, "return"|"error": ...}`
[OUTPUT]: Success payloads or typed exchange errors
[POS]:    HTTP layer - private API response envelope
[UPDATE]: When the envelope format changes
*/

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::http::client::{decode_value, parse_json};
use crate::http::transport::HttpResponse;
use crate::http::{Result, YobitError};

const SUCCESS_FIELD: &str = "success";
const RETURN_FIELD: &str = "return";
const ERROR_FIELD: &str = "error";

/// Decoded private API envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(Value),
    Failure(String),
}

impl Envelope {
    /// Decode a transport response into an envelope
    pub fn from_response(response: &HttpResponse) -> Result<Self> {
        let value = parse_json(response)?;
        Self::from_value(response.status, value)
    }

    pub fn from_value(status: u16, mut value: Value) -> Result<Self> {
        let success = value.get(SUCCESS_FIELD).and_then(flag).ok_or_else(|| {
            YobitError::protocol(status, "response is missing the `success` envelope field")
        })?;

        if !success {
            return Ok(Envelope::Failure(error_message(&value)));
        }

        // `{"success":1}` without `return` is how the exchange encodes "nothing found"
        let payload = match value.get_mut(RETURN_FIELD).map(Value::take) {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(payload) => payload,
        };
        Ok(Envelope::Success(payload))
    }

    /// Error message of a failure envelope embedded in any JSON value
    pub fn failure_message(value: &Value) -> Option<String> {
        let success = value.get(SUCCESS_FIELD).and_then(flag)?;
        if success {
            return None;
        }
        Some(error_message(value))
    }

    /// Success payload decoded into `T`, or the server message as an exchange error
    pub fn into_result<T: DeserializeOwned>(self, status: u16) -> Result<T> {
        match self {
            Envelope::Success(payload) => decode_value(status, payload),
            Envelope::Failure(message) => Err(YobitError::Exchange { message }),
        }
    }
}

fn error_message(value: &Value) -> String {
    value
        .get(ERROR_FIELD)
        .and_then(Value::as_str)
        .unwrap_or("exchange reported failure without a message")
        .to_string()
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse::<i64>().ok().map(|n| n != 0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let envelope =
            Envelope::from_value(200, json!({"success": 1, "return": {"order_id": 7}})).unwrap();
        assert_eq!(envelope, Envelope::Success(json!({"order_id": 7})));
    }

    #[test]
    fn test_success_without_return_is_empty_object() {
        let envelope = Envelope::from_value(200, json!({"success": 1})).unwrap();
        assert_eq!(envelope, Envelope::Success(json!({})));
    }

    #[test]
    fn test_failure_carries_message_verbatim() {
        let envelope =
            Envelope::from_value(200, json!({"success": 0, "error": "invalid nonce"})).unwrap();
        let err = envelope.into_result::<Value>(200).expect_err("failure");
        assert_eq!(err.exchange_message(), Some("invalid nonce"));
    }

    #[test]
    fn test_missing_success_is_protocol_error() {
        let err = Envelope::from_value(200, json!({"return": {}})).expect_err("no flag");
        assert!(matches!(err, YobitError::Protocol { .. }));
    }

    #[test]
    fn test_non_json_body_is_protocol_error() {
        let response = HttpResponse::new(502, "<html>Bad gateway</html>");
        let err = Envelope::from_response(&response).expect_err("html");
        assert!(matches!(err, YobitError::Protocol { status: 502, .. }));
    }

    #[test]
    fn test_failure_message_ignores_plain_payloads() {
        assert_eq!(Envelope::failure_message(&json!({"btc_usd": {"last": 1}})), None);
        assert_eq!(Envelope::failure_message(&json!([1, 2])), None);
        assert_eq!(
            Envelope::failure_message(&json!({"success": "0", "error": "bad pair"})),
            Some("bad pair".to_string())
        );
    }
}
