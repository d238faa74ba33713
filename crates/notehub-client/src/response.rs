//! Response validation shared by all operations.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{ServiceError, ServiceResult};
use crate::transport::RawResponse;

/// Decoded response body with the `status` object removed.
pub type Response = Map<String, Value>;

/// HTTP status the service answers with on every handled request.
const HTTP_OK: u16 = 200;

/// Validates a raw response and strips its `status` object.
///
/// Fails unless the status code is 200, the body is a JSON object, and its
/// `status.success` is `true`. A service-reported failure carries
/// `status.message`.
pub fn parse_response(raw: RawResponse) -> ServiceResult<Response> {
    if raw.status != HTTP_OK {
        warn!(status = raw.status, "note service returned non-200 response");
        return Err(ServiceError::http_status(raw.status));
    }

    let mut body = match serde_json::from_str::<Value>(&raw.body)? {
        Value::Object(map) => map,
        other => {
            return Err(ServiceError::new(format!(
                "expected a JSON object in response, got {}",
                json_kind(&other)
            )));
        }
    };

    let status = body
        .get("status")
        .ok_or_else(|| ServiceError::missing_key("status"))?;
    let success = status
        .get("success")
        .ok_or_else(|| ServiceError::missing_key("success"))?;

    if success != &Value::Bool(true) {
        let message = status
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| ServiceError::missing_key("message"))?;
        warn!(service_message = message, "note service reported failure");
        return Err(ServiceError::rejected(message));
    }

    body.remove("status");
    Ok(body)
}

/// Deserializes a validated response into one of the typed views.
pub fn into_typed<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
    Ok(serde_json::from_value(Value::Object(response))?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
