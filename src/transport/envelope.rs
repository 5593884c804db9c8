use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::value::RawValue;

use crate::domain::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upstream error {code:?}: {message}")]
    Api {
        code: Option<String>,
        message: String,
    },

    #[error("response has neither `result` nor `error`")]
    MissingResult,

    #[error("response contains invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("task {task_uuid} completed without `file_to_download`")]
    MissingDownloadLink { task_uuid: String },
}

#[derive(Debug, Deserialize)]
struct JsonEnvelope<'a> {
    #[serde(default, borrow)]
    result: Option<&'a RawValue>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    warnings: Vec<serde_json::Value>,
}

/// Decode `{ "result": J }` and map `J` into the domain type.
///
/// An `error` member wins over `result`: Unisender reports faults with HTTP 200.
pub fn decode_envelope<J, T, F>(json: &str, map: F) -> Result<ApiResponse<T>, TransportError>
where
    J: DeserializeOwned,
    F: FnOnce(J) -> Result<T, TransportError>,
{
    let envelope: JsonEnvelope<'_> = serde_json::from_str(json)?;

    if let Some(message) = envelope.error {
        let code = envelope.code.map(|code| match code {
            serde_json::Value::String(code) => code,
            other => other.to_string(),
        });
        return Err(TransportError::Api { code, message });
    }

    let raw = envelope.result.ok_or(TransportError::MissingResult)?;
    let parsed: J = serde_json::from_str(raw.get())?;

    Ok(ApiResponse {
        result: map(parsed)?,
        warnings: envelope.warnings,
    })
}

/// Pass the `result` payload through unchanged.
pub fn decode_value_response(json: &str) -> Result<ApiResponse<serde_json::Value>, TransportError> {
    decode_envelope(json, Ok)
}

/// For operations whose `result` carries nothing of interest (`{}` or `[]`).
pub fn decode_empty_response(json: &str) -> Result<ApiResponse<()>, TransportError> {
    decode_envelope::<IgnoredAny, _, _>(json, |_| Ok(()))
}
