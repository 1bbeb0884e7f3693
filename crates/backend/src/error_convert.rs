use shared_types::AppError;

/// Convert a reqwest::Error into an AppError.
///
/// Errors without a status never reached the backend and are reported as
/// `Network`; body decoding problems become `Decode`.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        return AppError::decode(err.to_string());
    }
    match err.status() {
        Some(status) => AppError::from_status(status.as_u16(), err.to_string()),
        None => AppError::network(err.to_string()),
    }
}

/// Build an AppError from a non-2xx response body.
///
/// The REST layer reports `{"message": ...}`, the auth layer uses `msg`,
/// `error_description` or `error`. Anything else falls back to the raw body.
pub fn error_from_body(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("Request failed with status {status}")
            } else {
                trimmed.to_string()
            }
        });
    AppError::from_status(status, message)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}
