//! Response resolution: the one place raw responses become values or errors.

use crate::error::ApiError;
use crate::transport::RawResponse;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Decode a successful response into `T`, or describe why it failed.
///
/// Non-2xx statuses become service errors carrying the status and the body
/// verbatim, without any decoding attempt. A 2xx body that is empty or does not
/// match `T` becomes a decode error with no status.
pub fn resolve<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ApiError> {
    let body = String::from_utf8_lossy(&raw.body).into_owned();

    if !raw.is_success() {
        warn!(status = raw.status, "API request failed");
        return Err(ApiError::service(raw.status, body));
    }

    if body.trim().is_empty() {
        warn!(status = raw.status, "empty response body");
        return Err(ApiError::decode("", Some(body)));
    }

    serde_json::from_str::<T>(&body).map_err(|e| {
        warn!(status = raw.status, error = %e, "failed to decode response body");
        ApiError::decode(e.to_string(), Some(body))
    })
}
