//! The `{ success, data }` wrapper every admin API response uses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ApiResult};

/// Raw response envelope as sent by the backend.
///
/// `data` is only meaningful when `success` is true. Nothing in the backend
/// reports partial success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub success: bool,

    #[serde(default = "Option::default")]
    pub data: Option<T>,

    /// Optional human-readable reason attached to failures.
    #[serde(default, alias = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Converts the envelope into a tagged result, requiring `data` on success.
    pub fn into_result(self) -> ApiResult<T> {
        if !self.success {
            return Err(ApiError::Rejected {
                message: self.message,
            });
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Converts the envelope into a tagged result, ignoring `data`.
    ///
    /// Used for mutations whose payload is an opaque acknowledgement.
    pub fn into_ack(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}

impl ResponseEnvelope<serde_json::Value> {
    /// Decodes `data` as `T` once the envelope is known to be accepted.
    ///
    /// A rejected envelope is reported as such whatever shape its `data` has.
    pub fn into_typed<T: DeserializeOwned>(self) -> ApiResult<T> {
        let data = self.into_result()?;
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
