use crate::http::HttpError;

/// Failure of an admin API call.
///
/// The variants fall into two channels. [`ApiError::Rejected`] is the backend
/// answering `success: false`. Every other variant means no usable envelope came
/// back: the request never left, the connection failed, or the body was not an
/// envelope. Callers that only need "did it work" can treat both the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("API returned status: {status}")]
    Status { status: u16 },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("response reported success but carried no data")]
    MissingData,
}

impl ApiError {
    /// The backend processed the request and refused it.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// No envelope was obtained from the backend.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Encode(_) | Self::Transport(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;
