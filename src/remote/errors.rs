use thiserror::Error;

/// Why a call to one of the consumed services did not produce a usable answer.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("service unreachable: {0}")]
    Unreachable(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("http error {status}: {message}")]
    Http {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("unknown: {0}")]
    Unknown(String),
}

impl RemoteError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http {
                status,
                message: err.to_string(),
            }
        } else if err.is_connect() || err.is_request() {
            Self::Unreachable(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }

    /// Status code for HTTP-level failures.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
