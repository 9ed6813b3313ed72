use std::fmt;

use serde::Serialize;

pub type RequestId = u64;

/// JSON body of the shortening call: `{"params":{"url":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenPayload<'a> {
    pub params: ShortenParams<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenParams<'a> {
    pub url: &'a str,
}

impl<'a> ShortenPayload<'a> {
    pub fn new(url: &'a str) -> Self {
        Self {
            params: ShortenParams { url },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Completed {
        request_id: RequestId,
        result: Result<String, ShortenError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ShortenError {
    pub kind: FailureKind,
    pub message: String,
}

impl ShortenError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Diagnostic detail for a failed call. The form treats all of these alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    /// The HTTP client or the request body could not be built; nothing was sent.
    Client,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Client => write!(f, "client setup error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "undecodable response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
}
