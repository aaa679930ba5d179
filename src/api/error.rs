use std::fmt;

/// Errors surfaced by a `UserApi` call.
///
/// The store collapses all of these into one fixed message per action; the
/// variants exist so the log says what actually went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The HTTP client could not be built (bad header, TLS backend).
    Config(String),
    /// Transport failure: connection refused, DNS, reset.
    Network(String),
    /// The server answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The response body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
