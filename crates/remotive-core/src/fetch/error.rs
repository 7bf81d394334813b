//! Fetch error type.

/// Error returned by [`super::fetch_json`]. Every variant means "no data";
/// the caller decides how to report it.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection refused, timeout, TLS, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// Body was received but is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status code, if the server answered with a non-2xx status.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            FetchError::Status { code, .. } => Some(*code),
            FetchError::Transport(_) | FetchError::Decode(_) => None,
        }
    }
}
