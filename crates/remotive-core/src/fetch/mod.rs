//! HTTP GET of the job feed.
//!
//! Uses the curl crate (libcurl) for one blocking request. The whole body is
//! buffered, then parsed as JSON. No retries and no custom headers beyond an
//! optional `User-Agent` from config.

mod error;

pub use error::FetchError;

use crate::config::HttpOptions;
use serde_json::Value;

/// Performs a single GET and returns the parsed JSON body.
///
/// Follows redirects. Runs in the current thread. The shape of the document
/// is not checked here; see [`crate::jobs::extract_jobs`].
pub fn fetch_json(url: &str, http: &HttpOptions) -> Result<Value, FetchError> {
    let body = get_body(url, http)?;
    let value = parse_body(&body)?;
    tracing::debug!("parsed {} byte JSON body from {}", body.len(), url);
    Ok(value)
}

/// Download the body of `url`, failing on transport errors or non-2xx status.
fn get_body(url: &str, http: &HttpOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(http.connect_timeout())?;
    easy.timeout(http.timeout())?;
    if let Some(agent) = &http.user_agent {
        easy.useragent(agent)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }
    tracing::debug!("GET {} returned HTTP {} ({} bytes)", url, code, body.len());
    Ok(body)
}

/// Parse a response body as JSON.
pub(crate) fn parse_body(body: &[u8]) -> Result<Value, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
