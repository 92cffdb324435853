//! HTTP fetch workload
//!
//! Fetches remote UTF-8 text. Network failure, an empty body, and a body
//! that is not valid UTF-8 are reported as distinct errors.

use crate::error::{Error, Result};
use crate::parallel::{parallel_map, ParallelConfig};

/// Random-text endpoint used by the demo scenarios
pub const LOREM_MARKDOWN_URL: &str = "https://jaspervdj.be/lorem-markdownum/markdown.txt";

/// HTTP GET returning the response body as UTF-8 text
pub async fn fetch_text(url: &str) -> Result<String> {
    let response = reqwest::get(url).await.map_err(|e| Error::Network {
        reason: e.to_string(),
    })?;

    let bytes = response.bytes().await.map_err(|e| Error::Network {
        reason: e.to_string(),
    })?;

    decode_body(&bytes)
}

/// Fetch the same URL `count` times concurrently.
///
/// Results arrive in completion order unless `config` says otherwise.
pub async fn fetch_many(url: &str, count: usize, config: ParallelConfig) -> Result<Vec<String>> {
    let url = url.to_string();
    parallel_map(
        std::iter::repeat(url).take(count),
        |url: String| async move { fetch_text(&url).await },
        config,
    )
    .await
}

fn decode_body(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::EmptyBody);
    }
    String::from_utf8(bytes.to_vec()).map_err(|_| Error::InvalidUtf8)
}
