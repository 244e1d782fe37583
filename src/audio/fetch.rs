//! Downloading of sample assets.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::playback::MediaError;

const USER_AGENT: &str = concat!("musicverse/", env!("CARGO_PKG_VERSION"));

pub(super) fn http_client(timeout: Duration) -> Result<Client, MediaError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| MediaError::Output(format!("http client: {e}")))
}

/// Fetch the full body of `url`, treating non-success statuses as errors.
pub(super) fn fetch_asset(client: &Client, url: &str) -> Result<Vec<u8>, MediaError> {
    let fetch_err = |reason: String| MediaError::Fetch {
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| fetch_err(e.to_string()))?;

    let bytes = response.bytes().map_err(|e| fetch_err(e.to_string()))?;
    if bytes.is_empty() {
        return Err(fetch_err("empty response body".to_string()));
    }
    Ok(bytes.to_vec())
}
