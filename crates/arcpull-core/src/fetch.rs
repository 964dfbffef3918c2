//! Archive download.

use url::Url;

use crate::Result;
use crate::UnpackError;

/// Downloads the archive at `url`, fully materialized into memory.
///
/// Non-success HTTP statuses are treated as fetch failures. There is no
/// retry and no timeout beyond what the client is configured with; the
/// whole-archive buffer is the design's explicit memory bound.
///
/// # Errors
///
/// Returns [`UnpackError::Fetch`] carrying the URL and the transport
/// cause.
pub async fn fetch_bytes(client: &reqwest::Client, url: &Url) -> Result<Vec<u8>> {
    let fetch_err = |source: reqwest::Error| UnpackError::Fetch {
        url: url.to_string(),
        source,
    };

    tracing::info!(%url, "downloading archive");
    let response = client.get(url.clone()).send().await.map_err(fetch_err)?;
    let response = response.error_for_status().map_err(fetch_err)?;
    let bytes = response.bytes().await.map_err(fetch_err)?;

    tracing::info!(bytes = bytes.len(), "downloaded archive");
    Ok(bytes.to_vec())
}
