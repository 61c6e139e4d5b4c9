//! Single-endpoint fetch logic.
//!
//! Performs one GET against a category endpoint over a fresh HTTP/1
//! connection, with a hard timeout covering connect, request, and body.

use std::time::Duration;

use http_body_util::BodyExt;
use thiserror::Error;
use tracing::debug;

use sustain_core::{Category, Initiative};

/// Errors from a single category fetch.
///
/// The aggregator treats every variant the same (substitute an empty
/// list); the distinctions exist for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("handshake failed: {0}")]
    Handshake(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("non-success status: {0}")]
    Status(u16),

    #[error("failed to read body: {0}")]
    Body(String),

    #[error("failed to decode body: {0}")]
    Decode(String),

    #[error("timed out")]
    Timeout,
}

/// Fetch one category's records from `http://{address}/api/{slug}`.
///
/// Returns the decoded record list, or an error if the connection,
/// request, or decode fails, the status is non-2xx, or `timeout`
/// elapses.
pub async fn fetch_category(
    address: &str,
    category: Category,
    timeout: Duration,
) -> Result<Vec<Initiative>, FetchError> {
    let uri = format!("http://{address}/api/{}", category.slug());
    debug!(%uri, "fetching category");

    match tokio::time::timeout(timeout, fetch_inner(address, &uri)).await {
        Ok(result) => result,
        Err(_) => {
            debug!(%uri, "category fetch timed out");
            Err(FetchError::Timeout)
        }
    }
}

async fn fetch_inner(address: &str, uri: &str) -> Result<Vec<Initiative>, FetchError> {
    let stream = tokio::net::TcpStream::connect(address)
        .await
        .map_err(|e| FetchError::Connect(e.to_string()))?;

    let io = hyper_util::rt::TokioIo::new(stream);
    let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
        .await
        .map_err(|e| FetchError::Handshake(e.to_string()))?;

    // Drive the connection in the background.
    tokio::spawn(async move {
        let _ = conn.await;
    });

    let req = http::Request::builder()
        .method("GET")
        .uri(uri)
        .header("host", address)
        .header("accept", "application/json")
        .header("user-agent", "sustain-client/0.1")
        .body(http_body_util::Empty::<bytes::Bytes>::new())
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let resp = sender
        .send_request(req)
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !resp.status().is_success() {
        debug!(status = %resp.status(), %uri, "category fetch non-2xx");
        return Err(FetchError::Status(resp.status().as_u16()));
    }

    let body = resp
        .into_body()
        .collect()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?
        .to_bytes();

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
