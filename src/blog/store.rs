use gloo_net::http::Request;
use thiserror::Error;

use super::post::Post;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Invalid posts file: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Turns a finished HTTP exchange into the post list. Only 2xx bodies are
/// parsed, and they must hold a top-level JSON array.
pub fn decode_posts(status: u16, status_text: &str, body: &str) -> Result<Vec<Post>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            status,
            status_text: status_text.to_string(),
        });
    }
    Ok(serde_json::from_str::<Vec<Post>>(body)?)
}

pub async fn load_posts(url: &str) -> Result<Vec<Post>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let posts = decode_posts(status, &status_text, &body)?;
    log::debug!("Loaded {} posts from {}", posts.len(), url);
    Ok(posts)
}
