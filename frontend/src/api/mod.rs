pub mod clients;
pub mod settings;
pub mod trips;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use shared::models::ApiErrorBody;
use thiserror::Error;

pub use clients::fetch_clients;
pub use settings::{fetch_settings, update_settings};
pub use trips::{create_trip, delete_trip, fetch_summary, fetch_trips};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Passes 2xx responses through; anything else becomes `ApiError::Status`
/// carrying the server's `{"error": ...}` message when it sent one.
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("Server error: {}", status));

    log::error!("Request to {} failed with {}: {}", url, status, message);
    Err(ApiError::Status { status, message })
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
