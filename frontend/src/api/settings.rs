use gloo_net::http::Request;
use log::info;
use shared::constants::SETTINGS_ENDPOINT;
use shared::models::Settings;

use super::{read_json, ApiError};
use crate::config::api_url;

pub async fn fetch_settings() -> Result<Settings, ApiError> {
    let response = Request::get(&api_url(SETTINGS_ENDPOINT)).send().await?;
    read_json(response).await
}

pub async fn update_settings(settings: &Settings) -> Result<Settings, ApiError> {
    let response = Request::put(&api_url(SETTINGS_ENDPOINT))
        .json(settings)?
        .send()
        .await?;
    let saved: Settings = read_json(response).await?;
    info!("Rate per mile set to {}", saved.rate_per_mile);
    Ok(saved)
}
