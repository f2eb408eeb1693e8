use gloo_net::http::Request;
use shared::constants::CLIENTS_ENDPOINT;
use shared::models::Client;

use super::{read_json, ApiError};
use crate::config::api_url;

pub async fn fetch_clients() -> Result<Vec<Client>, ApiError> {
    let response = Request::get(&api_url(CLIENTS_ENDPOINT)).send().await?;
    let mut clients: Vec<Client> = read_json(response).await?;
    clients.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(clients)
}
