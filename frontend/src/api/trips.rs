use gloo_net::http::Request;
use log::{debug, info};
use shared::constants::{TRIPS_ENDPOINT, TRIP_SUMMARY_ENDPOINT};
use shared::models::{MonthlySummary, NewTrip, Trip};

use super::{check_status, read_json, ApiError};
use crate::config::api_url;

pub async fn fetch_trips() -> Result<Vec<Trip>, ApiError> {
    let response = Request::get(&api_url(TRIPS_ENDPOINT)).send().await?;
    let trips: Vec<Trip> = read_json(response).await?;
    debug!("Loaded {} trips", trips.len());
    Ok(trips)
}

pub async fn create_trip(trip: &NewTrip) -> Result<Trip, ApiError> {
    let response = Request::post(&api_url(TRIPS_ENDPOINT))
        .json(trip)?
        .send()
        .await?;
    let created: Trip = read_json(response).await?;
    info!("Created trip {} ({} mi on {})", created.id, created.miles, created.date);
    Ok(created)
}

pub async fn delete_trip(id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("{}/{}", TRIPS_ENDPOINT, id)))
        .send()
        .await?;
    check_status(response).await?;
    info!("Deleted trip {}", id);
    Ok(())
}

pub async fn fetch_summary() -> Result<Vec<MonthlySummary>, ApiError> {
    let response = Request::get(&api_url(TRIP_SUMMARY_ENDPOINT)).send().await?;
    read_json(response).await
}
