use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RATE_PER_MILE;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Trip {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub client_name: Option<String>,
    pub purpose: String,
    #[serde(default)]
    pub start_location: String,
    #[serde(default)]
    pub end_location: String,
    pub miles: f64,
    #[serde(default)]
    pub round_trip: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NewTrip {
    pub date: String,
    pub client_id: Option<i64>,
    pub purpose: String,
    pub start_location: String,
    pub end_location: String,
    pub miles: f64,
    pub round_trip: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Settings {
    pub rate_per_mile: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rate_per_mile: DEFAULT_RATE_PER_MILE,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MonthlySummary {
    /// `YYYY-MM`
    pub month: String,
    pub total_miles: f64,
    pub trip_count: u32,
    pub estimated_deduction: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_tolerates_missing_optional_fields() {
        let json = r#"{"id":7,"date":"2024-01-15","purpose":"Site visit","miles":12.5}"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, 7);
        assert_eq!(trip.client_id, None);
        assert!(!trip.round_trip);
        assert_eq!(trip.start_location, "");
    }

    #[test]
    fn test_new_trip_omits_empty_notes() {
        let trip = NewTrip {
            date: "2024-01-15".to_string(),
            client_id: Some(3),
            purpose: "Site visit".to_string(),
            start_location: "Office".to_string(),
            end_location: "Warehouse".to_string(),
            miles: 10.0,
            round_trip: false,
            notes: None,
        };
        let json = serde_json::to_value(&trip).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["client_id"], 3);
    }
}
