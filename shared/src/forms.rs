use thiserror::Error;

use crate::constants::DATE_FORMAT;
use crate::dates::{extract_date_string, local_today};
use crate::form::FormModel;
use crate::models::{NewTrip, Settings};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// What an input element hands back on change.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(text) => matches!(text.as_str(), "true" | "on" | "1"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TripField {
    Date,
    ClientId,
    Purpose,
    StartLocation,
    EndLocation,
    Miles,
    RoundTrip,
    Notes,
}

/// Trip inputs as the browser delivers them. Numbers stay as text until
/// submission so half-typed values survive re-renders.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TripForm {
    pub date: String,
    pub client_id: String,
    pub purpose: String,
    pub start_location: String,
    pub end_location: String,
    pub miles: String,
    pub round_trip: bool,
    pub notes: String,
}

impl TripForm {
    /// Blank trip dated the local calendar day, which is what the date
    /// validator compares against.
    pub fn for_today() -> Self {
        Self {
            date: local_today().format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Miles as entered, doubled for round trips. `None` until the input
    /// parses.
    pub fn effective_miles(&self) -> Option<f64> {
        let miles = self.miles.trim().parse::<f64>().ok()?;
        Some(if self.round_trip { miles * 2.0 } else { miles })
    }

    /// Whitespace trimmed copy, used as the submit transform.
    pub fn normalized(&self) -> Self {
        Self {
            date: extract_date_string(self.date.trim()).to_string(),
            client_id: self.client_id.trim().to_string(),
            purpose: self.purpose.trim().to_string(),
            start_location: self.start_location.trim().to_string(),
            end_location: self.end_location.trim().to_string(),
            miles: self.miles.trim().to_string(),
            round_trip: self.round_trip,
            notes: self.notes.trim().to_string(),
        }
    }
}

impl FormModel for TripForm {
    type Field = TripField;
    type Value = FieldValue;

    fn set_field(&mut self, field: TripField, value: FieldValue) {
        match field {
            TripField::RoundTrip => self.round_trip = value.as_flag(),
            TripField::Date => self.date = value.into_text(),
            TripField::ClientId => self.client_id = value.into_text(),
            TripField::Purpose => self.purpose = value.into_text(),
            TripField::StartLocation => self.start_location = value.into_text(),
            TripField::EndLocation => self.end_location = value.into_text(),
            TripField::Miles => self.miles = value.into_text(),
            TripField::Notes => self.notes = value.into_text(),
        }
    }
}

impl TryFrom<&TripForm> for NewTrip {
    type Error = FormError;

    fn try_from(form: &TripForm) -> Result<Self, Self::Error> {
        let miles = form.effective_miles().ok_or_else(|| FormError::InvalidNumber {
            field: "miles",
            value: form.miles.clone(),
        })?;

        let client_id = match form.client_id.trim() {
            "" => None,
            id => Some(id.parse::<i64>().map_err(|_| FormError::InvalidNumber {
                field: "client_id",
                value: id.to_string(),
            })?),
        };

        let notes = form.notes.trim();

        Ok(NewTrip {
            date: form.date.clone(),
            client_id,
            purpose: form.purpose.clone(),
            start_location: form.start_location.clone(),
            end_location: form.end_location.clone(),
            miles,
            round_trip: form.round_trip,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingsField {
    RatePerMile,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SettingsForm {
    pub rate_per_mile: String,
}

impl FormModel for SettingsForm {
    type Field = SettingsField;
    type Value = String;

    fn set_field(&mut self, field: SettingsField, value: String) {
        match field {
            SettingsField::RatePerMile => self.rate_per_mile = value,
        }
    }
}

impl From<&Settings> for SettingsForm {
    fn from(settings: &Settings) -> Self {
        Self {
            // Shortest round-tripping form: 0.67 -> "0.67", 1.0 -> "1"
            rate_per_mile: settings.rate_per_mile.to_string(),
        }
    }
}

impl TryFrom<&SettingsForm> for Settings {
    type Error = FormError;

    fn try_from(form: &SettingsForm) -> Result<Self, Self::Error> {
        let rate_per_mile =
            form.rate_per_mile.trim().parse::<f64>().map_err(|_| FormError::InvalidNumber {
                field: "rate_per_mile",
                value: form.rate_per_mile.clone(),
            })?;
        Ok(Settings { rate_per_mile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::is_valid_date_string;
    use crate::form::FormState;

    fn filled() -> TripForm {
        TripForm {
            date: "2024-03-04".to_string(),
            client_id: "12".to_string(),
            purpose: "Inspection".to_string(),
            start_location: "Office".to_string(),
            end_location: "Plant".to_string(),
            miles: "18.5".to_string(),
            round_trip: true,
            notes: "  ".to_string(),
        }
    }

    #[test]
    fn test_trip_form_defaults_to_today() {
        let form = TripForm::for_today();
        assert!(is_valid_date_string(&form.date));
        assert!(form.miles.is_empty());
    }

    #[test]
    fn test_set_field_through_form_state() {
        let mut state = FormState::new(TripForm::default());
        state.set_field(TripField::Purpose, "Delivery".to_string().into());
        state.set_field(TripField::RoundTrip, true.into());
        state.set_field(TripField::RoundTrip, FieldValue::Text("on".to_string()));
        assert_eq!(state.data().purpose, "Delivery");
        assert!(state.data().round_trip);
        assert!(state.is_dirty());
    }

    #[test]
    fn test_round_trip_doubles_miles() {
        let trip = NewTrip::try_from(&filled()).unwrap();
        assert_eq!(trip.miles, 37.0);
        assert_eq!(trip.client_id, Some(12));
        assert_eq!(trip.notes, None);
    }

    #[test]
    fn test_one_way_keeps_miles() {
        let mut form = filled();
        form.round_trip = false;
        form.client_id = String::new();
        form.notes = "Parking paid".to_string();
        let trip = NewTrip::try_from(&form).unwrap();
        assert_eq!(trip.miles, 18.5);
        assert_eq!(trip.client_id, None);
        assert_eq!(trip.notes.as_deref(), Some("Parking paid"));
    }

    #[test]
    fn test_bad_numbers_are_errors() {
        let mut form = filled();
        form.miles = "lots".to_string();
        assert!(matches!(
            NewTrip::try_from(&form),
            Err(FormError::InvalidNumber { field: "miles", .. })
        ));

        let mut form = filled();
        form.client_id = "acme".to_string();
        assert!(matches!(
            NewTrip::try_from(&form),
            Err(FormError::InvalidNumber { field: "client_id", .. })
        ));
    }

    #[test]
    fn test_normalized_trims_and_truncates_timestamps() {
        let mut form = filled();
        form.date = "2024-03-04T09:00:00Z".to_string();
        form.purpose = "  Inspection ".to_string();
        let normalized = form.normalized();
        assert_eq!(normalized.date, "2024-03-04");
        assert_eq!(normalized.purpose, "Inspection");
        assert_eq!(normalized.notes, "");
    }

    #[test]
    fn test_settings_keep_full_rate_precision() {
        let stored = Settings { rate_per_mile: 0.6555 };
        let form = SettingsForm::from(&stored);
        assert_eq!(form.rate_per_mile, "0.6555");
        assert_eq!(Settings::try_from(&form).unwrap(), stored);
    }

    #[test]
    fn test_settings_round_trip() {
        let form = SettingsForm::from(&Settings { rate_per_mile: 0.67 });
        assert_eq!(form.rate_per_mile, "0.67");
        assert_eq!(SettingsForm::from(&Settings { rate_per_mile: 1.0 }).rate_per_mile, "1");
        assert_eq!(SettingsForm::from(&Settings { rate_per_mile: 0.0 }).rate_per_mile, "0");
        assert_eq!(Settings::try_from(&form).unwrap().rate_per_mile, 0.67);
        assert!(Settings::try_from(&SettingsForm { rate_per_mile: "x".to_string() }).is_err());
    }
}
