use chrono::NaiveDate;
use std::collections::HashMap;
use validator::ValidationError;

use crate::constants::*;
use crate::dates::{local_today, parse_date_string};
use crate::form::ValidationResult;
use crate::forms::{SettingsField, SettingsForm, TripField, TripForm};

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub fn validate_max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new("too_long"));
    }
    Ok(())
}

pub fn validate_trip_date(value: &str, today: NaiveDate) -> Result<(), ValidationError> {
    validate_required(value)?;
    let date = parse_date_string(value).ok_or_else(|| ValidationError::new("invalid_date"))?;
    if date > today {
        return Err(ValidationError::new("future_date"));
    }
    Ok(())
}

fn parse_number(value: &str) -> Result<f64, ValidationError> {
    validate_required(value)?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::new("invalid_number"))
}

pub fn validate_miles(value: &str) -> Result<(), ValidationError> {
    let miles = parse_number(value)?;
    if miles <= 0.0 || miles > MAX_TRIP_MILES {
        return Err(ValidationError::new("miles_range"));
    }
    Ok(())
}

pub fn validate_rate(value: &str) -> Result<(), ValidationError> {
    let rate = parse_number(value)?;
    if !(0.0..=MAX_RATE_PER_MILE).contains(&rate) {
        return Err(ValidationError::new("rate_range"));
    }
    Ok(())
}

/// User-facing text for a validator error code.
pub fn error_message(error: &ValidationError) -> String {
    match error.code.as_ref() {
        "required" => REQUIRED_FIELD_ERROR,
        "too_long" => TOO_LONG_ERROR,
        "invalid_date" => INVALID_DATE_ERROR,
        "future_date" => FUTURE_DATE_ERROR,
        "invalid_number" => INVALID_NUMBER_ERROR,
        "miles_range" => MILES_RANGE_ERROR,
        "rate_range" => RATE_RANGE_ERROR,
        _ => SUBMIT_FAILED_ERROR,
    }
    .to_string()
}

fn message(result: Result<(), ValidationError>) -> Option<String> {
    result.err().map(|e| error_message(&e))
}

pub fn validate_trip_form(form: &TripForm) -> ValidationResult<TripField> {
    validate_trip_form_on(form, local_today())
}

pub fn validate_trip_form_on(form: &TripForm, today: NaiveDate) -> ValidationResult<TripField> {
    let mut errors = HashMap::new();
    errors.insert(TripField::Date, message(validate_trip_date(&form.date, today)));
    let purpose = validate_required(&form.purpose)
        .and_then(|_| validate_max_length(&form.purpose, MAX_PURPOSE_LENGTH));
    errors.insert(TripField::Purpose, message(purpose));
    errors.insert(TripField::StartLocation, message(validate_required(&form.start_location)));
    errors.insert(TripField::EndLocation, message(validate_required(&form.end_location)));
    errors.insert(TripField::Miles, message(validate_miles(&form.miles)));
    errors.insert(TripField::Notes, message(validate_max_length(&form.notes, MAX_NOTES_LENGTH)));
    errors
}

pub fn validate_settings_form(form: &SettingsForm) -> ValidationResult<SettingsField> {
    let mut errors = HashMap::new();
    errors.insert(SettingsField::RatePerMile, message(validate_rate(&form.rate_per_mile)));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn valid_trip() -> TripForm {
        TripForm {
            date: "2024-06-14".to_string(),
            client_id: String::new(),
            purpose: "Client meeting".to_string(),
            start_location: "Office".to_string(),
            end_location: "Downtown".to_string(),
            miles: "12.5".to_string(),
            round_trip: false,
            notes: String::new(),
        }
    }

    fn failures(result: &ValidationResult<TripField>) -> Vec<TripField> {
        let mut fields: Vec<TripField> = result
            .iter()
            .filter(|(_, message)| message.is_some())
            .map(|(field, _)| *field)
            .collect();
        fields.sort_by_key(|field| format!("{:?}", field));
        fields
    }

    #[test]
    fn test_valid_trip_passes() {
        assert!(failures(&validate_trip_form_on(&valid_trip(), today())).is_empty());
    }

    #[test]
    fn test_trip_date_rules() {
        assert!(validate_trip_date("2024-06-15", today()).is_ok());
        assert_eq!(validate_trip_date("", today()).unwrap_err().code, "required");
        assert_eq!(validate_trip_date("2024-02-30", today()).unwrap_err().code, "invalid_date");
        assert_eq!(validate_trip_date("2024-06-16", today()).unwrap_err().code, "future_date");
    }

    #[test]
    fn test_miles_rules() {
        assert!(validate_miles("0.5").is_ok());
        assert!(validate_miles(" 10000 ").is_ok());
        assert_eq!(validate_miles("0").unwrap_err().code, "miles_range");
        assert_eq!(validate_miles("-4").unwrap_err().code, "miles_range");
        assert_eq!(validate_miles("10000.1").unwrap_err().code, "miles_range");
        assert_eq!(validate_miles("ten").unwrap_err().code, "invalid_number");
        assert_eq!(validate_miles("NaN").unwrap_err().code, "invalid_number");
        assert_eq!(validate_miles("").unwrap_err().code, "required");
    }

    #[test]
    fn test_rate_rules() {
        assert!(validate_rate("0").is_ok());
        assert!(validate_rate("0.67").is_ok());
        assert_eq!(validate_rate("-0.01").unwrap_err().code, "rate_range");
        assert_eq!(validate_rate("11").unwrap_err().code, "rate_range");
    }

    #[test]
    fn test_trip_form_reports_each_bad_field() {
        let mut form = valid_trip();
        form.date = "2024-07-01".to_string();
        form.miles = "0".to_string();
        form.purpose = "   ".to_string();

        let result = validate_trip_form_on(&form, today());
        assert_eq!(
            failures(&result),
            vec![TripField::Date, TripField::Miles, TripField::Purpose]
        );
        assert_eq!(result[&TripField::Date].as_deref(), Some(FUTURE_DATE_ERROR));
        assert_eq!(result[&TripField::Miles].as_deref(), Some(MILES_RANGE_ERROR));
    }

    #[test]
    fn test_notes_length_limit() {
        let mut form = valid_trip();
        form.notes = "x".repeat(MAX_NOTES_LENGTH + 1);
        let result = validate_trip_form_on(&form, today());
        assert_eq!(result[&TripField::Notes].as_deref(), Some(TOO_LONG_ERROR));
    }

    #[test]
    fn test_settings_form() {
        let ok = SettingsForm { rate_per_mile: "0.655".to_string() };
        assert_eq!(validate_settings_form(&ok)[&SettingsField::RatePerMile], None);

        let bad = SettingsForm { rate_per_mile: "abc".to_string() };
        assert_eq!(
            validate_settings_form(&bad)[&SettingsField::RatePerMile].as_deref(),
            Some(INVALID_NUMBER_ERROR)
        );
    }
}
