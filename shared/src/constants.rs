pub const TRIPS_ENDPOINT: &str = "/api/v1/trips";
pub const TRIP_SUMMARY_ENDPOINT: &str = "/api/v1/trips/summary";
pub const CLIENTS_ENDPOINT: &str = "/api/v1/clients";
pub const SETTINGS_ENDPOINT: &str = "/api/v1/settings";

pub const INVALID_DATE: &str = "Invalid Date";
pub const UNKNOWN_TIME: &str = "unknown time";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";
pub const DISPLAY_DATE_SHORT_FORMAT: &str = "%b %-d";
pub const MONTH_LABEL_FORMAT: &str = "%B %Y";

// IRS standard business rate for 2024, in dollars
pub const DEFAULT_RATE_PER_MILE: f64 = 0.67;
pub const MAX_RATE_PER_MILE: f64 = 10.0;
pub const MAX_TRIP_MILES: f64 = 10_000.0;
pub const MAX_PURPOSE_LENGTH: usize = 200;
pub const MAX_NOTES_LENGTH: usize = 500;

pub const REQUIRED_FIELD_ERROR: &str = "This field is required";
pub const INVALID_DATE_ERROR: &str = "Please enter a valid date (YYYY-MM-DD)";
pub const FUTURE_DATE_ERROR: &str = "Trip date cannot be in the future";
pub const INVALID_NUMBER_ERROR: &str = "Please enter a number";
pub const MILES_RANGE_ERROR: &str = "Miles must be greater than 0 and at most 10,000";
pub const RATE_RANGE_ERROR: &str = "Rate must be between $0.00 and $10.00 per mile";
pub const TOO_LONG_ERROR: &str = "This field is too long";
pub const SUBMIT_FAILED_ERROR: &str = "Something went wrong. Please try again";
