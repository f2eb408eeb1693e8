pub mod alert;
pub mod field_error;
pub mod settings_form;
pub mod summary_cards;
pub mod trip_form;
pub mod trip_list;

pub use alert::Alert;
pub use field_error::FieldError;
pub use settings_form::SettingsFormView;
pub use summary_cards::SummaryCards;
pub use trip_form::TripFormView;
pub use trip_list::TripList;
