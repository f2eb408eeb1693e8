pub mod dashboard;
pub mod new_trip;
pub mod not_found;
pub mod settings;
pub mod trips;
