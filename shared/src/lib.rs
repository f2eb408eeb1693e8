pub mod constants;
pub mod dates;
pub mod form;
pub mod forms;
pub mod mileage;
pub mod models;
pub mod validation;
