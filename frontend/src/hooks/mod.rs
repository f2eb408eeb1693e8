pub mod banner;
pub mod use_form;
pub mod use_resource;

pub use banner::*;
pub use use_form::*;
pub use use_resource::*;
