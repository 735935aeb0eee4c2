pub mod api;
pub mod env_config;
pub mod error;
pub mod filters;
pub mod form;
pub mod misc;

pub use api::{Api, Method};
pub use error::{AppError, Res};
pub use filters::Filters;
pub use form::Form;
