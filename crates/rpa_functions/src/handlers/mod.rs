pub mod auth;
pub mod error;
pub mod health;
pub mod package_check;
pub mod pc269;

pub use error::AppError;
