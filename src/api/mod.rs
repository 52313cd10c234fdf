//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod events;
mod meta;

pub use events::*;
pub use meta::*;

/// Response type for API handlers.
pub type ApiResult<T> = Result<T, crate::errors::AppError>;
