//! Web API module.

pub mod admin;
pub mod autocomplete;
pub mod error;
pub mod routes;
pub mod schedules;
pub mod status;

pub use routes::*;
