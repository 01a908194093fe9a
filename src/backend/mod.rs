//! Backend module: identity provider, routing rules and shared utilities.

pub mod auth;
pub mod router;
pub mod utils;
