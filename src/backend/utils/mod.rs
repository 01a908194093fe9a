//! Shared backend utilities.

pub mod config;
pub mod css;
pub mod paths;
