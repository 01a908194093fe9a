//! Pages, one per route.

pub mod dashboard;
pub mod profile;
pub mod settings;
pub mod today;
pub mod unmatched;
