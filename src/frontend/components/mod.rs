//! UI components.

pub mod common;
pub mod layout;
