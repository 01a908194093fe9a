//! Frontend module for the `Daybook` application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
