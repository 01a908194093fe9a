//! Application shell.

pub mod main;
