//! Frontend services for state that outlives a single page.

pub mod context;
pub mod toast;
