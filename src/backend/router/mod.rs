//! Route metadata and the auth-aware navigation guard.

pub mod guard;
pub mod table;

pub use guard::{GuardDecision, NavigationGuard, NavigationRequest};
pub use table::{FALLBACK_PATH, Resolution, RouteDescriptor, resolve};
