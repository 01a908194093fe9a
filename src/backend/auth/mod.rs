//! Identity provider integration.

pub mod hosted;
pub mod provider;
pub mod session;

pub use hosted::HostedAuth;
pub use provider::AuthProvider;
pub use session::Session;
