//! The seam between navigation and whatever identity provider is in use.

use crate::utils::Result;
use futures_util::future::BoxFuture;

/// An external identity provider as seen by the rest of the app.
///
/// Implementations must be safe to call `ensure_ready` on repeatedly; only
/// the first call is expected to do any work.
pub trait AuthProvider: Send + Sync {
    /// Finishes provider initialization.
    fn ensure_ready(&self) -> BoxFuture<'_, Result<()>>;

    /// Identifier of the signed-in user, if any.
    fn current_identity(&self) -> Result<Option<String>>;
}
