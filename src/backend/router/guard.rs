//! Authentication-aware navigation guard.

use crate::backend::auth::AuthProvider;
use crate::backend::router::table::{FALLBACK_PATH, RouteDescriptor};
use crate::utils::Result;
use std::sync::Arc;

/// One attempted transition. `source` is empty on the first navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: &'static RouteDescriptor,
    pub source: Option<&'static RouteDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decides a transition from the target's auth flag and the current auth status.
pub const fn decide(target: &RouteDescriptor, signed_in: bool) -> GuardDecision {
    if target.requires_auth && !signed_in {
        GuardDecision::Redirect(FALLBACK_PATH)
    } else {
        GuardDecision::Proceed
    }
}

/// Gates route transitions on the identity provider's state.
///
/// The provider is optional: without one every visitor counts as signed out.
#[derive(Clone, Default)]
pub struct NavigationGuard {
    auth: Option<Arc<dyn AuthProvider>>,
}

impl NavigationGuard {
    pub fn new(auth: Option<Arc<dyn AuthProvider>>) -> Self {
        Self { auth }
    }

    /// Runs the guard. Never fails; provider errors count as signed out.
    pub async fn check(&self, request: &NavigationRequest) -> GuardDecision {
        let signed_in = match self.auth_status().await {
            Ok(signed_in) => signed_in,
            Err(e) => {
                log::error!("Navigation error: {e}");
                false
            }
        };

        let decision = decide(request.target, signed_in);
        if let GuardDecision::Redirect(to) = decision {
            log::debug!(
                "Redirecting {} -> {to} (from {})",
                request.target.path,
                request.source.map_or("<start>", |source| source.path)
            );
        }
        decision
    }

    async fn auth_status(&self) -> Result<bool> {
        let Some(auth) = &self.auth else {
            return Ok(false);
        };

        auth.ensure_ready().await?;
        Ok(auth
            .current_identity()?
            .is_some_and(|identity| !identity.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::router::table::{Resolution, by_name, resolve};
    use crate::simple_error;
    use futures_util::FutureExt;
    use futures_util::future::BoxFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        SignedIn(&'static str),
        SignedOut,
        EmptyIdentity,
        InitFails,
        QueryFails,
    }

    struct FakeAuth {
        behavior: Behavior,
        ready_calls: AtomicUsize,
    }

    impl FakeAuth {
        fn guard(behavior: Behavior) -> (NavigationGuard, Arc<Self>) {
            let fake = Arc::new(Self {
                behavior,
                ready_calls: AtomicUsize::new(0),
            });
            (NavigationGuard::new(Some(fake.clone())), fake)
        }
    }

    impl AuthProvider for FakeAuth {
        fn ensure_ready(&self) -> BoxFuture<'_, Result<()>> {
            self.ready_calls.fetch_add(1, Ordering::SeqCst);
            let failed = matches!(self.behavior, Behavior::InitFails);
            async move {
                if failed {
                    Err(simple_error!("provider script failed to load"))
                } else {
                    Ok(())
                }
            }
            .boxed()
        }

        fn current_identity(&self) -> Result<Option<String>> {
            match self.behavior {
                Behavior::SignedIn(id) => Ok(Some(id.to_string())),
                Behavior::EmptyIdentity => Ok(Some(String::new())),
                Behavior::SignedOut | Behavior::InitFails => Ok(None),
                Behavior::QueryFails => Err(simple_error!("identity unavailable")),
            }
        }
    }

    fn route(name: &str) -> &'static RouteDescriptor {
        by_name(name).unwrap()
    }

    fn request(target: &str) -> NavigationRequest {
        NavigationRequest {
            target: route(target),
            source: Some(route("Today")),
        }
    }

    #[tokio::test]
    async fn public_route_proceeds_when_signed_out() {
        let (guard, _) = FakeAuth::guard(Behavior::SignedOut);
        assert_eq!(guard.check(&request("Today")).await, GuardDecision::Proceed);
    }

    #[tokio::test]
    async fn protected_route_redirects_when_signed_out() {
        let (guard, _) = FakeAuth::guard(Behavior::SignedOut);
        assert_eq!(
            guard.check(&request("Dashboard")).await,
            GuardDecision::Redirect("/today")
        );
    }

    #[tokio::test]
    async fn protected_route_proceeds_when_signed_in() {
        let (guard, _) = FakeAuth::guard(Behavior::SignedIn("user_2x"));
        assert_eq!(guard.check(&request("Dashboard")).await, GuardDecision::Proceed);
    }

    #[tokio::test]
    async fn init_failure_redirects_protected_routes() {
        let (guard, _) = FakeAuth::guard(Behavior::InitFails);
        assert_eq!(
            guard.check(&request("Settings")).await,
            GuardDecision::Redirect("/today")
        );
    }

    #[tokio::test]
    async fn init_failure_does_not_block_public_routes() {
        let (guard, _) = FakeAuth::guard(Behavior::InitFails);
        assert_eq!(guard.check(&request("Today")).await, GuardDecision::Proceed);
    }

    #[tokio::test]
    async fn identity_query_failure_counts_as_signed_out() {
        let (guard, _) = FakeAuth::guard(Behavior::QueryFails);
        assert_eq!(
            guard.check(&request("Profile")).await,
            GuardDecision::Redirect("/today")
        );
        assert_eq!(guard.check(&request("Today")).await, GuardDecision::Proceed);
    }

    #[tokio::test]
    async fn empty_identity_is_not_signed_in() {
        let (guard, _) = FakeAuth::guard(Behavior::EmptyIdentity);
        assert_eq!(
            guard.check(&request("Profile")).await,
            GuardDecision::Redirect("/today")
        );
    }

    #[tokio::test]
    async fn missing_provider_counts_as_signed_out() {
        let guard = NavigationGuard::default();
        assert_eq!(
            guard.check(&request("Dashboard")).await,
            GuardDecision::Redirect("/today")
        );
        assert_eq!(guard.check(&request("Today")).await, GuardDecision::Proceed);
    }

    #[tokio::test]
    async fn repeated_checks_agree_and_always_await_readiness() {
        for behavior in [Behavior::SignedIn("user_1"), Behavior::SignedOut] {
            let (guard, fake) = FakeAuth::guard(behavior);
            for target in ["Today", "Dashboard", "Settings", "Profile"] {
                let first = guard.check(&request(target)).await;
                let second = guard.check(&request(target)).await;
                assert_eq!(first, second, "{target}");
            }
            assert_eq!(fake.ready_calls.load(Ordering::SeqCst), 8);
        }
    }

    #[tokio::test]
    async fn first_navigation_has_no_source() {
        let (guard, _) = FakeAuth::guard(Behavior::SignedOut);
        let request = NavigationRequest {
            target: route("Settings"),
            source: None,
        };
        assert_eq!(guard.check(&request).await, GuardDecision::Redirect("/today"));
    }

    #[test]
    fn decision_table() {
        for route in &crate::backend::router::table::ROUTES {
            assert_eq!(decide(route, true), GuardDecision::Proceed);
            let expected = if route.requires_auth {
                GuardDecision::Redirect(FALLBACK_PATH)
            } else {
                GuardDecision::Proceed
            };
            assert_eq!(decide(route, false), expected, "{}", route.path);
        }
    }

    #[test]
    fn unknown_path_resolves_to_fallback() {
        assert_eq!(resolve("/unknown/path"), Resolution::Redirect("/today"));
    }
}
