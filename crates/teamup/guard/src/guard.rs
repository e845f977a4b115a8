//! Navigation guard
//!
//! A pure, synchronous gate between a requested view transition and the
//! router. The guard owns no session state; it reads the injected store on
//! every check, so the decision always reflects the current login state.

use crate::routes::{RouteClass, RouteTable};
use std::sync::Arc;
use teamup_session::SessionStore;
use tracing::debug;

/// Outcome of a guarded navigation. Every check yields exactly one of
/// these; there is no third state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the requested view unchanged.
    Proceed,
    /// Navigate to this path instead. The originally requested target is
    /// discarded; no return-URL is kept.
    Redirect(String),
}

/// Session-gated navigation guard.
pub struct NavigationGuard {
    routes: RouteTable,
    session: Arc<dyn SessionStore>,
}

impl NavigationGuard {
    pub fn new(routes: RouteTable, session: Arc<dyn SessionStore>) -> Self {
        Self { routes, session }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Decide a transition from `from` to `to`.
    ///
    /// Protected targets require an authenticated session; entry views bounce
    /// authenticated sessions back to where they came from, or to the default
    /// landing view when they arrive from the root.
    pub fn check(&self, to: &str, from: &str) -> GuardDecision {
        let authenticated = self.session.is_authenticated();
        let decision = match (self.routes.classify(to), authenticated) {
            (RouteClass::Protected, false) => {
                GuardDecision::Redirect(self.routes.login().to_string())
            }
            (RouteClass::Public, true) => {
                if from == self.routes.root() {
                    GuardDecision::Redirect(self.routes.default_landing().to_string())
                } else {
                    GuardDecision::Redirect(from.to_string())
                }
            }
            (RouteClass::Public, false) | (RouteClass::Protected, true) => GuardDecision::Proceed,
        };
        debug!(to, from, authenticated, ?decision, "navigation guarded");
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamup_session::MemorySessionStore;

    fn guard_with(session: MemorySessionStore) -> NavigationGuard {
        NavigationGuard::new(RouteTable::default(), Arc::new(session))
    }

    fn logged_out() -> NavigationGuard {
        guard_with(MemorySessionStore::new())
    }

    fn logged_in() -> NavigationGuard {
        guard_with(MemorySessionStore::with_token("state"))
    }

    #[test]
    fn public_target_logged_out_proceeds() {
        assert_eq!(logged_out().check("/login", "/"), GuardDecision::Proceed);
        assert_eq!(
            logged_out().check("/register", "/login"),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn protected_target_logged_out_redirects_to_login() {
        let guard = logged_out();
        assert_eq!(
            guard.check("/team/5", "/"),
            GuardDecision::Redirect("/login".to_string())
        );
        assert_eq!(
            guard.check("/match", "/login"),
            GuardDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn unknown_paths_fail_closed() {
        let guard = logged_out();
        assert_eq!(
            guard.check("/definitely/not/registered", "/"),
            GuardDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn entry_view_logged_in_bounces_back() {
        let guard = logged_in();
        assert_eq!(
            guard.check("/login", "/match"),
            GuardDecision::Redirect("/match".to_string())
        );
    }

    #[test]
    fn entry_view_logged_in_from_root_lands_on_default() {
        let guard = logged_in();
        assert_eq!(
            guard.check("/login", "/"),
            GuardDecision::Redirect("/match".to_string())
        );
        assert_eq!(
            guard.check("/register", "/"),
            GuardDecision::Redirect("/match".to_string())
        );
    }

    // Bounce-back targets are taken as-is, even when they are entry views.
    #[test]
    fn entry_view_logged_in_bounces_back_even_to_entry_views() {
        let guard = logged_in();
        assert_eq!(
            guard.check("/register", "/login"),
            GuardDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn protected_target_logged_in_proceeds() {
        let guard = logged_in();
        assert_eq!(guard.check("/match", "/"), GuardDecision::Proceed);
        assert_eq!(guard.check("/team/5", "/match"), GuardDecision::Proceed);
    }

    #[test]
    fn decisions_are_idempotent() {
        let guard = logged_out();
        let first = guard.check("/team/5", "/");
        for _ in 0..10 {
            assert_eq!(guard.check("/team/5", "/"), first);
        }
    }

    #[test]
    fn decision_follows_session_changes() {
        let session = Arc::new(MemorySessionStore::new());
        let guard = NavigationGuard::new(RouteTable::default(), session.clone());

        assert_eq!(
            guard.check("/profile", "/"),
            GuardDecision::Redirect("/login".to_string())
        );

        session.set_token("state").unwrap();
        assert_eq!(guard.check("/profile", "/"), GuardDecision::Proceed);

        session.clear().unwrap();
        assert_eq!(
            guard.check("/profile", "/"),
            GuardDecision::Redirect("/login".to_string())
        );
    }
}
