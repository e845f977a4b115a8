//! TeamUp Guard - session-gated navigation
//!
//! Every view transition funnels through [`NavigationGuard::check`], which
//! classifies the target route against a static [`RouteTable`] and the
//! current session state, then returns exactly one decision: proceed or
//! redirect. The guard never performs I/O and never mutates the session; it
//! reads an injected [`SessionStore`](teamup_session::SessionStore).

#![deny(unsafe_code)]

pub mod guard;
pub mod routes;

pub use guard::{GuardDecision, NavigationGuard};
pub use routes::{RouteClass, RouteTable};
