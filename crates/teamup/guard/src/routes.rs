//! Route classification table
//!
//! Classification is static configuration: a path is public only if it is
//! explicitly enumerated, and everything else is protected. An unrecognized
//! path therefore never becomes an authentication bypass.

use std::collections::BTreeSet;

/// Whether a route is reachable without an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable while logged out (entry views).
    Public,
    /// Requires an authenticated session.
    Protected,
}

/// Static route configuration consulted on every navigation.
#[derive(Debug, Clone)]
pub struct RouteTable {
    public: BTreeSet<String>,
    login: String,
    root: String,
    default_landing: String,
}

impl Default for RouteTable {
    /// The application's route setup: `/login` and `/register` are the only
    /// public entry views, the root forwards to the `/match` landing view.
    fn default() -> Self {
        Self::new("/login", "/", "/match")
            .with_public("/login")
            .with_public("/register")
    }
}

impl RouteTable {
    /// Table with an empty public set. Add entry views with
    /// [`with_public`](Self::with_public).
    pub fn new(
        login: impl Into<String>,
        root: impl Into<String>,
        default_landing: impl Into<String>,
    ) -> Self {
        Self {
            public: BTreeSet::new(),
            login: login.into(),
            root: root.into(),
            default_landing: default_landing.into(),
        }
    }

    /// Mark a path as reachable without authentication.
    pub fn with_public(mut self, path: impl Into<String>) -> Self {
        self.public.insert(path.into());
        self
    }

    /// Classify a path. Unlisted paths are protected.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.public.contains(path) {
            RouteClass::Public
        } else {
            RouteClass::Protected
        }
    }

    /// Where unauthenticated sessions are sent.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// The application root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Where authenticated sessions land when arriving from the root.
    pub fn default_landing(&self) -> &str {
        &self.default_landing
    }
}
