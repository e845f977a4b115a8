//! TeamUp Client - the single choke point for backend traffic
//!
//! Every call to the TeamUp backend goes through [`ApiClient`], which
//! enforces the uniform `{code, data, message}` response envelope: business
//! success (`code == 0`) resolves to the unwrapped `data`, everything else
//! becomes an [`ApiError`] classified as either a transport failure or a
//! business failure. Callers only ever handle `Ok` vs `Err`.
//!
//! The client core is pure; surfacing failures to a human goes through the
//! [`NotifyingClient`] adapter, which emits exactly one notification per
//! failed call and stays silent on success. The typed request functions in
//! [`api`] cover the user, team, chat, and file domains.

#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod notify;

pub use client::{ApiClient, ClientConfig, RequestInterceptor, SessionAuth};
pub use error::{
    ApiError, ApiResult, FailureKind, NETWORK_ERROR_FALLBACK, SERVICE_ERROR_FALLBACK,
};
pub use notify::{Notifier, NotifyingClient};
