//! Typed request functions per backend domain
//!
//! Thin, declarative wrappers: each function names a path, a method, and the
//! payload shapes, and delegates everything else to the client. None of them
//! parse envelopes or classify failures.

pub mod chat;
pub mod file;
pub mod team;
pub mod user;
