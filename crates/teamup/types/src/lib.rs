//! TeamUp Types - wire shapes exchanged with the partner-matching backend
//!
//! Every payload travels inside the uniform `{code, data, message}` response
//! envelope; the shapes here describe only the `data` half. Field names are
//! camelCase on the wire, matching the backend's JSON contract.
//!
//! ## Key Concepts
//!
//! - **VO** (view object): what the backend returns (`User`, `Team`,
//!   `ChatMessage`)
//! - **DTO** (request body): what the client sends (`UserUpdate`,
//!   `TeamJoin`, `TeamSearch`, ...)

#![deny(unsafe_code)]

pub mod chat;
pub mod team;
pub mod user;

// Re-export main types
pub use chat::ChatMessage;
pub use team::{
    Team, TeamCreate, TeamInvite, TeamJoin, TeamPage, TeamQuit, TeamSearch, TeamUpdate,
};
pub use user::{AvatarUpdate, LoginRequest, RegisterRequest, User, UserUpdate};
