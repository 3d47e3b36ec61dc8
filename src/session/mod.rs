//! Conversation turns and session management.
//!
//! This module provides in-memory session storage for managing conversation
//! state across requests. Sessions are identified by UUID and hold the full
//! ordered list of turns.
//!
//! # Architecture
//!
//! - [`Turn`]: one message attributed to the user or the assistant
//! - [`Session`]: a single conversation
//! - [`SessionStore`]: thread-safe store for all active sessions
//!
//! # Example
//!
//! ```rust
//! use physchat::session::{Role, SessionStore};
//!
//! let store = SessionStore::new();
//! let session = store.create();
//! session.add_user_turn("What is a Wilson loop?");
//!
//! let turns = session.turns();
//! assert_eq!(turns.len(), 1);
//! assert_eq!(turns[0].role, Role::User);
//! ```

mod thread;
mod turn;

pub use thread::{DEFAULT_SESSION_TIMEOUT, Session, SessionState, SessionStore};
pub use turn::{Role, Turn};
