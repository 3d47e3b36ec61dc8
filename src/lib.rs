//! physchat
//!
//! Server-rendered chat front end for question answering over physics
//! literature. Retrieval, embeddings and model calls live in an external chat
//! backend; this crate renders the conversation and relays turns to it.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server, HTMX fragments for in-page updates
//! - **UI**: Leptos SSR components (layout shell, avatars, markdown messages)
//! - **Backend client**: thin HTTP client for the external chat service
//!
//! # Modules
//!
//! - [`backend`]: chat backend trait and HTTP implementation
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`content`]: static content such as starter questions
//! - [`session`]: conversation turns and in-memory session storage
//! - [`ui`]: Leptos components and rendering helpers

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod backend;
pub mod config;
pub mod content;
pub mod error;
pub mod server;
pub mod session;
pub mod ui;

use std::sync::Arc;

use backend::ChatBackend;
use config::SiteConfig;
use session::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Session store for conversation management.
    pub sessions: SessionStore,
    /// External chat service that produces assistant turns.
    pub backend: Arc<dyn ChatBackend>,
    /// Site-wide presentation settings.
    pub site: Arc<SiteConfig>,
}
