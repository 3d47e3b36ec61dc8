//! External chat backend.
//!
//! Retrieval and generation happen in a separate service. This module only
//! defines how turns are handed to it and how its answer comes back.
//!
//! - [`ChatBackend`]: the seam used by request handlers
//! - [`HttpChatBackend`]: JSON-over-HTTP implementation

mod http;

use async_trait::async_trait;

pub use http::HttpChatBackend;

use crate::error::Result;
use crate::session::Turn;

/// Produces the next assistant turn for a conversation.
#[async_trait]
pub trait ChatBackend: Send + Sync + std::fmt::Debug {
    /// `turns` is the full conversation, oldest first, ending with the
    /// user's latest message.
    async fn complete(&self, turns: &[Turn]) -> Result<Turn>;
}
