//! Conversation thread.

use leptos::prelude::*;

use super::ChatMessage;
use crate::session::Turn;

/// Ordered list of turns.
///
/// The `#chat-messages` container is the swap target for new turns.
#[component]
pub fn ChatMessageList(turns: Vec<Turn>) -> impl IntoView {
    view! {
        <div id="chat-messages" class="space-y-4 p-4" aria-live="polite" aria-label="Chat messages">
            <ChatTurns turns=turns />
        </div>
    }
}

/// Bare sequence of rendered turns, used for HTMX fragments.
#[component]
pub fn ChatTurns(turns: Vec<Turn>) -> impl IntoView {
    turns
        .into_iter()
        .map(|turn| view! { <ChatMessage turn=turn /> })
        .collect_view()
}
