//! Chat shell layout component.

use leptos::prelude::*;

use super::{ChatHeader, ChatInputArea, ChatMessageList, EmptyScreen};
use crate::content::STARTER_QUESTIONS;
use crate::session::Turn;

/// Main chat shell component.
///
/// Provides the complete chat interface layout with:
/// - Header with title and a "new chat" link
/// - Scrollable thread, or the starter questions while it is empty
/// - Input area for new messages
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatShell
///         title="Physics RAG App".to_string()
///         session_id="abc123".to_string()
///         turns=vec![]
///     />
/// }
/// ```
#[component]
pub fn ChatShell(
    /// Title displayed in the header.
    title: String,
    /// Session the page belongs to.
    session_id: String,
    /// Turns so far, oldest first.
    turns: Vec<Turn>,
) -> impl IntoView {
    let is_empty = turns.is_empty();
    let starter_session = session_id.clone();

    view! {
        <div class="chat-shell flex h-[calc(100vh-8rem)] flex-col overflow-hidden rounded-2xl border border-panelBorder bg-panel">
            <ChatHeader title=title />

            <div id="chat-scroll" class="flex-1 overflow-y-auto">
                {is_empty.then(|| view! {
                    <EmptyScreen session_id=starter_session questions=&STARTER_QUESTIONS />
                })}
                <ChatMessageList turns=turns />
            </div>

            <ChatInputArea session_id=session_id />
        </div>
    }
}
