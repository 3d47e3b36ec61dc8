//! Single conversation turn.

use leptos::prelude::*;

use crate::cn;
use crate::session::Turn;
use crate::ui::components::ChatAvatar;
use crate::ui::markdown::MarkdownRenderer;

/// Renders one turn: the role avatar next to the markdown body.
///
/// User and assistant turns differ only in background and text colour.
#[component]
pub fn ChatMessage(turn: Turn) -> impl IntoView {
    let is_user = turn.role.is_user();
    let body = MarkdownRenderer::default().render(&turn.content);
    let classes = cn!(
        "group relative flex items-start gap-3 rounded-xl px-4 py-3",
        is_user.then_some("bg-background text-textPrimary"),
        (!is_user).then_some("bg-panel text-textSecondary"),
    );

    view! {
        <div class=classes data-role=turn.role.as_str()>
            <ChatAvatar is_user=is_user />
            <div
                class="prose prose-sm min-w-0 flex-1 space-y-2 overflow-hidden break-words leading-relaxed"
                inner_html=body
            ></div>
        </div>
    }
}
