//! Chat input area component.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, SendIcon};

/// Chat message input with HTMX form submission.
///
/// Replies are appended to `#chat-messages`.
#[component]
pub fn ChatInputArea(
    /// Session the message belongs to.
    session_id: String,
) -> impl IntoView {
    view! {
        <div class="border-t border-panelBorder bg-panel/50 p-4 backdrop-blur-sm">
            <form
                id="chat-form"
                class="flex gap-2"
                hx-post="/api/chat"
                hx-target="#chat-messages"
                hx-swap="beforeend scroll:#chat-scroll:bottom"
                hx-disabled-elt="find button"
                hx-indicator="#chat-pending"
                hx-on--after-request="if (event.detail.successful) this.reset()"
            >
                <input type="hidden" name="session_id" value=session_id />

                <div class="relative flex-1">
                    <textarea
                        name="message"
                        placeholder="Ask a question about physics papers..."
                        class="w-full min-h-[44px] max-h-[200px] resize-none rounded-xl border border-panelBorder \
                               bg-background px-4 py-3 text-textPrimary placeholder:text-textMuted \
                               focus:border-transparent focus:outline-none focus:ring-2 focus:ring-primary"
                        rows="1"
                        required
                        onkeydown="if (event.key === 'Enter' && !event.shiftKey) { event.preventDefault(); this.form.requestSubmit(); }"
                    ></textarea>
                </div>

                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Icon
                    button_type="submit"
                    class="h-11 w-11 shrink-0 rounded-xl"
                >
                    <SendIcon size="h-5 w-5" />
                </Button>
            </form>

            <p id="chat-pending" class="htmx-indicator mt-2 text-center text-xs text-textMuted">
                "Searching the literature..."
            </p>
        </div>
    }
}
