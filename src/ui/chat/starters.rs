//! Empty-conversation screen with starter questions.

use leptos::prelude::*;

use crate::content::StarterQuestion;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, LogoIcon};

/// Shown until the first turn; each starter submits itself as a message.
///
/// New turns delete this panel out of band (see `EMPTY_SCREEN_ID`).
#[component]
pub fn EmptyScreen(
    session_id: String,
    questions: &'static [StarterQuestion],
) -> impl IntoView {
    view! {
        <div id=EMPTY_SCREEN_ID class="mx-auto max-w-2xl px-4 py-8">
            <div class="rounded-xl border border-panelBorder bg-background p-6">
                <div class="mb-2 flex items-center gap-2">
                    <LogoIcon size="h-6 w-6" class="text-primary" />
                    <h2 class="text-lg font-semibold">"Ask the physics literature"</h2>
                </div>
                <p class="mb-4 leading-normal text-textMuted">
                    "Ask a question and get an answer grounded in published papers. \
                     You can start with one of these:"
                </p>
                <div class="flex flex-col items-start space-y-2">
                    {questions
                        .iter()
                        .map(|question| {
                            view! {
                                <form
                                    hx-post="/api/chat"
                                    hx-target="#chat-messages"
                                    hx-swap="beforeend"
                                    data-starter=""
                                >
                                    <input type="hidden" name="session_id" value=session_id.clone() />
                                    <input type="hidden" name="message" value=question.content />
                                    <Button
                                        variant=ButtonVariant::Ghost
                                        size=ButtonSize::Sm
                                        button_type="submit"
                                        class="h-auto p-0 text-left text-base"
                                    >
                                        "→ "
                                        {question.content}
                                    </Button>
                                </form>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// DOM id of the empty-conversation panel.
pub const EMPTY_SCREEN_ID: &str = "chat-empty";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::STARTER_QUESTIONS;
    use crate::ui::render_fragment;

    #[test]
    fn one_prompt_per_starter() {
        let html = render_fragment(|| {
            view! { <EmptyScreen session_id="s-1".to_string() questions=&STARTER_QUESTIONS /> }
        });
        assert_eq!(html.matches("data-starter").count(), 4);
        assert_eq!(html.matches(r#"value="s-1""#).count(), 4);
        for question in &STARTER_QUESTIONS {
            assert!(html.contains(question.content));
        }
    }
}
