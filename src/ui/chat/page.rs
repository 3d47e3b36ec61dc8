//! Full-document pages.

use leptos::prelude::*;

use super::{ChatReply, ChatShell};
use crate::config::SiteConfig;
use crate::session::Turn;
use crate::ui::footer::Attribution;
use crate::ui::layout::{Layout, PageMetadata};
use crate::ui::{render_document, render_fragment};

/// Chat page for one session.
#[component]
pub fn ChatPage(
    metadata: PageMetadata,
    attributions: Vec<Attribution>,
    session_id: String,
    turns: Vec<Turn>,
) -> impl IntoView {
    let title = metadata.title.clone();

    view! {
        <Layout metadata=metadata attributions=attributions>
            <ChatShell title=title session_id=session_id turns=turns />
        </Layout>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage(metadata: PageMetadata, attributions: Vec<Attribution>) -> impl IntoView {
    view! {
        <Layout metadata=metadata attributions=attributions>
            <div class="flex flex-col items-center justify-center py-20">
                <h1 class="mb-4 text-4xl font-bold">"404"</h1>
                <p class="mb-6 text-textMuted">"This conversation does not exist or has expired."</p>
                <a
                    href="/"
                    class="inline-flex h-10 items-center justify-center rounded-lg bg-primary px-4 text-sm font-medium text-white hover:bg-primaryMuted"
                >
                    "Start a new chat"
                </a>
            </div>
        </Layout>
    }
}

/// Full chat document for a session.
pub fn render_chat_page(site: &SiteConfig, session_id: &str, turns: Vec<Turn>) -> String {
    let metadata = PageMetadata::from(site);
    let attributions = site.attributions.clone();
    let session_id = session_id.to_string();
    render_document(move || {
        view! {
            <ChatPage
                metadata=metadata
                attributions=attributions
                session_id=session_id
                turns=turns
            />
        }
    })
}

/// 404 document for unknown or expired sessions.
pub fn render_not_found_page(site: &SiteConfig) -> String {
    let metadata = PageMetadata::from(site);
    let attributions = site.attributions.clone();
    render_document(move || view! { <NotFoundPage metadata=metadata attributions=attributions /> })
}

/// Fragment appended to the thread after a submission.
pub fn render_chat_reply(
    turns: Vec<Turn>,
    remove_empty_screen: bool,
    error: Option<String>,
) -> String {
    render_fragment(move || {
        view! {
            <ChatReply turns=turns remove_empty_screen=remove_empty_screen error=error />
        }
    })
}
