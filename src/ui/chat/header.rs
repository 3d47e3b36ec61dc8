//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{LogoIcon, PlusIcon};

/// Chat header with title and a "new chat" link.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    title: String,
) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between border-b border-panelBorder px-4 py-3">
            <div class="flex items-center gap-2">
                <LogoIcon size="h-6 w-6" class="text-primary" />
                <h1 class="text-lg font-semibold">{title}</h1>
            </div>

            <a
                href="/"
                class="inline-flex items-center gap-1 rounded-lg px-3 py-1.5 text-sm text-textMuted \
                       transition-colors hover:bg-panel hover:text-textPrimary"
            >
                <PlusIcon />
                "New chat"
            </a>
        </header>
    }
}
