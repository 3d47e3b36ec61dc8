//! Inline error notice.

use leptos::prelude::*;

use crate::ui::components::AlertIcon;
use crate::ui::render_fragment;

#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div
            role="alert"
            class="flex items-center gap-2 rounded-xl border border-danger/40 bg-danger/10 px-4 py-3 text-sm text-danger"
        >
            <AlertIcon />
            <span>{message}</span>
        </div>
    }
}

/// Render an [`ErrorNotice`] as an HTML fragment.
pub fn render_error_notice(message: String) -> String {
    render_fragment(move || view! { <ErrorNotice message=message /> })
}
