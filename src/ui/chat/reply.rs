//! HTMX fragment returned after a message is submitted.

use leptos::prelude::*;

use super::{ChatTurns, EMPTY_SCREEN_ID, ErrorNotice};
use crate::session::Turn;

/// New turns to append to the thread, plus out-of-band updates.
#[component]
pub fn ChatReply(
    /// Turns added by this exchange.
    turns: Vec<Turn>,
    /// Remove the starter panel (first exchange of the session).
    #[prop(default = false)]
    remove_empty_screen: bool,
    /// Shown below the turns when the backend could not answer.
    #[prop(default = None)]
    error: Option<String>,
) -> impl IntoView {
    view! {
        <ChatTurns turns=turns />
        {error.map(|message| view! { <ErrorNotice message=message /> })}
        {remove_empty_screen.then(|| view! { <div id=EMPTY_SCREEN_ID hx-swap-oob="delete"></div> })}
    }
}
