//! Chat-specific UI components.
//!
//! Pages render the full thread server-side; follow-up turns arrive as HTMX
//! fragments ([`ChatReply`]) appended to the thread container.

mod header;
mod input_area;
mod message;
mod message_list;
mod notice;
mod page;
mod reply;
mod shell;
mod starters;

pub use header::ChatHeader;
pub use input_area::ChatInputArea;
pub use message::ChatMessage;
pub use message_list::{ChatMessageList, ChatTurns};
pub use notice::{ErrorNotice, render_error_notice};
pub use page::{
    ChatPage, NotFoundPage, render_chat_page, render_chat_reply, render_not_found_page,
};
pub use reply::ChatReply;
pub use shell::ChatShell;
pub use starters::{EMPTY_SCREEN_ID, EmptyScreen};
