//! Role avatar.

use leptos::prelude::*;

use super::{LogoIcon, UserIcon};
use crate::cn;
use crate::session::Role;

/// Which glyph an avatar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarKind {
    /// The end user's glyph.
    User,
    /// The application's logo mark.
    Logo,
}

impl AvatarKind {
    #[must_use]
    pub fn for_user(is_user: bool) -> Self {
        if is_user { Self::User } else { Self::Logo }
    }

    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self::for_user(role.is_user())
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Logo => "logo",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::User => "bg-background text-textPrimary border-panelBorder",
            Self::Logo => "bg-primary text-white border-primary",
        }
    }
}

/// Fixed-size circular avatar for a conversation turn.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatAvatar is_user=true class="mt-1" />
/// }
/// ```
#[component]
pub fn ChatAvatar(
    /// Whether the turn belongs to the end user.
    is_user: bool,
    /// Additional CSS classes.
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    let kind = AvatarKind::for_user(is_user);
    let classes = cn!(
        "flex h-8 w-8 shrink-0 select-none items-center justify-center rounded-full border shadow-sm",
        kind.classes(),
        class,
    );

    view! {
        <div class=classes data-avatar=kind.as_str()>
            {match kind {
                AvatarKind::User => view! { <UserIcon size="h-4 w-4" /> }.into_any(),
                AvatarKind::Logo => view! { <LogoIcon size="h-5 w-5" /> }.into_any(),
            }}
        </div>
    }
}
