//! ShadCN-style reusable UI components.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`ChatAvatar`]: Role avatar (user glyph or logo mark)
//! - [`icons`]: SVG icon components

mod avatar;
mod button;
mod icons;

pub use avatar::{AvatarKind, ChatAvatar};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::*;
