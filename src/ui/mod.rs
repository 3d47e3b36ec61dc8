//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the chat
//! application, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`layout`]: Root document shell and page metadata
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat-specific layout components
//! - [`footer`]: Attribution footer
//! - [`markdown`]: Markdown to HTML conversion with element overrides
//! - [`style`]: Class-name concatenation

pub mod chat;
pub mod components;
pub mod footer;
pub mod layout;
pub mod markdown;
pub mod style;

use leptos::prelude::*;

/// Render a view to an HTML fragment.
///
/// Rendering runs under a fresh reactive owner so it can be called from any
/// request handler.
pub fn render_fragment<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Render a view as a complete HTML document.
pub fn render_document<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    format!("<!DOCTYPE html>{}", render_fragment(view))
}
