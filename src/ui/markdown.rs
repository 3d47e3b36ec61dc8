//! Markdown to HTML conversion.
//!
//! Turn content is CommonMark (plus tables, strikethrough, task lists,
//! footnotes and `$…$` math). List elements can be overridden to carry
//! presentation classes, everything else goes through pulldown-cmark's HTML
//! writer unchanged. Content is trusted: raw HTML in the source is emitted
//! as-is.

use std::fmt::Write as _;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Replacement for one rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementOverride {
    /// Tag name to emit.
    pub tag: &'static str,
    /// Class attribute value.
    pub class: &'static str,
}

/// Per-element rendering overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOverrides {
    pub ordered_list: ElementOverride,
    pub unordered_list: ElementOverride,
}

impl Default for MarkdownOverrides {
    fn default() -> Self {
        Self {
            ordered_list: ElementOverride {
                tag: "ol",
                class: "list-decimal pl-6 space-y-1",
            },
            unordered_list: ElementOverride {
                tag: "ul",
                class: "list-disc pl-6 space-y-1",
            },
        }
    }
}

impl MarkdownOverrides {
    fn list(&self, ordered: bool) -> ElementOverride {
        if ordered {
            self.ordered_list
        } else {
            self.unordered_list
        }
    }
}

/// Markdown renderer with element overrides.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    overrides: MarkdownOverrides,
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(MarkdownOverrides::default())
    }
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new(overrides: MarkdownOverrides) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_MATH);
        Self { overrides, options }
    }

    #[must_use]
    pub fn overrides(&self) -> &MarkdownOverrides {
        &self.overrides
    }

    /// Convert markdown to HTML. Malformed input renders best-effort.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let events = Parser::new_ext(source, self.options).map(|event| match event {
            Event::Start(Tag::List(start)) => Event::Html(self.open_list(start)),
            Event::End(TagEnd::List(ordered)) => {
                Event::Html(format!("</{}>\n", self.overrides.list(ordered).tag).into())
            }
            other => other,
        });

        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, events);
        out
    }

    fn open_list(&self, start: Option<u64>) -> CowStr<'static> {
        let element = self.overrides.list(start.is_some());
        let mut tag = format!("<{} class=\"{}\"", element.tag, element.class);
        if let Some(n) = start.filter(|&n| n != 1) {
            let _ = write!(tag, " start=\"{n}\"");
        }
        tag.push_str(">\n");
        tag.into()
    }
}
