//! Attribution footer.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cn;

/// What an attribution link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributionKind {
    /// A third-party service the application is built on.
    #[default]
    Service,
    /// The application's own source repository.
    Source,
}

/// One outbound link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub kind: AttributionKind,
}

impl Attribution {
    pub fn service(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            kind: AttributionKind::Service,
        }
    }

    pub fn source(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            kind: AttributionKind::Source,
        }
    }
}

/// Attributions shown when none are configured.
#[must_use]
pub fn default_attributions() -> Vec<Attribution> {
    vec![
        Attribution::service("LangChain", "https://www.langchain.com/"),
        Attribution::service("Vercel AI SDK", "https://sdk.vercel.ai"),
        Attribution::service("Upstash Vector", "https://upstash.com"),
        Attribution::source("Source Code", "https://github.com/rahulsinghh4/RAG/"),
    ]
}

/// Separator placed before the `index`-th of `len` inline items.
fn list_separator(index: usize, len: usize) -> &'static str {
    match index {
        0 => "",
        i if i + 1 == len => " and ",
        _ => ", ",
    }
}

#[component]
fn ExternalLink(attribution: Attribution) -> impl IntoView {
    let kind = match attribution.kind {
        AttributionKind::Service => "service",
        AttributionKind::Source => "source",
    };

    view! {
        <a
            href=attribution.url
            target="_blank"
            rel="noopener noreferrer"
            class="font-medium underline underline-offset-4 hover:text-textPrimary"
            data-attribution=kind
        >
            {attribution.label}
        </a>
    }
}

/// Static footer crediting the services the application builds on and
/// linking its source code.
#[component]
pub fn AttributionFooter(
    /// Links to show.
    #[prop(default = default_attributions())]
    attributions: Vec<Attribution>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let (services, sources): (Vec<_>, Vec<_>) = attributions
        .into_iter()
        .partition(|a| a.kind == AttributionKind::Service);
    let service_count = services.len();
    let source_count = sources.len();
    let classes = cn!("px-2 py-3 text-center text-xs leading-normal text-textMuted", class);

    let built_using = (service_count > 0).then(|| {
        view! {
            "Built using "
            {services
                .into_iter()
                .enumerate()
                .map(|(i, attribution)| view! {
                    {list_separator(i, service_count)}
                    <ExternalLink attribution=attribution />
                })
                .collect_view()}
        }
    });
    let divider = (service_count > 0 && source_count > 0).then_some(" ・ ");
    let source_links = (source_count > 0).then(|| {
        sources
            .into_iter()
            .enumerate()
            .map(|(i, attribution)| view! {
                {list_separator(i, source_count)}
                <ExternalLink attribution=attribution />
            })
            .collect_view()
    });
    let has_links = service_count + source_count > 0;

    view! {
        <footer class=classes>
            <p>
                "This is a prototype RAG built for Physics Literature."
                {has_links.then(|| view! { <br /> })}
                {built_using}
                {divider}
                {source_links}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_fragment;

    #[test]
    fn separators() {
        assert_eq!(list_separator(0, 3), "");
        assert_eq!(list_separator(1, 3), ", ");
        assert_eq!(list_separator(2, 3), " and ");
        assert_eq!(list_separator(1, 2), " and ");
    }

    #[test]
    fn default_footer_links() {
        let html = render_fragment(|| view! { <AttributionFooter /> });
        assert_eq!(html.matches(r#"data-attribution="service""#).count(), 3);
        assert_eq!(html.matches(r#"data-attribution="source""#).count(), 1);
        assert_eq!(html.matches(r#"target="_blank""#).count(), 4);
        assert!(html.contains("This is a prototype RAG built for Physics Literature."));
        assert!(html.contains("Built using"));
        for url in [
            "https://www.langchain.com/",
            "https://sdk.vercel.ai",
            "https://upstash.com",
            "https://github.com/rahulsinghh4/RAG/",
        ] {
            assert!(html.contains(url), "missing {url}");
        }
        assert!(html.contains("Source Code"));
    }

    #[test]
    fn custom_list_without_source() {
        let html = render_fragment(|| {
            view! {
                <AttributionFooter attributions=vec![Attribution::service("INSPIRE", "https://inspirehep.net")] />
            }
        });
        assert_eq!(html.matches("data-attribution=").count(), 1);
        assert!(!html.contains("Source Code"));
        assert!(!html.contains("・"));
    }

    #[test]
    fn source_only_list_skips_built_using() {
        let html = render_fragment(|| {
            view! {
                <AttributionFooter attributions=vec![Attribution::source("Code", "https://example.org/repo")] />
            }
        });
        assert!(html.contains("prototype RAG"));
        assert!(!html.contains("Built using"));
        assert!(!html.contains("・"));
        assert_eq!(html.matches(r#"data-attribution="source""#).count(), 1);
    }

    #[test]
    fn empty_list_renders_only_the_notice() {
        let html = render_fragment(|| view! { <AttributionFooter attributions=vec![] /> });
        assert!(html.contains("prototype RAG"));
        assert!(!html.contains("Built using"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn kind_defaults_to_service_when_deserialized() {
        let a: Attribution =
            serde_json::from_str(r#"{"label":"ADS","url":"https://ui.adsabs.harvard.edu"}"#)
                .unwrap();
        assert_eq!(a.kind, AttributionKind::Service);
    }
}
