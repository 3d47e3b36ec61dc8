//! Root document shell.
//!
//! Every page is wrapped in [`Layout`], which sets the document metadata,
//! the shared font and the base colours, and appends the attribution footer.

use leptos::prelude::*;

use crate::cn;
use crate::config::SiteConfig;
use crate::ui::footer::{Attribution, AttributionFooter, default_attributions};

/// Body class applying the shared font (declared in `app.css`).
const FONT_CLASS: &str = "font-sans";

/// HTMX response handling: error fragments (4xx/5xx) are swapped into the
/// target like successful ones, so rejected messages show their notice.
pub const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"[45]..","swap":true,"error":true},{"code":"...","swap":false}]}"#;

/// Document head metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Favicon path.
    pub icon: String,
    /// Web font stylesheet.
    pub font_href: String,
    /// HTMX script source.
    pub htmx_src: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

impl From<&SiteConfig> for PageMetadata {
    fn from(site: &SiteConfig) -> Self {
        Self {
            title: site.title.clone(),
            description: site.description.clone(),
            icon: site.icon.clone(),
            font_href: site.font_href.clone(),
            htmx_src: site.htmx_src.clone(),
        }
    }
}

/// Page-wide shell.
#[component]
pub fn Layout(
    metadata: PageMetadata,
    /// Footer links.
    #[prop(default = default_attributions())]
    attributions: Vec<Attribution>,
    children: Children,
) -> impl IntoView {
    let body_classes = cn!("min-h-screen bg-background text-textPrimary antialiased", FONT_CLASS);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=metadata.description />
                <meta name="htmx-config" content=HTMX_CONFIG />

                <title>{metadata.title}</title>

                <link rel="icon" href=metadata.icon />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=metadata.font_href />
                <link rel="stylesheet" href="/static/app.css" />

                <script src=metadata.htmx_src></script>
            </head>

            <body class=body_classes>
                <div id="app-shell" class="flex min-h-screen flex-col">
                    <main id="app" class="container mx-auto flex max-w-3xl flex-1 flex-col px-4 py-6">
                        {children()}
                    </main>
                    <AttributionFooter attributions=attributions />
                </div>
            </body>
        </html>
    }
}
