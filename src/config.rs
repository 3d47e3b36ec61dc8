//! Layered application configuration.
//!
//! Priority, highest first: CLI flag (or its env var) > `PHYSCHAT_*` env >
//! config file > defaults.

use clap::Parser;
use clap::error::ErrorKind;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::session::DEFAULT_SESSION_TIMEOUT;
use crate::ui::footer::{Attribution, default_attributions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Chat backend endpoint
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Idle time after which a conversation is dropped.
    pub session_ttl_secs: u64,
    /// Whole-request timeout, including the backend round trip.
    pub request_timeout_secs: u64,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Endpoint receiving `{"messages": [...]}`.
    pub url: String,
    pub timeout_secs: u64,
}

/// Presentation settings shared by every page.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Favicon path.
    pub icon: String,
    pub font_href: String,
    pub htmx_src: String,
    pub attributions: Vec<Attribution>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Physics RAG App".to_string(),
            description: "Physics Scientific Literature Chat Bot".to_string(),
            icon: "/static/favicon.svg".to_string(),
            font_href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&display=swap"
                .to_string(),
            htmx_src: "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js".to_string(),
            attributions: default_attributions(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            // --help and --version print to stdout and exit 0.
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => return Err(config::ConfigError::Message(e.to_string())),
        };

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.session_ttl_secs", DEFAULT_SESSION_TIMEOUT.as_secs())?
            .set_default("server.request_timeout_secs", 120)?
            .set_default("server.static_dir", "static")?
            .set_default("backend.url", "http://127.0.0.1:8000/api/chat")?
            .set_default("backend.timeout_secs", 90)?;

        // An explicit file must exist; ./config.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. PHYSCHAT_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("PHYSCHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // clap already folded PORT/BIND_HOST/BACKEND_URL into these.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.backend_url {
            builder = builder.set_override("backend.url", url)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
