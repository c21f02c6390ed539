//! Entry point for the portfolio site.
//!
//! Loads configuration, opens durable storage, and launches the Dioxus
//! desktop window.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_core::SiteConfig;
use folio_core::content::PROFILE;
use folio_site::SITE_CSS;
use folio_site::components::App;
use folio_site::logging::LogConfig;
use folio_site::services::Services;

/// Collaborators built before launch.
static SERVICES: OnceLock<Services> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-site")]
#[command(about = "Personal portfolio site")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for persisted preferences (overrides the config file)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(short, long)]
    log_level: Option<String>,

    /// Development logging (debug level, pretty output)
    #[arg(long)]
    dev: bool,
}

fn main() {
    let args = Args::parse();

    let mut log_config = if args.dev {
        LogConfig::development()
    } else {
        LogConfig::default()
    };
    if let Some(level) = args.log_level {
        log_config = log_config.with_level(level);
    }
    log_config.init();

    tracing::info!("Starting portfolio site");

    let mut config = match SiteConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, using defaults");
            SiteConfig::default()
        }
    };
    if let Some(dir) = args.data_dir {
        config = config.with_data_dir(dir);
    }
    if !config.email.is_configured() {
        tracing::warn!("Email relay credentials missing; contact form submissions will fail");
    }

    SERVICES.set(Services::from_config(config)).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("{} - Portfolio", PROFILE.name))
                        .with_inner_size(LogicalSize::new(1400, 900)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    SITE_CSS
                )),
        )
        .launch(RootApp);
}

/// Provides the services to the tree and logs shutdown.
#[component]
fn RootApp() -> Element {
    use_context_provider(|| {
        SERVICES
            .get()
            .cloned()
            .unwrap_or_else(|| Services::from_config(SiteConfig::default()))
    });

    use_drop(|| {
        tracing::info!("Shutting down portfolio site");
    });

    rsx! { App {} }
}
