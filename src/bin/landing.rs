//! Command-line driver for the landing actions.
//!
//! Runs the same flow as the landing page, against the terminal: the status
//! region is printed, deep links are printed (and optionally opened), and
//! tracking/analytics go to the configured backends.
//!
//! # Usage
//!
//! ```bash
//! # Start a session with UTM tags
//! cargo run --bin landing -- session --utm-source newsletter --utm-campaign spring
//!
//! # Check a site (prompts when URL is omitted)
//! cargo run --bin landing -- check example.ru --open
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `seo_landing::config`.

use seo_landing::{config, logging};
use seo_landing::domain::deep_link::DeepLink;
use seo_landing::domain::ports::LandingView;
use seo_landing::domain::status::StatusKind;
use seo_landing::domain::visit::{UtmParams, VisitContext};
use seo_landing::presentation::SiteUrlField;
use seo_landing::server::build_landing_service;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::process::Command;
use std::sync::Arc;

/// Open the SEO checker bot from the terminal.
#[derive(Parser)]
#[command(name = "landing")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Launch deep links with the system opener
    #[arg(long, global = true)]
    open: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a bot session (the CTA button)
    Session {
        #[command(flatten)]
        visit: VisitArgs,
    },

    /// Ask the bot to check a site (the form)
    Check {
        /// Site URL; `https://` is added when the scheme is missing
        url: Option<String>,

        #[command(flatten)]
        visit: VisitArgs,
    },
}

/// Traffic source attached to the tracking payload.
#[derive(Args)]
struct VisitArgs {
    #[arg(long)]
    utm_source: Option<String>,
    #[arg(long)]
    utm_medium: Option<String>,
    #[arg(long)]
    utm_campaign: Option<String>,
    #[arg(long)]
    utm_term: Option<String>,
    #[arg(long)]
    utm_content: Option<String>,
    #[arg(long)]
    referrer: Option<String>,
}

impl VisitArgs {
    fn into_visit(self) -> VisitContext {
        let utm = UtmParams {
            utm_source: self.utm_source,
            utm_medium: self.utm_medium,
            utm_campaign: self.utm_campaign,
            utm_term: self.utm_term,
            utm_content: self.utm_content,
        };
        let user_agent = concat!("seo-landing-cli/", env!("CARGO_PKG_VERSION"));

        VisitContext::new(utm, self.referrer.as_deref(), Some(user_agent))
    }
}

/// Prints the status region and deep links to stdout.
struct TerminalView {
    launch: bool,
}

impl LandingView for TerminalView {
    fn show_status(&self, kind: StatusKind, message: &str) {
        let line = kind.decorate(message);
        let line = match kind {
            StatusKind::Success => line.green(),
            StatusKind::Error => line.red(),
            StatusKind::Info => line.cyan(),
        };
        println!("{}", line);
    }

    fn open_in_new_context(&self, link: &DeepLink) {
        println!("{} {}", "→".bold(), link.as_str().underline());

        if self.launch
            && let Err(e) = launch(link.as_str())
        {
            println!("{} {}", "Could not open link:".yellow(), e);
        }
    }

    fn reset_form(&self) {
        println!("{}", "Form cleared".dimmed());
    }
}

fn launch(target: &str) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };

    command.arg(target).spawn().map(|_| ())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (log_level, log_format) = logging::settings_from_env();
    logging::init_tracing(&log_level, &log_format);

    let config = config::load_from_env().context("Invalid configuration")?;
    let service = build_landing_service(&config)?;
    let view = Arc::new(TerminalView { launch: cli.open });

    match cli.command {
        Commands::Session { visit } => {
            let outcome = service.start_session(view.as_ref(), &visit.into_visit());
            println!("Session: {}", outcome.session_id.to_string().bold());

            if !outcome.tracking.outcome().await.is_delivered() {
                println!("{}", "Tracking request failed (see logs)".dimmed());
            }
        }
        Commands::Check { url, visit } => {
            let raw = match url {
                Some(url) => url,
                None => Input::<String>::new()
                    .with_prompt("Site URL")
                    .interact_text()?,
            };

            let mut field = SiteUrlField::new(raw);
            field.on_blur();

            match service.check_site(view.clone(), field.value(), &visit.into_visit()) {
                Ok(outcome) => {
                    outcome.form_reset.completed().await;
                }
                Err(_) => std::process::exit(1),
            }
        }
    }

    Ok(())
}
