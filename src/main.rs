//! Terminal front end for the short-link client.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a link (prompts for anything missing)
//! short create https://example.com/some/long/path --alias docs
//!
//! # Print the short link and QR code for an alias
//! short link docs
//! short qr docs
//!
//! # Show sign-in links, or cache the token from a sign-in redirect
//! short sign-in
//! short sign-in --redirect "https://short.example/?token=..."
//!
//! # Create and search links interactively
//! short session
//! ```
//!
//! # Environment Variables
//!
//! See [`short_link_client::config`] for the full list. `.env` files are loaded.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use tracing_subscriber::EnvFilter;

use short_link_client::app::App;
use short_link_client::config::{self, Config};
use short_link_client::view::{CreateOutcome, TerminalRenderer};

/// Shorten links from the terminal.
#[derive(Parser)]
#[command(name = "short")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Auth token to use instead of AUTH_TOKEN
    #[arg(long, global = true)]
    auth_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Create {
        /// Link to shorten (prompted if omitted)
        long_link: Option<String>,

        /// Custom alias (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,

        /// List the link publicly
        #[arg(long)]
        public: bool,

        /// Do not prompt for missing values
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the short links for an alias
    Link {
        alias: String,
    },

    /// Print a QR code for an alias
    Qr {
        alias: String,

        /// Print an SVG data URL instead of terminal art
        #[arg(long)]
        svg: bool,
    },

    /// Show sign-in links
    SignIn {
        /// Redirect URL returned after signing in; its token is cached
        #[arg(long)]
        redirect: Option<String>,
    },

    /// Check for the companion browser extension
    ExtCheck,

    /// Create and search links interactively
    Session,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env().context("Invalid configuration")?;
    if let Some(token) = cli.auth_token {
        config.auth_token = Some(token);
    }

    init_tracing(&config);
    config.print_summary();

    let app = App::build(config, Arc::new(TerminalRenderer::new()))?;

    match cli.command {
        Commands::Create {
            long_link,
            alias,
            public,
            yes,
        } => create(&app, long_link, alias, public, yes).await,
        Commands::Link { alias } => {
            print_links(&app, &alias);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Qr { alias, svg } => qr(&app, &alias, svg),
        Commands::SignIn { redirect } => sign_in(&app, redirect),
        Commands::ExtCheck => ext_check(&app).await,
        Commands::Session => session(&app).await,
    }
}

/// Initializes logging to stderr in the configured format.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Creates one short link.
///
/// # Flow
///
/// 1. Mount the view (prints sign-in links when signed out)
/// 2. Prompt for the long link and alias unless given or `--yes`
/// 3. Submit and print the short link with its QR code
async fn create(
    app: &App,
    long_link: Option<String>,
    alias: Option<String>,
    public: bool,
    skip_prompts: bool,
) -> Result<ExitCode> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    if !app.controller.mount("").await {
        return Ok(ExitCode::FAILURE);
    }

    let long_link = match long_link {
        Some(link) => link,
        None if skip_prompts => String::new(),
        None => Input::new().with_prompt("Long link").interact_text()?,
    };
    app.controller.on_long_link_change(long_link);

    let alias = match alias {
        Some(alias) => alias,
        None if skip_prompts => String::new(),
        None => Input::new()
            .with_prompt("Custom alias (leave empty to generate)")
            .allow_empty(true)
            .interact_text()?,
    };
    app.controller.on_alias_change(alias);

    if submit(app, public).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Submits the draft. Returns `true` once a short link was created.
async fn submit(app: &App, public: bool) -> bool {
    match app.controller.on_create_short_link(public).await {
        CreateOutcome::Created(_) => {
            if let Some(short_link) = app.controller.view().short_link {
                print_terminal_qr(app, &short_link);
            }
            true
        }
        CreateOutcome::SignInRequired | CreateOutcome::Failed(_) => false,
    }
}

fn print_links(app: &App, alias: &str) {
    let url_service = app.controller.url_service();
    println!(
        "{} {}",
        "Short link:".bold(),
        url_service.alias_to_frontend_link(alias)
    );
    println!(
        "{} {}",
        "API link:  ".bold(),
        url_service.alias_to_backend_link(alias).dimmed()
    );
}

fn qr(app: &App, alias: &str, svg: bool) -> Result<ExitCode> {
    let short_link = app.controller.url_service().alias_to_frontend_link(alias);

    if svg {
        let data_url = app
            .qr_code_service
            .new_qr_code(&short_link)
            .context("Failed to render QR code")?;
        println!("{data_url}");
    } else {
        print_terminal_qr(app, &short_link);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_terminal_qr(app: &App, short_link: &str) {
    match app.qr_code_service.render_terminal(short_link) {
        Ok(art) => {
            println!();
            println!("{art}");
        }
        Err(e) => tracing::warn!("QR code unavailable: {}", e),
    }
}

fn sign_in(app: &App, redirect: Option<String>) -> Result<ExitCode> {
    let Some(redirect) = redirect else {
        app.controller.request_sign_in();
        println!();
        println!(
            "{}",
            "Open a link above, then run `short sign-in --redirect <URL>` with the page you land on."
                .dimmed()
        );
        return Ok(ExitCode::SUCCESS);
    };

    let query = url::Url::parse(&redirect)
        .map(|u| u.query().unwrap_or_default().to_string())
        .unwrap_or(redirect);

    if !app.auth_service.cache_auth_token(&query) {
        println!("{}", "❌ No token found in the redirect URL".red());
        return Ok(ExitCode::FAILURE);
    }

    let token = app.auth_service.auth_token().unwrap_or_default();
    println!("{}", "✓ Signed in".green().bold());
    println!("Persist the session with:");
    println!("  export AUTH_TOKEN={token}");

    Ok(ExitCode::SUCCESS)
}

async fn ext_check(app: &App) -> Result<ExitCode> {
    app.controller.set_promo_display_status().await;

    if app.config.chrome_extension_id.is_none() {
        println!("{}", "CHROME_EXTENSION_ID is not configured".yellow());
    } else if !app.controller.view().should_show_promo {
        println!("Extension detection is not available in a terminal.");
    }

    Ok(ExitCode::SUCCESS)
}

/// Interactive loop sharing one store, so created links can be searched.
async fn session(app: &App) -> Result<ExitCode> {
    println!("{}", "🔗 Short Link Session".bright_blue().bold());
    println!();

    if !app.controller.mount("").await {
        return Ok(ExitCode::FAILURE);
    }

    const CHOICES: [&str; 4] = ["Create short link", "Search my links", "Sign out", "Quit"];

    loop {
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&CHOICES)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let long_link: String = Input::new()
                    .with_prompt("Long link")
                    .with_initial_text(app.store.state().editing_url.original_url)
                    .interact_text()?;
                app.controller.on_long_link_change(long_link);
                app.controller.on_long_link_blur();
                if app.store.state().input_err.is_some() {
                    continue;
                }

                let alias: String = Input::new()
                    .with_prompt("Custom alias (leave empty to generate)")
                    .allow_empty(true)
                    .interact_text()?;
                app.controller.on_alias_change(alias);
                app.controller.on_alias_blur();
                if app.store.state().input_err.is_some() {
                    continue;
                }

                if !submit(app, false).await && !app.auth_service.is_signed_in() {
                    return Ok(ExitCode::FAILURE);
                }
                app.controller.on_err_close();
            }
            1 => {
                let prefix: String = Input::new().with_prompt("Alias starts with").interact_text()?;
                if app.controller.on_search_input(&prefix).is_empty() {
                    println!("{}", "No matching links".dimmed());
                }
            }
            2 => {
                app.controller.on_sign_out();
                return Ok(ExitCode::SUCCESS);
            }
            _ => return Ok(ExitCode::SUCCESS),
        }
    }
}
