mod commands;
mod console;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use workstation_core::constants::{COLLABORATION_TYPES, PROJECT_STAGES, PROJECT_STATUSES};
use workstation_core::HubConfig;

#[derive(Parser)]
#[command(name = "workstation-hub")]
#[command(about = "Headless client for the Workstation Hub explore page", long_about = None)]
struct Cli {
    /// Backend origin; overrides WORKSTATION_HUB_URL
    #[arg(long, global = true)]
    url: Option<String>,
    /// Raw Cookie header with sessionid and csrftoken; overrides WORKSTATION_HUB_COOKIE
    #[arg(long, global = true)]
    cookie: Option<String>,
    /// Print toasts as the markup the page would show
    #[arg(long, global = true)]
    html: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a tab and print the rendered listing
    Tab {
        /// projects, ideas or people
        name: String,
        /// Pages to load, scrolling to the bottom after each
        #[arg(short, long, default_value = "1")]
        pages: u32,
        #[arg(short, long, default_value = "/explore/")]
        location: String,
    },
    /// Print the navigation target for a filter selection
    Filter {
        #[arg(long, value_parser = PossibleValuesParser::new(PROJECT_STAGES.iter().copied()))]
        stage: Vec<String>,
        #[arg(long, value_parser = PossibleValuesParser::new(COLLABORATION_TYPES.iter().copied()))]
        collaboration: Vec<String>,
        #[arg(long, value_parser = PossibleValuesParser::new(PROJECT_STATUSES.iter().copied()))]
        status: Vec<String>,
        #[arg(short, long, default_value = "/explore/")]
        location: String,
    },
    /// Type a query into the search box and print where it navigates
    Search {
        query: String,
        #[arg(short, long, default_value = "/explore/")]
        location: String,
    },
    /// Toggle the bookmark on a project
    Bookmark { slug: String },
    /// Toggle support for a project
    Support { slug: String },
    /// Open a project to join it
    Join { slug: String },
    /// Show the unread notification count
    Notifications {
        /// Keep polling until interrupted
        #[arg(short, long)]
        watch: bool,
    },
}

impl Cli {
    fn config(&self) -> HubConfig {
        let mut config = HubConfig::from_env();
        if let Some(url) = &self.url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(cookie) = &self.cookie {
            config = config.with_cookie_header(cookie.as_str());
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(
        base_url = %config.base_url,
        has_cookie = config.cookie_header.is_some(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Tab { name, pages, location } => {
            commands::tab::run_tab(&config, &name, pages, &location).await
        },
        Commands::Filter { stage, collaboration, status, location } => {
            commands::filter::run_filter(&location, &stage, &collaboration, &status)
        },
        Commands::Search { query, location } => {
            commands::filter::run_search(&config, &query, &location).await
        },
        Commands::Bookmark { slug } => {
            commands::actions::run_bookmark(&config, &slug, cli.html).await
        },
        Commands::Support { slug } => {
            commands::actions::run_support(&config, &slug, cli.html).await
        },
        Commands::Join { slug } => commands::actions::run_join(&config, &slug),
        Commands::Notifications { watch } => {
            commands::notifications::run_notifications(&config, watch).await
        },
    }
}
