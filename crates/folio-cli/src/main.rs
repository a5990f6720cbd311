//! folio CLI: a personal portfolio page in the terminal

use clap::{Parser, Subcommand};
use folio_core::{Config, IconStyle, Portfolio, ThemeName};
use folio_tui::{PrintOptions, UiConfig};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Interactive portfolio page with an expandable experience timeline
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: .folio/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Portfolio content JSON file (overrides the config file)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Color theme: mocha, latte or high_contrast
    #[arg(long, global = true)]
    theme: Option<ThemeName>,

    /// Icon style: nerd, unicode or ascii
    #[arg(long, global = true)]
    icons: Option<IconStyle>,

    /// Write logs to this file (filter with FOLIO_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive page (default when no command specified)
    Tui,

    /// Render the page once to stdout
    Print {
        /// Width in columns
        #[arg(long, default_value = "100")]
        width: u16,

        /// Height in rows (default: fit the whole page)
        #[arg(long)]
        height: Option<u16>,

        /// Experience cards to expand (0-based, comma-separated)
        #[arg(long, value_delimiter = ',')]
        expand: Vec<usize>,
    },

    /// Print the active portfolio content as JSON
    Content,
}

const LOG_ENV: &str = "FOLIO_LOG";
const DEFAULT_LOG_FILTER: &str = "folio=info";

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = resolve_config(&cli)?;
    let portfolio = config.portfolio()?;
    let ui = UiConfig::from_config(&config);

    match cli.command {
        None | Some(Commands::Tui) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(folio_tui::run_tui(portfolio, ui))
        }
        Some(Commands::Print {
            width,
            height,
            expand,
        }) => {
            cmd_print(portfolio, ui, PrintOptions {
                width,
                height,
                expand,
            });
            Ok(())
        }
        Some(Commands::Content) => cmd_content(&portfolio),
    }
}

/// Log to `path` so output never lands on the terminal UI.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");
    Ok(())
}

/// Load the config file and apply command-line overrides.
///
/// A missing file is only an error when the path was given explicitly.
fn resolve_config(cli: &Cli) -> Result<Config, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&Config::default_path(&std::env::current_dir()?))?,
    };

    if let Some(content) = &cli.content {
        config.content = Some(content.clone());
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(icons) = cli.icons {
        config.icons = Some(icons);
    }

    Ok(config)
}

fn cmd_print(portfolio: Portfolio, ui: UiConfig, options: PrintOptions) {
    let output = folio_tui::render_to_string(portfolio, ui, &options);
    println!("{output}");
}

fn cmd_content(portfolio: &Portfolio) -> Result<(), Box<dyn Error>> {
    println!("{}", portfolio.to_json()?);
    Ok(())
}
