//! Command-line front end: inspect and change the stored theme, print the
//! projected tokens, or render a page shell.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;
use tracing_subscriber::EnvFilter;

use spill_theme::page::PageRenderer;
use spill_theme::{
    ApplyReport, EnvironmentSignal, FileStore, GameId, NoSignal, PlaceholderGames,
    SystemColorScheme, Theme, ThemeConfig, ThemeManager,
};

const DEFAULT_STORE_PATH: &str = ".spill-theme.json";
const LOG_ENV: &str = "SPILL_THEME_LOG";

#[derive(Debug, Parser)]
#[command(name = "spill-theme", version, about = "Theme state for the Go Spill front end")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ignore the operating system's color-scheme preference
    #[arg(long, global = true)]
    no_system: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve the theme and print it with its tokens
    Show,
    /// Store an explicit theme choice
    Set { theme: Theme },
    /// Switch to the other theme
    Toggle,
    /// Print the projected tokens as a CSS block
    Css,
    /// Render a page shell with placeholder games
    Page {
        /// Render the page of this game instead of the front page
        #[arg(long)]
        game: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ThemeConfig::default(),
    };
    let store_path = config
        .storage_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

    let signal: Box<dyn EnvironmentSignal> = if cli.no_system {
        Box::new(NoSignal)
    } else {
        Box::new(SystemColorScheme)
    };

    let mut manager = ThemeManager::with_config(&config, FileStore::new(store_path));
    let initial = manager.resolve(signal.as_ref())?;

    match cli.command {
        Command::Show => {
            report(&initial);
            print_tokens(&manager);
        }
        Command::Set { theme } => report(&manager.set_theme(theme)?),
        Command::Toggle => report(&manager.toggle_theme()?),
        Command::Css => print!("{}", manager.context().to_css()),
        Command::Page { game } => {
            let renderer = PageRenderer::new()?;
            let html = match game {
                Some(id) => renderer.render_game(&manager, &GameId::new(id))?,
                None => renderer.render_home(&manager, &PlaceholderGames::new())?,
            };
            print!("{}", html);
        }
    }
    Ok(())
}

fn report(applied: &ApplyReport) {
    let label = Style::new().bold().apply_to(applied.theme);
    match &applied.persist_error {
        None => println!("theme: {}", label),
        Some(err) => println!("theme: {} (not saved: {})", label, err),
    }
}

fn print_tokens(manager: &ThemeManager<FileStore>) {
    let dim = Style::new().dim();
    for (name, value) in manager.context().tokens() {
        println!("  {:<32} {}", name, dim.apply_to(value));
    }
}
