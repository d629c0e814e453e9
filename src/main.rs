#![allow(non_snake_case)]

mod animation;
mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::LoggingBuilder;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Whether animations were disabled on the command line
static NO_ANIMATIONS: OnceLock<bool> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Whether the animation library must not be used
pub fn animations_disabled() -> bool {
    NO_ANIMATIONS.get().copied().unwrap_or(false)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio with project previews")]
struct Args {
    /// Data directory for the preference database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Never use the animation library, even when it is available
    #[arg(long)]
    no_animations: bool,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = args.log_filter {
        logging = logging.with_filter(filter);
    }
    logging.init();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = NO_ANIMATIONS.set(args.no_animations);

    tracing::info!(
        "Starting folio with data dir: {:?} (animations {})",
        data_dir,
        if args.no_animations { "disabled" } else { "enabled" }
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
