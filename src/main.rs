//! Skydeck - a terminal analytics dashboard
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use skydeck_app::config::{self, Settings};
use skydeck_app::message::Message;
use skydeck_app::preferences::{
    self, FilePreferenceBackend, MemoryPreferenceBackend, PreferenceStore,
};
use skydeck_app::{AnyProvider, AppState, Engine};
use skydeck_core::prelude::*;
use skydeck_core::Theme;

/// Skydeck - a terminal analytics dashboard
#[derive(Parser, Debug)]
#[command(name = "skydeck")]
#[command(about = "A terminal analytics dashboard", long_about = None)]
struct Args {
    /// Directory holding config.toml and the stored theme preference
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Serve widget data from JSON fixtures in this directory
    #[arg(long, value_name = "DIR")]
    fixtures: Option<PathBuf>,

    /// Simulated latency of the built-in provider
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Set and store the theme before the first frame
    #[arg(long, value_name = "light|dark")]
    theme: Option<Theme>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    skydeck_core::logging::init()?;

    let config_dir = config::resolve_config_dir(args.config_dir.as_deref());
    if let Err(e) = config::init_config_dir(&config_dir) {
        warn!("Could not initialize {}: {}", config_dir.display(), e);
    }

    let mut settings = config::load_settings(&config_dir);
    apply_overrides(&mut settings, &args);
    info!("Config directory: {}", config_dir.display());

    let system = preferences::system_signal(settings.appearance.system_scheme);
    let prefs = if args.ephemeral {
        PreferenceStore::open(Box::new(MemoryPreferenceBackend::new()), system)
    } else {
        PreferenceStore::open(Box::new(FilePreferenceBackend::new(&config_dir)), system)
    };

    let provider = AnyProvider::from_settings(&settings.provider)?;
    info!("Data provider: {}", provider.name());

    let mut state = AppState::new(settings, prefs);
    if let Some(theme) = args.theme {
        skydeck_app::handler::update(&mut state, Message::SetTheme(theme));
    }

    let engine = Engine::new(state, provider);
    let result = skydeck_tui::run(engine).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("Skydeck exiting");
    result
}

/// Command-line flags win over `config.toml`
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(dir) = &args.fixtures {
        settings.provider.kind = config::ProviderKind::Fixtures;
        settings.provider.fixtures_dir = Some(dir.clone());
    }
    if let Some(ms) = args.latency_ms {
        settings.provider.latency_ms = ms;
    }
}
