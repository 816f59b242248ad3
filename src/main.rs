use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use dialclock::config::{default_config_path, load_store, ClockSettings, ConfigStore};
use dialclock::ui::{build_window, save_png, save_svg};
use dialclock::AppState;
use gtk4::prelude::*;
use gtk4::Application;
use log::{info, warn};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

const APP_ID: &str = "org.dialclock.DialClock";

/// dialclock - analog clocks for several timezones in one shaped window
#[derive(Parser, Debug, Clone)]
#[command(name = "dialclock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Render one frame to an SVG file and exit
    #[arg(long = "svg", value_name = "FILE")]
    svg: Option<PathBuf>,

    /// Render one frame to a PNG file and exit
    #[arg(long = "png", value_name = "FILE")]
    png: Option<PathBuf>,

    /// Print the resolved settings as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG overrides the -d level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting dialclock v{}", env!("CARGO_PKG_VERSION"));

    let config_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => match default_config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("{:#}, settings will not be saved", e);
                None
            }
        },
    };
    let store = match &config_path {
        Some(path) => load_store(path).unwrap_or_else(|e| {
            warn!("{:#}, using defaults", e);
            ConfigStore::new()
        }),
        None => ConfigStore::new(),
    };
    let settings = ClockSettings::from_store(&store);

    if cli.print_config {
        let json = serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
        println!("{}", json);
        return Ok(());
    }

    let mut state = AppState::new(settings, store, config_path, Utc::now());

    if cli.svg.is_some() || cli.png.is_some() {
        let now = Utc::now();
        let AppState {
            engine,
            faces,
            settings,
            ..
        } = &mut state;
        if let Some(path) = &cli.svg {
            save_svg(path, engine, faces.iter(), &settings.style, now)?;
        }
        if let Some(path) = &cli.png {
            save_png(path, engine, faces.iter(), &settings.style, now)?;
        }
        return Ok(());
    }

    let state = Rc::new(RefCell::new(state));
    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| {
        build_window(app, state.clone());
    });

    // Arguments were already parsed by clap
    app.run_with_args(&["dialclock"]);
    Ok(())
}
