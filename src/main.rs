//! Entry point for the Strategix viewer.
//!
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Install the Ctrl+C hook and launch the GUI.

mod app;
mod config;

use crate::app::run_app;
use crate::config::{Screen, load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Consume a pending Ctrl+C request. The GUI polls this on a timer.
pub fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

struct CliArgs {
    screen: Option<Screen>,
    print_config: bool,
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let mut config = load_config(Path::new(CONFIG_PATH));
    if let Some(screen) = args.screen {
        config.start_screen = screen;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if args.print_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }

    info!(
        level = %config.log_level,
        screen = %config.start_screen,
        manifest = %config.manifest_source,
        questions = %config.questions_source,
        "Starting Strategix viewer"
    );

    if let Err(err) = ctrlc::set_handler(|| SIGINT_REQUESTED.store(true, Ordering::SeqCst)) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }

    run_app(config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs {
        screen: None,
        print_config: false,
    };
    for arg in env::args().skip(1) {
        if arg == "--print-config" {
            args.print_config = true;
            continue;
        }
        let screen = Screen::parse(&arg).ok_or_else(|| {
            anyhow!("Usage: strategix-viewer [video|questions|responses] [--print-config]")
        })?;
        args.screen = Some(screen);
    }
    Ok(args)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
