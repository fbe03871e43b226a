//! Entry point for the scripture scrubber.
//!
//! Responsibilities here are intentionally minimal:
//! - Load user configuration from `conf/config.toml`.
//! - Merge per-translation overrides and the last reading position from the cache.
//! - Launch the GUI application.

mod app;
mod cache;
mod config;

use crate::app::run_app;
use crate::cache::ReadingCache;
use crate::config::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let base_config = load_config(Path::new("conf/config.toml"));
    let cache = ReadingCache::for_translation(&base_config.translation);
    let mut config = base_config.clone();
    if let Some(mut overrides) = cache.load_config() {
        info!("Loaded per-translation overrides from cache");
        // Always honor the base config's log level so user changes take effect.
        overrides.log_level = base_config.log_level;
        overrides.translation = base_config.translation.clone();
        overrides.history_max_entries = base_config.history_max_entries;
        // Always honor base keybinding configuration.
        overrides.key_next_chapter = base_config.key_next_chapter.clone();
        overrides.key_prev_chapter = base_config.key_prev_chapter.clone();
        overrides.key_toggle_bookmark = base_config.key_toggle_bookmark.clone();
        overrides.key_toggle_history = base_config.key_toggle_history.clone();
        overrides.key_safe_quit = base_config.key_safe_quit.clone();
        config = overrides;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        translation = %config.translation,
        level = %config.log_level,
        cache = %cache.dir().display(),
        "Starting scripture scrubber"
    );
    let position = cache.load_position();
    if let Some(position) = &position {
        info!(%position, "Resuming from cached reading position");
    }
    run_app(config, cache, position).context("Failed to start the GUI")?;
    Ok(())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
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
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
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
