use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// Table names accepted in the sectioned layout of `conf/config.toml`.
pub(super) const SECTION_NAMES: [&str; 6] =
    ["appearance", "scrubber", "window", "reading", "logging", "keys"];

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    scrubber: ScrubberConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    reading: ReadingConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            label_font_size: tables.appearance.label_font_size,
            marker_size: tables.appearance.marker_size,
            scrubber_width: tables.scrubber.scrubber_width,
            track_inset: tables.scrubber.track_inset,
            label_panel_width: tables.scrubber.label_panel_width,
            label_panel_gap: tables.scrubber.label_panel_gap,
            label_min_gap_px: tables.scrubber.label_min_gap_px,
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            translation: tables.reading.translation,
            history_max_entries: tables.reading.history_max_entries,
            show_history: tables.reading.show_history,
            log_level: tables.logging.log_level,
            key_next_chapter: tables.keys.next_chapter,
            key_prev_chapter: tables.keys.prev_chapter,
            key_toggle_bookmark: tables.keys.toggle_bookmark,
            key_toggle_history: tables.keys.toggle_history,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                label_font_size: config.label_font_size,
                marker_size: config.marker_size,
            },
            scrubber: ScrubberConfig {
                scrubber_width: config.scrubber_width,
                track_inset: config.track_inset,
                label_panel_width: config.label_panel_width,
                label_panel_gap: config.label_panel_gap,
                label_min_gap_px: config.label_min_gap_px,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
                pos_x: config.window_pos_x,
                pos_y: config.window_pos_y,
            },
            reading: ReadingConfig {
                translation: config.translation.clone(),
                history_max_entries: config.history_max_entries,
                show_history: config.show_history,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                next_chapter: config.key_next_chapter.clone(),
                prev_chapter: config.key_prev_chapter.clone(),
                toggle_bookmark: config.key_toggle_bookmark.clone(),
                toggle_history: config.key_toggle_history.clone(),
                safe_quit: config.key_safe_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_label_font_size")]
    label_font_size: f32,
    #[serde(default = "defaults::default_marker_size")]
    marker_size: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            label_font_size: defaults::default_label_font_size(),
            marker_size: defaults::default_marker_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrubberConfig {
    #[serde(default = "defaults::default_scrubber_width")]
    scrubber_width: f32,
    #[serde(default = "defaults::default_track_inset")]
    track_inset: f32,
    #[serde(default = "defaults::default_label_panel_width")]
    label_panel_width: f32,
    #[serde(default = "defaults::default_label_panel_gap")]
    label_panel_gap: f32,
    #[serde(default = "defaults::default_label_min_gap_px")]
    label_min_gap_px: f32,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        ScrubberConfig {
            scrubber_width: defaults::default_scrubber_width(),
            track_inset: defaults::default_track_inset(),
            label_panel_width: defaults::default_label_panel_width(),
            label_panel_gap: defaults::default_label_panel_gap(),
            label_min_gap_px: defaults::default_label_min_gap_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos_x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ReadingConfig {
    #[serde(default = "defaults::default_translation")]
    translation: String,
    #[serde(default = "defaults::default_history_max_entries")]
    history_max_entries: usize,
    #[serde(default)]
    show_history: bool,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        ReadingConfig {
            translation: defaults::default_translation(),
            history_max_entries: defaults::default_history_max_entries(),
            show_history: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_chapter")]
    next_chapter: String,
    #[serde(default = "defaults::default_key_prev_chapter")]
    prev_chapter: String,
    #[serde(default = "defaults::default_key_toggle_bookmark")]
    toggle_bookmark: String,
    #[serde(default = "defaults::default_key_toggle_history")]
    toggle_history: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_chapter: defaults::default_key_next_chapter(),
            prev_chapter: defaults::default_key_prev_chapter(),
            toggle_bookmark: defaults::default_key_toggle_bookmark(),
            toggle_history: defaults::default_key_toggle_history(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
