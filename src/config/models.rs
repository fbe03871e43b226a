use scrubber_core::scrubber::ScrubberSettings;
use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_translation")]
    pub translation: String,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "crate::config::defaults::default_scrubber_width")]
    pub scrubber_width: f32,
    #[serde(default = "crate::config::defaults::default_track_inset")]
    pub track_inset: f32,
    #[serde(default = "crate::config::defaults::default_label_panel_width")]
    pub label_panel_width: f32,
    #[serde(default = "crate::config::defaults::default_label_panel_gap")]
    pub label_panel_gap: f32,
    #[serde(default = "crate::config::defaults::default_label_min_gap_px")]
    pub label_min_gap_px: f32,
    #[serde(default = "crate::config::defaults::default_label_font_size")]
    pub label_font_size: f32,
    #[serde(default = "crate::config::defaults::default_marker_size")]
    pub marker_size: f32,
    #[serde(default = "crate::config::defaults::default_history_max_entries")]
    pub history_max_entries: usize,
    #[serde(default)]
    pub show_history: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next_chapter")]
    pub key_next_chapter: String,
    #[serde(default = "crate::config::defaults::default_key_prev_chapter")]
    pub key_prev_chapter: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_bookmark")]
    pub key_toggle_bookmark: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_history")]
    pub key_toggle_history: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            translation: crate::config::defaults::default_translation(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            scrubber_width: crate::config::defaults::default_scrubber_width(),
            track_inset: crate::config::defaults::default_track_inset(),
            label_panel_width: crate::config::defaults::default_label_panel_width(),
            label_panel_gap: crate::config::defaults::default_label_panel_gap(),
            label_min_gap_px: crate::config::defaults::default_label_min_gap_px(),
            label_font_size: crate::config::defaults::default_label_font_size(),
            marker_size: crate::config::defaults::default_marker_size(),
            history_max_entries: crate::config::defaults::default_history_max_entries(),
            show_history: false,
            log_level: crate::config::defaults::default_log_level(),
            key_next_chapter: crate::config::defaults::default_key_next_chapter(),
            key_prev_chapter: crate::config::defaults::default_key_prev_chapter(),
            key_toggle_bookmark: crate::config::defaults::default_key_toggle_bookmark(),
            key_toggle_history: crate::config::defaults::default_key_toggle_history(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

impl AppConfig {
    pub fn scrubber_settings(&self) -> ScrubberSettings {
        ScrubberSettings {
            track_inset: self.track_inset.max(0.0),
            panel_width: self.label_panel_width.max(0.0),
            panel_gap: self.label_panel_gap.max(0.0),
            label_min_gap_px: self.label_min_gap_px.max(0.0),
            label_font_size: self.label_font_size.max(1.0),
        }
    }

    /// Width of the whole scrubber surface: label panel plus track column.
    pub fn scrubber_surface_width(&self) -> f32 {
        self.label_panel_gap.max(0.0) + self.label_panel_width.max(0.0) + self.scrubber_width.max(1.0)
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
