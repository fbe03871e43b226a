pub(crate) fn default_translation() -> String {
    "ESV".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_scrubber_width() -> f32 {
    30.0
}

pub(crate) fn default_track_inset() -> f32 {
    20.0
}

pub(crate) fn default_label_panel_width() -> f32 {
    140.0
}

pub(crate) fn default_label_panel_gap() -> f32 {
    4.0
}

pub(crate) fn default_label_min_gap_px() -> f32 {
    12.0
}

pub(crate) fn default_label_font_size() -> f32 {
    8.0
}

pub(crate) fn default_marker_size() -> f32 {
    4.0
}

pub(crate) fn default_history_max_entries() -> usize {
    scrubber_core::history::DEFAULT_MAX_ENTRIES
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_next_chapter() -> String {
    "right".to_string()
}

pub(crate) fn default_key_prev_chapter() -> String {
    "left".to_string()
}

pub(crate) fn default_key_toggle_bookmark() -> String {
    "ctrl+d".to_string()
}

pub(crate) fn default_key_toggle_history() -> String {
    "ctrl+y".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
