mod reader;
mod scrubber;
mod ui;

use crate::cache::ReadingCache;
use crate::config::AppConfig;
use iced::Task;
use scrubber_core::position::ChapterPosition;
use scrubber_core::scrubber::ScrubberController;
use tracing::{info, warn};

use super::messages::Message;

pub(in crate::app) use reader::ReaderState;
pub(in crate::app) use scrubber::ScrubberState;
pub(in crate::app) use ui::HistoryState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) cache: ReadingCache,
    pub(super) reader: ReaderState,
    pub(super) scrubber: ScrubberState,
    pub(super) history: HistoryState,
}

impl App {
    pub(super) fn save_config(&self) {
        self.cache.save_config(&self.config);
    }

    pub(super) fn persist_position(&self) {
        self.cache.save_position(&self.reader.position);
    }

    pub(super) fn persist_markers(&self) {
        self.cache.save_markers(&self.reader.markers);
    }

    pub(super) fn persist_history(&self) {
        self.cache.save_history(&self.history.entries);
    }

    pub(super) fn bootstrap(
        mut config: AppConfig,
        cache: ReadingCache,
        position: Option<ChapterPosition>,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let position = position.unwrap_or_else(ChapterPosition::first);
        let settings = config.scrubber_settings();
        let controller = match ScrubberController::new(settings, &position) {
            Ok(controller) => controller,
            Err(err) => {
                warn!(%position, "Starting from Genesis 1: {err}");
                ScrubberController::at_index(settings, 0)
            }
        };
        let position = controller.reading_position();
        let markers = cache.load_markers();
        let entries = cache.load_history(config.history_max_entries);
        info!(
            %position,
            markers = markers.len(),
            history = entries.len(),
            "Bootstrapped reading state"
        );

        let app = App {
            scrubber: ScrubberState::new(controller, config.window_height),
            reader: ReaderState {
                position,
                markers,
            },
            history: HistoryState {
                visible: config.show_history,
                entries,
            },
            cache,
            config,
        };
        (app, Task::none())
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: String) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback;
        } else {
            *value = normalized;
        }
    }

    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config.scrubber_width = config.scrubber_width.clamp(12.0, 120.0);
    config.track_inset = config.track_inset.clamp(0.0, 200.0);
    config.label_panel_width = config.label_panel_width.clamp(40.0, 400.0);
    config.label_panel_gap = config.label_panel_gap.clamp(0.0, 40.0);
    config.label_min_gap_px = config.label_min_gap_px.clamp(0.0, 64.0);
    config.label_font_size = config.label_font_size.clamp(4.0, 32.0);
    config.marker_size = config.marker_size.clamp(1.0, 16.0);
    config.history_max_entries = config.history_max_entries.max(1);
    normalize_key_binding(&mut config.key_next_chapter, "right".to_string());
    normalize_key_binding(&mut config.key_prev_chapter, "left".to_string());
    normalize_key_binding(&mut config.key_toggle_bookmark, "ctrl+d".to_string());
    normalize_key_binding(&mut config.key_toggle_history, "ctrl+y".to_string());
    normalize_key_binding(&mut config.key_safe_quit, "q".to_string());
}
