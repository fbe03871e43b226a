use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::ThemeMode;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextChapter => self.handle_next_chapter(&mut effects),
            Message::PreviousChapter => self.handle_previous_chapter(&mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ToggleBookmark => self.handle_toggle_bookmark(&mut effects),
            Message::ToggleHistory => self.handle_toggle_history(&mut effects),
            Message::ClearHistory => self.handle_clear_history(&mut effects),
            Message::OpenHistoryEntry(idx) => self.handle_open_history_entry(idx, &mut effects),
            Message::ScrubberHover {
                over_track,
                label,
                surface_height,
            } => self.handle_scrubber_hover(over_track, label, surface_height, &mut effects),
            Message::ScrubberPressed { y, surface_height } => {
                self.handle_scrubber_pressed(y, surface_height, &mut effects)
            }
            Message::ScrubberDragged { y, surface_height } => {
                self.handle_scrubber_dragged(y, surface_height, &mut effects)
            }
            Message::ScrubberReleased => self.handle_scrubber_released(&mut effects),
            Message::LabelTapped(idx) => self.handle_label_tapped(idx, &mut effects),
            Message::CommitLabelLayout(generation) => self.handle_commit_label_layout(generation),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y, &mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    debug!(?shortcut, "Keyboard shortcut");
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Toggled theme");
        effects.push(Effect::SaveConfig);
    }

    fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.config.window_width = width;
        self.config.window_height = height;
        self.resize_scrubber_surface(height);
        effects.push(Effect::SaveConfig);
    }

    fn handle_window_moved(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.config.window_pos_x = Some(x);
        self.config.window_pos_y = Some(y);
        effects.push(Effect::SaveConfig);
    }
}
