use super::super::state::App;
use super::Effect;
use scrubber_core::scrubber::ScrubberEffect;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_scrubber_hover(
        &mut self,
        over_track: bool,
        label: Option<usize>,
        surface_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.resize_scrubber_surface(surface_height);
        let mut scrubber_effects = if over_track {
            self.scrubber.controller.pointer_entered()
        } else {
            self.scrubber.controller.pointer_left()
        };
        scrubber_effects.extend(match label.filter(|_| over_track) {
            Some(idx) => self.scrubber.controller.hover_label(Some(idx)),
            None => self.scrubber.controller.label_panel_left(),
        });
        self.apply_scrubber_effects(scrubber_effects, effects);
    }

    pub(super) fn handle_scrubber_pressed(
        &mut self,
        y: f32,
        surface_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.resize_scrubber_surface(surface_height);
        if self.scrubber.drag_origin.is_none() {
            self.scrubber.drag_origin = Some(self.reader.position.clone());
        }
        let scrubber_effects = self.scrubber.controller.drag_began(y, &self.scrubber.geometry);
        self.apply_scrubber_effects(scrubber_effects, effects);
    }

    pub(super) fn handle_scrubber_dragged(
        &mut self,
        y: f32,
        surface_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.resize_scrubber_surface(surface_height);
        let scrubber_effects = self.scrubber.controller.drag_moved(y, &self.scrubber.geometry);
        self.apply_scrubber_effects(scrubber_effects, effects);
    }

    pub(super) fn handle_scrubber_released(&mut self, effects: &mut Vec<Effect>) {
        let scrubber_effects = self.scrubber.controller.drag_ended();
        self.apply_scrubber_effects(scrubber_effects, effects);
        if let Some(origin) = self.scrubber.drag_origin.take() {
            if origin != self.reader.position {
                debug!(from = %origin, to = %self.reader.position, "Scrubber drag landed");
                self.record_history(effects);
            }
        }
    }

    pub(super) fn handle_label_tapped(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let before = self.reader.position.clone();
        let scrubber_effects = self.scrubber.controller.tap_label(idx);
        self.apply_scrubber_effects(scrubber_effects, effects);
        if before != self.reader.position {
            self.record_history(effects);
        }
    }

    pub(super) fn handle_commit_label_layout(&mut self, generation: u64) {
        let panel = self
            .scrubber
            .controller
            .commit_label_layout(generation, &self.scrubber.geometry);
        if let Some(panel) = panel {
            trace!(
                generation,
                buffer_top = panel.buffer_top,
                buffer_bottom = panel.buffer_bottom,
                "Presenting label panel"
            );
            self.scrubber.present_panel(panel);
        }
    }

    /// Tracks the canvas height; a visible panel is re-laid out in place.
    pub(super) fn resize_scrubber_surface(&mut self, height: f32) {
        if !self.scrubber.set_surface_height(height) {
            return;
        }
        if self.scrubber.panel.is_some() && self.scrubber.controller.labels_visible() {
            let panel = self.scrubber.controller.label_panel(&self.scrubber.geometry);
            self.scrubber.present_panel(panel);
        }
    }

    pub(super) fn apply_scrubber_effects(
        &mut self,
        scrubber_effects: Vec<ScrubberEffect>,
        effects: &mut Vec<Effect>,
    ) {
        for effect in scrubber_effects {
            match effect {
                ScrubberEffect::Navigate(target) => self.navigate_to(target, effects),
                ScrubberEffect::ScheduleLabelLayout { generation } => {
                    effects.push(Effect::ScheduleLabelLayout(generation));
                }
                ScrubberEffect::HideLabels => self.scrubber.dismiss_panel(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::cache::ReadingCache;
    use crate::config::AppConfig;
    use scrubber_core::position::ChapterPosition;

    /// 1188px of track between 20px insets: one pixel per chapter step.
    const SURFACE: f32 = 1188.0 + 40.0;

    fn app_at(book: &str, chapter: u32) -> (App, tempfile::TempDir) {
        let root = tempfile::tempdir().expect("tempdir");
        let cache = ReadingCache::in_root(root.path(), "ESV");
        let (app, _) = App::bootstrap(
            AppConfig::default(),
            cache,
            Some(ChapterPosition::new(book, chapter)),
        );
        (app, root)
    }

    fn last_schedule(effects: &[Effect]) -> Option<u64> {
        effects.iter().rev().find_map(|effect| match effect {
            Effect::ScheduleLabelLayout(generation) => Some(*generation),
            _ => None,
        })
    }

    fn hover(app: &mut App, over_track: bool, label: Option<usize>) -> Vec<Effect> {
        app.reduce(Message::ScrubberHover {
            over_track,
            label,
            surface_height: SURFACE,
        })
    }

    #[test]
    fn hovering_schedules_a_panel_and_leaving_hides_it() {
        let (mut app, _root) = app_at("John", 3);
        let effects = hover(&mut app, true, None);
        let generation = last_schedule(&effects).expect("layout scheduled");
        assert!(app.scrubber.panel.is_none());

        app.reduce(Message::CommitLabelLayout(generation));
        let panel = app.scrubber.panel.as_ref().expect("panel presented");
        assert_eq!(panel.labels.len(), 66);
        assert!(panel.labels.iter().any(|label| label.name == "John" && label.emphasized));

        hover(&mut app, false, None);
        assert!(app.scrubber.panel.is_none());
    }

    #[test]
    fn superseded_layout_is_dropped() {
        let (mut app, _root) = app_at("John", 3);
        let first = last_schedule(&hover(&mut app, true, None)).expect("first");
        let second = last_schedule(&hover(&mut app, true, Some(3))).expect("second");
        assert_ne!(first, second);

        app.reduce(Message::CommitLabelLayout(first));
        assert!(app.scrubber.panel.is_none());
        app.reduce(Message::CommitLabelLayout(second));
        let panel = app.scrubber.panel.as_ref().expect("panel");
        assert_eq!(panel.labels[3].scale, 2.0);
    }

    #[test]
    fn drag_navigates_and_records_one_history_entry() {
        let (mut app, _root) = app_at("Genesis", 1);
        app.reduce(Message::ScrubberPressed {
            y: 20.0 + 50.0,
            surface_height: SURFACE,
        });
        assert_eq!(app.reader.position, ChapterPosition::new("Exodus", 1));

        app.reduce(Message::ScrubberDragged {
            y: 20.0 + 51.0,
            surface_height: SURFACE,
        });
        assert_eq!(app.reader.position, ChapterPosition::new("Exodus", 2));
        assert!(app.history.entries.is_empty());

        let effects = app.reduce(Message::ScrubberReleased);
        assert!(effects.contains(&Effect::SaveHistory));
        assert_eq!(app.history.entries.len(), 1);
        assert_eq!(
            app.history.entries.latest().map(|entry| entry.label.as_str()),
            Some("Exodus 2")
        );
    }

    #[test]
    fn press_without_movement_still_navigates() {
        let (mut app, _root) = app_at("Genesis", 1);
        let effects = app.reduce(Message::ScrubberPressed {
            y: SURFACE - 20.0,
            surface_height: SURFACE,
        });
        assert_eq!(app.reader.position, ChapterPosition::new("Revelation", 22));
        assert!(effects.contains(&Effect::SaveProgress));
    }

    #[test]
    fn tapping_a_label_jumps_to_chapter_one() {
        let (mut app, _root) = app_at("Genesis", 1);
        let effects = app.reduce(Message::LabelTapped(42));
        assert_eq!(app.reader.position, ChapterPosition::new("John", 1));
        assert!(effects.contains(&Effect::SaveHistory));

        assert!(app.reduce(Message::LabelTapped(66)).is_empty());
    }

    #[test]
    fn bookmark_glyph_shares_the_thumb_geometry() {
        let (mut app, _root) = app_at("John", 1);
        app.reduce(Message::WindowResized {
            width: 900.0,
            height: SURFACE,
        });
        app.reduce(Message::ToggleBookmark);

        let placed = app.scrubber.placed_markers(&app.reader.markers);
        assert_eq!(placed.len(), 1);
        let thumb_y = app.scrubber.controller.thumb_y(&app.scrubber.geometry);
        assert!((placed[0].y - thumb_y).abs() < 1e-3);
    }

    #[test]
    fn moving_off_a_label_clears_its_emphasis() {
        let (mut app, _root) = app_at("Genesis", 1);
        hover(&mut app, true, Some(5));
        assert_eq!(app.scrubber.controller.hovered_book(), Some(5));

        let effects = hover(&mut app, true, None);
        assert_eq!(app.scrubber.controller.hovered_book(), None);
        assert!(last_schedule(&effects).is_some());
    }

    #[test]
    fn resize_relays_out_a_visible_panel() {
        let (mut app, _root) = app_at("John", 3);
        let generation = last_schedule(&hover(&mut app, true, None)).expect("scheduled");
        app.reduce(Message::CommitLabelLayout(generation));
        let before = app.scrubber.panel.clone().expect("panel");

        app.reduce(Message::WindowResized {
            width: 800.0,
            height: 600.0,
        });
        let after = app.scrubber.panel.clone().expect("panel kept");
        assert_ne!(before.height, after.height);
        assert_eq!(after.height, 600.0 + after.buffer_top + after.buffer_bottom);
    }
}
