use super::super::state::App;
use super::Effect;
use scrubber_core::history::BibleReference;
use scrubber_core::position::{ChapterPosition, next_chapter, previous_chapter};
use std::time::SystemTime;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_next_chapter(&mut self, effects: &mut Vec<Effect>) {
        match next_chapter(&self.reader.position) {
            Some(target) => self.navigate_to(target, effects),
            None => debug!(position = %self.reader.position, "Already at the last chapter"),
        }
    }

    pub(super) fn handle_previous_chapter(&mut self, effects: &mut Vec<Effect>) {
        match previous_chapter(&self.reader.position) {
            Some(target) => self.navigate_to(target, effects),
            None => debug!(position = %self.reader.position, "Already at the first chapter"),
        }
    }

    pub(super) fn handle_toggle_bookmark(&mut self, effects: &mut Vec<Effect>) {
        let bookmarked = self.reader.toggle_bookmark();
        info!(position = %self.reader.position, bookmarked, "Toggled bookmark");
        effects.push(Effect::SaveMarkers);
    }

    /// Moves the reading pane and lets the scrubber follow it.
    pub(super) fn navigate_to(&mut self, target: ChapterPosition, effects: &mut Vec<Effect>) {
        if target == self.reader.position {
            return;
        }
        match self.scrubber.controller.set_reading_position(&target) {
            Ok(scrubber_effects) => {
                debug!(from = %self.reader.position, to = %target, "Navigating");
                self.reader.position = target;
                self.apply_scrubber_effects(scrubber_effects, effects);
                effects.push(Effect::SaveProgress);
            }
            Err(err) => warn!(%target, "Ignoring navigation request: {err}"),
        }
    }

    pub(super) fn record_history(&mut self, effects: &mut Vec<Effect>) {
        let reference = BibleReference::from(&self.reader.position);
        let already_latest = self
            .history
            .entries
            .latest()
            .is_some_and(|entry| entry.reference == reference);
        if already_latest {
            return;
        }
        debug!(%reference, "Recording history entry");
        self.history.entries.record(reference, SystemTime::now());
        effects.push(Effect::SaveHistory);
    }
}
