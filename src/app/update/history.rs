use super::super::state::App;
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_history(&mut self, effects: &mut Vec<Effect>) {
        self.history.visible = !self.history.visible;
        self.config.show_history = self.history.visible;
        debug!(visible = self.history.visible, "Toggled history panel");
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_clear_history(&mut self, effects: &mut Vec<Effect>) {
        if self.history.entries.is_empty() {
            return;
        }
        info!(cleared = self.history.entries.len(), "Cleared reading history");
        self.history.entries.clear();
        effects.push(Effect::SaveHistory);
    }

    /// Jumps to a history entry without recording a new one, then hides the panel.
    pub(super) fn handle_open_history_entry(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let Some(entry) = self.history.entries.entries().nth(idx) else {
            return;
        };
        let target = entry.reference.position();
        debug!(label = %entry.label, "Opening history entry");
        self.history.visible = false;
        self.config.show_history = false;
        effects.push(Effect::SaveConfig);
        self.navigate_to(target, effects);
    }
}
