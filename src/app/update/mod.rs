mod core;
mod history;
mod navigation;
mod scrubber;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    SaveConfig,
    SaveProgress,
    SaveMarkers,
    SaveHistory,
    /// Commit the label panel for this generation once the current frame is done.
    ScheduleLabelLayout(u64),
    QuitSafely,
}
