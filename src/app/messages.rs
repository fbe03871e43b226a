use iced::keyboard::{Key, Modifiers};

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextChapter,
    PreviousChapter,
    ToggleTheme,
    ToggleBookmark,
    ToggleHistory,
    ClearHistory,
    OpenHistoryEntry(usize),
    /// Pointer moved over the scrubber surface. `over_track` is true while the
    /// pointer is on the track column or on the visible label panel.
    ScrubberHover {
        over_track: bool,
        label: Option<usize>,
        surface_height: f32,
    },
    ScrubberPressed {
        y: f32,
        surface_height: f32,
    },
    ScrubberDragged {
        y: f32,
        surface_height: f32,
    },
    ScrubberReleased,
    LabelTapped(usize),
    /// Deferred label layout, dispatched once the frame that requested it is done.
    CommitLabelLayout(u64),
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    SafeQuit,
}
