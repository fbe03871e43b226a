use scrubber_core::history::ReadingHistory;

pub struct HistoryState {
    pub(in crate::app) visible: bool,
    pub(in crate::app) entries: ReadingHistory,
}
