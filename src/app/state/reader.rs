use scrubber_core::markers::{Marker, MarkerKind};
use scrubber_core::position::ChapterPosition;

/// Reader-related model: where the reading pane is and what the reader marked.
pub struct ReaderState {
    pub(in crate::app) position: ChapterPosition,
    pub(in crate::app) markers: Vec<Marker>,
}

impl ReaderState {
    pub(in crate::app) fn is_bookmarked(&self) -> bool {
        self.bookmark_index().is_some()
    }

    /// Adds a chapter bookmark for the current position, or removes it if present.
    /// Returns whether the chapter is bookmarked afterwards.
    pub(in crate::app) fn toggle_bookmark(&mut self) -> bool {
        match self.bookmark_index() {
            Some(idx) => {
                self.markers.remove(idx);
                false
            }
            None => {
                self.markers.push(Marker::bookmark(
                    self.position.book_name.clone(),
                    self.position.chapter_number,
                ));
                true
            }
        }
    }

    fn bookmark_index(&self) -> Option<usize> {
        self.markers.iter().position(|marker| {
            marker.kind == MarkerKind::Bookmark
                && marker.book == self.position.book_name
                && marker.chapter == self.position.chapter_number
        })
    }
}
