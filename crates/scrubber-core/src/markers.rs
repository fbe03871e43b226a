//! Highlight, bookmark and note markers along the scrubber track.
//!
//! Markers are owned by their collaborators; this module only maps each one
//! onto a track fraction and a lateral lane so the three kinds never overlap.

use crate::position::{global_chapter_index, track_fraction};
use crate::scrubber::TrackSpan;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Horizontal distance from the track centre to the first marker lane.
pub const LANE_OFFSET: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Yellow,
    Green,
    Blue,
    Pink,
}

impl HighlightColor {
    /// RGBA used for scrubber glyphs, opaque enough to read against the track.
    pub fn scrubber_rgba(self) -> [f32; 4] {
        match self {
            HighlightColor::Yellow => [1.0, 0.8, 0.0, 0.85],
            HighlightColor::Green => [0.2, 0.78, 0.35, 0.85],
            HighlightColor::Blue => [0.0, 0.48, 1.0, 0.8],
            HighlightColor::Pink => [1.0, 0.18, 0.33, 0.85],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "color", rename_all = "lowercase")]
pub enum MarkerKind {
    Highlight(HighlightColor),
    Bookmark,
    Note,
}

impl MarkerKind {
    /// Lateral offset from the track centre: highlights to the left, bookmarks
    /// and notes in separate lanes to the right.
    pub fn lateral_offset(self) -> f32 {
        match self {
            MarkerKind::Highlight(_) => -LANE_OFFSET,
            MarkerKind::Bookmark => LANE_OFFSET,
            MarkerKind::Note => LANE_OFFSET * 2.0,
        }
    }

    fn lane(self) -> u8 {
        match self {
            MarkerKind::Highlight(_) => 0,
            MarkerKind::Bookmark => 1,
            MarkerKind::Note => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub book: String,
    pub chapter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<u32>,
}

impl Marker {
    pub fn bookmark(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            kind: MarkerKind::Bookmark,
            book: book.into(),
            chapter,
            verse: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub kind: MarkerKind,
    pub global_index: usize,
    pub fraction: f32,
    /// Surface y coordinate of the glyph centre.
    pub y: f32,
    pub x_offset: f32,
}

/// Places markers on the track. Markers that do not resolve to a canonical
/// chapter are skipped; repeats in the same lane and chapter draw once.
pub fn place_markers(markers: &[Marker], track: TrackSpan) -> Vec<PlacedMarker> {
    let mut seen = HashSet::new();
    let mut placed = Vec::with_capacity(markers.len());
    for marker in markers {
        let index = match global_chapter_index(&marker.book, marker.chapter) {
            Ok(index) => index,
            Err(err) => {
                warn!(book = %marker.book, chapter = marker.chapter, "Skipping marker: {err}");
                continue;
            }
        };
        if !seen.insert((marker.kind.lane(), index)) {
            continue;
        }
        let fraction = track_fraction(index);
        placed.push(PlacedMarker {
            kind: marker.kind,
            global_index: index,
            fraction,
            y: track.y_at(fraction),
            x_offset: marker.kind.lateral_offset(),
        });
    }
    placed
}
