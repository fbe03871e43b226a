//! Mapping between book/chapter coordinates, the global chapter index and the
//! normalized track fraction.

use crate::canon::{self, BOOKS};
use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chapter of a canonical book. Used as a navigation target and equality key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPosition {
    pub book_name: String,
    pub chapter_number: u32,
}

impl ChapterPosition {
    pub fn new(book_name: impl Into<String>, chapter_number: u32) -> Self {
        Self {
            book_name: book_name.into(),
            chapter_number,
        }
    }

    /// Chapter 1 of Genesis.
    pub fn first() -> Self {
        chapter_position(0)
    }

    pub fn global_index(&self) -> Result<usize, PositionError> {
        global_chapter_index(&self.book_name, self.chapter_number)
    }
}

impl fmt::Display for ChapterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book_name, self.chapter_number)
    }
}

/// The `[start, end)` slice of the track occupied by one book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRange {
    pub name: &'static str,
    pub start_fraction: f32,
    pub end_fraction: f32,
}

impl BookRange {
    pub fn mid_fraction(&self) -> f32 {
        (self.start_fraction + self.end_fraction) / 2.0
    }

    /// Half-open containment; the range ending at 1.0 also owns 1.0 itself.
    pub fn contains(&self, fraction: f32) -> bool {
        fraction >= self.start_fraction
            && (fraction < self.end_fraction || (self.end_fraction >= 1.0 && fraction <= 1.0))
    }
}

/// 0-based index of `chapter` of `book` across the whole canon.
pub fn global_chapter_index(book: &str, chapter: u32) -> Result<usize, PositionError> {
    let mut offset = 0usize;
    for (name, count) in BOOKS {
        if name == book {
            if chapter == 0 || chapter > count {
                return Err(PositionError::ChapterOutOfRange {
                    book: book.to_string(),
                    chapter,
                    count,
                });
            }
            return Ok(offset + chapter as usize - 1);
        }
        offset += count as usize;
    }
    Err(PositionError::UnknownBook(book.to_string()))
}

/// Total-function variant that keeps the legacy behaviour: an unknown book
/// resolves to the running total (one past the last chapter) and the chapter
/// number is not range-checked.
pub fn global_chapter_index_or_end(book: &str, chapter: u32) -> usize {
    let mut offset = 0usize;
    for (name, count) in BOOKS {
        if name == book {
            return (offset + chapter as usize).saturating_sub(1);
        }
        offset += count as usize;
    }
    offset
}

/// Inverse of [`global_chapter_index`]. Out-of-range indices clamp to the
/// first or last chapter of the canon.
pub fn chapter_position(global_index: i64) -> ChapterPosition {
    let last = i64::from(canon::total_chapters()) - 1;
    let clamped = global_index.clamp(0, last) as u32;
    let mut offset = 0u32;
    for (name, count) in BOOKS {
        if clamped < offset + count {
            return ChapterPosition::new(name, clamped - offset + 1);
        }
        offset += count;
    }
    let (name, count) = BOOKS[BOOKS.len() - 1];
    ChapterPosition::new(name, count)
}

/// `index / (total - 1)`, the thumb coordinate of a chapter.
pub fn track_fraction(global_index: usize) -> f32 {
    let denom = canon::total_chapters().saturating_sub(1).max(1) as f32;
    global_index as f32 / denom
}

/// Nearest chapter index for a track fraction; the fraction is clamped to `[0, 1]`.
pub fn global_index_for_fraction(fraction: f32) -> usize {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let last = canon::total_chapters().saturating_sub(1) as f32;
    (fraction * last).round() as usize
}

pub fn position_for_fraction(fraction: f32) -> ChapterPosition {
    chapter_position(global_index_for_fraction(fraction) as i64)
}

/// Book slices of the track, contiguous and partitioning `[0, 1]`.
pub fn book_ranges() -> Vec<BookRange> {
    let total = canon::total_chapters() as f32;
    let mut offset = 0u32;
    BOOKS
        .iter()
        .map(|&(name, count)| {
            let start_fraction = offset as f32 / total;
            offset += count;
            BookRange {
                name,
                start_fraction,
                end_fraction: offset as f32 / total,
            }
        })
        .collect()
}

/// Index of the range that owns `fraction`, if any.
pub fn book_index_at_fraction(ranges: &[BookRange], fraction: f32) -> Option<usize> {
    ranges.iter().position(|range| range.contains(fraction))
}

/// The chapter after `position`, rolling into chapter 1 of the next book.
pub fn next_chapter(position: &ChapterPosition) -> Option<ChapterPosition> {
    let index = position.global_index().ok()?;
    let next = index + 1;
    if next >= canon::total_chapters() as usize {
        return None;
    }
    Some(chapter_position(next as i64))
}

/// The chapter before `position`, rolling back into the last chapter of the
/// previous book.
pub fn previous_chapter(position: &ChapterPosition) -> Option<ChapterPosition> {
    let index = position.global_index().ok()?;
    let previous = index.checked_sub(1)?;
    Some(chapter_position(previous as i64))
}
