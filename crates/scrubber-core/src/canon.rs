//! Canonical book table.
//!
//! Sixty-six books in traditional Protestant order with their fixed chapter
//! counts. The table is static; everything else in the crate derives from it.

use once_cell::sync::Lazy;
use std::ops::RangeInclusive;

/// Number of Old Testament books at the head of [`BOOKS`].
pub const OLD_TESTAMENT_BOOKS: usize = 39;

/// `(name, chapter count)` in canonical order.
pub static BOOKS: [(&str, u32); 66] = [
    ("Genesis", 50),
    ("Exodus", 40),
    ("Leviticus", 27),
    ("Numbers", 36),
    ("Deuteronomy", 34),
    ("Joshua", 24),
    ("Judges", 21),
    ("Ruth", 4),
    ("1 Samuel", 31),
    ("2 Samuel", 24),
    ("1 Kings", 22),
    ("2 Kings", 25),
    ("1 Chronicles", 29),
    ("2 Chronicles", 36),
    ("Ezra", 10),
    ("Nehemiah", 13),
    ("Esther", 10),
    ("Job", 42),
    ("Psalms", 150),
    ("Proverbs", 31),
    ("Ecclesiastes", 12),
    ("Song of Solomon", 8),
    ("Isaiah", 66),
    ("Jeremiah", 52),
    ("Lamentations", 5),
    ("Ezekiel", 48),
    ("Daniel", 12),
    ("Hosea", 14),
    ("Joel", 3),
    ("Amos", 9),
    ("Obadiah", 1),
    ("Jonah", 4),
    ("Micah", 7),
    ("Nahum", 3),
    ("Habakkuk", 3),
    ("Zephaniah", 3),
    ("Haggai", 2),
    ("Zechariah", 14),
    ("Malachi", 4),
    ("Matthew", 28),
    ("Mark", 16),
    ("Luke", 24),
    ("John", 21),
    ("Acts", 28),
    ("Romans", 16),
    ("1 Corinthians", 16),
    ("2 Corinthians", 13),
    ("Galatians", 6),
    ("Ephesians", 6),
    ("Philippians", 4),
    ("Colossians", 4),
    ("1 Thessalonians", 5),
    ("2 Thessalonians", 3),
    ("1 Timothy", 6),
    ("2 Timothy", 4),
    ("Titus", 3),
    ("Philemon", 1),
    ("Hebrews", 13),
    ("James", 5),
    ("1 Peter", 5),
    ("2 Peter", 3),
    ("1 John", 5),
    ("2 John", 1),
    ("3 John", 1),
    ("Jude", 1),
    ("Revelation", 22),
];

static TOTAL_CHAPTERS: Lazy<u32> = Lazy::new(|| BOOKS.iter().map(|(_, count)| count).sum());

/// Book names in canonical order.
pub fn book_names() -> impl ExactSizeIterator<Item = &'static str> + Clone {
    BOOKS.iter().map(|(name, _)| *name)
}

pub fn book_index(name: &str) -> Option<usize> {
    BOOKS.iter().position(|(candidate, _)| *candidate == name)
}

pub fn book_at(index: usize) -> Option<&'static str> {
    BOOKS.get(index).map(|(name, _)| *name)
}

/// Chapter count for a canonical book name; `None` when the name is not in the canon.
pub fn chapter_count(name: &str) -> Option<u32> {
    book_index(name).map(|idx| BOOKS[idx].1)
}

/// Chapter numbers of a book, `1..=count`. Unknown books yield an empty range.
pub fn chapters(name: &str) -> RangeInclusive<u32> {
    match chapter_count(name) {
        Some(count) => 1..=count,
        None => RangeInclusive::new(1, 0),
    }
}

pub fn chapter_exists(name: &str, chapter: u32) -> bool {
    chapters(name).contains(&chapter)
}

/// Sum of all chapter counts (1,189).
pub fn total_chapters() -> u32 {
    *TOTAL_CHAPTERS
}

pub fn is_old_testament(index: usize) -> bool {
    index < OLD_TESTAMENT_BOOKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canon_has_sixty_six_books_and_1189_chapters() {
        assert_eq!(book_names().len(), 66);
        assert_eq!(total_chapters(), 1189);
        assert_eq!(book_names().take(OLD_TESTAMENT_BOOKS).last(), Some("Malachi"));
        assert_eq!(book_at(OLD_TESTAMENT_BOOKS), Some("Matthew"));
    }

    #[test]
    fn unknown_books_have_no_chapters() {
        assert_eq!(chapter_count("Psalm"), None);
        assert_eq!(chapters("Psalm").count(), 0);
        assert!(!chapter_exists("Psalm", 1));
    }

    #[test]
    fn chapter_existence_respects_bounds() {
        assert!(chapter_exists("Jude", 1));
        assert!(!chapter_exists("Jude", 2));
        assert!(!chapter_exists("Genesis", 0));
        assert_eq!(chapters("Psalms").last(), Some(150));
    }
}
