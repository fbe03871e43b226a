use thiserror::Error;

/// Rejections raised when a book/chapter pair cannot be placed on the canon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("unknown book: {0}")]
    UnknownBook(String),
    #[error("{book} has {count} chapters, chapter {chapter} is out of range")]
    ChapterOutOfRange {
        book: String,
        chapter: u32,
        count: u32,
    },
}
