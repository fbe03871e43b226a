//! Position-and-navigation model for a chapter scrubber over the biblical canon.
//!
//! The crate is GUI-agnostic: hosts feed pointer, hover and geometry input into
//! [`scrubber::ScrubberController`] and act on the effects it returns.

pub mod canon;
pub mod error;
pub mod history;
pub mod layout;
pub mod markers;
pub mod position;
pub mod scrubber;

pub use error::PositionError;
pub use position::{BookRange, ChapterPosition};
