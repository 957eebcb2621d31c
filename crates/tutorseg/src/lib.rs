//! Incremental word segmentation and correction alignment for tutoring chats.
//!
//! A language model streams its reply with word boundaries marked by `|`
//! (`我|觉得|今天|的|天气`). [`PipeSegmenter`] turns the arbitrarily chunked
//! stream into an append-only list of words as soon as each boundary arrives.
//! Separately, a correction model names substrings of the learner's message
//! that should be fixed; [`align`] maps each of those [`Correction`]s onto a
//! contiguous run of segmented words so a UI can underline it.
//!
//! ```rust
//! use tutorseg::{Correction, PipeSegmenter, align};
//!
//! let mut segmenter = PipeSegmenter::new();
//! segmenter.ingest("我|刚刚|的|爱");
//! segmenter.ingest("好|是|骑车");
//! segmenter.finish();
//!
//! let corrections = [Correction::new("刚刚的", "最近的", "“刚刚”是指刚才")];
//! let spans = align(segmenter.words(), &corrections);
//!
//! assert_eq!(spans.len(), 3);
//! assert_eq!(spans[1].words, ["刚刚", "的"]);
//! assert_eq!(spans[1].correction, Some(&corrections[0]));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod log;

mod align;
mod correction;
#[cfg(feature = "stream")]
mod error;
mod longest_match;
#[cfg(feature = "stream")]
mod options;
mod segmenter;
#[cfg(feature = "stream")]
mod stream;

#[doc(hidden)]
pub mod chunking;

#[cfg(test)]
mod tests;

pub use align::{Aligner, Claim, Span, WordSpan, align, find_span};
pub use correction::Correction;
pub use longest_match::{Lexicon, is_hanzi, segment_longest_match};
pub use segmenter::{DELIMITER, PipeSegmenter};
#[cfg(feature = "stream")]
pub use error::StreamError;
#[cfg(feature = "stream")]
pub use options::StreamOptions;
#[cfg(feature = "stream")]
pub use stream::{StreamedWord, WordStream};
