//! Incremental splitting of a pipe-delimited text stream into words.
//!
//! The tutor model is prompted to answer with every word separated by `|`,
//! e.g. `你好|，|我|叫|约翰`. Its reply arrives as chunks whose boundaries have
//! nothing to do with word boundaries, so a word (or the delimiter after it)
//! may straddle any number of chunks. [`PipeSegmenter`] keeps the undelimited
//! tail of the stream and finalizes a word only once the delimiter that ends it
//! has been seen, or when the stream is finished.
//!
//! Invariants
//! - `pending` never contains the delimiter between calls.
//! - `words` is append-only: a word is never revised after it is finalized.
//! - Chunking does not matter: any partition of the same text yields the same
//!   words.

use alloc::{string::String, vec::Vec};
use core::fmt;

/// Word boundary marker in the model's output.
pub const DELIMITER: char = '|';

fn ignore_word(_: &str) {}

/// Streaming segmenter for `|`-delimited model output.
///
/// Finalized words are appended to an internal list (see [`words`]) and, when
/// constructed with [`with_callback`], handed to the callback in order as soon
/// as they are finalized.
///
/// # Examples
///
/// ```rust
/// use tutorseg::PipeSegmenter;
///
/// let mut segmenter = PipeSegmenter::new();
/// assert_eq!(segmenter.ingest("我|觉得|今"), ["我", "觉得"]);
/// assert_eq!(segmenter.ingest("天|的|天"), ["今天", "的"]);
/// assert_eq!(segmenter.pending(), "天");
/// assert_eq!(segmenter.finish(), Some("天"));
/// assert_eq!(segmenter.words(), ["我", "觉得", "今天", "的", "天"]);
/// ```
///
/// [`words`]: PipeSegmenter::words
/// [`with_callback`]: PipeSegmenter::with_callback
pub struct PipeSegmenter<F = fn(&str)> {
    pending: String,
    words: Vec<String>,
    on_word: F,
}

impl PipeSegmenter {
    /// Create a segmenter without a word callback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: String::new(),
            words: Vec::new(),
            on_word: ignore_word,
        }
    }
}

impl Default for PipeSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FnMut(&str)> PipeSegmenter<F> {
    /// Create a segmenter that calls `on_word` once per finalized word, in
    /// emission order, from within [`ingest`](Self::ingest) and
    /// [`finish`](Self::finish).
    #[must_use]
    pub fn with_callback(on_word: F) -> Self {
        Self {
            pending: String::new(),
            words: Vec::new(),
            on_word,
        }
    }

    /// Append a chunk of model output and finalize every word it completes.
    ///
    /// Returns the words finalized by this call, which is empty when the
    /// buffered text still contains no delimiter. A lone `"|"` on an empty
    /// buffer finalizes a single empty word.
    pub fn ingest(&mut self, chunk: &str) -> &[String] {
        let first_new = self.words.len();
        self.pending.push_str(chunk);

        // `pending` held no delimiter before this chunk.
        let Some(last) = chunk.rfind(DELIMITER) else {
            return &[];
        };

        let tail_start = self.pending.len() - chunk.len() + last;
        let tail = self.pending.split_off(tail_start + DELIMITER.len_utf8());
        self.pending.truncate(tail_start);
        let complete = core::mem::replace(&mut self.pending, tail);

        for word in complete.split(DELIMITER) {
            self.emit(String::from(word));
        }

        &self.words[first_new..]
    }

    /// Finalize whatever remains in the buffer as the last word.
    ///
    /// Returns `None` without emitting anything when the buffer is empty, so a
    /// stream ending in a delimiter produces no trailing empty word and a
    /// second call is a no-op.
    pub fn finish(&mut self) -> Option<&str> {
        if self.pending.is_empty() {
            return None;
        }
        let word = core::mem::take(&mut self.pending);
        debug!(word = word.as_str(), "flushing final word");
        self.emit(word);
        self.words.last().map(String::as_str)
    }

    fn emit(&mut self, word: String) {
        trace!(index = self.words.len(), word = word.as_str(), "word finalized");
        (self.on_word)(&word);
        self.words.push(word);
    }
}

impl<F> PipeSegmenter<F> {
    /// All words finalized so far, in stream order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Text received after the last delimiter, not yet a word.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Number of finalized words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word has been finalized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume the segmenter, returning the finalized words. Pending text is
    /// discarded; call [`finish`](Self::finish) first to keep it.
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl<F> fmt::Debug for PipeSegmenter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipeSegmenter")
            .field("pending", &self.pending)
            .field("words", &self.words)
            .finish_non_exhaustive()
    }
}
