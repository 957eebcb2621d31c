//! Overlaying corrections onto a segmented message.
//!
//! The correction model quotes the learner's text (`"正我的句子"`), not word
//! indices. To underline a correction in the UI we have to find which run of
//! segmented words spells out exactly that quote, and we have to do so
//! deterministically when several corrections want the same words.
//!
//! Rules
//! - A correction covers the first run of words (lowest start, then shortest)
//!   whose concatenation equals its `original` byte-for-byte.
//! - Corrections are applied in list order; a correction whose run touches a
//!   word already claimed is dropped entirely.
//! - Corrections that match nothing are dropped silently. The correction model
//!   sometimes paraphrases instead of quoting, and that is not an error.
//! - The result partitions the words: every index belongs to exactly one run,
//!   and runs are ordered by position regardless of correction order.

use alloc::{string::String, vec, vec::Vec};
use core::ops::RangeInclusive;

use crate::Correction;

/// Inclusive range of word indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Index of the first word in the run.
    pub start: usize,
    /// Index of the last word in the run.
    pub end: usize,
}

impl Span {
    /// Number of words covered by the span; zero when `end < start`.
    #[must_use]
    pub fn word_count(self) -> usize {
        self.end.checked_sub(self.start).map_or(0, |gap| gap + 1)
    }

    /// The covered indices.
    #[must_use]
    pub fn range(self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Find the first contiguous run of `tokens` that concatenates to `target`.
///
/// Runs are compared by start index, then by length, so the earliest and
/// shortest match wins. An empty `target` never matches.
///
/// # Examples
///
/// ```rust
/// use tutorseg::{Span, find_span};
///
/// let tokens = ["A", "B", "C", "C", "A", "B", "D"];
/// assert_eq!(find_span(&tokens, "AB"), Some(Span { start: 0, end: 1 }));
/// assert_eq!(find_span(&tokens, "ABD"), Some(Span { start: 4, end: 6 }));
/// assert_eq!(find_span(&tokens, "AC"), None);
/// ```
pub fn find_span<S: AsRef<str>>(tokens: &[S], target: &str) -> Option<Span> {
    if target.is_empty() {
        return None;
    }
    (0..tokens.len()).find_map(|start| match_from(tokens, start, target))
}

// Extends from `start` only while the words read so far are a prefix of `target`.
fn match_from<S: AsRef<str>>(tokens: &[S], start: usize, target: &str) -> Option<Span> {
    let mut rest = target;
    for (end, token) in tokens.iter().enumerate().skip(start) {
        rest = rest.strip_prefix(token.as_ref())?;
        if rest.is_empty() {
            return Some(Span { start, end });
        }
    }
    None
}

/// One run of the partition produced by [`align`] or [`Aligner::spans`].
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordSpan<'a, S> {
    /// Word indices covered by this run.
    pub span: Span,
    /// The covered words.
    pub words: &'a [S],
    /// The correction claiming this run, if any.
    pub correction: Option<&'a Correction>,
}

impl<S> Clone for WordSpan<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for WordSpan<'_, S> {}

impl<S: AsRef<str>> WordSpan<'_, S> {
    /// The covered words joined back together.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.iter().map(AsRef::as_ref).collect()
    }
}

impl<S> WordSpan<'_, S> {
    /// Whether a correction claims this run.
    #[must_use]
    pub fn is_corrected(&self) -> bool {
        self.correction.is_some()
    }
}

/// Outcome of offering one correction to an [`Aligner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The correction now owns this run.
    Claimed(Span),
    /// No run of words spells out the correction's `original`.
    NotFound,
    /// The matching run overlaps a run claimed by an earlier correction.
    Contested(Span),
}

/// Incremental form of [`align`] for corrections that arrive one at a time.
///
/// Offering corrections one by one through [`claim`](Self::claim) yields the
/// same partition as passing the whole list to [`align`] in that order, so the
/// UI can re-render as each correction streams in.
///
/// # Examples
///
/// ```rust
/// use tutorseg::{Aligner, Claim, Correction, Span};
///
/// let words = ["谢谢", "你", "正", "我", "的", "句子"];
/// let fix = Correction::new("正我的句子", "纠正我的句子", "要用“纠正”");
/// let clash = Correction::new("我的", "我的", "");
///
/// let mut aligner = Aligner::new(&words);
/// assert_eq!(aligner.claim(&fix), Claim::Claimed(Span { start: 2, end: 5 }));
/// assert_eq!(aligner.claim(&clash), Claim::Contested(Span { start: 3, end: 4 }));
/// assert_eq!(aligner.spans().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Aligner<'a, S> {
    tokens: &'a [S],
    used: Vec<bool>,
    claimed: Vec<(Span, &'a Correction)>,
}

impl<'a, S: AsRef<str>> Aligner<'a, S> {
    /// Start aligning against a finalized word list.
    #[must_use]
    pub fn new(tokens: &'a [S]) -> Self {
        Self {
            tokens,
            used: vec![false; tokens.len()],
            claimed: Vec::new(),
        }
    }

    /// Offer the next correction in precedence order.
    pub fn claim(&mut self, correction: &'a Correction) -> Claim {
        let Some(span) = find_span(self.tokens, &correction.original) else {
            debug!(original = correction.original.as_str(), "correction matches no run of words");
            return Claim::NotFound;
        };

        let covered = &mut self.used[span.range()];
        if covered.iter().any(|&used| used) {
            debug!(
                original = correction.original.as_str(),
                start = span.start,
                end = span.end,
                "correction overlaps an earlier claim"
            );
            return Claim::Contested(span);
        }

        covered.fill(true);
        self.claimed.push((span, correction));
        Claim::Claimed(span)
    }

    /// Current partition of the words into claimed and unclaimed runs,
    /// ordered by position.
    #[must_use]
    pub fn spans(&self) -> Vec<WordSpan<'a, S>> {
        let mut spans: Vec<_> = self
            .claimed
            .iter()
            .map(|&(span, correction)| self.word_span(span, Some(correction)))
            .collect();

        let mut open = None;
        for (index, &used) in self.used.iter().enumerate() {
            match (used, open) {
                (false, None) => open = Some(index),
                (true, Some(start)) => {
                    spans.push(self.word_span(Span { start, end: index - 1 }, None));
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            let end = self.tokens.len() - 1;
            spans.push(self.word_span(Span { start, end }, None));
        }

        spans.sort_unstable_by_key(|run| run.span.start);
        spans
    }

    /// Runs claimed so far, in claim order.
    pub fn claimed(&self) -> impl Iterator<Item = (Span, &'a Correction)> + '_ {
        self.claimed.iter().copied()
    }

    fn word_span(&self, span: Span, correction: Option<&'a Correction>) -> WordSpan<'a, S> {
        WordSpan {
            span,
            words: &self.tokens[span.range()],
            correction,
        }
    }
}

/// Partition `tokens` into runs, tagging each run claimed by one of
/// `corrections`.
///
/// Earlier corrections take precedence over later ones that overlap them.
/// With no tokens the result is empty; with no applicable corrections it is a
/// single unclaimed run.
pub fn align<'a, S: AsRef<str>>(
    tokens: &'a [S],
    corrections: &'a [Correction],
) -> Vec<WordSpan<'a, S>> {
    let mut aligner = Aligner::new(tokens);
    for correction in corrections {
        aligner.claim(correction);
    }
    aligner.spans()
}
