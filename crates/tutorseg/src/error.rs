use thiserror::Error;

/// Failure surfaced by [`WordStream`](crate::WordStream).
///
/// Segmentation itself cannot fail; the only errors come from the text source
/// feeding it. Words yielded before the error remain valid.
#[derive(Error, Debug, PartialEq)]
pub enum StreamError<E> {
    /// The upstream text stream failed; no further words are produced.
    #[error("text stream failed: {0}")]
    Upstream(#[source] E),
}
