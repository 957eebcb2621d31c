//! Async adapter from a model's text stream to a stream of words.
//!
//! LLM clients hand out replies as `Stream<Item = Result<chunk, error>>`.
//! [`WordStream`] drives a [`PipeSegmenter`] from such a stream: every chunk is
//! ingested as it arrives, finalized words are yielded in order, and the tail is
//! flushed when the upstream ends. If the upstream fails, the error is yielded
//! once and the stream ends without flushing, leaving the words already
//! yielded as the partial result.

use alloc::{collections::VecDeque, string::String};
use core::{
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::Stream;

use crate::{PipeSegmenter, StreamError, StreamOptions};

/// A word yielded by [`WordStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamedWord {
    /// Position of the word in the reply.
    pub index: usize,
    /// The word text; for partial words, the text received so far.
    pub word: String,
    /// `false` only for in-progress words (see [`StreamOptions::emit_partial`]).
    pub is_final: bool,
}

/// Stream of words segmented from an upstream stream of text chunks.
///
/// # Examples
///
/// ```rust
/// use futures::{executor::block_on, stream, StreamExt};
/// use tutorseg::WordStream;
///
/// let chunks = stream::iter(["你好|，|我", "|叫|约", "翰"].map(Ok::<_, std::io::Error>));
/// let words: Vec<String> = block_on(
///     WordStream::new(chunks)
///         .map(|word| word.unwrap().word)
///         .collect(),
/// );
/// assert_eq!(words, ["你好", "，", "我", "叫", "约翰"]);
/// ```
#[derive(Debug)]
pub struct WordStream<S> {
    upstream: S,
    segmenter: PipeSegmenter,
    ready: VecDeque<StreamedWord>,
    options: StreamOptions,
    done: bool,
}

impl<S> WordStream<S> {
    /// Wrap `upstream`, yielding only finalized words.
    #[must_use]
    pub fn new(upstream: S) -> Self {
        Self::with_options(upstream, StreamOptions::default())
    }

    /// Wrap `upstream` with explicit options.
    #[must_use]
    pub fn with_options(upstream: S, options: StreamOptions) -> Self {
        Self {
            upstream,
            segmenter: PipeSegmenter::new(),
            ready: VecDeque::new(),
            options,
            done: false,
        }
    }

    /// Words finalized so far, including ones not yet polled out.
    #[must_use]
    pub fn words(&self) -> &[String] {
        self.segmenter.words()
    }

    /// Stop streaming and take the segmenter, e.g. to keep the words of an
    /// aborted reply.
    #[must_use]
    pub fn into_segmenter(self) -> PipeSegmenter {
        self.segmenter
    }

    fn queue_from(&mut self, first: usize) {
        let words = &self.segmenter.words()[first..];
        self.ready
            .extend(words.iter().enumerate().map(|(offset, word)| StreamedWord {
                index: first + offset,
                word: word.clone(),
                is_final: true,
            }));
    }

    fn ingest(&mut self, chunk: &str) {
        let first = self.segmenter.len();
        self.segmenter.ingest(chunk);
        self.queue_from(first);

        // An empty chunk leaves the partial word unchanged.
        if self.options.emit_partial && !chunk.is_empty() && !self.segmenter.pending().is_empty() {
            self.ready.push_back(StreamedWord {
                index: self.segmenter.len(),
                word: String::from(self.segmenter.pending()),
                is_final: false,
            });
        }
    }

    fn finish(&mut self) {
        let first = self.segmenter.len();
        self.segmenter.finish();
        self.queue_from(first);
        self.done = true;
    }
}

impl<S, T, E> Stream for WordStream<S>
where
    S: Stream<Item = Result<T, E>> + Unpin,
    T: AsRef<str>,
{
    type Item = Result<StreamedWord, StreamError<E>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(word) = this.ready.pop_front() {
                return Poll::Ready(Some(Ok(word)));
            }
            if this.done {
                return Poll::Ready(None);
            }
            match Pin::new(&mut this.upstream).poll_next(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Some(Ok(chunk))) => this.ingest(chunk.as_ref()),
                Poll::Ready(Some(Err(err))) => {
                    debug!(words = this.segmenter.len(), "text stream failed, stopping");
                    this.done = true;
                    return Poll::Ready(Some(Err(StreamError::Upstream(err))));
                }
                Poll::Ready(None) => this.finish(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (self.ready.len(), Some(self.ready.len()))
        } else {
            (self.ready.len(), None)
        }
    }
}
