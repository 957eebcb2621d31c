//! Cutting a reply into chunks the way a chat completion API might deliver
//! it. Used by tests, benchmarks and the fuzz target.

use alloc::vec::Vec;

#[cfg(any(test, feature = "chunking"))]
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Cut `reply` into `parts` chunks holding about the same number of
/// characters. Cuts ignore word boundaries, like streamed model tokens do.
///
/// A `parts` of zero is treated as one; an empty `reply` yields no chunks.
#[must_use]
pub fn split_by_chars(reply: &str, parts: usize) -> Vec<&str> {
    let per_chunk = reply.chars().count().div_ceil(parts.max(1)).max(1);
    let cuts = reply
        .char_indices()
        .map(|(offset, _)| offset)
        .step_by(per_chunk)
        .skip(1)
        .chain(core::iter::once(reply.len()));

    let mut chunks = Vec::with_capacity(parts.min(reply.len()));
    let mut start = 0;
    for end in cuts {
        if end > start {
            chunks.push(&reply[start..end]);
            start = end;
        }
    }
    chunks
}

/// Cut `reply` into non-empty chunks of random length drawn from `seed`.
///
/// The same seed always gives the same cuts, and every cut falls on a
/// character boundary.
#[cfg(any(test, feature = "chunking"))]
#[must_use]
pub fn split_seeded(reply: &str, seed: u64) -> Vec<&str> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < reply.len() {
        let mut end = start + rng.random_range(1..=reply.len() - start);
        while !reply.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&reply[start..end]);
        start = end;
    }
    chunks
}
