#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tutorseg::{Correction, PipeSegmenter, align, chunking::split_seeded};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    split_seed: u64,
    /// Word ranges to quote as corrections; out-of-range pairs become misses.
    quotes: Vec<(u8, u8)>,
}

fn segment(chunks: &[&str]) -> Vec<String> {
    let mut segmenter = PipeSegmenter::new();
    for chunk in chunks {
        segmenter.ingest(chunk);
    }
    segmenter.finish();
    assert_eq!(segmenter.finish(), None);
    segmenter.into_words()
}

fn check(input: &Input) {
    let words = segment(&split_seeded(&input.text, input.split_seed));
    assert_eq!(words, segment(&[input.text.as_str()]));
    assert_eq!(words.concat(), input.text.replace('|', ""));

    let corrections: Vec<Correction> = input
        .quotes
        .iter()
        .map(|&(start, len)| {
            let start = usize::from(start);
            let end = start + usize::from(len);
            let original = words.get(start..=end).map(<[String]>::concat).unwrap_or_default();
            Correction::new(original, "", "")
        })
        .collect();

    let spans = align(&words, &corrections);
    let mut next = 0;
    for run in &spans {
        assert_eq!(run.span.start, next);
        if let Some(correction) = run.correction {
            assert_eq!(run.text(), correction.original);
        }
        next = run.span.end + 1;
    }
    assert_eq!(next, words.len());
}

fuzz_target!(|input: Input| check(&input));
