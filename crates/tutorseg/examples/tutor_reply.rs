//! Renders a tutor reply word by word while it streams in, then underlines the
//! corrections to the learner's message.
//!
//! The reply stream is simulated with irregular chunks, the way chat
//! completion APIs deliver partial tokens. The partially received word is
//! shown in brackets until its delimiter arrives.
//!
//! Run with
//!
//! ```bash
//! cargo run -p tutorseg --example tutor_reply
//! ```

use futures::{StreamExt, executor::block_on, stream};
use tutorseg::{Correction, PipeSegmenter, StreamOptions, WordStream, align};

fn main() {
    let simulated_reply: [&str; 7] = [
        "不客",
        "气|！|你|最",
        "近|的|爱好|很",
        "|有意",
        "思|。|你|常常|去",
        "|公园|吗",
        "？",
    ];

    let chunks = stream::iter(simulated_reply.map(Ok::<_, std::io::Error>));
    let mut words = WordStream::with_options(chunks, StreamOptions { emit_partial: true });

    block_on(async {
        while let Some(word) = words.next().await {
            match word {
                Ok(word) if word.is_final => println!("{:>3} {}", word.index, word.word),
                Ok(word) => println!("{:>3} [{}]", word.index, word.word),
                Err(err) => {
                    eprintln!("reply interrupted: {err}");
                    break;
                }
            }
        }
    });

    // The learner's message, segmented by the same model.
    let mut segmenter = PipeSegmenter::new();
    segmenter.ingest("谢谢|你|正|我|的|句子|。|我|刚刚|的|爱好|是|去|公园|骑|一个|电动|独轮车|。");
    segmenter.finish();

    let corrections = [
        Correction::new("正我的句子", "纠正我的句子", "“正”这个字单独用不太自然"),
        Correction::new("骑一个电动独轮车", "骑电动独轮车", "不需要“一个”"),
    ];

    let mut line = String::new();
    for run in align(segmenter.words(), &corrections) {
        match run.correction {
            Some(correction) => {
                line.push_str(&format!("_{}_", run.text()));
                println!("修正: {} -> {} ({})", run.text(), correction.correction, correction.explanation);
            }
            None => line.push_str(&run.text()),
        }
    }
    println!("{line}");
}
