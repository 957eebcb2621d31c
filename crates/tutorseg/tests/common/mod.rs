#![allow(dead_code)]

/// The learner's message as the segmentation model returns it.
pub const USER_MESSAGE: &str = "谢谢|你|正|我|的|句子|。|我|刚刚|的|爱好|是|去|公园|骑|一个|电动|独轮车|。";

// A tutor reply cut the way a provider might deliver it: words, delimiters
// and even single characters straddle chunk boundaries.
#[rustfmt::skip]
pub const REPLY_STREAM: [&str; 9] = [
    "不客",                // word split mid-way
    "气|！|",              // ends on a delimiter
    "|",                   // empty word between two delimiters
    "你|最近|的|爱",        // ends mid-word
    "好|很|有意思",
    "|",                   // delimiter alone
    "。|你|常常|去|公园|",
    "吗",
    "？",                  // no trailing delimiter; flushed on finish
];

/// Correction records as the correction model produces them for
/// [`USER_MESSAGE`].
pub fn corrections() -> Vec<tutorseg::Correction> {
    vec![
        tutorseg::Correction::new(
            "正我的句子",
            "纠正我的句子",
            "“正”这个字单独用不太自然，要用“纠正”或“改正”",
        ),
        tutorseg::Correction::new("我刚刚的爱好", "我最近的爱好", "“刚刚”是指刚才，“最近”更合适"),
        tutorseg::Correction::new("骑一个电动独轮车", "骑电动独轮车", "不需要“一个”"),
        // Paraphrased instead of quoted: matches nothing.
        tutorseg::Correction::new("我刚才的爱好", "我最近的爱好", ""),
        // Overlaps the first correction.
        tutorseg::Correction::new("我的句子", "我的句子", ""),
    ]
}

pub fn split_message(message: &str) -> Vec<String> {
    let mut segmenter = tutorseg::PipeSegmenter::new();
    segmenter.ingest(message);
    segmenter.finish();
    segmenter.into_words()
}
