//! Greedy longest-match segmentation against a word list.

use alloc::{
    collections::{BTreeMap, BTreeSet},
    string::String,
    vec::Vec,
};

/// Word list consulted by [`segment_longest_match`].
pub trait Lexicon {
    /// Whether `word` is a dictionary entry.
    fn contains_word(&self, word: &str) -> bool;
}

impl Lexicon for BTreeSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Lexicon for BTreeSet<&str> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<V> Lexicon for BTreeMap<String, V> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains_key(word)
    }
}

impl Lexicon for [&str] {
    fn contains_word(&self, word: &str) -> bool {
        self.iter().any(|entry| *entry == word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }
}

/// Whether `c` is treated as part of a Chinese word.
///
/// Covers the CJK unified ideographs (including extension A and the
/// supplementary planes), compatibility ideographs, the ideographic zero `○`,
/// and fullwidth Latin letters.
#[must_use]
pub fn is_hanzi(c: char) -> bool {
    matches!(
        c,
        '\u{25CB}'
            | '\u{3400}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF21}'..='\u{FF3A}'
            | '\u{FF41}'..='\u{FF5A}'
            | '\u{20000}'..='\u{3FFFF}'
    )
}

/// Split `text` by repeatedly taking the longest dictionary word at the
/// current position.
///
/// A word only grows one Han character at a time while every intermediate
/// prefix is itself in the lexicon. Anything else (punctuation, Latin text,
/// characters missing from the lexicon) becomes a single-character word.
/// The returned words borrow from `text` and concatenate back to it.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use tutorseg::segment_longest_match;
///
/// let lexicon: BTreeSet<&str> = ["我", "很", "高", "高兴", "认", "认识", "你"].into();
/// assert_eq!(
///     segment_longest_match("我很高兴认识你！", &lexicon),
///     ["我", "很", "高兴", "认识", "你", "！"]
/// );
/// ```
pub fn segment_longest_match<'t, L: Lexicon + ?Sized>(text: &'t str, lexicon: &L) -> Vec<&'t str> {
    let mut words = Vec::new();
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let mut end = first.len_utf8();
        if is_hanzi(first) {
            if lexicon.contains_word(&rest[..end]) {
                for next in rest[end..].chars().take_while(|&c| is_hanzi(c)) {
                    let longer = end + next.len_utf8();
                    if !lexicon.contains_word(&rest[..longer]) {
                        break;
                    }
                    end = longer;
                }
            } else {
                debug!(character = %first, "character missing from lexicon");
            }
        }

        let (word, tail) = rest.split_at(end);
        words.push(word);
        rest = tail;
    }

    words
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;

    const LEXICON: &[&str] = &[
        "我", "觉", "觉得", "今", "今天", "天", "天气", "的", "很", "好", "你", "你好", "叫",
        "约", "约翰",
    ];

    #[rstest]
    #[case::sentence("我觉得今天的天气很好", &["我", "觉得", "今天", "的", "天气", "很", "好"])]
    #[case::punctuation("你好，我叫约翰", &["你好", "，", "我", "叫", "约翰"])]
    #[case::latin("你好 John", &["你好", " ", "J", "o", "h", "n"])]
    #[case::unknown_character("你们好", &["你", "们", "好"])]
    #[case::empty("", &[])]
    fn segments_with_word_list(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(segment_longest_match(text, LEXICON), expected);
    }

    #[test]
    fn prefers_longest_chain_of_entries() {
        let lexicon: BTreeSet<String> = ["电", "电动", "电动独", "电动独轮车"]
            .into_iter()
            .map(ToString::to_string)
            .collect();
        // "电动独轮" is not an entry, so the chain stops before reaching
        // "电动独轮车".
        assert_eq!(segment_longest_match("电动独轮车", &lexicon), ["电动独", "轮", "车"]);
    }

    #[test]
    fn map_lexicon() {
        let mut lexicon = BTreeMap::new();
        lexicon.insert("谢".to_string(), "xiè");
        lexicon.insert("谢谢".to_string(), "xièxie");
        assert_eq!(segment_longest_match("谢谢你", &lexicon), ["谢谢", "你"]);
    }

    #[rstest]
    #[case('我', true)]
    #[case('○', true)]
    #[case('Ａ', true)]
    #[case('𠀀', true)]
    #[case('A', false)]
    #[case('，', false)]
    #[case('ー', false)]
    fn hanzi_ranges(#[case] c: char, #[case] expected: bool) {
        assert_eq!(is_hanzi(c), expected);
    }

    #[quickcheck]
    fn words_concatenate_to_input(text: String) -> bool {
        segment_longest_match(&text, LEXICON).concat() == text
    }
}
