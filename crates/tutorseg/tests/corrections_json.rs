#![allow(missing_docs)]

mod common;

use common::{USER_MESSAGE, split_message};
use tutorseg::{Correction, Span, align};

// Shape of the correction model's structured output.
const MODEL_OUTPUT: &str = r#"[
  {
    "original": "正我的句子",
    "correction": "纠正我的句子",
    "explanation": "“正”这个字单独用不太自然，要用“纠正”或“改正”"
  },
  {
    "original": "骑一个电动独轮车",
    "correction": "骑电动独轮车",
    "explanation": "不需要“一个”"
  }
]"#;

#[test]
fn decodes_model_corrections() {
    let items: Vec<Correction> = serde_json::from_str(MODEL_OUTPUT).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1], Correction::new("骑一个电动独轮车", "骑电动独轮车", "不需要“一个”"));
}

#[test]
fn serializes_spans_for_the_ui() {
    let words = split_message(USER_MESSAGE);
    let items: Vec<Correction> = serde_json::from_str(MODEL_OUTPUT).unwrap();
    let spans = align(&words, &items);

    let json = serde_json::to_value(&spans[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "span": { "start": 2, "end": 5 },
            "words": ["正", "我", "的", "句子"],
            "correction": {
                "original": "正我的句子",
                "correction": "纠正我的句子",
                "explanation": "“正”这个字单独用不太自然，要用“纠正”或“改正”"
            }
        })
    );

    let plain = serde_json::to_value(spans[0]).unwrap();
    assert_eq!(plain["correction"], serde_json::Value::Null);

    let span: Span = serde_json::from_value(json["span"].clone()).unwrap();
    assert_eq!(span, Span { start: 2, end: 5 });
}
