#![allow(missing_docs)]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    layer::{Context, Layer, SubscriberExt},
    registry,
};
use tutorseg::{Correction, PipeSegmenter, align, segment_longest_match};

/// Collects `LEVEL message` lines for every event.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

#[derive(Default)]
struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let mut message = Message::default();
        event.record(&mut message);
        self.0
            .lock()
            .unwrap()
            .push(format!("{} {}", event.metadata().level(), message.0));
    }
}

fn recorded(run: impl FnOnce()) -> Vec<String> {
    let recorder = Recorder::default();
    tracing::subscriber::with_default(registry().with(recorder.clone()), run);
    let lines = recorder.0.lock().unwrap().clone();
    lines
}

#[test]
fn segmenter_traces_each_word() {
    let lines = recorded(|| {
        let mut segmenter = PipeSegmenter::new();
        segmenter.ingest("你好|，|约");
        segmenter.ingest("翰");
        segmenter.finish();
    });

    assert_eq!(
        lines,
        [
            "TRACE word finalized",
            "TRACE word finalized",
            "DEBUG flushing final word",
            "TRACE word finalized",
        ]
    );
}

#[test]
fn dropped_corrections_are_reported() {
    let words = ["我", "的", "爱好"];
    let corrections = [
        Correction::new("我的", "我的", ""),
        Correction::new("的爱好", "的兴趣", ""),
        Correction::new("骑车", "骑自行车", ""),
    ];

    let lines = recorded(|| {
        align(&words, &corrections);
    });

    assert_eq!(
        lines,
        [
            "DEBUG correction overlaps an earlier claim",
            "DEBUG correction matches no run of words",
        ]
    );
}

#[test]
fn missing_characters_are_reported() {
    let lexicon: &[&str] = &["你", "你好"];
    let lines = recorded(|| {
        segment_longest_match("你好吗", lexicon);
    });

    assert_eq!(lines, ["DEBUG character missing from lexicon"]);
}
