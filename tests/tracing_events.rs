//! Structured events emitted on conversion mismatches.

#![cfg(feature = "tracing")]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crdt_value::prelude::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

type Fields = BTreeMap<String, String>;

#[derive(Default)]
struct FieldRecorder(Fields);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

#[derive(Clone, Default)]
struct Recorded(Arc<Mutex<Vec<(Level, Fields)>>>);

impl<S: Subscriber> Layer<S> for Recorded {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldRecorder::default();
        event.record(&mut fields);
        self.0
            .lock()
            .unwrap()
            .push((*event.metadata().level(), fields.0));
    }
}

fn capture(f: impl FnOnce()) -> Vec<(Level, Fields)> {
    let recorded = Recorded::default();
    let subscriber = tracing_subscriber::registry().with(recorded.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = recorded.0.lock().unwrap().clone();
    events
}

#[test]
fn counter_mismatch_emits_debug_event() {
    let events = capture(|| {
        let _ = Counter::from_value(Value::Scalar(ScalarValue::Boolean(true)));
    });

    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::DEBUG);
    assert_eq!(fields.get("expected").map(String::as_str), Some("counter"));
    assert_eq!(fields.get("found").map(String::as_str), Some("Boolean(true)"));
}

#[test]
fn successful_conversion_is_silent() {
    let events = capture(|| {
        let _ = Counter::from_value(Counter::new(3).to_value());
        let _ = Timestamp::from_value(Timestamp::from_millis(3).to_value());
    });
    assert!(events.is_empty());
}

#[test]
fn sibling_mismatches_name_their_expected_kind() {
    let events = capture(|| {
        let _ = bool::from_scalar_value(ScalarValue::Null);
        let _ = Timestamp::from_scalar_value(ScalarValue::Int(1));
    });

    let expected: Vec<_> = events
        .iter()
        .filter_map(|(_, fields)| fields.get("expected").cloned())
        .collect();
    assert_eq!(expected, ["boolean", "timestamp"]);
    assert_eq!(events[1].1.get("found").map(String::as_str), Some("Int(1)"));
}
