//! Robustness tests for the pattern decoder
//!
//! Feeds malformed, adversarial, and randomly generated records to the
//! decoder to ensure it never panics and honors the per-element skip
//! policy.

use haptic_patterns::{DecodeError, decode_json_str, decode_json_value};
use rand::Rng;
use serde_json::{Value, json};

/// Build a random JSON value, at most `depth` levels deep
fn random_value<R: Rng>(rng: &mut R, depth: u32) -> Value {
    let choices = if depth == 0 { 4 } else { 6 };
    match rng.gen_range(0..choices) {
        0 => Value::Null,
        1 => json!(rng.r#gen::<bool>()),
        2 => json!(rng.gen_range(-1000.0..1000.0)),
        3 => json!(format!("s{}", rng.gen_range(0..100))),
        4 => {
            let len = rng.gen_range(0..4);
            Value::Array((0..len).map(|_| random_value(rng, depth - 1)).collect())
        }
        _ => {
            let keys = [
                "hapticEvents",
                "parameterCurves",
                "eventType",
                "parameters",
                "parameterID",
                "rawValue",
                "relativeTime",
                "duration",
                "controlPoints",
                "time",
                "value",
            ];
            let len = rng.gen_range(0..4);
            let map = (0..len)
                .map(|_| {
                    let key = keys[rng.gen_range(0..keys.len())].to_string();
                    (key, random_value(rng, depth - 1))
                })
                .collect();
            Value::Object(map)
        }
    }
}

/// Fuzz the decoder with random nested values
#[test]
fn fuzz_decoder_random_records() {
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let value = random_value(&mut rng, 4);
        // Should not panic, whatever the shape
        let _ = decode_json_value(&value);
    }
}

/// Fuzz the decoder with a valid skeleton and random field values
#[test]
fn fuzz_decoder_mutated_events() {
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let value = json!({
            "hapticEvents": [{
                "eventType": { "rawValue": random_value(&mut rng, 1) },
                "parameters": random_value(&mut rng, 2),
                "relativeTime": random_value(&mut rng, 1),
                "duration": random_value(&mut rng, 1)
            }],
            "parameterCurves": random_value(&mut rng, 3)
        });

        // Decode either succeeds or fails cleanly; a success must
        // contain at least one event or curve
        if let Ok(pattern) = decode_json_value(&value) {
            assert!(!pattern.is_empty());
        }
    }
}

/// Malformed JSON text fails cleanly
#[test]
fn test_garbage_text_inputs() {
    let inputs = [
        "",
        "null",
        "42",
        "\"hapticEvents\"",
        "[]",
        "{",
        "{}",
        "{\"hapticEvents\": null}",
        "{\"hapticEvents\": {}}",
    ];

    for input in inputs {
        assert!(decode_json_str(input).is_err(), "input {:?}", input);
    }
}

/// Deeply nested input decodes without blowing the stack
#[test]
fn test_deeply_nested_garbage_in_optional_field() {
    let mut nested = json!(1.0);
    for _ in 0..64 {
        nested = json!([nested]);
    }

    let value = json!({
        "hapticEvents": [{
            "eventType": { "rawValue": "hapticTransient" },
            "parameters": [],
            "relativeTime": 0.0,
            "duration": 0.1
        }],
        "parameterCurves": nested
    });

    // The malformed curve list is treated as empty; events survive
    let pattern = decode_json_value(&value).unwrap();
    assert_eq!(pattern.event_count(), 1);
    assert_eq!(pattern.curve_count(), 0);
}

/// A large mixed input keeps exactly the valid elements, in order
#[test]
fn test_large_mixed_input() {
    let mut events = Vec::new();
    for i in 0..100 {
        if i % 10 == 3 {
            // Every tenth-ish event is broken
            events.push(json!({
                "eventType": { "rawValue": "hapticTransient" },
                "parameters": [],
                "relativeTime": i as f64
            }));
        } else {
            events.push(json!({
                "eventType": { "rawValue": "hapticTransient" },
                "parameters": [],
                "relativeTime": i as f64,
                "duration": 0.1
            }));
        }
    }

    let value = json!({ "hapticEvents": events });
    let pattern = decode_json_value(&value).unwrap();

    assert_eq!(pattern.event_count(), 90);
    for window in pattern.events().windows(2) {
        assert!(window[0].relative_time < window[1].relative_time);
    }
}

/// Extreme numeric values pass through unclamped
#[test]
fn test_extreme_numeric_values() {
    let value = json!({
        "hapticEvents": [{
            "eventType": { "rawValue": "hapticContinuous" },
            "parameters": [
                { "parameterID": { "rawValue": "hapticIntensity" }, "value": 1.0e30 }
            ],
            "relativeTime": -1.0e9,
            "duration": 1.0e9
        }]
    });

    let pattern = decode_json_value(&value).unwrap();
    let event = &pattern.events()[0];
    assert_eq!(event.relative_time, -1.0e9);
    assert_eq!(event.duration, 1.0e9);
    assert!(event.parameters[0].value.is_finite());
}

/// Fatal failures carry the right variant
#[test]
fn test_failure_variants() {
    assert!(matches!(
        decode_json_str("{\"parameterCurves\": []}"),
        Err(DecodeError::MissingEvents)
    ));
    assert!(matches!(
        decode_json_str("{\"hapticEvents\": []}"),
        Err(DecodeError::EmptyPattern)
    ));
    assert!(matches!(
        decode_json_str("3.5"),
        Err(DecodeError::NotARecord)
    ));
}
