// Typed field extraction over the untyped bridge record
// One small Option-returning helper per field shape, so decode steps
// compose lookups explicitly instead of scattering ad-hoc casts

use serde_json::{Map, Value};

/// Look up a nested record field
pub fn record<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key)?.as_object()
}

/// Look up a field that must be a sequence of records
///
/// Returns `None` if the key is absent, the value is not an array, or
/// any element is not a record. The all-or-nothing element check
/// matches the bridge contract: a list with a non-record element is a
/// malformed list, not a list with holes.
pub fn record_seq<'a>(
    map: &'a Map<String, Value>,
    key: &str,
) -> Option<Vec<&'a Map<String, Value>>> {
    map.get(key)?
        .as_array()?
        .iter()
        .map(Value::as_object)
        .collect()
}

/// Look up a string field
pub fn string<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)?.as_str()
}

/// Look up a numeric field, widening integers to f64
pub fn float(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key)?.as_f64()
}

/// Look up a numeric field narrowed to f32
pub fn float32(map: &Map<String, Value>, key: &str) -> Option<f32> {
    float(map, key).map(|value| value as f32)
}
