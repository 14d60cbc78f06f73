// JSON entry points around the decoder
// The bridge hands patterns over as JSON text or an already-parsed
// value; both funnel into the same decode pass

use serde_json::Value;

use crate::pattern::decoder::{DecodeError, decode};
use crate::pattern::types::HapticPattern;

/// Decode a pattern from JSON text
pub fn decode_json_str(json_data: &str) -> Result<HapticPattern, DecodeError> {
    let value: Value = serde_json::from_str(json_data)?;
    decode_json_value(&value)
}

/// Decode a pattern from an already-parsed JSON value
pub fn decode_json_value(value: &Value) -> Result<HapticPattern, DecodeError> {
    let record = value.as_object().ok_or(DecodeError::NotARecord)?;
    decode(record)
}

/// Serialize a decoded pattern back to JSON, for logs and snapshots
pub fn pattern_to_json(pattern: &HapticPattern) -> Result<String, DecodeError> {
    Ok(serde_json::to_string_pretty(pattern)?)
}
