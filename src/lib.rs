// Haptic pattern decoding - library exports

pub mod pattern;

// Re-export commonly used types for convenience
pub use pattern::decoder::{DecodeError, RawRecord, decode};
pub use pattern::serialization::{decode_json_str, decode_json_value, pattern_to_json};
pub use pattern::tags::{CurveParameterId, EventParameterId, EventType};
pub use pattern::types::{
    ControlPoint, EventParameter, HapticEvent, HapticPattern, ParameterCurve,
};
