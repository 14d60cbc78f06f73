// Haptic pattern domain
// Typed entities plus the lenient decoder that builds them from the
// untyped record handed over by the cross-language bridge

pub mod decoder;
pub mod extract;
pub mod serialization;
pub mod tags;
pub mod types;

pub use decoder::{DecodeError, RawRecord, decode};
pub use serialization::{decode_json_str, decode_json_value, pattern_to_json};
pub use tags::{CurveParameterId, EventParameterId, EventType};
pub use types::{ControlPoint, EventParameter, HapticEvent, HapticPattern, ParameterCurve};
