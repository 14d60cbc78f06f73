// Lenient pattern decoder
// Turns the untyped bridge record into a validated HapticPattern.
// Failure policy is two-level: a malformed event, parameter, curve, or
// control point is dropped from its containing sequence; only a
// missing event list or a fully-empty result fails the whole decode.

use serde_json::{Map, Value};

use crate::pattern::extract;
use crate::pattern::tags::{CurveParameterId, EventParameterId, EventType};
use crate::pattern::types::{
    ControlPoint, EventParameter, HapticEvent, HapticPattern, ParameterCurve,
};

/// The untyped record crossing the language boundary
pub type RawRecord = Map<String, Value>;

/// Field names used by the bridge record
mod key {
    pub const HAPTIC_EVENTS: &str = "hapticEvents";
    pub const PARAMETER_CURVES: &str = "parameterCurves";

    pub const EVENT_TYPE: &str = "eventType";
    pub const PARAMETERS: &str = "parameters";
    pub const RELATIVE_TIME: &str = "relativeTime";
    pub const DURATION: &str = "duration";

    pub const PARAMETER_ID: &str = "parameterID";
    pub const VALUE: &str = "value";

    pub const RAW_VALUE: &str = "rawValue";

    pub const CONTROL_POINTS: &str = "controlPoints";
    pub const TIME: &str = "time";
}

/// Decode error types
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing or malformed hapticEvents list")]
    MissingEvents,

    #[error("pattern contains no events and no curves")]
    EmptyPattern,

    #[error("top-level value is not a record")]
    NotARecord,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a raw bridge record into a validated pattern
///
/// The `hapticEvents` list is mandatory; `parameterCurves` is optional
/// and treated as empty when absent or malformed. Individual elements
/// that fail to decode are skipped. A pattern with nothing left after
/// filtering is a decode failure, never an empty value.
pub fn decode(raw: &RawRecord) -> Result<HapticPattern, DecodeError> {
    let raw_events =
        extract::record_seq(raw, key::HAPTIC_EVENTS).ok_or(DecodeError::MissingEvents)?;

    let events: Vec<HapticEvent> = raw_events
        .into_iter()
        .filter_map(|record| {
            let event = decode_event(record);
            if event.is_none() {
                tracing::debug!("skipping malformed haptic event record");
            }
            event
        })
        .collect();

    let curves: Vec<ParameterCurve> = match extract::record_seq(raw, key::PARAMETER_CURVES) {
        Some(raw_curves) => raw_curves
            .into_iter()
            .filter_map(|record| {
                let curve = decode_curve(record);
                if curve.is_none() {
                    tracing::debug!("skipping malformed parameter curve record");
                }
                curve
            })
            .collect(),
        None => Vec::new(),
    };

    if events.is_empty() && curves.is_empty() {
        return Err(DecodeError::EmptyPattern);
    }

    Ok(HapticPattern::new(events, curves))
}

/// Decode one raw event record; `None` means skip this event
fn decode_event(event: &RawRecord) -> Option<HapticEvent> {
    let event_type_raw = extract::record(event, key::EVENT_TYPE)
        .and_then(|record| extract::string(record, key::RAW_VALUE))?;
    let event_type = EventType::from_raw(event_type_raw);

    // The parameters list itself is mandatory; its elements are not.
    // An event whose parameters all drop out is still a valid event.
    let raw_parameters = extract::record_seq(event, key::PARAMETERS)?;
    let parameters: Vec<EventParameter> = raw_parameters
        .into_iter()
        .filter_map(decode_event_parameter)
        .collect();

    let relative_time = extract::float(event, key::RELATIVE_TIME)?;
    let duration = extract::float(event, key::DURATION)?;

    Some(HapticEvent::new(
        event_type,
        parameters,
        relative_time,
        duration,
    ))
}

/// Decode one event parameter; `None` means drop this parameter
fn decode_event_parameter(parameter: &RawRecord) -> Option<EventParameter> {
    let id_raw = extract::record(parameter, key::PARAMETER_ID)
        .and_then(|record| extract::string(record, key::RAW_VALUE))?;
    let value = extract::float32(parameter, key::VALUE)?;

    Some(EventParameter::new(
        EventParameterId::from_raw(id_raw),
        value,
    ))
}

/// Decode one raw curve record; `None` means skip this curve
fn decode_curve(curve: &RawRecord) -> Option<ParameterCurve> {
    let id_raw = extract::record(curve, key::PARAMETER_ID)
        .and_then(|record| extract::string(record, key::RAW_VALUE))?;
    let parameter_id = CurveParameterId::from_raw(id_raw);

    let relative_time = extract::float(curve, key::RELATIVE_TIME)?;

    // The control point list must be present and well-shaped, but it
    // may legally be empty and individual points may drop out
    let raw_points = extract::record_seq(curve, key::CONTROL_POINTS)?;
    let control_points: Vec<ControlPoint> = raw_points
        .into_iter()
        .filter_map(|point| {
            let time = extract::float(point, key::TIME);
            let value = extract::float32(point, key::VALUE);
            match (time, value) {
                (Some(time), Some(value)) => Some(ControlPoint::new(time, value)),
                _ => {
                    tracing::warn!("skipping control point with invalid types: {:?}", point);
                    None
                }
            }
        })
        .collect();

    Some(ParameterCurve::new(
        parameter_id,
        relative_time,
        control_points,
    ))
}
