// Typed haptic pattern entities
// Immutable value objects built once by the decoder and then owned by
// the caller; nothing here is mutated after construction

use serde::Serialize;

use crate::pattern::tags::{CurveParameterId, EventParameterId, EventType};

/// A single (time, value) sample on a parameter curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPoint {
    /// Offset from the curve's relative time, in seconds
    pub time: f64,
    pub value: f32,
}

impl ControlPoint {
    pub fn new(time: f64, value: f32) -> Self {
        Self { time, value }
    }
}

/// One typed parameter attached to a haptic event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventParameter {
    pub parameter_id: EventParameterId,
    pub value: f32,
}

impl EventParameter {
    pub fn new(parameter_id: EventParameterId, value: f32) -> Self {
        Self {
            parameter_id,
            value,
        }
    }
}

/// A discrete haptic occurrence
///
/// Timing fields are kept as decoded. Negative times are tolerated at
/// this layer; numeric sanity is the playback engine's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HapticEvent {
    pub event_type: EventType,
    /// Parameters in input order; may be empty if every element was dropped
    pub parameters: Vec<EventParameter>,
    /// Offset from pattern start, in seconds
    pub relative_time: f64,
    /// Event duration, in seconds
    pub duration: f64,
}

impl HapticEvent {
    pub fn new(
        event_type: EventType,
        parameters: Vec<EventParameter>,
        relative_time: f64,
        duration: f64,
    ) -> Self {
        Self {
            event_type,
            parameters,
            relative_time,
            duration,
        }
    }
}

/// Continuous modulation of one dynamic parameter over time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterCurve {
    pub parameter_id: CurveParameterId,
    /// Offset from pattern start, in seconds
    pub relative_time: f64,
    /// Control points in input order; legally empty
    pub control_points: Vec<ControlPoint>,
}

impl ParameterCurve {
    pub fn new(
        parameter_id: CurveParameterId,
        relative_time: f64,
        control_points: Vec<ControlPoint>,
    ) -> Self {
        Self {
            parameter_id,
            relative_time,
            control_points,
        }
    }
}

/// The complete validated haptic sequence handed to the playback engine
///
/// Event and curve order is playback order and is preserved from the
/// input record. The decoder never constructs a pattern with zero
/// events and zero curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HapticPattern {
    events: Vec<HapticEvent>,
    curves: Vec<ParameterCurve>,
}

impl HapticPattern {
    pub fn new(events: Vec<HapticEvent>, curves: Vec<ParameterCurve>) -> Self {
        Self { events, curves }
    }

    /// All events, in playback order
    pub fn events(&self) -> &[HapticEvent] {
        &self.events
    }

    /// All parameter curves, in playback order
    pub fn curves(&self) -> &[ParameterCurve] {
        &self.curves
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.curves.is_empty()
    }
}
