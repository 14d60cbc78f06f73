// Tag sets for haptic events and parameters
// Each set is closed but carries an Unrecognized variant so that raw
// values added by newer platform versions survive decoding untouched

use serde::Serialize;

/// Kind of a discrete haptic event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventType {
    HapticTransient,
    HapticContinuous,
    AudioContinuous,
    AudioCustom,
    /// Raw value not in the known set, preserved verbatim
    Unrecognized(String),
}

impl EventType {
    /// Map a raw string to an event type. Total: unknown strings become
    /// `Unrecognized` rather than failing.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "hapticTransient" => EventType::HapticTransient,
            "hapticContinuous" => EventType::HapticContinuous,
            "audioContinuous" => EventType::AudioContinuous,
            "audioCustom" => EventType::AudioCustom,
            _ => EventType::Unrecognized(raw.to_string()),
        }
    }

    /// Raw string form of this tag
    pub fn raw_value(&self) -> &str {
        match self {
            EventType::HapticTransient => "hapticTransient",
            EventType::HapticContinuous => "hapticContinuous",
            EventType::AudioContinuous => "audioContinuous",
            EventType::AudioCustom => "audioCustom",
            EventType::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}

/// Parameter attached to a single haptic event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventParameterId {
    HapticIntensity,
    HapticSharpness,
    AttackTime,
    DecayTime,
    ReleaseTime,
    Sustained,
    AudioVolume,
    AudioPitch,
    AudioPan,
    AudioBrightness,
    /// Raw value not in the known set, preserved verbatim
    Unrecognized(String),
}

impl EventParameterId {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "hapticIntensity" => EventParameterId::HapticIntensity,
            "hapticSharpness" => EventParameterId::HapticSharpness,
            "attackTime" => EventParameterId::AttackTime,
            "decayTime" => EventParameterId::DecayTime,
            "releaseTime" => EventParameterId::ReleaseTime,
            "sustained" => EventParameterId::Sustained,
            "audioVolume" => EventParameterId::AudioVolume,
            "audioPitch" => EventParameterId::AudioPitch,
            "audioPan" => EventParameterId::AudioPan,
            "audioBrightness" => EventParameterId::AudioBrightness,
            _ => EventParameterId::Unrecognized(raw.to_string()),
        }
    }

    pub fn raw_value(&self) -> &str {
        match self {
            EventParameterId::HapticIntensity => "hapticIntensity",
            EventParameterId::HapticSharpness => "hapticSharpness",
            EventParameterId::AttackTime => "attackTime",
            EventParameterId::DecayTime => "decayTime",
            EventParameterId::ReleaseTime => "releaseTime",
            EventParameterId::Sustained => "sustained",
            EventParameterId::AudioVolume => "audioVolume",
            EventParameterId::AudioPitch => "audioPitch",
            EventParameterId::AudioPan => "audioPan",
            EventParameterId::AudioBrightness => "audioBrightness",
            EventParameterId::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for EventParameterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}

/// Parameter modulated by a curve over time
///
/// The platform keeps dynamic (curve-driven) parameters as a separate
/// set from per-event parameters, so we do too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CurveParameterId {
    HapticIntensityControl,
    HapticSharpnessControl,
    HapticAttackTimeControl,
    HapticDecayTimeControl,
    HapticReleaseTimeControl,
    AudioVolumeControl,
    AudioPanControl,
    AudioBrightnessControl,
    AudioPitchControl,
    AudioAttackTimeControl,
    AudioDecayTimeControl,
    AudioReleaseTimeControl,
    /// Raw value not in the known set, preserved verbatim
    Unrecognized(String),
}

impl CurveParameterId {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "hapticIntensityControl" => CurveParameterId::HapticIntensityControl,
            "hapticSharpnessControl" => CurveParameterId::HapticSharpnessControl,
            "hapticAttackTimeControl" => CurveParameterId::HapticAttackTimeControl,
            "hapticDecayTimeControl" => CurveParameterId::HapticDecayTimeControl,
            "hapticReleaseTimeControl" => CurveParameterId::HapticReleaseTimeControl,
            "audioVolumeControl" => CurveParameterId::AudioVolumeControl,
            "audioPanControl" => CurveParameterId::AudioPanControl,
            "audioBrightnessControl" => CurveParameterId::AudioBrightnessControl,
            "audioPitchControl" => CurveParameterId::AudioPitchControl,
            "audioAttackTimeControl" => CurveParameterId::AudioAttackTimeControl,
            "audioDecayTimeControl" => CurveParameterId::AudioDecayTimeControl,
            "audioReleaseTimeControl" => CurveParameterId::AudioReleaseTimeControl,
            _ => CurveParameterId::Unrecognized(raw.to_string()),
        }
    }

    pub fn raw_value(&self) -> &str {
        match self {
            CurveParameterId::HapticIntensityControl => "hapticIntensityControl",
            CurveParameterId::HapticSharpnessControl => "hapticSharpnessControl",
            CurveParameterId::HapticAttackTimeControl => "hapticAttackTimeControl",
            CurveParameterId::HapticDecayTimeControl => "hapticDecayTimeControl",
            CurveParameterId::HapticReleaseTimeControl => "hapticReleaseTimeControl",
            CurveParameterId::AudioVolumeControl => "audioVolumeControl",
            CurveParameterId::AudioPanControl => "audioPanControl",
            CurveParameterId::AudioBrightnessControl => "audioBrightnessControl",
            CurveParameterId::AudioPitchControl => "audioPitchControl",
            CurveParameterId::AudioAttackTimeControl => "audioAttackTimeControl",
            CurveParameterId::AudioDecayTimeControl => "audioDecayTimeControl",
            CurveParameterId::AudioReleaseTimeControl => "audioReleaseTimeControl",
            CurveParameterId::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for CurveParameterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}
