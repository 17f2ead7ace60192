//! Documented ranges for the user-adjustable controls.
//!
//! These are the ranges a parameter source is expected to offer. The
//! synthesizer accepts values outside them; validation only warns.

/// Reference sample rate in Hz. Every preset uses it.
pub const REFERENCE_SAMPLE_RATE: u32 = 44100;

/// Highest sample rate whose 16-bit mono byte rate fits in a `u32`.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / 2;

/// Inclusive range and default for one control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    /// Field name as it appears in JSON.
    pub name: &'static str,
    /// Minimum offered value (inclusive).
    pub min: f64,
    /// Maximum offered value (inclusive).
    pub max: f64,
    /// Default value.
    pub default: f64,
}

impl ControlRange {
    /// Returns true if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Tape length in seconds.
pub const DURATION: ControlRange = ControlRange {
    name: "duration_seconds",
    min: 1.0,
    max: 10.0,
    default: 3.0,
};

/// Connection integrity (gate threshold).
pub const GATE_THRESHOLD: ControlRange = ControlRange {
    name: "gate_threshold",
    min: 0.1,
    max: 0.9,
    default: 0.6,
};

/// Hand movement speed (moving-average window in samples).
pub const SMOOTHING_WINDOW: ControlRange = ControlRange {
    name: "smoothing_window",
    min: 50.0,
    max: 2000.0,
    default: 500.0,
};

/// Arcing volume.
pub const SPARK_GAIN: ControlRange = ControlRange {
    name: "spark_gain",
    min: 0.0,
    max: 200.0,
    default: 50.0,
};

/// Mains hum volume.
pub const HUM_GAIN: ControlRange = ControlRange {
    name: "hum_gain",
    min: 0.0,
    max: 1.0,
    default: 0.5,
};

/// All controls in display order.
pub const CONTROLS: [ControlRange; 5] = [
    DURATION,
    GATE_THRESHOLD,
    SMOOTHING_WINDOW,
    SPARK_GAIN,
    HUM_GAIN,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_lie_within_ranges() {
        for control in CONTROLS {
            assert!(
                control.contains(control.default),
                "{} default out of range",
                control.name
            );
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        assert!(GATE_THRESHOLD.contains(0.1));
        assert!(GATE_THRESHOLD.contains(0.9));
        assert!(!GATE_THRESHOLD.contains(0.95));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(SPARK_GAIN.clamp(-3.0), 0.0);
        assert_eq!(SMOOTHING_WINDOW.clamp(5000.0), 2000.0);
        assert_eq!(HUM_GAIN.clamp(0.25), 0.25);
    }
}
