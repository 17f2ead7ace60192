//! Parameter validation.
//!
//! Only values that cannot produce a well-defined buffer are errors. A
//! control outside its documented range is a warning: the synthesizer
//! handles it by coercion.

use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::params::SynthesisParams;
use crate::ranges::{self, ControlRange, MAX_SAMPLE_RATE, REFERENCE_SAMPLE_RATE};

/// Validates a parameter set.
///
/// # Example
/// ```
/// use contacthum_spec::{validate_params, SynthesisParams, WarningCode};
///
/// let params = SynthesisParams::default().with_spark_gain(500.0);
/// let result = validate_params(&params);
/// assert!(result.is_ok());
/// assert!(result.has_warning(WarningCode::OutOfRange));
/// ```
pub fn validate_params(params: &SynthesisParams) -> ValidationResult {
    let mut result = ValidationResult::success();

    let reals = [
        (ranges::DURATION, params.duration_seconds),
        (ranges::GATE_THRESHOLD, params.gate_threshold),
        (ranges::SMOOTHING_WINDOW, params.smoothing_window),
        (ranges::SPARK_GAIN, params.spark_gain),
        (ranges::HUM_GAIN, params.hum_gain),
    ];

    let mut all_finite = true;
    for (control, value) in reals {
        if !value.is_finite() {
            all_finite = false;
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteParameter,
                format!("{} must be finite, got {}", control.name, value),
                control.name,
            ));
        }
    }

    if params.duration_seconds.is_finite() && params.duration_seconds <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonPositiveDuration,
            format!(
                "duration must be positive, got {}",
                params.duration_seconds
            ),
            ranges::DURATION.name,
        ));
    }

    if params.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroSampleRate,
            "sample rate must be at least 1 Hz",
            "sample_rate",
        ));
    } else if params.sample_rate > MAX_SAMPLE_RATE {
        result.add_error(ValidationError::with_path(
            ErrorCode::SampleRateTooHigh,
            format!(
                "sample rate {} Hz exceeds the maximum of {} Hz",
                params.sample_rate, MAX_SAMPLE_RATE
            ),
            "sample_rate",
        ));
    }

    if !all_finite {
        return result;
    }

    for (control, value) in reals {
        check_range(&mut result, &control, value);
    }

    if params.smoothing_window < 1.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::WindowCoerced,
            format!(
                "smoothing window {} is below 1 and will be treated as 1",
                params.smoothing_window
            ),
            ranges::SMOOTHING_WINDOW.name,
        ));
    }

    if result.is_ok() && params.num_samples() == 0 {
        result.add_warning(ValidationWarning::new(
            WarningCode::EmptyBuffer,
            format!(
                "{} s at {} Hz is shorter than one sample; the output will be empty",
                params.duration_seconds, params.sample_rate
            ),
        ));
    }

    if params.sample_rate != 0 && params.sample_rate != REFERENCE_SAMPLE_RATE {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NonReferenceSampleRate,
            format!(
                "sample rate {} Hz differs from the reference {} Hz",
                params.sample_rate, REFERENCE_SAMPLE_RATE
            ),
            "sample_rate",
        ));
    }

    result
}

fn check_range(result: &mut ValidationResult, control: &ControlRange, value: f64) {
    if !control.contains(value) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::OutOfRange,
            format!(
                "{} = {} is outside the documented range [{}, {}]",
                control.name, value, control.min, control.max
            ),
            control.name,
        ));
    }
}
