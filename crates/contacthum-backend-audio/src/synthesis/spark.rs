//! Spark transients and the final mix.

/// Scales each normal sample by `friction[i] * gain`.
///
/// Sparks are concentrated where the contact changes quickly and vanish
/// where the envelope is flat.
pub fn spark_transients(normal: &[f64], friction: &[f64], gain: f64) -> Vec<f64> {
    normal
        .iter()
        .zip(friction)
        .map(|(&n, &f)| n * (f * gain))
        .collect()
}

/// Hard limiter onto `[-1, 1]`.
#[inline]
pub fn hard_clip(sample: f64) -> f64 {
    sample.clamp(-1.0, 1.0)
}

/// Gated hum plus sparks, hard clipped.
///
/// `out[i] = clip((mask[i] ? hum[i] : 0) + sparks[i])`.
pub fn mix(hum: &[f64], mask: &[bool], sparks: &[f64]) -> Vec<f64> {
    hum.iter()
        .zip(mask)
        .zip(sparks)
        .map(|((&h, &connected), &s)| {
            let carrier = if connected { h } else { 0.0 };
            hard_clip(carrier + s)
        })
        .collect()
}
