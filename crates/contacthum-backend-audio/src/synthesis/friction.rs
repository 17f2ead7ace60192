//! Friction signal: how fast the contact is changing.

/// Absolute first difference of `envelope` with an implicit leading zero.
///
/// `friction[0] = |envelope[0]|`, `friction[i] = |envelope[i] - envelope[i-1]|`.
pub fn friction(envelope: &[f64]) -> Vec<f64> {
    let mut previous = 0.0;
    envelope
        .iter()
        .map(|&current| {
            let delta = (current - previous).abs();
            previous = current;
            delta
        })
        .collect()
}
