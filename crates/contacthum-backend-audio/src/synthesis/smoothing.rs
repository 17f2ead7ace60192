//! Centered moving average with a same-length output.
//!
//! Output sample `i` averages the input over
//! `[i - floor(w/2), i + ceil(w/2))`, clipped to the buffer. At the edges the
//! window is truncated and the sum is divided by the number of covered
//! samples, so constant input stays constant all the way to the boundary.

/// Smooths `input` with a moving average of width `window`.
///
/// A window of 0 or 1 returns the input unchanged.
pub fn moving_average(input: &[f64], window: usize) -> Vec<f64> {
    let n = input.len();
    if window <= 1 || n == 0 {
        return input.to_vec();
    }

    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    let mut running = 0.0;
    for &x in input {
        running += x;
        prefix.push(running);
    }

    let before = window / 2;
    let after = window - before;

    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(before);
            let hi = (i + after).min(n);
            (prefix[hi] - prefix[lo]) / (hi - lo) as f64
        })
        .collect()
}
