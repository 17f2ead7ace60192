//! Connection gate.

/// `true` where the envelope is strictly above `threshold`.
pub fn connection_mask(envelope: &[f64], threshold: f64) -> Vec<bool> {
    envelope.iter().map(|&e| e > threshold).collect()
}

/// Number of samples where the envelope is strictly above `threshold`.
pub fn count_connected(envelope: &[f64], threshold: f64) -> usize {
    envelope.iter().filter(|&&e| e > threshold).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_greater() {
        let env = [0.2, 0.6, 0.61, 1.0];
        assert_eq!(connection_mask(&env, 0.6), vec![false, false, true, true]);
        assert_eq!(count_connected(&env, 0.6), 2);
    }

    #[test]
    fn test_extreme_thresholds() {
        let env = [0.0, 0.5, 1.0];
        assert_eq!(count_connected(&env, -1.0), 3);
        assert_eq!(count_connected(&env, 1.0), 0);
    }

    #[test]
    fn test_higher_threshold_never_connects_more() {
        let env: Vec<f64> = (0..500).map(|i| ((i * 7919) % 500) as f64 / 499.0).collect();
        let mut previous = usize::MAX;
        for step in 0..=20 {
            let count = count_connected(&env, step as f64 / 20.0);
            assert!(count <= previous);
            previous = count;
        }
    }
}
