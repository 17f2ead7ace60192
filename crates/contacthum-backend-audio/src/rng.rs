//! Deterministic RNG using PCG32.
//!
//! All randomness in the audio backend flows through this module. Each
//! synthesis call constructs its own generator from [`CONTACT_SEED`]; no
//! generator is ever shared between calls.
//!
//! Draw order per call is fixed: `N` uniform samples for the contact noise,
//! then `N` standard-normal samples for the sparks. Each normal sample
//! consumes exactly two uniform draws.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Seed used for every synthesis call.
pub const CONTACT_SEED: u32 = 99;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates the generator for one synthesis call.
pub fn create_contact_rng() -> Pcg32 {
    create_rng(CONTACT_SEED)
}

/// Draws `n` samples uniformly distributed on `[0, 1)`.
pub fn uniform_samples(rng: &mut Pcg32, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

/// Draws one standard-normal sample with the Box-Muller transform.
pub fn standard_normal(rng: &mut Pcg32) -> f64 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    // ln(0) is undefined
    let u1 = if u1 > 0.0 { u1 } else { f64::MIN_POSITIVE };
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Draws `n` standard-normal samples.
pub fn standard_normal_samples(rng: &mut Pcg32, n: usize) -> Vec<f64> {
    (0..n).map(|_| standard_normal(rng)).collect()
}
