//! Random number generation for ray tracing.
//!
//! Provides thread-safe random number generation with ChaCha20 PRNG.
//! Includes specialized sampling functions for unit spheres, disks, and colors.

use glam::DVec3;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Reseed the calling thread's PRNG with a fixed seed.
///
/// Makes every subsequent sampling call on this thread deterministic,
/// which tests and reproducible renders rely on.
pub fn reseed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64()
}

/// Generate a random DVec3 with components in [min, max)
pub fn random_dvec3_range(min: f64, max: f64) -> DVec3 {
    DVec3::new(
        random_f64_range(min, max),
        random_f64_range(min, max),
        random_f64_range(min, max),
    )
}

/// Generate random unit vector uniformly distributed on the unit sphere.
///
/// Rejection sampling: draw from the [-1,1] cube and keep points inside the
/// unit ball. The lower bound on the squared length rejects samples so small
/// that normalizing them would underflow to a bogus direction.
pub fn random_unit_vector() -> DVec3 {
    loop {
        let p = random_dvec3_range(-1.0, 1.0);
        let len_sq = p.length_squared();
        if 1e-160 < len_sq && len_sq <= 1.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// Generate random point inside the unit disk (z = 0) using rejection sampling.
pub fn random_in_unit_disk() -> DVec3 {
    loop {
        let p = DVec3::new(
            random_f64_range(-1.0, 1.0),
            random_f64_range(-1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate random RGB color with components in [0.0, 1.0).
pub fn random_color() -> DVec3 {
    DVec3::new(random_f64(), random_f64(), random_f64())
}

/// Generate random RGB color with components in [min, max).
pub fn random_color_range(min: f64, max: f64) -> DVec3 {
    random_dvec3_range(min, max)
}
