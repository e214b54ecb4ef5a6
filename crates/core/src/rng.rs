//! RNG module - injectable uniform randomness for knock draws
//!
//! Every knockdown attempt draws one value in `[0, 1)` from a
//! [`UniformSource`]. Callers pass the source explicitly, so a game is fully
//! reproducible from its seed and tests can force every draw.
//!
//! Provided sources:
//! - [`SimpleRng`]: seedable LCG for deterministic runs
//! - [`ThreadSource`]: `rand`'s thread-local generator for unseeded play
//! - [`ConstantSource`]: returns the same value forever

use rand::rngs::ThreadRng;
use rand::Rng;

/// Source of uniform floats in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current generator state (feeding it back to `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl UniformSource for SimpleRng {
    fn next_uniform(&mut self) -> f64 {
        // 2^32 keeps the result strictly below 1.0
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Unseeded source backed by `rand::thread_rng`.
#[derive(Debug, Clone, Default)]
pub struct ThreadSource {
    rng: ThreadRng,
}

impl ThreadSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UniformSource for ThreadSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always yields the same value.
///
/// `ConstantSource(0.0)` makes every knock succeed; any value at or above
/// [`SKILL`](crate::types::SKILL) makes every knock fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource(pub f64);

impl UniformSource for ConstantSource {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}
