//! Shared test helpers.

#![allow(dead_code)]

use bowling_sim::core::UniformSource;

/// Draw that knocks down any pin it is offered.
pub const HIT: f64 = 0.0;
/// Draw that no pin can fall to.
pub const MISS: f64 = 0.9;

/// Replays a fixed list of draws, then `fallback` forever.
pub struct Scripted {
    values: Vec<f64>,
    pos: usize,
    fallback: f64,
}

impl Scripted {
    pub fn new(values: Vec<f64>, fallback: f64) -> Self {
        Self {
            values,
            pos: 0,
            fallback,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl UniformSource for Scripted {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values.get(self.pos).copied().unwrap_or(self.fallback);
        self.pos += 1;
        v
    }
}

pub fn repeat(value: f64, n: usize) -> Vec<f64> {
    vec![value; n]
}

/// Draws for a gutter frame (two full misses).
pub fn gutter_frame() -> Vec<f64> {
    repeat(MISS, 20)
}

/// First roll downs pins 0..=6, second roll downs 7 and 8: "7 2".
pub fn seven_two_frame() -> Vec<f64> {
    let mut v = repeat(HIT, 7);
    v.extend(repeat(MISS, 3));
    v.extend([HIT, HIT, MISS]);
    v
}

/// First roll downs pins 0..=5, second roll clears the rest: "6 /".
pub fn six_spare_frame() -> Vec<f64> {
    let mut v = repeat(HIT, 6);
    v.extend(repeat(MISS, 4));
    v.extend(repeat(HIT, 4));
    v
}

pub fn strike_frame() -> Vec<f64> {
    repeat(HIT, 10)
}

pub const ALL_DOWN: &str = "x x x x\n x x x\n  x x\n   x\n";
pub const ALL_STANDING: &str = "o o o o\n o o o\n  o o\n   o\n";
