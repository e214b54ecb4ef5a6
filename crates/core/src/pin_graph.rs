//! Pin graph module - which pins hold up which
//!
//! A pin's supporters are the pins in front of it; while a supporter is
//! still standing, the pin behind it is harder to knock down. The graph is
//! validated once at construction (range, duplicates, fan-in, acyclicity) and
//! carries a precomputed evaluation order in which every supporter comes
//! before the pins it supports.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::types::{GraphError, MAX_SUPPORTS, PIN_COUNT};

/// Supporter lists of the standard ten-pin triangle, indexed by pin.
pub const STANDARD_SUPPORTS: [&[usize]; PIN_COUNT] = [
    &[],
    &[0],
    &[0],
    &[1],
    &[2],
    &[1, 2, 3, 4],
    &[3],
    &[4],
    &[3, 5, 6],
    &[4, 5, 7, 8],
];

/// Validated, immutable dependency graph over the ten pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinGraph {
    supports: [ArrayVec<u8, MAX_SUPPORTS>; PIN_COUNT],
    /// Longest supporter chain below each pin (the head pin is layer 0).
    layers: [u8; PIN_COUNT],
    /// Topological evaluation order.
    order: [u8; PIN_COUNT],
}

impl PinGraph {
    /// Build and validate a graph from per-pin supporter lists.
    pub fn new(supports: [&[usize]; PIN_COUNT]) -> Result<Self, GraphError> {
        let mut lists: [ArrayVec<u8, MAX_SUPPORTS>; PIN_COUNT] = Default::default();

        for (pin, list) in supports.iter().enumerate() {
            if list.len() > MAX_SUPPORTS {
                return Err(GraphError::TooManySupports {
                    pin,
                    count: list.len(),
                });
            }
            for &supporter in list.iter() {
                if supporter >= PIN_COUNT {
                    return Err(GraphError::OutOfRange { pin, supporter });
                }
                if supporter == pin {
                    return Err(GraphError::SelfSupport { pin });
                }
                if lists[pin].contains(&(supporter as u8)) {
                    return Err(GraphError::DuplicateSupport { pin, supporter });
                }
                lists[pin].push(supporter as u8);
            }
        }

        let (order, layers) = topological_order(&lists)?;

        Ok(Self {
            supports: lists,
            layers,
            order,
        })
    }

    /// The fixed ten-pin triangle.
    pub fn standard() -> &'static PinGraph {
        static STANDARD: OnceLock<PinGraph> = OnceLock::new();
        STANDARD.get_or_init(|| {
            PinGraph::new(STANDARD_SUPPORTS).expect("standard pin graph is a valid DAG")
        })
    }

    /// Supporters of `pin`.
    pub fn supports(&self, pin: usize) -> &[u8] {
        &self.supports[pin]
    }

    pub fn layer(&self, pin: usize) -> u8 {
        self.layers[pin]
    }

    /// Pins in evaluation order; each pin appears after all of its supporters.
    pub fn order(&self) -> &[u8; PIN_COUNT] {
        &self.order
    }
}

/// Kahn's algorithm, always releasing the lowest-numbered ready pin first so
/// that a graph already numbered in dependency order evaluates as 0..9.
fn topological_order(
    supports: &[ArrayVec<u8, MAX_SUPPORTS>; PIN_COUNT],
) -> Result<([u8; PIN_COUNT], [u8; PIN_COUNT]), GraphError> {
    let mut pending = [0usize; PIN_COUNT];
    for (pin, list) in supports.iter().enumerate() {
        pending[pin] = list.len();
    }

    let mut placed = [false; PIN_COUNT];
    let mut order = [0u8; PIN_COUNT];
    let mut layers = [0u8; PIN_COUNT];

    for slot in order.iter_mut() {
        let Some(next) = (0..PIN_COUNT).find(|&pin| !placed[pin] && pending[pin] == 0) else {
            let stuck = (0..PIN_COUNT).find(|&pin| !placed[pin]).unwrap_or(0);
            return Err(GraphError::Cycle { pin: stuck });
        };

        placed[next] = true;
        *slot = next as u8;
        layers[next] = supports[next]
            .iter()
            .map(|&s| layers[s as usize] + 1)
            .max()
            .unwrap_or(0);

        for (pin, list) in supports.iter().enumerate() {
            if list.contains(&(next as u8)) {
                pending[pin] -= 1;
            }
        }
    }

    Ok((order, layers))
}
