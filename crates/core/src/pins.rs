//! Pins module - one rack of pins and the knockdown model
//!
//! A [`PinSet`] is a fresh rack bound to a [`PinGraph`]. Each roll attempts
//! to knock every pin in the graph's evaluation order, so a supporter that
//! falls earlier in the same roll already counts as down for the pins behind
//! it. Pins never stand back up within a rack.

use crate::pin_graph::PinGraph;
use crate::rng::UniformSource;
use crate::types::{downed_count, PinStates, PIN_COUNT, SKILL, SUPPORT_PENALTY};

/// A single pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pin {
    downed: bool,
}

impl Pin {
    pub fn is_downed(&self) -> bool {
        self.downed
    }

    /// Knockdown probability given how many of the pin's supporters are
    /// still standing: `SKILL / 3^n`.
    pub fn knock_probability(standing_supporters: usize) -> f64 {
        (0..standing_supporters).fold(SKILL, |p, _| p / SUPPORT_PENALTY)
    }

    /// Attempt to knock the pin down. Returns whether it is down afterwards.
    ///
    /// An already-downed pin reports `true` without drawing from `rng`.
    pub fn knock<R>(&mut self, standing_supporters: usize, rng: &mut R) -> bool
    where
        R: UniformSource + ?Sized,
    {
        if self.downed {
            return true;
        }
        if rng.next_uniform() < Self::knock_probability(standing_supporters) {
            self.downed = true;
        }
        self.downed
    }
}

/// Ten pins sharing one dependency graph.
#[derive(Debug, Clone)]
pub struct PinSet<'g> {
    graph: &'g PinGraph,
    pins: [Pin; PIN_COUNT],
}

impl<'g> PinSet<'g> {
    /// A full rack, all pins standing.
    pub fn new(graph: &'g PinGraph) -> Self {
        Self {
            graph,
            pins: [Pin::default(); PIN_COUNT],
        }
    }

    /// Rack on the standard triangle.
    pub fn standard() -> PinSet<'static> {
        PinSet::new(PinGraph::standard())
    }

    pub fn graph(&self) -> &'g PinGraph {
        self.graph
    }

    pub fn pin(&self, index: usize) -> Option<&Pin> {
        self.pins.get(index)
    }

    pub fn is_downed(&self, index: usize) -> bool {
        self.pins.get(index).is_some_and(Pin::is_downed)
    }

    /// Supporters of `index` that are still standing right now.
    pub fn standing_supporters(&self, index: usize) -> usize {
        self.graph
            .supports(index)
            .iter()
            .filter(|&&s| !self.pins[s as usize].downed)
            .count()
    }

    /// Roll once: try every pin in evaluation order and report the
    /// cumulative downed state, indexed by pin number.
    pub fn roll<R>(&mut self, rng: &mut R) -> PinStates
    where
        R: UniformSource + ?Sized,
    {
        for &pin in self.graph.order() {
            let pin = pin as usize;
            let standing = self.standing_supporters(pin);
            self.pins[pin].knock(standing, rng);
        }
        self.states()
    }

    pub fn states(&self) -> PinStates {
        let mut out = [false; PIN_COUNT];
        for (slot, pin) in out.iter_mut().zip(self.pins.iter()) {
            *slot = pin.downed;
        }
        out
    }

    pub fn downed_count(&self) -> u8 {
        downed_count(&self.states())
    }
}

/// Display rows, back row first, as pin indices.
pub const DISPLAY_ROWS: [&[usize]; 4] = [&[6, 8, 9, 7], &[3, 5, 4], &[1, 2], &[0]];

/// Render a roll as the four-row pin diagram: `x` is down, `o` is standing.
///
/// ```
/// use bowling_sim_core::render_pins;
///
/// assert_eq!(render_pins(&[false; 10]), "o o o o\n o o o\n  o o\n   o\n");
/// ```
pub fn render_pins(states: &PinStates) -> String {
    let mut out = String::with_capacity(32);
    for (indent, row) in DISPLAY_ROWS.iter().enumerate() {
        for _ in 0..indent {
            out.push(' ');
        }
        for (i, &pin) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if states[pin] { 'x' } else { 'o' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ConstantSource, SimpleRng};

    /// Replays a fixed cycle of draws.
    struct Scripted {
        values: Vec<f64>,
        draws: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                draws: 0,
            }
        }
    }

    impl UniformSource for Scripted {
        fn next_uniform(&mut self) -> f64 {
            let v = self.values[self.draws % self.values.len()];
            self.draws += 1;
            v
        }
    }

    #[test]
    fn test_knock_probability() {
        assert_eq!(Pin::knock_probability(0), 0.8);
        assert!((Pin::knock_probability(1) - 0.8 / 3.0).abs() < 1e-12);
        assert!((Pin::knock_probability(4) - 0.8 / 81.0).abs() < 1e-12);
    }

    #[test]
    fn test_knock_threshold() {
        // Just below 0.8 succeeds, exactly 0.8 does not.
        let mut pin = Pin::default();
        assert!(!pin.knock(0, &mut ConstantSource(0.8)));
        assert!(pin.knock(0, &mut ConstantSource(0.799)));

        // One standing supporter: 0.3 is above 0.8/3.
        let mut pin = Pin::default();
        assert!(!pin.knock(1, &mut ConstantSource(0.3)));
        assert!(pin.knock(1, &mut ConstantSource(0.2)));
    }

    #[test]
    fn test_downed_pin_skips_draw() {
        let mut pin = Pin::default();
        let mut src = Scripted::new(&[0.0]);
        assert!(pin.knock(0, &mut src));
        assert!(pin.knock(3, &mut src));
        assert_eq!(src.draws, 1);
    }

    #[test]
    fn test_roll_all_succeed() {
        let mut set = PinSet::standard();
        let states = set.roll(&mut ConstantSource(0.0));
        assert_eq!(states, [true; PIN_COUNT]);
        assert_eq!(set.downed_count(), 10);
    }

    #[test]
    fn test_roll_all_fail() {
        let mut set = PinSet::standard();
        let states = set.roll(&mut ConstantSource(0.9));
        assert_eq!(states, [false; PIN_COUNT]);
    }

    #[test]
    fn test_same_roll_supporters_count_as_down() {
        // 0.5 beats 0.8 but not 0.8/3: only pins whose supporters all fell
        // earlier in this very roll go down, which is the whole rack.
        let mut set = PinSet::standard();
        let states = set.roll(&mut ConstantSource(0.5));
        assert_eq!(states, [true; PIN_COUNT]);
    }

    #[test]
    fn test_standing_head_pin_shields_rack() {
        let mut set = PinSet::standard();
        let mut src = Scripted::new(&[0.9, 0.5, 0.1]);
        let states = set.roll(&mut src);
        assert!(!states[0]);
        // Pin 1 drew 0.5 against 0.8/3 and stays up.
        assert!(!states[1]);
        // Pin 2 drew 0.1 against 0.8/3 and falls.
        assert!(states[2]);
        assert_eq!(src.draws, PIN_COUNT);
    }

    #[test]
    fn test_second_roll_is_monotonic() {
        let mut rng = SimpleRng::new(2024);
        for _ in 0..200 {
            let mut set = PinSet::standard();
            let first = set.roll(&mut rng);
            let second = set.roll(&mut rng);
            for i in 0..PIN_COUNT {
                if first[i] {
                    assert!(second[i]);
                }
            }
            assert!(downed_count(&second) >= downed_count(&first));
        }
    }

    #[test]
    fn test_render_all_standing() {
        assert_eq!(
            render_pins(&[false; PIN_COUNT]),
            "o o o o\n o o o\n  o o\n   o\n"
        );
    }

    #[test]
    fn test_render_layout() {
        let mut states = [false; PIN_COUNT];
        states[0] = true;
        states[7] = true;
        states[5] = true;
        assert_eq!(render_pins(&states), "o o o x\n o x o\n  o o\n   x\n");
        assert_eq!(
            render_pins(&[true; PIN_COUNT]),
            "x x x x\n x x x\n  x x\n   x\n"
        );
    }
}
