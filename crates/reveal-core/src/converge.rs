//! Per-frame smoothing of displayed parameters toward a moving target.
//!
//! The engine owns `current` and never sees `target` except by shared
//! reference, one tick at a time. Each tick moves every field a fixed
//! fraction of its remaining distance, so the approach decelerates and never
//! crosses the target. The host drives ticks from its frame scheduler and
//! stops re-arming once a tick reports [`Tick::Settled`].

use crate::constants::{BASE_RATE, REVEAL_RATE_MULTIPLIER, SETTLE_TOLERANCE};
use crate::easing::lerp;
use crate::params::{Field, ParameterSet, RateClass};

/// Receives the displayed parameters after every tick.
pub trait OutputSink {
    fn apply(&mut self, values: &ParameterSet) -> anyhow::Result<()>;
}

impl<F> OutputSink for F
where
    F: FnMut(&ParameterSet) -> anyhow::Result<()>,
{
    fn apply(&mut self, values: &ParameterSet) -> anyhow::Result<()> {
        self(values)
    }
}

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Some field is still outside tolerance; schedule another tick.
    Continue,
    /// `current` has been snapped to `target`; the engine is idle.
    Settled,
}

/// Interpolation factors per rate class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rates {
    pub transform: f32,
    pub reveal: f32,
}

impl Rates {
    pub fn from_base(base: f32, reveal_multiplier: f32) -> Self {
        Self {
            transform: base,
            reveal: base * reveal_multiplier,
        }
    }

    #[inline]
    pub fn for_field(&self, field: Field) -> f32 {
        match field.class() {
            RateClass::Transform => self.transform,
            RateClass::Reveal => self.reveal,
        }
    }
}

impl Default for Rates {
    fn default() -> Self {
        Self::from_base(BASE_RATE, REVEAL_RATE_MULTIPLIER)
    }
}

pub struct ConvergenceEngine {
    current: ParameterSet,
    rates: Rates,
    tolerance: f32,
    running: bool,
    ticks: u64,
}

impl ConvergenceEngine {
    pub fn new(initial: ParameterSet, rates: Rates, tolerance: f32) -> Self {
        Self {
            current: initial,
            rates,
            tolerance,
            running: false,
            ticks: 0,
        }
    }

    pub fn with_defaults(initial: ParameterSet) -> Self {
        Self::new(initial, Rates::default(), SETTLE_TOLERANCE)
    }

    #[inline]
    pub fn current(&self) -> &ParameterSet {
        &self.current
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn rates(&self) -> Rates {
        self.rates
    }

    /// Ticks run since construction.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Mark the loop as running. Returns true when the caller must schedule
    /// the first tick; false when a loop is already in flight and will pick
    /// up the new target on its own.
    pub fn request(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::trace!("[converge] idle -> running");
        true
    }

    /// Advance one frame toward `target` and write the result to `sink`.
    ///
    /// On convergence `current` is snapped to `target` and written a second
    /// time. A sink error is returned as-is; the engine stays running so
    /// the next frame can supersede the failed write.
    pub fn tick(
        &mut self,
        target: &ParameterSet,
        sink: &mut impl OutputSink,
    ) -> anyhow::Result<Tick> {
        self.ticks += 1;
        for field in Field::ALL {
            let rate = self.rates.for_field(field);
            let value = self.current.get_mut(field);
            *value = lerp(*value, target.get(field), rate);
        }
        sink.apply(&self.current)?;

        if !self.current.within(target, self.tolerance) {
            return Ok(Tick::Continue);
        }
        self.current = *target;
        sink.apply(&self.current)?;
        self.running = false;
        log::trace!("[converge] settled after {} ticks", self.ticks);
        Ok(Tick::Settled)
    }
}
