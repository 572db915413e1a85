//! One scroll-linked effect bound to one section.
//!
//! `ScrollEffect` wires the timeline (which writes `target`) to the
//! convergence engine (which owns `current`). Hosts feed it geometry on
//! scroll, resize and load, and call [`ScrollEffect::tick`] once per frame
//! while it asks for frames.

use crate::config::EffectConfig;
use crate::converge::{ConvergenceEngine, OutputSink, Tick};
use crate::debounce::Debouncer;
use crate::error::ConfigurationError;
use crate::params::ParameterSet;
use crate::section::{Section, SectionParts};
use crate::timeline::{GeometryProvider, TimelineSchedule};
use instant::Instant;
use std::time::Duration;

pub struct ScrollEffect {
    schedule: TimelineSchedule,
    target: ParameterSet,
    engine: ConvergenceEngine,
    resize: Debouncer,
}

impl ScrollEffect {
    pub fn new(config: EffectConfig) -> Self {
        let rates = config.rates();
        let initial = config.schedule.initial();
        Self {
            target: initial,
            engine: ConvergenceEngine::new(initial, rates, config.tolerance),
            resize: Debouncer::new(config.resize_quiet),
            schedule: config.schedule,
        }
    }

    #[inline]
    pub fn schedule(&self) -> &TimelineSchedule {
        &self.schedule
    }

    #[inline]
    pub fn target(&self) -> &ParameterSet {
        &self.target
    }

    #[inline]
    pub fn current(&self) -> &ParameterSet {
        self.engine.current()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    #[inline]
    pub fn engine(&self) -> &ConvergenceEngine {
        &self.engine
    }

    /// First evaluation after attach: publish the initial values and start
    /// converging toward wherever the page is already scrolled.
    ///
    /// Returns true when the host must schedule a tick. The loop is armed
    /// before the initial write, so after a sink error the host must still
    /// schedule one.
    pub fn initialize(
        &mut self,
        geometry: &impl GeometryProvider,
        sink: &mut impl OutputSink,
    ) -> anyhow::Result<bool> {
        self.retarget(geometry);
        let wanted = self.engine.request();
        sink.apply(self.engine.current())?;
        Ok(wanted)
    }

    /// Recompute the target from fresh geometry. Returns true when the host
    /// must schedule a tick; a loop already in flight just reads the new
    /// target on its next tick.
    pub fn on_scroll(&mut self, geometry: &impl GeometryProvider) -> bool {
        self.retarget(geometry);
        self.engine.request()
    }

    /// True while a resize burst is waiting for its quiet period.
    #[inline]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// How long until a pending resize burst counts as quiet.
    #[inline]
    pub fn resize_remaining(&self, at: Instant) -> Option<Duration> {
        self.resize.remaining(at)
    }

    /// Record a raw resize notification.
    pub fn on_resize(&mut self, at: Instant) {
        self.resize.notify(at);
    }

    /// Recompute once the resize burst has gone quiet. Returns true when the
    /// host must schedule a tick.
    pub fn poll_resize(&mut self, at: Instant, geometry: &impl GeometryProvider) -> bool {
        if !self.resize.poll(at) {
            return false;
        }
        log::debug!("[effect] resize settled, recomputing");
        self.on_scroll(geometry)
    }

    pub fn tick(&mut self, sink: &mut impl OutputSink) -> anyhow::Result<Tick> {
        self.engine.tick(&self.target, sink)
    }

    fn retarget(&mut self, geometry: &impl GeometryProvider) {
        let progress = geometry.geometry().progress();
        self.target = self.schedule.evaluate(progress);
    }
}

/// An attached effect together with the section elements it drives.
pub struct EffectInstance<E> {
    pub parts: SectionParts<E>,
    pub effect: ScrollEffect,
}

/// Bind a new effect to `section`. Fails without creating anything when the
/// tuning is invalid or a required element is missing.
pub fn attach<S>(section: &S, config: EffectConfig) -> Result<EffectInstance<S::Element>, ConfigurationError>
where
    S: Section + ?Sized,
{
    config.validate()?;
    let parts = SectionParts::locate(section)?;
    log::debug!(
        "[effect] attached (sticky wrapper: {})",
        parts.sticky_wrapper.is_some()
    );
    Ok(EffectInstance {
        parts,
        effect: ScrollEffect::new(config),
    })
}
