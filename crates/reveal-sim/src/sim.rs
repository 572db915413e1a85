//! Headless stand-in for the browser: a section with named elements, a
//! scripted scroll position, a fixed-rate frame clock and a stdout sink.

use anyhow::Result;
use instant::Instant;
use reveal_core::{Geometry, OutputSink, ParameterSet, Part, ScrollEffect, Section, Tick};
use std::time::Duration;

/// A section whose parts are plain names; `omit` removes one of them.
pub struct SimSection {
    pub omit: Option<Part>,
}

impl Section for SimSection {
    type Element = &'static str;

    fn find(&self, part: Part) -> Option<&'static str> {
        if self.omit == Some(part) {
            return None;
        }
        Some(match part {
            Part::ScrollContainer => "scroll-container",
            Part::StickyWrapper => "sticky-wrapper",
            Part::Image1 => "image-1",
            Part::Image2 => "image-2",
            Part::TextOverlay => "text-overlay",
        })
    }
}

/// Writes each frame's parameters to stdout.
pub struct PrintSink {
    json: bool,
    writes: u64,
}

impl PrintSink {
    pub fn new(json: bool) -> Self {
        if !json {
            println!(
                "{:>6} {:>10} {:>14} {:>12} {:>14}",
                "write", "img1_size", "img2_translate", "text_opacity", "text_translate"
            );
        }
        Self { json, writes: 0 }
    }
}

impl OutputSink for PrintSink {
    fn apply(&mut self, values: &ParameterSet) -> Result<()> {
        self.writes += 1;
        if self.json {
            println!("{}", serde_json::to_string(values)?);
        } else {
            println!(
                "{:>6} {:>10.3} {:>14.3} {:>12.4} {:>14.3}",
                self.writes,
                values.img1_size,
                values.img2_translate,
                values.text_opacity,
                values.text_translate
            );
        }
        Ok(())
    }
}

/// Scripted page interaction.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub container_height: f32,
    pub viewport_height: f32,
    /// Scroll positions as fractions of the initial scrollable distance.
    pub stops: Vec<f32>,
    pub interval: u32,
    pub frame: Duration,
    /// Frame at which a three-frame resize burst starts, and the new viewport.
    pub resize: Option<(u32, f32)>,
    pub max_frames: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub frames: u32,
    pub ticks: u32,
    /// Idle -> running transitions requested by input.
    pub loops: u32,
    pub resize_recomputes: u32,
    pub settled: bool,
    pub last: ParameterSet,
}

const RESIZE_BURST_FRAMES: u32 = 3;

pub fn simulate(
    effect: &mut ScrollEffect,
    scenario: &Scenario,
    sink: &mut impl OutputSink,
) -> Result<Report> {
    let base = Instant::now();
    let mut viewport = scenario.viewport_height;
    let scroll_range = (scenario.container_height - viewport).max(0.0);
    let mut scroll_px = 0.0_f32;
    let geometry = |viewport: f32, scroll_px: f32| {
        Geometry::new(scenario.container_height, viewport, -scroll_px)
    };

    let mut report = Report::default();
    let mut scheduled = effect.initialize(&geometry(viewport, scroll_px), sink)?;
    report.loops += scheduled as u32;
    let mut next_stop = 0usize;

    for frame in 0..scenario.max_frames {
        let at = base + scenario.frame * frame;
        report.frames = frame + 1;

        let stop_due = scenario.interval == 0 || frame % scenario.interval == 0;
        if stop_due && next_stop < scenario.stops.len() {
            scroll_px = scroll_range * scenario.stops[next_stop];
            next_stop += 1;
            let started = effect.on_scroll(&geometry(viewport, scroll_px));
            log::debug!("[sim] frame {frame}: scroll to {scroll_px:.0}px (new loop: {started})");
            report.loops += started as u32;
            scheduled |= started;
        }

        if let Some((start, resized)) = scenario.resize {
            if (start..start + RESIZE_BURST_FRAMES).contains(&frame) {
                viewport = resized;
                effect.on_resize(at);
                log::debug!("[sim] frame {frame}: resize to {viewport:.0}px");
            }
        }
        let pending = effect.resize_pending();
        let started = effect.poll_resize(at, &geometry(viewport, scroll_px));
        if pending && !effect.resize_pending() {
            log::debug!("[sim] frame {frame}: resize settled (new loop: {started})");
            report.resize_recomputes += 1;
        }
        report.loops += started as u32;
        scheduled |= started;

        if scheduled {
            report.ticks += 1;
            if effect.tick(sink)? == Tick::Settled {
                scheduled = false;
            }
        }

        let script_done = next_stop >= scenario.stops.len()
            && scenario
                .resize
                .map_or(true, |(start, _)| frame >= start + RESIZE_BURST_FRAMES);
        if script_done && !scheduled && !effect.resize_pending() {
            report.settled = true;
            break;
        }
    }

    report.last = *effect.current();
    Ok(report)
}
