//! Progress → target parameter mapping.
//!
//! A [`TimelineSchedule`] holds one [`Track`] per [`Field`]. Each track is a
//! single eased segment in progress-space plus the values the field holds
//! before the segment starts and after it ends. Evaluation is pure and total:
//! any progress value (including NaN and values far outside \[0, 1\]) is
//! clamped before use.

use crate::constants::*;
use crate::easing::{lerp, Easing};
use crate::error::ScheduleError;
use crate::params::{Field, ParameterSet};

/// A sub-range of progress over which one field moves between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: f32,
    pub end: f32,
    pub from: f32,
    pub to: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub easing: Easing,
}

impl Segment {
    /// Local phase in \[0, 1\] for a progress value inside the segment.
    #[inline]
    pub fn phase(&self, progress: f32) -> f32 {
        (progress - self.start) / (self.end - self.start)
    }
}

/// A segment together with the values held outside of it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub segment: Segment,
    /// Value while `progress < segment.start`.
    pub before: f32,
    /// Value once `progress > segment.end`.
    pub after: f32,
}

impl Track {
    /// Track that holds its segment endpoints outside the segment.
    pub fn new(start: f32, end: f32, from: f32, to: f32, easing: Easing) -> Self {
        Self {
            segment: Segment {
                start,
                end,
                from,
                to,
                easing,
            },
            before: from,
            after: to,
        }
    }

    pub fn with_before(mut self, before: f32) -> Self {
        self.before = before;
        self
    }

    pub fn with_after(mut self, after: f32) -> Self {
        self.after = after;
        self
    }

    /// Boundaries are closed on both ends, so `start` and `end` evaluate
    /// through the eased formula and land exactly on `from` and `to`.
    #[inline]
    pub fn value_at(&self, progress: f32) -> f32 {
        let s = &self.segment;
        if progress < s.start {
            self.before
        } else if progress > s.end {
            self.after
        } else {
            lerp(s.from, s.to, s.easing.apply(s.phase(progress)))
        }
    }

    fn validate(&self, field: Field) -> Result<(), ScheduleError> {
        let s = &self.segment;
        let finite = [s.start, s.end, s.from, s.to, self.before, self.after]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ScheduleError::NonFinite { field });
        }
        if s.start >= s.end {
            return Err(ScheduleError::EmptySegment {
                field,
                start: s.start,
                end: s.end,
            });
        }
        if s.start < 0.0 || s.end > 1.0 {
            return Err(ScheduleError::OutOfRange {
                field,
                start: s.start,
                end: s.end,
            });
        }
        Ok(())
    }
}

/// Unvalidated per-field tracks, used to build a [`TimelineSchedule`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tracks {
    pub img1_size: Track,
    pub img2_translate: Track,
    pub text_opacity: Track,
    pub text_translate: Track,
}

impl Default for Tracks {
    fn default() -> Self {
        Self {
            img1_size: Track::new(
                IMG1_START,
                IMG1_END,
                IMG1_START_SIZE,
                IMG1_END_SIZE,
                Easing::OutCubic,
            ),
            img2_translate: Track::new(IMG2_START, IMG2_END, IMG2_OFFSET, 0.0, Easing::OutQuart),
            text_opacity: Track::new(TEXT_START, TEXT_END, 0.0, 1.0, Easing::OutQuad),
            text_translate: Track::new(TEXT_START, TEXT_END, TEXT_OFFSET_PX, 0.0, Easing::OutQuad),
        }
    }
}

impl Tracks {
    pub fn get(&self, field: Field) -> &Track {
        match field {
            Field::Img1Size => &self.img1_size,
            Field::Img2Translate => &self.img2_translate,
            Field::TextOpacity => &self.text_opacity,
            Field::TextTranslate => &self.text_translate,
        }
    }

    pub fn with(mut self, field: Field, track: Track) -> Self {
        match field {
            Field::Img1Size => self.img1_size = track,
            Field::Img2Translate => self.img2_translate = track,
            Field::TextOpacity => self.text_opacity = track,
            Field::TextTranslate => self.text_translate = track,
        }
        self
    }
}

/// Immutable, validated timeline. Construct once per effect.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Tracks", into = "Tracks"))]
pub struct TimelineSchedule {
    tracks: Tracks,
}

impl TryFrom<Tracks> for TimelineSchedule {
    type Error = ScheduleError;

    fn try_from(tracks: Tracks) -> Result<Self, Self::Error> {
        Self::new(tracks)
    }
}

impl From<TimelineSchedule> for Tracks {
    fn from(schedule: TimelineSchedule) -> Self {
        schedule.tracks
    }
}

impl TimelineSchedule {
    pub fn new(tracks: Tracks) -> Result<Self, ScheduleError> {
        for field in Field::ALL {
            tracks.get(field).validate(field)?;
        }
        Ok(Self { tracks })
    }

    #[inline]
    pub fn track(&self, field: Field) -> &Track {
        self.tracks.get(field)
    }

    /// Target parameters for a progress value. Out-of-range input is
    /// clamped to \[0, 1\]; NaN is treated as 0.
    pub fn evaluate(&self, progress: f32) -> ParameterSet {
        let progress = clamp_unit(progress);
        let mut out = ParameterSet::default();
        for field in Field::ALL {
            *out.get_mut(field) = self.track(field).value_at(progress);
        }
        out
    }

    /// Values displayed before any input has been seen.
    pub fn initial(&self) -> ParameterSet {
        let mut out = ParameterSet::default();
        for field in Field::ALL {
            *out.get_mut(field) = self.track(field).before;
        }
        out
    }
}

/// Layout snapshot of a section's scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Geometry {
    pub container_height: f32,
    pub viewport_height: f32,
    /// Container top relative to the viewport; negative once scrolled past.
    pub container_top: f32,
}

impl Geometry {
    pub fn new(container_height: f32, viewport_height: f32, container_top: f32) -> Self {
        Self {
            container_height,
            viewport_height,
            container_top,
        }
    }

    /// Normalized progress through the container's scrollable range.
    ///
    /// A container no taller than the viewport has nothing to scroll through
    /// and reports 0.
    pub fn progress(&self) -> f32 {
        let scroll_top = -self.container_top;
        let scrollable = self.container_height - self.viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return 0.0;
        }
        clamp_unit(scroll_top / scrollable)
    }
}

/// Source of geometry snapshots, read synchronously from event handlers.
pub trait GeometryProvider {
    fn geometry(&self) -> Geometry;
}

impl GeometryProvider for Geometry {
    fn geometry(&self) -> Geometry {
        *self
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn img1_midpoint_uses_cubic_ease() {
        let t = TimelineSchedule::default().evaluate(0.15);
        assert!((t.img1_size - 95.0).abs() < 1e-4, "got {}", t.img1_size);
    }

    #[test]
    fn values_before_and_after_segment() {
        let track = Track::new(0.3, 0.6, 100.0, 0.0, Easing::OutQuart);
        assert_eq!(track.value_at(0.1), 100.0);
        assert_eq!(track.value_at(0.9), 0.0);
        let custom = track.with_before(-1.0).with_after(7.0);
        assert_eq!(custom.value_at(0.1), -1.0);
        assert_eq!(custom.value_at(0.9), 7.0);
    }

    #[test]
    fn closed_boundaries_land_on_endpoints() {
        let track = Track::new(0.6, 0.8, 30.0, 0.0, Easing::OutQuad);
        assert_eq!(track.value_at(0.6), 30.0);
        assert_eq!(track.value_at(0.8), 0.0);
    }

    #[test]
    fn degenerate_geometry_reports_zero() {
        assert_eq!(Geometry::new(800.0, 800.0, -500.0).progress(), 0.0);
        assert_eq!(Geometry::new(600.0, 800.0, -500.0).progress(), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Geometry::new(3000.0, 1000.0, 200.0).progress(), 0.0);
        assert_eq!(Geometry::new(3000.0, 1000.0, -1000.0).progress(), 0.5);
        assert_eq!(Geometry::new(3000.0, 1000.0, -9000.0).progress(), 1.0);
    }

    #[test]
    fn rejects_empty_segment() {
        let tracks = Tracks::default().with(
            Field::TextOpacity,
            Track::new(0.8, 0.8, 0.0, 1.0, Easing::OutQuad),
        );
        assert!(matches!(
            TimelineSchedule::new(tracks),
            Err(ScheduleError::EmptySegment {
                field: Field::TextOpacity,
                ..
            })
        ));
    }

    #[test]
    fn rejects_segment_outside_unit_range() {
        let tracks = Tracks::default().with(
            Field::Img1Size,
            Track::new(-0.1, 0.3, 60.0, 100.0, Easing::OutCubic),
        );
        assert!(matches!(
            TimelineSchedule::new(tracks),
            Err(ScheduleError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let tracks = Tracks::default().with(
            Field::Img2Translate,
            Track::new(0.3, 0.6, f32::NAN, 0.0, Easing::OutQuart),
        );
        assert_eq!(
            TimelineSchedule::new(tracks),
            Err(ScheduleError::NonFinite {
                field: Field::Img2Translate
            })
        );
    }

    #[test]
    fn initial_matches_before_values() {
        let s = TimelineSchedule::default();
        let init = s.initial();
        assert_eq!(init.img1_size, 60.0);
        assert_eq!(init.img2_translate, 100.0);
        assert_eq!(init.text_opacity, 0.0);
        assert_eq!(init.text_translate, 30.0);
        assert_eq!(init, s.evaluate(0.0));
    }
}
