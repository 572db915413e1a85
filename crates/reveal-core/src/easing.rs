/// Shaping curves mapping a linear segment phase to a perceptual phase.
///
/// Curves are evaluated as-is: the timeline only ever passes a phase in
/// \[0, 1\], and every curve maps 0 to 0 and 1 to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear,
    /// `1 - (1 - p)^2`
    OutQuad,
    /// `1 - (1 - p)^3`
    #[default]
    OutCubic,
    /// `1 - (1 - p)^4`
    OutQuart,
}

impl Easing {
    #[inline]
    pub fn apply(self, p: f32) -> f32 {
        let inv = 1.0 - p;
        match self {
            Self::Linear => p,
            Self::OutQuad => 1.0 - inv * inv,
            Self::OutCubic => 1.0 - inv * inv * inv,
            Self::OutQuart => 1.0 - (inv * inv) * (inv * inv),
        }
    }
}

#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::OutQuad,
        Easing::OutCubic,
        Easing::OutQuart,
    ];

    #[test]
    fn curves_pin_both_endpoints() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?} at 0");
            assert_eq!(e.apply(1.0), 1.0, "{e:?} at 1");
        }
    }

    #[test]
    fn midpoint_values() {
        assert!((Easing::OutQuad.apply(0.5) - 0.75).abs() < 1e-6);
        assert!((Easing::OutCubic.apply(0.5) - 0.875).abs() < 1e-6);
        assert!((Easing::OutQuart.apply(0.5) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn higher_order_leads_at_every_interior_phase() {
        for i in 1..100 {
            let p = i as f32 / 100.0;
            let quad = Easing::OutQuad.apply(p);
            let cubic = Easing::OutCubic.apply(p);
            let quart = Easing::OutQuart.apply(p);
            assert!(p < quad && quad < cubic && cubic < quart, "ordering broken at p={p}");
        }
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(60.0, 100.0, 0.0), 60.0);
        assert_eq!(lerp(60.0, 100.0, 1.0), 100.0);
        assert_eq!(lerp(100.0, 0.0, 0.25), 75.0);
    }
}
