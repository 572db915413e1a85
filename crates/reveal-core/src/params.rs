//! The fixed-shape record of visual parameters driven by the timeline.
//!
//! Each effect owns two independent instances: the `target` produced by the
//! timeline and the `current` values displayed by the convergence engine.

/// One named visual parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Image 1 width/height, percent of the frame.
    Img1Size,
    /// Image 2 slide offset, percent.
    Img2Translate,
    /// Text overlay opacity, 0..1.
    TextOpacity,
    /// Text overlay rise offset, pixels.
    TextTranslate,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Img1Size,
        Field::Img2Translate,
        Field::TextOpacity,
        Field::TextTranslate,
    ];

    /// Smoothing class of the field.
    #[inline]
    pub fn class(self) -> RateClass {
        match self {
            Field::Img1Size | Field::Img2Translate => RateClass::Transform,
            Field::TextOpacity | Field::TextTranslate => RateClass::Reveal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Img1Size => "img1_size",
            Field::Img2Translate => "img2_translate",
            Field::TextOpacity => "text_opacity",
            Field::TextTranslate => "text_translate",
        }
    }
}

/// Large size/position transforms settle at the base rate; the text reveal
/// (opacity and its small pixel rise) settles at the amplified rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateClass {
    Transform,
    Reveal,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    pub img1_size: f32,
    pub img2_translate: f32,
    pub text_opacity: f32,
    pub text_translate: f32,
}

impl ParameterSet {
    #[inline]
    pub fn get(&self, field: Field) -> f32 {
        match field {
            Field::Img1Size => self.img1_size,
            Field::Img2Translate => self.img2_translate,
            Field::TextOpacity => self.text_opacity,
            Field::TextTranslate => self.text_translate,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, field: Field) -> &mut f32 {
        match field {
            Field::Img1Size => &mut self.img1_size,
            Field::Img2Translate => &mut self.img2_translate,
            Field::TextOpacity => &mut self.text_opacity,
            Field::TextTranslate => &mut self.text_translate,
        }
    }

    /// Largest absolute per-field difference to `other`.
    pub fn max_distance(&self, other: &ParameterSet) -> f32 {
        Field::ALL
            .iter()
            .map(|&f| (self.get(f) - other.get(f)).abs())
            .fold(0.0, f32::max)
    }

    /// True when every field is within `tolerance` of `other`.
    pub fn within(&self, other: &ParameterSet, tolerance: f32) -> bool {
        Field::ALL
            .iter()
            .all(|&f| (self.get(f) - other.get(f)).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_mut_writes_the_named_field_only() {
        let mut p = ParameterSet::default();
        *p.get_mut(Field::TextOpacity) = 0.5;
        assert_eq!(p.text_opacity, 0.5);
        assert_eq!(p.img1_size, 0.0);
        assert_eq!(p.img2_translate, 0.0);
        assert_eq!(p.text_translate, 0.0);
    }

    #[test]
    fn within_uses_inclusive_tolerance() {
        let a = ParameterSet {
            img1_size: 60.0,
            img2_translate: 100.0,
            text_opacity: 0.0,
            text_translate: 30.0,
        };
        let mut b = a;
        b.img2_translate += 0.5;
        assert!(!a.within(&b, 0.01));
        assert!(a.within(&b, 0.5));
        assert!((a.max_distance(&b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rate_classes() {
        assert_eq!(Field::Img1Size.class(), RateClass::Transform);
        assert_eq!(Field::Img2Translate.class(), RateClass::Transform);
        assert_eq!(Field::TextOpacity.class(), RateClass::Reveal);
        assert_eq!(Field::TextTranslate.class(), RateClass::Reveal);
    }
}
