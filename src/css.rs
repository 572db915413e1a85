use crate::constants::*;
use reveal_core::{ParameterSet, Part};

/// One custom property write on one section element.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub part: Part,
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(part: Part, property: &'static str, value: String) -> Self {
        Self {
            part,
            property,
            value,
        }
    }
}

/// Custom properties for a parameter set, in write order.
pub fn declarations(values: &ParameterSet) -> [Declaration; 5] {
    let size = percent(values.img1_size);
    [
        Declaration::new(Part::Image1, IMG1_WIDTH_VAR, size.clone()),
        Declaration::new(Part::Image1, IMG1_HEIGHT_VAR, size),
        Declaration::new(Part::Image2, IMG2_TRANSLATE_VAR, percent(values.img2_translate)),
        Declaration::new(Part::TextOverlay, TEXT_OPACITY_VAR, values.text_opacity.to_string()),
        Declaration::new(Part::TextOverlay, TEXT_TRANSLATE_VAR, px(values.text_translate)),
    ]
}

#[inline]
pub fn percent(v: f32) -> String {
    format!("{}%", v)
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}
