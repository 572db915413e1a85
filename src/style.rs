use crate::css;
use reveal_core::{OutputSink, ParameterSet, Part, SectionParts};
use web_sys as web;

/// Writes displayed parameters as CSS custom properties on a section's parts.
pub struct StyleSink<'a> {
    parts: &'a SectionParts<web::HtmlElement>,
}

impl<'a> StyleSink<'a> {
    pub fn new(parts: &'a SectionParts<web::HtmlElement>) -> Self {
        Self { parts }
    }

    fn element(&self, part: Part) -> Option<&web::HtmlElement> {
        match part {
            Part::ScrollContainer => Some(&self.parts.scroll_container),
            Part::StickyWrapper => self.parts.sticky_wrapper.as_ref(),
            Part::Image1 => Some(&self.parts.image1),
            Part::Image2 => Some(&self.parts.image2),
            Part::TextOverlay => Some(&self.parts.text_overlay),
        }
    }
}

impl OutputSink for StyleSink<'_> {
    fn apply(&mut self, values: &ParameterSet) -> anyhow::Result<()> {
        for decl in css::declarations(values) {
            let Some(el) = self.element(decl.part) else {
                continue;
            };
            el.style()
                .set_property(decl.property, &decl.value)
                .map_err(|e| anyhow::anyhow!("set {} on {}: {:?}", decl.property, decl.part, e))?;
        }
        Ok(())
    }
}
