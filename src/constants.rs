use reveal_core::Part;

// Page markup contract for the web front-end. Sections are discovered by
// class; each one must contain the required parts below or it is skipped.

// Section discovery
pub const SECTION_SELECTOR: &str = ".kl-section";
pub const BODY_LOADED_CLASS: &str = "loaded"; // added once every section is attached

// Custom properties written on every tick
pub const IMG1_WIDTH_VAR: &str = "--img1-width";
pub const IMG1_HEIGHT_VAR: &str = "--img1-height";
pub const IMG2_TRANSLATE_VAR: &str = "--img2-translate";
pub const TEXT_OPACITY_VAR: &str = "--text-opacity";
pub const TEXT_TRANSLATE_VAR: &str = "--text-translate";

/// Class selector for a part, queried inside its section.
#[inline]
pub fn part_selector(part: Part) -> &'static str {
    match part {
        Part::ScrollContainer => ".kl-scroll-container",
        Part::StickyWrapper => ".kl-sticky-wrapper",
        Part::Image1 => ".kl-image-1",
        Part::Image2 => ".kl-image-2",
        Part::TextOverlay => ".kl-text-overlay",
    }
}
