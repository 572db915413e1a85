use crate::error::ConfigurationError;
use std::fmt;

/// Structural pieces of a section the effect is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    ScrollContainer,
    StickyWrapper,
    Image1,
    Image2,
    TextOverlay,
}

impl Part {
    /// Parts that must be present, in the order they are checked.
    pub const REQUIRED: [Part; 4] = [
        Part::ScrollContainer,
        Part::Image1,
        Part::Image2,
        Part::TextOverlay,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, Part::StickyWrapper)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Part::ScrollContainer => "scroll container",
            Part::StickyWrapper => "sticky wrapper",
            Part::Image1 => "image 1",
            Part::Image2 => "image 2",
            Part::TextOverlay => "text overlay",
        };
        f.write_str(name)
    }
}

/// A host-side section that can be queried for its parts.
pub trait Section {
    type Element;

    fn find(&self, part: Part) -> Option<Self::Element>;
}

/// The elements of one section, resolved once at attach time.
#[derive(Clone, Debug)]
pub struct SectionParts<E> {
    pub scroll_container: E,
    pub sticky_wrapper: Option<E>,
    pub image1: E,
    pub image2: E,
    pub text_overlay: E,
}

impl<E> SectionParts<E> {
    pub fn locate<S>(section: &S) -> Result<Self, ConfigurationError>
    where
        S: Section<Element = E> + ?Sized,
    {
        let require = |part: Part| section.find(part).ok_or(ConfigurationError::MissingElement(part));
        Ok(Self {
            scroll_container: require(Part::ScrollContainer)?,
            image1: require(Part::Image1)?,
            image2: require(Part::Image2)?,
            text_overlay: require(Part::TextOverlay)?,
            sticky_wrapper: section.find(Part::StickyWrapper),
        })
    }
}
