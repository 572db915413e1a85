// Host-side tests for the web front-end's markup contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use reveal_core::Part;

#[test]
fn every_part_has_a_distinct_class_selector() {
    let all = [
        Part::ScrollContainer,
        Part::StickyWrapper,
        Part::Image1,
        Part::Image2,
        Part::TextOverlay,
    ];
    let mut seen = Vec::new();
    for part in all {
        let sel = part_selector(part);
        assert!(sel.starts_with(".kl-"), "{part:?} selector {sel}");
        assert!(!seen.contains(&sel), "duplicate selector {sel}");
        seen.push(sel);
    }
    assert!(!seen.contains(&SECTION_SELECTOR));
}

#[test]
fn custom_properties_are_dashed_idents() {
    for var in [
        IMG1_WIDTH_VAR,
        IMG1_HEIGHT_VAR,
        IMG2_TRANSLATE_VAR,
        TEXT_OPACITY_VAR,
        TEXT_TRANSLATE_VAR,
    ] {
        assert!(var.starts_with("--"), "{var}");
        assert!(!var.contains(' '), "{var}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_tuning_is_sane() {
    use reveal_core::constants::*;
    assert!(BASE_RATE > 0.0 && BASE_RATE < 1.0);
    assert!(BASE_RATE * REVEAL_RATE_MULTIPLIER < 1.0);
    assert!(REVEAL_RATE_MULTIPLIER > 1.0);
    assert!(SETTLE_TOLERANCE > 0.0);
    assert!(IMG1_START < IMG1_END && IMG1_END <= IMG2_START);
    assert!(IMG2_START < IMG2_END && IMG2_END <= TEXT_START);
    assert!(TEXT_START < TEXT_END && TEXT_END <= 1.0);
    assert!(IMG1_START_SIZE < IMG1_END_SIZE);
    assert!(!RESIZE_QUIET.is_zero());
}
