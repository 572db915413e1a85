use crate::constants::part_selector;
use reveal_core::{Geometry, GeometryProvider, Part, Section};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a passive listener for the lifetime of the page (the closure is
/// leaked).
pub fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Every element in the document matching `selector`.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::error!("[dom] bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// A `.kl-section` element, queried for its parts by class.
pub struct DomSection(pub web::HtmlElement);

impl Section for DomSection {
    type Element = web::HtmlElement;

    fn find(&self, part: Part) -> Option<web::HtmlElement> {
        self.0
            .query_selector(part_selector(part))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}

/// Live layout of a scroll container against the window viewport.
pub struct ElementGeometry<'a>(pub &'a web::HtmlElement);

impl GeometryProvider for ElementGeometry<'_> {
    fn geometry(&self) -> Geometry {
        let rect = self.0.get_bounding_client_rect();
        let viewport_height = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Geometry::new(rect.height() as f32, viewport_height as f32, rect.top() as f32)
    }
}
