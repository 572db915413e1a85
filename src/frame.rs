use crate::dom::ElementGeometry;
use crate::style::StyleSink;
use instant::Instant;
use reveal_core::{EffectInstance, Tick};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One attached section and the effect driving it.
pub struct SectionRuntime {
    pub index: usize,
    pub instance: EffectInstance<web::HtmlElement>,
}

impl SectionRuntime {
    pub fn initialize(&mut self) -> anyhow::Result<bool> {
        let EffectInstance { parts, effect } = &mut self.instance;
        effect.initialize(
            &ElementGeometry(&parts.scroll_container),
            &mut StyleSink::new(parts),
        )
    }

    pub fn on_scroll(&mut self) -> bool {
        let EffectInstance { parts, effect } = &mut self.instance;
        effect.on_scroll(&ElementGeometry(&parts.scroll_container))
    }

    pub fn on_resize(&mut self) {
        self.instance.effect.on_resize(Instant::now());
    }

    pub fn poll_resize(&mut self) -> bool {
        let EffectInstance { parts, effect } = &mut self.instance;
        effect.poll_resize(Instant::now(), &ElementGeometry(&parts.scroll_container))
    }

    pub fn resize_remaining(&self) -> Option<Duration> {
        self.instance.effect.resize_remaining(Instant::now())
    }

    pub fn tick(&mut self) -> anyhow::Result<Tick> {
        let EffectInstance { parts, effect } = &mut self.instance;
        effect.tick(&mut StyleSink::new(parts))
    }
}

pub type SharedSection = Rc<RefCell<SectionRuntime>>;

/// Drives one section's ticks from `requestAnimationFrame`.
///
/// A single closure is built per section and re-armed only while the effect
/// reports [`Tick::Continue`], so at most one frame request is outstanding.
#[derive(Clone)]
pub struct FrameScheduler {
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameScheduler {
    pub fn new(section: SharedSection) -> Self {
        let scheduler = Self {
            callback: Rc::new(RefCell::new(None)),
        };
        let next = scheduler.clone();
        *scheduler.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let outcome = section.borrow_mut().tick();
            match outcome {
                Ok(Tick::Continue) => next.request(),
                Ok(Tick::Settled) => {
                    log::debug!("[frame] section {} settled", section.borrow().index);
                }
                Err(e) => {
                    // The effect is still running; the next frame supersedes this write.
                    log::error!("[frame] section {} tick error: {:?}", section.borrow().index, e);
                    next.request();
                }
            }
        }) as Box<dyn FnMut()>));
        scheduler
    }

    /// Ask for one tick on the next animation frame.
    pub fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            }
        }
    }

    /// Request a tick when the effect says a new loop is needed.
    #[inline]
    pub fn request_if(&self, wanted: bool) {
        if wanted {
            self.request();
        }
    }
}
