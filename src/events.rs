use crate::dom;
use crate::frame::{FrameScheduler, SharedSection};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct SectionWiring {
    pub section: SharedSection,
    pub frames: FrameScheduler,
}

pub fn wire_section_handlers(w: SectionWiring, resize_quiet_ms: i32) {
    wire_scroll(&w);
    wire_resize(&w, resize_quiet_ms);
}

fn wire_scroll(w: &SectionWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::add_passive_listener(&window, "scroll", move || {
        let wanted = w.section.borrow_mut().on_scroll();
        w.frames.request_if(wanted);
    });
}

/// One pending `setTimeout` per section. Re-arming clears the previous one,
/// so a burst of resizes leaves a single timer running.
#[derive(Clone)]
struct ResizeTimer {
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ResizeTimer {
    fn new(w: SectionWiring) -> Self {
        let timer = Self {
            handle: Rc::new(Cell::new(None)),
            callback: Rc::new(RefCell::new(None)),
        };
        let next = timer.clone();
        *timer.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next.handle.set(None);
            let wanted = w.section.borrow_mut().poll_resize();
            if wanted {
                w.frames.request();
                return;
            }
            // Coarse timers can fire just before the quiet period ends.
            let remaining = w.section.borrow().resize_remaining();
            if let Some(rest) = remaining {
                next.arm(millis_ceil(rest).max(1));
            }
        }) as Box<dyn FnMut()>));
        timer
    }

    fn arm(&self, delay_ms: i32) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(prev) = self.handle.take() {
            window.clear_timeout_with_handle(prev);
        }
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => log::warn!("[resize] setTimeout failed: {:?}", e),
        }
    }
}

fn millis_ceil(d: Duration) -> i32 {
    d.as_micros().div_ceil(1000).min(i32::MAX as u128) as i32
}

fn wire_resize(w: &SectionWiring, resize_quiet_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let timer = ResizeTimer::new(w.clone());
    let w = w.clone();
    dom::add_passive_listener(&window, "resize", move || {
        w.section.borrow_mut().on_resize();
        timer.arm(resize_quiet_ms);
    });
}
