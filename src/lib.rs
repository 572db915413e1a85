#![cfg(target_arch = "wasm32")]
use reveal_core::{attach, EffectConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reveal-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == web::DocumentReadyState::Loading {
        let doc = document.clone();
        let mut pending = true;
        dom::add_passive_listener(&document, "DOMContentLoaded", move || {
            if std::mem::take(&mut pending) {
                run(&doc);
            }
        });
    } else {
        run(&document);
    }
    Ok(())
}

fn run(document: &web::Document) {
    if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let config = EffectConfig::default();
    let resize_quiet_ms = config.resize_quiet.as_millis().min(i32::MAX as u128) as i32;

    let sections = dom::query_all(document, constants::SECTION_SELECTOR);
    let mut attached = 0usize;
    for (index, el) in sections.into_iter().enumerate() {
        let instance = match attach(&dom::DomSection(el), config.clone()) {
            Ok(i) => i,
            Err(e) => {
                log::warn!("[section {}] skipped: {}", index, e);
                continue;
            }
        };
        let section = Rc::new(RefCell::new(frame::SectionRuntime { index, instance }));
        let frames = frame::FrameScheduler::new(section.clone());

        events::wire_section_handlers(
            events::SectionWiring {
                section: section.clone(),
                frames: frames.clone(),
            },
            resize_quiet_ms,
        );

        let initialized = section.borrow_mut().initialize();
        match initialized {
            Ok(wanted) => frames.request_if(wanted),
            Err(e) => {
                // The loop is armed regardless; let the first frame retry the write.
                log::error!("[section {}] initial write failed: {:?}", index, e);
                frames.request();
            }
        }
        attached += 1;
    }
    log::info!("[init] attached {} section(s)", attached);

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    body.class_list()
        .add_1(constants::BODY_LOADED_CLASS)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
