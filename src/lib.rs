#![cfg(target_arch = "wasm32")]
use crate::core::PageConfig;
use crate::page::Page;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animator;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod page;
mod render;
mod segmenter;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("overview-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Load the model in the background; a failure only leaves the scene empty.
fn spawn_model_load(page: Rc<RefCell<Page>>) {
    let url = page.borrow().config().model_url;
    spawn_local(async move {
        let result = loader::load(url).await;
        page.borrow_mut().on_model(result);
    });
}

fn mount_canvas(document: &web::Document, config: &PageConfig) -> Option<web::HtmlCanvasElement> {
    let container = dom::query_one(document, config.selectors.canvas_container);
    let Some(container) = container else {
        log::warn!("[gpu] {} not found; rendering disabled", config.selectors.canvas_container);
        return None;
    };
    match dom::create_canvas(document, &container) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("[gpu] canvas: {:?}", e);
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = PageConfig::default();
    let canvas = mount_canvas(&document, &config);
    let page = Rc::new(RefCell::new(Page::new(document, config)));

    events::wire_page_events(&page, canvas.clone());
    // first layout pass: pin offset, entrance state and initial progress
    page.borrow_mut().on_scroll();

    spawn_model_load(page.clone());

    let gpu = match &canvas {
        Some(c) => frame::init_gpu(c).await,
        None => None,
    };
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(page, canvas, gpu)));
    frame::start_loop(frame_ctx);

    Ok(())
}
