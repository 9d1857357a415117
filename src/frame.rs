use crate::constants::MAX_FRAME_DT_SEC;
use crate::page::Page;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub page: Rc<RefCell<Page>>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        page: Rc<RefCell<Page>>,
        canvas: Option<web::HtmlCanvasElement>,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            page,
            canvas,
            gpu,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let (inputs, upload) = {
            let mut page = self.page.borrow_mut();
            if let Some(y) = page.smooth.step(dt_sec as f64) {
                if let Some(w) = web::window() {
                    w.scroll_to_with_x_and_y(0.0, y);
                }
            }
            page.animator.tick();
            (page.scene.frame_inputs(), page.take_pending_upload())
        };

        let Some(g) = &mut self.gpu else {
            return;
        };
        if let Some(asset) = upload {
            g.upload_model(&asset);
        }
        if let Some(c) = &self.canvas {
            g.resize_if_needed(c.width(), c.height());
        }
        if let Err(e) = g.render(&inputs) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
