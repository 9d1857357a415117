use crate::core::WheelMode;
use crate::dom;
use crate::page::Page;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_page_events(page: &Rc<RefCell<Page>>, canvas: Option<web::HtmlCanvasElement>) {
    wire_resize(page, canvas);
    wire_scroll(page);
    wire_wheel(page);
}

fn wire_resize(page: &Rc<RefCell<Page>>, canvas: Option<web::HtmlCanvasElement>) {
    let page = page.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(c) = &canvas {
            dom::sync_canvas_backing_size(c);
        }
        page.borrow_mut().on_resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_scroll(page: &Rc<RefCell<Page>>) {
    let page = page.clone();
    let closure = Closure::wrap(Box::new(move || {
        page.borrow_mut().on_scroll();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(page: &Rc<RefCell<Page>>) {
    let page = page.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // pinch-zoom and horizontal gestures stay native
        if ev.ctrl_key() || ev.delta_y() == 0.0 {
            return;
        }
        ev.prevent_default();
        page.borrow_mut()
            .on_wheel(ev.delta_y(), WheelMode::from_dom(ev.delta_mode()));
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
