use crate::constants::MAX_PIXEL_RATIO;
use crate::core::{ScrollSource, StyleProperty, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`; an invalid or unmatched selector yields none.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::debug!("[dom] invalid selector {}", selector);
        return Vec::new();
    };
    let found: Vec<web::HtmlElement> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if found.is_empty() {
        log::debug!("[dom] no match for {}", selector);
    }
    found
}

#[inline]
pub fn query_one(root: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn apply_style(el: &web::HtmlElement, property: StyleProperty, value: f64) {
    _ = el
        .style()
        .set_property(property.css_name(), &property.css_value(value));
}

/// Immediate write to every match; missing targets are a no-op.
pub fn set_all(document: &web::Document, selector: &str, property: StyleProperty, value: f64) {
    for el in query_all(document, selector) {
        apply_style(&el, property, value);
    }
}

pub fn window_viewport() -> Viewport {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Viewport::new(width, height)
        })
        .unwrap_or_else(|| Viewport::new(0.0, 0.0))
}

#[inline]
pub fn window_scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Largest scroll position the document allows.
pub fn max_scroll_y() -> f64 {
    let Some(doc) = window_document() else {
        return 0.0;
    };
    let height = doc
        .document_element()
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    (height - window_viewport().height).max(0.0)
}

/// Top of `el` in document coordinates.
pub fn document_top(el: &web::Element) -> f64 {
    el.get_bounding_client_rect().top() + window_scroll_y()
}

/// Reads scroll state straight from the browser window.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn scroll_y(&self) -> f64 {
        window_scroll_y()
    }

    fn viewport(&self) -> Viewport {
        window_viewport()
    }
}

#[inline]
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(MAX_PIXEL_RATIO)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Append a full-viewport canvas to `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100vw");
    _ = style.set_property("height", "100vh");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    sync_canvas_backing_size(&canvas);
    Ok(canvas)
}
