use crate::core::{group_lines, line_text, split_chars, split_words, Granularity};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Split every block matching `selector` and return the animatable inner spans in order.
pub fn segment(document: &web::Document, selector: &str, granularity: Granularity) -> Vec<web::HtmlElement> {
    let mut units = Vec::new();
    for block in dom::query_all(document, selector) {
        let text = block.text_content().unwrap_or_default();
        let result = match granularity {
            Granularity::Chars => segment_chars(document, &block, &text),
            Granularity::Lines => segment_lines(document, &block, &text),
        };
        match result {
            Ok(mut spans) => units.append(&mut spans),
            Err(e) => log::warn!("[segment] {} failed: {:?}", selector, e),
        }
    }
    log::debug!("[segment] {} -> {} units", selector, units.len());
    units
}

fn make(document: &web::Document, tag: &str, class: Option<&str>, style: &str) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
    let el: web::HtmlElement = document.create_element(tag)?.dyn_into()?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    if !style.is_empty() {
        el.set_attribute("style", style)?;
    }
    Ok(el)
}

/// Wrap `text` in a `display:block` span inside a fresh `class` container.
fn wrapped_unit(
    document: &web::Document,
    class: &str,
    container_style: &str,
    text: &str,
) -> Result<(web::HtmlElement, web::HtmlElement), wasm_bindgen::JsValue> {
    let outer = make(document, "div", Some(class), container_style)?;
    let inner = make(document, "span", None, "display:block;")?;
    inner.set_text_content(Some(text));
    outer.append_child(&inner)?;
    Ok((outer, inner))
}

fn segment_chars(
    document: &web::Document,
    block: &web::HtmlElement,
    text: &str,
) -> Result<Vec<web::HtmlElement>, wasm_bindgen::JsValue> {
    block.set_text_content(None);
    let mut spans = Vec::new();
    for (wi, word) in split_chars(text).into_iter().enumerate() {
        if wi > 0 {
            block.append_child(&document.create_text_node(" "))?;
        }
        let word_el = make(document, "div", Some("word"), "display:inline-block;position:relative;")?;
        for ch in word {
            let (char_el, inner) = wrapped_unit(
                document,
                "char",
                "display:inline-block;position:relative;",
                &ch.to_string(),
            )?;
            word_el.append_child(&char_el)?;
            spans.push(inner);
        }
        block.append_child(&word_el)?;
    }
    Ok(spans)
}

fn segment_lines(
    document: &web::Document,
    block: &web::HtmlElement,
    text: &str,
) -> Result<Vec<web::HtmlElement>, wasm_bindgen::JsValue> {
    let words = split_words(text);
    block.set_text_content(None);

    // measure: lay the words out inline and read back where each one landed
    let mut tops = Vec::with_capacity(words.len());
    let mut probes = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            block.append_child(&document.create_text_node(" "))?;
        }
        let probe = make(document, "span", Some("word"), "display:inline-block;")?;
        probe.set_text_content(Some(word));
        block.append_child(&probe)?;
        probes.push(probe);
    }
    for probe in &probes {
        tops.push(probe.offset_top() as f64);
    }

    block.set_text_content(None);
    let mut spans = Vec::new();
    for line in group_lines(&tops) {
        let (line_el, inner) = wrapped_unit(
            document,
            "line",
            "display:block;position:relative;",
            &line_text(&words, line),
        )?;
        block.append_child(&line_el)?;
        spans.push(inner);
    }
    Ok(spans)
}
