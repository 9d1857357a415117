use crate::animator::Animator;
use crate::core::*;
use crate::dom;
use crate::segmenter;
use web_sys as web;

const HEADER_CHARS: &str = "header-chars";
const DIVIDERS: &str = "dividers";

fn tooltip_group(index: usize) -> String {
    format!("tooltip-{}", index)
}

const ENTRANCE_TWEEN: TweenSpec =
    TweenSpec::new(ENTRANCE_DURATION_SEC, Ease::Power3Out).with_stagger(ENTRANCE_STAGGER_SEC);
const DEFAULT_TWEEN: TweenSpec = TweenSpec::new(DEFAULT_TWEEN_DURATION_SEC, Ease::Power1Out);

/// The pinned section and the spacer that reserves its scroll distance.
struct Pin {
    section: web::HtmlElement,
    spacer: web::HtmlElement,
    controller: ScrollController,
}

/// Everything the page's event handlers and frame loop share.
pub struct Page {
    config: PageConfig,
    document: web::Document,
    pub scene: SceneState,
    pub animator: Animator,
    pub smooth: SmoothScroll,
    visual: VisualState,
    pin: Option<Pin>,
    pending_upload: Option<ModelAsset>,
}

impl Page {
    pub fn new(document: web::Document, config: PageConfig) -> Self {
        let viewport = dom::window_viewport();
        let mut page = Self {
            visual: map(ScrollProgress::START, &config.tooltip_triggers),
            scene: SceneState::new(viewport),
            animator: Animator::new(),
            smooth: SmoothScroll::new(dom::window_scroll_y()),
            pin: None,
            pending_upload: None,
            config,
            document,
        };
        page.segment_text();
        page.pin = page.build_pin(viewport);
        page
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    fn segment_text(&mut self) {
        let sel = &self.config.selectors;
        let chars = segmenter::segment(&self.document, sel.header1_text, Granularity::Chars);
        _ = segmenter::segment(&self.document, sel.tooltip_titles, Granularity::Lines);
        _ = segmenter::segment(&self.document, sel.tooltip_descriptions, Granularity::Lines);

        self.animator
            .register(HEADER_CHARS, chars, StyleProperty::TranslateYPercent, HIDDEN_BELOW_PERCENT);
        self.animator.register(
            DIVIDERS,
            dom::query_all(&self.document, sel.divider),
            StyleProperty::ScaleXPercent,
            0.0,
        );
        for (i, trigger) in self.config.tooltip_triggers.iter().enumerate() {
            let elements: Vec<web::HtmlElement> = trigger
                .elements
                .iter()
                .flat_map(|s| dom::query_all(&self.document, s))
                .collect();
            self.animator.register(
                tooltip_group(i),
                elements,
                StyleProperty::TranslateYPercent,
                HIDDEN_BELOW_PERCENT,
            );
        }
        log::info!(
            "[segment] {} header chars, {} tooltip groups",
            self.animator.group_len(HEADER_CHARS),
            self.config.tooltip_triggers.len()
        );
    }

    fn build_pin(&self, viewport: Viewport) -> Option<Pin> {
        let Some(section) = dom::query_one(&self.document, self.config.selectors.section) else {
            log::warn!("[scroll] {} not found; scroll choreography disabled", self.config.selectors.section);
            return None;
        };
        let spacer = match wrap_in_spacer(&self.document, &section, self.config.scroll_distance) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[scroll] could not create pin spacer: {:?}", e);
                return None;
            }
        };
        let controller = ScrollController::new(
            dom::document_top(&spacer),
            self.config.scroll_distance,
            self.config.entrance_fraction,
            viewport,
        );
        log::info!(
            "[scroll] pinned {} from {:.0} for {:.0}px",
            self.config.selectors.section,
            controller.range().start,
            controller.range().distance
        );
        Some(Pin {
            section,
            spacer,
            controller,
        })
    }

    pub fn on_scroll(&mut self) {
        let source = dom::WindowScroll;
        self.smooth.sync(source.scroll_y());
        let Some(pin) = &mut self.pin else {
            return;
        };
        let update = pin.controller.poll(&source);
        dom::apply_style(&pin.section, StyleProperty::TranslateYPx, update.pin_offset);
        match update.entrance {
            Some(Edge::Enter) => self.animator.to(HEADER_CHARS, 0.0, ENTRANCE_TWEEN),
            Some(Edge::LeaveBack) => {
                self.animator
                    .to(HEADER_CHARS, HIDDEN_BELOW_PERCENT, ENTRANCE_TWEEN)
            }
            None => {}
        }
        if update.changed {
            self.apply_progress(update.progress);
        }
    }

    fn apply_progress(&mut self, progress: ScrollProgress) {
        let visual = map(progress, &self.config.tooltip_triggers);
        let sel = &self.config.selectors;
        dom::set_all(&self.document, sel.header1, StyleProperty::TranslateXPercent, visual.header1_offset);
        dom::set_all(&self.document, sel.mask, StyleProperty::ClipCircle, visual.mask_radius);
        dom::set_all(&self.document, sel.header2, StyleProperty::TranslateXPercent, visual.header2_offset);
        if visual.divider_active() {
            self.animator.to(DIVIDERS, visual.divider_scale_x, DEFAULT_TWEEN);
        }
        for i in 0..visual.tooltips_visible.len() {
            if let Some(offset) = visual.tooltip_offset(i) {
                self.animator.to(&tooltip_group(i), offset, DEFAULT_TWEEN);
            }
        }
        self.scene.set_rotation_y(visual.model_rotation_y as f32);
        self.visual = visual;
    }

    pub fn on_resize(&mut self) {
        let viewport = dom::WindowScroll.viewport();
        self.scene.resize(viewport);
        if let Some(pin) = &mut self.pin {
            // measure from the spacer; the section itself carries the pin offset
            pin.controller.relayout(dom::document_top(&pin.spacer), viewport);
        }
        self.on_scroll();
    }

    pub fn on_wheel(&mut self, delta: f64, mode: WheelMode) {
        let delta_px = mode.to_pixels(delta, self.scene.viewport().height);
        self.smooth.on_wheel(delta_px, dom::max_scroll_y());
    }

    pub fn on_model(&mut self, result: Result<ModelAsset, LoadError>) {
        match result {
            Ok(asset) => {
                self.scene.model_loaded(&asset);
                // rotation may have advanced while loading
                self.scene.set_rotation_y(self.visual.model_rotation_y as f32);
                self.pending_upload = Some(asset);
            }
            Err(e) => self.scene.model_failed(&e),
        }
    }

    pub fn take_pending_upload(&mut self) -> Option<ModelAsset> {
        self.pending_upload.take()
    }
}

/// Move `section` into a spacer div padded by `distance` so the page keeps scrolling while pinned.
fn wrap_in_spacer(
    document: &web::Document,
    section: &web::HtmlElement,
    distance: f64,
) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    let spacer: web::HtmlElement = document.create_element("div")?.dyn_into()?;
    spacer.set_class_name("pin-spacer");
    _ = spacer
        .style()
        .set_property("padding-bottom", &format!("{}px", distance));
    let section_node: &web::Node = section;
    if let Some(parent) = section.parent_node() {
        parent.insert_before(&spacer, Some(section_node))?;
    }
    spacer.append_child(section)?;
    _ = section.style().set_property("will-change", "transform");
    Ok(spacer)
}
