// Page wiring: asset location, selectors and trigger table.

use super::choreography::TooltipTrigger;
use super::constants::*;

pub const TOOLTIP_TRIGGERS: [TooltipTrigger; 2] = [
    TooltipTrigger {
        threshold: TOOLTIP_1_THRESHOLD,
        elements: &[
            ".tooltip:nth-child(1) .icon ion-icon",
            ".tooltip:nth-child(1) .title .line > span",
            ".tooltip:nth-child(1) .description .line > span",
        ],
    },
    TooltipTrigger {
        threshold: TOOLTIP_2_THRESHOLD,
        elements: &[
            ".tooltip:nth-child(2) .icon ion-icon",
            ".tooltip:nth-child(2) .title .line > span",
            ".tooltip:nth-child(2) .description .line > span",
        ],
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Selectors {
    pub section: &'static str,
    pub canvas_container: &'static str,
    pub header1: &'static str,
    pub header1_text: &'static str,
    pub header2: &'static str,
    pub mask: &'static str,
    pub divider: &'static str,
    pub tooltip_titles: &'static str,
    pub tooltip_descriptions: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            section: ".product-overview",
            canvas_container: ".modal-container",
            header1: ".header-1",
            header1_text: ".header-1 h1",
            header2: ".header-2",
            mask: ".circular-mask",
            divider: ".tooltip .divider",
            tooltip_titles: ".tooltip .title h2",
            tooltip_descriptions: ".tooltip .description p",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub model_url: &'static str,
    pub selectors: Selectors,
    pub tooltip_triggers: Vec<TooltipTrigger>,
    pub scroll_distance: f64,
    pub entrance_fraction: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            model_url: "/shaker.glb",
            selectors: Selectors::default(),
            tooltip_triggers: TOOLTIP_TRIGGERS.to_vec(),
            scroll_distance: PIN_SCROLL_DISTANCE_PX,
            entrance_fraction: ENTRANCE_START_FRACTION,
        }
    }
}
