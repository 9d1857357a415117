// CSS encoding of animated numeric properties.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// `transform: translateX(v%)`
    TranslateXPercent,
    /// `transform: translateY(v%)`
    TranslateYPercent,
    /// `transform: scaleX(v / 100)`
    ScaleXPercent,
    /// `clip-path: circle(v% at 50% 50%)`
    ClipCircle,
    /// `transform: translateY(vpx)`
    TranslateYPx,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::ClipCircle => "clip-path",
            _ => "transform",
        }
    }

    pub fn css_value(self, v: f64) -> String {
        let v = round_css(v);
        match self {
            StyleProperty::TranslateXPercent => format!("translateX({}%)", v),
            StyleProperty::TranslateYPercent => format!("translateY({}%)", v),
            StyleProperty::ScaleXPercent => format!("scaleX({})", round_css(v / 100.0)),
            StyleProperty::ClipCircle => format!("circle({}% at 50% 50%)", v),
            StyleProperty::TranslateYPx => format!("translateY({}px)", v),
        }
    }
}

// Four decimals is below a device pixel at any sane size; also folds -0 into 0.
fn round_css(v: f64) -> f64 {
    let r = (v * 10_000.0).round() / 10_000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
