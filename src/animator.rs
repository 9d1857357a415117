use crate::core::{StyleProperty, TweenSpec, TweenTrack};
use crate::dom;
use fnv::FnvHashMap;
use instant::Instant;
use web_sys as web;

struct Track {
    element: web::HtmlElement,
    property: StyleProperty,
    state: TweenTrack,
}

/// Drives tweened style properties on named groups of elements.
///
/// Retargeting a group overwrites whatever its tracks were doing, starting
/// from their current values. `tick` writes the values that moved.
pub struct Animator {
    epoch: Instant,
    tracks: Vec<Track>,
    groups: FnvHashMap<String, Vec<usize>>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            tracks: Vec::new(),
            groups: FnvHashMap::default(),
        }
    }

    #[inline]
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Register `elements` under `name`, writing `initial` straight away.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        elements: Vec<web::HtmlElement>,
        property: StyleProperty,
        initial: f64,
    ) {
        let ids = self.groups.entry(name.into()).or_default();
        for element in elements {
            dom::apply_style(&element, property, initial);
            ids.push(self.tracks.len());
            self.tracks.push(Track {
                element,
                property,
                state: TweenTrack::new(initial),
            });
        }
    }

    pub fn group_len(&self, name: &str) -> usize {
        self.groups.get(name).map(Vec::len).unwrap_or(0)
    }

    /// Tween every track in `name` to `to`; unknown or empty groups are ignored.
    pub fn to(&mut self, name: &str, to: f64, spec: TweenSpec) {
        let now = self.now();
        let Some(ids) = self.groups.get(name) else {
            return;
        };
        for (i, &id) in ids.iter().enumerate() {
            self.tracks[id]
                .state
                .retarget(to, now, spec.delay_for(i), spec.duration, spec.ease);
        }
    }

    pub fn tick(&mut self) {
        let now = self.now();
        for track in &mut self.tracks {
            if let Some(v) = track.state.advance(now) {
                dom::apply_style(&track.element, track.property, v);
            }
        }
    }
}
