// Time-based property tweens with overwrite-on-retarget semantics.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub duration: f64,
    pub ease: Ease,
    /// Delay added per element index when applied to a group.
    pub stagger: f64,
}

impl TweenSpec {
    pub const fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            stagger: 0.0,
        }
    }

    pub const fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    #[inline]
    pub fn delay_for(&self, index: usize) -> f64 {
        stagger_delay(index, self.stagger)
    }
}

#[inline]
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn sample(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return if now >= self.start { self.to } else { self.from };
        }
        let t = (now - self.start) / self.duration;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.start + self.duration.max(0.0)
    }
}

/// A single animated scalar: its resting value and an optional running tween.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenTrack {
    value: f64,
    active: Option<Tween>,
}

impl TweenTrack {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            active: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Where the track ends up if left alone.
    pub fn destination(&self) -> f64 {
        self.active.map(|t| t.to).unwrap_or(self.value)
    }

    /// Replace any running tween with one from the current value to `to`.
    ///
    /// Returns false when the track is already at or heading to `to`.
    pub fn retarget(&mut self, to: f64, now: f64, delay: f64, duration: f64, ease: Ease) -> bool {
        if self.destination() == to {
            return false;
        }
        self.active = Some(Tween {
            from: self.value,
            to,
            start: now + delay.max(0.0),
            duration,
            ease,
        });
        true
    }

    /// Set immediately, cancelling any running tween.
    pub fn set(&mut self, value: f64) {
        self.active = None;
        self.value = value;
    }

    /// Advance to `now`; returns the new value when it changed.
    pub fn advance(&mut self, now: f64) -> Option<f64> {
        let tween = self.active?;
        if now < tween.start {
            return None;
        }
        let next = if tween.is_finished(now) {
            self.active = None;
            tween.to
        } else {
            tween.sample(now)
        };
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(next)
    }
}
