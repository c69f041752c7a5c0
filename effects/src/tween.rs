//! Time-based tweens evaluated against a caller-supplied millisecond clock.
//!
//! A tween never owns a timer. It records where it started, where it is
//! heading, and when, so any frame can sample it with `value_at(now)`.
//! Retargeting starts the new leg from the value sampled at the retarget
//! instant, which keeps motion continuous when targets change mid-flight.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use crate::geom::Point;

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// Cubic ease-out, `1 - (1 - t)^3`.
    Power2Out,
    /// Quartic ease-out, `1 - (1 - t)^4`.
    Power3Out,
}

impl Ease {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// A scalar tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl Tween {
    /// A tween resting at `value`.
    #[must_use]
    pub fn fixed(value: f64) -> Self {
        Self { from: value, to: value, start_ms: 0.0, duration_ms: 0.0, ease: Ease::Linear }
    }

    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// Final resting value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }

    /// Start a new leg toward `to` from wherever the tween is at `now_ms`.
    pub fn retarget(&mut self, to: f64, now_ms: f64, duration_ms: f64, ease: Ease) {
        self.from = self.value_at(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms.max(0.0);
        self.ease = ease;
    }

    /// Jump to `value` with no transition.
    pub fn snap(&mut self, value: f64) {
        *self = Self::fixed(value);
    }
}

/// Two scalar tweens driven together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointTween {
    x: Tween,
    y: Tween,
}

impl PointTween {
    #[must_use]
    pub fn fixed(p: Point) -> Self {
        Self { x: Tween::fixed(p.x), y: Tween::fixed(p.y) }
    }

    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> Point {
        Point::new(self.x.value_at(now_ms), self.y.value_at(now_ms))
    }

    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn retarget(&mut self, to: Point, now_ms: f64, duration_ms: f64, ease: Ease) {
        self.x.retarget(to.x, now_ms, duration_ms, ease);
        self.y.retarget(to.y, now_ms, duration_ms, ease);
    }

    pub fn snap(&mut self, p: Point) {
        *self = Self::fixed(p);
    }
}
