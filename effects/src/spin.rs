//! Idle rotation of the cursor visual.
//!
//! The spin loops `0 → 360` degrees once per period. Pausing freezes the
//! current angle. Resuming first finishes the interrupted turn at loop speed
//! (`θ → 360` over the remaining fraction of a period) and only then restarts
//! the loop from zero, so the visible rotation never jumps or runs backwards.

#[cfg(test)]
#[path = "spin_test.rs"]
mod spin_test;

const FULL_TURN_DEG: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SpinPhase {
    Stopped { angle: f64 },
    Looping { since_ms: f64 },
    Paused { angle: f64 },
    CatchUp { from: f64, since_ms: f64, duration_ms: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleSpin {
    period_ms: f64,
    phase: SpinPhase,
}

impl IdleSpin {
    #[must_use]
    pub fn new(period_ms: f64) -> Self {
        Self { period_ms: period_ms.max(0.0), phase: SpinPhase::Stopped { angle: 0.0 } }
    }

    #[must_use]
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Begin looping from zero.
    pub fn start(&mut self, now_ms: f64) {
        self.phase = if self.period_ms > 0.0 {
            SpinPhase::Looping { since_ms: now_ms }
        } else {
            SpinPhase::Stopped { angle: 0.0 }
        };
    }

    /// Freeze at the current angle. Pausing twice keeps the first angle.
    pub fn pause(&mut self, now_ms: f64) {
        if matches!(self.phase, SpinPhase::Paused { .. }) {
            return;
        }
        self.phase = SpinPhase::Paused { angle: self.angle_at(now_ms) };
    }

    /// Continue from the paused angle to the next full turn, then loop.
    pub fn resume(&mut self, now_ms: f64) {
        let SpinPhase::Paused { angle } = self.phase else {
            return;
        };
        if self.period_ms <= 0.0 {
            self.phase = SpinPhase::Stopped { angle };
            return;
        }
        let remaining = (FULL_TURN_DEG - angle) / FULL_TURN_DEG;
        self.phase = if angle <= 0.0 || remaining <= 0.0 {
            SpinPhase::Looping { since_ms: now_ms }
        } else {
            SpinPhase::CatchUp { from: angle, since_ms: now_ms, duration_ms: self.period_ms * remaining }
        };
    }

    /// Halt permanently at the current angle.
    pub fn stop(&mut self, now_ms: f64) {
        self.phase = SpinPhase::Stopped { angle: self.angle_at(now_ms) };
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, SpinPhase::Paused { .. })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, SpinPhase::Looping { .. } | SpinPhase::CatchUp { .. })
    }

    /// Rotation in degrees, within `[0, 360)`.
    #[must_use]
    pub fn angle_at(&self, now_ms: f64) -> f64 {
        match self.phase {
            SpinPhase::Stopped { angle } | SpinPhase::Paused { angle } => angle,
            SpinPhase::Looping { since_ms } => self.loop_angle(now_ms - since_ms),
            SpinPhase::CatchUp { from, since_ms, duration_ms } => {
                let elapsed = now_ms - since_ms;
                if elapsed >= duration_ms {
                    self.loop_angle(elapsed - duration_ms)
                } else {
                    let t = (elapsed / duration_ms).max(0.0);
                    from + (FULL_TURN_DEG - from) * t
                }
            }
        }
    }

    fn loop_angle(&self, elapsed_ms: f64) -> f64 {
        if self.period_ms <= 0.0 || elapsed_ms <= 0.0 {
            return 0.0;
        }
        FULL_TURN_DEG * (elapsed_ms / self.period_ms).fract()
    }
}
