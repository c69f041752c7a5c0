//! Target cursor engine: pointer follower with four snapping corner brackets.
//!
//! The engine is a two-state machine. In [`Idle`](TrackState::Idle) the
//! brackets rest in a small square around the cursor and the visual spins.
//! In [`Tracking`](TrackState::Tracking) one element is the active target:
//! the spin is paused, the brackets hug the target's box, and pointer motion
//! inside the target nudges them with a small parallax drift.
//!
//! Every transition is a single method that performs its complete setup or
//! teardown and reports the DOM side effects it needs as [`CursorAction`]s.
//! The host applies those actions (listeners, system cursor) and drives the
//! engine with [`TargetCursor::tick`] once per animation frame.
//!
//! TIMING
//! ======
//! All times are milliseconds on the host's wall clock. Timers (the resume
//! debounce, the one-frame settle guard, the pending realignment) are stored
//! as deadlines or flags and resolved inside `tick`, so cancelling one is a
//! field reset and teardown cannot leave anything scheduled.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::ConfigError;
use crate::consts::{
    BORDER_WIDTH_PX, CORNER_ALIGN_MS, CORNER_RELEASE_MS, CORNER_SIZE_PX, DEFAULT_SPIN_DURATION_S,
    DEFAULT_TARGET_SELECTOR, MOVE_EASE_MS, PRESS_CURSOR_MS, PRESS_CURSOR_SCALE, PRESS_DOT_MS, PRESS_DOT_SCALE,
    RESUME_DEBOUNCE_MS,
};
use crate::dom::{ElementId, ElementTree};
use crate::geom::{Point, Rect, Size};
use crate::policy::MotionPolicy;
use crate::spin::IdleSpin;
use crate::tween::{Ease, PointTween, Tween};

/// Cursor configuration supplied by the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorConfig {
    /// Selector an element must match to become a target.
    pub target_selector: String,
    /// Seconds per idle revolution, before the device multiplier.
    pub spin_duration_s: f64,
    /// Hide the system pointer while the custom cursor is active.
    pub hide_system_cursor: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            target_selector: DEFAULT_TARGET_SELECTOR.to_owned(),
            spin_duration_s: DEFAULT_SPIN_DURATION_S,
            hide_system_cursor: true,
        }
    }
}

impl CursorConfig {
    /// # Errors
    ///
    /// Returns an error if the spin duration is not a positive finite number
    /// or the selector is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spin_duration_s.is_finite() && self.spin_duration_s > 0.0) {
            return Err(ConfigError::SpinDuration(self.spin_duration_s));
        }
        if self.target_selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        Ok(())
    }
}

/// Corner bracket position, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BottomRight, Self::BottomLeft];

    /// CSS class suffix used by the host markup.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomRight => "br",
            Self::BottomLeft => "bl",
        }
    }
}

/// Resting bracket offsets relative to the cursor centre.
#[must_use]
pub fn idle_offsets() -> [Point; 4] {
    let near = -CORNER_SIZE_PX * 1.5;
    let far = CORNER_SIZE_PX * 0.5;
    [Point::new(near, near), Point::new(far, near), Point::new(far, far), Point::new(near, far)]
}

/// Bracket offsets that frame `rect` from a cursor centred at `cursor`,
/// shifted uniformly by `drift`.
#[must_use]
pub fn target_offsets(rect: Rect, cursor: Point, drift: Point) -> [Point; 4] {
    let left = rect.left - cursor.x - BORDER_WIDTH_PX;
    let right = rect.right() - cursor.x + BORDER_WIDTH_PX - CORNER_SIZE_PX;
    let top = rect.top - cursor.y - BORDER_WIDTH_PX;
    let bottom = rect.bottom() - cursor.y + BORDER_WIDTH_PX - CORNER_SIZE_PX;
    [Point::new(left, top), Point::new(right, top), Point::new(right, bottom), Point::new(left, bottom)]
        .map(|p| p + drift)
}

/// DOM side effects requested by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    HideSystemCursor,
    RestoreSystemCursor,
    /// Attach the window-level move/over/scroll/press listeners.
    ListenWindow,
    UnlistenWindow,
    /// Attach the move and leave listeners scoped to one target.
    ListenTarget(ElementId),
    UnlistenTarget(ElementId),
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub visible: bool,
    pub position: Point,
    pub rotation_deg: f64,
    pub scale: f64,
    pub dot_scale: f64,
    /// Offsets of the corner markers in the cursor's local (rotated) frame,
    /// ordered as [`Corner::ALL`].
    pub corners: [Point; 4],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracking {
    pub target: ElementId,
    /// Set for the first frame after acquisition, which already aligned.
    settling: bool,
    /// Pointer position of the queued realignment, at most one.
    pending_move: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackState {
    Idle,
    Tracking(Tracking),
}

pub struct TargetCursor {
    config: CursorConfig,
    policy: MotionPolicy,
    mounted: bool,
    cursor_hidden: bool,
    position: PointTween,
    scale: Tween,
    dot_scale: Tween,
    corners: [PointTween; 4],
    spin: IdleSpin,
    state: TrackState,
    resume_at_ms: Option<f64>,
}

impl TargetCursor {
    /// # Errors
    ///
    /// Returns an error if `config` fails [`CursorConfig::validate`].
    pub fn new(config: CursorConfig, policy: MotionPolicy) -> Result<Self, ConfigError> {
        config.validate()?;
        let period_ms = config.spin_duration_s * 1000.0 * policy.spin_factor;
        Ok(Self {
            config,
            policy,
            mounted: false,
            cursor_hidden: false,
            position: PointTween::fixed(Point::ZERO),
            scale: Tween::fixed(1.0),
            dot_scale: Tween::fixed(1.0),
            corners: idle_offsets().map(PointTween::fixed),
            spin: IdleSpin::new(period_ms),
            state: TrackState::Idle,
            resume_at_ms: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    /// Whether the device policy lets the cursor run at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.policy.effects_enabled
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn state(&self) -> TrackState {
        self.state
    }

    #[must_use]
    pub fn active_target(&self) -> Option<ElementId> {
        match self.state {
            TrackState::Idle => None,
            TrackState::Tracking(tracking) => Some(tracking.target),
        }
    }

    #[must_use]
    pub fn has_pending_realign(&self) -> bool {
        matches!(self.state, TrackState::Tracking(Tracking { pending_move: Some(_), .. }))
    }

    #[must_use]
    pub fn resume_pending(&self) -> bool {
        self.resume_at_ms.is_some()
    }

    #[must_use]
    pub fn spin(&self) -> &IdleSpin {
        &self.spin
    }

    // --- Lifecycle ---

    /// Place the cursor at the viewport centre and start the idle spin.
    ///
    /// A disabled engine stays inert and requests nothing.
    pub fn mount(&mut self, viewport: Size, now_ms: f64) -> Vec<CursorAction> {
        if !self.policy.effects_enabled || self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        self.position.snap(viewport.center());
        self.corners = idle_offsets().map(PointTween::fixed);
        self.spin.start(now_ms);

        let mut actions = Vec::with_capacity(2);
        if self.config.hide_system_cursor {
            self.cursor_hidden = true;
            actions.push(CursorAction::HideSystemCursor);
        }
        actions.push(CursorAction::ListenWindow);
        actions
    }

    /// Undo everything `mount` and later transitions set up.
    pub fn unmount(&mut self, now_ms: f64) -> Vec<CursorAction> {
        if !self.mounted {
            return Vec::new();
        }
        self.mounted = false;
        let mut actions = Vec::with_capacity(3);
        if let TrackState::Tracking(tracking) = std::mem::replace(&mut self.state, TrackState::Idle) {
            actions.push(CursorAction::UnlistenTarget(tracking.target));
        }
        self.resume_at_ms = None;
        self.spin.stop(now_ms);
        actions.push(CursorAction::UnlistenWindow);
        if self.cursor_hidden {
            self.cursor_hidden = false;
            actions.push(CursorAction::RestoreSystemCursor);
        }
        actions
    }

    // --- Window events ---

    /// Ease the cursor toward the raw pointer position.
    pub fn on_pointer_move(&mut self, pointer: Point, now_ms: f64) {
        if !self.mounted {
            return;
        }
        self.position.retarget(pointer, now_ms, MOVE_EASE_MS, Ease::Power3Out);
    }

    /// Acquire the innermost target on the ancestor chain of `direct`.
    pub fn on_pointer_over(&mut self, tree: &impl ElementTree, direct: ElementId, now_ms: f64) -> Vec<CursorAction> {
        if !self.mounted {
            return Vec::new();
        }
        let Some(candidate) = tree.nearest_match(direct, &self.config.target_selector) else {
            return Vec::new();
        };
        if self.active_target() == Some(candidate) {
            return Vec::new();
        }
        let Some(rect) = tree.bounding_rect(candidate) else {
            return Vec::new();
        };

        let mut actions = Vec::with_capacity(2);
        if let TrackState::Tracking(previous) = self.state {
            actions.push(CursorAction::UnlistenTarget(previous.target));
        }
        self.resume_at_ms = None;
        self.spin.pause(now_ms);
        self.state = TrackState::Tracking(Tracking { target: candidate, settling: true, pending_move: None });
        self.align_corners(rect, None, now_ms);
        actions.push(CursorAction::ListenTarget(candidate));
        actions
    }

    /// Release the target if the point under the cursor left it while scrolling.
    pub fn on_scroll(&mut self, tree: &impl ElementTree, now_ms: f64) -> Vec<CursorAction> {
        let Some(target) = self.active_target() else {
            return Vec::new();
        };
        let under = tree.element_at(self.position.value_at(now_ms));
        if under.is_some_and(|id| tree.contains(target, id)) {
            return Vec::new();
        }
        self.release(now_ms)
    }

    pub fn on_pointer_down(&mut self, now_ms: f64) {
        if !self.mounted {
            return;
        }
        self.dot_scale.retarget(PRESS_DOT_SCALE, now_ms, PRESS_DOT_MS, Ease::Power2Out);
        self.scale.retarget(PRESS_CURSOR_SCALE, now_ms, PRESS_CURSOR_MS, Ease::Power2Out);
    }

    pub fn on_pointer_up(&mut self, now_ms: f64) {
        if !self.mounted {
            return;
        }
        self.dot_scale.retarget(1.0, now_ms, PRESS_DOT_MS, Ease::Power2Out);
        self.scale.retarget(1.0, now_ms, PRESS_CURSOR_MS, Ease::Power2Out);
    }

    // --- Target events ---

    /// Queue a parallax realignment for the next frame.
    ///
    /// Returns `false` when the move was dropped: wrong target, the settle
    /// frame after acquisition, or a realignment already queued.
    pub fn on_target_move(&mut self, target: ElementId, pointer: Point) -> bool {
        let TrackState::Tracking(tracking) = &mut self.state else {
            return false;
        };
        if tracking.target != target || tracking.settling || tracking.pending_move.is_some() {
            return false;
        }
        tracking.pending_move = Some(pointer);
        true
    }

    pub fn on_target_leave(&mut self, target: ElementId, now_ms: f64) -> Vec<CursorAction> {
        if self.active_target() != Some(target) {
            return Vec::new();
        }
        self.release(now_ms)
    }

    // --- Frame ---

    /// Advance deadlines and queued work. Call once per animation frame.
    pub fn tick(&mut self, tree: &impl ElementTree, now_ms: f64) -> Vec<CursorAction> {
        if !self.mounted {
            return Vec::new();
        }
        if let Some(due) = self.resume_at_ms
            && now_ms >= due
        {
            self.resume_at_ms = None;
            if self.active_target().is_none() {
                self.spin.resume(now_ms);
            }
        }

        let TrackState::Tracking(tracking) = self.state else {
            return Vec::new();
        };
        let Some(rect) = tree.bounding_rect(tracking.target) else {
            return self.release(now_ms);
        };
        if let Some(pointer) = tracking.pending_move {
            self.align_corners(rect, Some(pointer), now_ms);
        }
        self.state = TrackState::Tracking(Tracking { settling: false, pending_move: None, ..tracking });
        Vec::new()
    }

    #[must_use]
    pub fn frame(&self, now_ms: f64) -> CursorFrame {
        CursorFrame {
            visible: self.mounted,
            position: self.position.value_at(now_ms),
            rotation_deg: self.spin.angle_at(now_ms),
            scale: self.scale.value_at(now_ms),
            dot_scale: self.dot_scale.value_at(now_ms),
            corners: self.corners.map(|corner| corner.value_at(now_ms)),
        }
    }

    // --- Internals ---

    fn release(&mut self, now_ms: f64) -> Vec<CursorAction> {
        let TrackState::Tracking(tracking) = std::mem::replace(&mut self.state, TrackState::Idle) else {
            return Vec::new();
        };
        for (corner, offset) in self.corners.iter_mut().zip(idle_offsets()) {
            corner.retarget(offset, now_ms, CORNER_RELEASE_MS, Ease::Power3Out);
        }
        self.resume_at_ms = Some(now_ms + RESUME_DEBOUNCE_MS);
        vec![CursorAction::UnlistenTarget(tracking.target)]
    }

    /// Offsets are computed against where the cursor is heading, then rotated
    /// into the cursor's local frame since the markers inherit its rotation.
    fn align_corners(&mut self, rect: Rect, pointer: Option<Point>, now_ms: f64) {
        let cursor = self.position.target();
        let drift = pointer.map_or(Point::ZERO, |p| (p - rect.center()).scale(self.policy.parallax_strength));
        let rotation = self.spin.angle_at(now_ms);
        for (corner, offset) in self.corners.iter_mut().zip(target_offsets(rect, cursor, drift)) {
            corner.retarget(offset.rotate_deg(-rotation), now_ms, CORNER_ALIGN_MS, Ease::Power2Out);
        }
    }
}
