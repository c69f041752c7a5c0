//! Shared numeric constants for the effects crate.

// ── Target cursor ───────────────────────────────────────────────

/// Gap in pixels between a target's edge and the bracket hugging it.
pub const BORDER_WIDTH_PX: f64 = 3.0;

/// Side length in pixels of one corner bracket marker.
pub const CORNER_SIZE_PX: f64 = 12.0;

/// Duration of the eased follow toward the raw pointer.
pub const MOVE_EASE_MS: f64 = 100.0;

/// Duration of the corner tween when aligning onto a target.
pub const CORNER_ALIGN_MS: f64 = 200.0;

/// Duration of the corner tween back to the idle bracket.
pub const CORNER_RELEASE_MS: f64 = 300.0;

/// Debounce between leaving a target and resuming the idle spin.
pub const RESUME_DEBOUNCE_MS: f64 = 50.0;

/// Default idle spin period in seconds.
pub const DEFAULT_SPIN_DURATION_S: f64 = 2.0;

/// Default selector for interactive targets.
pub const DEFAULT_TARGET_SELECTOR: &str = ".cursor-target";

/// Cursor scale while the primary button is held.
pub const PRESS_CURSOR_SCALE: f64 = 0.9;

/// Centre dot scale while the primary button is held.
pub const PRESS_DOT_SCALE: f64 = 0.7;

pub const PRESS_CURSOR_MS: f64 = 200.0;
pub const PRESS_DOT_MS: f64 = 300.0;

// ── Matrix reveal ───────────────────────────────────────────────

pub const DEFAULT_INITIAL_DELAY_MS: f64 = 200.0;
pub const DEFAULT_SCRAMBLE_MS: f64 = 500.0;
pub const DEFAULT_INTERVAL_MS: f64 = 100.0;

/// Colour token applied to scrambled letters.
pub const DEFAULT_SCRAMBLE_COLOR: &str = "rgb(198, 128, 255)";

/// Fraction of the element that must be visible to count as on screen.
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Observer margin that shrinks the viewport by 10% at top and bottom.
pub const REVEAL_ROOT_MARGIN: &str = "-10% 0px -10% 0px";

/// Placeholder alphabet shown while a letter is scrambled.
pub const SCRAMBLE_GLYPHS: [char; 2] = ['0', '1'];
