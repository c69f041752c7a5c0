//! Interaction engines for the portfolio site.
//!
//! This crate holds the stateful parts of the page effects: the target cursor
//! that tracks the pointer and snaps corner brackets onto interactive
//! elements, and the matrix text reveal that scrambles and resolves headings
//! letter by letter. Nothing here touches the browser. The host layer feeds
//! events and a millisecond clock in, and applies the frames and actions that
//! come back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`cursor`] | Target cursor state machine ([`cursor::TargetCursor`]) |
//! | [`reveal`] | Matrix text reveal sequence ([`reveal::MatrixReveal`]) |
//! | [`spin`] | Idle rotation with pause and catch-up resume |
//! | [`tween`] | Easing curves and retargetable tweens |
//! | [`geom`] | Points, sizes, and rectangles in viewport pixels |
//! | [`dom`] | Opaque element handles and the [`dom::ElementTree`] seam |
//! | [`policy`] | Device tier and the motion policy derived from it |
//! | [`system_cursor`] | Scoped lease over the document cursor style |
//! | [`consts`] | Shared timing and size constants |

pub mod consts;
pub mod cursor;
pub mod dom;
pub mod geom;
pub mod policy;
pub mod reveal;
pub mod spin;
pub mod system_cursor;
pub mod tween;

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("spin duration must be a positive number of seconds, got {0}")]
    SpinDuration(f64),
    #[error("target selector must not be empty")]
    EmptySelector,
    #[error("{field} must be a non-negative number of milliseconds, got {value}")]
    Timing { field: &'static str, value: f64 },
}
