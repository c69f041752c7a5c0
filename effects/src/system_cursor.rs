//! Scoped ownership of the document's cursor style.
//!
//! The body cursor style is process-wide state. Every override goes through a
//! [`SystemCursor`] lease: the first acquire records the original style and
//! writes `none`, later acquires only bump a count, and the release that
//! brings the count back to zero restores the recorded style. Two cursor
//! instances sharing one lease therefore cannot leave conflicting overrides
//! behind.

#[cfg(test)]
#[path = "system_cursor_test.rs"]
mod system_cursor_test;

/// Read/write access to the document cursor style.
pub trait CursorStyleHost {
    fn cursor_style(&self) -> String;
    fn set_cursor_style(&self, value: &str);
}

/// Style written while the custom cursor is active.
pub const HIDDEN_CURSOR_STYLE: &str = "none";

/// Reference-counted owner of the system cursor override.
#[derive(Debug, Default)]
pub struct SystemCursor {
    holders: usize,
    original: Option<String>,
}

impl SystemCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the system cursor, recording the prior style on the first acquire.
    pub fn acquire(&mut self, host: &impl CursorStyleHost) {
        if self.holders == 0 {
            self.original = Some(host.cursor_style());
            host.set_cursor_style(HIDDEN_CURSOR_STYLE);
        }
        self.holders += 1;
    }

    /// Drop one hold; the last one restores the recorded style.
    pub fn release(&mut self, host: &impl CursorStyleHost) {
        if self.holders == 0 {
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            if let Some(original) = self.original.take() {
                host.set_cursor_style(&original);
            }
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.holders > 0
    }

    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders
    }
}
