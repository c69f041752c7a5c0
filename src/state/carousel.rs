//! Skills carousel navigation.
//!
//! Autoplay advances one slide per tick while enabled. Explicit navigation
//! and hovering both stop it; leaving the carousel turns it back on.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

pub const AUTOPLAY_INTERVAL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
    pub autoplay: bool,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, autoplay: true }
    }

    /// Autoplay tick.
    pub fn advance(&mut self) {
        if self.autoplay {
            self.step_forward();
        }
    }

    pub fn next(&mut self) {
        self.step_forward();
        self.autoplay = false;
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.autoplay = false;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
        self.autoplay = false;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.autoplay = !hovered;
    }

    /// Horizontal track offset as a CSS transform.
    #[must_use]
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }

    fn step_forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}
