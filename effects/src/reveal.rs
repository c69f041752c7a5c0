//! Matrix text reveal: letters flash a binary glyph, then resolve in a cascade.
//!
//! Step `i` scrambles letter `i` and schedules two follow-ups: its own
//! resolution after the scramble duration, and step `i + 1` after the
//! inter-letter interval. The interval is measured from when a step starts,
//! so adjacent scramble windows overlap whenever the scramble outlasts it.
//!
//! Scheduled work lives in a queue of `(due, task)` entries that
//! [`MatrixReveal::tick`] drains in due order. A reset drops the whole queue,
//! so no resolution from an abandoned play can land after it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use rand::Rng;

use crate::ConfigError;
use crate::consts::{
    DEFAULT_INITIAL_DELAY_MS, DEFAULT_INTERVAL_MS, DEFAULT_SCRAMBLE_COLOR, DEFAULT_SCRAMBLE_MS, SCRAMBLE_GLYPHS,
};

/// Reveal configuration for one block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub text: String,
    /// Delay between the trigger and the first letter.
    pub initial_delay_ms: f64,
    /// How long each letter stays scrambled.
    pub scramble_ms: f64,
    /// Gap between the starts of consecutive letters.
    pub interval_ms: f64,
    /// Wait for the element to scroll into view, and replay on every re-entry.
    pub scroll_triggered: bool,
    /// Style token the host applies to scrambled letters.
    pub scramble_color: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            scramble_ms: DEFAULT_SCRAMBLE_MS,
            interval_ms: DEFAULT_INTERVAL_MS,
            scroll_triggered: false,
            scramble_color: DEFAULT_SCRAMBLE_COLOR.to_owned(),
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Timing`] for the first timing that is negative
    /// or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("initial_delay_ms", self.initial_delay_ms),
            ("scramble_ms", self.scramble_ms),
            ("interval_ms", self.interval_ms),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Timing { field, value });
            }
        }
        Ok(())
    }
}

/// One character of the revealed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub source: char,
    pub shown: char,
    pub scrambled: bool,
    pub is_space: bool,
}

impl Letter {
    #[must_use]
    pub fn new(source: char) -> Self {
        Self { source, shown: source, scrambled: false, is_space: source == ' ' }
    }

    fn scramble(&mut self, glyph: char) {
        self.shown = glyph;
        self.scrambled = true;
    }

    fn resolve(&mut self) {
        self.shown = self.source;
        self.scrambled = false;
    }
}

/// Split `text` into unscrambled letters.
#[must_use]
pub fn split_letters(text: &str) -> Vec<Letter> {
    text.chars().map(Letter::new).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Task {
    Step(usize),
    Resolve(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Scheduled {
    due_ms: f64,
    /// Insertion order, breaks ties between equal deadlines.
    seq: u64,
    task: Task,
}

pub struct MatrixReveal {
    config: RevealConfig,
    animate: bool,
    letters: Vec<Letter>,
    queue: Vec<Scheduled>,
    next_seq: u64,
    mounted: bool,
    visible: bool,
    running: bool,
    has_played: bool,
}

impl MatrixReveal {
    /// With `animate` false the text is shown as-is and never scrambles.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`RevealConfig::validate`].
    pub fn new(config: RevealConfig, animate: bool) -> Result<Self, ConfigError> {
        config.validate()?;
        let letters = split_letters(&config.text);
        Ok(Self {
            config,
            animate,
            letters,
            queue: Vec::new(),
            next_seq: 0,
            mounted: false,
            visible: false,
            running: false,
            has_played: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Currently displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|letter| letter.shown).collect()
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animate
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn has_played(&self) -> bool {
        self.has_played
    }

    /// Earliest pending deadline, for the host's single timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.queue.iter().map(|entry| entry.due_ms).reduce(f64::min)
    }

    /// Start the immediate-mode play. Scroll-triggered reveals wait for
    /// [`set_visible`](Self::set_visible).
    pub fn mount(&mut self, now_ms: f64) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        if self.animate && !self.config.scroll_triggered {
            self.start(now_ms);
        }
    }

    /// Cancel everything outstanding and show the final text.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.reset();
    }

    /// Feed a visibility transition from the host's observer.
    pub fn set_visible(&mut self, visible: bool, now_ms: f64) {
        if !self.mounted || !self.animate || !self.config.scroll_triggered || visible == self.visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.start(now_ms);
        } else if self.has_played || self.running {
            self.reset();
        }
    }

    /// Run every task due at or before `now_ms`. Returns whether any letter changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        let mut changed = false;
        while let Some(entry) = self.pop_due(now_ms) {
            match entry.task {
                Task::Step(index) => self.step(index, entry.due_ms, rng),
                Task::Resolve(index) => {
                    if let Some(letter) = self.letters.get_mut(index) {
                        letter.resolve();
                    }
                }
            }
            changed = true;
        }
        changed
    }

    fn start(&mut self, now_ms: f64) {
        if self.running || self.has_played {
            return;
        }
        self.running = true;
        self.has_played = true;
        self.schedule(now_ms + self.config.initial_delay_ms, Task::Step(0));
    }

    fn step<R: Rng + ?Sized>(&mut self, index: usize, at_ms: f64, rng: &mut R) {
        if let Some(letter) = self.letters.get_mut(index)
            && !letter.is_space
        {
            letter.scramble(SCRAMBLE_GLYPHS[usize::from(rng.random_bool(0.5))]);
            self.schedule(at_ms + self.config.scramble_ms, Task::Resolve(index));
        }
        if index + 1 < self.letters.len() {
            self.schedule(at_ms + self.config.interval_ms, Task::Step(index + 1));
        } else {
            self.running = false;
        }
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.running = false;
        self.has_played = false;
        for letter in &mut self.letters {
            letter.resolve();
        }
    }

    fn schedule(&mut self, due_ms: f64, task: Task) {
        self.queue.push(Scheduled { due_ms, seq: self.next_seq, task });
        self.next_seq += 1;
    }

    fn pop_due(&mut self, now_ms: f64) -> Option<Scheduled> {
        let (position, _) = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))?;
        Some(self.queue.swap_remove(position))
    }
}
