//! Matrix-style text reveal hosted on the `effects` reveal engine.
//!
//! The engine keeps its schedule as deadlines. The host arms one
//! `gloo-timers` timeout for the earliest deadline, ticks the engine when it
//! fires, publishes the letters to a signal, and re-arms. The host owns that
//! timeout, so re-arming or shutting down cancels whatever was pending.

#[cfg(test)]
#[path = "matrix_text_test.rs"]
mod matrix_text_test;

use leptos::prelude::*;

use effects::policy::MotionPolicy;
use effects::reveal::{Letter, RevealConfig, split_letters};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use effects::consts::{REVEAL_ROOT_MARGIN, REVEAL_VISIBILITY_THRESHOLD};
#[cfg(feature = "csr")]
use effects::reveal::MatrixReveal;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use rand::SeedableRng;
#[cfg(feature = "csr")]
use rand::rngs::SmallRng;

#[cfg(feature = "csr")]
use crate::util::browser::{VisibilityObserver, now_ms, supports_intersection_observer};

/// Non-breaking space keeps word gaps from collapsing between inline spans.
const SPACE_GLYPH: char = '\u{a0}';

#[must_use]
pub fn display_char(letter: &Letter) -> char {
    if letter.is_space { SPACE_GLYPH } else { letter.shown }
}

#[must_use]
pub fn letter_class(letter: &Letter) -> &'static str {
    if letter.scrambled { "matrix-letter scrambled" } else { "matrix-letter" }
}

/// Inline style for a letter; scrambled letters glow in `color`.
#[must_use]
pub fn letter_style(letter: &Letter, color: &str) -> String {
    if letter.scrambled {
        format!("color: {color}; text-shadow: 0 0 8px {color};")
    } else {
        String::new()
    }
}

/// Whole milliseconds from `now_ms` until `due`, never negative.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn timer_delay_ms(due: f64, now_ms: f64) -> u32 {
    (due - now_ms).max(0.0).ceil().min(f64::from(u32::MAX)) as u32
}

#[cfg(feature = "csr")]
type SharedReveal = Rc<RefCell<RevealHost>>;

#[cfg(feature = "csr")]
struct RevealHost {
    engine: MatrixReveal,
    rng: SmallRng,
    letters: RwSignal<Vec<Letter>>,
    timer: Option<Timeout>,
    observer: Option<VisibilityObserver>,
}

#[cfg(feature = "csr")]
impl RevealHost {
    fn start(engine: MatrixReveal, letters: RwSignal<Vec<Letter>>, el: &web_sys::Element) -> SharedReveal {
        let scroll_triggered = engine.config().scroll_triggered && engine.is_animated();
        let host = Rc::new(RefCell::new(Self {
            engine,
            rng: SmallRng::seed_from_u64(now_ms().to_bits()),
            letters,
            timer: None,
            observer: None,
        }));
        host.borrow_mut().engine.mount(now_ms());

        if scroll_triggered {
            let weak = Rc::downgrade(&host);
            let observer =
                VisibilityObserver::observe(el, REVEAL_VISIBILITY_THRESHOLD, REVEAL_ROOT_MARGIN, move |visible| {
                    if let Some(host) = weak.upgrade() {
                        host.borrow_mut().engine.set_visible(visible, now_ms());
                        pump(&host);
                    }
                });
            host.borrow_mut().observer = observer;
        }
        pump(&host);
        host
    }

    fn shutdown(host: &SharedReveal) {
        let letters = {
            let mut guard = host.borrow_mut();
            guard.timer = None;
            guard.observer = None;
            guard.engine.unmount();
            guard.letters
        };
        let _ = letters.try_set(host.borrow().engine.letters().to_vec());
    }
}

/// Run due work, publish letters if they moved, and arm the next timeout.
#[cfg(feature = "csr")]
fn pump(host: &SharedReveal) {
    let (signal, letters, deadline) = {
        let mut guard = host.borrow_mut();
        let RevealHost { engine, rng, .. } = &mut *guard;
        let ticked = engine.tick(now_ms(), rng);
        let signal = guard.letters;
        let stale = ticked || signal.with_untracked(|shown| shown.as_slice() != guard.engine.letters());
        (signal, stale.then(|| guard.engine.letters().to_vec()), guard.engine.next_deadline())
    };
    if let Some(letters) = letters {
        signal.set(letters);
    }
    let timer = deadline.map(|due| {
        let weak = Rc::downgrade(host);
        Timeout::new(timer_delay_ms(due, now_ms()), move || {
            if let Some(host) = weak.upgrade() {
                pump(&host);
            }
        })
    });
    // Replacing the slot drops, and so cancels, any earlier timeout.
    host.borrow_mut().timer = timer;
}

/// Text that scrambles into binary glyphs and resolves letter by letter.
///
/// With `scroll_triggered` the reveal waits until the text is on screen and
/// replays after it leaves and comes back. Under reduced motion, or without
/// `IntersectionObserver` in scroll mode, the final text renders as is.
#[component]
pub fn MatrixText(
    #[prop(into)] text: String,
    #[prop(optional)] initial_delay_ms: Option<f64>,
    #[prop(optional)] scramble_ms: Option<f64>,
    #[prop(optional)] interval_ms: Option<f64>,
    #[prop(optional)] scroll_triggered: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let policy = expect_context::<MotionPolicy>();
    let defaults = RevealConfig::with_text(text);
    let config = RevealConfig {
        initial_delay_ms: initial_delay_ms.unwrap_or(defaults.initial_delay_ms),
        scramble_ms: scramble_ms.unwrap_or(defaults.scramble_ms),
        interval_ms: interval_ms.unwrap_or(defaults.interval_ms),
        scroll_triggered,
        ..defaults
    };
    let letters = RwSignal::new(split_letters(&config.text));
    let color = config.scramble_color.clone();
    let label = config.text.clone();
    let root_class = format!("matrix-text {class}");
    let root_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "csr")]
    {
        let animate = policy.animate_text && (!scroll_triggered || supports_intersection_observer());
        let host = StoredValue::new_local(None::<SharedReveal>);
        Effect::new(move || {
            let Some(root) = root_ref.get() else {
                return;
            };
            if host.with_value(Option::is_some) {
                return;
            }
            match MatrixReveal::new(config.clone(), animate) {
                Ok(engine) => host.set_value(Some(RevealHost::start(engine, letters, &root))),
                Err(err) => log::warn!("matrix text shown without animation: {err}"),
            }
        });
        on_cleanup(move || {
            if let Some(Some(host)) = host.try_update_value(Option::take) {
                RevealHost::shutdown(&host);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (policy, config);

    view! {
        <span class=root_class node_ref=root_ref aria-label=label>
            {move || {
                letters
                    .get()
                    .into_iter()
                    .map(|letter| {
                        view! {
                            <span class=letter_class(&letter) style=letter_style(&letter, &color) aria-hidden="true">
                                {display_char(&letter)}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </span>
    }
}
