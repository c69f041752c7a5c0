//! Custom pointer overlay driven by the `effects` target cursor engine.
//!
//! ARCHITECTURE
//! ============
//! `CursorHost` owns the engine together with every browser resource the
//! engine asks for through `CursorAction`s: the window listeners, the
//! listeners on the active target, a hold on the page cursor lease, and the animation
//! frame loop. Event closures hold a `Weak` reference back to the host, so
//! dropping the host detaches everything. Each frame the host ticks the
//! engine and writes the returned `CursorFrame` into inline transforms.

#[cfg(test)]
#[path = "target_cursor_test.rs"]
mod target_cursor_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use effects::consts::{DEFAULT_SPIN_DURATION_S, DEFAULT_TARGET_SELECTOR};
use effects::cursor::{Corner, CursorConfig, CursorFrame};
use effects::geom::Point;
use effects::policy::MotionPolicy;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::{Rc, Weak};

#[cfg(feature = "csr")]
use effects::cursor::{CursorAction, TargetCursor as CursorEngine};
#[cfg(feature = "csr")]
use effects::dom::ElementId;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
use crate::util::browser::{BodyCursorStyle, BrowserTree, FrameLoop, Listener, now_ms, viewport_size};
#[cfg(feature = "csr")]
use crate::util::cursor_lease::CursorHold;

/// Transform for the wrapper: position, spin, and press scale.
#[must_use]
pub fn wrapper_transform(frame: &CursorFrame) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) scale({:.3})",
        frame.position.x, frame.position.y, frame.rotation_deg, frame.scale
    )
}

#[must_use]
pub fn dot_transform(scale: f64) -> String {
    format!("translate(-50%, -50%) scale({scale:.3})")
}

/// Transform for one corner marker, in the wrapper's rotated frame.
#[must_use]
pub fn corner_transform(offset: Point) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

#[must_use]
pub fn corner_class(corner: Corner) -> String {
    format!("target-cursor-corner corner-{}", corner.class_suffix())
}

#[cfg(feature = "csr")]
fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

#[cfg(feature = "csr")]
struct Visuals {
    wrapper: web_sys::HtmlElement,
    dot: web_sys::HtmlElement,
    corners: [web_sys::HtmlElement; 4],
}

#[cfg(feature = "csr")]
impl Visuals {
    fn paint(&self, frame: &CursorFrame) {
        set_style(&self.wrapper, "opacity", if frame.visible { "1" } else { "0" });
        set_style(&self.wrapper, "transform", &wrapper_transform(frame));
        set_style(&self.dot, "transform", &dot_transform(frame.dot_scale));
        for (el, offset) in self.corners.iter().zip(frame.corners) {
            set_style(el, "transform", &corner_transform(offset));
        }
    }
}

#[cfg(feature = "csr")]
type SharedHost = Rc<RefCell<CursorHost>>;

#[cfg(feature = "csr")]
struct CursorHost {
    engine: CursorEngine,
    tree: BrowserTree,
    cursor_hold: Option<CursorHold<BodyCursorStyle>>,
    visuals: Visuals,
    window_listeners: Vec<Listener>,
    target_listeners: Option<(ElementId, Vec<Listener>)>,
    /// Listeners detached during an event dispatch, dropped on the next frame.
    retired: Vec<Listener>,
    frame_loop: Option<FrameLoop>,
}

#[cfg(feature = "csr")]
impl CursorHost {
    fn start(engine: CursorEngine, visuals: Visuals) -> SharedHost {
        let host = Rc::new(RefCell::new(Self {
            engine,
            tree: BrowserTree,
            cursor_hold: None,
            visuals,
            window_listeners: Vec::new(),
            target_listeners: None,
            retired: Vec::new(),
            frame_loop: None,
        }));

        let actions = host.borrow_mut().engine.mount(viewport_size(), now_ms());
        apply(&host, actions);

        let weak = Rc::downgrade(&host);
        let frame_loop = FrameLoop::start(move |now| {
            if let Some(host) = weak.upgrade() {
                on_frame(&host, now);
            }
        });
        if frame_loop.is_none() {
            log::warn!("target cursor: requestAnimationFrame unavailable");
        }
        host.borrow_mut().frame_loop = frame_loop;
        host
    }

    fn shutdown(host: &SharedHost) {
        let actions = host.borrow_mut().engine.unmount(now_ms());
        apply(host, actions);
        let mut host = host.borrow_mut();
        host.frame_loop = None;
        host.target_listeners = None;
        host.retired.clear();
        host.cursor_hold = None;
    }
}

#[cfg(feature = "csr")]
fn on_frame(host: &SharedHost, now: f64) {
    let actions = {
        let mut guard = host.borrow_mut();
        let tree = guard.tree;
        guard.engine.tick(&tree, now)
    };
    apply(host, actions);
    let mut guard = host.borrow_mut();
    guard.retired.clear();
    let frame = guard.engine.frame(now);
    guard.visuals.paint(&frame);
}

#[cfg(feature = "csr")]
fn apply(host: &SharedHost, actions: Vec<CursorAction>) {
    for action in actions {
        match action {
            CursorAction::HideSystemCursor => {
                let mut guard = host.borrow_mut();
                if guard.cursor_hold.is_none() {
                    guard.cursor_hold = Some(CursorHold::acquire(BodyCursorStyle));
                }
            }
            CursorAction::RestoreSystemCursor => {
                host.borrow_mut().cursor_hold = None;
            }
            CursorAction::ListenWindow => {
                let listeners = window_listeners(Rc::downgrade(host));
                host.borrow_mut().window_listeners = listeners;
            }
            CursorAction::UnlistenWindow => {
                let mut guard = host.borrow_mut();
                let listeners = std::mem::take(&mut guard.window_listeners);
                guard.retired.extend(listeners);
            }
            CursorAction::ListenTarget(id) => {
                let listeners = target_listeners(Rc::downgrade(host), id);
                let mut guard = host.borrow_mut();
                if let Some((_, old)) = guard.target_listeners.replace((id, listeners)) {
                    guard.retired.extend(old);
                }
            }
            CursorAction::UnlistenTarget(id) => {
                let mut guard = host.borrow_mut();
                if guard.target_listeners.as_ref().is_some_and(|(active, _)| *active == id)
                    && let Some((_, old)) = guard.target_listeners.take()
                {
                    guard.retired.extend(old);
                }
            }
        }
    }
}

#[cfg(feature = "csr")]
fn pointer_of(event: &web_sys::Event) -> Option<Point> {
    let mouse = event.dyn_ref::<web_sys::MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

#[cfg(feature = "csr")]
fn window_listeners(weak: Weak<RefCell<CursorHost>>) -> Vec<Listener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let target: &web_sys::EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(5);

    let host = weak.clone();
    listeners.extend(Listener::new(target, "mousemove", move |event| {
        if let (Some(host), Some(pointer)) = (host.upgrade(), pointer_of(&event)) {
            host.borrow_mut().engine.on_pointer_move(pointer, now_ms());
        }
    }));

    let host = weak.clone();
    listeners.extend(Listener::new(target, "mouseover", move |event| {
        let Some(host) = host.upgrade() else {
            return;
        };
        let Some(el) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let actions = {
            let mut guard = host.borrow_mut();
            let tree = guard.tree;
            let direct = tree.handle_for(&el);
            guard.engine.on_pointer_over(&tree, direct, now_ms())
        };
        apply(&host, actions);
    }));

    let host = weak.clone();
    listeners.extend(Listener::new(target, "scroll", move |_| {
        let Some(host) = host.upgrade() else {
            return;
        };
        let actions = {
            let mut guard = host.borrow_mut();
            let tree = guard.tree;
            guard.engine.on_scroll(&tree, now_ms())
        };
        apply(&host, actions);
    }));

    let host = weak.clone();
    listeners.extend(Listener::new(target, "mousedown", move |_| {
        if let Some(host) = host.upgrade() {
            host.borrow_mut().engine.on_pointer_down(now_ms());
        }
    }));

    listeners.extend(Listener::new(target, "mouseup", move |_| {
        if let Some(host) = weak.upgrade() {
            host.borrow_mut().engine.on_pointer_up(now_ms());
        }
    }));

    listeners
}

#[cfg(feature = "csr")]
fn target_listeners(weak: Weak<RefCell<CursorHost>>, id: ElementId) -> Vec<Listener> {
    let Some(el) = BrowserTree.resolve(id) else {
        return Vec::new();
    };
    let target: &web_sys::EventTarget = el.as_ref();
    let mut listeners = Vec::with_capacity(2);

    let host = weak.clone();
    listeners.extend(Listener::new(target, "mousemove", move |event| {
        if let (Some(host), Some(pointer)) = (host.upgrade(), pointer_of(&event)) {
            host.borrow_mut().engine.on_target_move(id, pointer);
        }
    }));

    listeners.extend(Listener::new(target, "mouseleave", move |_| {
        let Some(host) = weak.upgrade() else {
            return;
        };
        let actions = host.borrow_mut().engine.on_target_leave(id, now_ms());
        apply(&host, actions);
    }));

    listeners
}

/// Fixed overlay that replaces the system pointer with a spinning bracket
/// cursor. Renders nothing when the motion policy disables effects.
#[component]
pub fn TargetCursor(
    #[prop(optional, into)] target_selector: Option<String>,
    #[prop(optional)] spin_duration_s: Option<f64>,
    #[prop(default = true)] hide_system_cursor: bool,
) -> impl IntoView {
    let policy = expect_context::<MotionPolicy>();
    if !policy.effects_enabled {
        return ().into_any();
    }

    let config = CursorConfig {
        target_selector: target_selector.unwrap_or_else(|| DEFAULT_TARGET_SELECTOR.to_owned()),
        spin_duration_s: spin_duration_s.unwrap_or(DEFAULT_SPIN_DURATION_S),
        hide_system_cursor,
    };

    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let dot_ref = NodeRef::<leptos::html::Div>::new();
    let corner_refs: [NodeRef<leptos::html::Div>; 4] = std::array::from_fn(|_| NodeRef::new());

    #[cfg(feature = "csr")]
    {
        let host = StoredValue::new_local(None::<SharedHost>);
        Effect::new(move || {
            let (Some(wrapper), Some(dot)) = (wrapper_ref.get(), dot_ref.get()) else {
                return;
            };
            let [Some(tl), Some(tr), Some(br), Some(bl)] = corner_refs.map(|r| r.get()) else {
                return;
            };
            if host.with_value(Option::is_some) {
                return;
            }
            let engine = match CursorEngine::new(config.clone(), policy) {
                Ok(engine) => engine,
                Err(err) => {
                    log::warn!("target cursor disabled: {err}");
                    return;
                }
            };
            let visuals = Visuals {
                wrapper: wrapper.into(),
                dot: dot.into(),
                corners: [tl.into(), tr.into(), br.into(), bl.into()],
            };
            host.set_value(Some(CursorHost::start(engine, visuals)));
        });
        on_cleanup(move || {
            if let Some(Some(host)) = host.try_update_value(Option::take) {
                CursorHost::shutdown(&host);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = config;

    let [tl_ref, tr_ref, br_ref, bl_ref] = corner_refs;
    view! {
        <div class="target-cursor-wrapper" node_ref=wrapper_ref aria-hidden="true">
            <div class="target-cursor-dot" node_ref=dot_ref></div>
            <div class=corner_class(Corner::TopLeft) node_ref=tl_ref></div>
            <div class=corner_class(Corner::TopRight) node_ref=tr_ref></div>
            <div class=corner_class(Corner::BottomRight) node_ref=br_ref></div>
            <div class=corner_class(Corner::BottomLeft) node_ref=bl_ref></div>
        </div>
    }
    .into_any()
}
