//! Browser glue for the interaction engines and page components.
//!
//! The engines in the `effects` crate see the document only through the
//! [`ElementTree`](effects::dom::ElementTree) and
//! [`CursorStyleHost`](effects::system_cursor::CursorStyleHost) seams. This
//! module implements those seams over `web_sys`, plus the RAII wrappers the
//! hosts use so that dropping a host detaches everything it attached.
//!
//! Functions without a `csr` gate are called from component event handlers
//! and degrade to no-ops natively.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::collections::HashMap;
#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

use effects::dom::ElementId;
#[cfg(feature = "csr")]
use effects::dom::ElementTree;
#[cfg(feature = "csr")]
use effects::geom::{Point, Rect, Size};
#[cfg(feature = "csr")]
use effects::system_cursor::CursorStyleHost;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Wall clock in milliseconds, the time base fed to every engine.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Calendar year for the footer.
pub fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        2025
    }
}

/// Smooth-scroll to the element matching `selector` (page CSS sets the
/// scroll behaviour).
pub fn scroll_to_section(selector: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = document().and_then(|d| d.query_selector(selector).ok().flatten()) {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selector;
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

#[cfg(feature = "csr")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "csr")]
pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[cfg(feature = "csr")]
pub fn viewport_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::new(0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(width, height)
}

#[cfg(feature = "csr")]
pub fn supports_intersection_observer() -> bool {
    web_sys::window()
        .is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
}

// =============================================================
// Element handles
// =============================================================

/// Registry threshold past which elements that left the document are pruned.
pub const HANDLE_PRUNE_AT: usize = 256;

/// Live handle table behind [`BrowserTree`].
///
/// Ids are never reused. Once the table reaches its limit, entries whose
/// element fails the `is_live` check are dropped before a new id is issued.
pub struct HandleRegistry<E> {
    next: u64,
    limit: usize,
    is_live: fn(&E) -> bool,
    live: HashMap<u64, E>,
}

impl<E> HandleRegistry<E> {
    #[must_use]
    pub fn new(limit: usize, is_live: fn(&E) -> bool) -> Self {
        Self { next: 1, limit, is_live, live: HashMap::new() }
    }

    /// Register `el` under a fresh id.
    pub fn issue(&mut self, el: E) -> ElementId {
        if self.live.len() >= self.limit {
            let is_live = self.is_live;
            self.live.retain(|_, el| is_live(el));
        }
        let id = self.next;
        self.next += 1;
        self.live.insert(id, el);
        ElementId(id)
    }

    /// Put `el` back under an id it was issued earlier, if it was pruned.
    pub fn restore(&mut self, id: ElementId, el: E) {
        self.live.entry(id.0).or_insert(el);
    }

    /// The element behind `id`, while it is still live.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&E> {
        self.live.get(&id.0).filter(|el| (self.is_live)(el))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(feature = "csr")]
thread_local! {
    static HANDLES: RefCell<HandleRegistry<web_sys::Element>> =
        RefCell::new(HandleRegistry::new(HANDLE_PRUNE_AT, |el: &web_sys::Element| el.is_connected()));
    static HANDLE_OF: js_sys::WeakMap = js_sys::WeakMap::new();
}

/// [`ElementTree`] over the live document.
///
/// Handles live in a thread-local registry keyed both ways, so the page's
/// markup is never touched and a lookup costs a map probe. An element that
/// leaves the document stops resolving.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTree;

#[cfg(feature = "csr")]
impl BrowserTree {
    /// Handle for `el`, issuing a fresh one on first sight.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn handle_for(&self, el: &web_sys::Element) -> ElementId {
        let key: &js_sys::Object = el.as_ref();
        let known = HANDLE_OF.with(|map| map.get(key).as_f64());
        HANDLES.with(|handles| {
            let mut handles = handles.borrow_mut();
            if let Some(raw) = known {
                let id = ElementId(raw as u64);
                handles.restore(id, el.clone());
                return id;
            }
            let id = handles.issue(el.clone());
            HANDLE_OF.with(|map| map.set(key, &JsValue::from_f64(id.0 as f64)));
            id
        })
    }

    pub fn resolve(&self, id: ElementId) -> Option<web_sys::Element> {
        HANDLES.with(|handles| handles.borrow().get(id).cloned())
    }
}

#[cfg(feature = "csr")]
impl ElementTree for BrowserTree {
    fn parent(&self, id: ElementId) -> Option<ElementId> {
        let parent = self.resolve(id)?.parent_element()?;
        Some(self.handle_for(&parent))
    }

    fn matches(&self, id: ElementId, selector: &str) -> bool {
        self.resolve(id).is_some_and(|el| el.matches(selector).unwrap_or(false))
    }

    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        let rect = self.resolve(id)?.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn element_at(&self, point: Point) -> Option<ElementId> {
        let el = document()?.element_from_point(point.x as f32, point.y as f32)?;
        Some(self.handle_for(&el))
    }

    fn nearest_match(&self, start: ElementId, selector: &str) -> Option<ElementId> {
        let found = self.resolve(start)?.closest(selector).ok().flatten()?;
        Some(self.handle_for(&found))
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        match (self.resolve(ancestor), self.resolve(node)) {
            (Some(ancestor), Some(node)) => ancestor.contains(Some(&node)),
            _ => false,
        }
    }
}

/// The `<body>` cursor style, leased by the target cursor.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyCursorStyle;

#[cfg(feature = "csr")]
impl CursorStyleHost for BodyCursorStyle {
    fn cursor_style(&self) -> String {
        document()
            .and_then(|d| d.body())
            .and_then(|body| body.style().get_property_value("cursor").ok())
            .unwrap_or_default()
    }

    fn set_cursor_style(&self, value: &str) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        if value.is_empty() {
            let _ = style.remove_property("cursor");
        } else {
            let _ = style.set_property("cursor", value);
        }
    }
}

// =============================================================
// RAII wrappers
// =============================================================

/// An event listener that detaches itself when dropped.
#[cfg(feature = "csr")]
pub struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "csr")]
impl Listener {
    pub fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()).ok()?;
        Some(Self { target: target.clone(), event, callback })
    }
}

#[cfg(feature = "csr")]
impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(feature = "csr")]
type FrameCallback = Closure<dyn FnMut(f64)>;

/// A self-rescheduling `requestAnimationFrame` loop, cancelled on drop.
#[cfg(feature = "csr")]
pub struct FrameLoop {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    handle: Rc<Cell<Option<i32>>>,
}

#[cfg(feature = "csr")]
impl FrameLoop {
    /// Call `on_frame` with [`now_ms`] once per rendered frame.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let callback_weak = Rc::downgrade(&callback);
        let handle_inner = Rc::clone(&handle);
        let frame = Closure::wrap(Box::new(move |_ts: f64| {
            handle_inner.set(None);
            on_frame(now_ms());
            let (Some(callback), Some(window)) = (callback_weak.upgrade(), web_sys::window()) else {
                return;
            };
            if let Some(cb) = callback.borrow().as_ref() {
                handle_inner.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>);

        handle.set(Some(window.request_animation_frame(frame.as_ref().unchecked_ref()).ok()?));
        *callback.borrow_mut() = Some(frame);
        Some(Self { callback, handle })
    }
}

#[cfg(feature = "csr")]
impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.handle.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// Reports viewport intersection changes for one element; disconnects on drop.
#[cfg(feature = "csr")]
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "csr")]
impl VisibilityObserver {
    /// Returns `None` when the browser has no `IntersectionObserver`.
    pub fn observe(
        el: &web_sys::Element,
        threshold: f64,
        root_margin: &str,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        if !supports_intersection_observer() {
            return None;
        }
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(el);
        Some(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "csr")]
impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
