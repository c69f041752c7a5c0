//! Element handles and the document-tree seam used by the cursor engine.
//!
//! The engine refers to elements only through [`ElementId`], an opaque handle
//! resolved by the host on every query. Holding a handle never keeps an
//! element alive, and a handle whose element has left the document simply
//! stops resolving.

use crate::geom::{Point, Rect};

/// Opaque handle to an element in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Read-only view of the host document.
pub trait ElementTree {
    /// Parent element, or `None` at the root or for a detached handle.
    fn parent(&self, id: ElementId) -> Option<ElementId>;

    /// Whether the element satisfies the target selector.
    fn matches(&self, id: ElementId, selector: &str) -> bool;

    /// Current bounding box, or `None` once the element is no longer in the document.
    fn bounding_rect(&self, id: ElementId) -> Option<Rect>;

    /// Topmost element under a viewport point.
    fn element_at(&self, point: Point) -> Option<ElementId>;

    /// Innermost element on the ancestor chain from `start` (inclusive) that
    /// matches `selector`.
    fn nearest_match(&self, start: ElementId, selector: &str) -> Option<ElementId> {
        let mut current = Some(start);
        while let Some(id) = current {
            if self.matches(id, selector) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}
