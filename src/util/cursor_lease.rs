//! The page's single hold on the system cursor style.
//!
//! Every target cursor host takes its hold through [`CursorHold`], so all of
//! them count against one [`SystemCursor`] lease. The first hold records the
//! body's style and hides the pointer; dropping the last hold writes the
//! recorded style back.

#[cfg(test)]
#[path = "cursor_lease_test.rs"]
mod cursor_lease_test;

use std::cell::RefCell;

use effects::system_cursor::{CursorStyleHost, SystemCursor};

thread_local! {
    static SYSTEM_CURSOR: RefCell<SystemCursor> = RefCell::new(SystemCursor::new());
}

/// Number of live holds on the page lease.
#[must_use]
pub fn page_holders() -> usize {
    SYSTEM_CURSOR.with(|lease| lease.borrow().holders())
}

/// One host's hold on the page lease; released on drop.
pub struct CursorHold<H: CursorStyleHost> {
    body: H,
}

impl<H: CursorStyleHost> CursorHold<H> {
    pub fn acquire(body: H) -> Self {
        SYSTEM_CURSOR.with(|lease| lease.borrow_mut().acquire(&body));
        Self { body }
    }
}

impl<H: CursorStyleHost> Drop for CursorHold<H> {
    fn drop(&mut self) {
        // Thread-local storage may already be gone during thread teardown.
        let _ = SYSTEM_CURSOR.try_with(|lease| lease.borrow_mut().release(&self.body));
    }
}
