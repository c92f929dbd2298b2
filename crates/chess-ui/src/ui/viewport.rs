//! Viewport width capability.
//!
//! The view never reads a global for the viewport width. It is handed a
//! [`ViewportProvider`], reads the width once when it mounts, and subscribes
//! to resize notifications for as long as it lives. The subscription is a
//! guard: dropping it unsubscribes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Called with the new width on every resize.
pub type ResizeListener = Box<dyn FnMut(u32)>;

pub trait ViewportProvider {
    /// Current width in logical pixels.
    fn width(&self) -> u32;

    /// Register `listener` until the returned guard is dropped.
    fn subscribe(&self, listener: ResizeListener) -> ResizeSubscription;
}

/// Keeps a resize listener registered. Unsubscribes on drop.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ResizeSubscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl ResizeSubscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// An in-process viewport whose width changes only when told to.
///
/// Clones share the same width and listener list.
#[derive(Clone)]
pub struct SimulatedViewport {
    inner: Rc<Inner>,
}

struct Inner {
    width: Cell<u32>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, ResizeListener)>>,
}

impl SimulatedViewport {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            inner: Rc::new(Inner {
                width: Cell::new(width),
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Change the width and notify every subscriber.
    ///
    /// Listeners must not subscribe or unsubscribe from inside the callback.
    pub fn resize(&self, width: u32) {
        self.inner.width.set(width);
        for (_, listener) in self.inner.listeners.borrow_mut().iter_mut() {
            listener(width);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ViewportProvider for SimulatedViewport {
    fn width(&self) -> u32 {
        self.inner.width.get()
    }

    fn subscribe(&self, listener: ResizeListener) -> ResizeSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, listener));

        let inner = Rc::downgrade(&self.inner);
        ResizeSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }
}

impl std::fmt::Debug for SimulatedViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedViewport")
            .field("width", &self.inner.width.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
