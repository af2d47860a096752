//! Fixed-capacity event queue for handing button events to the main loop.

use core::cell::{Cell, RefCell};

use heapless::Deque;

use crate::types::ButtonEvent;

/// Buffers button events recorded from callbacks.
///
/// Callbacks run inside [`ButtonDebouncer::tick`](crate::ButtonDebouncer::tick). Rather
/// than doing work there, register closures that capture `&EventQueue` and call
/// [`record`](Self::record), then drain the queue with [`pop`](Self::pop) after the tick.
///
/// The queue uses interior mutability so several callbacks can share it. It is
/// not `Sync`; keep it on the thread that ticks the debouncer.
///
/// # Type Parameters
/// * `N` - Maximum number of buffered events
pub struct EventQueue<const N: usize> {
    events: RefCell<Deque<ButtonEvent, N>>,
    dropped: Cell<u32>,
}

impl<const N: usize> EventQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            events: RefCell::new(Deque::new()),
            dropped: Cell::new(0),
        }
    }

    /// Appends an event. When the queue is full the event is discarded and counted.
    pub fn record(&self, event: ButtonEvent) {
        if self.events.borrow_mut().push_back(event).is_err() {
            self.dropped.set(self.dropped.get().saturating_add(1));
        }
    }

    /// Removes and returns the oldest event.
    pub fn pop(&self) -> Option<ButtonEvent> {
        self.events.borrow_mut().pop_front()
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if no events are buffered.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Number of events discarded because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped.get()
    }

    /// Discards all buffered events and resets the dropped count.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        self.dropped.set(0);
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
