//! Shared test infrastructure for polled-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};

use polled_button::{ButtonDebouncer, ButtonEvent, InputChannel, Level, PinMode, TimeDuration};

// ============================================================================
// Mock Input
// ============================================================================

/// Simulated input line. Tests drive the level, pins sample it.
pub struct MockLine {
    level: Cell<Level>,
    mode: Cell<Option<PinMode>>,
    configure_calls: Cell<u32>,
    reads: Cell<u32>,
}

impl MockLine {
    pub fn new(level: Level) -> Self {
        Self {
            level: Cell::new(level),
            mode: Cell::new(None),
            configure_calls: Cell::new(0),
            reads: Cell::new(0),
        }
    }

    pub fn set(&self, level: Level) {
        self.level.set(level);
    }

    pub fn pin(&self) -> MockPin<'_> {
        MockPin { line: self }
    }

    pub fn mode(&self) -> Option<PinMode> {
        self.mode.get()
    }

    pub fn configure_calls(&self) -> u32 {
        self.configure_calls.get()
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

/// Input channel backed by a [`MockLine`]
pub struct MockPin<'l> {
    line: &'l MockLine,
}

impl InputChannel for MockPin<'_> {
    fn configure(&mut self, mode: PinMode) {
        self.line.mode.set(Some(mode));
        self.line
            .configure_calls
            .set(self.line.configure_calls.get() + 1);
    }

    fn read_level(&mut self) -> Level {
        self.line.reads.set(self.line.reads.get() + 1);
        self.line.level.get()
    }
}

// ============================================================================
// Event Log
// ============================================================================

/// Records callback events together with the tick they fired on
pub struct EventLog {
    now: Cell<u32>,
    events: RefCell<heapless::Vec<(u32, ButtonEvent), 64>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            events: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Closure that records `event` at the current tick
    pub fn recorder(&self, event: ButtonEvent) -> impl FnMut() + '_ {
        move || {
            let now = self.now.get();
            self.events
                .borrow_mut()
                .push((now, event))
                .expect("event log full");
        }
    }

    /// Ticks the debouncer once, stamping any events with the current tick
    pub fn tick<C: InputChannel>(&self, button: &mut ButtonDebouncer<'_, C>) {
        button.tick();
        self.now.set(self.now.get() + 1);
    }

    /// Ticks the debouncer `count` times
    pub fn run<C: InputChannel>(&self, button: &mut ButtonDebouncer<'_, C>, count: u32) {
        for _ in 0..count {
            self.tick(button);
        }
    }

    /// Index of the next tick
    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn events(&self) -> heapless::Vec<(u32, ButtonEvent), 64> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: ButtonEvent) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|(_, recorded)| *recorded == event)
            .count()
    }

    /// Ticks at which `event` fired
    pub fn ticks_of(&self, event: ButtonEvent) -> heapless::Vec<u32, 64> {
        self.events
            .borrow()
            .iter()
            .filter(|(_, recorded)| *recorded == event)
            .map(|(tick, _)| *tick)
            .collect()
    }
}

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}
