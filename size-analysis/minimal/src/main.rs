#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m_rt::entry;
use panic_halt as _;
use polled_button::{ButtonDebouncer, InputChannel, Level, PinMode, PollPeriod};

// ============================================================================
// Minimal Input Implementation
// ============================================================================

/// Input that reads a volatile register so the optimizer can't fold the state machine away
pub struct MinimalInput {
    register: *const u32,
}

impl InputChannel for MinimalInput {
    fn configure(&mut self, mode: PinMode) {
        core::hint::black_box(mode);
    }

    fn read_level(&mut self) -> Level {
        // SAFETY: points at a static that lives for the whole program.
        let raw = unsafe { core::ptr::read_volatile(self.register) };
        Level::from(raw & 1 != 0)
    }
}

static INPUT_REGISTER: u32 = 0;
static EVENTS: AtomicU32 = AtomicU32::new(0);

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn run_button() -> ! {
    let poll = PollPeriod::new(core::time::Duration::from_millis(10));
    let input = MinimalInput {
        register: &INPUT_REGISTER,
    };

    let mut on_press = || {
        EVENTS.fetch_add(1, Ordering::Relaxed);
    };
    let mut on_long_press = || {
        EVENTS.fetch_add(0x100, Ordering::Relaxed);
    };
    let mut on_release = || {
        EVENTS.fetch_add(0x1_0000, Ordering::Relaxed);
    };

    let mut button = ButtonDebouncer::new(
        input,
        poll.ticks(core::time::Duration::from_millis(30)),
        Level::Low,
    );
    button.set_press_callback(&mut on_press);
    button.set_long_press_callback(
        &mut on_long_press,
        poll.ticks(core::time::Duration::from_millis(500)),
        poll.ticks(core::time::Duration::from_millis(100)),
    );
    button.set_release_callback(&mut on_release);

    loop {
        button.tick();
        core::hint::black_box(button.state());
    }
}

#[entry]
fn main() -> ! {
    // Halt in the polling loop - this is a size analysis binary, not meant to run
    run_button()
}
