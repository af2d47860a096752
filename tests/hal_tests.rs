//! Integration tests for driving the debouncer from an embedded-hal pin

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use polled_button::{ButtonDebouncer, ButtonState, HalInput, Level, PinMode};

/// embedded-hal pin whose level the test controls
struct SharedPin<'a> {
    high: &'a Cell<bool>,
}

impl ErrorType for SharedPin<'_> {
    type Error = Infallible;
}

impl InputPin for SharedPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

#[test]
fn active_low_hal_pin_requests_pull_up() {
    let high = Cell::new(true);
    let button = ButtonDebouncer::new(HalInput::new(SharedPin { high: &high }), 2, Level::Low);

    let input = button.release();
    assert_eq!(input.requested_mode(), Some(PinMode::InputPullUp));
}

#[test]
fn hal_pin_drives_press_and_release() {
    let high = Cell::new(true);
    let presses = Cell::new(0u32);
    let releases = Cell::new(0u32);
    let mut on_press = || presses.set(presses.get() + 1);
    let mut on_release = || releases.set(releases.get() + 1);

    let mut button = ButtonDebouncer::new(HalInput::new(SharedPin { high: &high }), 1, Level::Low);
    button.set_press_callback(&mut on_press);
    button.set_release_callback(&mut on_release);

    button.tick();
    assert_eq!(button.state(), ButtonState::Idle);

    high.set(false);
    button.tick();
    button.tick();
    assert!(button.is_pressed());

    high.set(true);
    button.tick();
    button.tick();

    assert_eq!(button.state(), ButtonState::Idle);
    assert_eq!(presses.get(), 1);
    assert_eq!(releases.get(), 1);
}
