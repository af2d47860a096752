//! Digital input abstraction.
//!
//! The debouncer never touches hardware directly. It configures its channel once
//! at construction and samples it from [`ButtonDebouncer::tick`](crate::ButtonDebouncer::tick).

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};

use crate::types::{Level, PinMode};

/// Trait for abstracting a single digital input.
///
/// Implement this for your GPIO hardware. Both methods are called from the
/// caller's polling context and must return without blocking. Handle any
/// hardware errors internally - these methods cannot fail.
pub trait InputChannel {
    /// Configures the input. Called exactly once, when the debouncer is created.
    fn configure(&mut self, mode: PinMode);

    /// Samples the current level of the input.
    fn read_level(&mut self) -> Level;
}

impl<C: InputChannel + ?Sized> InputChannel for &mut C {
    #[inline]
    fn configure(&mut self, mode: PinMode) {
        (**self).configure(mode);
    }

    #[inline]
    fn read_level(&mut self) -> Level {
        (**self).read_level()
    }
}

/// Adapter for `embedded-hal` input pins.
///
/// HAL pins are put into input/pull-up mode through their types before they are
/// handed over, so [`configure`](InputChannel::configure) only records the mode the
/// debouncer asked for. Check [`requested_mode`](Self::requested_mode) against the
/// way the pin was actually set up.
///
/// Only pins whose reads cannot fail are accepted.
#[derive(Debug)]
pub struct HalInput<P> {
    pin: P,
    requested_mode: Option<PinMode>,
}

impl<P> HalInput<P>
where
    P: InputPin + ErrorType<Error = Infallible>,
{
    /// Wraps a HAL input pin.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            requested_mode: None,
        }
    }

    /// Mode requested by the debouncer, if it has configured this input yet.
    pub fn requested_mode(&self) -> Option<PinMode> {
        self.requested_mode
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> InputChannel for HalInput<P>
where
    P: InputPin + ErrorType<Error = Infallible>,
{
    fn configure(&mut self, mode: PinMode) {
        self.requested_mode = Some(mode);
    }

    fn read_level(&mut self) -> Level {
        match self.pin.is_high() {
            Ok(high) => Level::from(high),
            Err(never) => match never {},
        }
    }
}
