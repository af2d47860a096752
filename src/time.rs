//! Conversion from wall-clock delays to polling ticks.
//!
//! The debouncer itself only counts ticks. [`PollPeriod`] lets you express the
//! debounce and long-press delays as durations and converts them once, at setup.

use crate::types::Ticks;

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

impl TimeDuration for core::time::Duration {
    #[inline]
    fn as_millis(&self) -> u64 {
        u64::try_from(core::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
    }
}

/// The fixed period at which [`ButtonDebouncer::tick`](crate::ButtonDebouncer::tick)
/// is called.
///
/// Delays should be multiples of the period; anything else is rounded down to
/// whole ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollPeriod<D: TimeDuration> {
    period: D,
}

impl<D: TimeDuration> PollPeriod<D> {
    /// Creates a poll period.
    #[inline]
    pub fn new(period: D) -> Self {
        Self { period }
    }

    /// Returns the period.
    #[inline]
    pub fn period(&self) -> D {
        self.period
    }

    /// Converts a delay into whole ticks of this period.
    ///
    /// Saturates at [`Ticks::MAX`]. A zero period yields 0 ticks.
    pub fn ticks(&self, delay: D) -> Ticks {
        let period_ms = self.period.as_millis();
        if period_ms == 0 {
            return 0;
        }

        let ticks = delay.as_millis() / period_ms;
        Ticks::try_from(ticks).unwrap_or(Ticks::MAX)
    }

    /// Returns `true` if the delay converts to ticks without rounding.
    pub fn is_multiple(&self, delay: D) -> bool {
        let period_ms = self.period.as_millis();
        let delay_ms = delay.as_millis();
        if period_ms == 0 {
            return delay_ms == 0;
        }

        delay_ms % period_ms == 0
    }
}
