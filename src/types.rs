//! Core types shared by the debouncer and its collaborators.

/// Number of polling ticks. The only unit of time the debouncer knows about.
pub type Ticks = u16;

/// Logical level of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Input reads high.
    High,

    /// Input reads low.
    Low,
}

impl Level {
    /// Returns the opposite level.
    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

/// How an input channel should be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Plain floating input.
    Input,

    /// Input with the internal pull-up enabled.
    InputPullUp,
}

impl PinMode {
    /// Picks the mode for a button with the given active level.
    ///
    /// Active-low buttons get the internal pull-up so the line idles high
    /// when the contact is open.
    #[inline]
    pub fn for_active_level(active_level: Level) -> Self {
        match active_level {
            Level::Low => PinMode::InputPullUp,
            Level::High => PinMode::Input,
        }
    }
}

/// The current state of a button debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button released and stable. Waiting for the active level.
    #[default]
    Idle,
    /// Press reported. Ignoring the input until the debounce window elapses.
    DebouncingPress,
    /// Press confirmed. Counting toward the first long-press.
    Pressed,
    /// Long-press reported. Counting toward the next repeat, if any.
    LongPressed,
    /// Release reported. Ignoring the input until the debounce window elapses.
    DebouncingRelease,
}

impl ButtonState {
    /// Returns `true` once a press has been reported and no release has been reported since.
    #[inline]
    pub fn is_pressed(self) -> bool {
        matches!(
            self,
            ButtonState::DebouncingPress | ButtonState::Pressed | ButtonState::LongPressed
        )
    }
}

/// Events reported by a debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Active level first detected.
    Press,

    /// Button held past the long-press delay, or past another repeat interval.
    LongPress,

    /// Inactive level first detected after a press.
    Release,
}
