//! Polled button debouncer with press, release and long-press callbacks.
//!
//! Provides [`ButtonDebouncer`], which samples one [`InputChannel`] each time it is
//! ticked and walks a five-state machine to turn a bouncing contact into clean
//! events. The debouncer has no clock of its own: every delay is a number of ticks,
//! so the caller must tick it at a fixed period.

use crate::channel::InputChannel;
use crate::types::{ButtonState, Level, PinMode, Ticks};

/// A registered event handler.
///
/// Closures can capture context; use `Cell`/`RefCell` (or an
/// [`EventQueue`](crate::EventQueue)) to share state between handlers.
pub type Callback<'a> = &'a mut dyn FnMut();

/// Upper bound on state evaluations in a single tick.
///
/// An input holding one level for the whole tick needs at most five, e.g. `Idle`,
/// `DebouncingPress`, `Pressed` and `LongPressed` with zero delays, then the final
/// evaluation that settles. Only an input that changes level between reads within
/// one tick can hit the bound.
const MAX_STEPS_PER_TICK: usize = 5;

/// Outcome of evaluating the current state once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// State changed; evaluate the new state within the same tick.
    Transitioned,
    /// Nothing more to do until the next tick.
    Settled,
}

/// Debounces a single digital input driven by an external polling tick.
///
/// Press and release are reported at the *first* sample showing the new level.
/// The debounce states that follow only stop contact bounce from reporting the
/// reverse edge. Long-press fires once the button has been held for a configured
/// number of ticks after the press debounce completes, then optionally repeats.
///
/// # Type Parameters
/// * `'a` - Lifetime of the registered callbacks
/// * `C` - Input channel implementation type
pub struct ButtonDebouncer<'a, C: InputChannel> {
    channel: C,
    active_level: Level,
    debounce_ticks: Ticks,
    long_press_ticks: Ticks,
    long_press_repeat_ticks: Ticks,
    state: ButtonState,
    counter: Ticks,
    timeout: Ticks,
    on_press: Option<Callback<'a>>,
    on_long_press: Option<Callback<'a>>,
    on_release: Option<Callback<'a>>,
}

impl<'a, C: InputChannel> ButtonDebouncer<'a, C> {
    /// Creates an idle debouncer and configures the channel.
    ///
    /// The channel is configured as an input with pull-up when `active_level` is
    /// [`Level::Low`], and as a plain input otherwise. This is the only time the
    /// debouncer configures it.
    ///
    /// `debounce_ticks` is how many ticks each edge is held off after being reported.
    /// With zero the debounce states are left within the same tick that entered them.
    pub fn new(mut channel: C, debounce_ticks: Ticks, active_level: Level) -> Self {
        channel.configure(PinMode::for_active_level(active_level));

        Self {
            channel,
            active_level,
            debounce_ticks,
            long_press_ticks: 0,
            long_press_repeat_ticks: 0,
            state: ButtonState::Idle,
            counter: 0,
            timeout: 0,
            on_press: None,
            on_long_press: None,
            on_release: None,
        }
    }

    /// Sets the handler called when a press is first detected. Replaces any previous one.
    pub fn set_press_callback(&mut self, callback: Callback<'a>) {
        self.on_press = Some(callback);
    }

    /// Sets the long-press handler and its timing. Replaces any previous one.
    ///
    /// # Arguments
    /// * `first_delay_ticks` - Ticks to wait after the press debounce completes. With 0
    ///   the handler fires as soon as the debounce completes.
    /// * `repeat_ticks` - Ticks between repeated calls while the button stays held.
    ///   With 0 the handler fires once per press.
    ///
    /// Delays are captured when their state is entered, so new delays apply from the
    /// next entry. Switching repeats on or off applies immediately, even mid-hold.
    /// The first repeat follows the first long-press by `repeat_ticks`; later repeats
    /// are `repeat_ticks + 1` apart because the firing tick restarts the count at 0.
    pub fn set_long_press_callback(
        &mut self,
        callback: Callback<'a>,
        first_delay_ticks: Ticks,
        repeat_ticks: Ticks,
    ) {
        self.on_long_press = Some(callback);
        self.long_press_ticks = first_delay_ticks;
        self.long_press_repeat_ticks = repeat_ticks;
    }

    /// Sets the handler called when a release is first detected. Replaces any previous one.
    pub fn set_release_callback(&mut self, callback: Callback<'a>) {
        self.on_release = Some(callback);
    }

    /// Removes all handlers. Long-press timing is kept.
    pub fn clear_callbacks(&mut self) {
        self.on_press = None;
        self.on_long_press = None;
        self.on_release = None;
    }

    /// Advances the state machine by one tick.
    ///
    /// Call this at a fixed period. After every state change the new state is
    /// evaluated immediately within the same call, so zero-tick delays take effect
    /// without waiting for the next tick. Handlers run synchronously from inside
    /// this call and should return quickly.
    pub fn tick(&mut self) {
        for _ in 0..MAX_STEPS_PER_TICK {
            if self.step() == Step::Settled {
                return;
            }
        }
        // Input flipped within the tick; finish the state it landed in next time.
    }

    fn step(&mut self) -> Step {
        match self.state {
            ButtonState::Idle => {
                if self.is_active() {
                    self.enter(ButtonState::DebouncingPress, self.debounce_ticks);
                    fire(&mut self.on_press);
                    Step::Transitioned
                } else {
                    Step::Settled
                }
            }

            // The input is not sampled while a press is debouncing.
            ButtonState::DebouncingPress => {
                if self.counter >= self.timeout {
                    self.enter(ButtonState::Pressed, self.long_press_ticks);
                    Step::Transitioned
                } else {
                    self.counter += 1;
                    Step::Settled
                }
            }

            ButtonState::Pressed => {
                if !self.is_active() {
                    self.begin_release();
                    Step::Transitioned
                } else if self.counter >= self.timeout {
                    self.enter(ButtonState::LongPressed, self.long_press_repeat_ticks);
                    fire(&mut self.on_long_press);
                    Step::Transitioned
                } else {
                    self.counter += 1;
                    Step::Settled
                }
            }

            ButtonState::LongPressed => {
                if !self.is_active() {
                    self.begin_release();
                    Step::Transitioned
                } else if self.long_press_repeat_ticks == 0 {
                    // Repeats off; wait here for the release.
                    Step::Settled
                } else if self.counter >= self.timeout {
                    self.counter = 0;
                    fire(&mut self.on_long_press);
                    Step::Settled
                } else {
                    self.counter += 1;
                    Step::Settled
                }
            }

            ButtonState::DebouncingRelease => {
                if self.counter >= self.timeout {
                    self.enter(ButtonState::Idle, 0);
                    Step::Transitioned
                } else {
                    self.counter += 1;
                    Step::Settled
                }
            }
        }
    }

    fn begin_release(&mut self) {
        self.enter(ButtonState::DebouncingRelease, self.debounce_ticks);
        fire(&mut self.on_release);
    }

    #[inline]
    fn enter(&mut self, state: ButtonState, timeout: Ticks) {
        self.state = state;
        self.timeout = timeout;
        self.counter = 0;
    }

    #[inline]
    fn is_active(&mut self) -> bool {
        self.channel.read_level() == self.active_level
    }

    /// Returns the current state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns `true` between a reported press and the matching reported release.
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Ticks counted in the current state.
    pub fn counter(&self) -> Ticks {
        self.counter
    }

    /// Tick count at which the current state moves on.
    pub fn timeout(&self) -> Ticks {
        self.timeout
    }

    /// Level treated as pressed.
    pub fn active_level(&self) -> Level {
        self.active_level
    }

    /// Configured debounce length.
    pub fn debounce_ticks(&self) -> Ticks {
        self.debounce_ticks
    }

    /// Configured delay before the first long-press.
    pub fn long_press_ticks(&self) -> Ticks {
        self.long_press_ticks
    }

    /// Configured long-press repeat interval (0 = no repeat).
    pub fn long_press_repeat_ticks(&self) -> Ticks {
        self.long_press_repeat_ticks
    }

    /// Consumes the debouncer and returns the channel.
    pub fn release(self) -> C {
        self.channel
    }
}

#[inline]
fn fire(callback: &mut Option<Callback<'_>>) {
    if let Some(callback) = callback {
        callback();
    }
}
