#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonDebouncer`**: Debounces one input and reports press, long-press and release
//! - **`ButtonState`**: The five states of the debounce automaton
//! - **`InputChannel`**: Trait to implement for your GPIO hardware
//! - **`HalInput`**: Ready-made `InputChannel` for `embedded-hal` input pins
//! - **`PollPeriod`**: Converts delays into ticks of your polling period
//! - **`EventQueue`**: Buffers events from callbacks for the main loop
//!
//! The debouncer has no notion of wall-clock time. Every delay is a number of
//! ticks, so call [`ButtonDebouncer::tick`] at a fixed period.

pub mod channel;
pub mod debouncer;
pub mod queue;
pub mod time;
pub mod types;

pub use channel::{HalInput, InputChannel};
pub use debouncer::{ButtonDebouncer, Callback};
pub use queue::EventQueue;
pub use time::{PollPeriod, TimeDuration};
pub use types::{ButtonEvent, ButtonState, Level, PinMode, Ticks};
