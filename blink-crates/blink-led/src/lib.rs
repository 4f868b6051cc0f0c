//! # Introduction
//!
//! A platform agnostic LED driver for the blinker, based on the
//! [`embedded-hal`](https://github.com/rust-embedded/embedded-hal) digital traits.
//!
//! The driver remembers whether it last drove the LED on or off, so it can toggle any
//! [`OutputPin`] without needing to read the pin back.
//!
//! ## Usage
//!
//! ```
//! use blink_led::BlinkLed;
//! use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};
//!
//! let mut pin = Mock::new(&[
//!     Transaction::set(State::High),
//!     Transaction::set(State::Low),
//! ]);
//!
//! let mut led = BlinkLed::new(pin.clone());
//!
//! led.toggle().unwrap();
//! assert!(led.is_lit());
//! led.toggle().unwrap();
//! assert!(!led.is_lit());
//!
//! pin.done();
//! ```
#![deny(unsafe_code, missing_docs)]
#![no_std]

use embedded_hal::digital::{self, OutputPin};

/// All possible errors in this crate
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: digital::Error> {
    /// Output pin error
    Pin(E),
}

impl<E> From<E> for Error<E>
where
    E: digital::Error,
{
    fn from(e: E) -> Self {
        Error::Pin(e)
    }
}

/// Driver for a single LED on an output pin.
#[derive(Debug)]
pub struct BlinkLed<P> {
    pin: P,
    lit: bool,
}

impl<P> BlinkLed<P>
where
    P: OutputPin,
{
    /// Wraps the pin. The pin is not driven until the first call, and the LED is assumed off.
    pub const fn new(pin: P) -> Self {
        Self { pin, lit: false }
    }

    /// Turns the LED on.
    pub fn on(&mut self) -> Result<(), Error<P::Error>> {
        self.pin.set_high()?;
        self.lit = true;

        Ok(())
    }

    /// Turns the LED off.
    pub fn off(&mut self) -> Result<(), Error<P::Error>> {
        self.pin.set_low()?;
        self.lit = false;

        Ok(())
    }

    /// Flips the LED to the opposite of its last driven state.
    pub fn toggle(&mut self) -> Result<(), Error<P::Error>> {
        if self.lit { self.off() } else { self.on() }
    }

    /// Whether the LED was last driven on.
    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    /// Destroys the driver and returns the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

/// Deadline keeping for a toggling LED, in milliseconds on a monotonic clock.
///
/// The next toggle is always measured from the last one, so changing the interval moves the
/// pending deadline instead of restarting the wait.
///
/// ```
/// use blink_led::ToggleSchedule;
///
/// let mut schedule = ToggleSchedule::starting_at(1_000);
///
/// assert_eq!(schedule.deadline_ms(1_500), 2_500);
/// // A new interval signalled at 1_900 keeps counting from the last toggle.
/// assert_eq!(schedule.deadline_ms(1_520), 2_520);
///
/// schedule.toggled_at(2_520);
/// assert_eq!(schedule.deadline_ms(1_520), 4_040);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleSchedule {
    last_toggle_ms: u64,
}

impl ToggleSchedule {
    /// Starts counting from `now_ms`, as if the LED had just toggled.
    pub const fn starting_at(now_ms: u64) -> Self {
        Self {
            last_toggle_ms: now_ms,
        }
    }

    /// When the next toggle is due for the given interval.
    pub const fn deadline_ms(&self, toggle_ms: u32) -> u64 {
        self.last_toggle_ms.saturating_add(toggle_ms as u64)
    }

    /// Records a toggle at `now_ms`.
    pub fn toggled_at(&mut self, now_ms: u64) {
        self.last_toggle_ms = now_ms;
    }

    /// The time of the last recorded toggle.
    pub const fn last_toggle_ms(&self) -> u64 {
        self.last_toggle_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;

    use embedded_hal_mock::eh1::{
        MockError,
        digital::{Mock as PinMock, State, Transaction},
    };
    use std::io::ErrorKind;

    #[test]
    fn toggling_alternates_pin_state() {
        let expectations = [
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut led = BlinkLed::new(pin.clone());

        for _ in 0..3 {
            led.toggle().unwrap();
        }

        assert!(led.is_lit());
        pin.done();
    }

    #[test]
    fn off_resets_toggle_phase() {
        let expectations = [
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ];
        let mut pin = PinMock::new(&expectations);
        let mut led = BlinkLed::new(pin.clone());

        led.on().unwrap();
        led.off().unwrap();
        assert!(!led.is_lit());
        led.toggle().unwrap();

        drop(led.release());
        pin.done();
    }

    #[test]
    fn pin_errors_leave_state_untouched() {
        let expectations =
            [Transaction::set(State::High).with_error(MockError::Io(ErrorKind::Other))];
        let mut pin = PinMock::new(&expectations);
        let mut led = BlinkLed::new(pin.clone());

        assert_eq!(
            led.toggle(),
            Err(Error::Pin(MockError::Io(ErrorKind::Other)))
        );
        assert!(!led.is_lit());

        pin.done();
    }

    #[test]
    fn slow_interval_survives_frequent_rate_changes() {
        let mut schedule = ToggleSchedule::starting_at(0);
        let mut toggles = 0;

        // Rate changes every second, each interval longer than a second.
        for second in 0..60u64 {
            let now_ms = second * 1_000;
            let toggle_ms = 1_500 + second as u32 * 8;

            while schedule.deadline_ms(toggle_ms) <= now_ms {
                let due = schedule.deadline_ms(toggle_ms);
                schedule.toggled_at(due);
                toggles += 1;
            }
        }

        assert!(toggles >= 25, "only {toggles} toggles in a minute");
    }

    #[test]
    fn shorter_interval_makes_deadline_due_immediately() {
        let schedule = ToggleSchedule::starting_at(10_000);

        assert_eq!(schedule.deadline_ms(2_000), 12_000);
        // Signalled at 11_500 with a 500 ms interval: already overdue.
        assert!(schedule.deadline_ms(500) <= 11_500);
        assert_eq!(schedule.last_toggle_ms(), 10_000);
    }

    #[test]
    fn deadline_saturates() {
        let schedule = ToggleSchedule::starting_at(u64::MAX - 10);

        assert_eq!(schedule.deadline_ms(u32::MAX), u64::MAX);
    }
}
