//! Crate for calculating blink rates that change linearly over a run, via [`Ramp`], and for
//! turning those rates into LED toggle intervals with [`RateUnit`].
#![no_std]

/// Which way a [`Ramp`] travels between its bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Starts at the low bound and ends at the high bound.
    Rising,
    /// Starts at the high bound and ends at the low bound.
    Falling,
}

/// A linear ramp between two values over a duration in seconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ramp {
    low: u32,
    high: u32,
    duration_secs: u32,
    direction: Direction,
}

impl Ramp {
    /// Creates a new ramp. The bounds can be given in any order, they are stored as low/high.
    #[inline]
    pub const fn new(bound_a: u32, bound_b: u32, duration_secs: u32, direction: Direction) -> Self {
        let (low, high) = if bound_a <= bound_b {
            (bound_a, bound_b)
        } else {
            (bound_b, bound_a)
        };

        Self {
            low,
            high,
            duration_secs,
            direction,
        }
    }

    /// A ramp that holds one value for the whole duration.
    #[inline]
    pub const fn steady(value: u32, duration_secs: u32) -> Self {
        Self::new(value, value, duration_secs, Direction::Falling)
    }

    #[inline]
    pub const fn low(&self) -> u32 {
        self.low
    }

    #[inline]
    pub const fn high(&self) -> u32 {
        self.high
    }

    #[inline]
    pub const fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The value at zero elapsed seconds.
    #[inline]
    pub const fn start(&self) -> u32 {
        match self.direction {
            Direction::Rising => self.low,
            Direction::Falling => self.high,
        }
    }

    /// The value once the duration has elapsed.
    #[inline]
    pub const fn end(&self) -> u32 {
        match self.direction {
            Direction::Rising => self.high,
            Direction::Falling => self.low,
        }
    }

    /// Calculates the value of the ramp after `elapsed_secs`. Elapsed time past the duration
    /// is clamped, so the result always lies within the bounds.
    ///
    /// ```
    /// use blink_ramp::{Direction, Ramp};
    ///
    /// let ramp = Ramp::new(60, 120, 600, Direction::Falling);
    ///
    /// assert_eq!(ramp.value_at(0), 120);
    /// assert_eq!(ramp.value_at(300), 90);
    /// assert_eq!(ramp.value_at(900), 60);
    /// ```
    pub fn value_at(&self, elapsed_secs: u32) -> u32 {
        if self.duration_secs == 0 {
            return self.end();
        }

        let elapsed = u64::from(elapsed_secs.min(self.duration_secs));
        let span = u64::from(self.high - self.low);
        // elapsed <= duration, so step <= span and fits back into u32.
        let step = (elapsed * span / u64::from(self.duration_secs)) as u32;

        match self.direction {
            Direction::Rising => self.low + step,
            Direction::Falling => self.high - step,
        }
    }

    #[inline]
    pub const fn is_finished(&self, elapsed_secs: u32) -> bool {
        elapsed_secs >= self.duration_secs
    }

    #[inline]
    pub const fn remaining_secs(&self, elapsed_secs: u32) -> u32 {
        self.duration_secs.saturating_sub(elapsed_secs)
    }
}

/// The unit a run's duration is configured in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DurationUnit {
    Minutes,
    Seconds,
}

impl DurationUnit {
    /// ```
    /// use blink_ramp::DurationUnit;
    ///
    /// assert_eq!(DurationUnit::Minutes.to_secs(20), 1200);
    /// assert_eq!(DurationUnit::Seconds.to_secs(20), 20);
    /// ```
    #[inline]
    pub const fn to_secs(self, value: u32) -> u32 {
        match self {
            Self::Minutes => value.saturating_mul(60),
            Self::Seconds => value,
        }
    }

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minutes => "min",
            Self::Seconds => "s",
        }
    }
}

/// The unit a blink rate is configured in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RateUnit {
    /// Full on/off cycles per minute.
    Bpm,
    /// Milliseconds between LED toggles.
    Millis,
}

impl RateUnit {
    /// Converts a rate into the number of milliseconds between LED toggles. A blink is one on
    /// and one off phase, so a rate in BPM toggles twice per beat. Never returns zero.
    ///
    /// ```
    /// use blink_ramp::RateUnit;
    ///
    /// assert_eq!(RateUnit::Bpm.toggle_interval_ms(60), 500);
    /// assert_eq!(RateUnit::Millis.toggle_interval_ms(250), 250);
    /// ```
    pub const fn toggle_interval_ms(self, value: u32) -> u32 {
        let interval = match self {
            Self::Bpm => {
                let toggles = value.saturating_mul(2);
                60_000 / if toggles == 0 { 1 } else { toggles }
            }
            Self::Millis => value,
        };

        if interval == 0 { 1 } else { interval }
    }

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bpm => "bpm",
            Self::Millis => "ms",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_normalised() {
        let ramp = Ramp::new(120, 60, 60, Direction::Rising);

        assert_eq!(ramp.low(), 60);
        assert_eq!(ramp.high(), 120);
        assert_eq!(ramp.start(), 60);
        assert_eq!(ramp.end(), 120);
    }

    #[test]
    fn falling_ramp_stays_in_bounds_and_never_rises() {
        let ramp = Ramp::new(60, 120, 20 * 60, Direction::Falling);
        let mut previous = ramp.start();

        for t in 0..=ramp.duration_secs() {
            let value = ramp.value_at(t);

            assert!((60..=120).contains(&value), "t = {t}, value = {value}");
            assert!(value <= previous, "t = {t}, value = {value}");

            previous = value;
        }

        assert_eq!(previous, ramp.end());
    }

    #[test]
    fn rising_ramp_stays_in_bounds_and_never_falls() {
        let ramp = Ramp::new(100, 1000, 45, Direction::Rising);
        let mut previous = ramp.start();

        for t in 0..=ramp.duration_secs() {
            let value = ramp.value_at(t);

            assert!((100..=1000).contains(&value), "t = {t}, value = {value}");
            assert!(value >= previous, "t = {t}, value = {value}");

            previous = value;
        }

        assert_eq!(previous, ramp.end());
    }

    #[test]
    fn elapsed_time_past_duration_is_clamped() {
        let rising = Ramp::new(1, 200, 10, Direction::Rising);
        let falling = Ramp::new(1, 200, 10, Direction::Falling);

        assert_eq!(rising.value_at(11), 200);
        assert_eq!(rising.value_at(u32::MAX), 200);
        assert_eq!(falling.value_at(u32::MAX), 1);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let ramp = Ramp::new(0, u32::MAX, u32::MAX, Direction::Rising);

        assert_eq!(ramp.value_at(u32::MAX / 2), u32::MAX / 2);
        assert_eq!(ramp.value_at(u32::MAX), u32::MAX);
    }

    #[test]
    fn zero_duration_yields_end_value() {
        let ramp = Ramp::new(60, 120, 0, Direction::Falling);

        assert!(ramp.is_finished(0));
        assert_eq!(ramp.value_at(0), 60);
        assert_eq!(ramp.remaining_secs(0), 0);
    }

    #[test]
    fn steady_ramp_holds_its_value() {
        let ramp = Ramp::steady(90, 120);

        for t in [0, 1, 59, 120, 500] {
            assert_eq!(ramp.value_at(t), 90);
        }
    }

    #[test]
    fn finish_and_remaining_time() {
        let ramp = Ramp::new(60, 120, 90, Direction::Falling);

        assert!(!ramp.is_finished(89));
        assert!(ramp.is_finished(90));
        assert_eq!(ramp.remaining_secs(30), 60);
        assert_eq!(ramp.remaining_secs(100), 0);
    }

    #[test]
    fn bpm_toggle_intervals() {
        let expect_results: [(u32, u32); 5] =
            [(1, 30_000), (60, 500), (120, 250), (200, 150), (0, 60_000)];

        for (bpm, interval) in expect_results {
            assert_eq!(RateUnit::Bpm.toggle_interval_ms(bpm), interval);
        }

        assert_eq!(RateUnit::Bpm.toggle_interval_ms(u32::MAX), 1);
    }

    #[test]
    fn toggle_interval_evaluates_in_const_context() {
        const SLOWEST: u32 = RateUnit::Bpm.toggle_interval_ms(0);
        const FASTEST: u32 = RateUnit::Millis.toggle_interval_ms(0);

        assert_eq!(SLOWEST, 60_000);
        assert_eq!(FASTEST, 1);
    }

    #[test]
    fn millis_toggle_interval_is_never_zero() {
        assert_eq!(RateUnit::Millis.toggle_interval_ms(0), 1);
        assert_eq!(RateUnit::Millis.toggle_interval_ms(1), 1);
    }

    #[test]
    fn duration_units() {
        assert_eq!(DurationUnit::Minutes.to_secs(u32::MAX), u32::MAX);
        assert_eq!(DurationUnit::Minutes.label(), "min");
        assert_eq!(DurationUnit::Seconds.label(), "s");
    }
}
