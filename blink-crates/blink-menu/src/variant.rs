use core::ops::RangeInclusive;

use blink_ramp::{Direction, DurationUnit, Ramp, RateUnit};

use crate::{PickerMode, Settings};

/// The flavours of blinker. They share the menu flow and differ in units, bounds and which
/// way the rate travels during a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// Sweeps from the max to the min BPM over a number of minutes.
    BpmSweep,
    /// Stretches the toggle interval from min to max milliseconds over a number of seconds.
    IntervalRamp,
    /// Blinks at a single BPM for a number of minutes.
    Steady,
}

impl Variant {
    pub const fn title(self) -> &'static str {
        match self {
            Self::BpmSweep => "Blinker",
            Self::IntervalRamp => "Ramp",
            Self::Steady => "Steady",
        }
    }

    pub const fn defaults(self) -> Settings {
        match self {
            Self::BpmSweep => Settings {
                duration: 20,
                min: 60,
                max: 120,
            },
            Self::IntervalRamp => Settings {
                duration: 60,
                min: 100,
                max: 1000,
            },
            Self::Steady => Settings {
                duration: 10,
                min: 60,
                max: 60,
            },
        }
    }

    pub const fn rate_unit(self) -> RateUnit {
        match self {
            Self::BpmSweep | Self::Steady => RateUnit::Bpm,
            Self::IntervalRamp => RateUnit::Millis,
        }
    }

    pub const fn duration_unit(self) -> DurationUnit {
        match self {
            Self::BpmSweep | Self::Steady => DurationUnit::Minutes,
            Self::IntervalRamp => DurationUnit::Seconds,
        }
    }

    pub const fn rate_bounds(self) -> RangeInclusive<u32> {
        match self {
            Self::BpmSweep | Self::Steady => 1..=200,
            Self::IntervalRamp => 20..=2000,
        }
    }

    pub const fn duration_bounds(self) -> RangeInclusive<u32> {
        match self {
            Self::BpmSweep | Self::Steady => 1..=60,
            Self::IntervalRamp => 1..=600,
        }
    }

    /// The interval fields in the order the picker walks through them.
    pub const fn interval_fields(self) -> &'static [PickerMode] {
        match self {
            Self::BpmSweep => &[PickerMode::Max, PickerMode::Min],
            Self::IntervalRamp => &[PickerMode::Min, PickerMode::Max],
            Self::Steady => &[PickerMode::Max],
        }
    }

    pub const fn picker_header(self, mode: PickerMode) -> &'static str {
        match (self, mode) {
            (_, PickerMode::Duration) => match self.duration_unit() {
                DurationUnit::Minutes => "Duration (min)",
                DurationUnit::Seconds => "Duration (s)",
            },
            (Self::Steady, _) => "Rate (bpm)",
            (Self::IntervalRamp, PickerMode::Max) => "Max interval (ms)",
            (Self::IntervalRamp, PickerMode::Min) => "Min interval (ms)",
            (Self::BpmSweep, PickerMode::Max) => "Max interval (bpm)",
            (Self::BpmSweep, PickerMode::Min) => "Min interval (bpm)",
        }
    }

    pub const fn bounds(self, mode: PickerMode) -> RangeInclusive<u32> {
        match mode {
            PickerMode::Duration => self.duration_bounds(),
            PickerMode::Max | PickerMode::Min => self.rate_bounds(),
        }
    }

    pub fn ramp(self, settings: &Settings) -> Ramp {
        let duration_secs = self.duration_unit().to_secs(settings.duration);

        match self {
            Self::BpmSweep => {
                Ramp::new(settings.min, settings.max, duration_secs, Direction::Falling)
            }
            Self::IntervalRamp => {
                Ramp::new(settings.min, settings.max, duration_secs, Direction::Rising)
            }
            Self::Steady => Ramp::steady(settings.max, duration_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [Variant; 3] = [Variant::BpmSweep, Variant::IntervalRamp, Variant::Steady];

    #[test]
    fn defaults_lie_within_bounds() {
        for variant in VARIANTS {
            let defaults = variant.defaults();

            assert!(variant.duration_bounds().contains(&defaults.duration));
            assert!(variant.rate_bounds().contains(&defaults.min));
            assert!(variant.rate_bounds().contains(&defaults.max));
        }
    }

    #[test]
    fn bpm_sweep_falls_from_max_to_min() {
        let ramp = Variant::BpmSweep.ramp(&Variant::BpmSweep.defaults());

        assert_eq!(ramp.start(), 120);
        assert_eq!(ramp.end(), 60);
        assert_eq!(ramp.duration_secs(), 20 * 60);
    }

    #[test]
    fn interval_ramp_rises_from_min_to_max() {
        let ramp = Variant::IntervalRamp.ramp(&Variant::IntervalRamp.defaults());

        assert_eq!(ramp.start(), 100);
        assert_eq!(ramp.end(), 1000);
        assert_eq!(ramp.duration_secs(), 60);
    }

    #[test]
    fn steady_ignores_min() {
        let settings = Settings {
            duration: 2,
            min: 1,
            max: 90,
        };
        let ramp = Variant::Steady.ramp(&settings);

        assert_eq!(ramp.start(), 90);
        assert_eq!(ramp.end(), 90);
    }

    #[test]
    fn headers_name_the_unit() {
        assert_eq!(Variant::BpmSweep.picker_header(PickerMode::Duration), "Duration (min)");
        assert_eq!(Variant::IntervalRamp.picker_header(PickerMode::Duration), "Duration (s)");
        assert_eq!(Variant::IntervalRamp.picker_header(PickerMode::Min), "Min interval (ms)");
        assert_eq!(Variant::Steady.picker_header(PickerMode::Max), "Rate (bpm)");
    }
}
