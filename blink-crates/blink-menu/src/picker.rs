use core::ops::RangeInclusive;

/// A numeric input bounded to an inclusive range. Every adjustment is clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NumberPicker {
    header: &'static str,
    value: u32,
    min: u32,
    max: u32,
}

impl NumberPicker {
    /// Opens a picker on `current`, clamped into `bounds`.
    ///
    /// ```
    /// use blink_menu::NumberPicker;
    ///
    /// let picker = NumberPicker::new("Duration (min)", 90, 1..=60);
    ///
    /// assert_eq!(picker.value(), 60);
    /// ```
    pub fn new(header: &'static str, current: u32, bounds: RangeInclusive<u32>) -> Self {
        let (min, max) = bounds.into_inner();

        Self {
            header,
            value: current.clamp(min, max),
            min,
            max,
        }
    }

    pub const fn header(&self) -> &'static str {
        self.header
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub fn increment(&mut self, step: u32) {
        self.value = self.value.saturating_add(step).min(self.max);
    }

    pub fn decrement(&mut self, step: u32) {
        self.value = self.value.saturating_sub(step).max(self.min);
    }
}

impl Default for NumberPicker {
    fn default() -> Self {
        Self::new("", 0, 0..=0)
    }
}
