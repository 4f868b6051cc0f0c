use core::fmt::Write;

use heapless::String;

pub const SCREEN_TEXT_LEN: usize = 64;

/// Everything shown on the display for one view: a header, a short body of text split into
/// lines, and labels for the left, center and right buttons. Empty labels are not shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    header: &'static str,
    text: String<SCREEN_TEXT_LEN>,
    buttons: [&'static str; 3],
}

impl Screen {
    pub(crate) fn new(header: &'static str) -> Self {
        Self {
            header,
            ..Default::default()
        }
    }

    pub(crate) fn with_buttons(
        mut self,
        left: &'static str,
        center: &'static str,
        right: &'static str,
    ) -> Self {
        self.buttons = [left, center, right];
        self
    }

    /// Appends a line of formatted text. Text that does not fit is cut off.
    pub(crate) fn line(&mut self, args: core::fmt::Arguments<'_>) -> &mut Self {
        if !self.text.is_empty() {
            self.text.push('\n').ok();
        }
        self.text.write_fmt(args).ok();
        self
    }

    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n').filter(|line| !line.is_empty())
    }

    pub fn buttons(&self) -> [&'static str; 3] {
        self.buttons
    }
}

/// `m:ss` for a number of seconds.
pub(crate) struct Clock(pub u32);

impl core::fmt::Display for Clock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_split_on_newlines() {
        let mut screen = Screen::new("Blinker").with_buttons("Int.", "Flash", "Dur.");

        screen
            .line(format_args!("Duration: {} min", 20))
            .line(format_args!("Interval: {} - {} bpm", 120, 60));

        let mut lines = screen.lines();

        assert_eq!(lines.next(), Some("Duration: 20 min"));
        assert_eq!(lines.next(), Some("Interval: 120 - 60 bpm"));
        assert_eq!(lines.next(), None);
        assert_eq!(screen.buttons(), ["Int.", "Flash", "Dur."]);
    }

    #[test]
    fn overlong_text_is_truncated() {
        let mut screen = Screen::new("Blinker");

        for _ in 0..10 {
            screen.line(format_args!("0123456789"));
        }

        assert!(screen.text().len() <= SCREEN_TEXT_LEN);
    }

    #[test]
    fn clock_formatting() {
        let mut out: String<8> = String::new();

        write!(out, "{}", Clock(1199)).unwrap();
        assert_eq!(out, "19:59");
    }
}
