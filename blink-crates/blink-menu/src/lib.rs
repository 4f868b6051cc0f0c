//! The blinker's menu flow: a main/config screen, a number picker for the run parameters and
//! an execution screen, driven by button presses and one second ticks.
//!
//! [`Blinker`] holds no timers or pins. Each event returns the [`Effect`]s the host has to carry
//! out, and [`Blinker::screen`] renders what should be on the display afterwards.
//!
//! ```
//! use blink_menu::{Blinker, Button, Effect, Event, Variant, View};
//!
//! let mut blinker = Blinker::new(Variant::BpmSweep);
//!
//! let effects = blinker.handle(Event::Press(Button::Ok));
//!
//! assert_eq!(blinker.view(), View::Exec);
//! assert_eq!(&effects[..], &[Effect::StartTimer, Effect::Blink { toggle_ms: 250 }]);
//! ```
#![no_std]

mod picker;
mod screen;
mod variant;

use blink_fmt::{debug, info};
use blink_ramp::Ramp;
use heapless::Vec;

pub use picker::NumberPicker;
pub use screen::Screen;
pub use variant::Variant;

use screen::Clock;

const COARSE_STEP: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    Main,
    NumberPicker,
    Exec,
}

/// Which field the number picker is editing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PickerMode {
    Max,
    Min,
    Duration,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Press(Button),
    /// Periodic update while a run is active, with the seconds since it started.
    Tick { elapsed_secs: u32 },
}

/// Work for the host after handling an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Start delivering [`Event::Tick`]s, counting from now.
    StartTimer,
    StopTimer,
    /// Toggle the LED every `toggle_ms` milliseconds until told otherwise.
    Blink { toggle_ms: u32 },
    LedOff,
    /// Back was pressed on the main screen.
    Exit,
}

pub type Effects = Vec<Effect, 3>;

/// Run parameters, in the units of the active [`Variant`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub duration: u32,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Run {
    ramp: Ramp,
    value: u32,
    elapsed_secs: u32,
    finished: bool,
}

#[derive(Debug, Clone)]
pub struct Blinker {
    variant: Variant,
    settings: Settings,
    view: View,
    mode: PickerMode,
    picker: NumberPicker,
    run: Option<Run>,
}

impl Blinker {
    pub fn new(variant: Variant) -> Self {
        Self::with_settings(variant, variant.defaults())
    }

    pub fn with_settings(variant: Variant, settings: Settings) -> Self {
        Self {
            variant,
            settings,
            view: View::Main,
            mode: PickerMode::Duration,
            picker: NumberPicker::default(),
            run: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn picker(&self) -> &NumberPicker {
        &self.picker
    }

    pub fn handle(&mut self, event: Event) -> Effects {
        let mut effects = Effects::new();

        match (self.view, event) {
            (View::Main, Event::Press(button)) => self.on_main(button, &mut effects),
            (View::NumberPicker, Event::Press(button)) => self.on_picker(button),
            (View::Exec, Event::Press(Button::Back)) => {
                self.run = None;
                effects.extend([Effect::StopTimer, Effect::LedOff]);
                self.switch_to(View::Main);
            }
            (View::Exec, Event::Tick { elapsed_secs }) => self.on_tick(elapsed_secs, &mut effects),
            _ => {}
        }

        effects
    }

    fn on_main(&mut self, button: Button, effects: &mut Effects) {
        match button {
            Button::Left => {
                let first = self.variant.interval_fields()[0];
                self.open_picker(first);
            }
            Button::Right => self.open_picker(PickerMode::Duration),
            Button::Ok => {
                let ramp = self.variant.ramp(&self.settings);
                let value = ramp.start();

                info!(
                    "Starting run: {} -> {} over {}s",
                    ramp.start(),
                    ramp.end(),
                    ramp.duration_secs()
                );

                self.run = Some(Run {
                    ramp,
                    value,
                    elapsed_secs: 0,
                    finished: false,
                });
                effects.extend([Effect::StartTimer, self.blink(value)]);
                self.switch_to(View::Exec);
            }
            Button::Back => {
                effects.push(Effect::Exit).ok();
            }
            Button::Up | Button::Down => {}
        }
    }

    fn on_picker(&mut self, button: Button) {
        match button {
            Button::Up => self.picker.increment(1),
            Button::Down => self.picker.decrement(1),
            Button::Right => self.picker.increment(COARSE_STEP),
            Button::Left => self.picker.decrement(COARSE_STEP),
            Button::Back => self.switch_to(View::Main),
            Button::Ok => {
                let value = self.picker.value();

                match self.mode {
                    PickerMode::Max => self.settings.max = value,
                    PickerMode::Min => self.settings.min = value,
                    PickerMode::Duration => self.settings.duration = value,
                }

                debug!("{:?} set to {}", self.mode, value);

                match self.next_field() {
                    Some(next) => self.open_picker(next),
                    None => self.switch_to(View::Main),
                }
            }
        }
    }

    fn on_tick(&mut self, elapsed_secs: u32, effects: &mut Effects) {
        let unit = self.variant.rate_unit();

        let Some(run) = self.run.as_mut() else {
            return;
        };

        if run.finished {
            return;
        }

        run.elapsed_secs = elapsed_secs;

        if run.ramp.is_finished(elapsed_secs) {
            run.finished = true;
            run.value = run.ramp.end();
            info!("Run finished after {}s", elapsed_secs);
            effects.extend([Effect::StopTimer, Effect::LedOff]);
            return;
        }

        let value = run.ramp.value_at(elapsed_secs);

        if value != run.value {
            run.value = value;
            effects
                .push(Effect::Blink {
                    toggle_ms: unit.toggle_interval_ms(value),
                })
                .ok();
        }
    }

    fn next_field(&self) -> Option<PickerMode> {
        let fields = self.variant.interval_fields();

        fields
            .iter()
            .position(|&field| field == self.mode)
            .and_then(|index| fields.get(index + 1))
            .copied()
    }

    fn field(&self, mode: PickerMode) -> u32 {
        match mode {
            PickerMode::Max => self.settings.max,
            PickerMode::Min => self.settings.min,
            PickerMode::Duration => self.settings.duration,
        }
    }

    fn open_picker(&mut self, mode: PickerMode) {
        let current = self.field(mode);

        self.mode = mode;
        self.picker = NumberPicker::new(
            self.variant.picker_header(mode),
            current,
            self.variant.bounds(mode),
        );
        self.switch_to(View::NumberPicker);
    }

    fn switch_to(&mut self, view: View) {
        debug!("View {:?} -> {:?}", self.view, view);
        self.view = view;
    }

    fn blink(&self, value: u32) -> Effect {
        Effect::Blink {
            toggle_ms: self.variant.rate_unit().toggle_interval_ms(value),
        }
    }

    /// Renders the current view.
    pub fn screen(&self) -> Screen {
        let rate = self.variant.rate_unit().label();

        match self.view {
            View::Main => {
                let mut screen =
                    Screen::new(self.variant.title()).with_buttons("Int.", "Flash", "Dur.");

                screen.line(format_args!(
                    "Duration: {} {}",
                    self.settings.duration,
                    self.variant.duration_unit().label()
                ));

                match *self.variant.interval_fields() {
                    [field] => {
                        screen.line(format_args!("Rate: {} {}", self.field(field), rate));
                    }
                    [first, second, ..] => {
                        screen.line(format_args!(
                            "Interval: {} - {} {}",
                            self.field(first),
                            self.field(second),
                            rate
                        ));
                    }
                    [] => {}
                }

                screen
            }
            View::NumberPicker => {
                let mut screen = Screen::new(self.picker.header()).with_buttons("-10", "OK", "+10");

                screen
                    .line(format_args!("< {} >", self.picker.value()))
                    .line(format_args!("{} - {}", self.picker.min(), self.picker.max()));

                screen
            }
            View::Exec => {
                let Some(run) = self.run.as_ref() else {
                    return Screen::new("Blinking");
                };

                let mut screen = Screen::new(if run.finished { "Done" } else { "Blinking" });

                match self.variant.rate_unit() {
                    blink_ramp::RateUnit::Bpm => screen.line(format_args!("BPM: {}", run.value)),
                    blink_ramp::RateUnit::Millis => {
                        screen.line(format_args!("Interval: {} {}", run.value, rate))
                    }
                };

                screen.line(format_args!(
                    "{} left",
                    Clock(run.ramp.remaining_secs(run.elapsed_secs))
                ));

                screen
            }
        }
    }
}
