use blink_fmt::{debug, error};
use blink_led::{BlinkLed, ToggleSchedule};
use embassy_futures::select::{Either, select};
use embassy_nrf::gpio::Output;
use embassy_time::{Instant, Timer};

use crate::state::{LED_MODE, LedMode};

#[embassy_executor::task]
pub async fn task(led: Output<'static>) {
    let mut led = BlinkLed::new(led);
    let mut schedule = ToggleSchedule::starting_at(Instant::now().as_millis());
    let mut mode = LedMode::Off;

    loop {
        let next = match mode {
            LedMode::Off => {
                if led.off().is_err() {
                    error!("LED could not be switched off");
                }

                let next = LED_MODE.wait().await;
                schedule = ToggleSchedule::starting_at(Instant::now().as_millis());
                next
            }
            LedMode::Blink { toggle_ms } => {
                // Measured from the last toggle, so a new rate moves the deadline.
                let due = Instant::from_millis(schedule.deadline_ms(toggle_ms));

                match select(LED_MODE.wait(), Timer::at(due)).await {
                    Either::First(next) => next,
                    Either::Second(()) => {
                        if led.toggle().is_err() {
                            error!("LED could not be toggled");
                        }

                        schedule.toggled_at(due.as_millis().max(Instant::now().as_millis()));
                        mode
                    }
                }
            }
        };

        if next != mode {
            debug!("LED mode {:?} -> {:?}", mode, next);
            mode = next;
        }
    }
}
