use blink_menu::{Button, Screen};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel, signal::Signal};

use crate::constants::BUTTON_QUEUE_DEPTH;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    Off,
    Blink { toggle_ms: u32 },
}

pub static BUTTON_PRESSES: Channel<ThreadModeRawMutex, Button, BUTTON_QUEUE_DEPTH> = Channel::new();
pub static LED_MODE: Signal<ThreadModeRawMutex, LedMode> = Signal::new();
pub static SCREEN: Signal<ThreadModeRawMutex, Screen> = Signal::new();
