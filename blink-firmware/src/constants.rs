use blink_menu::Variant;

pub const BLINK_VARIANT: Variant = Variant::BpmSweep;

pub const RUN_TICK_SECS: u64 = 1;
pub const BUTTON_DEBOUNCE_MS: u64 = 20;
pub const BUTTON_QUEUE_DEPTH: usize = 4;
