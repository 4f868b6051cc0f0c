use blink_fmt::trace;
use blink_menu::Button;
use embassy_nrf::gpio::Input;
use embassy_time::Timer;

use crate::{constants::BUTTON_DEBOUNCE_MS, state::BUTTON_PRESSES};

#[embassy_executor::task(pool_size = 6)]
pub async fn task(mut btn: Input<'static>, button: Button) {
    let presses = BUTTON_PRESSES.sender();

    loop {
        btn.wait_for_falling_edge().await;
        Timer::after_millis(BUTTON_DEBOUNCE_MS).await;

        // Bounced, not held.
        if btn.is_low() {
            trace!("{:?} pressed", button);
            presses.send(button).await;
        }

        btn.wait_for_high().await;
    }
}
