use blink_fmt::info;

use crate::state::SCREEN;

/// Writes every published screen to the console.
#[embassy_executor::task]
pub async fn task() {
    loop {
        let screen = SCREEN.wait().await;

        info!("== {} ==", screen.header());

        for line in screen.lines() {
            info!("   {}", line);
        }

        let [left, center, right] = screen.buttons();

        if !(left.is_empty() && center.is_empty() && right.is_empty()) {
            info!("[{}] [{}] [{}]", left, center, right);
        }
    }
}
