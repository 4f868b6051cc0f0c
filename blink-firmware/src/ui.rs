use blink_fmt::{debug, info};
use blink_menu::{Blinker, Effect, Event, Variant};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Ticker};

use crate::{
    constants::RUN_TICK_SECS,
    state::{BUTTON_PRESSES, LED_MODE, LedMode, SCREEN},
};

struct ActiveRun {
    started: Instant,
    ticker: Ticker,
}

impl ActiveRun {
    fn start() -> Self {
        Self {
            started: Instant::now(),
            ticker: Ticker::every(Duration::from_secs(RUN_TICK_SECS)),
        }
    }
}

fn elapsed_secs(since: Instant) -> u32 {
    u32::try_from(since.elapsed().as_secs()).unwrap_or(u32::MAX)
}

#[embassy_executor::task]
pub async fn task(variant: Variant) {
    let mut blinker = Blinker::new(variant);
    let presses = BUTTON_PRESSES.receiver();
    let mut run: Option<ActiveRun> = None;

    info!("Running the {:?} blinker", variant);

    SCREEN.signal(blinker.screen());

    loop {
        let event = match run.as_mut() {
            Some(active) => match select(presses.receive(), active.ticker.next()).await {
                Either::First(button) => Event::Press(button),
                Either::Second(()) => Event::Tick {
                    elapsed_secs: elapsed_secs(active.started),
                },
            },
            None => Event::Press(presses.receive().await),
        };

        for effect in blinker.handle(event) {
            debug!("Effect {:?}", effect);

            match effect {
                Effect::StartTimer => run = Some(ActiveRun::start()),
                Effect::StopTimer => run = None,
                Effect::Blink { toggle_ms } => LED_MODE.signal(LedMode::Blink { toggle_ms }),
                Effect::LedOff => LED_MODE.signal(LedMode::Off),
                Effect::Exit => {
                    LED_MODE.signal(LedMode::Off);
                    info!("Nothing to exit to, staying on the main menu");
                }
            }
        }

        SCREEN.signal(blinker.screen());
    }
}
