#![feature(impl_trait_in_assoc_type)]
#![no_std]
#![no_main]

mod button;
mod constants;
mod display;
mod led;
mod state;
mod ui;

#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

use blink_fmt::info;
use blink_menu::Button;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};

use crate::constants::BLINK_VARIANT;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    let led = Output::new(p.P0_28, Level::Low, OutputDrive::Standard);

    spawner.must_spawn(led::task(led));
    spawner.must_spawn(display::task());

    spawner.must_spawn(button::task(Input::new(p.P0_11, Pull::Up), Button::Up));
    spawner.must_spawn(button::task(Input::new(p.P0_12, Pull::Up), Button::Down));
    spawner.must_spawn(button::task(Input::new(p.P0_26, Pull::Up), Button::Left));
    spawner.must_spawn(button::task(Input::new(p.P0_27, Pull::Up), Button::Right));
    spawner.must_spawn(button::task(Input::new(p.P0_24, Pull::Up), Button::Ok));
    spawner.must_spawn(button::task(Input::new(p.P0_25, Pull::Up), Button::Back));

    spawner.must_spawn(ui::task(BLINK_VARIANT));

    info!("Blinker is go!");
}
