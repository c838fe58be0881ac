//! Pixelpad - ST7735 game display firmware
//!
//! Main firmware binary for RP2040 boards driving a 128x128 ST7735 LCD.
//! Brings the panel up, optionally shows a splash image, then streams one
//! game frame per loop iteration: a joystick-driven paddle or a block grid
//! written to shared memory by another producer.
//!
//! Board wiring:
//! - SPI0: CLK=GPIO18, MOSI=GPIO19, CS=GPIO17
//! - Register select (D/C)=GPIO20, reset=GPIO21
//! - Joystick X axis on ADC0 (GPIO26)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::Delay;
use embedded_graphics::prelude::Size;
use {defmt_rtt as _, panic_probe as _};

use pixelpad_core::config::AppMode;
use pixelpad_core::grid::GridScene;
use pixelpad_core::paddle::PaddleScene;
use pixelpad_core::splash::SplashImage;
use pixelpad_core::{PANEL_HEIGHT, PANEL_WIDTH};
use pixelpad_drivers::input::RegisterGrid;
use pixelpad_drivers::st7735::{BringUp, PinControl};
use pixelpad_drivers::{FramePipeline, St7735};
use pixelpad_hal::spi::SpiConfig;
use pixelpad_hal_rp2040::spi::spi_config;
use pixelpad_hal_rp2040::{BlockingSpi, JoystickAdc, MmioBlock, Pin};

use crate::config::load_config;
use crate::stats::FrameStats;

mod config;
mod stats;

/// Splash image converted from assets/splash.png by build.rs
///
/// Empty when the firmware was built without one.
static SPLASH: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/splash.bin"));

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Pixelpad firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Display bus and control lines
    let cs = Output::new(p.PIN_17, Level::High);
    let rs = Pin::new(Output::new(p.PIN_20, Level::Low));
    let rst = Pin::new(Output::new(p.PIN_21, Level::High));
    let spi = Spi::new_blocking_txonly(
        p.SPI0,
        p.PIN_18,
        p.PIN_19,
        spi_config(&SpiConfig::default()),
    );
    let mut display = St7735::new(BlockingSpi::new(spi, cs), PinControl::new(rs, rst));

    let splash = if config.splash.enabled {
        match SplashImage::new(SPLASH, PANEL_WIDTH, PANEL_HEIGHT) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Splash image unusable ({}), skipping", e);
                None
            }
        }
    } else {
        None
    };

    let mut delay = Delay;
    let orientation = config.mode.frame_orientation();
    let bring_up = BringUp::for_panel(
        &config.panel,
        config.mode.bring_up_orientation(splash.is_some()),
    );
    if let Err(e) = display.init(&bring_up, &mut delay) {
        error!("Display bring-up failed: {}", e);
        defmt::panic!("display bring-up failed");
    }
    info!("Display initialized ({})", bring_up.orientation);

    let mut pipeline: FramePipeline<_, _, PANEL_WIDTH, PANEL_HEIGHT> =
        FramePipeline::new(display);

    if let Some(image) = splash {
        if let Err(e) = pipeline.show_splash(&image, config.splash.hold_ms, orientation, &mut delay)
        {
            error!("Splash failed: {}", e);
            defmt::panic!("splash failed");
        }
        info!("Splash shown for {}ms", config.splash.hold_ms);
    }

    let result = match config.mode {
        AppMode::Paddle => {
            let adc = Adc::new_blocking(p.ADC, adc::Config::default());
            let channel = Channel::new_pin(p.PIN_26, Pull::None);
            let mut scene = PaddleScene::new(
                JoystickAdc::new(adc, channel),
                config.paddle,
                orientation,
                Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32),
            );
            info!("Running paddle scene");
            pipeline.run(&mut scene, &mut FrameStats::new())
        }
        AppMode::Tetris => {
            // SAFETY: validated as word aligned; the default points at the
            // SCRATCH_X bank, which memory.x keeps out of the linker's RAM
            let regs = unsafe { MmioBlock::new(config.grid.base_address as usize) };
            let mut scene = GridScene::new(RegisterGrid::new(regs, 0), &config.grid, PANEL_WIDTH);
            info!(
                "Running tetris scene, grid at {=u32:#x}",
                config.grid.base_address
            );
            pipeline.run(&mut scene, &mut FrameStats::new())
        }
    };

    match result {
        Ok(frames) => info!("Frame loop ended after {} frames", frames),
        Err(e) => {
            error!("Frame loop failed: {}", e);
            defmt::panic!("display transfer failed");
        }
    }
}
