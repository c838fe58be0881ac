//! ST7735 driver
//!
//! Owns the SPI bus and the control lines. Every command byte is its own
//! command-mode transaction; parameters and pixels follow as data-mode
//! transactions.

use embedded_hal::delay::DelayNs;
use pixelpad_core::splash::SplashImage;
use pixelpad_core::Orientation;
use pixelpad_hal::SpiBus;

use super::command::{cmd, madctl_byte};
use super::control::{ControlLines, Mode};
use super::sequence::{bring_up_sequence, BringUp, InitStep, RESET_HOLD_MS};
use crate::error::DisplayError;

/// Bytes buffered per transaction while streaming a splash image
const SPLASH_CHUNK: usize = 256;

/// ST7735 display controller
pub struct St7735<SPI, CTL> {
    spi: SPI,
    lines: CTL,
}

impl<SPI, CTL> St7735<SPI, CTL>
where
    SPI: SpiBus,
    CTL: ControlLines,
{
    /// Create a driver; the panel is not touched until [`St7735::init`]
    pub fn new(spi: SPI, lines: CTL) -> Self {
        Self { spi, lines }
    }

    /// Give back the bus and control lines
    pub fn release(self) -> (SPI, CTL) {
        (self.spi, self.lines)
    }

    /// Pulse the reset line and wait for the controller to recover
    pub fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.lines.set_reset(true);
        delay.delay_ms(RESET_HOLD_MS);
        self.lines.set_reset(false);
        delay.delay_ms(RESET_HOLD_MS);
    }

    /// Reset the controller and run the bring-up sequence
    ///
    /// The sequence ends with a memory write command, so pixel data may
    /// follow immediately.
    pub fn init<D: DelayNs>(
        &mut self,
        bring_up: &BringUp,
        delay: &mut D,
    ) -> Result<(), DisplayError<SPI::Error>> {
        let steps = bring_up_sequence(bring_up)?;
        self.hard_reset(delay);
        self.run_sequence(&steps, delay)
    }

    /// Execute steps in order, honoring each step's delay
    pub fn run_sequence<D: DelayNs>(
        &mut self,
        steps: &[InitStep],
        delay: &mut D,
    ) -> Result<(), DisplayError<SPI::Error>> {
        for step in steps {
            self.command(step.command)?;
            if !step.data.is_empty() {
                self.data(&step.data)?;
            }
            if step.delay_ms > 0 {
                delay.delay_ms(step.delay_ms);
            }
        }
        Ok(())
    }

    /// Send one command byte
    pub fn command(&mut self, command: u8) -> Result<(), DisplayError<SPI::Error>> {
        self.lines.select(Mode::Command);
        self.spi.write(&[command]).map_err(DisplayError::Bus)
    }

    /// Send parameter or pixel bytes as one transaction
    pub fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError<SPI::Error>> {
        self.lines.select(Mode::Data);
        self.spi.write(bytes).map_err(DisplayError::Bus)
    }

    /// Change the scan orientation
    pub fn set_orientation(
        &mut self,
        orientation: Orientation,
    ) -> Result<(), DisplayError<SPI::Error>> {
        self.command(cmd::MADCTL)?;
        self.data(&[madctl_byte(orientation)])
    }

    /// Start a memory write and send `pixels` as a single transaction
    pub fn write_pixels(&mut self, pixels: &[u8]) -> Result<(), DisplayError<SPI::Error>> {
        self.command(cmd::RAMWR)?;
        self.data(pixels)
    }

    /// Stream a splash image in panel order
    ///
    /// Must follow a memory write command; no new one is issued.
    pub fn write_splash(&mut self, image: &SplashImage<'_>) -> Result<(), DisplayError<SPI::Error>> {
        self.lines.select(Mode::Data);
        let mut chunk = [0u8; SPLASH_CHUNK];
        let mut len = 0;
        for byte in image.stream() {
            chunk[len] = byte;
            len += 1;
            if len == SPLASH_CHUNK {
                self.spi.write(&chunk).map_err(DisplayError::Bus)?;
                len = 0;
            }
        }
        if len > 0 {
            self.spi.write(&chunk[..len]).map_err(DisplayError::Bus)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{data_bytes, Event, MockBus};
    use crate::st7735::control::RegisterControl;
    use pixelpad_core::config::PanelConfig;

    #[test]
    fn test_bring_up_events() {
        let bus = MockBus::new();
        let mut display = St7735::new(bus.spi(), bus.lines());
        let bring_up = BringUp::for_panel(&PanelConfig::default(), Orientation::Default);
        display.init(&bring_up, &mut bus.delay()).unwrap();

        assert_eq!(
            bus.events(),
            [
                Event::Reset(true),
                Event::DelayMs(120),
                Event::Reset(false),
                Event::DelayMs(120),
                Event::Command(0x11),
                Event::DelayMs(120),
                Event::Command(0x26),
                Event::Data(vec![0x04]),
                Event::Command(0xB1),
                Event::Data(vec![0x0A, 0x14]),
                Event::Command(0xC0),
                Event::Data(vec![0x0A, 0x00]),
                Event::Command(0x3A),
                Event::Data(vec![0x05]),
                Event::DelayMs(10),
                Event::Command(0x36),
                Event::Data(vec![0x08]),
                Event::Command(0x13),
                Event::DelayMs(10),
                Event::Command(0x29),
                Event::Command(0x2A),
                Event::Data(vec![0, 2, 0, 129]),
                Event::Command(0x2B),
                Event::Data(vec![0, 1, 0, 128]),
                Event::Command(0x00),
                Event::Command(0x2C),
            ]
        );
    }

    #[test]
    fn test_set_orientation() {
        let bus = MockBus::new();
        let mut display = St7735::new(bus.spi(), bus.lines());
        display.set_orientation(Orientation::MirroredVertical).unwrap();
        display.set_orientation(Orientation::Rotated).unwrap();
        assert_eq!(
            bus.events(),
            [
                Event::Command(0x36),
                Event::Data(vec![0x88]),
                Event::Command(0x36),
                Event::Data(vec![0xE8]),
            ]
        );
    }

    #[test]
    fn test_bus_error_stops_sequence() {
        let bus = MockBus::new();
        bus.fail_after(3);
        let mut display = St7735::new(bus.spi(), bus.lines());
        let bring_up = BringUp::for_panel(&PanelConfig::default(), Orientation::Default);
        let result = display.init(&bring_up, &mut bus.delay());

        assert_eq!(result, Err(DisplayError::Bus(crate::mock::BusFault)));
        // SLPOUT, GAMSET and its parameter went out, nothing after
        let sent = bus
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Command(_) | Event::Data(_)))
            .count();
        assert_eq!(sent, 3);
    }

    #[test]
    fn test_invalid_window_sends_nothing() {
        let bus = MockBus::new();
        let mut display = St7735::new(bus.spi(), bus.lines());
        // 65534 + 2 does not fit in the 16-bit window end
        let bring_up = BringUp {
            row_offset: 2,
            height: u16::MAX,
            ..BringUp::for_panel(&PanelConfig::default(), Orientation::Default)
        };
        assert_eq!(
            display.init(&bring_up, &mut bus.delay()),
            Err(DisplayError::InvalidWindow)
        );
        assert!(bus.events().is_empty());
    }

    #[test]
    fn test_splash_chunks_concatenate() {
        // 16 x 10 pixels = 320 bytes, two transactions
        let bytes: Vec<u8> = (0..320u16).map(|i| i as u8).collect();
        let image = SplashImage::new(&bytes, 16, 10).unwrap();
        let bus = MockBus::new();
        let mut display = St7735::new(bus.spi(), bus.lines());
        display.write_splash(&image).unwrap();

        let events = bus.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], Event::Data(d) if d.len() == 256));
        let expected: Vec<u8> = image.stream().collect();
        assert_eq!(data_bytes(&events), expected);
    }

    #[test]
    fn test_register_control_wiring() {
        let bus = MockBus::new();
        bus.record_raw();
        let mut regs = crate::mock::MockRegs::default();
        let mut display = St7735::new(bus.spi(), RegisterControl::new(&mut regs, 0));
        display.write_pixels(&[0xAB, 0xCD]).unwrap();
        drop(display);

        // RS low for RAMWR, then high for the pixels
        assert_eq!(regs.writes, [(0, 0x02), (0, 0x03)]);
        assert_eq!(
            bus.events(),
            [Event::Data(vec![0x2C]), Event::Data(vec![0xAB, 0xCD])]
        );
    }
}
