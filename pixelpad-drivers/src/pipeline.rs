//! Frame pipeline
//!
//! Owns the framebuffer and the display. Each iteration sends the current
//! frame (memory write command plus one bulk data transaction) and then
//! lets the scene draw the next one, so input sampling overlaps nothing and
//! the panel always shows the frame rendered one iteration earlier.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_hal::delay::DelayNs;
use pixelpad_core::run::RunControl;
use pixelpad_core::splash::SplashImage;
use pixelpad_core::{Framebuffer, Orientation, Scene};
use pixelpad_hal::SpiBus;

use crate::error::DisplayError;
use crate::st7735::{ControlLines, St7735};

/// Framebuffer-to-panel loop
pub struct FramePipeline<SPI, CTL, const W: usize, const H: usize> {
    display: St7735<SPI, CTL>,
    framebuffer: Framebuffer<W, H>,
    frames: u32,
}

impl<SPI, CTL, const W: usize, const H: usize> FramePipeline<SPI, CTL, W, H>
where
    SPI: SpiBus,
    CTL: ControlLines,
{
    /// Wrap an initialized display; the framebuffer starts black
    pub fn new(display: St7735<SPI, CTL>) -> Self {
        Self {
            display,
            framebuffer: Framebuffer::new(),
            frames: 0,
        }
    }

    /// Frames transmitted by [`FramePipeline::step`] so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Frame that the next transmission sends
    pub fn framebuffer(&self) -> &Framebuffer<W, H> {
        &self.framebuffer
    }

    /// Mutable access for drawing outside a scene
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<W, H> {
        &mut self.framebuffer
    }

    /// Direct access to the display
    pub fn display_mut(&mut self) -> &mut St7735<SPI, CTL> {
        &mut self.display
    }

    /// Give back the display
    pub fn release(self) -> St7735<SPI, CTL> {
        self.display
    }

    /// Send the framebuffer as one memory write
    pub fn transmit(&mut self) -> Result<(), DisplayError<SPI::Error>> {
        self.display.write_pixels(self.framebuffer.as_bytes())
    }

    /// Show a splash image, then black out and switch orientation
    ///
    /// Must run directly after bring-up: the image streams into the memory
    /// write the bring-up sequence left open. After `hold_ms` a black frame
    /// replaces it and `next` becomes the scan orientation.
    pub fn show_splash<D: DelayNs>(
        &mut self,
        image: &SplashImage<'_>,
        hold_ms: u32,
        next: Orientation,
        delay: &mut D,
    ) -> Result<(), DisplayError<SPI::Error>> {
        if image.width() != W || image.height() != H {
            return Err(DisplayError::SplashSize);
        }
        self.display.write_splash(image)?;
        delay.delay_ms(hold_ms);
        self.framebuffer.fill(Rgb565::BLACK);
        self.transmit()?;
        self.display.set_orientation(next)
    }

    /// One iteration: send the current frame, then render the next
    pub fn step<S: Scene<W, H> + ?Sized>(
        &mut self,
        scene: &mut S,
    ) -> Result<(), DisplayError<SPI::Error>> {
        self.transmit()?;
        scene.render(&mut self.framebuffer);
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }

    /// Iterate until `control` says stop
    ///
    /// Returns the frame count. A bus error ends the loop immediately.
    pub fn run<S, R>(
        &mut self,
        scene: &mut S,
        control: &mut R,
    ) -> Result<u32, DisplayError<SPI::Error>>
    where
        S: Scene<W, H> + ?Sized,
        R: RunControl + ?Sized,
    {
        while control.keep_running(self.frames) {
            self.step(scene)?;
        }
        Ok(self.frames)
    }
}
