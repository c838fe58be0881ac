//! Joystick-driven paddle
//!
//! The paddle slides along the bottom edge of the logical panel. Each frame
//! the joystick reading is compared against two thresholds; everything in
//! between is a dead zone.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::PaddleConfig;
use crate::framebuffer::Framebuffer;
use crate::orientation::Orientation;
use crate::scene::Scene;
use crate::traits::AxisSource;

/// Paddle movement decided from one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Movement {
    /// Stick deflected left
    Left,
    /// Stick in the dead zone
    Hold,
    /// Stick deflected right
    Right,
}

impl PaddleConfig {
    /// Classify a joystick reading
    ///
    /// Both thresholds belong to the dead zone.
    pub fn movement(&self, reading: u16) -> Movement {
        if reading < self.left_threshold {
            Movement::Left
        } else if reading > self.right_threshold {
            Movement::Right
        } else {
            Movement::Hold
        }
    }
}

/// Paddle position state
///
/// Only the horizontal offset changes between frames. It always lies in
/// `0..=max_x`.
#[derive(Debug, Clone)]
pub struct Paddle {
    config: PaddleConfig,
    x: u16,
    y: u16,
    max_x: u16,
}

impl Paddle {
    /// Create a centered paddle for a logical panel of `area`
    pub fn new(config: PaddleConfig, area: Size) -> Self {
        let width = u16::try_from(area.width).unwrap_or(u16::MAX);
        let height = u16::try_from(area.height).unwrap_or(u16::MAX);
        let max_x = width.saturating_sub(config.width);
        Self {
            config,
            x: max_x / 2,
            y: height.saturating_sub(1).saturating_sub(config.height),
            max_x,
        }
    }

    /// Current horizontal offset
    pub fn x(&self) -> u16 {
        self.x
    }

    /// Largest allowed horizontal offset
    pub fn max_x(&self) -> u16 {
        self.max_x
    }

    /// Apply one joystick reading
    pub fn update(&mut self, reading: u16) -> Movement {
        let movement = self.config.movement(reading);
        self.x = match movement {
            Movement::Left => self.x.saturating_sub(self.config.step),
            Movement::Right => self.x.saturating_add(self.config.step),
            Movement::Hold => self.x,
        }
        .min(self.max_x);
        movement
    }

    /// Paddle rectangle in logical coordinates
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(i32::from(self.x), i32::from(self.y)),
            Size::new(u32::from(self.config.width), u32::from(self.config.height)),
        )
    }
}

/// Paddle scene: black field with one white paddle
pub struct PaddleScene<A> {
    axis: A,
    paddle: Paddle,
    orientation: Orientation,
}

impl<A: AxisSource> PaddleScene<A> {
    /// Create the scene for a panel of `panel` pixels shown in `orientation`
    pub fn new(axis: A, config: PaddleConfig, orientation: Orientation, panel: Size) -> Self {
        Self {
            axis,
            paddle: Paddle::new(config, orientation.logical_size(panel)),
            orientation,
        }
    }

    /// Current paddle state
    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }
}

impl<A: AxisSource, const W: usize, const H: usize> Scene<W, H> for PaddleScene<A> {
    fn name(&self) -> &'static str {
        "paddle"
    }

    fn render(&mut self, fb: &mut Framebuffer<W, H>) {
        fb.fill(Rgb565::BLACK);
        let reading = self.axis.sample();
        self.paddle.update(reading);
        fb.fill_rect(
            &self.orientation.to_framebuffer(self.paddle.bounds()),
            Rgb565::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::PanelFramebuffer;
    use proptest::prelude::*;

    const PANEL: Size = Size::new(128, 128);

    struct Script {
        readings: Vec<u16>,
        next: usize,
    }

    impl AxisSource for Script {
        fn sample(&mut self) -> u16 {
            let value = self.readings.get(self.next).copied().unwrap_or(1650);
            self.next += 1;
            value
        }
    }

    fn script(readings: &[u16]) -> Script {
        Script {
            readings: readings.to_vec(),
            next: 0,
        }
    }

    #[test]
    fn test_initial_position_is_centered() {
        let paddle = Paddle::new(PaddleConfig::default(), PANEL);
        assert_eq!(paddle.x(), (128 - 25) / 2);
        assert_eq!(paddle.max_x(), 103);
        assert_eq!(paddle.bounds().top_left.y, 122);
    }

    #[test]
    fn test_dead_zone_boundaries() {
        let config = PaddleConfig::default();
        assert_eq!(config.movement(1500), Movement::Hold);
        assert_eq!(config.movement(1800), Movement::Hold);
        assert_eq!(config.movement(1499), Movement::Left);
        assert_eq!(config.movement(1801), Movement::Right);

        let mut paddle = Paddle::new(config, PANEL);
        let start = paddle.x();
        paddle.update(1500);
        paddle.update(1800);
        assert_eq!(paddle.x(), start);
        paddle.update(1499);
        assert_eq!(paddle.x(), start - 10);
        paddle.update(1801);
        assert_eq!(paddle.x(), start);
    }

    #[test]
    fn test_left_edge_does_not_wrap() {
        let mut paddle = Paddle::new(PaddleConfig::default(), PANEL);
        for _ in 0..20 {
            paddle.update(0);
        }
        assert_eq!(paddle.x(), 0);
    }

    #[test]
    fn test_right_edge_clamps() {
        let mut paddle = Paddle::new(PaddleConfig::default(), PANEL);
        for _ in 0..20 {
            paddle.update(0x0FFF);
        }
        assert_eq!(paddle.x(), 103);
    }

    #[test]
    fn test_render_rotated_transposes() {
        let mut scene = PaddleScene::new(
            script(&[1650]),
            PaddleConfig::default(),
            Orientation::Rotated,
            PANEL,
        );
        let mut fb = PanelFramebuffer::new();
        fb.fill(Rgb565::RED);
        scene.render(&mut fb);

        // Logical (51..76, 122..127) lands at framebuffer (122..127, 51..76)
        assert_eq!(fb.pixel(122, 51), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(126, 75), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(127, 51), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(122, 76), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(51, 122), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_render_unrotated() {
        let mut scene = PaddleScene::new(
            script(&[0]),
            PaddleConfig::default(),
            Orientation::Default,
            PANEL,
        );
        let mut fb = PanelFramebuffer::new();
        scene.render(&mut fb);

        assert_eq!(scene.paddle().x(), 41);
        assert_eq!(fb.pixel(41, 122), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(65, 126), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(66, 122), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(41, 127), Some(Rgb565::BLACK));
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            readings in proptest::collection::vec(0u16..=0x0FFF, 0..200),
            step in 1u16..200,
            width in 1u16..=128,
        ) {
            let config = PaddleConfig { width, step, ..PaddleConfig::default() };
            let mut paddle = Paddle::new(config, PANEL);
            for reading in readings {
                paddle.update(reading);
                prop_assert!(paddle.x() <= 128 - width);
            }
        }
    }
}
