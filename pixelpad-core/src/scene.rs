//! Scene trait
//!
//! A scene owns its input sources and redraws the whole framebuffer once
//! per frame. The frame pipeline calls [`Scene::render`] after the previous
//! frame has been handed to the bus.

use crate::framebuffer::Framebuffer;

/// Per-frame renderer
pub trait Scene<const W: usize, const H: usize> {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Sample inputs and draw the next frame into `fb`
    fn render(&mut self, fb: &mut Framebuffer<W, H>);
}

impl<S: Scene<W, H> + ?Sized, const W: usize, const H: usize> Scene<W, H> for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn render(&mut self, fb: &mut Framebuffer<W, H>) {
        (**self).render(fb)
    }
}
