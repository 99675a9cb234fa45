//! Animated network-grid backdrop
//!
//! Owns the particle field lifecycle: the field regenerates whenever the
//! viewport or pixel ratio changes, advances its motion once per frame and
//! is painted onto egui's background layer. The repaint schedule and resize
//! delivery both live in the eframe event loop, so dropping the app tears
//! them down together; no callback can outlive the surface.

mod field;
mod paint;

pub use field::{
    dust_count, edge_style, EdgeStyle, GridLine, Link, Orientation, Particle, ParticleField,
    DUST_MAX, DUST_MIN, EDGE_CHANCE, EDGE_RANGE, GRID_SPACING, HUB_COUNT,
};

use egui::{Painter, Rect, Vec2};

pub struct Backdrop {
    field: ParticleField,
    size: Vec2,
    pixels_per_point: f32,
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            field: ParticleField::empty(),
            size: Vec2::ZERO,
            pixels_per_point: 1.0,
        }
    }

    /// Paint one frame into `rect`, regenerating the field first if the
    /// viewport or pixel ratio changed since the previous frame. The old
    /// field is discarded wholesale; motion does not survive a resize.
    pub fn paint(&mut self, painter: &Painter, rect: Rect, pixels_per_point: f32) {
        let pixels_per_point = if pixels_per_point > 0.0 {
            pixels_per_point
        } else {
            1.0
        };
        let size = rect.size();
        if size != self.size || pixels_per_point != self.pixels_per_point {
            self.size = size;
            self.pixels_per_point = pixels_per_point;
            self.field = ParticleField::generate(size, &mut rand::thread_rng());
        }

        self.field.advance(size);
        paint::draw_field(painter, rect, &self.field);
    }

    #[cfg(test)]
    fn regenerate(&mut self, size: Vec2) {
        self.size = size;
        self.field = ParticleField::generate(size, &mut rand::thread_rng());
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}
