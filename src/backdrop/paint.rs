//! CPU painting of the particle field
//!
//! The radial canvas glows become layered filled circles with falling
//! alpha; everything else maps one to one onto painter primitives.

use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke};

use super::field::{edge_style, Link, Orientation, Particle, ParticleField};
use crate::theme::colors;

fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

pub(super) fn draw_field(painter: &Painter, rect: Rect, field: &ParticleField) {
    draw_gradient(painter, rect);

    // Static grid goes under the particles.
    for link in &field.links {
        if let Link::Grid(line) = link {
            let (from, to) = match line.orientation {
                Orientation::Vertical => (
                    Pos2::new(rect.left() + line.offset, rect.top()),
                    Pos2::new(rect.left() + line.offset, rect.bottom()),
                ),
                Orientation::Horizontal => (
                    Pos2::new(rect.left(), rect.top() + line.offset),
                    Pos2::new(rect.right(), rect.top() + line.offset),
                ),
            };
            painter.line_segment(
                [from, to],
                Stroke::new(0.3, with_alpha(colors::GRID_LINE, line.brightness)),
            );
        }
    }

    for particle in &field.particles {
        draw_glow(painter, rect, particle);
    }

    // Edge visibility depends on the live distance, recomputed every frame.
    for link in &field.links {
        if let Link::Edge { a, b } = *link {
            let (pa, pb) = (&field.particles[a], &field.particles[b]);
            if let Some(style) = edge_style(pa, pb) {
                let color = if style.hub_to_hub {
                    colors::EDGE_HUB
                } else {
                    colors::EDGE_DUST
                };
                painter.line_segment(
                    [rect.min + pa.pos.to_vec2(), rect.min + pb.pos.to_vec2()],
                    Stroke::new(style.width, with_alpha(color, style.alpha)),
                );
            }
        }
    }
}

/// Vertical dark gradient over the whole surface.
fn draw_gradient(painter: &Painter, rect: Rect) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), colors::SKY_TOP);
    mesh.colored_vertex(rect.right_top(), colors::SKY_TOP);
    mesh.colored_vertex(rect.right_bottom(), colors::SKY_BOTTOM);
    mesh.colored_vertex(rect.left_bottom(), colors::SKY_BOTTOM);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

fn draw_glow(painter: &Painter, rect: Rect, particle: &Particle) {
    let center = rect.min + particle.pos.to_vec2();
    if particle.hub {
        // Wide halo stands in for the canvas shadow blur.
        painter.circle_filled(
            center,
            particle.radius * 2.0 + 15.0,
            with_alpha(colors::DUST_GLOW, 0.06),
        );
        painter.circle_filled(
            center,
            particle.radius * 2.0,
            with_alpha(colors::HUB_MID, particle.brightness * 0.25),
        );
        painter.circle_filled(
            center,
            particle.radius,
            with_alpha(colors::HUB_MID, particle.brightness * 0.5),
        );
        painter.circle_filled(
            center,
            particle.radius * 0.5,
            with_alpha(colors::HUB_CORE, particle.brightness),
        );
    } else {
        painter.circle_filled(
            center,
            particle.radius * 2.0,
            with_alpha(colors::DUST_GLOW, particle.brightness * 0.15),
        );
        painter.circle_filled(
            center,
            particle.radius,
            with_alpha(colors::DUST_GLOW, particle.brightness),
        );
    }
}
