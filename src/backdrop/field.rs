//! Procedural particle/grid field
//!
//! A field is generated once per viewport size: drifting dust particles, a
//! fixed handful of brighter hub particles, random pairwise edges and a
//! static 30 px grid. Only particle positions mutate between resizes; edges
//! and grid lines are fixed at generation time.

use egui::{Pos2, Vec2};
use rand::Rng;

/// Dust particles per point of viewport width.
pub const DUST_DENSITY: f32 = 0.05;
/// Bounds on the dust particle count.
pub const DUST_MIN: usize = 20;
pub const DUST_MAX: usize = 100;
/// Hub particles per field.
pub const HUB_COUNT: usize = 8;
/// Spacing between grid lines, in points.
pub const GRID_SPACING: f32 = 30.0;
/// Chance that an arbitrary particle pair is linked.
pub const EDGE_CHANCE: f64 = 0.03;
/// Edges at or beyond this distance are not drawn.
pub const EDGE_RANGE: f32 = 200.0;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Pos2,
    pub vel: Vec2,
    pub radius: f32,
    pub brightness: f32,
    /// Hubs are larger, slower and brighter, and always link to each other.
    pub hub: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A static line of the background grid.
#[derive(Clone, Debug)]
pub struct GridLine {
    pub orientation: Orientation,
    /// Distance from the left (vertical) or top (horizontal) viewport edge.
    pub offset: f32,
    pub brightness: f32,
}

/// Fixed at generation time: either a particle pair whose edge is drawn by
/// live distance, or a static grid line.
#[derive(Clone, Debug)]
pub enum Link {
    Edge { a: usize, b: usize },
    Grid(GridLine),
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub links: Vec<Link>,
}

/// Dust count for a viewport width: 5% of the width, clamped to [20, 100].
pub fn dust_count(width: f32) -> usize {
    ((width * DUST_DENSITY) as usize).clamp(DUST_MIN, DUST_MAX)
}

impl ParticleField {
    pub fn empty() -> Self {
        Self {
            particles: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Generate a fresh field for the given viewport size. Zero-extent
    /// viewports yield an empty field.
    pub fn generate(size: Vec2, rng: &mut impl Rng) -> Self {
        if size.x < 1.0 || size.y < 1.0 {
            return Self::empty();
        }

        let dust = dust_count(size.x);
        let mut particles = Vec::with_capacity(dust + HUB_COUNT);
        for _ in 0..dust {
            particles.push(Particle {
                pos: Pos2::new(rng.gen_range(0.0..size.x), rng.gen_range(0.0..size.y)),
                vel: Vec2::new(rng.gen_range(-0.25..0.25), rng.gen_range(-0.25..0.25)),
                radius: rng.gen_range(1.0..4.0),
                brightness: rng.gen_range(0.3..0.8),
                hub: false,
            });
        }
        for _ in 0..HUB_COUNT {
            particles.push(Particle {
                pos: Pos2::new(rng.gen_range(0.0..size.x), rng.gen_range(0.0..size.y)),
                vel: Vec2::new(rng.gen_range(-0.1..0.1), rng.gen_range(-0.1..0.1)),
                radius: rng.gen_range(4.0..12.0),
                brightness: rng.gen_range(0.7..1.0),
                hub: true,
            });
        }

        let mut links = Vec::new();
        for a in 0..particles.len() {
            for b in (a + 1)..particles.len() {
                if (particles[a].hub && particles[b].hub) || rng.gen_bool(EDGE_CHANCE) {
                    links.push(Link::Edge { a, b });
                }
            }
        }

        // Grid lines, offset so the grid centers in the viewport.
        let mut x = (size.x % GRID_SPACING) / 2.0;
        while x < size.x {
            links.push(Link::Grid(GridLine {
                orientation: Orientation::Vertical,
                offset: x,
                brightness: rng.gen_range(0.05..0.25),
            }));
            x += GRID_SPACING;
        }
        let mut y = (size.y % GRID_SPACING) / 2.0;
        while y < size.y {
            links.push(Link::Grid(GridLine {
                orientation: Orientation::Horizontal,
                offset: y,
                brightness: rng.gen_range(0.05..0.25),
            }));
            y += GRID_SPACING;
        }

        Self { particles, links }
    }

    /// Advance every particle by its velocity, wrapping toroidally so every
    /// position stays within [0, w) x [0, h).
    pub fn advance(&mut self, size: Vec2) {
        if size.x < 1.0 || size.y < 1.0 {
            return;
        }
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 {
                p.pos.x += size.x;
            }
            if p.pos.x >= size.x {
                p.pos.x -= size.x;
            }
            if p.pos.y < 0.0 {
                p.pos.y += size.y;
            }
            if p.pos.y >= size.y {
                p.pos.y -= size.y;
            }
        }
    }
}

/// Stroke parameters for a particle edge, None when the pair is out of
/// range. The distance is taken from the live positions at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
    pub alpha: f32,
    pub width: f32,
    pub hub_to_hub: bool,
}

pub fn edge_style(a: &Particle, b: &Particle) -> Option<EdgeStyle> {
    let distance = a.pos.distance(b.pos);
    if distance >= EDGE_RANGE {
        return None;
    }
    let brightness = ((a.brightness + b.brightness) / 2.0).min(1.0 - distance / EDGE_RANGE);
    Some(if a.hub && b.hub {
        EdgeStyle {
            alpha: brightness * 0.8,
            width: 1.2,
            hub_to_hub: true,
        }
    } else {
        EdgeStyle {
            alpha: brightness * 0.3,
            width: 0.6,
            hub_to_hub: false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn particle_at(x: f32, y: f32, brightness: f32, hub: bool) -> Particle {
        Particle {
            pos: Pos2::new(x, y),
            vel: Vec2::ZERO,
            radius: 2.0,
            brightness,
            hub,
        }
    }

    #[test]
    fn dust_count_clamps_to_bounds() {
        assert_eq!(dust_count(100.0), 20); // floor(5) clamped up
        assert_eq!(dust_count(400.0), 20);
        assert_eq!(dust_count(1000.0), 50);
        assert_eq!(dust_count(1366.0), 68);
        assert_eq!(dust_count(2000.0), 100);
        assert_eq!(dust_count(8000.0), 100); // clamped down
    }

    #[test]
    fn generate_counts_match_viewport_width() {
        for width in [500.0, 1280.0, 3000.0] {
            let field = ParticleField::generate(Vec2::new(width, 720.0), &mut rng());
            let hubs = field.particles.iter().filter(|p| p.hub).count();
            assert_eq!(hubs, HUB_COUNT);
            assert_eq!(field.particles.len(), dust_count(width) + HUB_COUNT);
        }
    }

    #[test]
    fn generate_places_particles_inside_viewport() {
        let size = Vec2::new(800.0, 600.0);
        let field = ParticleField::generate(size, &mut rng());
        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x < size.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < size.y);
        }
    }

    #[test]
    fn zero_extent_viewport_is_empty() {
        let field = ParticleField::generate(Vec2::ZERO, &mut rng());
        assert!(field.particles.is_empty());
        assert!(field.links.is_empty());

        let flat = ParticleField::generate(Vec2::new(1280.0, 0.0), &mut rng());
        assert!(flat.particles.is_empty());
    }

    #[test]
    fn hub_pairs_are_always_linked() {
        let field = ParticleField::generate(Vec2::new(1024.0, 768.0), &mut rng());
        let hub_indices: Vec<usize> = field
            .particles
            .iter()
            .enumerate()
            .filter(|(_, p)| p.hub)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hub_indices.len(), HUB_COUNT);

        for (n, &a) in hub_indices.iter().enumerate() {
            for &b in &hub_indices[n + 1..] {
                let linked = field.links.iter().any(|link| {
                    matches!(link, Link::Edge { a: la, b: lb } if (*la == a && *lb == b) || (*la == b && *lb == a))
                });
                assert!(linked, "hub pair ({a}, {b}) missing its edge");
            }
        }
    }

    #[test]
    fn grid_lines_are_spaced_and_centered() {
        let size = Vec2::new(800.0, 600.0);
        let field = ParticleField::generate(size, &mut rng());

        let verticals: Vec<&GridLine> = field
            .links
            .iter()
            .filter_map(|link| match link {
                Link::Grid(line) if line.orientation == Orientation::Vertical => Some(line),
                _ => None,
            })
            .collect();

        assert!(!verticals.is_empty());
        let first = (size.x % GRID_SPACING) / 2.0;
        for (i, line) in verticals.iter().enumerate() {
            assert!((line.offset - (first + i as f32 * GRID_SPACING)).abs() < 1e-3);
            assert!(line.offset >= 0.0 && line.offset < size.x);
            assert!(line.brightness >= 0.05 && line.brightness < 0.25);
        }
    }

    #[test]
    fn advance_wraps_to_opposite_edge() {
        let size = Vec2::new(800.0, 600.0);
        let mut field = ParticleField::empty();
        field.particles = vec![
            // Crossing the right edge re-enters near zero
            Particle {
                vel: Vec2::new(0.25, 0.0),
                ..particle_at(799.9, 300.0, 0.5, false)
            },
            // Crossing the left edge re-enters near the right
            Particle {
                vel: Vec2::new(-0.25, 0.0),
                ..particle_at(0.1, 300.0, 0.5, false)
            },
            // Bottom edge
            Particle {
                vel: Vec2::new(0.0, 0.25),
                ..particle_at(400.0, 599.9, 0.5, false)
            },
            // Top edge
            Particle {
                vel: Vec2::new(0.0, -0.25),
                ..particle_at(400.0, 0.1, 0.5, false)
            },
        ];

        field.advance(size);

        assert!((field.particles[0].pos.x - 0.15).abs() < 1e-3);
        assert!((field.particles[1].pos.x - 799.85).abs() < 1e-3);
        assert!((field.particles[2].pos.y - 0.15).abs() < 1e-3);
        assert!((field.particles[3].pos.y - 599.85).abs() < 1e-3);
    }

    #[test]
    fn positions_stay_in_bounds_over_many_steps() {
        let size = Vec2::new(640.0, 480.0);
        let mut field = ParticleField::generate(size, &mut rng());
        for _ in 0..10_000 {
            field.advance(size);
        }
        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x < size.x, "x = {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < size.y, "y = {}", p.pos.y);
        }
    }

    #[test]
    fn edges_gate_on_live_distance() {
        let a = particle_at(0.0, 0.0, 1.0, false);
        let far = particle_at(200.0, 0.0, 1.0, false);
        assert_eq!(edge_style(&a, &far), None);

        let near = particle_at(199.0, 0.0, 1.0, false);
        assert!(edge_style(&a, &near).is_some());
    }

    #[test]
    fn edge_opacity_fades_with_distance() {
        // Bright pair at half range: 1 - 100/200 limits the brightness
        let a = particle_at(0.0, 0.0, 1.0, false);
        let b = particle_at(100.0, 0.0, 1.0, false);
        let style = edge_style(&a, &b).unwrap();
        assert!((style.alpha - 0.5 * 0.3).abs() < 1e-6);
        assert!((style.width - 0.6).abs() < 1e-6);
        assert!(!style.hub_to_hub);

        // Dim pair up close: the average brightness limits instead
        let dim_a = particle_at(0.0, 0.0, 0.3, false);
        let dim_b = particle_at(10.0, 0.0, 0.5, false);
        let dim = edge_style(&dim_a, &dim_b).unwrap();
        assert!((dim.alpha - 0.4 * 0.3).abs() < 1e-6);
    }

    #[test]
    fn hub_edges_are_heavier() {
        let a = particle_at(0.0, 0.0, 1.0, true);
        let b = particle_at(50.0, 0.0, 1.0, true);
        let style = edge_style(&a, &b).unwrap();
        assert!(style.hub_to_hub);
        assert!((style.width - 1.2).abs() < 1e-6);
        assert!((style.alpha - 0.75 * 0.8).abs() < 1e-6);
    }
}
