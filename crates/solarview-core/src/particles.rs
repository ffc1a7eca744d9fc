//! Drifting particle layer behind the orbital scene.
//!
//! Particles wander at fixed velocities, wrap at the edges, and nearby
//! pairs are joined by faint lines whose alpha fades with distance.

use glam::Vec2;

use crate::frame::{FrameBuffer, Rgba};

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, 1).
    pub fn next_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

pub const PARTICLE_COUNT: usize = 50;

/// Pairs closer than this get a connecting line.
pub const LINK_DISTANCE: f32 = 120.0;

/// Cyan used for particle discs and their links.
pub const PARTICLE_COLOR: Rgba = Rgba::new(0.0, 217.0 / 255.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: Vec2,
    /// Pixels per tick at the reference frame rate.
    vel: Vec2,
    radius: f32,
    opacity: f32,
}

/// A field of drifting particles filling a surface of the given size.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    size: Vec2,
}

impl ParticleField {
    /// Scatter `PARTICLE_COUNT` particles over the surface. The seed
    /// makes placement reproducible.
    pub fn new(size: Vec2, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                pos: Vec2::new(rng.next_unit() * size.x, rng.next_unit() * size.y),
                vel: Vec2::new(
                    (rng.next_unit() - 0.5) * 1.5,
                    (rng.next_unit() - 0.5) * 1.5,
                ),
                radius: rng.next_unit() * 2.0 + 0.5,
                opacity: rng.next_unit() * 0.5 + 0.2,
            })
            .collect();
        Self { particles, size }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance the field by `dt` ticks (1.0 = one frame at 60Hz).
    /// Particles leaving one edge re-enter from the opposite one.
    pub fn step(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.pos += p.vel * dt;
            if p.pos.x < 0.0 {
                p.pos.x = self.size.x;
            } else if p.pos.x > self.size.x {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = self.size.y;
            } else if p.pos.y > self.size.y {
                p.pos.y = 0.0;
            }
        }
    }

    /// Emit link lines and particle discs into the frame buffer.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < LINK_DISTANCE {
                    let alpha = 0.15 * (1.0 - d / LINK_DISTANCE);
                    fb.line(a.pos, b.pos, 0.5, PARTICLE_COLOR.with_alpha(alpha));
                }
            }
        }
        for p in &self.particles {
            fb.fill_circle(p.pos, p.radius, PARTICLE_COLOR.with_alpha(p.opacity), 0.0);
        }
    }
}
