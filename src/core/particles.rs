//! Drifting particle field behind the hero section.
//!
//! Simulation only; the canvas drawing is in `components::particles`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::particles::{AREA_PER_PARTICLE, MAX_SIZE, MAX_SPEED, MIN_SIZE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    /// Radius in px.
    pub size: f64,
}

/// Number of particles for a canvas of the given size.
pub fn particle_count(width: f64, height: f64) -> usize {
    let n = (width * height / AREA_PER_PARTICLE).ceil();
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
}

pub struct ParticleField<R = StdRng> {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn seeded(width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(width: f64, height: f64, rng: R) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng,
        };
        field.respawn();
        field
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Rebuild the field for a new canvas size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.respawn();
    }

    /// Advance one frame. A particle outside the canvas on an axis has that
    /// velocity component reversed before moving.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            if p.x > self.width || p.x < 0.0 {
                p.dx = -p.dx;
            }
            if p.y > self.height || p.y < 0.0 {
                p.dy = -p.dy;
            }
            p.x += p.dx;
            p.y += p.dy;
        }
    }

    fn respawn(&mut self) {
        let count = particle_count(self.width, self.height);
        self.particles = (0..count).map(|_| self.spawn()).collect();
    }

    fn spawn(&mut self) -> Particle {
        let size = self.rng.gen_range(MIN_SIZE..MAX_SIZE);
        let inset = size * 2.0;
        let x = self.rng.r#gen::<f64>() * (self.width - inset * 2.0) + inset;
        let y = self.rng.r#gen::<f64>() * (self.height - inset * 2.0) + inset;
        Particle {
            x,
            y,
            dx: self.rng.gen_range(-MAX_SPEED..MAX_SPEED),
            dy: self.rng.gen_range(-MAX_SPEED..MAX_SPEED),
            size,
        }
    }
}
