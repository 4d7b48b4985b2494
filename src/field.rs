// Owns the particle collection, the canvas bounds it lives in, and the
// simulation constants. The whole collection is regenerated on every resize.

use crate::config::FieldConfig;
use crate::particle::Particle;
use log::{debug, info};
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    /// Creates a field of `config.particle_count` randomly placed particles.
    pub fn new(width: f64, height: f64, config: FieldConfig) -> ParticleField {
        let mut field = ParticleField::empty(width, height, config);
        field.initialize(width, height, config.particle_count);
        field
    }

    /// Creates a field with a fixed layout, used when the caller needs
    /// reproducible positions.
    pub fn from_particles(
        width: f64,
        height: f64,
        particles: Vec<Particle>,
        config: FieldConfig,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    fn empty(width: f64, height: f64, config: FieldConfig) -> ParticleField {
        ParticleField::from_particles(width, height, Vec::new(), config)
    }

    /// Discards every particle and creates `count` new ones.
    ///
    /// Positions are uniform over `[0, width) x [0, height)` and each velocity
    /// component is uniform over `[-1, 1)`.
    pub fn initialize(&mut self, width: f64, height: f64, count: usize) {
        let mut rng = rand::thread_rng();
        self.initialize_with_rng(&mut rng, width, height, count);
    }

    pub fn initialize_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        width: f64,
        height: f64,
        count: usize,
    ) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let pos_x = rng.gen::<f64>() * width;
            let pos_y = rng.gen::<f64>() * height;
            let vel_x = (rng.gen::<f64>() - 0.5) * 2.0;
            let vel_y = (rng.gen::<f64>() - 0.5) * 2.0;
            self.particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y));
        }
        debug!("initialized {} particles in {}x{}", count, width, height);
    }

    // Particles are not carried over; they all jump to a fresh random layout
    pub fn resize(&mut self, width: f64, height: f64) {
        info!("resizing particle field to {}x{}", width, height);
        self.initialize(width, height, self.config.particle_count);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
