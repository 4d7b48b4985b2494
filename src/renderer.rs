// Frame renderer: clears the surface, steps and draws every particle, then
// joins every pair of particles closer than the connection distance.
// The host calls tick() once per animation frame.

use crate::particle::Particle;
use crate::simulation::Simulation;
use crate::surface::Surface;

pub struct FrameRenderer {
    particle_style: String,
    connection_style: String,
    frames: u64,
}

impl FrameRenderer {
    pub fn new(simulation: &Simulation) -> Self {
        let config = simulation.field.config();
        FrameRenderer {
            particle_style: config.particle_color.to_css(),
            connection_style: config.connection_color.to_css(),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame and returns how many connection lines were drawn.
    ///
    /// The whole field is stepped before anything is drawn, so a failed draw
    /// leaves a partly painted frame but never a partly stepped simulation.
    pub fn tick<S: Surface>(
        &mut self,
        simulation: &mut Simulation,
        surface: &mut S,
    ) -> Result<usize, S::Error> {
        let width = simulation.field.width();
        let height = simulation.field.height();
        let cursor = simulation.cursor;
        let config = *simulation.field.config();

        for particle in simulation.field.particles_mut() {
            particle.update(cursor, width, height, &config);
        }
        self.frames += 1;

        surface.clear_rect(0.0, 0.0, width, height);
        let particles = simulation.field.particles();
        for particle in particles {
            particle.draw(surface, &self.particle_style)?;
        }
        let lines = self.render_connections(particles, config.connection_distance, surface);

        Ok(lines)
    }

    fn render_connections<S: Surface>(
        &self,
        particles: &[Particle],
        connection_distance: f64,
        surface: &mut S,
    ) -> usize {
        let mut lines = 0;
        for (i, j) in connections(particles, connection_distance) {
            let (from, to) = (&particles[i], &particles[j]);
            surface.set_stroke_style(&self.connection_style);
            surface.begin_path();
            surface.move_to(from.pos[0], from.pos[1]);
            surface.line_to(to.pos[0], to.pos[1]);
            surface.stroke();
            lines += 1;
        }
        lines
    }
}

pub fn is_connected(a: &Particle, b: &Particle, connection_distance: f64) -> bool {
    let distance = glm::distance(
        &glm::vec2(a.pos[0], a.pos[1]),
        &glm::vec2(b.pos[0], b.pos[1]),
    );
    distance < connection_distance
}

/// Every pair `(i, j)` with `i < j` whose particles are closer than
/// `connection_distance`, in collection order. Checks all pairs, O(n^2).
pub fn connections(
    particles: &[Particle],
    connection_distance: f64,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = particles.len();
    (0..n)
        .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
        .filter(move |&(i, j)| is_connected(&particles[i], &particles[j], connection_distance))
}
