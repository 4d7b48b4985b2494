// Simple particle struct to keep track of individual position and velocity,
// pushed away from the cursor and reflected off the canvas edges

use crate::config::FieldConfig;
use crate::surface::Surface;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
}

impl Particle {
    pub const RADIUS: f64 = 2.0;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
        }
    }

    pub fn update(
        &mut self,
        cursor: Option<Vector2<f64>>,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) {
        if let Some(cursor) = cursor {
            self.repel_from(cursor, config.interaction_radius);
        }

        self.pos = vecmath::vec2_add(self.pos, vecmath::vec2_scale(self.vel, config.step_scale));

        // Reflect rather than clamp, so a particle may sit past an edge for a frame
        if self.pos[0] <= 0.0 || self.pos[0] >= width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] <= 0.0 || self.pos[1] >= height {
            self.vel[1] *= -1.0;
        }
    }

    // Impulse falls off linearly from 1 at the cursor to 0 at the radius.
    // It is added to the velocity every frame and never decays.
    fn repel_from(&mut self, cursor: Vector2<f64>, radius: f64) {
        let away = vecmath::vec2_sub(self.pos, cursor);
        let distance = vecmath::vec2_len(away);
        if distance > 0.0 && distance < radius {
            let force = (radius - distance) / radius;
            let impulse = vecmath::vec2_scale(away, force / distance);
            self.vel = vecmath::vec2_add(self.vel, impulse);
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, fill_style: &str) -> Result<(), S::Error> {
        surface.begin_path();
        surface.arc(self.pos[0], self.pos[1], Particle::RADIUS, 0.0, std::f64::consts::PI * 2.0)?;
        surface.set_shadow(0.0, "transparent");
        surface.set_fill_style(fill_style);
        surface.fill();
        Ok(())
    }
}
