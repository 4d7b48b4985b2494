// All mutable state a frame touches: the particle field (with its bounds)
// and the last known cursor position

use crate::config::FieldConfig;
use crate::field::ParticleField;
use vecmath::Vector2;

pub struct Simulation {
    pub field: ParticleField,
    pub cursor: Option<Vector2<f64>>,
}

impl Simulation {
    pub fn new(width: f64, height: f64) -> Simulation {
        Simulation::with_field(ParticleField::new(width, height, FieldConfig::default()))
    }

    pub fn with_field(field: ParticleField) -> Simulation {
        Simulation { field, cursor: None }
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Some([x, y]);
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_cursor() {
        let sim = Simulation::new(800.0, 600.0);
        assert!(sim.cursor.is_none());
        assert_eq!(sim.field.len(), FieldConfig::PARTICLE_COUNT);
    }

    #[test]
    fn cursor_can_be_set_and_cleared() {
        let mut sim = Simulation::new(800.0, 600.0);
        sim.set_cursor(3.0, 4.0);
        assert_eq!(sim.cursor, Some([3.0, 4.0]));
        sim.clear_cursor();
        assert_eq!(sim.cursor, None);
    }
}
