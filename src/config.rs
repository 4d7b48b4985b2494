// Fixed simulation constants, grouped so the field, particles and renderer
// all read them from one place

use crate::color::Color;

// Wait this long after the last resize event before regenerating the field
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub connection_distance: f64,
    pub interaction_radius: f64,
    // Scales velocity into displacement each frame; there is no real delta time
    pub step_scale: f64,
    pub particle_color: Color,
    pub connection_color: Color,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 150;
    pub const CONNECTION_DISTANCE: f64 = 100.0;
    pub const INTERACTION_RADIUS: f64 = 100.0;
    pub const STEP_SCALE: f64 = 0.5;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            connection_distance: FieldConfig::CONNECTION_DISTANCE,
            interaction_radius: FieldConfig::INTERACTION_RADIUS,
            step_scale: FieldConfig::STEP_SCALE,
            particle_color: Color::from_u32(0x9600ffff),
            connection_color: Color::from_u32(0x9600ff80),
        }
    }
}
