mod utils;
pub mod canvas;
pub mod color;
pub mod config;
pub mod field;
pub mod host;
pub mod logging;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod surface;

extern crate nalgebra_glm as glm;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use canvas::ParticleCanvas;
pub use config::FieldConfig;
pub use field::ParticleField;
pub use particle::Particle;
pub use renderer::FrameRenderer;
pub use simulation::Simulation;
pub use surface::Surface;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    logging::init();
}

// Labels a console.time()/console.timeEnd() span for as long as it lives
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
