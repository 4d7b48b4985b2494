// JS-facing handle: a simulation, its renderer, and the 2D context it draws to

use crate::renderer::FrameRenderer;
use crate::simulation::Simulation;
#[cfg(feature = "frame-timing")]
use crate::Timer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
pub struct ParticleCanvas {
    context: CanvasRenderingContext2d,
    simulation: Simulation,
    renderer: FrameRenderer,
    last_connections: usize,
}

#[wasm_bindgen]
impl ParticleCanvas {
    // Grabs the 2D context of the canvas and fills it with a fresh field
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Result<ParticleCanvas, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let simulation = Simulation::new(canvas.width() as f64, canvas.height() as f64);
        let renderer = FrameRenderer::new(&simulation);
        Ok(ParticleCanvas {
            context,
            simulation,
            renderer,
            last_connections: 0,
        })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.simulation.resize(width, height);
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.simulation.set_cursor(x, y);
    }

    pub fn clear_cursor(&mut self) {
        self.simulation.clear_cursor();
    }

    pub fn tick(&mut self) -> Result<(), JsValue> {
        #[cfg(feature = "frame-timing")]
        let _timer = Timer::new("ParticleCanvas::tick");
        self.last_connections = self.renderer.tick(&mut self.simulation, &mut self.context)?;
        Ok(())
    }

    pub fn particle_count(&self) -> u32 {
        self.simulation.field.len() as u32
    }

    // Lines drawn by the most recent tick
    pub fn connection_count(&self) -> u32 {
        self.last_connections as u32
    }
}
