// The drawing operations the frame renderer needs from a 2D surface.
// The browser canvas context is the real implementation; tests record calls.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;
    fn fill(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_shadow(&mut self, blur: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    #[allow(deprecated)]
    fn set_fill_style(&mut self, style: &str) {
        CanvasRenderingContext2d::set_fill_style(self, &JsValue::from_str(style));
    }

    #[allow(deprecated)]
    fn set_stroke_style(&mut self, style: &str) {
        CanvasRenderingContext2d::set_stroke_style(self, &JsValue::from_str(style));
    }

    fn set_shadow(&mut self, blur: f64, color: &str) {
        self.set_shadow_blur(blur);
        self.set_shadow_color(color);
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Command {
        ClearRect(f64, f64, f64, f64),
        BeginPath,
        Arc(f64, f64, f64),
        Fill,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Stroke,
        FillStyle(String),
        StrokeStyle(String),
        Shadow(f64, String),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub commands: Vec<Command>,
    }

    impl RecordingSurface {
        pub fn count(&self, matches: fn(&Command) -> bool) -> usize {
            self.commands.iter().filter(|c| matches(c)).count()
        }
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.commands.push(Command::ClearRect(x, y, width, height));
        }

        fn begin_path(&mut self) {
            self.commands.push(Command::BeginPath);
        }

        fn arc(
            &mut self,
            x: f64,
            y: f64,
            radius: f64,
            _start: f64,
            _end: f64,
        ) -> Result<(), Infallible> {
            self.commands.push(Command::Arc(x, y, radius));
            Ok(())
        }

        fn fill(&mut self) {
            self.commands.push(Command::Fill);
        }

        fn move_to(&mut self, x: f64, y: f64) {
            self.commands.push(Command::MoveTo(x, y));
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.commands.push(Command::LineTo(x, y));
        }

        fn stroke(&mut self) {
            self.commands.push(Command::Stroke);
        }

        fn set_fill_style(&mut self, style: &str) {
            self.commands.push(Command::FillStyle(style.to_owned()));
        }

        fn set_stroke_style(&mut self, style: &str) {
            self.commands.push(Command::StrokeStyle(style.to_owned()));
        }

        fn set_shadow(&mut self, blur: f64, color: &str) {
            self.commands.push(Command::Shadow(blur, color.to_owned()));
        }
    }

    // Rejects every arc, the way a canvas does for a negative radius
    #[derive(Default)]
    pub struct BrokenArcSurface {
        pub arcs: usize,
    }

    impl Surface for BrokenArcSurface {
        type Error = String;

        fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {}

        fn begin_path(&mut self) {}

        fn arc(
            &mut self,
            _x: f64,
            _y: f64,
            _radius: f64,
            _start: f64,
            _end: f64,
        ) -> Result<(), String> {
            self.arcs += 1;
            Err("IndexSizeError".to_owned())
        }

        fn fill(&mut self) {}

        fn move_to(&mut self, _x: f64, _y: f64) {}

        fn line_to(&mut self, _x: f64, _y: f64) {}

        fn stroke(&mut self) {}

        fn set_fill_style(&mut self, _style: &str) {}

        fn set_stroke_style(&mut self, _style: &str) {}

        fn set_shadow(&mut self, _blur: f64, _color: &str) {}
    }
}
