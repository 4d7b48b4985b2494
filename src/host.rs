// Browser wiring: size the canvas to the window, follow the mouse,
// regenerate the field after resizing settles, and drive frames with
// requestAnimationFrame.

use crate::canvas::ParticleCanvas;
use crate::config::RESIZE_DEBOUNCE_MS;
use log::{error, info, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    crate::initialize();
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;

    fit_to_window(&window, &canvas)?;
    let field = Rc::new(RefCell::new(ParticleCanvas::new(&canvas)?));

    track_cursor(&window, &field)?;
    resize_with_window(&window, &canvas, &field)?;
    run_frames(field)?;

    info!("particle field running on #{}", canvas_id);
    Ok(())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((width, height))
}

fn track_cursor(window: &Window, field: &Rc<RefCell<ParticleCanvas>>) -> Result<(), JsValue> {
    let field = field.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        field
            .borrow_mut()
            .set_cursor(event.client_x() as f64, event.client_y() as f64);
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Listeners live for the rest of the page
    on_move.forget();
    Ok(())
}

// Each resize event restarts the timer; only the last one in a burst
// regenerates the field
fn resize_with_window(
    window: &Window,
    canvas: &HtmlCanvasElement,
    field: &Rc<RefCell<ParticleCanvas>>,
) -> Result<(), JsValue> {
    let debounce = Rc::new(Debounce::default());
    let apply_resize = {
        let window = window.clone();
        let canvas = canvas.clone();
        let field = field.clone();
        let debounce = debounce.clone();
        Closure::wrap(Box::new(move || {
            debounce.fired();
            match fit_to_window(&window, &canvas) {
                Ok((width, height)) => field.borrow_mut().resize(width, height),
                Err(err) => warn!("could not read window size: {:?}", err),
            }
        }) as Box<dyn FnMut()>)
    };

    let on_resize = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let restarted = debounce.restart(
                |handle| window.clear_timeout_with_handle(handle),
                || {
                    window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        apply_resize.as_ref().unchecked_ref(),
                        RESIZE_DEBOUNCE_MS,
                    )
                },
            );
            if let Err(err) = restarted {
                warn!("could not schedule resize: {:?}", err);
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

// The one outstanding timer handle of a debounced callback
#[derive(Default)]
struct Debounce {
    pending: Cell<Option<i32>>,
}

impl Debounce {
    // Cancels the pending timer, if any, and schedules a new one
    fn restart<E>(
        &self,
        cancel: impl FnOnce(i32),
        schedule: impl FnOnce() -> Result<i32, E>,
    ) -> Result<(), E> {
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
        self.pending.set(Some(schedule()?));
        Ok(())
    }

    fn fired(&self) {
        self.pending.set(None);
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

// The frame closure holds a handle to itself so it can queue the next frame
fn run_frames(field: Rc<RefCell<ParticleCanvas>>) -> Result<(), JsValue> {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = field.borrow_mut().tick() {
            error!("frame failed: {:?}", err);
        }
        if let Err(err) = request_frame(&next) {
            error!("could not request next frame: {:?}", err);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&frame)?;
    Ok(())
}

fn request_frame(frame: &FrameCallback) -> Result<i32, JsValue> {
    let frame = frame.borrow();
    let callback = frame
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback not installed"))?;
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stands in for setTimeout/clearTimeout: live handles, in scheduling order
    #[derive(Default)]
    struct Timers {
        next: Cell<i32>,
        live: RefCell<Vec<i32>>,
    }

    impl Timers {
        fn schedule(&self) -> Result<i32, String> {
            let handle = self.next.get() + 1;
            self.next.set(handle);
            self.live.borrow_mut().push(handle);
            Ok(handle)
        }

        fn cancel(&self, handle: i32) {
            self.live.borrow_mut().retain(|&h| h != handle);
        }
    }

    #[test]
    fn burst_of_events_leaves_one_timer() {
        let timers = Timers::default();
        let debounce = Debounce::default();
        for _ in 0..5 {
            debounce
                .restart(|h| timers.cancel(h), || timers.schedule())
                .unwrap();
        }
        assert_eq!(*timers.live.borrow(), vec![5]);
        assert!(debounce.is_pending());

        debounce.fired();
        assert!(!debounce.is_pending());
    }

    #[test]
    fn event_after_firing_does_not_cancel_spent_timer() {
        let timers = Timers::default();
        let debounce = Debounce::default();
        let mut cancelled = Vec::new();
        debounce.restart(|h| cancelled.push(h), || timers.schedule()).unwrap();
        debounce.fired();
        debounce.restart(|h| cancelled.push(h), || timers.schedule()).unwrap();
        assert!(cancelled.is_empty());
        assert_eq!(*timers.live.borrow(), vec![1, 2]);
    }

    #[test]
    fn failed_schedule_leaves_nothing_pending() {
        let debounce = Debounce::default();
        let result = debounce.restart(|_| {}, || Err::<i32, _>("no timers".to_owned()));
        assert!(result.is_err());
        assert!(!debounce.is_pending());
    }
}
