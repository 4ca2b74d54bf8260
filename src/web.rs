//! Browser binding for [`SketchCore`].
//!
//! ARCHITECTURE
//! ============
//! The host page constructs a [`SketchHandle`] for its `<canvas>` and forwards
//! `mousemove` / `mouseup` coordinates plus the collapse button. The handle
//! owns the 2D context and turns the engine's [`Action`]s into
//! `requestAnimationFrame` and `setTimeout` callbacks that re-enter the
//! engine. Failures are logged, never thrown back into the event loop.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::SketchConfig;
use crate::engine::{Action, SketchCore};
use crate::geom::Point;
use crate::input::map_button;

struct Inner {
    ctx: CanvasRenderingContext2d,
    core: SketchCore,
}

type Shared = Rc<RefCell<Inner>>;

/// JS-facing handle. One per canvas.
#[wasm_bindgen]
pub struct SketchHandle {
    inner: Shared,
}

#[wasm_bindgen]
impl SketchHandle {
    /// Bind to `canvas`. `config_json` may be empty for defaults.
    ///
    /// # Errors
    ///
    /// Rejects invalid config and canvases without a 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<SketchHandle, JsValue> {
        console_error_panic_hook::set_once();
        let config = SketchConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        init_logging(&config);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut core = SketchCore::new(config);
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));
        info!("sketch attached to {}x{} canvas", canvas.width(), canvas.height());

        Ok(Self { inner: Rc::new(RefCell::new(Inner { ctx, core })) })
    }

    /// Forward a `mousemove` in canvas offset coordinates.
    pub fn pointer_move(&self, x: f64, y: f64) {
        let now = now_ms();
        let result = {
            let mut guard = self.inner.borrow_mut();
            let Inner { ctx, core } = &mut *guard;
            core.on_pointer_move(now, Point::new(x, y), ctx)
        };
        settle(&self.inner, result);
    }

    /// Forward a `mouseup`; `button` is `MouseEvent.button`.
    pub fn pointer_up(&self, button: i16, x: f64, y: f64) {
        let mut guard = self.inner.borrow_mut();
        let Inner { ctx, core } = &mut *guard;
        if let Err(err) = core.on_pointer_up(map_button(button), Point::new(x, y), ctx) {
            warn!("redraw failed: {err:?}");
        }
    }

    /// Run the collapse command with the configured duration.
    pub fn collapse(&self) {
        let duration_ms = self.inner.borrow().core.config().collapse_duration_ms;
        self.collapse_all(duration_ms);
    }

    pub fn collapse_all(&self, duration_ms: f64) {
        let actions = self.inner.borrow_mut().core.collapse_all(duration_ms);
        dispatch(&self.inner, actions);
    }

    /// Track a canvas size change and repaint.
    pub fn resize(&self, width: f64, height: f64) {
        self.inner.borrow_mut().core.set_viewport(width, height);
        self.redraw();
    }

    pub fn redraw(&self) {
        let mut guard = self.inner.borrow_mut();
        let Inner { ctx, core } = &mut *guard;
        if let Err(err) = core.redraw(ctx) {
            warn!("redraw failed: {err:?}");
        }
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.inner.borrow().core.segments().len()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.inner.borrow().core.is_locked()
    }
}

fn init_logging(config: &SketchConfig) {
    let level = config.log_level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        // A second handle on the same page keeps the first logger.
        log::debug!("console logger already installed: {err}");
    }
}

/// Route an engine result: schedule its actions or log the failure.
fn settle(inner: &Shared, result: Result<Vec<Action>, JsValue>) {
    match result {
        Ok(actions) => dispatch(inner, actions),
        Err(err) => warn!("redraw failed: {err:?}"),
    }
}

fn dispatch(inner: &Shared, actions: Vec<Action>) {
    for action in actions {
        let scheduled = match action {
            Action::FrameRequested => request_frame(inner),
            Action::TimerRequested { delay_ms } => request_timer(inner, delay_ms),
        };
        if let Err(err) = scheduled {
            warn!("failed to schedule {action:?}: {err:?}");
        }
    }
}

fn request_frame(inner: &Shared) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let inner_for_cb = Rc::clone(inner);
    let cb = Closure::once_into_js(move |timestamp: f64| {
        let result = {
            let mut guard = inner_for_cb.borrow_mut();
            let Inner { ctx, core } = &mut *guard;
            core.on_frame(timestamp, ctx)
        };
        settle(&inner_for_cb, result);
    });
    window.request_animation_frame(cb.unchecked_ref())?;
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn request_timer(inner: &Shared, delay_ms: f64) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let inner_for_cb = Rc::clone(inner);
    let cb = Closure::once_into_js(move || {
        let now = now_ms();
        let result = {
            let mut guard = inner_for_cb.borrow_mut();
            let Inner { ctx, core } = &mut *guard;
            core.on_timer(now, ctx)
        };
        settle(&inner_for_cb, result);
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms.ceil() as i32)?;
    Ok(())
}

/// Monotonic milliseconds from `performance.now()`, falling back to
/// `Date.now()` when the page has no `Performance` object.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or_else(js_sys::Date::now, |performance| performance.now())
}
