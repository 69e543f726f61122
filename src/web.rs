// web.rs - Browser host
//
// Binds a Session to a real page: the container element is measured with
// clientWidth x scrollHeight, the canvas 2D context is the Surface, frames
// come from requestAnimationFrame and window resize events re-measure.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use crate::config::FieldConfig;
use crate::session::Session;
use crate::surface::{Brush, Container, Pose, Size, Surface};

impl Container for HtmlElement {
    fn measure(&self) -> Option<Size> {
        if !self.is_connected() {
            return None;
        }
        Some(Size::new(
            self.client_width().max(0) as u32,
            self.scroll_height().max(0) as u32,
        ))
    }
}

// ============================================================================
// Canvas surface
// ============================================================================

/// Canvas element plus its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas refuses a 2D context
    pub fn acquire(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Run `draw` in the local frame of `pose`
    fn posed(&self, pose: Pose, draw: impl FnOnce(&CanvasRenderingContext2d)) {
        self.ctx.save();
        let placed = self
            .ctx
            .translate(pose.x as f64, pose.y as f64)
            .and_then(|()| self.ctx.rotate(pose.angle as f64));
        if placed.is_ok() {
            draw(&self.ctx);
        }
        self.ctx.restore();
    }
}

/// Paint the current path with glow, then switch glow off
fn glowing(ctx: &CanvasRenderingContext2d, css: &str, glow: f32, paint: impl FnOnce(&CanvasRenderingContext2d)) {
    if glow > 0.0 {
        ctx.set_shadow_color(css);
        ctx.set_shadow_blur(glow as f64);
    }
    paint(ctx);
    ctx.set_shadow_blur(0.0);
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, size: Size) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, brush: Brush) {
        let css = brush.color.to_string();
        self.ctx.begin_path();
        if self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(&css);
        glowing(&self.ctx, &css, brush.glow, |ctx| ctx.fill());
    }

    fn stroke_segment(&mut self, pose: Pose, length: f32, width: f32, brush: Brush) {
        let css = brush.color.to_string();
        self.posed(pose, |ctx| {
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.line_to(length as f64, 0.0);
            ctx.set_stroke_style_str(&css);
            ctx.set_line_width(width as f64);
            glowing(ctx, &css, brush.glow, |ctx| ctx.stroke());
        });
    }

    fn fill_polygon(&mut self, pose: Pose, scale: f32, outline: &[(f32, f32)], brush: Brush) {
        let Some((&(x0, y0), rest)) = outline.split_first() else {
            return;
        };
        let css = brush.color.to_string();
        self.posed(pose, |ctx| {
            ctx.begin_path();
            ctx.move_to((x0 * scale) as f64, (y0 * scale) as f64);
            for &(x, y) in rest {
                ctx.line_to((x * scale) as f64, (y * scale) as f64);
            }
            ctx.close_path();
            ctx.set_fill_style_str(&css);
            glowing(ctx, &css, brush.glow, |ctx| ctx.fill());
        });
    }
}

// ============================================================================
// Frame loop
// ============================================================================

type WebSession = Session<HtmlElement, CanvasSurface>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Live wiring of one attached session
struct Running {
    window: Window,
    session: Rc<RefCell<WebSession>>,
    frame_id: Rc<Cell<Option<i32>>>,
    // Holds a clone of itself inside the closure; emptied on stop
    on_frame: FrameCallback,
    on_resize: Closure<dyn FnMut()>,
}

impl Running {
    fn start(window: Window, session: WebSession) -> Result<Self, JsValue> {
        let session = Rc::new(RefCell::new(session));
        let frame_id = Rc::new(Cell::new(None));
        let on_frame: FrameCallback = Rc::new(RefCell::new(None));

        let tick = {
            let session = session.clone();
            let frame_id = frame_id.clone();
            let on_frame = on_frame.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                frame_id.set(None);
                // A callback already queued when detach ran lands here and stops
                if !session.borrow_mut().frame() {
                    return;
                }
                if let Some(cb) = on_frame.borrow().as_ref() {
                    frame_id.set(request_frame(&window, cb));
                }
            })
        };
        *on_frame.borrow_mut() = Some(tick);

        let on_resize = {
            let session = session.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Err(err) = session.borrow_mut().resize() {
                    debug!("resize ignored: {err}");
                }
            })
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        if let Some(cb) = on_frame.borrow().as_ref() {
            frame_id.set(request_frame(&window, cb));
        }

        Ok(Self { window, session, frame_id, on_frame, on_resize })
    }

    fn stop(self) {
        self.session.borrow_mut().detach();

        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            warn!("failed to remove resize listener: {err:?}");
        }
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                warn!("failed to cancel frame {id}: {err:?}");
            }
        }

        self.on_frame.borrow_mut().take();
    }
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            warn!("requestAnimationFrame failed: {err:?}");
            None
        }
    }
}

/// Fresh seed per attach
fn browser_seed() -> u64 {
    let entropy = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    entropy ^ (js_sys::Date::now() as u64).rotate_left(32)
}

// ============================================================================
// JS API
// ============================================================================

/// Animated particle background bound to a container and a canvas.
///
/// ```js
/// const backdrop = Backdrop.attach(container, canvas);
/// // on unmount
/// backdrop.detach();
/// ```
#[wasm_bindgen]
pub struct Backdrop {
    running: Option<Running>,
}

#[wasm_bindgen]
impl Backdrop {
    /// Measure, seed and start animating. `config` is an optional JSON
    /// `FieldConfig`. If the canvas has no 2D context the returned handle is
    /// inert: nothing is drawn, scheduled or listened to.
    pub fn attach(
        container: HtmlElement,
        canvas: HtmlCanvasElement,
        config: Option<String>,
    ) -> Result<Backdrop, JsValue> {
        let config = match config.as_deref() {
            Some(json) => FieldConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => FieldConfig::default(),
        };
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let seed = config.seed.unwrap_or_else(browser_seed);

        let session = match Session::attach(container, CanvasSurface::acquire(canvas), config, seed) {
            Ok(session) => session,
            Err(err) => {
                warn!("background disabled: {err}");
                return Ok(Backdrop { running: None });
            }
        };

        Ok(Backdrop { running: Some(Running::start(window, session)?) })
    }

    /// Stop listening and cancel the pending frame. Idempotent.
    pub fn detach(&mut self) {
        if let Some(running) = self.running.take() {
            running.stop();
        }
    }

    /// Frames drawn so far
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.running
            .as_ref()
            .map_or(0.0, |r| r.session.borrow().frames() as f64)
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.detach();
    }
}
