//! DOM-backed host: measures the container element and owns the overlay
//! canvas the particles are drawn to.

use std::cell::Cell;
use std::rc::Rc;

use fire_core::{Bounds, EngineError, Host, Particle, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::RafTick;

// Full-bleed overlay that never intercepts pointer events.
const OVERLAY_STYLE: &str =
    "position:absolute;left:0;top:0;width:100%;height:100%;pointer-events:none;";

pub struct DomHost {
    container: web::HtmlElement,
    raf_armed: Rc<Cell<bool>>,
}

impl DomHost {
    pub fn new(container: web::HtmlElement) -> Self {
        Self {
            container,
            raf_armed: Rc::new(Cell::new(false)),
        }
    }

    /// Flag polled by the frame loop; armed while a tick registration is
    /// alive.
    pub(crate) fn raf_armed(&self) -> Rc<Cell<bool>> {
        self.raf_armed.clone()
    }
}

impl Host for DomHost {
    type Surface = CanvasSurface;
    type Tick = RafTick;

    fn bounds(&self) -> Option<Bounds> {
        let rect = self.container.get_bounding_client_rect();
        let (w, h) = (rect.width(), rect.height());
        if !w.is_finite() || !h.is_finite() || w < 0.0 || h < 0.0 {
            return None;
        }
        Some(Bounds::new(w as f32, h as f32))
    }

    fn acquire_surface(&self, bounds: Bounds) -> Result<CanvasSurface, EngineError> {
        CanvasSurface::create(&self.container, bounds)
    }

    fn schedule_tick(&self) -> RafTick {
        RafTick::arm(self.raf_armed.clone())
    }
}

/// Overlay canvas plus its 2d context. Dropping it detaches the canvas from
/// the container.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

fn init_err(context: &str, e: impl std::fmt::Debug) -> EngineError {
    EngineError::SurfaceInit(format!("{context}: {e:?}"))
}

impl CanvasSurface {
    pub(crate) fn create(
        container: &web::HtmlElement,
        bounds: Bounds,
    ) -> Result<Self, EngineError> {
        let window =
            web::window().ok_or_else(|| EngineError::SurfaceInit("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| EngineError::SurfaceInit("no document".into()))?;

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| init_err("create canvas", e))?
            .dyn_into()
            .map_err(|e| init_err("canvas cast", e))?;
        canvas
            .set_attribute("style", OVERLAY_STYLE)
            .map_err(|e| init_err("style overlay", e))?;

        // Backing store matches CSS size * devicePixelRatio
        let dpr = window.device_pixel_ratio();
        canvas.set_width((bounds.width as f64 * dpr) as u32);
        canvas.set_height((bounds.height as f64 * dpr) as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| init_err("get 2d context", e))?
            .ok_or_else(|| EngineError::SurfaceInit("2d context unavailable".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| init_err("context cast", e))?;
        _ = ctx.scale(dpr, dpr);

        // Attach last, so a failed acquisition leaves the container untouched
        container
            .append_child(&canvas)
            .map_err(|e| init_err("append overlay", e))?;

        Ok(Self {
            canvas,
            ctx,
            width: bounds.width as f64,
            height: bounds.height as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn present(&mut self, particles: &[Particle]) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for p in particles {
            let [r, g, b] = p.color;
            self.ctx.begin_path();
            _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(&format!(
                "rgba({},{},{},{:.3})",
                (r * 255.0) as u8,
                (g * 255.0) as u8,
                (b * 255.0) as u8,
                p.alpha.max(0.0)
            ));
            self.ctx.fill();
        }
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        if let Some(parent) = self.canvas.parent_node() {
            _ = parent.remove_child(&self.canvas);
        }
    }
}
