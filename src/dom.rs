use crate::constants::CANVAS_STYLE;
use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Size of the canvas in CSS pixels plus the ratio to its backing store.
#[derive(Clone, Copy, Debug)]
pub struct CanvasSize {
    pub viewport: Viewport,
    pub pixel_ratio: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            pixel_ratio: 1.0,
        }
    }
}

/// Match the backing store to CSS size * devicePixelRatio and report the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> CanvasSize {
    let Some(w) = web::window() else {
        return CanvasSize::default();
    };
    let dpr = w.device_pixel_ratio().max(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    CanvasSize {
        viewport: Viewport::new(rect.width() as f32, rect.height() as f32),
        pixel_ratio: dpr,
    }
}

pub fn style_canvas(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("canvas style {}: {:?}", name, e);
        }
    }
}
