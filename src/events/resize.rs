use super::Listener;
use crate::dom::{self, CanvasSize};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas backing store and the shared viewport in step with the window.
pub fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    size: Rc<Cell<CanvasSize>>,
) -> anyhow::Result<Listener> {
    size.set(dom::sync_canvas_backing_size(canvas));
    let canvas = canvas.clone();
    let target: &web::EventTarget = window.as_ref();
    Listener::new(target, "resize", move |_ev: web::Event| {
        let s = dom::sync_canvas_backing_size(&canvas);
        log::debug!(
            "[resize] {}x{} css px @ {:.2}x",
            s.viewport.width,
            s.viewport.height,
            s.pixel_ratio
        );
        size.set(s);
    })
}
