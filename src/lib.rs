#![cfg(target_arch = "wasm32")]
use crate::core::{CloudParams, Simulation};
use crate::dom::CanvasSize;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-cloud loaded");
    Ok(())
}

/// Handle to a running cloud. Dropping it (or `free()` from JS) tears the view down.
#[wasm_bindgen]
pub struct CloudView {
    loop_handle: frame::LoopHandle,
    listeners: Vec<events::Listener>,
    caption: Option<web::Element>,
}

#[wasm_bindgen]
impl CloudView {
    /// Stop the frame loop and detach every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        if self.loop_handle.is_stopped() {
            return;
        }
        self.loop_handle.stop();
        self.listeners.clear();
        if let Some(c) = self.caption.take() {
            overlay::remove_caption(&c);
        }
        log::info!("cloud unmounted");
    }
}

impl Drop for CloudView {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Start the particle cloud on the canvas with the given element id.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<CloudView, JsValue> {
    mount_with(canvas_id, CloudParams::default()).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn mount_with(canvas_id: &str, params: CloudParams) -> anyhow::Result<CloudView> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    dom::style_canvas(&canvas);

    let size = Rc::new(Cell::new(CanvasSize::default()));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    let mut listeners = vec![events::resize::wire_canvas_resize(
        &window,
        &canvas,
        size.clone(),
    )?];
    listeners.extend(events::pointer::wire_pointer_handlers(
        &events::pointer::PointerWiring {
            window: window.clone(),
            canvas: canvas.clone(),
            pointer: pointer.clone(),
        },
    )?);

    let seed: u64 = rand::random();
    let sim = Simulation::new(params, seed);
    let vp = size.get().viewport;
    log::info!(
        "[cloud] particles={} seed={:#x} viewport={}x{}",
        sim.particles.len(),
        seed,
        vp.width,
        vp.height
    );

    let caption = overlay::install_caption(&document, &canvas);
    let loop_handle = frame::start_loop(frame::FrameContext {
        sim,
        renderer: render::CanvasRenderer::new(ctx),
        pointer,
        size,
        started: Instant::now(),
    });

    Ok(CloudView {
        loop_handle,
        listeners,
        caption,
    })
}
