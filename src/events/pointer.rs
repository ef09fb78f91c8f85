use super::Listener;
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Move and down listen on the canvas; up/cancel listen on the window so a
/// drag released outside the canvas still ends.
pub fn wire_pointer_handlers(w: &PointerWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(w)?,
        wire_pointerdown(w)?,
        wire_pointerup(w, "pointerup")?,
        wire_pointerup(w, "pointercancel")?,
    ])
}

fn wire_pointermove(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new(&target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = w.canvas.get_bounding_client_rect();
        let offset = input::pointer_offset(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        w.pointer.borrow_mut().offset = offset;
    })
}

fn wire_pointerdown(w: &PointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.canvas.clone().into();
    Listener::new(&target, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        w.pointer.borrow_mut().down = true;
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        log::debug!("[pointer] drag start");
    })
}

fn wire_pointerup(w: &PointerWiring, kind: &'static str) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.window.clone().into();
    Listener::new(&target, kind, move |_ev: web::Event| {
        let mut ps = w.pointer.borrow_mut();
        if ps.down {
            ps.down = false;
            log::debug!("[pointer] drag end ({})", kind);
        }
    })
}
