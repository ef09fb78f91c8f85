use crate::core::{ControlInput, FrameInput, Simulation};
use crate::dom::CanvasSize;
use crate::input::PointerState;
use crate::render::CanvasRenderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Simulation,
    pub renderer: CanvasRenderer,
    pub pointer: Rc<RefCell<PointerState>>,
    pub size: Rc<Cell<CanvasSize>>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let size = self.size.get();
        let pointer = *self.pointer.borrow();
        let input = FrameInput {
            control: ControlInput {
                pointer_offset: pointer.offset,
                drag_active: pointer.down,
            },
            viewport: size.viewport,
            clock_seconds: self.started.elapsed().as_secs_f32(),
        };
        let commands = self.sim.advance(&input);
        if let Err(e) = self.renderer.render(commands, size.pixel_ratio) {
            log::error!("render error: {:?}", e);
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame loop. `stop` cancels the pending frame and
/// releases the tick closure (and the frame context it owns).
pub struct LoopHandle {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the tick -> tick Rc cycle
        self.tick.borrow_mut().take();
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

fn schedule(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> LoopHandle {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let stopped_tick = stopped.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        frame_ctx.frame();
        schedule(&tick_clone, &raf_id_tick);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &raf_id);

    LoopHandle {
        tick,
        raf_id,
        stopped,
    }
}
