//! requestAnimationFrame plumbing: the tick registration handle and the
//! frame loop that drives the engine.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fire_core::FireEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::DomHost;

/// Tick registration handle handed to the engine.
///
/// Arming sets the flag the frame loop polls each frame; dropping the
/// handle disarms it, so cancellation takes effect at the next frame even
/// when the drop happens mid-callback.
pub struct RafTick {
    armed: Rc<Cell<bool>>,
}

impl RafTick {
    pub(crate) fn arm(armed: Rc<Cell<bool>>) -> Self {
        armed.set(true);
        Self { armed }
    }
}

impl Drop for RafTick {
    fn drop(&mut self) {
        self.armed.set(false);
    }
}

/// Start the frame loop unless it is already running.
///
/// The loop self-reschedules every frame, calls into the engine only while
/// the tick registration is armed, and ends for good once `disposed` is
/// set. The callback keeps itself alive through a self-referential `Rc`.
pub(crate) fn ensure_loop(
    engine: &Rc<RefCell<FireEngine<DomHost>>>,
    armed: &Rc<Cell<bool>>,
    running: &Rc<Cell<bool>>,
    disposed: &Rc<Cell<bool>>,
) {
    if running.get() {
        return;
    }
    running.set(true);

    let engine = engine.clone();
    let armed = armed.clone();
    let running = running.clone();
    let disposed = disposed.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if disposed.get() {
            running.set(false);
            return;
        }
        if armed.get() {
            engine.borrow_mut().tick();
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
