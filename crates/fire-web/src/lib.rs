#![cfg(target_arch = "wasm32")]
//! Web front-end for the streak fire effect.
//!
//! Exposes a small JS-facing wrapper around the core engine: construct one
//! `StreakFire` per mounted view, forward every streak change through
//! `setStreak`, call `dispose` when the view goes away.

mod dom;
mod frame;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Context;
use fire_core::{FireConfig, FireEngine};
use wasm_bindgen::prelude::*;
use web_sys as web;

use dom::DomHost;

/// Streak fire overlay bound to one container element.
///
/// The container is borrowed: the effect appends exactly one overlay node
/// to it and removes that node on teardown.
#[wasm_bindgen]
pub struct StreakFire {
    engine: Rc<RefCell<FireEngine<DomHost>>>,
    host: DomHost,
    running: Rc<Cell<bool>>,
    disposed: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl StreakFire {
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement) -> StreakFire {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let seed = js_sys::Date::now() as u64;
        StreakFire {
            engine: Rc::new(RefCell::new(FireEngine::new(FireConfig::default(), seed))),
            host: DomHost::new(container),
            running: Rc::new(Cell::new(false)),
            disposed: Rc::new(Cell::new(false)),
        }
    }

    /// Report a new streak value. Values below 1 tear the effect down;
    /// anything else rebuilds the particle pool at the matching intensity.
    #[wasm_bindgen(js_name = setStreak)]
    pub fn set_streak(&self, streak: u32) -> Result<(), JsValue> {
        if self.disposed.get() {
            return Ok(());
        }
        self.apply_streak(streak).map_err(|e| {
            log::error!("set_streak({streak}) failed: {e:#}");
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    /// Tear the effect down and end the frame loop. Idempotent; further
    /// `setStreak` calls are ignored.
    pub fn dispose(&self) {
        self.disposed.set(true);
        self.engine.borrow_mut().deactivate();
    }
}

impl StreakFire {
    fn apply_streak(&self, streak: u32) -> anyhow::Result<()> {
        self.engine
            .borrow_mut()
            .activate(streak, &self.host)
            .context("streak fire activation failed")?;
        if self.engine.borrow().is_ticking() {
            frame::ensure_loop(
                &self.engine,
                &self.host.raf_armed(),
                &self.running,
                &self.disposed,
            );
        }
        Ok(())
    }
}

impl Drop for StreakFire {
    fn drop(&mut self) {
        self.dispose();
    }
}
