// ============================================================================
// CATALOG ADMIN - Browser-resident product catalog client
// ============================================================================
// Strict MVVM:
// - Views: functions that render DOM (no logic)
// - ViewModels: UI state + logic
// - Services: API communication, session, auth policy
// - State: state management with Rc<RefCell>
// - Models: structures shared with the backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Catalog Admin - {}", config::CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the current route. Called by views after every state
/// change that should be visible.
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App not initialized yet");
        }
    });
}
