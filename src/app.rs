// ============================================================================
// APP - Main application shell
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::app_state::AppState;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self {
            state: AppState::new(),
            root,
        })
    }

    /// Full re-render: replace the root's contents with the current route's
    /// screen. Listeners on the old tree are cleaned up by the browser.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let screen = render_app(&self.state)?;
        set_inner_html(&self.root, "");
        append_child(&self.root, &screen)?;
        Ok(())
    }
}
