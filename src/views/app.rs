// ============================================================================
// APP VIEW - Route dispatch + per-visit lifecycle
// ============================================================================
// Each render picks the screen for the current route and manages what lives
// across visits: the product list forgets its data when the user leaves it,
// and the form draft exists only while a form route is active.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::app_state::AppState;
use crate::state::Route;
use crate::viewmodels::FormMode;
use crate::views::login::render_login;
use crate::views::product_form::{render_product_form, start_form_load};
use crate::views::product_list::{render_products, start_products_load};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    log::debug!("🧭 [APP] Rendering {:?}", route);

    match route {
        Route::Login => {
            state.close_form();
            state.list.reset();
            render_login(state)
        }
        Route::Products => {
            state.close_form();
            // Entry check happens inside load(): without a token it redirects
            // before any request goes out
            start_products_load(state);
            render_products(state)
        }
        Route::ProductNew => render_form(state, FormMode::Create),
        Route::ProductEdit(id) => render_form(state, FormMode::Edit(id)),
    }
}

fn render_form(state: &AppState, mode: FormMode) -> Result<Element, JsValue> {
    state.list.reset();

    let fresh = state
        .form
        .borrow()
        .as_ref()
        .map(|existing| *existing.mode() != mode)
        .unwrap_or(true);

    let vm = state.ensure_form(mode);
    if fresh {
        start_form_load(&vm);
    }
    render_product_form(state, &vm)
}
