// ============================================================================
// PRODUCT LIST VIEW - Card grid of the catalog
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Product;
use crate::state::app_state::AppState;
use crate::state::Route;

pub fn render_products(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.list.clone();

    let screen = ElementBuilder::new("div")?.class("products-screen").build();

    // Header bar: title + actions
    let header = ElementBuilder::new("header")?.class("products-header").build();
    let title = ElementBuilder::new("h1")?.text("Products").build();

    let actions = ElementBuilder::new("div")?.class("header-actions").build();

    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text("+ Add Product")
        .build();
    {
        let route = state.route.clone();
        on_click(&add_btn, move |_| {
            *route.borrow_mut() = Route::ProductNew;
            crate::rerender_app();
        })?;
    }

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Logout")
        .build();
    {
        let vm = vm.clone();
        on_click(&logout_btn, move |_| {
            vm.logout();
            crate::rerender_app();
        })?;
    }

    append_child(&actions, &add_btn)?;
    append_child(&actions, &logout_btn)?;
    append_child(&header, &title)?;
    append_child(&header, &actions)?;
    append_child(&screen, &header)?;

    if *vm.loading.borrow() {
        let loading = ElementBuilder::new("div")?
            .class("loading-state")
            .text("Loading products...")
            .build();
        append_child(&screen, &loading)?;
        return Ok(screen);
    }

    if let Some(message) = vm.error.borrow().as_ref() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(message)
            .build();
        append_child(&screen, &banner)?;
        return Ok(screen);
    }

    let products = vm.products.borrow();
    if products.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text("No products yet. Add your first one.")
            .build();
        append_child(&screen, &empty)?;
        return Ok(screen);
    }

    let grid = ElementBuilder::new("div")?.class("product-grid").build();
    for product in products.iter() {
        let card = render_product_card(state, product)?;
        append_child(&grid, &card)?;
    }
    append_child(&screen, &grid)?;

    Ok(screen)
}

fn render_product_card(state: &AppState, product: &Product) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("product-card").build();

    if let Some(url) = product.image_url.as_deref().filter(|u| !u.is_empty()) {
        let image = ElementBuilder::new("img")?
            .class("product-image")
            .attr("src", url)?
            .attr("alt", &product.name)?
            .build();
        append_child(&card, &image)?;
    }

    let body = ElementBuilder::new("div")?.class("product-body").build();

    let name = ElementBuilder::new("h3")?
        .class("product-name")
        .text(&product.name)
        .build();

    let category = ElementBuilder::new("span")?
        .class("product-category")
        .text(product.category_name())
        .build();

    // Price always shown with two decimals
    let price = ElementBuilder::new("div")?
        .class("product-price")
        .text(&format!("RM {}", product.display_price()))
        .build();

    let stock = if product.in_stock {
        ElementBuilder::new("span")?
            .class("stock-chip in-stock")
            .text("In Stock")
            .build()
    } else {
        ElementBuilder::new("span")?
            .class("stock-chip out-of-stock")
            .text("Out of Stock")
            .build()
    };

    append_child(&body, &name)?;
    append_child(&body, &category)?;
    append_child(&body, &price)?;
    append_child(&body, &stock)?;

    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        let desc = ElementBuilder::new("p")?
            .class("product-description")
            .text(description)
            .build();
        append_child(&body, &desc)?;
    }

    let edit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-edit")
        .text("Edit")
        .build();
    {
        let route = state.route.clone();
        let id = product.id.clone();
        on_click(&edit_btn, move |_| {
            *route.borrow_mut() = Route::ProductEdit(id.clone());
            crate::rerender_app();
        })?;
    }
    append_child(&body, &edit_btn)?;

    append_child(&card, &body)?;
    Ok(card)
}

/// Kick off the fetch for this visit exactly once. `begin()` raises the
/// loading flag synchronously so this render already paints it; the async
/// completion triggers the re-render that swaps it out.
pub fn start_products_load(state: &AppState) {
    let vm = state.list.clone();
    if *vm.started.borrow() {
        return;
    }
    vm.begin();

    spawn_local(async move {
        vm.load().await;
        crate::rerender_app();
    });
}
