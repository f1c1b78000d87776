// ============================================================================
// PRODUCT FORM VIEW - Create / edit a product
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{append_child, confirm, on_change, on_click, on_input, on_submit, ElementBuilder};
use crate::services::{ApiClient, BrowserSessionStore};
use crate::state::app_state::AppState;
use crate::state::Route;
use crate::viewmodels::{Field, FieldEdit, ProductFormViewModel};

type FormVm = ProductFormViewModel<ApiClient, BrowserSessionStore>;

pub fn render_product_form(state: &AppState, vm: &FormVm) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("form-screen").build();

    // Header bar: back link + title
    let header = ElementBuilder::new("header")?.class("form-header").build();

    let back_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-back")
        .text("← Back")
        .build();
    {
        let route = state.route.clone();
        on_click(&back_btn, move |_| {
            *route.borrow_mut() = Route::Products;
            crate::rerender_app();
        })?;
    }

    let title = ElementBuilder::new("h1")?
        .text(if vm.is_edit() { "Edit Product" } else { "New Product" })
        .build();

    append_child(&header, &back_btn)?;
    append_child(&header, &title)?;
    append_child(&screen, &header)?;

    if *vm.loading.borrow() {
        let loading = ElementBuilder::new("div")?
            .class("loading-state")
            .text("Loading product...")
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
    }

    let form = ElementBuilder::new("form")?.class("product-form").build();

    append_child(&form, &name_field(vm)?)?;
    append_child(&form, &description_field(vm)?)?;
    append_child(&form, &price_field(vm)?)?;
    append_child(&form, &category_field(vm)?)?;
    append_child(&form, &stock_field(vm)?)?;
    append_child(&form, &image_url_field(vm)?)?;

    // Actions
    let actions = ElementBuilder::new("div")?.class("form-actions").build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text(match (vm.is_edit(), *vm.submitting.borrow()) {
            (false, false) => "Create Product",
            (false, true) => "Creating...",
            (true, false) => "Save Changes",
            (true, true) => "Saving...",
        })
        .build();
    if *vm.submitting.borrow() {
        submit_btn.set_attribute("disabled", "true")?;
    }
    append_child(&actions, &submit_btn)?;

    if vm.is_edit() {
        let delete_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-danger")
            .text("Delete Product")
            .build();
        {
            let vm = vm.clone();
            on_click(&delete_btn, move |_| {
                let confirmed = confirm("Delete this product? This cannot be undone.");
                let vm = vm.clone();
                spawn_local(async move {
                    vm.delete(confirmed).await;
                    crate::rerender_app();
                });
            })?;
        }
        append_child(&actions, &delete_btn)?;
    }

    append_child(&form, &actions)?;

    {
        let vm = vm.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit().await;
                crate::rerender_app();
            });
        })?;
    }

    append_child(&screen, &form)?;
    Ok(screen)
}

fn field_group(label_text: &str, for_id: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", for_id)?
        .text(label_text)
        .build();
    append_child(&group, &label)?;
    Ok(group)
}

fn violation_note(vm: &FormVm, field: Field, group: &Element) -> Result<(), JsValue> {
    if let Some(message) = vm.violation_for(field) {
        let note = ElementBuilder::new("span")?
            .class("field-error")
            .text(&message)
            .build();
        append_child(group, &note)?;
    }
    Ok(())
}

fn name_field(vm: &FormVm) -> Result<Element, JsValue> {
    let group = field_group("Name", "name")?;

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .attr("id", "name")?
        .attr("placeholder", "Product name")?
        .attr("value", &vm.name.borrow())?
        .build();
    {
        let vm = vm.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                vm.apply(FieldEdit::Name(target.value()));
            }
        })?;
    }
    append_child(&group, &input)?;
    violation_note(vm, Field::Name, &group)?;
    Ok(group)
}

fn description_field(vm: &FormVm) -> Result<Element, JsValue> {
    let group = field_group("Description", "description")?;

    let textarea = ElementBuilder::new("textarea")?
        .class("form-input")
        .attr("id", "description")?
        .attr("rows", "4")?
        .attr("placeholder", "What is this product?")?
        .text(&vm.description.borrow())
        .build();
    {
        let vm = vm.clone();
        on_input(&textarea, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                vm.apply(FieldEdit::Description(target.value()));
            }
        })?;
    }
    append_child(&group, &textarea)?;
    Ok(group)
}

fn price_field(vm: &FormVm) -> Result<Element, JsValue> {
    let group = field_group("Price", "price")?;

    // Text input on purpose: the draft keeps the raw string and only submit
    // coerces it, so intermediate states like "12." stay typeable
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .attr("inputmode", "decimal")?
        .attr("id", "price")?
        .attr("placeholder", "0.00")?
        .attr("value", &vm.price.borrow())?
        .build();
    {
        let vm = vm.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                vm.apply(FieldEdit::Price(target.value()));
            }
        })?;
    }
    append_child(&group, &input)?;
    violation_note(vm, Field::Price, &group)?;
    Ok(group)
}

fn category_field(vm: &FormVm) -> Result<Element, JsValue> {
    let group = field_group("Category", "category")?;

    let select = ElementBuilder::new("select")?
        .class("form-input")
        .attr("id", "category")?
        .build();

    let current = vm.category.borrow().clone();

    let placeholder = ElementBuilder::new("option")?
        .attr("value", "")?
        .text("Select a category")
        .build();
    if current.is_empty() {
        placeholder.set_attribute("selected", "true")?;
    }
    append_child(&select, &placeholder)?;

    let categories = vm.categories.borrow();
    for name in categories.iter() {
        let option = ElementBuilder::new("option")?
            .attr("value", name)?
            .text(name)
            .build();
        if *name == current {
            option.set_attribute("selected", "true")?;
        }
        append_child(&select, &option)?;
    }

    // A record may carry a category the backend no longer lists; keep it
    // selectable so an unrelated edit does not silently reassign it
    if !current.is_empty() && !categories.iter().any(|c| *c == current) {
        let option = ElementBuilder::new("option")?
            .attr("value", &current)?
            .text(&current)
            .build();
        option.set_attribute("selected", "true")?;
        append_child(&select, &option)?;
    }

    {
        let vm = vm.clone();
        on_change(&select, move |e: web_sys::Event| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                vm.apply(FieldEdit::Category(target.value()));
            }
        })?;
    }

    append_child(&group, &select)?;
    Ok(group)
}

fn stock_field(vm: &FormVm) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group checkbox-group").build();

    let input = ElementBuilder::new("input")?
        .attr("type", "checkbox")?
        .attr("id", "in-stock")?
        .build();
    if *vm.in_stock.borrow() {
        input.set_attribute("checked", "true")?;
    }
    {
        let vm = vm.clone();
        on_change(&input, move |e: web_sys::Event| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                vm.apply(FieldEdit::InStock(target.checked()));
            }
        })?;
    }

    let label = ElementBuilder::new("label")?
        .attr("for", "in-stock")?
        .text("In stock")
        .build();

    append_child(&group, &input)?;
    append_child(&group, &label)?;
    Ok(group)
}

fn image_url_field(vm: &FormVm) -> Result<Element, JsValue> {
    let group = field_group("Image URL", "image-url")?;

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .attr("id", "image-url")?
        .attr("placeholder", "https://...")?
        .attr("value", &vm.image_url.borrow())?
        .build();
    {
        let vm = vm.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                vm.apply(FieldEdit::ImageUrl(target.value()));
            }
        })?;
    }
    append_child(&group, &input)?;
    Ok(group)
}

/// Kick off the form's data load (categories, and the record in edit mode)
/// the first time this visit renders.
pub fn start_form_load(vm: &FormVm) {
    let vm = vm.clone();
    spawn_local(async move {
        vm.load().await;
        crate::rerender_app();
    });
}
