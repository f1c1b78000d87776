// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_input, on_submit, ElementBuilder};
use crate::state::app_state::AppState;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.login.clone();

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let logo = ElementBuilder::new("div")?.class("login-logo").text("🛒").build();
    let title = ElementBuilder::new("h1")?.text("Catalog Admin").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Sign in to manage products")
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    let form = ElementBuilder::new("form")?.class("login-form").build();

    let email_group = text_field("email", "Email", "you@example.com", "email", &vm)?;
    let password_group = text_field("password", "Password", "Your password", "password", &vm)?;

    // Error banner
    if let Some(message) = vm.error.borrow().as_ref() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(message)
            .build();
        append_child(&form, &banner)?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text(if *vm.submitting.borrow() {
            "Signing in..."
        } else {
            "Sign in"
        })
        .build();
    if *vm.submitting.borrow() {
        submit_btn.set_attribute("disabled", "true")?;
    }

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

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;

    Ok(screen)
}

fn text_field(
    id: &str,
    label_text: &str,
    placeholder: &str,
    input_type: &str,
    vm: &crate::viewmodels::LoginViewModel<
        crate::services::ApiClient,
        crate::services::BrowserSessionStore,
    >,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let slot = if input_type == "password" {
        vm.password.clone()
    } else {
        vm.email.clone()
    };

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("id", id)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .attr("value", &slot.borrow())?
        .build();

    {
        let slot = slot.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *slot.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
