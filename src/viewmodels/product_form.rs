// ============================================================================
// PRODUCT FORM VIEWMODEL - Draft state, validation, submit/delete
// ============================================================================
// One draft per create/edit visit. The draft holds raw input values (price
// as the typed string) and coerces on submit; it never outlives the view.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Product, ProductPayload};
use crate::services::api_client::ProductApi;
use crate::services::auth_guard::AuthGuard;
use crate::services::error::{ApiError, GuardError};
use crate::services::session_store::SessionStore;
use crate::state::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// One keystroke's worth of draft mutation. Field kinds are fixed at compile
/// time: checkboxes can only ever carry a bool, text fields a string.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Description(String),
    Price(String),
    Category(String),
    InStock(bool),
    ImageUrl(String),
}

/// Fields that client-side validation can reject
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldViolation {
    pub field: Field,
    pub message: String,
}

#[derive(Clone)]
pub struct ProductFormViewModel<G: Clone, S: SessionStore + Clone> {
    api: G,
    guard: AuthGuard<S>,
    route: Rc<RefCell<Route>>,
    mode: FormMode,
    pub name: Rc<RefCell<String>>,
    pub description: Rc<RefCell<String>>,
    /// Raw input value; coerced to f64 only at submit
    pub price: Rc<RefCell<String>>,
    pub category: Rc<RefCell<String>>,
    pub in_stock: Rc<RefCell<bool>>,
    pub image_url: Rc<RefCell<String>>,
    pub categories: Rc<RefCell<Vec<String>>>,
    pub violations: Rc<RefCell<Vec<FieldViolation>>>,
    pub error: Rc<RefCell<Option<String>>>,
    /// Edit only: initial record fetch in progress
    pub loading: Rc<RefCell<bool>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl<G: ProductApi + Clone, S: SessionStore + Clone> ProductFormViewModel<G, S> {
    pub fn new(api: G, guard: AuthGuard<S>, route: Rc<RefCell<Route>>, mode: FormMode) -> Self {
        let loading = matches!(mode, FormMode::Edit(_));
        Self {
            api,
            guard,
            route,
            mode,
            name: Rc::new(RefCell::new(String::new())),
            description: Rc::new(RefCell::new(String::new())),
            price: Rc::new(RefCell::new(String::new())),
            category: Rc::new(RefCell::new(String::new())),
            in_stock: Rc::new(RefCell::new(true)),
            image_url: Rc::new(RefCell::new(String::new())),
            categories: Rc::new(RefCell::new(Vec::new())),
            violations: Rc::new(RefCell::new(Vec::new())),
            error: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(loading)),
            submitting: Rc::new(RefCell::new(false)),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    fn navigate(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    /// Apply one field mutation to the draft
    pub fn apply(&self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => *self.name.borrow_mut() = value,
            FieldEdit::Description(value) => *self.description.borrow_mut() = value,
            FieldEdit::Price(value) => *self.price.borrow_mut() = value,
            FieldEdit::Category(value) => *self.category.borrow_mut() = value,
            FieldEdit::InStock(value) => *self.in_stock.borrow_mut() = value,
            FieldEdit::ImageUrl(value) => *self.image_url.borrow_mut() = value,
        }
    }

    /// Project a server record into the draft, normalizing the category to
    /// its bare name
    fn project(&self, product: &Product) {
        *self.name.borrow_mut() = product.name.clone();
        *self.description.borrow_mut() = product.description.clone().unwrap_or_default();
        *self.price.borrow_mut() = format!("{}", product.price);
        *self.category.borrow_mut() = product.category_name().to_string();
        *self.in_stock.borrow_mut() = product.in_stock;
        *self.image_url.borrow_mut() = product.image_url.clone().unwrap_or_default();
    }

    /// Fetch categories (every form visit) and, in edit mode, the record
    /// being edited
    pub async fn load(&self) {
        {
            let api = self.api.clone();
            match self
                .guard
                .run(move |token| async move { api.list_categories(&token).await })
                .await
            {
                Ok(categories) => *self.categories.borrow_mut() = categories,
                Err(GuardError::RedirectToLogin) => {
                    self.navigate(Route::Login);
                    return;
                }
                Err(GuardError::Api(err)) => {
                    log::warn!("⚠️ [FORM] Could not load categories: {}", err);
                }
            }
        }

        if let FormMode::Edit(id) = &self.mode {
            let api = self.api.clone();
            let id = id.clone();
            let result = self
                .guard
                .run(move |token| async move { api.get_product(&token, &id).await })
                .await;

            *self.loading.borrow_mut() = false;

            match result {
                Ok(product) => self.project(&product),
                Err(GuardError::RedirectToLogin) => self.navigate(Route::Login),
                Err(GuardError::Api(ApiError::NotFound)) => {
                    *self.error.borrow_mut() = Some("Product not found".to_string());
                }
                Err(GuardError::Api(err)) => {
                    log::error!("❌ [FORM] Could not load product: {}", err);
                    *self.error.borrow_mut() = Some("Failed to load product".to_string());
                }
            }
        }
    }

    /// Client-side checks, pure over the current draft. Creation requires a
    /// name and a positive price; edit checks the price only when one was
    /// entered (partial correction stays possible).
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.name.borrow().is_empty() {
            violations.push(FieldViolation {
                field: Field::Name,
                message: "Name is required".to_string(),
            });
        }

        let price = self.price.borrow();
        let price_required = matches!(self.mode, FormMode::Create) || !price.is_empty();
        if price_required {
            match price.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => {}
                _ => violations.push(FieldViolation {
                    field: Field::Price,
                    message: "Price must be a number greater than 0".to_string(),
                }),
            }
        }

        violations
    }

    /// First violation for one field, for inline display
    pub fn violation_for(&self, field: Field) -> Option<String> {
        self.violations
            .borrow()
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.clone())
    }

    /// Draft coerced into the wire shape: numeric price, bare category name
    pub fn payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.borrow().clone(),
            description: self.description.borrow().clone(),
            price: self.price.borrow().trim().parse().unwrap_or(0.0),
            category: self.category.borrow().clone(),
            in_stock: *self.in_stock.borrow(),
            image_url: self.image_url.borrow().clone(),
        }
    }

    /// Validate, then create/update through the guard. Violations block the
    /// network call entirely; re-entrant submits are dropped.
    pub async fn submit(&self) {
        if *self.submitting.borrow() {
            return;
        }

        let violations = self.validate();
        if !violations.is_empty() {
            *self.violations.borrow_mut() = violations;
            return;
        }
        self.violations.borrow_mut().clear();
        *self.error.borrow_mut() = None;
        *self.submitting.borrow_mut() = true;

        let payload = self.payload();
        let result = match &self.mode {
            FormMode::Create => {
                let api = self.api.clone();
                self.guard
                    .run(move |token| async move {
                        api.create_product(&token, &payload).await.map(|_| ())
                    })
                    .await
            }
            FormMode::Edit(id) => {
                let api = self.api.clone();
                let id = id.clone();
                self.guard
                    .run(move |token| async move {
                        api.update_product(&token, &id, &payload).await.map(|_| ())
                    })
                    .await
            }
        };

        *self.submitting.borrow_mut() = false;

        match result {
            Ok(()) => self.navigate(Route::Products),
            Err(GuardError::RedirectToLogin) => self.navigate(Route::Login),
            Err(GuardError::Api(err)) => {
                let fallback = if self.is_edit() {
                    "Failed to update product"
                } else {
                    "Failed to create product"
                };
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| fallback.to_string());
                *self.error.borrow_mut() = Some(message);
            }
        }
    }

    /// Delete the record being edited. Callers pass the result of the user's
    /// confirmation dialog; without it nothing is issued.
    pub async fn delete(&self, confirmed: bool) {
        let FormMode::Edit(id) = &self.mode else {
            return;
        };
        if !confirmed || *self.submitting.borrow() {
            return;
        }

        *self.submitting.borrow_mut() = true;

        let api = self.api.clone();
        let id = id.clone();
        let result = self
            .guard
            .run(move |token| async move { api.delete_product(&token, &id).await })
            .await;

        *self.submitting.borrow_mut() = false;

        match result {
            Ok(()) => self.navigate(Route::Products),
            Err(GuardError::RedirectToLogin) => self.navigate(Route::Login),
            Err(GuardError::Api(err)) => {
                log::error!("❌ [FORM] Delete failed: {}", err);
                *self.error.borrow_mut() = Some("Failed to delete product".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session_store::testing::MemorySessionStore;
    use crate::viewmodels::testing::StubApi;
    use futures::executor::block_on;

    fn form(
        api: StubApi,
        store: MemorySessionStore,
        mode: FormMode,
    ) -> ProductFormViewModel<StubApi, MemorySessionStore> {
        ProductFormViewModel::new(
            api,
            AuthGuard::new(store),
            Rc::new(RefCell::new(match mode {
                FormMode::Create => Route::ProductNew,
                FormMode::Edit(ref id) => Route::ProductEdit(id.clone()),
            })),
            mode,
        )
    }

    fn filled_create_form(api: StubApi, store: MemorySessionStore) -> ProductFormViewModel<StubApi, MemorySessionStore> {
        let vm = form(api, store, FormMode::Create);
        vm.apply(FieldEdit::Name("Widget".to_string()));
        vm.apply(FieldEdit::Price("12.99".to_string()));
        vm.apply(FieldEdit::Category("Tools".to_string()));
        vm
    }

    #[test]
    fn empty_name_is_a_name_violation_and_blocks_the_network() {
        let api = StubApi::new();
        let vm = form(api.clone(), MemorySessionStore::with_token("tok"), FormMode::Create);
        vm.apply(FieldEdit::Price("9.99".to_string()));

        block_on(vm.submit());

        assert_eq!(api.call_count(), 0);
        assert_eq!(vm.violation_for(Field::Name).as_deref(), Some("Name is required"));
    }

    #[test]
    fn zero_and_negative_prices_are_price_violations() {
        for bad_price in ["0", "-5"] {
            let vm = form(StubApi::new(), MemorySessionStore::with_token("tok"), FormMode::Create);
            vm.apply(FieldEdit::Name("Widget".to_string()));
            vm.apply(FieldEdit::Price(bad_price.to_string()));

            let violations = vm.validate();
            assert_eq!(violations.len(), 1, "price {} must be rejected", bad_price);
            assert_eq!(violations[0].field, Field::Price);
        }
    }

    #[test]
    fn non_numeric_price_is_rejected_on_create() {
        let vm = form(StubApi::new(), MemorySessionStore::with_token("tok"), FormMode::Create);
        vm.apply(FieldEdit::Name("Widget".to_string()));
        vm.apply(FieldEdit::Price("abc".to_string()));

        assert_eq!(vm.validate()[0].field, Field::Price);
    }

    #[test]
    fn validate_is_idempotent_without_mutation() {
        let vm = form(StubApi::new(), MemorySessionStore::with_token("tok"), FormMode::Create);
        vm.apply(FieldEdit::Price("-5".to_string()));

        let first = vm.validate();
        let second = vm.validate();
        assert_eq!(first, second);
    }

    #[test]
    fn edit_mode_skips_the_price_check_when_left_empty() {
        let vm = form(
            StubApi::new(),
            MemorySessionStore::with_token("tok"),
            FormMode::Edit("p1".to_string()),
        );
        vm.apply(FieldEdit::Name("Hammer".to_string()));

        assert!(vm.validate().is_empty());

        // But a provided price is still checked
        vm.apply(FieldEdit::Price("-1".to_string()));
        assert_eq!(vm.validate()[0].field, Field::Price);
    }

    #[test]
    fn create_sends_the_coerced_payload_and_navigates_to_the_list() {
        let api = StubApi::new();
        let vm = filled_create_form(api.clone(), MemorySessionStore::with_token("tok"));

        block_on(vm.submit());

        let payload = api.last_payload.borrow().clone().expect("payload sent");
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.price, 12.99);
        assert_eq!(payload.category, "Tools");
        assert!(payload.in_stock);
        assert_eq!(*vm.route.borrow(), Route::Products);
    }

    #[test]
    fn loading_then_submitting_unmodified_round_trips_the_record() {
        let api = StubApi::new();
        *api.product.borrow_mut() = Some(StubApi::sample_product("p1", "Hammer", 19.5, "Tools"));
        *api.categories.borrow_mut() = vec!["Tools".to_string(), "Garden".to_string()];
        let vm = form(
            api.clone(),
            MemorySessionStore::with_token("tok"),
            FormMode::Edit("p1".to_string()),
        );

        block_on(vm.load());
        assert!(!*vm.loading.borrow());
        assert_eq!(vm.categories.borrow().len(), 2);

        block_on(vm.submit());

        let payload = api.last_payload.borrow().clone().expect("payload sent");
        assert_eq!(payload.name, "Hammer");
        assert_eq!(payload.price, 19.5);
        // Category reference object was normalized to its bare name
        assert_eq!(payload.category, "Tools");
        assert!(payload.in_stock);
        assert_eq!(*vm.route.borrow(), Route::Products);
    }

    #[test]
    fn editing_a_vanished_record_shows_not_found_without_redirect() {
        let api = StubApi::new(); // no product configured -> NotFound
        let vm = form(
            api,
            MemorySessionStore::with_token("tok"),
            FormMode::Edit("gone".to_string()),
        );

        block_on(vm.load());

        assert_eq!(vm.error.borrow().as_deref(), Some("Product not found"));
        assert_eq!(*vm.route.borrow(), Route::ProductEdit("gone".to_string()));
    }

    #[test]
    fn forbidden_submit_evicts_session_and_redirects() {
        let api = StubApi::failing_with(ApiError::AuthExpired { status: 403 });
        let store = MemorySessionStore::with_token("stale");
        let vm = filled_create_form(api, store.clone());

        block_on(vm.submit());

        assert_eq!(store.get(), None);
        assert_eq!(*vm.route.borrow(), Route::Login);
        // Authorization loss is never shown as an inline form error
        assert_eq!(*vm.error.borrow(), None);
    }

    #[test]
    fn server_rejection_surfaces_the_backend_message_verbatim() {
        let api = StubApi::failing_with(ApiError::Server {
            message: Some("category does not exist".to_string()),
        });
        let store = MemorySessionStore::with_token("tok");
        let vm = filled_create_form(api, store.clone());

        block_on(vm.submit());

        assert_eq!(vm.error.borrow().as_deref(), Some("category does not exist"));
        assert_eq!(store.get().as_deref(), Some("tok"));
    }

    #[test]
    fn server_rejection_without_message_falls_back_per_operation() {
        let api = StubApi::failing_with(ApiError::Server { message: None });
        let vm = filled_create_form(api, MemorySessionStore::with_token("tok"));

        block_on(vm.submit());

        assert_eq!(vm.error.borrow().as_deref(), Some("Failed to create product"));
    }

    #[test]
    fn unconfirmed_delete_issues_no_call_at_all() {
        let api = StubApi::new();
        let vm = form(
            api.clone(),
            MemorySessionStore::with_token("tok"),
            FormMode::Edit("p1".to_string()),
        );

        block_on(vm.delete(false));

        assert_eq!(api.call_count(), 0);
        assert_eq!(*vm.route.borrow(), Route::ProductEdit("p1".to_string()));
    }

    #[test]
    fn confirmed_delete_navigates_back_to_the_list() {
        let api = StubApi::new();
        let vm = form(
            api.clone(),
            MemorySessionStore::with_token("tok"),
            FormMode::Edit("p1".to_string()),
        );

        block_on(vm.delete(true));

        assert_eq!(api.calls.borrow().as_slice(), ["delete_product"]);
        assert_eq!(*vm.route.borrow(), Route::Products);
    }

    #[test]
    fn failed_delete_shows_the_generic_message() {
        let api = StubApi::failing_with(ApiError::Server {
            message: Some("referenced by an order".to_string()),
        });
        let vm = form(
            api,
            MemorySessionStore::with_token("tok"),
            FormMode::Edit("p1".to_string()),
        );

        block_on(vm.delete(true));

        assert_eq!(vm.error.borrow().as_deref(), Some("Failed to delete product"));
    }

    #[test]
    fn submit_without_token_redirects_before_any_network_call() {
        let api = StubApi::new();
        let vm = filled_create_form(api.clone(), MemorySessionStore::empty());

        block_on(vm.submit());

        assert_eq!(api.call_count(), 0);
        assert_eq!(*vm.route.borrow(), Route::Login);
    }

    #[test]
    fn checkbox_edits_only_carry_booleans() {
        let vm = form(StubApi::new(), MemorySessionStore::with_token("tok"), FormMode::Create);

        vm.apply(FieldEdit::InStock(false));
        assert!(!*vm.in_stock.borrow());
        vm.apply(FieldEdit::InStock(true));
        assert!(*vm.in_stock.borrow());
    }
}
