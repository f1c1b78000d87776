// ============================================================================
// PRODUCT LIST VIEWMODEL - Authenticated collection view
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Product;
use crate::services::api_client::ProductApi;
use crate::services::auth_guard::AuthGuard;
use crate::services::error::GuardError;
use crate::services::session_store::SessionStore;
use crate::state::Route;

#[derive(Clone)]
pub struct ProductListViewModel<G: Clone, S: SessionStore + Clone> {
    api: G,
    guard: AuthGuard<S>,
    route: Rc<RefCell<Route>>,
    pub products: Rc<RefCell<Vec<Product>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
    /// Set when a fetch has been kicked off for the current visit
    pub started: Rc<RefCell<bool>>,
}

impl<G: ProductApi + Clone, S: SessionStore + Clone> ProductListViewModel<G, S> {
    pub fn new(api: G, guard: AuthGuard<S>, route: Rc<RefCell<Route>>) -> Self {
        Self {
            api,
            guard,
            route,
            products: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            started: Rc::new(RefCell::new(false)),
        }
    }

    fn navigate(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    /// Mark this visit's fetch as started, before the async part runs, so
    /// the first paint already shows the loading state. The unauthenticated
    /// path stays loading-free: it redirects instead.
    pub fn begin(&self) {
        *self.started.borrow_mut() = true;
        if self.guard.is_authenticated() {
            *self.loading.borrow_mut() = true;
        }
    }

    /// Fetch the collection. Without a token this redirects straight away:
    /// no loading state, no network call.
    pub async fn load(&self) {
        if !self.guard.is_authenticated() {
            self.navigate(Route::Login);
            return;
        }

        *self.loading.borrow_mut() = true;

        let api = self.api.clone();
        let result = self
            .guard
            .run(move |token| async move { api.list_products(&token).await })
            .await;

        *self.loading.borrow_mut() = false;

        match result {
            Ok(products) => {
                *self.error.borrow_mut() = None;
                *self.products.borrow_mut() = products;
            }
            Err(GuardError::RedirectToLogin) => self.navigate(Route::Login),
            Err(GuardError::Api(err)) => {
                log::error!("❌ [LIST] Could not load products: {}", err);
                *self.error.borrow_mut() = Some("Failed to load products".to_string());
            }
        }
    }

    /// Clear the session and go back to login, whatever the network state
    pub fn logout(&self) {
        self.guard.end_session();
        self.navigate(Route::Login);
    }

    /// Forget this visit's state so the next entry re-fetches
    pub fn reset(&self) {
        *self.started.borrow_mut() = false;
        *self.loading.borrow_mut() = false;
        *self.error.borrow_mut() = None;
        self.products.borrow_mut().clear();
    }
}
