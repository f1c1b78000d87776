// ============================================================================
// APP STATE - Global application state
// ============================================================================
// One AppState per page load. The route cell drives which view renders and
// is shared with every viewmodel so navigation is a plain state mutation.
// Screen viewmodels are created lazily per visit and dropped on exit, so a
// form draft never leaks into the next visit.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{ApiClient, AuthGuard, BrowserSessionStore};
use crate::state::Route;
use crate::viewmodels::{
    FormMode, LoginViewModel, ProductFormViewModel, ProductListViewModel,
};

#[derive(Clone)]
pub struct AppState {
    pub route: Rc<RefCell<Route>>,
    pub api: ApiClient,
    pub guard: AuthGuard<BrowserSessionStore>,
    pub login: LoginViewModel<ApiClient, BrowserSessionStore>,
    pub list: ProductListViewModel<ApiClient, BrowserSessionStore>,
    pub form: Rc<RefCell<Option<ProductFormViewModel<ApiClient, BrowserSessionStore>>>>,
}

impl AppState {
    pub fn new() -> Self {
        let api = ApiClient::new();
        let guard = AuthGuard::new(BrowserSessionStore);

        // Entry check: with a stored token start on the product list,
        // otherwise on login
        let initial = if guard.is_authenticated() {
            Route::Products
        } else {
            Route::Login
        };
        let route = Rc::new(RefCell::new(initial));

        Self {
            login: LoginViewModel::new(api.clone(), guard.clone(), route.clone()),
            list: ProductListViewModel::new(api.clone(), guard.clone(), route.clone()),
            form: Rc::new(RefCell::new(None)),
            route,
            api,
            guard,
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Form viewmodel for the current visit, created fresh when the mode
    /// changed since the last render
    pub fn ensure_form(
        &self,
        mode: FormMode,
    ) -> ProductFormViewModel<ApiClient, BrowserSessionStore> {
        let mut slot = self.form.borrow_mut();
        match slot.as_ref() {
            Some(existing) if *existing.mode() == mode => existing.clone(),
            _ => {
                let vm = ProductFormViewModel::new(
                    self.api.clone(),
                    self.guard.clone(),
                    self.route.clone(),
                    mode,
                );
                *slot = Some(vm.clone());
                vm
            }
        }
    }

    /// Drop the form draft when the user leaves the form
    pub fn close_form(&self) {
        *self.form.borrow_mut() = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
