// ============================================================================
// LOGIN VIEWMODEL - Credentials form + session start
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::api_client::ProductApi;
use crate::services::auth_guard::AuthGuard;
use crate::services::error::ApiError;
use crate::services::session_store::SessionStore;
use crate::state::Route;

#[derive(Clone)]
pub struct LoginViewModel<G: Clone, S: SessionStore + Clone> {
    api: G,
    guard: AuthGuard<S>,
    route: Rc<RefCell<Route>>,
    pub email: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub submitting: Rc<RefCell<bool>>,
}

impl<G: ProductApi + Clone, S: SessionStore + Clone> LoginViewModel<G, S> {
    pub fn new(api: G, guard: AuthGuard<S>, route: Rc<RefCell<Route>>) -> Self {
        Self {
            api,
            guard,
            route,
            email: Rc::new(RefCell::new(String::new())),
            password: Rc::new(RefCell::new(String::new())),
            error: Rc::new(RefCell::new(None)),
            submitting: Rc::new(RefCell::new(false)),
        }
    }

    fn navigate(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    /// Exchange credentials for a token, store it, go to the product list.
    /// Re-entrant submits while a call is in flight are dropped.
    pub async fn submit(&self) {
        if *self.submitting.borrow() {
            return;
        }

        let email = self.email.borrow().clone();
        let password = self.password.borrow().clone();

        if email.is_empty() || password.is_empty() {
            *self.error.borrow_mut() = Some("Please fill in all fields".to_string());
            return;
        }

        *self.submitting.borrow_mut() = true;
        *self.error.borrow_mut() = None;

        match self.api.login(&email, &password).await {
            Ok(response) => {
                self.guard.start_session(&response.token);
                log::info!("✅ [LOGIN] Session started");
                self.navigate(Route::Products);
            }
            Err(ApiError::InvalidCredentials) => {
                *self.error.borrow_mut() = Some("Invalid email or password".to_string());
            }
            Err(ApiError::Network(e)) => {
                log::error!("❌ [LOGIN] Network error: {}", e);
                *self.error.borrow_mut() = Some("Network error, please try again".to_string());
            }
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                *self.error.borrow_mut() = Some("Login failed".to_string());
            }
        }

        *self.submitting.borrow_mut() = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session_store::testing::MemorySessionStore;
    use crate::viewmodels::testing::StubApi;
    use futures::executor::block_on;

    fn viewmodel(api: StubApi, store: MemorySessionStore) -> LoginViewModel<StubApi, MemorySessionStore> {
        LoginViewModel::new(api, AuthGuard::new(store), Rc::new(RefCell::new(Route::Login)))
    }

    #[test]
    fn successful_login_stores_token_and_navigates_to_products() {
        let api = StubApi::new();
        *api.login_token.borrow_mut() = Some("tok-abc".to_string());
        let store = MemorySessionStore::empty();
        let vm = viewmodel(api, store.clone());

        *vm.email.borrow_mut() = "admin@example.com".to_string();
        *vm.password.borrow_mut() = "hunter2".to_string();
        block_on(vm.submit());

        assert_eq!(store.get().as_deref(), Some("tok-abc"));
        assert_eq!(*vm.route.borrow(), Route::Products);
        assert_eq!(*vm.error.borrow(), None);
    }

    #[test]
    fn rejected_credentials_surface_an_error_and_leave_no_session() {
        let api = StubApi::new(); // no login_token configured -> InvalidCredentials
        let store = MemorySessionStore::empty();
        let vm = viewmodel(api, store.clone());

        *vm.email.borrow_mut() = "admin@example.com".to_string();
        *vm.password.borrow_mut() = "wrong".to_string();
        block_on(vm.submit());

        assert_eq!(store.get(), None);
        assert_eq!(*vm.route.borrow(), Route::Login);
        assert_eq!(vm.error.borrow().as_deref(), Some("Invalid email or password"));
    }

    #[test]
    fn backend_outage_is_a_generic_failure_not_bad_credentials() {
        let api = StubApi::failing_with(ApiError::Server {
            message: Some("upstream timeout".to_string()),
        });
        let store = MemorySessionStore::empty();
        let vm = viewmodel(api, store.clone());

        *vm.email.borrow_mut() = "admin@example.com".to_string();
        *vm.password.borrow_mut() = "hunter2".to_string();
        block_on(vm.submit());

        assert_eq!(vm.error.borrow().as_deref(), Some("Login failed"));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn empty_fields_block_the_request_entirely() {
        let api = StubApi::new();
        let vm = viewmodel(api.clone(), MemorySessionStore::empty());

        block_on(vm.submit());

        assert_eq!(api.call_count(), 0);
        assert!(vm.error.borrow().is_some());
    }
}
