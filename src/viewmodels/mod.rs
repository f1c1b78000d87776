// ============================================================================
// VIEWMODELS - UI state + logic, no DOM access
// ============================================================================
// Views render from these and call back into them; everything here is
// testable without a browser.
// ============================================================================

pub mod login;
pub mod product_form;
pub mod product_list;

pub use login::LoginViewModel;
pub use product_form::{Field, FieldEdit, FieldViolation, FormMode, ProductFormViewModel};
pub use product_list::ProductListViewModel;

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::models::{CategoryRef, LoginResponse, Product, ProductPayload};
    use crate::services::api_client::ProductApi;
    use crate::services::error::ApiError;

    /// Scriptable in-memory gateway. Clones share their cells so a test can
    /// inspect what the viewmodel sent and how often it called out.
    #[derive(Clone, Default)]
    pub(crate) struct StubApi {
        pub calls: Rc<RefCell<Vec<&'static str>>>,
        /// When set, every operation fails with this error
        pub fail_with: Rc<RefCell<Option<ApiError>>>,
        pub login_token: Rc<RefCell<Option<String>>>,
        pub products: Rc<RefCell<Vec<Product>>>,
        pub product: Rc<RefCell<Option<Product>>>,
        pub categories: Rc<RefCell<Vec<String>>>,
        pub last_payload: Rc<RefCell<Option<ProductPayload>>>,
    }

    impl StubApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_with(err: ApiError) -> Self {
            let stub = Self::default();
            *stub.fail_with.borrow_mut() = Some(err);
            stub
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        fn gate(&self, name: &'static str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(name);
            match self.fail_with.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        pub fn sample_product(id: &str, name: &str, price: f64, category: &str) -> Product {
            Product {
                id: id.to_string(),
                name: name.to_string(),
                description: Some("A sample product".to_string()),
                price,
                category: CategoryRef::Object { name: category.to_string() },
                in_stock: true,
                image_url: None,
            }
        }

        fn product_from(payload: &ProductPayload, id: &str) -> Product {
            Product {
                id: id.to_string(),
                name: payload.name.clone(),
                description: Some(payload.description.clone()),
                price: payload.price,
                category: CategoryRef::Name(payload.category.clone()),
                in_stock: payload.in_stock,
                image_url: Some(payload.image_url.clone()),
            }
        }
    }

    impl ProductApi for StubApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse, ApiError> {
            self.gate("login")?;
            match self.login_token.borrow().clone() {
                Some(token) => Ok(LoginResponse { token }),
                None => Err(ApiError::InvalidCredentials),
            }
        }

        async fn list_products(&self, _token: &str) -> Result<Vec<Product>, ApiError> {
            self.gate("list_products")?;
            Ok(self.products.borrow().clone())
        }

        async fn get_product(&self, _token: &str, _id: &str) -> Result<Product, ApiError> {
            self.gate("get_product")?;
            self.product.borrow().clone().ok_or(ApiError::NotFound)
        }

        async fn create_product(&self, _token: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
            self.gate("create_product")?;
            *self.last_payload.borrow_mut() = Some(payload.clone());
            Ok(Self::product_from(payload, "created-1"))
        }

        async fn update_product(&self, _token: &str, id: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
            self.gate("update_product")?;
            *self.last_payload.borrow_mut() = Some(payload.clone());
            Ok(Self::product_from(payload, id))
        }

        async fn delete_product(&self, _token: &str, _id: &str) -> Result<(), ApiError> {
            self.gate("delete_product")?;
            Ok(())
        }

        async fn list_categories(&self, _token: &str) -> Result<Vec<String>, ApiError> {
            self.gate("list_categories")?;
            Ok(self.categories.borrow().clone())
        }
    }
}
