pub mod auth;
pub mod product;

pub use auth::{LoginRequest, LoginResponse, ServerErrorBody};
pub use product::{CategoryRef, Product, ProductPayload};
