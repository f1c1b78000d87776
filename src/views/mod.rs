// ============================================================================
// VIEWS - DOM rendering only, no business logic
// ============================================================================

pub mod app;
pub mod login;
pub mod product_form;
pub mod product_list;

pub use app::render_app;
