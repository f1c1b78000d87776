// ============================================================================
// STATE MODULE - State management with Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod route;

pub use app_state::*;
pub use route::*;
