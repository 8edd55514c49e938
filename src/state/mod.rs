// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod query_cache;
pub mod notifications;

pub use reactivity::*;
pub use query_cache::*;
pub use notifications::*;
