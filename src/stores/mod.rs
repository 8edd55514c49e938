pub mod session_store;

pub use session_store::{session_store, Session, SessionStore};
