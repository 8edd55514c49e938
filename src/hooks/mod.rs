pub mod use_session;
pub mod use_route;
pub mod use_mutation;
pub mod use_dialogs;
pub mod use_query;

pub use use_session::use_session;
pub use use_route::{navigate_to, use_route};
pub use use_mutation::{use_mutation, UseMutationHandle};
pub use use_dialogs::{use_dialogs, UseDialogsHandle};
pub use use_query::{use_query, QueryState};
