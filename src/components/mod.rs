pub mod app;
pub mod dialog;
pub mod route_guard;
pub mod nav_bar;
pub mod toasts;
pub mod login_screen;
pub mod recover_password;
pub mod reset_password;
pub mod dashboard;
pub mod item_dialogs;
pub mod items_page;
pub mod users_page;
pub mod settings_page;

pub use app::App;
pub use dialog::{ConfirmDialog, Dialog};
pub use route_guard::{ForbiddenPage, GuestOnly, NotFoundPage, ProtectedRoute};
