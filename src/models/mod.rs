pub mod auth;
pub mod item;
pub mod user;

pub use auth::{AccessToken, Identity, LoginForm, Message, NewPassword};
pub use item::{Item, ItemCreate, ItemUpdate, ItemsPage};
pub use user::{UserPublic, UsersPage};
