use crate::error::ApiResult;
use crate::models::{Message, UsersPage};
use crate::services::ApiClient;

pub async fn list_users(skip: u32, limit: u32) -> ApiResult<UsersPage> {
    ApiClient::new()
        .get(&format!("/users/?skip={}&limit={}", skip, limit))
        .await
}

pub async fn delete_user(id: String) -> ApiResult<Message> {
    ApiClient::new()
        .delete(&format!("/users/{}", urlencoding::encode(&id)))
        .await
}
