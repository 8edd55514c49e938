// ============================================================================
// ITEM SERVICE - CRUD de items
// ============================================================================

use crate::error::ApiResult;
use crate::models::{Item, ItemCreate, ItemUpdate, ItemsPage, Message};
use crate::services::ApiClient;

pub async fn list_items(skip: u32, limit: u32) -> ApiResult<ItemsPage> {
    ApiClient::new()
        .get(&format!("/items/?skip={}&limit={}", skip, limit))
        .await
}

pub async fn create_item(item: ItemCreate) -> ApiResult<Item> {
    ApiClient::new().post_json("/items/", &item).await
}

pub async fn update_item(id: String, changes: ItemUpdate) -> ApiResult<Item> {
    ApiClient::new()
        .put_json(&format!("/items/{}", urlencoding::encode(&id)), &changes)
        .await
}

pub async fn delete_item(id: String) -> ApiResult<Message> {
    ApiClient::new()
        .delete(&format!("/items/{}", urlencoding::encode(&id)))
        .await
}
