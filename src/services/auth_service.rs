// ============================================================================
// AUTH SERVICE - Login, recuperación/reset de contraseña, cuenta propia
// ============================================================================

use crate::error::ApiResult;
use crate::models::{AccessToken, Identity, LoginForm, Message, NewPassword};
use crate::services::ApiClient;

/// Token OAuth2 a partir de usuario/contraseña
pub async fn login_access_token(form: &LoginForm) -> ApiResult<AccessToken> {
    ApiClient::anonymous()
        .post_form(
            "/login/access-token",
            &[("username", form.username.as_str()), ("password", form.password.as_str())],
        )
        .await
}

pub async fn read_current_user(client: &ApiClient) -> ApiResult<Identity> {
    client.get("/users/me").await
}

/// Login completo: token y luego identidad con ese token.
/// No toca el SessionStore: eso lo hace el on_success del formulario.
pub async fn login(form: LoginForm) -> ApiResult<(String, Identity)> {
    log::info!("🔐 [AUTH] Login de {}", form.username);
    let token = login_access_token(&form).await?;
    let identity = read_current_user(&ApiClient::with_token(&token.access_token)).await?;
    Ok((token.access_token, identity))
}

pub async fn recover_password(email: String) -> ApiResult<Message> {
    let path = format!("/password-recovery/{}", urlencoding::encode(email.trim()));
    ApiClient::anonymous().post_empty(&path).await
}

pub async fn reset_password(body: NewPassword) -> ApiResult<Message> {
    ApiClient::anonymous().post_json("/reset-password/", &body).await
}

pub async fn delete_current_user() -> ApiResult<Message> {
    ApiClient::new().delete("/users/me").await
}

/// Identidad con el token de la sesión actual (para use_query)
pub async fn fetch_current_user() -> ApiResult<Identity> {
    read_current_user(&ApiClient::new()).await
}
