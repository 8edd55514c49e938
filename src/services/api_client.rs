// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: construye requests, añade el token Bearer y
// convierte cualquier fallo en ApiError { status, body }.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::stores::session_store;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Cliente con el token de la sesión actual (si la hay)
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url(),
            token: session_store().token(),
        }
    }

    /// Cliente sin credenciales (login, recuperación de contraseña)
    pub fn anonymous() -> Self {
        Self {
            base_url: CONFIG.api_url(),
            token: None,
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            base_url: CONFIG.api_url(),
            token: Some(token.into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("📡 [API] GET {}", path);
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(ApiError::network)?;
        read_response(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("📡 [API] POST {}", path);
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(ApiError::network)?;
        send(request).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("📡 [API] POST {}", path);
        let response = self
            .authorize(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(ApiError::network)?;
        read_response(response).await
    }

    /// POST application/x-www-form-urlencoded (endpoint de token OAuth2)
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> ApiResult<T> {
        log::debug!("📡 [API] POST (form) {}", path);
        let request = self
            .authorize(Request::post(&self.url(path)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encode_form(fields))
            .map_err(ApiError::network)?;
        send(request).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("📡 [API] PUT {}", path);
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(ApiError::network)?;
        send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("📡 [API] DELETE {}", path);
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(ApiError::network)?;
        read_response(response).await
    }
}

async fn send<T: DeserializeOwned>(request: Request) -> ApiResult<T> {
    let response = request.send().await.map_err(ApiError::network)?;
    read_response(response).await
}

async fn read_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        log::warn!("⚠️ [API] HTTP {} {}", status, response.url());
        return Err(ApiError::from_status(status, error_body(&text)));
    }
    response.json::<T>().await.map_err(ApiError::decode)
}

/// Cuerpo de error: JSON si se puede, si no el texto como `detail`
fn error_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "detail": text }))
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_fields_are_percent_encoded() {
        let body = encode_form(&[("username", "ana@example.com"), ("password", "a&b c")]);
        assert_eq!(body, "username=ana%40example.com&password=a%26b%20c");
    }

    #[test]
    fn error_body_prefers_json() {
        assert_eq!(error_body(r#"{"detail":"Not found"}"#), json!({ "detail": "Not found" }));
        assert_eq!(error_body("Bad Gateway"), json!({ "detail": "Bad Gateway" }));
        assert_eq!(error_body("  "), Value::Null);
    }
}
