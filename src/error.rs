// ============================================================================
// API ERROR - Forma única de fallo de cualquier operación remota
// ============================================================================

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error estructurado `{status, body}` devuelto por las operaciones remotas.
///
/// `status == 0` indica que no hubo respuesta HTTP utilizable (fallo de red,
/// serialización o decodificación); el mensaje va en `body.detail`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("HTTP {status}: {}", self.detail().unwrap_or("sin detalle"))]
pub struct ApiError {
    pub status: u16,
    pub body: Value,
}

impl ApiError {
    pub fn from_status(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn network(message: impl std::fmt::Display) -> Self {
        Self::local(format!("Network error: {}", message))
    }

    pub fn decode(message: impl std::fmt::Display) -> Self {
        Self::local(format!("Parse error: {}", message))
    }

    fn local(detail: String) -> Self {
        Self {
            status: 0,
            body: serde_json::json!({ "detail": detail }),
        }
    }

    /// `detail` cuando es texto plano
    pub fn detail(&self) -> Option<&str> {
        self.body.get("detail").and_then(Value::as_str)
    }

    /// 401/403: la sesión ya no es válida
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status, 401 | 403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_uses_detail_when_present() {
        let err = ApiError::from_status(404, json!({ "detail": "Item not found" }));
        assert_eq!(err.to_string(), "HTTP 404: Item not found");

        let err = ApiError::from_status(500, Value::Null);
        assert_eq!(err.to_string(), "HTTP 500: sin detalle");
    }

    #[test]
    fn local_failures_have_no_status() {
        let err = ApiError::network("connection refused");
        assert_eq!(err.status, 0);
        assert!(!err.is_auth_failure());
        assert_eq!(err.detail(), Some("Network error: connection refused"));
    }
}
