// ============================================================================
// ERROR MAPPING - Política única ApiError -> feedback al usuario
// ============================================================================
// map_error() decide (puro); handle_error() aplica: toast y, si la sesión ya
// no es válida, logout (el guard redirige solo a /login).
// ============================================================================

use serde_json::Value;

use crate::error::ApiError;
use crate::state::notify_error;
use crate::stores::session_store;

pub const GENERIC_ERROR: &str = "Algo salió mal.";
const SESSION_EXPIRED: &str = "Tu sesión ha expirado. Vuelve a iniciar sesión.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorReaction {
    /// Mostrar el mensaje
    Notify(String),
    /// Cerrar sesión y mostrar el mensaje
    SignOut(String),
}

impl ErrorReaction {
    pub fn message(&self) -> &str {
        match self {
            ErrorReaction::Notify(message) | ErrorReaction::SignOut(message) => message,
        }
    }
}

pub fn map_error(error: &ApiError) -> ErrorReaction {
    if error.is_auth_failure() {
        let message = error
            .detail()
            .filter(|detail| !detail.is_empty())
            .unwrap_or(SESSION_EXPIRED);
        return ErrorReaction::SignOut(message.to_string());
    }

    let message = match error.body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Array(entries)) => entries
            .first()
            .and_then(validation_message)
            .unwrap_or_else(|| GENERIC_ERROR.to_string()),
        _ => GENERIC_ERROR.to_string(),
    };
    ErrorReaction::Notify(message)
}

/// Primera entrada de un error de validación `{ loc: [..., campo], msg }`
fn validation_message(entry: &Value) -> Option<String> {
    let msg = entry.get("msg")?.as_str()?;
    let field = entry
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(Value::as_str)
        .filter(|field| *field != "body");
    Some(match field {
        Some(field) => format!("{}: {}", field, msg),
        None => msg.to_string(),
    })
}

pub fn handle_error(error: &ApiError) {
    let reaction = map_error(error);
    if let ErrorReaction::SignOut(_) = reaction {
        log::warn!("🔒 [ERROR] HTTP {}: cerrando sesión", error.status);
        session_store().logout();
    }
    notify_error("Error", reaction.message());
}
