// ============================================================================
// ROUTES - Tabla de rutas y requisitos de acceso declarados por ruta
// ============================================================================
// Enrutado por hash (#/items). Las rutas con requisito pasan por el
// AccessGuard; las públicas "sólo invitado" mandan a / si ya hay sesión.
// ============================================================================

use crate::config::LOGIN_PATH;
use crate::guards::RouteRequirement;

pub const PERM_ITEMS_READ: &str = "items:read";
pub const PERM_ITEMS_CREATE: &str = "items:create";
pub const PERM_ITEMS_UPDATE: &str = "items:update";
pub const PERM_ITEMS_DELETE: &str = "items:delete";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    RecoverPassword,
    ResetPassword { token: Option<String> },
    Dashboard,
    Items,
    Admin,
    Settings,
    NotFound(String),
}

impl AppRoute {
    /// Acepta `/ruta?query` (lo que hay tras el `#`)
    pub fn from_path(path: &str) -> Self {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let path = path.trim_end_matches('/');
        match path {
            "" => AppRoute::Dashboard,
            p if p == LOGIN_PATH => AppRoute::Login,
            "/recover-password" => AppRoute::RecoverPassword,
            "/reset-password" => AppRoute::ResetPassword {
                token: query_param(query, "token"),
            },
            "/items" => AppRoute::Items,
            "/admin" => AppRoute::Admin,
            "/settings" => AppRoute::Settings,
            other => AppRoute::NotFound(other.to_string()),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Login => LOGIN_PATH.to_string(),
            AppRoute::RecoverPassword => "/recover-password".to_string(),
            AppRoute::ResetPassword { token: Some(token) } => {
                format!("/reset-password?token={}", urlencoding::encode(token))
            }
            AppRoute::ResetPassword { token: None } => "/reset-password".to_string(),
            AppRoute::Dashboard => "/".to_string(),
            AppRoute::Items => "/items".to_string(),
            AppRoute::Admin => "/admin".to_string(),
            AppRoute::Settings => "/settings".to_string(),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    /// `None` = ruta pública
    pub fn requirement(&self) -> Option<RouteRequirement> {
        match self {
            AppRoute::Dashboard | AppRoute::Settings => Some(RouteRequirement::authenticated()),
            AppRoute::Items => Some(
                RouteRequirement::authenticated()
                    .with_permissions(&[PERM_ITEMS_READ])
                    .show_error(true),
            ),
            AppRoute::Admin => Some(
                RouteRequirement::authenticated()
                    .with_roles(&[ROLE_ADMIN])
                    .fallback("/")
                    .show_error(false),
            ),
            AppRoute::Login
            | AppRoute::RecoverPassword
            | AppRoute::ResetPassword { .. }
            | AppRoute::NotFound(_) => None,
        }
    }

    /// Pantallas que no tienen sentido con sesión iniciada
    pub fn is_public_only(&self) -> bool {
        matches!(
            self,
            AppRoute::Login | AppRoute::RecoverPassword | AppRoute::ResetPassword { .. }
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Iniciar sesión",
            AppRoute::RecoverPassword => "Recuperar contraseña",
            AppRoute::ResetPassword { .. } => "Nueva contraseña",
            AppRoute::Dashboard => "Inicio",
            AppRoute::Items => "Items",
            AppRoute::Admin => "Usuarios",
            AppRoute::Settings => "Ajustes",
            AppRoute::NotFound(_) => "No encontrado",
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/items/"), AppRoute::Items);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::Admin);
        assert_eq!(
            AppRoute::from_path("/nope"),
            AppRoute::NotFound("/nope".to_string())
        );
    }

    #[test]
    fn reset_password_carries_its_token() {
        let route = AppRoute::from_path("/reset-password?foo=1&token=abc%2Bdef");
        assert_eq!(
            route,
            AppRoute::ResetPassword {
                token: Some("abc+def".to_string())
            }
        );
        assert_eq!(route.to_path(), "/reset-password?token=abc%2Bdef");
        assert_eq!(
            AppRoute::from_path("/reset-password?token="),
            AppRoute::ResetPassword { token: None }
        );
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::RecoverPassword,
            AppRoute::Dashboard,
            AppRoute::Items,
            AppRoute::Admin,
            AppRoute::Settings,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn declared_requirements() {
        assert!(AppRoute::Login.requirement().is_none());
        assert!(AppRoute::Login.is_public_only());

        let items = AppRoute::Items.requirement().unwrap();
        assert_eq!(items.permissions, vec![PERM_ITEMS_READ.to_string()]);
        assert!(items.show_error);

        let admin = AppRoute::Admin.requirement().unwrap();
        assert_eq!(admin.roles, vec![ROLE_ADMIN.to_string()]);
        assert_eq!(admin.fallback_path, "/");
        assert!(!admin.show_error);

        let settings = AppRoute::Settings.requirement().unwrap();
        assert!(settings.permissions.is_empty() && settings.roles.is_empty());
    }
}
