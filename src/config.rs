// ============================================================================
// CONFIG - Configuración en tiempo de compilación (ver build.rs y .env.example)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Ruta fija de login: todo acceso sin sesión termina aquí
pub const LOGIN_PATH: &str = "/login";

/// Prefijo de la API REST
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
    pub items_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:8000".to_string(),
            api_url_production: "https://api.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            toast_duration_ms: 4000,
            items_page_size: 100,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_development),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            items_page_size: option_env!("ITEMS_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.items_page_size),
        }
    }

    /// URL base de la API según el entorno actual (sin barra final)
    pub fn api_url(&self) -> String {
        let base = if self.is_production() {
            &self.api_url_production
        } else {
            &self.api_url_development
        };
        format!("{}{}", base.trim_end_matches('/'), API_PREFIX)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_depends_on_environment() {
        let mut config = AppConfig {
            api_url_development: "http://localhost:8000/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_url(), "http://localhost:8000/api/v1");

        config.environment = "production".to_string();
        assert_eq!(config.api_url(), "https://api.example.com/api/v1");
        assert!(config.is_production());
    }
}
