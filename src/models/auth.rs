use serde::{Deserialize, Serialize};

/// Credenciales del formulario de login (se envían como form-urlencoded)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Usuario autenticado tal como lo devuelve `GET /users/me`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Identity {
    /// Nombre para mostrar: nombre completo o, si falta, el email
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewPassword {
    pub token: String,
    pub new_password: String,
}

/// Respuesta genérica `{ message }`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Message {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_tolerates_missing_access_lists() {
        let identity: Identity =
            serde_json::from_str(r#"{"id":"u1","email":"ana@example.com"}"#).unwrap();
        assert!(identity.permissions.is_empty());
        assert!(identity.roles.is_empty());
        assert_eq!(identity.display_name(), "ana@example.com");
    }
}
