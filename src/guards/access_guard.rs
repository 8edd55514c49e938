// ============================================================================
// ACCESS GUARD - Veredicto de acceso por ruta (función pura)
// ============================================================================
// Orden fijo: sesión -> permisos -> roles. Un fallo de permisos se resuelve
// ahí mismo; la comprobación de roles no llega a evaluarse.
// Permisos admiten ALL/ANY según `require_all`; roles son siempre ANY.
// ============================================================================

use std::fmt;

use crate::stores::Session;

/// Requisitos declarados por una ruta protegida. Inmutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRequirement {
    pub permissions: Vec<String>,
    pub roles: Vec<String>,
    pub require_all: bool,
    pub fallback_path: String,
    pub show_error: bool,
}

impl RouteRequirement {
    /// Sólo exige sesión iniciada
    pub fn authenticated() -> Self {
        Self {
            permissions: Vec::new(),
            roles: Vec::new(),
            require_all: false,
            fallback_path: "/".to_string(),
            show_error: false,
        }
    }

    pub fn with_permissions<S: AsRef<str>>(mut self, permissions: &[S]) -> Self {
        self.permissions = permissions.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_roles<S: AsRef<str>>(mut self, roles: &[S]) -> Self {
        self.roles = roles.iter().map(|r| r.as_ref().to_string()).collect();
        self
    }

    pub fn require_all(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    pub fn fallback(mut self, path: &str) -> Self {
        self.fallback_path = path.to_string();
        self
    }

    pub fn show_error(mut self, show_error: bool) -> Self {
        self.show_error = show_error;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeniedBy {
    Permissions,
    Roles,
}

/// Motivo de un `Forbidden`: qué comprobación falló y qué se exigía
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForbiddenReason {
    pub denied_by: DeniedBy,
    pub required: Vec<String>,
}

impl ForbiddenReason {
    pub fn message(&self) -> &'static str {
        match self.denied_by {
            DeniedBy::Permissions => "insufficient permissions",
            DeniedBy::Roles => "insufficient roles",
        }
    }
}

impl fmt::Display for ForbiddenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message(), self.required.join(", "))
    }
}

/// Decisión de una evaluación. Se deriva, nunca se guarda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    RedirectToLogin,
    RedirectTo(String),
    /// Estado terminal de render: no navega
    Forbidden(ForbiddenReason),
}

impl Verdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

pub fn evaluate(session: &Session, requirement: &RouteRequirement) -> Verdict {
    if !session.is_authenticated() {
        return Verdict::RedirectToLogin;
    }

    if !requirement.permissions.is_empty() {
        let satisfied = if requirement.require_all {
            session.has_all_permissions(&requirement.permissions)
        } else {
            session.has_any_permission(&requirement.permissions)
        };
        if !satisfied {
            return deny(requirement, DeniedBy::Permissions, &requirement.permissions);
        }
    } else if !requirement.roles.is_empty() && !session.has_any_role(&requirement.roles) {
        return deny(requirement, DeniedBy::Roles, &requirement.roles);
    }

    Verdict::Allow
}

fn deny(requirement: &RouteRequirement, denied_by: DeniedBy, required: &[String]) -> Verdict {
    log::debug!("🚫 [GUARD] Acceso denegado por {:?}: {:?}", denied_by, required);
    if requirement.show_error {
        Verdict::Forbidden(ForbiddenReason {
            denied_by,
            required: required.to_vec(),
        })
    } else {
        Verdict::RedirectTo(requirement.fallback_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    fn session(permissions: &[&str], roles: &[&str]) -> Session {
        Session::authenticated(
            "tok",
            Identity {
                id: "u1".to_string(),
                email: "ana@example.com".to_string(),
                full_name: None,
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
                roles: roles.iter().map(|r| r.to_string()).collect(),
            },
        )
    }

    fn forbidden_by(verdict: &Verdict) -> Option<DeniedBy> {
        match verdict {
            Verdict::Forbidden(reason) => Some(reason.denied_by),
            _ => None,
        }
    }

    #[test]
    fn anonymous_always_redirects_to_login() {
        let anonymous = Session::anonymous();
        let requirements = [
            RouteRequirement::authenticated(),
            RouteRequirement::authenticated().with_permissions(&["a"]).show_error(true),
            RouteRequirement::authenticated().with_roles(&["admin"]).fallback("/x"),
        ];
        for requirement in &requirements {
            assert_eq!(evaluate(&anonymous, requirement), Verdict::RedirectToLogin);
        }
    }

    #[test]
    fn no_requirements_allows_any_session() {
        let requirement = RouteRequirement::authenticated().require_all(true).show_error(true);
        assert_eq!(evaluate(&session(&[], &[]), &requirement), Verdict::Allow);
    }

    #[test]
    fn require_all_needs_every_permission() {
        let requirement = RouteRequirement::authenticated()
            .with_permissions(&["a", "b"])
            .require_all(true)
            .show_error(true);
        assert!(!evaluate(&session(&["a"], &[]), &requirement).is_allow());
        assert!(evaluate(&session(&["a", "b"], &[]), &requirement).is_allow());
    }

    #[test]
    fn any_of_permissions_is_enough_without_require_all() {
        let requirement = RouteRequirement::authenticated().with_permissions(&["a", "b"]);
        assert_eq!(evaluate(&session(&["a"], &[]), &requirement), Verdict::Allow);
    }

    #[test]
    fn roles_ignore_require_all() {
        let requirement = RouteRequirement::authenticated()
            .with_roles(&["x", "y"])
            .require_all(true)
            .show_error(true);
        assert_eq!(evaluate(&session(&[], &["x"]), &requirement), Verdict::Allow);
        assert_eq!(
            forbidden_by(&evaluate(&session(&[], &["z"]), &requirement)),
            Some(DeniedBy::Roles)
        );
    }

    #[test]
    fn hidden_errors_redirect_to_fallback() {
        let requirement = RouteRequirement::authenticated()
            .with_permissions(&["write"])
            .fallback("/items")
            .show_error(false);
        assert_eq!(
            evaluate(&session(&["read"], &[]), &requirement),
            Verdict::RedirectTo("/items".to_string())
        );

        let requirement = RouteRequirement::authenticated().with_roles(&["admin"]).fallback("/");
        assert_eq!(
            evaluate(&session(&[], &["viewer"]), &requirement),
            Verdict::RedirectTo("/".to_string())
        );
    }

    #[test]
    fn permission_failure_wins_over_roles() {
        let requirement = RouteRequirement::authenticated()
            .with_permissions(&["write"])
            .with_roles(&["admin"])
            .show_error(true);
        let verdict = evaluate(&session(&[], &["admin"]), &requirement);
        assert_eq!(forbidden_by(&verdict), Some(DeniedBy::Permissions));
    }

    #[test]
    fn roles_are_not_checked_once_permissions_pass() {
        let requirement = RouteRequirement::authenticated()
            .with_permissions(&["read"])
            .with_roles(&["admin"])
            .show_error(true);
        assert_eq!(evaluate(&session(&["read"], &[]), &requirement), Verdict::Allow);
    }

    #[test]
    fn read_session_passes_any_of_read_write() {
        let requirement = RouteRequirement::authenticated()
            .with_permissions(&["read", "write"])
            .require_all(false)
            .show_error(true);
        assert_eq!(evaluate(&session(&["read"], &[]), &requirement), Verdict::Allow);
    }

    #[test]
    fn read_session_is_forbidden_from_write() {
        let requirement = RouteRequirement::authenticated()
            .with_permissions(&["write"])
            .require_all(true)
            .show_error(true);
        let verdict = evaluate(&session(&["read"], &[]), &requirement);
        match verdict {
            Verdict::Forbidden(reason) => {
                assert_eq!(reason.message(), "insufficient permissions");
                assert_eq!(reason.required, vec!["write".to_string()]);
                assert_eq!(reason.to_string(), "insufficient permissions: write");
            }
            other => panic!("se esperaba Forbidden, llegó {:?}", other),
        }
    }
}
