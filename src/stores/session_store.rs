// ============================================================================
// SESSION STORE - Token + identidad + permisos/roles de la sesión actual
// ============================================================================
// Única fuente de verdad de la autenticación. Arranca anónimo y sólo cambia
// con login() y logout(). Las lecturas se hacen sobre un snapshot (Session)
// para que el guard de rutas sea una función pura.
// ============================================================================

use std::collections::BTreeSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::models::Identity;
use crate::state::{ReactiveState, SubscriptionId};
use crate::utils::{
    load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_ACCESS_TOKEN,
    STORAGE_KEY_CURRENT_USER,
};

/// Snapshot inmutable de la sesión.
/// `is_authenticated()` se deriva del token: no puede desincronizarse.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    identity: Option<Identity>,
    permissions: BTreeSet<String>,
    roles: BTreeSet<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, identity: Identity) -> Self {
        Self {
            token: Some(token.into()),
            permissions: identity.permissions.iter().cloned().collect(),
            roles: identity.roles.iter().cloned().collect(),
            identity: Some(identity),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn permissions(&self) -> &BTreeSet<String> {
        &self.permissions
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Falso con lista vacía
    pub fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        permissions.iter().any(|p| self.has_permission(p.as_ref()))
    }

    /// Verdadero con lista vacía
    pub fn has_all_permissions<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        permissions.iter().all(|p| self.has_permission(p.as_ref()))
    }

    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles.iter().any(|r| self.roles.contains(r.as_ref()))
    }
}

/// Store reactivo de la sesión.
///
/// `SessionStore::new()` es puramente en memoria; `SessionStore::persistent()`
/// restaura y guarda token + identidad en localStorage.
pub struct SessionStore {
    state: ReactiveState<Session>,
    persist: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(Session::anonymous()),
            persist: false,
        }
    }

    /// Store del navegador: intenta restaurar la sesión guardada
    pub fn persistent() -> Self {
        let token = load_from_storage::<String>(STORAGE_KEY_ACCESS_TOKEN);
        let identity = load_from_storage::<Identity>(STORAGE_KEY_CURRENT_USER);

        let session = match (token, identity) {
            (Some(token), Some(identity)) => {
                log::info!("💾 [SESSION] Sesión restaurada para {}", identity.email);
                Session::authenticated(token, identity)
            }
            (Some(_), None) | (None, Some(_)) => {
                log::warn!("⚠️ [SESSION] Sesión guardada incompleta, se descarta");
                remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
                remove_from_storage(STORAGE_KEY_CURRENT_USER);
                Session::anonymous()
            }
            (None, None) => Session::anonymous(),
        };

        Self {
            state: ReactiveState::new(session),
            persist: true,
        }
    }

    pub fn login(&self, token: String, identity: Identity) {
        log::info!("✅ [SESSION] Login: {}", identity.email);
        if self.persist {
            if let Err(e) = save_to_storage(STORAGE_KEY_ACCESS_TOKEN, &token)
                .and_then(|_| save_to_storage(STORAGE_KEY_CURRENT_USER, &identity))
            {
                log::error!("❌ [SESSION] {}", e);
            }
        }
        self.state.set(Session::authenticated(token, identity));
    }

    pub fn logout(&self) {
        if !self.is_logged_in() {
            return;
        }
        log::info!("👋 [SESSION] Logout");
        if self.persist {
            remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
            remove_from_storage(STORAGE_KEY_CURRENT_USER);
        }
        self.state.set(Session::anonymous());
    }

    /// Refresca la identidad (p. ej. tras volver a leer `/users/me`) sin tocar el token.
    /// Ignorado si no hay sesión.
    pub fn update_identity(&self, identity: Identity) {
        let Some(token) = self.state.borrow().token().map(str::to_string) else {
            return;
        };
        if self.state.borrow().identity() == Some(&identity) {
            return;
        }
        if self.persist {
            if let Err(e) = save_to_storage(STORAGE_KEY_CURRENT_USER, &identity) {
                log::error!("❌ [SESSION] {}", e);
            }
        }
        self.state.set(Session::authenticated(token, identity));
    }

    pub fn snapshot(&self) -> Session {
        self.state.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    pub fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        self.state.borrow().has_any_permission(permissions)
    }

    pub fn has_all_permissions<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        self.state.borrow().has_all_permissions(permissions)
    }

    pub fn has_any_role<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        self.state.borrow().has_any_role(roles)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static SESSION_STORE: Rc<SessionStore> = Rc::new(SessionStore::persistent());
}

/// Store global del proceso (sólo navegador: lee localStorage al primer uso)
pub fn session_store() -> Rc<SessionStore> {
    SESSION_STORE.with(Rc::clone)
}
