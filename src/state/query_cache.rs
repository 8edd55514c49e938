// ============================================================================
// QUERY CACHE - Invalidación por clave lógica de recurso
// ============================================================================
// Cada clave ("items", "users", "current-user") tiene una versión. Invalidar
// incrementa la versión y avisa a los lectores, que vuelven a pedir los datos.
// ============================================================================

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::{ReactiveState, SubscriptionId};

pub const QUERY_CURRENT_USER: &str = "current-user";
pub const QUERY_ITEMS: &str = "items";
pub const QUERY_USERS: &str = "users";

#[derive(Default)]
pub struct QueryCache {
    versions: ReactiveState<HashMap<String, u64>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self, key: &str) -> u64 {
        self.versions.borrow().get(key).copied().unwrap_or(0)
    }

    pub fn invalidate(&self, key: &str) {
        log::debug!("♻️ [CACHE] Invalidando '{}'", key);
        self.versions.update(|versions| {
            *versions.entry(key.to_string()).or_insert(0) += 1;
        });
    }

    /// El callback recibe la nueva versión sólo cuando cambia `key`.
    /// `seen` es la versión con la que el lector pidió los datos: si ya no es
    /// la actual, el callback se llama en el momento.
    pub fn subscribe<F>(self: &Rc<Self>, key: &str, seen: u64, callback: F) -> SubscriptionId
    where
        F: Fn(u64) + 'static,
    {
        let current = self.version(key);
        if current != seen {
            callback(current);
        }

        let cache = Rc::downgrade(self);
        let key = key.to_string();
        let last_seen = Cell::new(current);
        self.versions.subscribe(move || {
            let Some(cache) = cache.upgrade() else {
                return;
            };
            let current = cache.version(&key);
            if current != last_seen.get() {
                last_seen.set(current);
                callback(current);
            }
        })
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.versions.unsubscribe(id);
    }
}

thread_local! {
    static QUERY_CACHE: Rc<QueryCache> = Rc::new(QueryCache::new());
}

pub fn query_cache() -> Rc<QueryCache> {
    QUERY_CACHE.with(Rc::clone)
}

/// Atajo para los hooks `on_settled` de las mutaciones
pub fn invalidate_query(key: &str) {
    query_cache().invalidate(key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn invalidate_bumps_only_its_key() {
        let cache = QueryCache::new();
        cache.invalidate(QUERY_ITEMS);
        cache.invalidate(QUERY_ITEMS);
        assert_eq!(cache.version(QUERY_ITEMS), 2);
        assert_eq!(cache.version(QUERY_USERS), 0);
    }

    #[test]
    fn subscribers_only_hear_about_their_key() {
        let cache = Rc::new(QueryCache::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = {
            let seen = seen.clone();
            cache.subscribe(QUERY_ITEMS, 0, move |version| seen.borrow_mut().push(version))
        };

        cache.invalidate(QUERY_USERS);
        cache.invalidate(QUERY_ITEMS);
        cache.invalidate(QUERY_CURRENT_USER);
        cache.invalidate(QUERY_ITEMS);
        assert_eq!(*seen.borrow(), vec![1, 2]);

        cache.unsubscribe(id);
        cache.invalidate(QUERY_ITEMS);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn invalidation_before_subscribing_is_not_lost() {
        let cache = Rc::new(QueryCache::new());
        let rendered = cache.version(QUERY_ITEMS);
        cache.invalidate(QUERY_ITEMS);

        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            cache.subscribe(QUERY_ITEMS, rendered, move |version| seen.borrow_mut().push(version));
        }
        assert_eq!(*seen.borrow(), vec![1]);

        cache.invalidate(QUERY_ITEMS);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn up_to_date_subscriber_is_not_called_on_subscribe() {
        let cache = Rc::new(QueryCache::new());
        cache.invalidate(QUERY_USERS);
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            cache.subscribe(QUERY_USERS, 1, move |_| calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 0);
    }
}
