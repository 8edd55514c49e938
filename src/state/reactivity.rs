// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Los stores globales (sesión, cache, toasts) se construyen sobre esto.
// Los hooks de Yew se suscriben al montar y se desuscriben al desmontar.
// ============================================================================

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

type Listener = Rc<dyn Fn()>;

/// Identificador devuelto por `subscribe`, necesario para desuscribirse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Lista de subscribers con alta/baja por id
#[derive(Default)]
pub struct Subscribers {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    /// Notificar a todos los subscribers.
    /// Se copia la lista antes de llamar: un callback puede (des)suscribirse.
    pub fn notify(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: Subscribers,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: Subscribers::new(),
        }
    }

    /// Lectura prestada; no mantenerla viva mientras se notifica
    pub fn borrow(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.subscribers.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F, R>(&self, updater: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = updater(&mut *self.value.borrow_mut());
        self.subscribers.notify();
        result
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_until_unsubscribed() {
        let state = ReactiveState::new(0u32);
        let calls = Rc::new(Cell::new(0));

        let id = {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1))
        };
        state.set(1);
        state.update(|value| *value += 1);
        assert_eq!(calls.get(), 2);
        assert_eq!(state.get(), 2);

        state.unsubscribe(id);
        state.set(3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn listener_may_unsubscribe_itself_while_notified() {
        let subscribers = Rc::new(Subscribers::new());
        let own_id = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let id = {
            let handle = subscribers.clone();
            let own_id = own_id.clone();
            let calls = calls.clone();
            subscribers.subscribe(move || {
                calls.set(calls.get() + 1);
                if let Some(id) = own_id.get() {
                    handle.unsubscribe(id);
                }
            })
        };
        own_id.set(Some(id));

        subscribers.notify();
        subscribers.notify();
        assert_eq!(calls.get(), 1);
    }
}
