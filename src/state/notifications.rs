// ============================================================================
// NOTIFICATIONS - Cola de toasts (el renderizado vive en components/toasts.rs)
// ============================================================================

use std::rc::Rc;

use uuid::Uuid;

use crate::state::{ReactiveState, SubscriptionId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn to_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Default)]
pub struct Notifier {
    toasts: ReactiveState<Vec<Toast>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: ToastKind, title: &str, message: &str) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));
        id
    }

    pub fn success(&self, title: &str, message: &str) -> Uuid {
        self.push(ToastKind::Success, title, message)
    }

    pub fn error(&self, title: &str, message: &str) -> Uuid {
        self.push(ToastKind::Error, title, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        if self.toasts.borrow().iter().any(|toast| toast.id == id) {
            self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.toasts.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.toasts.unsubscribe(id);
    }
}

thread_local! {
    static NOTIFIER: Rc<Notifier> = Rc::new(Notifier::new());
}

pub fn notifier() -> Rc<Notifier> {
    NOTIFIER.with(Rc::clone)
}

pub fn notify_success(title: &str, message: &str) {
    notifier().success(title, message);
}

pub fn notify_error(title: &str, message: &str) {
    notifier().error(title, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let notifier = Notifier::new();
        let first = notifier.success("¡Listo!", "Item creado");
        let second = notifier.error("Error", "Algo salió mal");
        assert_eq!(notifier.toasts().len(), 2);

        notifier.dismiss(first);
        let remaining = notifier.toasts();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        assert_eq!(remaining[0].kind, ToastKind::Error);

        // id desconocido: sin cambios
        notifier.dismiss(first);
        assert_eq!(notifier.toasts().len(), 1);
    }
}
