// ============================================================================
// DIALOG CONTROLLER - Visibilidad de diálogos por fila
// ============================================================================
// Un booleano por (entidad, tipo de diálogo), guardado sólo en el dueño (la
// fila). El diálogo recibe `open` y `on_close` por props y no tiene un flag
// propio. Dos tipos de la misma fila pueden estar abiertos a la vez: son
// diálogos independientes.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::state::{Subscribers, SubscriptionId};

pub struct DialogController<K> {
    entity_id: String,
    open: RefCell<HashSet<K>>,
    observers: Subscribers,
}

impl<K> DialogController<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Todo cerrado al crear la fila
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            open: RefCell::new(HashSet::new()),
            observers: Subscribers::new(),
        }
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn open(&self, kind: K) {
        if self.open.borrow_mut().insert(kind) {
            log::debug!("🪟 [DIALOG] {} abre {:?}", self.entity_id, kind);
            self.observers.notify();
        }
    }

    pub fn close(&self, kind: K) {
        if self.open.borrow_mut().remove(&kind) {
            log::debug!("🪟 [DIALOG] {} cierra {:?}", self.entity_id, kind);
            self.observers.notify();
        }
    }

    pub fn is_open(&self, kind: K) -> bool {
        self.open.borrow().contains(&kind)
    }

    pub fn open_kinds(&self) -> Vec<K> {
        self.open.borrow().iter().copied().collect()
    }

    /// Teardown de la fila
    pub fn close_all(&self) {
        let was_open = !self.open.borrow().is_empty();
        self.open.borrow_mut().clear();
        if was_open {
            self.observers.notify();
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ApiResult};
    use crate::viewmodels::{MutationHooks, MutationPipeline};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum RowDialog {
        Edit,
        Delete,
    }

    #[test]
    fn rows_start_closed() {
        let dialogs = DialogController::<RowDialog>::new("item-1");
        assert!(!dialogs.is_open(RowDialog::Edit));
        assert!(!dialogs.is_open(RowDialog::Delete));
        assert_eq!(dialogs.entity_id(), "item-1");
        assert!(dialogs.open_kinds().is_empty());
    }

    #[test]
    fn kinds_are_independent() {
        let dialogs = DialogController::new("item-1");
        dialogs.open(RowDialog::Edit);
        dialogs.open(RowDialog::Delete);
        assert!(dialogs.is_open(RowDialog::Edit));
        assert!(dialogs.is_open(RowDialog::Delete));

        dialogs.close(RowDialog::Edit);
        assert!(!dialogs.is_open(RowDialog::Edit));
        assert!(dialogs.is_open(RowDialog::Delete));
        assert_eq!(dialogs.open_kinds(), vec![RowDialog::Delete]);
    }

    #[test]
    fn observers_only_hear_real_changes() {
        let dialogs = DialogController::new("item-1");
        let changes = Rc::new(Cell::new(0));
        {
            let changes = changes.clone();
            dialogs.subscribe(move || changes.set(changes.get() + 1));
        }

        dialogs.open(RowDialog::Edit);
        dialogs.open(RowDialog::Edit);
        dialogs.close(RowDialog::Delete);
        dialogs.close_all();
        dialogs.close_all();
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn cancel_never_runs_mutation_hooks() {
        let dialogs = Rc::new(DialogController::new("item-1"));
        let successes = Rc::new(Cell::new(0));
        let errors = Rc::new(Cell::new(0));
        let gate: Rc<RefCell<Option<oneshot::Sender<ApiResult<()>>>>> = Rc::new(RefCell::new(None));

        let edit = {
            let gate = gate.clone();
            MutationPipeline::new(move |_: ()| {
                let (tx, rx) = oneshot::channel();
                *gate.borrow_mut() = Some(tx);
                async move { rx.await.unwrap_or_else(|_| Err(ApiError::network("canal cerrado"))) }
            })
        }
        .with_hooks({
            let dialogs = dialogs.clone();
            let successes = successes.clone();
            let errors = errors.clone();
            MutationHooks::new()
                .on_success(move |_: &()| {
                    successes.set(successes.get() + 1);
                    dialogs.close(RowDialog::Edit);
                })
                .on_error(move |_| errors.set(errors.get() + 1))
        });
        let delete = MutationPipeline::new(|_: ()| async { ApiResult::Ok(()) });

        dialogs.open(RowDialog::Edit);
        let in_flight = edit.submit(()).into_future().unwrap();
        assert!(edit.is_pending());

        // Cancelar con la operación en vuelo
        dialogs.close(RowDialog::Edit);
        assert!(!dialogs.is_open(RowDialog::Edit));
        assert_eq!(successes.get(), 0);
        assert_eq!(errors.get(), 0);
        assert!(edit.is_pending());

        gate.borrow_mut().take().unwrap().send(Ok(())).unwrap();
        block_on(in_flight);

        assert_eq!(successes.get(), 1);
        assert_eq!(errors.get(), 0);
        assert!(!dialogs.is_open(RowDialog::Edit));
        assert!(!dialogs.is_open(RowDialog::Delete));
        assert!(delete.state().is_idle());
    }

    #[test]
    fn success_closes_only_its_own_dialog() {
        let dialogs = Rc::new(DialogController::new("item-1"));
        let delete = {
            let dialogs = dialogs.clone();
            MutationPipeline::new(|_: ()| async { ApiResult::Ok(()) }).with_hooks(
                MutationHooks::new().on_success(move |_: &()| dialogs.close(RowDialog::Delete)),
            )
        };
        let edit = MutationPipeline::new(|_: ()| async { ApiResult::Ok(()) });

        dialogs.open(RowDialog::Edit);
        dialogs.open(RowDialog::Delete);
        block_on(delete.submit(()).into_future().unwrap());

        assert!(!dialogs.is_open(RowDialog::Delete));
        assert!(dialogs.is_open(RowDialog::Edit));
        assert!(edit.state().is_idle());
    }
}
