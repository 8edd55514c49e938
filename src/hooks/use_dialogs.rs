// ============================================================================
// USE DIALOGS HOOK - DialogController de una fila (o página)
// ============================================================================

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use yew::prelude::*;

use crate::viewmodels::DialogController;

pub struct UseDialogsHandle<K> {
    controller: Rc<DialogController<K>>,
}

impl<K> Clone for UseDialogsHandle<K> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
        }
    }
}

impl<K> UseDialogsHandle<K>
where
    K: Copy + Eq + Hash + Debug + 'static,
{
    pub fn is_open(&self, kind: K) -> bool {
        self.controller.is_open(kind)
    }

    /// Disparador del menú de acciones
    pub fn opener(&self, kind: K) -> Callback<MouseEvent> {
        let controller = self.controller.clone();
        Callback::from(move |_: MouseEvent| controller.open(kind))
    }

    /// `on_close` del diálogo (cancelar)
    pub fn closer(&self, kind: K) -> Callback<()> {
        let controller = self.controller.clone();
        Callback::from(move |_| controller.close(kind))
    }

    pub fn controller(&self) -> Rc<DialogController<K>> {
        self.controller.clone()
    }
}

#[hook]
pub fn use_dialogs<K>(entity_id: String) -> UseDialogsHandle<K>
where
    K: Copy + Eq + Hash + Debug + 'static,
{
    let force_update = use_force_update();
    let controller = use_memo((), move |_| DialogController::new(entity_id));

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            let id = controller.subscribe(move || force_update.force_update());
            move || {
                controller.unsubscribe(id);
                controller.close_all();
            }
        });
    }

    UseDialogsHandle { controller }
}
