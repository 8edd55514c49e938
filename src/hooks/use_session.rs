// ============================================================================
// USE SESSION HOOK - Snapshot reactivo del SessionStore global
// ============================================================================

use yew::prelude::*;

use crate::stores::{session_store, Session};

/// Re-renderiza el componente en cada login/logout
#[hook]
pub fn use_session() -> Session {
    let store = session_store();
    let force_update = use_force_update();

    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let id = store.subscribe(move || force_update.force_update());
            move || store.unsubscribe(id)
        });
    }

    store.snapshot()
}
