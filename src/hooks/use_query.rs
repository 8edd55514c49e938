// ============================================================================
// USE QUERY HOOK - Lectura cacheada que se repite al invalidar su clave
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::error::{ApiError, ApiResult};
use crate::services::handle_error;
use crate::state::query_cache;

#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

/// Mientras se repite la petición se siguen mostrando los datos anteriores
#[hook]
pub fn use_query<T, F, Fut>(key: &'static str, fetch: F) -> QueryState<T>
where
    T: Clone + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let state = use_state(|| QueryState::<T>::Loading);
    let version = use_state(|| query_cache().version(key));

    {
        let version = version.clone();
        let rendered = *version;
        use_effect_with(key, move |_| {
            let cache = query_cache();
            let id = cache.subscribe(key, rendered, move |current| version.set(current));
            move || cache.unsubscribe(id)
        });
    }

    {
        let state = state.clone();
        use_effect_with((key, *version), move |_| {
            let alive = Rc::new(Cell::new(true));
            {
                let alive = alive.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch().await;
                    if !alive.get() {
                        return;
                    }
                    match result {
                        Ok(data) => state.set(QueryState::Ready(data)),
                        Err(e) => {
                            handle_error(&e);
                            state.set(QueryState::Failed(e));
                        }
                    }
                });
            }
            move || alive.set(false)
        });
    }

    (*state).clone()
}
