// ============================================================================
// USE MUTATION HOOK - MutationPipeline ligado al ciclo de vida del componente
// ============================================================================
// - Un pipeline por componente montado (use_memo).
// - Los hooks se refrescan en cada render, con la política común de errores
//   (handle_error) por delante del on_error propio.
// - Al desmontar: dispose(), los resultados tardíos se descartan.
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::error::ApiResult;
use crate::services::handle_error;
use crate::viewmodels::{MutationHooks, MutationPipeline, MutationState};

pub struct UseMutationHandle<I, O> {
    pub state: MutationState<O>,
    pub submit: Callback<I>,
}

impl<I, O> UseMutationHandle<I, O> {
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }
}

impl<I, O: Clone> Clone for UseMutationHandle<I, O> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            submit: self.submit.clone(),
        }
    }
}

#[hook]
pub fn use_mutation<I, O, F, Fut>(operation: F, hooks: MutationHooks<O>) -> UseMutationHandle<I, O>
where
    I: 'static,
    O: Clone + 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = ApiResult<O>> + 'static,
{
    let force_update = use_force_update();
    let pipeline = use_memo((), move |_| MutationPipeline::new(operation));
    pipeline.set_hooks(hooks.with_error_policy(handle_error));

    {
        let pipeline = pipeline.clone();
        use_effect_with((), move |_| {
            let id = pipeline.subscribe(move || force_update.force_update());
            move || {
                pipeline.unsubscribe(id);
                pipeline.dispose();
            }
        });
    }

    let submit = {
        let pipeline = pipeline.clone();
        Callback::from(move |input: I| {
            if let Some(future) = pipeline.submit(input).into_future() {
                wasm_bindgen_futures::spawn_local(future);
            }
        })
    };

    UseMutationHandle {
        state: pipeline.state(),
        submit,
    }
}
