// ============================================================================
// MUTATION PIPELINE - submit -> operación remota -> reacción al resultado
// ============================================================================
// Mismo flujo para login, recuperación/reset de contraseña, borrar cuenta y
// crear/editar/borrar items:
//
//   Idle | Succeeded | Failed --submit--> Pending --settle--> Succeeded | Failed
//
// - Un solo `operation` en vuelo por pipeline: submit en Pending se descarta.
// - El paso a Pending es síncrono dentro de submit().
// - on_success / on_error exactamente una vez; on_settled siempre después.
// - Tras dispose() (desmontaje) los resultados tardíos se descartan.
// - Sin reintentos automáticos: reintentar es un submit nuevo del usuario.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::error::{ApiError, ApiResult};
use crate::state::{Subscribers, SubscriptionId};

#[derive(Clone, Debug, PartialEq)]
pub enum MutationState<O> {
    Idle,
    Pending,
    Succeeded(O),
    Failed(ApiError),
}

impl<O> MutationState<O> {
    pub fn is_idle(&self) -> bool {
        matches!(self, MutationState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }

    pub fn output(&self) -> Option<&O> {
        match self {
            MutationState::Succeeded(output) => Some(output),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            MutationState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

type Hook<T> = Rc<dyn Fn(&T)>;

/// Efectos secundarios de una mutación
pub struct MutationHooks<O> {
    on_success: Option<Hook<O>>,
    on_error: Option<Hook<ApiError>>,
    on_settled: Option<Rc<dyn Fn()>>,
}

impl<O> MutationHooks<O> {
    pub fn new() -> Self {
        Self {
            on_success: None,
            on_error: None,
            on_settled: None,
        }
    }

    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn(&O) + 'static,
    {
        self.on_success = Some(Rc::new(f));
        self
    }

    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&ApiError) + 'static,
    {
        self.on_error = Some(Rc::new(f));
        self
    }

    pub fn on_settled<F>(mut self, f: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_settled = Some(Rc::new(f));
        self
    }

    /// Antepone una política común (mapeo de errores) al on_error propio
    pub fn with_error_policy<F>(mut self, policy: F) -> Self
    where
        F: Fn(&ApiError) + 'static,
    {
        let own = self.on_error.take();
        self.on_error = Some(Rc::new(move |error: &ApiError| {
            policy(error);
            if let Some(own) = &own {
                own(error);
            }
        }));
        self
    }
}

impl<O> Default for MutationHooks<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for MutationHooks<O> {
    fn clone(&self) -> Self {
        Self {
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
            on_settled: self.on_settled.clone(),
        }
    }
}

pub type Operation<I, O> = Rc<dyn Fn(I) -> LocalBoxFuture<'static, ApiResult<O>>>;

/// Resultado de `submit`
pub enum Submission {
    /// Future que espera la operación y aplica el resultado. Hay que ejecutarlo
    /// (en el navegador con `spawn_local`).
    Started(LocalBoxFuture<'static, ()>),
    /// Ya había una operación en vuelo (o el pipeline fue desechado)
    Ignored,
}

impl Submission {
    pub fn is_started(&self) -> bool {
        matches!(self, Submission::Started(_))
    }

    pub fn into_future(self) -> Option<LocalBoxFuture<'static, ()>> {
        match self {
            Submission::Started(future) => Some(future),
            Submission::Ignored => None,
        }
    }
}

struct Shared<O> {
    state: RefCell<MutationState<O>>,
    hooks: RefCell<MutationHooks<O>>,
    observers: Subscribers,
    disposed: Cell<bool>,
}

impl<O: Clone> Shared<O> {
    fn set_state(&self, next: MutationState<O>) {
        *self.state.borrow_mut() = next;
        self.observers.notify();
    }

    fn settle(&self, result: ApiResult<O>) {
        if self.disposed.get() {
            log::debug!("🗑️ [MUTATION] Resultado descartado: el formulario ya no existe");
            return;
        }

        // Copia de los hooks: pueden volver a tocar el pipeline
        let hooks = self.hooks.borrow().clone();
        match result {
            Ok(output) => {
                log::debug!("✅ [MUTATION] Operación completada");
                self.set_state(MutationState::Succeeded(output.clone()));
                if let Some(on_success) = &hooks.on_success {
                    on_success(&output);
                }
            }
            Err(error) => {
                log::warn!("❌ [MUTATION] {}", error);
                self.set_state(MutationState::Failed(error.clone()));
                if let Some(on_error) = &hooks.on_error {
                    on_error(&error);
                }
            }
        }
        if let Some(on_settled) = &hooks.on_settled {
            on_settled();
        }
    }
}

/// Pipeline de una mutación; una instancia por formulario montado
pub struct MutationPipeline<I, O> {
    operation: Operation<I, O>,
    shared: Rc<Shared<O>>,
}

impl<I, O> Clone for MutationPipeline<I, O> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
            shared: self.shared.clone(),
        }
    }
}

impl<I: 'static, O: Clone + 'static> MutationPipeline<I, O> {
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn(I) -> Fut + 'static,
        Fut: Future<Output = ApiResult<O>> + 'static,
    {
        let operation: Operation<I, O> = Rc::new(move |input| operation(input).boxed_local());
        Self {
            operation,
            shared: Rc::new(Shared {
                state: RefCell::new(MutationState::Idle),
                hooks: RefCell::new(MutationHooks::new()),
                observers: Subscribers::new(),
                disposed: Cell::new(false),
            }),
        }
    }

    pub fn with_hooks(self, hooks: MutationHooks<O>) -> Self {
        self.set_hooks(hooks);
        self
    }

    /// Sustituye los hooks (el hook de Yew los refresca en cada render)
    pub fn set_hooks(&self, hooks: MutationHooks<O>) {
        *self.shared.hooks.borrow_mut() = hooks;
    }

    pub fn state(&self) -> MutationState<O> {
        self.shared.state.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.shared.state.borrow().is_pending()
    }

    pub fn submit(&self, input: I) -> Submission {
        if self.shared.disposed.get() {
            log::debug!("⏭️ [MUTATION] Submit sobre formulario desmontado, ignorado");
            return Submission::Ignored;
        }
        if self.is_pending() {
            log::debug!("⏭️ [MUTATION] Submit mientras hay otro en curso, ignorado");
            return Submission::Ignored;
        }

        self.shared.set_state(MutationState::Pending);
        let operation = (self.operation)(input);
        let shared = self.shared.clone();
        Submission::Started(
            async move {
                let result = operation.await;
                shared.settle(result);
            }
            .boxed_local(),
        )
    }

    /// Desmontaje: a partir de aquí no se escribe estado ni se llaman hooks
    pub fn dispose(&self) {
        self.shared.disposed.set(true);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.shared.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.shared.observers.unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use serde_json::json;

    type Gate = oneshot::Sender<ApiResult<u32>>;

    /// Pipeline cuya operación queda abierta hasta que el test la resuelve
    struct Harness {
        pipeline: MutationPipeline<u32, u32>,
        calls: Rc<Cell<u32>>,
        gates: Rc<RefCell<Vec<Gate>>>,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl Harness {
        fn new() -> Self {
            let calls = Rc::new(Cell::new(0));
            let gates: Rc<RefCell<Vec<Gate>>> = Rc::new(RefCell::new(Vec::new()));
            let events = Rc::new(RefCell::new(Vec::new()));

            let pipeline = {
                let calls = calls.clone();
                let gates = gates.clone();
                MutationPipeline::new(move |_input: u32| {
                    calls.set(calls.get() + 1);
                    let (tx, rx) = oneshot::channel();
                    gates.borrow_mut().push(tx);
                    async move {
                        rx.await
                            .unwrap_or_else(|_| Err(ApiError::network("canal cerrado")))
                    }
                })
            };

            let hooks = {
                let (ok, err, settled) = (events.clone(), events.clone(), events.clone());
                MutationHooks::new()
                    .on_success(move |output: &u32| ok.borrow_mut().push(format!("success:{}", output)))
                    .on_error(move |error: &ApiError| err.borrow_mut().push(format!("error:{}", error.status)))
                    .on_settled(move || settled.borrow_mut().push("settled".to_string()))
            };

            Self {
                pipeline: pipeline.with_hooks(hooks),
                calls,
                gates,
                events,
            }
        }

        fn resolve(&self, index: usize, result: ApiResult<u32>) {
            let gate = self.gates.borrow_mut().remove(index);
            assert!(gate.send(result).is_ok());
        }

        fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    fn server_error() -> ApiError {
        ApiError::from_status(500, json!({ "detail": "boom" }))
    }

    #[test]
    fn starts_idle() {
        let harness = Harness::new();
        assert!(harness.pipeline.state().is_idle());
        assert_eq!(harness.calls.get(), 0);
    }

    #[test]
    fn success_fires_on_success_then_on_settled() {
        let harness = Harness::new();
        let future = harness.pipeline.submit(1).into_future().unwrap();
        assert!(harness.pipeline.is_pending());

        harness.resolve(0, Ok(42));
        block_on(future);

        assert_eq!(harness.pipeline.state(), MutationState::Succeeded(42));
        assert_eq!(harness.events(), vec!["success:42", "settled"]);
    }

    #[test]
    fn failure_fires_on_error_then_on_settled() {
        let harness = Harness::new();
        let future = harness.pipeline.submit(1).into_future().unwrap();

        harness.resolve(0, Err(server_error()));
        block_on(future);

        assert_eq!(harness.pipeline.state().error(), Some(&server_error()));
        assert_eq!(harness.events(), vec!["error:500", "settled"]);
    }

    #[test]
    fn submit_while_pending_is_dropped() {
        let harness = Harness::new();
        let transitions = Rc::new(Cell::new(0));
        {
            let transitions = transitions.clone();
            harness.pipeline.subscribe(move || transitions.set(transitions.get() + 1));
        }

        let first = harness.pipeline.submit(1);
        let second = harness.pipeline.submit(2);
        assert!(first.is_started());
        assert!(!second.is_started());
        assert_eq!(harness.calls.get(), 1);

        harness.resolve(0, Ok(7));
        block_on(first.into_future().unwrap());

        assert_eq!(harness.calls.get(), 1);
        // Pending + un único estado terminal
        assert_eq!(transitions.get(), 2);
        assert_eq!(harness.events(), vec!["success:7", "settled"]);
    }

    #[test]
    fn failed_state_is_left_by_a_new_submit() {
        let harness = Harness::new();
        let future = harness.pipeline.submit(1).into_future().unwrap();
        harness.resolve(0, Err(server_error()));
        block_on(future);

        let retry = harness.pipeline.submit(1).into_future().unwrap();
        assert!(harness.pipeline.is_pending());
        harness.resolve(0, Ok(1));
        block_on(retry);

        assert_eq!(harness.calls.get(), 2);
        assert_eq!(harness.pipeline.state().output(), Some(&1));
        assert_eq!(
            harness.events(),
            vec!["error:500", "settled", "success:1", "settled"]
        );
    }

    #[test]
    fn settled_fires_once_per_submit() {
        let harness = Harness::new();
        for (round, result) in [Ok(1), Err(server_error()), Ok(3)].into_iter().enumerate() {
            let future = harness.pipeline.submit(round as u32).into_future().unwrap();
            harness.resolve(0, result);
            block_on(future);
        }
        let settled = harness.events().iter().filter(|e| *e == "settled").count();
        assert_eq!(settled, 3);
    }

    #[test]
    fn disposed_pipeline_discards_late_results() {
        let harness = Harness::new();
        let future = harness.pipeline.submit(1).into_future().unwrap();
        harness.pipeline.dispose();

        harness.resolve(0, Ok(9));
        block_on(future);

        assert!(harness.pipeline.state().is_pending());
        assert!(harness.events().is_empty());
        assert!(!harness.pipeline.submit(2).is_started());
        assert_eq!(harness.calls.get(), 1);
    }

    #[test]
    fn error_policy_runs_before_own_on_error() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let hooks = {
            let (own, policy) = (order.clone(), order.clone());
            MutationHooks::<u32>::new()
                .on_error(move |_| own.borrow_mut().push("own"))
                .with_error_policy(move |_| policy.borrow_mut().push("policy"))
        };
        let pipeline = MutationPipeline::new(|_: ()| async { Err(server_error()) }).with_hooks(hooks);

        block_on(pipeline.submit(()).into_future().unwrap());
        assert_eq!(*order.borrow(), vec!["policy", "own"]);
    }

    #[test]
    fn hooks_can_be_replaced_between_submits() {
        let harness = Harness::new();
        let replaced = Rc::new(Cell::new(false));
        {
            let replaced = replaced.clone();
            harness
                .pipeline
                .set_hooks(MutationHooks::new().on_success(move |_: &u32| replaced.set(true)));
        }

        let future = harness.pipeline.submit(1).into_future().unwrap();
        harness.resolve(0, Ok(1));
        block_on(future);

        assert!(replaced.get());
        assert!(harness.events().is_empty());
    }
}
