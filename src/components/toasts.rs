use std::collections::HashSet;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::state::notifier;

/// Pila de toasts; cada uno se cierra solo tras `TOAST_DURATION_MS`
#[function_component(Toasts)]
pub fn toasts() -> Html {
    let force_update = use_force_update();
    let scheduled = use_mut_ref(HashSet::<Uuid>::new);

    use_effect_with((), move |_| {
        let notifier = notifier();
        let id = notifier.subscribe(move || force_update.force_update());
        move || notifier.unsubscribe(id)
    });

    let toasts = notifier().toasts();

    for toast in &toasts {
        if scheduled.borrow_mut().insert(toast.id) {
            let id = toast.id;
            Timeout::new(CONFIG.toast_duration_ms, move || notifier().dismiss(id)).forget();
        }
    }
    scheduled
        .borrow_mut()
        .retain(|id| toasts.iter().any(|toast| toast.id == *id));

    html! {
        <div class="toast-stack">
            { for toasts.iter().map(|toast| {
                let id = toast.id;
                html! {
                    <div
                        key={id.to_string()}
                        class={classes!("toast", toast.kind.to_class())}
                        onclick={Callback::from(move |_: MouseEvent| notifier().dismiss(id))}
                    >
                        <strong>{ &toast.title }</strong>
                        <p>{ &toast.message }</p>
                    </div>
                }
            }) }
        </div>
    }
}
