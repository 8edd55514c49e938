// ============================================================================
// DIALOG - Carcasa de diálogo controlado
// ============================================================================
// Siempre se renderiza; `open` sólo cambia la clase. No guarda un flag propio:
// el dueño decide con `open` y se entera del cierre por `on_close`.
// ============================================================================

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub small: bool,
    /// Con una mutación en vuelo no se puede cerrar (overlay, ✕)
    #[prop_or_default]
    pub pending: bool,
    #[prop_or_default]
    pub children: Children,
}

/// `on_close` que no hace nada mientras `pending`
fn dismiss_guard(on_close: &Callback<()>, pending: bool) -> Callback<()> {
    let on_close = on_close.clone();
    Callback::from(move |_| {
        if !pending {
            on_close.emit(());
        }
    })
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let on_dismiss = dismiss_guard(&props.on_close, props.pending).reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("modal", props.open.then_some("active"))} aria-hidden={(!props.open).to_string()}>
            <div class="modal-overlay" onclick={on_dismiss.clone()}></div>
            <div
                class={classes!("modal-content", props.small.then_some("modal-small"))}
                role="dialog"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="modal-header">
                    <h2>{ props.title.clone() }</h2>
                    <button type="button" class="btn-close" onclick={on_dismiss} disabled={props.pending}>
                        {"✕"}
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_confirm: Callback<()>,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::from("Eliminar"))]
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub pending: bool,
}

/// Diálogo de confirmación (borrados)
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let cancel = props.on_close.reform(|_: MouseEvent| ());
    let confirm = props.on_confirm.reform(|_: MouseEvent| ());

    html! {
        <Dialog open={props.open} on_close={props.on_close.clone()} title={props.title.clone()} small=true pending={props.pending}>
            <div class="modal-body">
                <p class="question-text">{ props.message.clone() }</p>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn-secondary" onclick={cancel} disabled={props.pending}>
                    {"Cancelar"}
                </button>
                <button type="button" class="btn-danger" onclick={confirm} disabled={props.pending}>
                    { if props.pending { AttrValue::from("Eliminando...") } else { props.confirm_label.clone() } }
                </button>
            </div>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_close() -> (Callback<()>, Rc<Cell<u32>>) {
        let closes = Rc::new(Cell::new(0));
        let on_close = {
            let closes = closes.clone();
            Callback::from(move |_| closes.set(closes.get() + 1))
        };
        (on_close, closes)
    }

    #[test]
    fn dismiss_is_ignored_while_pending() {
        let (on_close, closes) = counting_close();
        dismiss_guard(&on_close, true).emit(());
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn dismiss_closes_when_idle() {
        let (on_close, closes) = counting_close();
        dismiss_guard(&on_close, false).emit(());
        assert_eq!(closes.get(), 1);
    }
}
