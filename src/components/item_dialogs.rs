// ============================================================================
// ITEM DIALOGS - Alta, edición y borrado de items
// ============================================================================
// Cada diálogo es dueño de su mutación. Cancelar sólo emite on_close; el
// cierre por éxito lo hace el on_success de la propia mutación.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::dialog::{ConfirmDialog, Dialog};
use crate::hooks::use_mutation;
use crate::models::{Item, ItemCreate, ItemUpdate, Message};
use crate::services::item_service;
use crate::state::{invalidate_query, notify_error, notify_success, QUERY_ITEMS};
use crate::viewmodels::MutationHooks;

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[derive(Properties, PartialEq)]
pub struct AddItemDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(AddItemDialog)]
pub fn add_item_dialog(props: &AddItemDialogProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);

    let create = {
        let on_close = props.on_close.clone();
        let title = title.clone();
        let description = description.clone();
        use_mutation(
            item_service::create_item,
            MutationHooks::new()
                .on_success(move |item: &Item| {
                    log::info!("✅ [ITEMS] Item creado: {}", item.id);
                    notify_success("Item creado", &item.title);
                    title.set(String::new());
                    description.set(String::new());
                    on_close.emit(());
                })
                .on_settled(|| invalidate_query(QUERY_ITEMS)),
        )
    };

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let submit = create.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let title = title.trim().to_string();
            if title.is_empty() {
                notify_error("Error", "El título es obligatorio");
                return;
            }
            let description = description.trim().to_string();
            submit.emit(ItemCreate {
                title,
                description: (!description.is_empty()).then_some(description),
            });
        })
    };

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| title.set(input_value(&e)))
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| description.set(input_value(&e)))
    };
    let pending = create.is_pending();

    html! {
        <Dialog open={props.open} on_close={props.on_close.clone()} title="Añadir item" {pending}>
            <form onsubmit={on_submit}>
                <div class="modal-body">
                    <div class="form-group">
                        <label for="add-item-title">{"Título"}</label>
                        <input id="add-item-title" type="text" value={(*title).clone()} oninput={on_title} required=true />
                    </div>
                    <div class="form-group">
                        <label for="add-item-description">{"Descripción"}</label>
                        <input id="add-item-description" type="text" value={(*description).clone()} oninput={on_description} />
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())} disabled={pending}>
                        {"Cancelar"}
                    </button>
                    <button type="submit" class="btn-primary" disabled={pending}>
                        { if pending { "Guardando..." } else { "Guardar" } }
                    </button>
                </div>
            </form>
        </Dialog>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditItemDialogProps {
    pub item: Item,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(EditItemDialog)]
pub fn edit_item_dialog(props: &EditItemDialogProps) -> Html {
    let title = use_state(|| props.item.title.clone());
    let description = use_state(|| props.item.description.clone().unwrap_or_default());

    // Al abrir, partir siempre de los valores actuales del item
    {
        let title = title.clone();
        let description = description.clone();
        use_effect_with((props.open, props.item.clone()), move |(open, item)| {
            if *open {
                title.set(item.title.clone());
                description.set(item.description.clone().unwrap_or_default());
            }
            || ()
        });
    }

    let update = {
        let on_close = props.on_close.clone();
        use_mutation(
            |(id, changes): (String, ItemUpdate)| item_service::update_item(id, changes),
            MutationHooks::new()
                .on_success(move |item: &Item| {
                    notify_success("Item actualizado", &item.title);
                    on_close.emit(());
                })
                .on_settled(|| invalidate_query(QUERY_ITEMS)),
        )
    };

    let on_submit = {
        let item = props.item.clone();
        let title = title.clone();
        let description = description.clone();
        let submit = update.submit.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if title.trim().is_empty() {
                notify_error("Error", "El título es obligatorio");
                return;
            }
            let changes = ItemUpdate::diff(&item, &title, &description);
            if changes.is_empty() {
                on_close.emit(());
                return;
            }
            submit.emit((item.id.clone(), changes));
        })
    };

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| title.set(input_value(&e)))
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| description.set(input_value(&e)))
    };
    let pending = update.is_pending();
    let id = &props.item.id;

    html! {
        <Dialog open={props.open} on_close={props.on_close.clone()} title="Editar item" {pending}>
            <form onsubmit={on_submit}>
                <div class="modal-body">
                    <div class="form-group">
                        <label for={format!("edit-title-{}", id)}>{"Título"}</label>
                        <input id={format!("edit-title-{}", id)} type="text" value={(*title).clone()} oninput={on_title} required=true />
                    </div>
                    <div class="form-group">
                        <label for={format!("edit-description-{}", id)}>{"Descripción"}</label>
                        <input id={format!("edit-description-{}", id)} type="text" value={(*description).clone()} oninput={on_description} />
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())} disabled={pending}>
                        {"Cancelar"}
                    </button>
                    <button type="submit" class="btn-primary" disabled={pending}>
                        { if pending { "Guardando..." } else { "Guardar" } }
                    </button>
                </div>
            </form>
        </Dialog>
    }
}

#[derive(Properties, PartialEq)]
pub struct DeleteItemDialogProps {
    pub item: Item,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(DeleteItemDialog)]
pub fn delete_item_dialog(props: &DeleteItemDialogProps) -> Html {
    let delete = {
        let on_close = props.on_close.clone();
        use_mutation(
            item_service::delete_item,
            MutationHooks::new()
                .on_success(move |_: &Message| {
                    notify_success("Item eliminado", "El item se ha eliminado correctamente");
                    on_close.emit(());
                })
                .on_settled(|| invalidate_query(QUERY_ITEMS)),
        )
    };

    let on_confirm = {
        let id = props.item.id.clone();
        delete.submit.reform(move |_: ()| id.clone())
    };

    html! {
        <ConfirmDialog
            open={props.open}
            on_close={props.on_close.clone()}
            {on_confirm}
            title="Eliminar item"
            message={format!("¿Seguro que quieres eliminar \"{}\"? Esta acción no se puede deshacer.", props.item.title)}
            pending={delete.is_pending()}
        />
    }
}
