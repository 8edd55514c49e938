// ============================================================================
// ITEMS PAGE - Tabla de items con acciones por fila
// ============================================================================
// Cada fila tiene su propio DialogController (editar / eliminar); el alta es
// un diálogo a nivel de página.
// ============================================================================

use yew::prelude::*;

use crate::components::item_dialogs::{AddItemDialog, DeleteItemDialog, EditItemDialog};
use crate::config::CONFIG;
use crate::hooks::{use_dialogs, use_query, use_session, QueryState};
use crate::models::Item;
use crate::routes::{PERM_ITEMS_CREATE, PERM_ITEMS_DELETE, PERM_ITEMS_UPDATE};
use crate::services::item_service;
use crate::state::QUERY_ITEMS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemDialog {
    Add,
    Edit,
    Delete,
}

#[function_component(ItemsPage)]
pub fn items_page() -> Html {
    let session = use_session();
    let page_dialogs = use_dialogs::<ItemDialog>("items-page".to_string());
    let items = use_query(QUERY_ITEMS, || item_service::list_items(0, CONFIG.items_page_size));

    let can_create = session.has_permission(PERM_ITEMS_CREATE);

    let body = match &items {
        QueryState::Loading => html! {
            <tr><td colspan="4" class="muted">{"Cargando..."}</td></tr>
        },
        QueryState::Failed(_) => html! {
            <tr><td colspan="4" class="muted">{"No se pudieron cargar los items"}</td></tr>
        },
        QueryState::Ready(page) if page.data.is_empty() => html! {
            <tr><td colspan="4" class="muted">{"Todavía no hay items"}</td></tr>
        },
        QueryState::Ready(page) => page
            .data
            .iter()
            .map(|item| html! { <ItemRow key={item.id.clone()} item={item.clone()} /> })
            .collect::<Html>(),
    };

    let count = match &items {
        QueryState::Ready(page) => page.count,
        _ => 0,
    };

    html! {
        <section class="page items">
            <div class="page-header">
                <h1>{"Gestión de items"}</h1>
                if can_create {
                    <button type="button" class="btn-primary" onclick={page_dialogs.opener(ItemDialog::Add)}>
                        {"➕ Añadir item"}
                    </button>
                }
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Título"}</th>
                        <th>{"Descripción"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>{ body }</tbody>
            </table>
            <p class="muted">{ format!("{} items", count) }</p>
            if can_create {
                <AddItemDialog
                    open={page_dialogs.is_open(ItemDialog::Add)}
                    on_close={page_dialogs.closer(ItemDialog::Add)}
                />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemRowProps {
    pub item: Item,
}

#[function_component(ItemRow)]
pub fn item_row(props: &ItemRowProps) -> Html {
    let session = use_session();
    let dialogs = use_dialogs::<ItemDialog>(props.item.id.clone());

    let can_update = session.has_permission(PERM_ITEMS_UPDATE);
    let can_delete = session.has_permission(PERM_ITEMS_DELETE);
    let item = &props.item;

    html! {
        <tr>
            <td class="mono">{ &item.id }</td>
            <td>{ &item.title }</td>
            <td class={classes!(item.description.is_none().then_some("muted"))}>
                { item.description.clone().unwrap_or_else(|| "N/A".to_string()) }
            </td>
            <td class="row-actions">
                if can_update {
                    <button type="button" class="btn-secondary" onclick={dialogs.opener(ItemDialog::Edit)}>
                        {"✏️ Editar"}
                    </button>
                    <EditItemDialog
                        item={item.clone()}
                        open={dialogs.is_open(ItemDialog::Edit)}
                        on_close={dialogs.closer(ItemDialog::Edit)}
                    />
                }
                if can_delete {
                    <button type="button" class="btn-danger" onclick={dialogs.opener(ItemDialog::Delete)}>
                        {"🗑️ Eliminar"}
                    </button>
                    <DeleteItemDialog
                        item={item.clone()}
                        open={dialogs.is_open(ItemDialog::Delete)}
                        on_close={dialogs.closer(ItemDialog::Delete)}
                    />
                }
            </td>
        </tr>
    }
}
