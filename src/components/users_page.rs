use yew::prelude::*;

use crate::components::dialog::ConfirmDialog;
use crate::config::CONFIG;
use crate::hooks::{use_dialogs, use_mutation, use_query, use_session, QueryState};
use crate::models::{Message, UserPublic};
use crate::services::user_service;
use crate::state::{invalidate_query, notify_success, QUERY_USERS};
use crate::viewmodels::MutationHooks;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserDialog {
    Delete,
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users = use_query(QUERY_USERS, || user_service::list_users(0, CONFIG.items_page_size));

    let body = match &users {
        QueryState::Loading => html! { <tr><td colspan="5" class="muted">{"Cargando..."}</td></tr> },
        QueryState::Failed(_) => html! {
            <tr><td colspan="5" class="muted">{"No se pudieron cargar los usuarios"}</td></tr>
        },
        QueryState::Ready(page) => page
            .data
            .iter()
            .map(|user| html! { <UserRow key={user.id.clone()} user={user.clone()} /> })
            .collect::<Html>(),
    };

    html! {
        <section class="page users">
            <div class="page-header">
                <h1>{"Gestión de usuarios"}</h1>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Nombre"}</th>
                        <th>{"Email"}</th>
                        <th>{"Roles"}</th>
                        <th>{"Estado"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>{ body }</tbody>
            </table>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct UserRowProps {
    pub user: UserPublic,
}

#[function_component(UserRow)]
pub fn user_row(props: &UserRowProps) -> Html {
    let session = use_session();
    let dialogs = use_dialogs::<UserDialog>(props.user.id.clone());

    let delete = {
        let close = dialogs.closer(UserDialog::Delete);
        use_mutation(
            user_service::delete_user,
            MutationHooks::new()
                .on_success(move |_: &Message| {
                    notify_success("Usuario eliminado", "El usuario se ha eliminado correctamente");
                    close.emit(());
                })
                .on_settled(|| invalidate_query(QUERY_USERS)),
        )
    };

    let user = &props.user;
    let is_me = session.identity().map(|me| me.id == user.id).unwrap_or(false);
    let on_confirm = {
        let id = user.id.clone();
        delete.submit.reform(move |_: ()| id.clone())
    };

    html! {
        <tr>
            <td class={classes!(user.full_name.is_none().then_some("muted"))}>
                { user.full_name.clone().unwrap_or_else(|| "N/A".to_string()) }
                if is_me { <span class="badge">{"Tú"}</span> }
            </td>
            <td>{ &user.email }</td>
            <td>{ user.roles.join(", ") }</td>
            <td>{ if user.is_active { "Activo" } else { "Inactivo" } }</td>
            <td class="row-actions">
                if !is_me {
                    <button type="button" class="btn-danger" onclick={dialogs.opener(UserDialog::Delete)}>
                        {"🗑️ Eliminar"}
                    </button>
                    <ConfirmDialog
                        open={dialogs.is_open(UserDialog::Delete)}
                        on_close={dialogs.closer(UserDialog::Delete)}
                        {on_confirm}
                        title="Eliminar usuario"
                        message={format!("Se eliminará {} junto con todos sus items.", user.email)}
                        pending={delete.is_pending()}
                    />
                }
            </td>
        </tr>
    }
}
