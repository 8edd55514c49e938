use yew::prelude::*;

use crate::components::dialog::ConfirmDialog;
use crate::hooks::{navigate_to, use_dialogs, use_mutation, use_session};
use crate::models::Message;
use crate::routes::AppRoute;
use crate::services::auth_service;
use crate::state::{invalidate_query, notify_success, QUERY_CURRENT_USER};
use crate::stores::session_store;
use crate::viewmodels::MutationHooks;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountDialog {
    Delete,
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_session();
    let dialogs = use_dialogs::<AccountDialog>("account".to_string());

    let delete_account = {
        let close = dialogs.closer(AccountDialog::Delete);
        use_mutation(
            |_: ()| auth_service::delete_current_user(),
            MutationHooks::new()
                .on_success(move |_: &Message| {
                    notify_success("Cuenta eliminada", "Tu cuenta se ha eliminado correctamente");
                    close.emit(());
                    session_store().logout();
                    navigate_to(&AppRoute::Login);
                })
                .on_settled(|| invalidate_query(QUERY_CURRENT_USER)),
        )
    };

    let Some(identity) = session.identity() else {
        return html! {};
    };

    html! {
        <section class="page settings">
            <h1>{"Ajustes de usuario"}</h1>
            <div class="settings-section">
                <h3>{"Mi perfil"}</h3>
                <dl>
                    <dt>{"Nombre"}</dt>
                    <dd>{ identity.full_name.clone().unwrap_or_else(|| "N/A".to_string()) }</dd>
                    <dt>{"Email"}</dt>
                    <dd>{ &identity.email }</dd>
                </dl>
            </div>
            <div class="settings-section danger-zone">
                <h3>{"Eliminar cuenta"}</h3>
                <p>{"Se eliminarán de forma permanente tus datos y todo lo asociado a tu cuenta."}</p>
                <button type="button" class="btn-danger" onclick={dialogs.opener(AccountDialog::Delete)}>
                    {"Eliminar"}
                </button>
            </div>
            <ConfirmDialog
                open={dialogs.is_open(AccountDialog::Delete)}
                on_close={dialogs.closer(AccountDialog::Delete)}
                on_confirm={delete_account.submit.clone()}
                title="Confirmación requerida"
                message="Todos tus datos se borrarán de forma permanente. ¿Seguro que quieres eliminar tu cuenta?"
                pending={delete_account.is_pending()}
            />
        </section>
    }
}
