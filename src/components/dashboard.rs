use yew::prelude::*;

use crate::hooks::{use_query, use_session, QueryState};
use crate::services::auth_service;
use crate::state::QUERY_CURRENT_USER;
use crate::stores::session_store;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();
    let current_user = use_query(QUERY_CURRENT_USER, auth_service::fetch_current_user);

    // Refrescar la identidad guardada con lo que diga el servidor
    use_effect_with(current_user.clone(), |current_user| {
        if let QueryState::Ready(identity) = current_user {
            session_store().update_identity(identity.clone());
        }
        || ()
    });

    let name = session
        .identity()
        .map(|identity| identity.display_name().to_string())
        .unwrap_or_default();

    html! {
        <section class="page dashboard">
            <h1>{ format!("Hola, {} 👋", name) }</h1>
            <p>{"Bienvenido de nuevo, ¡un placer verte!"}</p>
            if matches!(current_user, QueryState::Loading) {
                <p class="muted">{"Cargando perfil..."}</p>
            }
            <div class="access-summary">
                <div>
                    <h3>{"Permisos"}</h3>
                    <ul>
                        { for session.permissions().iter().map(|p| html! { <li><code>{ p }</code></li> }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Roles"}</h3>
                    <ul>
                        { for session.roles().iter().map(|r| html! { <li><code>{ r }</code></li> }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
