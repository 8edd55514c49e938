use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{navigate_to, use_mutation};
use crate::models::{Identity, LoginForm};
use crate::routes::AppRoute;
use crate::services::auth_service;
use crate::state::notify_error;
use crate::stores::session_store;
use crate::viewmodels::MutationHooks;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let login = use_mutation(
        auth_service::login,
        MutationHooks::new().on_success(|(token, identity): &(String, Identity)| {
            log::info!("✅ [LOGIN] Sesión iniciada: {}", identity.email);
            session_store().login(token.clone(), identity.clone());
            navigate_to(&AppRoute::Dashboard);
        }),
    );

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let submit = login.submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value().trim().to_string();
                let password = password_input.value();

                if username.is_empty() || password.is_empty() {
                    notify_error("Error", "Por favor, completa todos los campos");
                    return;
                }

                submit.emit(LoginForm { username, password });
            }
        })
    };

    let pending = login.is_pending();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🛠️"}</div>
                    </div>
                    <h1>{"Admin Console"}</h1>
                    <p>{"Panel de administración"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Email"}</label>
                        <input
                            type="email"
                            id="username"
                            name="username"
                            placeholder="Ingresa tu email"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={pending}>
                        <span class="btn-text">
                            { if pending { "Entrando..." } else { "Iniciar Sesión" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <a class="btn-register-link" href="#/recover-password">
                            {"¿Olvidaste tu contraseña?"}
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
