use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_mutation;
use crate::models::Message;
use crate::services::auth_service;
use crate::state::{notify_error, notify_success};
use crate::viewmodels::MutationHooks;

#[function_component(RecoverPassword)]
pub fn recover_password() -> Html {
    let email_ref = use_node_ref();

    let recover = {
        let email_ref = email_ref.clone();
        use_mutation(
            auth_service::recover_password,
            MutationHooks::new().on_success(move |_: &Message| {
                notify_success(
                    "Email enviado",
                    "Si la cuenta existe, recibirás un enlace para restablecer la contraseña",
                );
                if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }),
        )
    };

    let on_submit = {
        let email_ref = email_ref.clone();
        let submit = recover.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                let email = input.value().trim().to_string();
                if email.is_empty() {
                    notify_error("Error", "Introduce tu email");
                    return;
                }
                submit.emit(email);
            }
        })
    };

    let pending = recover.is_pending();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Recuperar contraseña"}</h1>
                    <p>{"Te enviaremos un enlace por email"}</p>
                </div>
                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" name="email" ref={email_ref} required=true />
                    </div>
                    <button type="submit" class="btn-login" disabled={pending}>
                        { if pending { "Enviando..." } else { "Continuar" } }
                    </button>
                    <div class="login-footer">
                        <a class="btn-register-link" href="#/login">{"Volver al login"}</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
