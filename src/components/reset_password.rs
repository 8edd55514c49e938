use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{navigate_to, use_mutation};
use crate::models::{Message, NewPassword};
use crate::routes::AppRoute;
use crate::services::auth_service;
use crate::state::{notify_error, notify_success};
use crate::viewmodels::MutationHooks;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Validación local antes de llamar a la API
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("La contraseña es obligatoria");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("La contraseña debe tener al menos 8 caracteres");
    }
    if password != confirm {
        return Err("Las contraseñas no coinciden");
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    pub token: Option<String>,
}

#[function_component(ResetPassword)]
pub fn reset_password(props: &ResetPasswordProps) -> Html {
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();

    let reset = use_mutation(
        auth_service::reset_password,
        MutationHooks::new().on_success(|_: &Message| {
            notify_success("Contraseña actualizada", "Ya puedes iniciar sesión");
            navigate_to(&AppRoute::Login);
        }),
    );

    let Some(token) = props.token.clone() else {
        return html! {
            <div class="login-screen">
                <div class="login-container">
                    <div class="login-header">
                        <h1>{"Enlace no válido"}</h1>
                        <p>{"El enlace para restablecer la contraseña no es válido o está incompleto"}</p>
                    </div>
                    <a class="btn-register-link" href="#/recover-password">{"Pedir un enlace nuevo"}</a>
                </div>
            </div>
        };
    };

    let on_submit = {
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let submit = reset.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(password), Some(confirm)) = (
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) {
                let new_password = password.value();
                if let Err(message) = validate_new_password(&new_password, &confirm.value()) {
                    notify_error("Error", message);
                    return;
                }
                submit.emit(NewPassword {
                    token: token.clone(),
                    new_password,
                });
            }
        })
    };

    let pending = reset.is_pending();

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Nueva contraseña"}</h1>
                </div>
                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="new-password">{"Contraseña"}</label>
                        <input type="password" id="new-password" ref={password_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">{"Repite la contraseña"}</label>
                        <input type="password" id="confirm-password" ref={confirm_ref} required=true />
                    </div>
                    <button type="submit" class="btn-login" disabled={pending}>
                        { if pending { "Guardando..." } else { "Restablecer" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_password_rules() {
        assert!(validate_new_password("", "").is_err());
        assert_eq!(
            validate_new_password("short", "short"),
            Err("La contraseña debe tener al menos 8 caracteres")
        );
        assert_eq!(
            validate_new_password("longenough", "longenougH"),
            Err("Las contraseñas no coinciden")
        );
        assert_eq!(validate_new_password("longenough", "longenough"), Ok(()));
    }
}
