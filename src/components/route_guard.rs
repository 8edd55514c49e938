// ============================================================================
// ROUTE GUARD - Aplica el veredicto del AccessGuard al render
// ============================================================================

use yew::prelude::*;

use crate::guards::{evaluate, ForbiddenReason, RouteRequirement, Verdict};
use crate::hooks::{navigate_to, use_session};
use crate::routes::AppRoute;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub requirement: RouteRequirement,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();
    let verdict = evaluate(&session, &props.requirement);

    use_effect_with(verdict.clone(), |verdict| {
        match verdict {
            Verdict::RedirectToLogin => navigate_to(&AppRoute::Login),
            Verdict::RedirectTo(path) => navigate_to(&AppRoute::from_path(path)),
            Verdict::Allow | Verdict::Forbidden(_) => {}
        }
        || ()
    });

    match verdict {
        Verdict::Allow => html! { <>{ for props.children.iter() }</> },
        Verdict::Forbidden(reason) => html! { <ForbiddenPage {reason} /> },
        Verdict::RedirectToLogin | Verdict::RedirectTo(_) => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct GuestOnlyProps {
    #[prop_or_default]
    pub children: Children,
}

/// Login y compañía: con sesión iniciada se vuelve al inicio
#[function_component(GuestOnly)]
pub fn guest_only(props: &GuestOnlyProps) -> Html {
    let logged_in = use_session().is_authenticated();

    use_effect_with(logged_in, |logged_in| {
        if *logged_in {
            navigate_to(&AppRoute::Dashboard);
        }
        || ()
    });

    if logged_in {
        html! {}
    } else {
        html! { <>{ for props.children.iter() }</> }
    }
}

#[derive(Properties, PartialEq)]
pub struct ForbiddenPageProps {
    pub reason: ForbiddenReason,
}

#[function_component(ForbiddenPage)]
pub fn forbidden_page(props: &ForbiddenPageProps) -> Html {
    html! {
        <section class="status-page forbidden">
            <h1>{"403"}</h1>
            <p class="status-title">{"Acceso denegado"}</p>
            <p class="status-detail">{ props.reason.message() }</p>
            <ul class="required-list">
                { for props.reason.required.iter().map(|required| html! { <li><code>{ required }</code></li> }) }
            </ul>
            <a class="btn-secondary" href="#/">{"Volver al inicio"}</a>
        </section>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="status-page not-found">
            <h1>{"404"}</h1>
            <p class="status-title">{"Página no encontrada"}</p>
            <a class="btn-secondary" href="#/">{"Volver al inicio"}</a>
        </section>
    }
}
