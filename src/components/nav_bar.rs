use yew::prelude::*;

use crate::guards::evaluate;
use crate::hooks::{navigate_to, use_session};
use crate::routes::AppRoute;
use crate::stores::session_store;

static NAV_ROUTES: [AppRoute; 4] = [
    AppRoute::Dashboard,
    AppRoute::Items,
    AppRoute::Admin,
    AppRoute::Settings,
];

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: AppRoute,
}

/// Sólo se enlazan las rutas que el guard dejaría pasar
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let session = use_session();

    let on_logout = Callback::from(|_: MouseEvent| {
        log::info!("👋 [NAV] Logout");
        session_store().logout();
        navigate_to(&AppRoute::Login);
    });

    let links = NAV_ROUTES.iter().filter(|route| {
        route
            .requirement()
            .map(|requirement| evaluate(&session, &requirement).is_allow())
            .unwrap_or(true)
    });

    let name = session
        .identity()
        .map(|identity| identity.display_name().to_string())
        .unwrap_or_default();

    html! {
        <nav class="nav-bar">
            <span class="nav-brand">{"🛠️ Admin Console"}</span>
            <ul class="nav-links">
                { for links.map(|route| html! {
                    <li>
                        <a
                            href={format!("#{}", route.to_path())}
                            class={classes!((route == &props.current).then_some("active"))}
                        >
                            { route.title() }
                        </a>
                    </li>
                }) }
            </ul>
            <div class="nav-user">
                <span>{ name }</span>
                <button type="button" class="btn-secondary" onclick={on_logout}>{"Cerrar sesión"}</button>
            </div>
        </nav>
    }
}
