// ============================================================================
// APP - Raíz: barra de navegación, rutas protegidas y toasts
// ============================================================================

use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::items_page::ItemsPage;
use crate::components::login_screen::LoginScreen;
use crate::components::nav_bar::NavBar;
use crate::components::recover_password::RecoverPassword;
use crate::components::reset_password::ResetPassword;
use crate::components::route_guard::{GuestOnly, NotFoundPage, ProtectedRoute};
use crate::components::settings_page::SettingsPage;
use crate::components::toasts::Toasts;
use crate::components::users_page::UsersPage;
use crate::hooks::{use_route, use_session};
use crate::routes::AppRoute;

fn render_screen(route: &AppRoute) -> Html {
    match route {
        AppRoute::Login => html! { <LoginScreen /> },
        AppRoute::RecoverPassword => html! { <RecoverPassword /> },
        AppRoute::ResetPassword { token } => html! { <ResetPassword token={token.clone()} /> },
        AppRoute::Dashboard => html! { <Dashboard /> },
        AppRoute::Items => html! { <ItemsPage /> },
        AppRoute::Admin => html! { <UsersPage /> },
        AppRoute::Settings => html! { <SettingsPage /> },
        AppRoute::NotFound(_) => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_route();
    let session = use_session();

    {
        let title = route.title();
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|win| win.document()) {
                document.set_title(&format!("{} - Admin Console", title));
            }
            || ()
        });
    }

    let screen = render_screen(&route);
    let content = match route.requirement() {
        Some(requirement) => html! {
            <ProtectedRoute key={route.to_path()} {requirement}>{ screen }</ProtectedRoute>
        },
        None if route.is_public_only() => html! { <GuestOnly>{ screen }</GuestOnly> },
        None => screen,
    };

    html! {
        <div class="app">
            if session.is_authenticated() {
                <NavBar current={route.clone()} />
            }
            <main class="main-content">{ content }</main>
            <Toasts />
        </div>
    }
}
