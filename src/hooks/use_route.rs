// ============================================================================
// USE ROUTE HOOK - Enrutado por hash (#/ruta)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::routes::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// Navegar cambiando el hash; el listener de `use_route` hace el resto
pub fn navigate_to(route: &AppRoute) {
    let path = route.to_path();
    log::debug!("🧭 [ROUTE] -> {}", path);
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_hash(&path) {
            log::error!("❌ [ROUTE] No se pudo navegar a {}: {:?}", path, e);
        }
    }
}

/// Ruta actual; se actualiza con cada `hashchange`
#[hook]
pub fn use_route() -> AppRoute {
    let route = use_state(|| AppRoute::from_path(&current_path()));

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(AppRoute::from_path(&current_path()));
            }) as Box<dyn FnMut(web_sys::Event)>);

            let win = web_sys::window();
            if let Some(win) = &win {
                if let Err(e) =
                    win.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                {
                    log::error!("❌ [ROUTE] No se pudo escuchar hashchange: {:?}", e);
                }
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback(
                        "hashchange",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    (*route).clone()
}
