// ============================================================================
// ADMIN CONSOLE - FRONTEND YEW (RUST PURO)
// ============================================================================
// - Guards: veredicto de acceso por ruta (puro)
// - ViewModels: MutationPipeline + DialogController, sin DOM
// - Stores/State: sesión global, caché de consultas y toasts (Rc<RefCell>)
// - Services: SOLO comunicación API + política de errores
// - Hooks/Components: capa Yew
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod state;
pub mod stores;
pub mod guards;
pub mod viewmodels;
pub mod services;
pub mod routes;
pub mod hooks;
pub mod components;

use crate::components::App;
use crate::config::CONFIG;

/// Arranque: panic hook, logging y render de la app
pub fn start() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Admin Console ({}) -> {}",
        CONFIG.environment,
        CONFIG.api_url()
    );

    yew::Renderer::<App>::new().render();
}
