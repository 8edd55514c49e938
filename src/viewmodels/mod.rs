// ============================================================================
// VIEWMODELS - Estado + lógica de UI, sin dependencias de DOM
// ============================================================================

pub mod mutation_pipeline;
pub mod dialog_controller;

pub use mutation_pipeline::{MutationHooks, MutationPipeline, MutationState, Submission};
pub use dialog_controller::DialogController;
