pub mod access_guard;

pub use access_guard::{evaluate, DeniedBy, ForbiddenReason, RouteRequirement, Verdict};
