//! Contest resolution - choosing and running dice or threshold checks

mod opposed;
mod selector;

pub use opposed::{resolve_opposed, resolve_opposed_with_rng, ContestOutcome};
pub use selector::{select_resolution, threshold_check, ActionContext, ActionKind, ResolutionMethod};
