//! Effect application - damage, statuses, costs, knockdown, defeat

mod applier;
mod report;

pub use applier::apply_effects;
pub use report::EffectReport;
