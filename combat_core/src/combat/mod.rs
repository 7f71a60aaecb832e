//! Combat orchestration - per-round exchange pipeline and history

mod controller;
mod history;

pub use controller::{CombatController, CombatError, CombatPhase};
pub use history::{CombatExchangeResult, CombatHistory, ResourceSnapshot};
