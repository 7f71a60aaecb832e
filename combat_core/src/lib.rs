//! combat_core - Turn-based combat resolution and damage engine
//!
//! This library provides:
//! - CombatantState: Resource pools, domain ratings, and active statuses
//! - Resolution: Dice vs threshold contest selection and opposed moves
//! - DamageCalculator: Multiplicative modifier pipeline over contest signals
//! - EffectApplier: Damage, status, cost, knockdown, and defeat application
//! - EnvironmentEngine: Once-per-round passive hazard effects
//! - CombatController: Per-encounter orchestration and exchange history

pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod effects;
pub mod environment;
pub mod moves;
pub mod prelude;
pub mod resolution;
pub mod types;

// Re-export core types for convenience
pub use combat::{CombatController, CombatError, CombatExchangeResult, CombatHistory, CombatPhase, ResourceSnapshot};
pub use combatant::{CombatantState, ResourcePool};
pub use config::{default_moves, CombatConstants, ConfigError};
pub use damage::{calculate_damage, DamageBreakdown};
pub use effects::{apply_effects, EffectReport};
pub use environment::{apply_round, apply_round_with_rng, HazardReport};
pub use moves::CombatMove;
pub use resolution::{
    resolve_opposed, resolve_opposed_with_rng, select_resolution, threshold_check, ActionContext,
    ActionKind, ContestOutcome, ResolutionMethod,
};
pub use types::{Domain, EnvironmentTag, MoveType, SpecialEffect, Status, StatusSet};
