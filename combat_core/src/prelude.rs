//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{CombatantState, ResourcePool};
pub use crate::moves::CombatMove;
pub use crate::types::{Domain, EnvironmentTag, MoveType, SpecialEffect, Status, StatusSet};

// Resolution
pub use crate::resolution::{ActionContext, ActionKind, ContestOutcome, ResolutionMethod};

// Damage and effects
pub use crate::damage::DamageBreakdown;
pub use crate::effects::EffectReport;
pub use crate::environment::HazardReport;

// Orchestration
pub use crate::combat::{CombatController, CombatError, CombatExchangeResult, CombatHistory, CombatPhase};

// Config
pub use crate::config::{default_moves, CombatConstants};
