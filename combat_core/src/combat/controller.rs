//! CombatController - Orchestrates one encounter
//!
//! Owns the combatants, round counter, environment tags, and history for
//! the lifetime of one encounter. Resolution is single-threaded: one
//! exchange fully resolves before the next begins. Separate encounters
//! must use separate controllers; nothing here is shared.

use super::history::{CombatExchangeResult, CombatHistory, ResourceSnapshot};
use crate::combatant::CombatantState;
use crate::config::CombatConstants;
use crate::damage::calculate_damage;
use crate::effects::apply_effects;
use crate::environment::{apply_round_with_rng, HazardReport};
use crate::moves::CombatMove;
use crate::resolution::resolve_opposed_with_rng;
use crate::types::EnvironmentTag;
use rand::Rng;
use std::collections::BTreeMap;
use thiserror::Error;

/// Fatal precondition errors; the failed call mutates nothing
#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Unknown combatant: {0}")]
    UnknownCombatant(String),
    #[error("Combat requires at least two registered combatants")]
    NotEnoughCombatants,
    #[error("Combat is not active")]
    NotActive,
    #[error("Combat has already started")]
    AlreadyStarted,
    #[error("Environment hazards were already applied in round {0}")]
    HazardsAlreadyApplied(u32),
    #[error("Combatant cannot target itself: {0}")]
    SelfTarget(String),
}

/// Encounter lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    /// Registered but not started
    Idle,
    /// Exchanges may be resolved
    RoundActive,
    /// A combatant was defeated; no further exchanges
    Ended,
}

/// Orchestrator for one encounter
///
/// Combatants are kept in a sorted map so environment passes and
/// serialized state are deterministic given the same RNG.
#[derive(Debug, Clone)]
pub struct CombatController {
    combatants: BTreeMap<String, CombatantState>,
    environment: Vec<EnvironmentTag>,
    constants: CombatConstants,
    phase: CombatPhase,
    round: u32,
    /// Round of the last environment pass; 0 means none yet
    environment_round: u32,
    history: CombatHistory,
}

impl Default for CombatController {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatController {
    /// Create a controller with default constants
    pub fn new() -> Self {
        Self::with_constants(CombatConstants::default())
    }

    /// Create a controller with custom constants
    pub fn with_constants(constants: CombatConstants) -> Self {
        CombatController {
            combatants: BTreeMap::new(),
            environment: Vec::new(),
            constants,
            phase: CombatPhase::Idle,
            round: 0,
            environment_round: 0,
            history: CombatHistory::new(),
        }
    }

    /// Register a combatant for the encounter
    pub fn register(&mut self, combatant: CombatantState) {
        self.combatants.insert(combatant.name.clone(), combatant);
    }

    /// Replace the active environment tag set (scenario-driven, external)
    pub fn set_environment(&mut self, tags: Vec<EnvironmentTag>) {
        self.environment = tags;
    }

    /// Active environment tags
    pub fn environment(&self) -> &[EnvironmentTag] {
        &self.environment
    }

    /// Begin the encounter: Idle -> RoundActive
    ///
    /// Rejected once combat is underway or ended; a finished encounter
    /// cannot be rewound, use a fresh controller instead.
    pub fn start(&mut self) -> Result<(), CombatError> {
        if self.phase != CombatPhase::Idle {
            return Err(CombatError::AlreadyStarted);
        }
        if self.combatants.len() < 2 {
            return Err(CombatError::NotEnoughCombatants);
        }
        self.phase = CombatPhase::RoundActive;
        self.round = 1;
        Ok(())
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// Current round number
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Look up a registered combatant
    pub fn combatant(&self, name: &str) -> Option<&CombatantState> {
        self.combatants.get(name)
    }

    /// Read-only exchange log
    pub fn history(&self) -> &CombatHistory {
        &self.history
    }

    /// Exchange resolved in a given round, if any
    pub fn exchange_for_round(&self, round: u32) -> Option<&CombatExchangeResult> {
        self.history.for_round(round)
    }

    /// Most recent exchange, if any
    pub fn last_exchange(&self) -> Option<&CombatExchangeResult> {
        self.history.last()
    }

    /// Recent exchanges where `name` was the target; accessor for external
    /// narrative generation
    pub fn recent_exchanges_against(&self, name: &str, count: usize) -> Vec<&CombatExchangeResult> {
        self.history.recent_against(name, count)
    }

    /// Resolve one full exchange using an ambient RNG
    pub fn resolve_exchange(
        &mut self,
        actor: &str,
        actor_move: &CombatMove,
        target: &str,
        target_move: &CombatMove,
    ) -> Result<CombatExchangeResult, CombatError> {
        let mut rng = rand::thread_rng();
        self.resolve_exchange_with_rng(actor, actor_move, target, target_move, &mut rng)
    }

    /// Resolve one full exchange with a provided RNG (for deterministic
    /// testing)
    ///
    /// Runs contest -> damage -> effects, commits momentum, appends the
    /// result to history, and advances the round. Precondition failures
    /// abort before any state is touched.
    pub fn resolve_exchange_with_rng(
        &mut self,
        actor: &str,
        actor_move: &CombatMove,
        target: &str,
        target_move: &CombatMove,
        rng: &mut impl Rng,
    ) -> Result<CombatExchangeResult, CombatError> {
        if self.phase != CombatPhase::RoundActive {
            return Err(CombatError::NotActive);
        }
        if actor == target {
            return Err(CombatError::SelfTarget(actor.to_string()));
        }
        if !self.combatants.contains_key(actor) {
            return Err(CombatError::UnknownCombatant(actor.to_string()));
        }
        if !self.combatants.contains_key(target) {
            return Err(CombatError::UnknownCombatant(target.to_string()));
        }

        // Preconditions hold; take both participants out of the map for
        // the duration of the pipeline
        let mut actor_state = match self.combatants.remove(actor) {
            Some(state) => state,
            None => return Err(CombatError::UnknownCombatant(actor.to_string())),
        };
        let mut target_state = match self.combatants.remove(target) {
            Some(state) => state,
            None => {
                self.combatants.insert(actor_state.name.clone(), actor_state);
                return Err(CombatError::UnknownCombatant(target.to_string()));
            }
        };

        let outcome = resolve_opposed_with_rng(
            &actor_state,
            actor_move,
            &target_state,
            target_move,
            true,
            &self.constants.contest,
            rng,
        );
        let breakdown = calculate_damage(
            &actor_state,
            &target_state,
            actor_move,
            &outcome,
            &self.environment,
            &self.constants,
        );
        let report = apply_effects(&mut actor_state, &mut target_state, &breakdown, actor_move);

        // Controller commits the momentum deltas the applier reported
        actor_state.momentum += report.actor_momentum_delta;
        target_state.momentum += report.target_momentum_delta;

        let result = CombatExchangeResult {
            round: self.round,
            actor: actor_state.name.clone(),
            target: target_state.name.clone(),
            actor_move: actor_move.id.clone(),
            target_move: target_move.id.clone(),
            actor_roll: outcome.actor_roll,
            target_roll: outcome.target_roll,
            actor_success: outcome.actor_success,
            breakdown,
            damage_dealt: report.damage_dealt,
            statuses_added: report.statuses_added.clone(),
            statuses_removed: report.statuses_removed.clone(),
            knockdown: report.knockdown,
            target_defeated: report.target_defeated,
            actor_snapshot: ResourceSnapshot::capture(&actor_state),
            target_snapshot: ResourceSnapshot::capture(&target_state),
        };

        self.combatants.insert(actor_state.name.clone(), actor_state);
        self.combatants.insert(target_state.name.clone(), target_state);

        self.history.push(result.clone());
        self.round += 1;
        if result.target_defeated {
            self.phase = CombatPhase::Ended;
        }

        Ok(result)
    }

    /// Run the once-per-round environment pass using an ambient RNG
    pub fn apply_environment(&mut self) -> Result<Vec<HazardReport>, CombatError> {
        let mut rng = rand::thread_rng();
        self.apply_environment_with_rng(&mut rng)
    }

    /// Run the once-per-round environment pass with a provided RNG
    ///
    /// Each tag's hazard lands at most once per combatant per round; a
    /// repeat call in the same round is rejected. Hazard chip damage can
    /// end the encounter too.
    pub fn apply_environment_with_rng(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<Vec<HazardReport>, CombatError> {
        if self.phase != CombatPhase::RoundActive {
            return Err(CombatError::NotActive);
        }
        if self.environment_round == self.round {
            return Err(CombatError::HazardsAlreadyApplied(self.round));
        }
        self.environment_round = self.round;

        let reports = apply_round_with_rng(
            &self.environment,
            self.combatants.values_mut(),
            &self.constants.hazards,
            rng,
        );

        if self.combatants.values().any(|c| c.is_defeated()) {
            self.phase = CombatPhase::Ended;
        }

        Ok(reports)
    }
}
