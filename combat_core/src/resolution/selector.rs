//! ResolutionSelector - Dice vs threshold resolution policy
//!
//! Variance matters precisely when outcomes are contested: anything inside
//! active combat, or against comparably-rated opposition, is rolled.
//! Routine, one-sided, or out-of-combat actions use a deterministic
//! threshold check instead.

use crate::config::ContestConstants;
use crate::types::Domain;
use serde::{Deserialize, Serialize};

/// How an action's outcome is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    /// Randomized roll contest between two parties
    Dice,
    /// Deterministic score-vs-difficulty comparison
    Threshold,
}

/// Broad category of an attempted action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Direct physical or elemental attack
    Attack,
    /// Social pressure, persuasion, intimidation
    Social,
    /// Crafting or repair work
    Craft,
    /// Anything else (guarding, channeling, maneuvering)
    Utility,
}

/// Inputs to the resolution-method decision
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    /// Domain the action draws on
    pub domain: Domain,
    /// Broad action category
    pub kind: ActionKind,
    /// Whether combat is currently active/adversarial
    pub combat_active: bool,
    /// Actor's rating in the action's domain
    pub actor_rating: i32,
    /// Opposing party's relevant rating, if there is opposition
    pub opposing_rating: Option<i32>,
    /// Difficulty override for threshold checks
    pub difficulty: Option<i32>,
}

impl ActionContext {
    /// Context for an unopposed action outside combat
    pub fn unopposed(domain: Domain, kind: ActionKind, actor_rating: i32) -> Self {
        ActionContext {
            domain,
            kind,
            combat_active: false,
            actor_rating,
            opposing_rating: None,
            difficulty: None,
        }
    }
}

/// Choose the resolution method for an action
///
/// Pure function of its inputs: identical context always yields the same
/// method. Active combat or comparably-rated opposition forces dice.
pub fn select_resolution(ctx: &ActionContext, constants: &ContestConstants) -> ResolutionMethod {
    if ctx.combat_active {
        return ResolutionMethod::Dice;
    }
    if let Some(opposing) = ctx.opposing_rating {
        if (ctx.actor_rating - opposing).abs() <= constants.contested_margin {
            return ResolutionMethod::Dice;
        }
    }
    if ctx.kind == ActionKind::Attack {
        return ResolutionMethod::Dice;
    }
    ResolutionMethod::Threshold
}

/// Run a deterministic threshold check
///
/// Aggregate score is `rating * 3 + base competence`, compared against the
/// context difficulty (or the default). Returns (success, score, difficulty).
pub fn threshold_check(ctx: &ActionContext, constants: &ContestConstants) -> (bool, i32, i32) {
    let score = ctx.actor_rating * 3 + constants.base_competence;
    let difficulty = ctx.difficulty.unwrap_or(constants.default_difficulty);
    (score >= difficulty, score, difficulty)
}
