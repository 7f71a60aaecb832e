//! Exchange results and the per-encounter combat log

use crate::combatant::CombatantState;
use crate::damage::DamageBreakdown;
use crate::types::Status;
use serde::{Deserialize, Serialize};

/// Point-in-time view of one combatant's resources and statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub stamina: i32,
    pub max_stamina: i32,
    pub focus: i32,
    pub max_focus: i32,
    pub spirit: i32,
    pub max_spirit: i32,
    pub momentum: i32,
    /// Active status names, in insertion order
    pub statuses: Vec<String>,
}

impl ResourceSnapshot {
    /// Capture a combatant's current state
    pub fn capture(combatant: &CombatantState) -> Self {
        ResourceSnapshot {
            name: combatant.name.clone(),
            health: combatant.health.current,
            max_health: combatant.health.max,
            stamina: combatant.stamina.current,
            max_stamina: combatant.stamina.max,
            focus: combatant.focus.current,
            max_focus: combatant.focus.max,
            spirit: combatant.spirit.current,
            max_spirit: combatant.spirit.max,
            momentum: combatant.momentum,
            statuses: combatant.statuses.names(),
        }
    }
}

/// Complete record of one resolved exchange
///
/// This is the contract external subsystems (narrative generation,
/// persistence) depend on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatExchangeResult {
    /// Round this exchange resolved in
    pub round: u32,

    // === Participants ===
    pub actor: String,
    pub target: String,
    pub actor_move: String,
    pub target_move: String,

    // === Contest ===
    pub actor_roll: i32,
    pub target_roll: i32,
    pub actor_success: bool,

    // === Damage ===
    /// Full modifier breakdown, including special effect tags
    pub breakdown: DamageBreakdown,
    /// Damage actually applied to the target's health
    pub damage_dealt: i32,

    // === Effects ===
    pub statuses_added: Vec<Status>,
    pub statuses_removed: Vec<Status>,
    pub knockdown: bool,
    pub target_defeated: bool,

    // === Post-Exchange State ===
    pub actor_snapshot: ResourceSnapshot,
    pub target_snapshot: ResourceSnapshot,
}

/// Append-only, per-round log of exchanges for one encounter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatHistory {
    exchanges: Vec<CombatExchangeResult>,
}

impl CombatHistory {
    /// Create an empty history
    pub fn new() -> Self {
        CombatHistory::default()
    }

    /// Append an exchange record
    pub fn push(&mut self, result: CombatExchangeResult) {
        self.exchanges.push(result);
    }

    /// Look up the exchange resolved in a given round
    pub fn for_round(&self, round: u32) -> Option<&CombatExchangeResult> {
        self.exchanges.iter().find(|e| e.round == round)
    }

    /// Most recent exchange, if any
    pub fn last(&self) -> Option<&CombatExchangeResult> {
        self.exchanges.last()
    }

    /// Iterate exchanges in round order
    pub fn iter(&self) -> impl Iterator<Item = &CombatExchangeResult> {
        self.exchanges.iter()
    }

    /// Number of recorded exchanges
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Whether no exchanges have been recorded
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// The most recent `count` exchanges where the named combatant was the
    /// target, oldest first
    pub fn recent_against<'a>(&'a self, target: &str, count: usize) -> Vec<&'a CombatExchangeResult> {
        let matching: Vec<&CombatExchangeResult> =
            self.exchanges.iter().filter(|e| e.target == target).collect();
        let skip = matching.len().saturating_sub(count);
        matching.into_iter().skip(skip).collect()
    }

    /// Serialize the full log for external consumers
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.exchanges)
    }
}
