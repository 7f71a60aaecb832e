//! EffectReport - Outcome of applying one exchange's effects

use crate::types::Status;
use serde::{Deserialize, Serialize};

/// Structured report of everything the effect-application step did
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectReport {
    /// Damage actually dealt (may be less than computed if health was low)
    pub damage_dealt: i32,
    /// Statuses added to the target this exchange
    pub statuses_added: Vec<Status>,
    /// Statuses removed from the target this exchange
    pub statuses_removed: Vec<Status>,
    /// Whether the target was knocked prone
    pub knockdown: bool,
    /// Whether the target's health reached 0
    pub target_defeated: bool,
    /// Target health after application
    pub target_health: i32,
    /// Target health after application, as a percentage of max
    pub target_health_percent: f64,

    // === Actor Costs ===
    pub stamina_spent: i32,
    pub focus_spent: i32,
    pub spirit_spent: i32,

    // === Momentum ===
    /// Momentum change for the actor; applied by the controller
    pub actor_momentum_delta: i32,
    /// Momentum change for the target; applied by the controller
    pub target_momentum_delta: i32,
}

impl EffectReport {
    /// Create an empty report
    pub fn new() -> Self {
        EffectReport::default()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.damage_dealt > 0 {
            parts.push(format!("{} damage dealt", self.damage_dealt));
        }
        for status in &self.statuses_added {
            parts.push(format!("target {}", status));
        }
        for status in &self.statuses_removed {
            parts.push(format!("{} removed", status));
        }
        if self.knockdown {
            parts.push("knocked down".to_string());
        }
        if self.target_defeated {
            parts.push("DEFEATED".to_string());
        }

        if parts.is_empty() {
            "No effect".to_string()
        } else {
            parts.join(", ")
        }
    }
}
