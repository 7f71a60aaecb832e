//! CombatMove - Static move definitions
//!
//! Moves are immutable once defined and loaded from TOML configuration;
//! many combatants share move definitions by reference.

use crate::types::{Domain, MoveType};
use serde::{Deserialize, Serialize};

/// Static definition of an action a combatant can take
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatMove {
    /// Unique move identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Tactical category, used for type-advantage comparisons
    pub move_type: MoveType,
    /// Domains this move draws on
    #[serde(default)]
    pub domains: Vec<Domain>,
    /// Base damage magnitude before modifiers
    #[serde(default)]
    pub base_damage: i32,

    // === Resource Costs ===
    #[serde(default)]
    pub stamina_cost: i32,
    #[serde(default)]
    pub focus_cost: i32,
    #[serde(default)]
    pub spirit_cost: i32,

    // === Tactical Modes ===
    /// Reliable but weaker (x0.8 damage); mutually exclusive with desperate
    #[serde(default)]
    pub is_calculated: bool,
    /// Risky but stronger (x1.5 damage); mutually exclusive with calculated
    #[serde(default)]
    pub is_desperate: bool,
}

impl CombatMove {
    /// Create a plain move with no domains, costs, or tactical mode
    pub fn new(id: impl Into<String>, move_type: MoveType, base_damage: i32) -> Self {
        let id = id.into();
        CombatMove {
            name: id.clone(),
            id,
            move_type,
            domains: Vec::new(),
            base_damage: base_damage.max(0),
            stamina_cost: 0,
            focus_cost: 0,
            spirit_cost: 0,
            is_calculated: false,
            is_desperate: false,
        }
    }

    /// Attach domains (builder style)
    pub fn with_domains(mut self, domains: &[Domain]) -> Self {
        self.domains = domains.to_vec();
        self
    }

    /// Set resource costs (builder style)
    pub fn with_costs(mut self, stamina: i32, focus: i32, spirit: i32) -> Self {
        self.stamina_cost = stamina.max(0);
        self.focus_cost = focus.max(0);
        self.spirit_cost = spirit.max(0);
        self
    }

    /// Flag as calculated; clears the desperate flag
    pub fn calculated(mut self) -> Self {
        self.is_calculated = true;
        self.is_desperate = false;
        self
    }

    /// Flag as desperate; clears the calculated flag
    pub fn desperate(mut self) -> Self {
        self.is_desperate = true;
        self.is_calculated = false;
        self
    }

    /// Whether the move draws on a given domain
    pub fn has_domain(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    /// Fallback move if the catalog cannot be loaded
    pub fn basic_strike() -> Self {
        CombatMove::new("strike", MoveType::Force, 3)
            .with_domains(&[Domain::Combat])
            .with_costs(1, 0, 0)
    }
}
