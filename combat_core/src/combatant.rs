//! CombatantState - Mutable per-participant state for one encounter

use crate::types::{Domain, Status, StatusSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resource pool with a current and maximum value
///
/// Invariant: `0 <= current <= max` after every mutation. Overdrafts and
/// overheals are recovered silently by clamping, never reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub current: i32,
    pub max: i32,
}

impl ResourcePool {
    /// Create a full pool
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        ResourcePool { current: max, max }
    }

    /// Subtract from the pool, clamping at 0; returns the amount actually
    /// removed (less than `amount` if the pool was nearly empty)
    pub fn spend(&mut self, amount: i32) -> i32 {
        let spent = amount.max(0).min(self.current);
        self.current -= spent;
        spent
    }

    /// Add to the pool, clamping at max; returns the amount actually added
    pub fn restore(&mut self, amount: i32) -> i32 {
        let restored = amount.max(0).min(self.max - self.current);
        self.current += restored;
        restored
    }

    /// Set the current value directly, clamped to `[0, max]`
    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(0, self.max);
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Current value as a percentage of max
    pub fn percent(&self) -> f64 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f64 / self.max as f64 * 100.0
    }
}

/// Complete mutable state for one combat participant
///
/// Created at combat start from a template, mutated every exchange and
/// every environmental tick, discarded when combat ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantState {
    // === Identity ===
    pub name: String,

    // === Resources ===
    pub health: ResourcePool,
    pub stamina: ResourcePool,
    pub focus: ResourcePool,
    pub spirit: ResourcePool,

    // === Domains ===
    /// Skill/affinity rating per domain; missing entries read as 0
    #[serde(default)]
    pub ratings: HashMap<Domain, i32>,
    /// Domains this combatant is resistant to / gifted in
    #[serde(default)]
    pub strong_domains: Vec<Domain>,
    /// Domains this combatant is vulnerable to
    #[serde(default)]
    pub weak_domains: Vec<Domain>,

    // === Combat state ===
    #[serde(default)]
    pub statuses: StatusSet,
    /// Signed counter reflecting recent exchange success
    #[serde(default)]
    pub momentum: i32,
}

impl CombatantState {
    /// Create a combatant with full pools and no domain ratings
    pub fn new(name: impl Into<String>, health: i32, stamina: i32, focus: i32, spirit: i32) -> Self {
        CombatantState {
            name: name.into(),
            health: ResourcePool::new(health),
            stamina: ResourcePool::new(stamina),
            focus: ResourcePool::new(focus),
            spirit: ResourcePool::new(spirit),
            ratings: HashMap::new(),
            strong_domains: Vec::new(),
            weak_domains: Vec::new(),
            statuses: StatusSet::new(),
            momentum: 0,
        }
    }

    /// Set a domain rating (builder style)
    pub fn with_rating(mut self, domain: Domain, rating: i32) -> Self {
        self.ratings.insert(domain, rating.max(0));
        self
    }

    /// Mark a strong domain (builder style)
    pub fn with_strong_domain(mut self, domain: Domain) -> Self {
        if !self.strong_domains.contains(&domain) {
            self.strong_domains.push(domain);
        }
        self
    }

    /// Mark a weak domain (builder style)
    pub fn with_weak_domain(mut self, domain: Domain) -> Self {
        if !self.weak_domains.contains(&domain) {
            self.weak_domains.push(domain);
        }
        self
    }

    /// Start with a status active (builder style)
    pub fn with_status(mut self, status: Status) -> Self {
        self.statuses.add(status);
        self
    }

    /// Rating for a domain; unrated domains read as 0
    pub fn rating(&self, domain: Domain) -> i32 {
        self.ratings.get(&domain).copied().unwrap_or(0)
    }

    /// Best rating across a set of domains; 0 when the set is empty
    pub fn best_rating(&self, domains: &[Domain]) -> i32 {
        domains.iter().map(|d| self.rating(*d)).max().unwrap_or(0)
    }

    /// Whether the combatant is strong in a domain
    pub fn is_strong(&self, domain: Domain) -> bool {
        self.strong_domains.contains(&domain)
    }

    /// Whether the combatant is weak to a domain
    pub fn is_weak(&self, domain: Domain) -> bool {
        self.weak_domains.contains(&domain)
    }

    /// Whether health has reached 0
    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }

    /// Health as a percentage of max
    pub fn health_percent(&self) -> f64 {
        self.health.percent()
    }
}
