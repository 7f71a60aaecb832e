//! Core types for the combat engine
//!
//! Move types, domains, statuses, and environment tags are closed enums so
//! every modifier branch is exhaustively matchable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A skill/affinity axis with an integer rating per combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Combat,
    Craft,
    Social,
    Fire,
    Water,
    Ice,
    Spark,
    Air,
    Nature,
    Spirit,
}

impl Domain {
    /// Get all domains
    pub fn all() -> &'static [Domain] {
        &[
            Domain::Combat,
            Domain::Craft,
            Domain::Social,
            Domain::Fire,
            Domain::Water,
            Domain::Ice,
            Domain::Spark,
            Domain::Air,
            Domain::Nature,
            Domain::Spirit,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Combat => "combat",
            Domain::Craft => "craft",
            Domain::Social => "social",
            Domain::Fire => "fire",
            Domain::Water => "water",
            Domain::Ice => "ice",
            Domain::Spark => "spark",
            Domain::Air => "air",
            Domain::Nature => "nature",
            Domain::Spirit => "spirit",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse tactical category of a move, used for type-advantage comparisons
///
/// Advantage runs in a cycle: Force > Trick > Focus > Defend > Force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    Force,
    Defend,
    Trick,
    Focus,
}

impl MoveType {
    /// The move type this one has advantage over
    pub fn beats(&self) -> MoveType {
        match self {
            MoveType::Force => MoveType::Trick,
            MoveType::Trick => MoveType::Focus,
            MoveType::Focus => MoveType::Defend,
            MoveType::Defend => MoveType::Force,
        }
    }

    /// Type-advantage signal against an opposing move type:
    /// +1 advantage, -1 disadvantage, 0 neutral
    pub fn advantage_over(&self, other: MoveType) -> i32 {
        if self.beats() == other {
            1
        } else if other.beats() == *self {
            -1
        } else {
            0
        }
    }
}

/// Persistent status effects a combatant can carry
///
/// No duration field: a status persists until an explicit removal rule
/// fires (e.g. a water move extinguishes Burning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Burning,
    Poisoned,
    Stunned,
    Vulnerable,
    Protected,
    Slowed,
    Prone,
    Confused,
    Energized,
    Focused,
    Inspired,
    Weakened,
    Fortified,
    Soaked,
}

impl Status {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Status::Burning => "burning",
            Status::Poisoned => "poisoned",
            Status::Stunned => "stunned",
            Status::Vulnerable => "vulnerable",
            Status::Protected => "protected",
            Status::Slowed => "slowed",
            Status::Prone => "prone",
            Status::Confused => "confused",
            Status::Energized => "energized",
            Status::Focused => "focused",
            Status::Inspired => "inspired",
            Status::Weakened => "weakened",
            Status::Fortified => "fortified",
            Status::Soaked => "soaked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One-shot tags produced by damage computation and consumed by the
/// effect-application step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffect {
    Critical,
    Extinguish,
}

/// Passive hazard tags shared by all combatants in an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentTag {
    Burning,
    Freezing,
    Electrified,
    Toxic,
    Inspirational,
    Flooded,
    Windy,
    Chaotic,
    Confined,
}

/// An ordered, duplicate-free collection of active statuses
///
/// Insertion order is preserved so reports and serialized snapshots are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusSet {
    entries: Vec<Status>,
}

impl StatusSet {
    /// Create an empty set
    pub fn new() -> Self {
        StatusSet::default()
    }

    /// Add a status; returns true if it was not already present
    pub fn add(&mut self, status: Status) -> bool {
        if self.entries.contains(&status) {
            return false;
        }
        self.entries.push(status);
        true
    }

    /// Remove a status; returns true if it was present
    pub fn remove(&mut self, status: Status) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| *s != status);
        self.entries.len() != before
    }

    /// Check whether a status is active
    pub fn contains(&self, status: Status) -> bool {
        self.entries.contains(&status)
    }

    /// Iterate active statuses in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        self.entries.iter()
    }

    /// Number of active statuses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no statuses are active
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display names of active statuses, in insertion order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|s| s.name().to_string()).collect()
    }
}
