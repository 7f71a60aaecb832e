//! Tunable combat constants

use serde::{Deserialize, Serialize};

/// Tunable numeric knobs for the combat engine
///
/// Every field has a serde default so partial TOML overrides work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub contest: ContestConstants,
    #[serde(default)]
    pub modifiers: ModifierConstants,
    #[serde(default)]
    pub hazards: HazardConstants,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            contest: ContestConstants::default(),
            modifiers: ModifierConstants::default(),
            hazards: HazardConstants::default(),
        }
    }
}

/// Constants governing contest resolution (dice and threshold)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestConstants {
    /// Number of sides on the contest die
    #[serde(default = "default_dice_sides")]
    pub dice_sides: i32,
    /// Roll margin at or above which a hit is critical
    #[serde(default = "default_crit_margin")]
    pub crit_margin: i32,
    /// Rating gap at or below which opposition counts as contested,
    /// forcing dice resolution
    #[serde(default = "default_contested_margin")]
    pub contested_margin: i32,
    /// Flat competence added to rating-based threshold scores
    #[serde(default = "default_base_competence")]
    pub base_competence: i32,
    /// Difficulty used for threshold checks when none is supplied
    #[serde(default = "default_difficulty")]
    pub default_difficulty: i32,
}

impl Default for ContestConstants {
    fn default() -> Self {
        ContestConstants {
            dice_sides: 20,
            crit_margin: 8,
            contested_margin: 2,
            base_competence: 4,
            default_difficulty: 12,
        }
    }
}

fn default_dice_sides() -> i32 {
    20
}
fn default_crit_margin() -> i32 {
    8
}
fn default_contested_margin() -> i32 {
    2
}
fn default_base_competence() -> i32 {
    4
}
fn default_difficulty() -> i32 {
    12
}

/// Constants for the multiplicative damage-modifier pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierConstants {
    /// Multiplier when the actor's move type has advantage
    #[serde(default = "default_advantage_mult")]
    pub type_advantage: f64,
    /// Multiplier when the actor's move type has disadvantage
    #[serde(default = "default_disadvantage_mult")]
    pub type_disadvantage: f64,
    /// Expertise added per point of domain rating above 1
    #[serde(default = "default_domain_step")]
    pub domain_step: f64,
    /// Expertise added per move domain the target is weak to
    #[serde(default = "default_weak_domain_bonus")]
    pub weak_domain_bonus: f64,
    /// Bonus per point of momentum lead
    #[serde(default = "default_momentum_step")]
    pub momentum_step: f64,
    /// Cap on the total momentum bonus
    #[serde(default = "default_momentum_cap")]
    pub momentum_cap: f64,
    /// Multiplier for calculated moves
    #[serde(default = "default_calculated_mult")]
    pub calculated: f64,
    /// Multiplier for desperate moves
    #[serde(default = "default_desperate_mult")]
    pub desperate: f64,
    /// Final multiplier on a critical hit
    #[serde(default = "default_critical_mult")]
    pub critical: f64,
    /// Status bonus while the actor is energized
    #[serde(default = "default_energized_bonus")]
    pub energized_bonus: f64,
    /// Status bonus while the actor is focused
    #[serde(default = "default_focused_bonus")]
    pub focused_bonus: f64,
    /// Status bonus while the actor is inspired
    #[serde(default = "default_inspired_bonus")]
    pub inspired_bonus: f64,
    /// Status bonus against a vulnerable target
    #[serde(default = "default_vulnerable_bonus")]
    pub vulnerable_bonus: f64,
    /// Status bonus against a weakened target
    #[serde(default = "default_weakened_bonus")]
    pub weakened_bonus: f64,
    /// Bonus for a water move against a burning target
    #[serde(default = "default_extinguish_bonus")]
    pub extinguish_bonus: f64,
    /// Status reduction against a protected target
    #[serde(default = "default_protected_penalty")]
    pub protected_penalty: f64,
    /// Status reduction against a fortified target
    #[serde(default = "default_fortified_penalty")]
    pub fortified_penalty: f64,
    /// Environment bonus for water moves on flooded ground
    #[serde(default = "default_flooded_water_bonus")]
    pub flooded_water_bonus: f64,
    /// Environment bonus for spark moves in electrified terrain
    #[serde(default = "default_electrified_spark_bonus")]
    pub electrified_spark_bonus: f64,
    /// Environment bonus for air moves in windy terrain
    #[serde(default = "default_windy_air_bonus")]
    pub windy_air_bonus: f64,
    /// Environment bonus for trick moves amid chaos
    #[serde(default = "default_chaotic_trick_bonus")]
    pub chaotic_trick_bonus: f64,
    /// Environment bonus for force moves in confined quarters
    #[serde(default = "default_confined_force_bonus")]
    pub confined_force_bonus: f64,
}

impl Default for ModifierConstants {
    fn default() -> Self {
        ModifierConstants {
            type_advantage: 1.5,
            type_disadvantage: 0.7,
            domain_step: 0.10,
            weak_domain_bonus: 0.30,
            momentum_step: 0.20,
            momentum_cap: 0.60,
            calculated: 0.8,
            desperate: 1.5,
            critical: 1.5,
            energized_bonus: 0.20,
            focused_bonus: 0.10,
            inspired_bonus: 0.15,
            vulnerable_bonus: 0.30,
            weakened_bonus: 0.20,
            extinguish_bonus: 0.40,
            protected_penalty: 0.30,
            fortified_penalty: 0.20,
            flooded_water_bonus: 0.20,
            electrified_spark_bonus: 0.30,
            windy_air_bonus: 0.20,
            chaotic_trick_bonus: 0.15,
            confined_force_bonus: 0.10,
        }
    }
}

fn default_advantage_mult() -> f64 {
    1.5
}
fn default_disadvantage_mult() -> f64 {
    0.7
}
fn default_domain_step() -> f64 {
    0.10
}
fn default_weak_domain_bonus() -> f64 {
    0.30
}
fn default_momentum_step() -> f64 {
    0.20
}
fn default_momentum_cap() -> f64 {
    0.60
}
fn default_calculated_mult() -> f64 {
    0.8
}
fn default_desperate_mult() -> f64 {
    1.5
}
fn default_critical_mult() -> f64 {
    1.5
}
fn default_energized_bonus() -> f64 {
    0.20
}
fn default_focused_bonus() -> f64 {
    0.10
}
fn default_inspired_bonus() -> f64 {
    0.15
}
fn default_vulnerable_bonus() -> f64 {
    0.30
}
fn default_weakened_bonus() -> f64 {
    0.20
}
fn default_extinguish_bonus() -> f64 {
    0.40
}
fn default_protected_penalty() -> f64 {
    0.30
}
fn default_fortified_penalty() -> f64 {
    0.20
}
fn default_flooded_water_bonus() -> f64 {
    0.20
}
fn default_electrified_spark_bonus() -> f64 {
    0.30
}
fn default_windy_air_bonus() -> f64 {
    0.20
}
fn default_chaotic_trick_bonus() -> f64 {
    0.15
}
fn default_confined_force_bonus() -> f64 {
    0.10
}

/// Constants for once-per-round environmental hazards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardConstants {
    /// Base chip damage from burning terrain
    #[serde(default = "default_hazard_base")]
    pub burn_chip: i32,
    /// Base stamina drain from freezing terrain
    #[serde(default = "default_hazard_base")]
    pub freeze_drain: i32,
    /// Base shock damage from electrified terrain
    #[serde(default = "default_hazard_base")]
    pub shock_damage: i32,
    /// Base spirit restored by inspirational surroundings
    #[serde(default = "default_hazard_base")]
    pub inspire_restore: i32,
    /// Base poison damage from toxic terrain
    #[serde(default = "default_hazard_base")]
    pub toxin_damage: i32,
    /// Chance electrified terrain stuns
    #[serde(default = "default_shock_stun_chance")]
    pub shock_stun_chance: f64,
    /// Chance inspirational surroundings inspire
    #[serde(default = "default_inspire_chance")]
    pub inspire_chance: f64,
    /// Chance toxic terrain poisons
    #[serde(default = "default_poison_chance")]
    pub poison_chance: f64,
}

impl Default for HazardConstants {
    fn default() -> Self {
        HazardConstants {
            burn_chip: 2,
            freeze_drain: 2,
            shock_damage: 2,
            inspire_restore: 2,
            toxin_damage: 2,
            shock_stun_chance: 0.25,
            inspire_chance: 0.50,
            poison_chance: 0.75,
        }
    }
}

fn default_hazard_base() -> i32 {
    2
}
fn default_shock_stun_chance() -> f64 {
    0.25
}
fn default_inspire_chance() -> f64 {
    0.50
}
fn default_poison_chance() -> f64 {
    0.75
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rulebook() {
        let c = CombatConstants::default();
        assert_eq!(c.contest.crit_margin, 8);
        assert_eq!(c.contest.dice_sides, 20);
        assert!((c.modifiers.type_advantage - 1.5).abs() < f64::EPSILON);
        assert!((c.modifiers.momentum_cap - 0.60).abs() < f64::EPSILON);
        assert!((c.modifiers.vulnerable_bonus - 0.30).abs() < f64::EPSILON);
        assert!((c.modifiers.electrified_spark_bonus - 0.30).abs() < f64::EPSILON);
        assert_eq!(c.hazards.burn_chip, 2);
    }

    #[test]
    fn test_status_bonus_override() {
        let toml = r#"
[modifiers]
weakened_bonus = 0.5
"#;
        let c: CombatConstants = crate::config::parse_toml(toml).unwrap();
        assert!((c.modifiers.weakened_bonus - 0.5).abs() < f64::EPSILON);
        assert!((c.modifiers.energized_bonus - 0.20).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_override() {
        let toml = r#"
[contest]
crit_margin = 10

[modifiers]
desperate = 2.0
"#;
        let c: CombatConstants = crate::config::parse_toml(toml).unwrap();
        assert_eq!(c.contest.crit_margin, 10);
        // Unspecified fields fall back to defaults
        assert_eq!(c.contest.dice_sides, 20);
        assert!((c.modifiers.desperate - 2.0).abs() < f64::EPSILON);
        assert!((c.modifiers.calculated - 0.8).abs() < f64::EPSILON);
        assert_eq!(c.hazards.toxin_damage, 2);
    }
}
