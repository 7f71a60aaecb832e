//! Damage calculation - base magnitude through the modifier pipeline
//!
//! Pure function: no state is mutated here. Six independent modifiers are
//! each computed, clamped at zero, and composed multiplicatively; a
//! successful hit always deals at least 1 damage.

use crate::combatant::CombatantState;
use crate::config::{CombatConstants, ModifierConstants};
use crate::moves::CombatMove;
use crate::resolution::ContestOutcome;
use crate::types::{Domain, EnvironmentTag, MoveType, SpecialEffect, Status};
use serde::{Deserialize, Serialize};

/// Full breakdown of one damage computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Base effect magnitude fed into the pipeline
    pub base: i32,
    /// Final damage after all modifiers and rounding
    pub final_damage: i32,
    /// One-shot tags for the effect-application step
    pub special_effects: Vec<SpecialEffect>,
    /// Whether the hit was critical
    pub is_critical: bool,

    // === Modifier Factors ===
    pub type_factor: f64,
    pub domain_factor: f64,
    pub momentum_factor: f64,
    pub status_factor: f64,
    pub environment_factor: f64,
    pub tactical_factor: f64,
}

impl DamageBreakdown {
    /// Breakdown for a failed contest: no damage, no effects
    pub fn miss() -> Self {
        DamageBreakdown {
            base: 0,
            final_damage: 0,
            special_effects: Vec::new(),
            is_critical: false,
            type_factor: 1.0,
            domain_factor: 1.0,
            momentum_factor: 1.0,
            status_factor: 1.0,
            environment_factor: 1.0,
            tactical_factor: 1.0,
        }
    }
}

/// Compute final damage and special effects for a resolved contest
pub fn calculate_damage(
    actor: &CombatantState,
    target: &CombatantState,
    actor_move: &CombatMove,
    outcome: &ContestOutcome,
    environment: &[EnvironmentTag],
    constants: &CombatConstants,
) -> DamageBreakdown {
    if !outcome.actor_success {
        return DamageBreakdown::miss();
    }

    let mut special_effects = Vec::new();

    let mods = &constants.modifiers;
    let type_factor = type_advantage_factor(outcome.type_advantage, mods);
    let domain_factor = domain_expertise_factor(actor, target, actor_move, mods);
    let momentum_factor = momentum_factor(actor.momentum, target.momentum, mods);
    let status_factor = status_factor(actor, target, actor_move, &mut special_effects, mods);
    let environment_factor = environment_factor(actor_move, environment, mods);
    let tactical_factor = tactical_factor(actor_move, mods);

    let is_critical = outcome.margin() >= constants.contest.crit_margin;
    let crit_factor = if is_critical {
        special_effects.push(SpecialEffect::Critical);
        mods.critical
    } else {
        1.0
    };

    let raw = outcome.effect_magnitude as f64
        * type_factor
        * domain_factor
        * momentum_factor
        * status_factor
        * environment_factor
        * tactical_factor
        * crit_factor;

    // A successful hit always deals at least 1 damage
    let final_damage = (raw.round() as i32).max(1);

    DamageBreakdown {
        base: outcome.effect_magnitude,
        final_damage,
        special_effects,
        is_critical,
        type_factor,
        domain_factor,
        momentum_factor,
        status_factor,
        environment_factor,
        tactical_factor,
    }
}

fn type_advantage_factor(signal: i32, constants: &ModifierConstants) -> f64 {
    match signal {
        s if s > 0 => constants.type_advantage,
        s if s < 0 => constants.type_disadvantage,
        _ => 1.0,
    }
}

/// Expertise: every move domain adds `(rating - 1) * step` (rating 1 is
/// neutral), plus a flat bonus per move domain the target is weak to
fn domain_expertise_factor(
    actor: &CombatantState,
    target: &CombatantState,
    actor_move: &CombatMove,
    constants: &ModifierConstants,
) -> f64 {
    let mut factor = 1.0;
    for &domain in &actor_move.domains {
        factor += (actor.rating(domain) - 1) as f64 * constants.domain_step;
        if target.is_weak(domain) {
            factor += constants.weak_domain_bonus;
        }
    }
    factor.max(0.0)
}

fn momentum_factor(actor_momentum: i32, target_momentum: i32, constants: &ModifierConstants) -> f64 {
    let lead = actor_momentum - target_momentum;
    if lead <= 0 {
        return 1.0;
    }
    1.0 + (lead as f64 * constants.momentum_step).min(constants.momentum_cap)
}

/// Additive status contributions combined into one factor before the
/// multiplicative composition
fn status_factor(
    actor: &CombatantState,
    target: &CombatantState,
    actor_move: &CombatMove,
    special_effects: &mut Vec<SpecialEffect>,
    constants: &ModifierConstants,
) -> f64 {
    let mut bonus: f64 = 0.0;

    // Attacker bonuses
    if actor.statuses.contains(Status::Energized) {
        bonus += constants.energized_bonus;
    }
    if actor.statuses.contains(Status::Focused) {
        bonus += constants.focused_bonus;
    }
    if actor.statuses.contains(Status::Inspired) {
        bonus += constants.inspired_bonus;
    }

    // Target vulnerabilities
    if target.statuses.contains(Status::Vulnerable) {
        bonus += constants.vulnerable_bonus;
    }
    if target.statuses.contains(Status::Weakened) {
        bonus += constants.weakened_bonus;
    }
    if actor_move.has_domain(Domain::Water) && target.statuses.contains(Status::Burning) {
        bonus += constants.extinguish_bonus;
        special_effects.push(SpecialEffect::Extinguish);
    }

    // Target mitigation
    if target.statuses.contains(Status::Protected) {
        bonus -= constants.protected_penalty;
    }
    if target.statuses.contains(Status::Fortified) {
        bonus -= constants.fortified_penalty;
    }

    (1.0 + bonus).max(0.0)
}

/// Environment bonuses for (tag, move-domain-or-type) pairs, stacking
/// additively before multiplying
fn environment_factor(
    actor_move: &CombatMove,
    environment: &[EnvironmentTag],
    constants: &ModifierConstants,
) -> f64 {
    let mut bonus: f64 = 0.0;
    for tag in environment {
        bonus += match tag {
            EnvironmentTag::Flooded if actor_move.has_domain(Domain::Water) => {
                constants.flooded_water_bonus
            }
            EnvironmentTag::Electrified if actor_move.has_domain(Domain::Spark) => {
                constants.electrified_spark_bonus
            }
            EnvironmentTag::Windy if actor_move.has_domain(Domain::Air) => constants.windy_air_bonus,
            EnvironmentTag::Chaotic if actor_move.move_type == MoveType::Trick => {
                constants.chaotic_trick_bonus
            }
            EnvironmentTag::Confined if actor_move.move_type == MoveType::Force => {
                constants.confined_force_bonus
            }
            _ => 0.0,
        };
    }
    (1.0 + bonus).max(0.0)
}

fn tactical_factor(actor_move: &CombatMove, constants: &ModifierConstants) -> f64 {
    if actor_move.is_calculated {
        constants.calculated
    } else if actor_move.is_desperate {
        constants.desperate
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::ResolutionMethod;

    fn outcome(success: bool, magnitude: i32, actor_roll: i32, target_roll: i32, advantage: i32) -> ContestOutcome {
        ContestOutcome {
            method: ResolutionMethod::Dice,
            actor_roll,
            target_roll,
            actor_success: success,
            effect_magnitude: if success { magnitude } else { 0 },
            type_advantage: advantage,
            actor_momentum_delta: if success { 1 } else { 0 },
            target_momentum_delta: if success { -1 } else { 0 },
        }
    }

    fn plain(name: &str) -> CombatantState {
        CombatantState::new(name, 20, 10, 10, 10)
    }

    #[test]
    fn test_miss_deals_nothing() {
        let actor = plain("ash");
        let target = plain("bran");
        let mv = CombatMove::new("strike", MoveType::Force, 4);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(false, 4, 5, 15, 0),
            &[],
            &CombatConstants::default(),
        );
        assert_eq!(breakdown.final_damage, 0);
        assert!(breakdown.special_effects.is_empty());
    }

    #[test]
    fn test_all_neutral_hit() {
        // Base 4, no bonuses, margin 3: every factor 1.0, damage 4
        let actor = plain("ash");
        let target = plain("bran");
        let mv = CombatMove::new("strike", MoveType::Force, 4);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 4, 13, 10, 0),
            &[],
            &CombatConstants::default(),
        );
        assert_eq!(breakdown.final_damage, 4);
        assert!(!breakdown.is_critical);
        assert!(breakdown.special_effects.is_empty());
    }

    #[test]
    fn test_protected_and_weak_domain_cancel() {
        // Target protected (-0.30), move hits a weak domain (+0.30) at
        // rating 1 (neutral expertise): 4 * 1.3 * 0.7 = 3.64 -> 4
        let actor = plain("ash").with_rating(Domain::Fire, 1);
        let target = plain("bran")
            .with_weak_domain(Domain::Fire)
            .with_status(Status::Protected);
        let mv = CombatMove::new("flame_lash", MoveType::Force, 4).with_domains(&[Domain::Fire]);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 4, 13, 10, 0),
            &[],
            &CombatConstants::default(),
        );
        assert_eq!(breakdown.final_damage, 4);
    }

    #[test]
    fn test_critical_margin() {
        // Margin 9 >= 8: crit tag plus x1.5, round(4 * 1.5) = 6
        let actor = plain("ash");
        let target = plain("bran");
        let mv = CombatMove::new("strike", MoveType::Force, 4);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 4, 19, 10, 0),
            &[],
            &CombatConstants::default(),
        );
        assert!(breakdown.is_critical);
        assert_eq!(breakdown.final_damage, 6);
        assert!(breakdown.special_effects.contains(&SpecialEffect::Critical));

        // Margin 7 is not critical
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 4, 17, 10, 0),
            &[],
            &CombatConstants::default(),
        );
        assert!(!breakdown.is_critical);
        assert_eq!(breakdown.final_damage, 4);
    }

    #[test]
    fn test_type_advantage_scaling() {
        let actor = plain("ash");
        let target = plain("bran");
        let mv = CombatMove::new("strike", MoveType::Force, 4);
        let constants = CombatConstants::default();

        let up = calculate_damage(&actor, &target, &mv, &outcome(true, 4, 13, 10, 1), &[], &constants);
        assert_eq!(up.final_damage, 6); // 4 * 1.5

        let down = calculate_damage(&actor, &target, &mv, &outcome(true, 4, 13, 10, -1), &[], &constants);
        assert_eq!(down.final_damage, 3); // round(4 * 0.7)
    }

    #[test]
    fn test_domain_expertise_scaling() {
        // Rating 4 fire: 1.0 + (4-1)*0.10 = 1.3 -> round(4 * 1.3) = 5
        let actor = plain("ash").with_rating(Domain::Fire, 4);
        let target = plain("bran");
        let mv = CombatMove::new("flame_lash", MoveType::Force, 4).with_domains(&[Domain::Fire]);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 4, 13, 10, 0),
            &[],
            &CombatConstants::default(),
        );
        assert_eq!(breakdown.final_damage, 5);
    }

    #[test]
    fn test_momentum_bonus_is_capped() {
        let mut actor = plain("ash");
        let target = plain("bran");
        actor.momentum = 10; // lead of 10 would be +200% uncapped
        let mv = CombatMove::new("strike", MoveType::Force, 10);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 10, 13, 10, 0),
            &[],
            &CombatConstants::default(),
        );
        // Capped at +60%: 10 * 1.6 = 16
        assert_eq!(breakdown.final_damage, 16);
    }

    #[test]
    fn test_water_move_extinguishes_burning_target() {
        let actor = plain("ash").with_rating(Domain::Water, 1);
        let target = plain("bran").with_status(Status::Burning);
        let mv = CombatMove::new("riptide", MoveType::Trick, 4).with_domains(&[Domain::Water]);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 4, 13, 10, 0),
            &[],
            &CombatConstants::default(),
        );
        // 4 * 1.4 = 5.6 -> 6
        assert_eq!(breakdown.final_damage, 6);
        assert!(breakdown.special_effects.contains(&SpecialEffect::Extinguish));
    }

    #[test]
    fn test_environment_pairs_stack() {
        let actor = plain("ash").with_rating(Domain::Spark, 1);
        let target = plain("bran");
        // Spark force move in an electrified, confined space: +0.30 + 0.10
        let mv = CombatMove::new("arc_bolt", MoveType::Force, 5).with_domains(&[Domain::Spark]);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 5, 13, 10, 0),
            &[EnvironmentTag::Electrified, EnvironmentTag::Confined],
            &CombatConstants::default(),
        );
        // 5 * 1.4 = 7
        assert_eq!(breakdown.final_damage, 7);
    }

    #[test]
    fn test_tactical_modes() {
        let actor = plain("ash");
        let target = plain("bran");
        let constants = CombatConstants::default();

        let careful = CombatMove::new("measured_cut", MoveType::Force, 5).calculated();
        let b = calculate_damage(&actor, &target, &careful, &outcome(true, 5, 13, 10, 0), &[], &constants);
        assert_eq!(b.final_damage, 4); // 5 * 0.8

        let reckless = CombatMove::new("reckless_swing", MoveType::Force, 5).desperate();
        let b = calculate_damage(&actor, &target, &reckless, &outcome(true, 5, 13, 10, 0), &[], &constants);
        assert_eq!(b.final_damage, 8); // round(5 * 1.5)
    }

    #[test]
    fn test_status_and_environment_knobs_are_tunable() {
        let actor = plain("ash");
        let target = plain("bran").with_status(Status::Weakened);
        let mv = CombatMove::new("strike", MoveType::Force, 4);

        let mut constants = CombatConstants::default();
        constants.modifiers.weakened_bonus = 0.50;
        constants.modifiers.confined_force_bonus = 0.50;
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 4, 13, 10, 0),
            &[EnvironmentTag::Confined],
            &constants,
        );
        // 4 * 1.5 * 1.5 = 9
        assert_eq!(breakdown.final_damage, 9);
    }

    #[test]
    fn test_successful_hit_deals_at_least_one() {
        // Heavy mitigation on a tiny base still floors at 1
        let actor = plain("ash");
        let target = plain("bran")
            .with_status(Status::Protected)
            .with_status(Status::Fortified);
        let mv = CombatMove::new("jab", MoveType::Force, 1);
        let breakdown = calculate_damage(
            &actor,
            &target,
            &mv,
            &outcome(true, 1, 13, 10, -1),
            &[],
            &CombatConstants::default(),
        );
        assert_eq!(breakdown.final_damage, 1);
    }
}
