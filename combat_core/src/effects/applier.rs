//! Applying computed damage and effects to combatant state
//!
//! Momentum is reported as a delta rather than mutated here; the
//! controller owns the commit.

use super::report::EffectReport;
use crate::combatant::CombatantState;
use crate::damage::DamageBreakdown;
use crate::moves::CombatMove;
use crate::types::{Domain, MoveType, SpecialEffect, Status};

/// Damage at or above this stuns on a force move
const STUN_THRESHOLD: i32 = 5;
/// Damage at or above this ignites/slows on a fire/ice move
const ELEMENT_THRESHOLD: i32 = 3;
/// Damage at or above this knocks the target prone
const KNOCKDOWN_THRESHOLD: i32 = 7;

/// Apply a damage breakdown to the target and deduct move costs from the
/// actor, in the fixed order: damage, special tags, secondary statuses,
/// costs, knockdown, defeat
pub fn apply_effects(
    actor: &mut CombatantState,
    target: &mut CombatantState,
    breakdown: &DamageBreakdown,
    actor_move: &CombatMove,
) -> EffectReport {
    let mut report = EffectReport::new();

    // Step 1: Damage to health, clamped at 0
    report.damage_dealt = target.health.spend(breakdown.final_damage);

    // Step 2: Special effect tags from damage computation
    for effect in &breakdown.special_effects {
        match effect {
            SpecialEffect::Critical => {
                if target.statuses.add(Status::Vulnerable) {
                    report.statuses_added.push(Status::Vulnerable);
                }
            }
            SpecialEffect::Extinguish => {
                if target.statuses.remove(Status::Burning) {
                    report.statuses_removed.push(Status::Burning);
                }
            }
        }
    }

    // Step 3: Move-driven secondary statuses
    if actor_move.move_type == MoveType::Force && report.damage_dealt >= STUN_THRESHOLD {
        if target.statuses.add(Status::Stunned) {
            report.statuses_added.push(Status::Stunned);
        }
    }
    if actor_move.move_type == MoveType::Trick && actor_move.is_calculated && report.damage_dealt > 0
    {
        if target.statuses.add(Status::Confused) {
            report.statuses_added.push(Status::Confused);
        }
    }
    if actor_move.has_domain(Domain::Fire) && report.damage_dealt >= ELEMENT_THRESHOLD {
        if target.statuses.add(Status::Burning) {
            report.statuses_added.push(Status::Burning);
        }
    }
    if actor_move.has_domain(Domain::Ice) && report.damage_dealt >= ELEMENT_THRESHOLD {
        if target.statuses.add(Status::Slowed) {
            report.statuses_added.push(Status::Slowed);
        }
    }

    // Step 4: Resource costs, clamped at 0
    report.stamina_spent = actor.stamina.spend(actor_move.stamina_cost);
    report.focus_spent = actor.focus.spend(actor_move.focus_cost);
    report.spirit_spent = actor.spirit.spend(actor_move.spirit_cost);

    // Step 5: Knockdown
    if report.damage_dealt >= KNOCKDOWN_THRESHOLD && target.statuses.add(Status::Prone) {
        report.statuses_added.push(Status::Prone);
        report.knockdown = true;
    }

    // Step 6: Defeat
    report.target_defeated = target.is_defeated();
    report.target_health = target.health.current;
    report.target_health_percent = target.health_percent();

    // Step 7: Momentum delta, committed by the controller
    if report.damage_dealt > 0 {
        report.actor_momentum_delta = 1;
        report.target_momentum_delta = -1;
    }

    report
}
