//! OpposedMoveResolver - Resolving an actor's move against a target's response

use super::selector::{select_resolution, threshold_check, ActionContext, ActionKind, ResolutionMethod};
use crate::combatant::CombatantState;
use crate::config::ContestConstants;
use crate::moves::CombatMove;
use crate::types::{Domain, MoveType};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Derived signals from a resolved contest
///
/// Momentum deltas here are provisional: the controller commits them only
/// once the exchange actually deals damage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestOutcome {
    /// How the contest was resolved
    pub method: ResolutionMethod,
    /// Actor's resolved roll value (total for dice, score for threshold)
    pub actor_roll: i32,
    /// Target's resolved roll value (total for dice, difficulty for threshold)
    pub target_roll: i32,
    /// Whether the actor's move succeeded
    pub actor_success: bool,
    /// Base intensity before modifiers; 0 on failure
    pub effect_magnitude: i32,
    /// Type-advantage signal vs the opposing move: -1/0/+1
    pub type_advantage: i32,
    /// Provisional momentum change for the actor
    pub actor_momentum_delta: i32,
    /// Provisional momentum change for the target
    pub target_momentum_delta: i32,
}

impl ContestOutcome {
    /// Roll margin (actor minus target); feeds the critical-hit rule
    pub fn margin(&self) -> i32 {
        self.actor_roll - self.target_roll
    }
}

/// Resolve an opposed move contest using an ambient RNG
pub fn resolve_opposed(
    actor: &CombatantState,
    actor_move: &CombatMove,
    target: &CombatantState,
    target_move: &CombatMove,
    combat_active: bool,
    constants: &ContestConstants,
) -> ContestOutcome {
    let mut rng = rand::thread_rng();
    resolve_opposed_with_rng(actor, actor_move, target, target_move, combat_active, constants, &mut rng)
}

/// Resolve an opposed move contest with a provided RNG (for deterministic
/// testing)
pub fn resolve_opposed_with_rng(
    actor: &CombatantState,
    actor_move: &CombatMove,
    target: &CombatantState,
    target_move: &CombatMove,
    combat_active: bool,
    constants: &ContestConstants,
    rng: &mut impl Rng,
) -> ContestOutcome {
    let domain = primary_domain(actor_move);
    let ctx = ActionContext {
        domain,
        kind: action_kind(actor_move.move_type),
        combat_active,
        actor_rating: actor.best_rating(&actor_move.domains),
        opposing_rating: Some(target.best_rating(&target_move.domains)),
        difficulty: None,
    };

    let method = select_resolution(&ctx, constants);
    let (actor_roll, target_roll, actor_success) = match method {
        ResolutionMethod::Dice => {
            let actor_total =
                rng.gen_range(1..=constants.dice_sides) + actor.best_rating(&actor_move.domains);
            let target_total =
                rng.gen_range(1..=constants.dice_sides) + target.best_rating(&target_move.domains);
            // Ties favor the defender
            (actor_total, target_total, actor_total > target_total)
        }
        ResolutionMethod::Threshold => {
            let (success, score, difficulty) = threshold_check(&ctx, constants);
            (score, difficulty, success)
        }
    };

    let effect_magnitude = if actor_success { actor_move.base_damage } else { 0 };
    let (actor_delta, target_delta) = if actor_success { (1, -1) } else { (0, 0) };

    ContestOutcome {
        method,
        actor_roll,
        target_roll,
        actor_success,
        effect_magnitude,
        type_advantage: actor_move.move_type.advantage_over(target_move.move_type),
        actor_momentum_delta: actor_delta,
        target_momentum_delta: target_delta,
    }
}

fn primary_domain(mv: &CombatMove) -> Domain {
    mv.domains.first().copied().unwrap_or(Domain::Combat)
}

fn action_kind(move_type: MoveType) -> ActionKind {
    match move_type {
        MoveType::Force | MoveType::Trick => ActionKind::Attack,
        MoveType::Defend | MoveType::Focus => ActionKind::Utility,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    fn fighter(name: &str, combat_rating: i32) -> CombatantState {
        CombatantState::new(name, 20, 10, 10, 10).with_rating(Domain::Combat, combat_rating)
    }

    #[test]
    fn test_dice_contest_in_combat() {
        let actor = fighter("ash", 3);
        let target = fighter("bran", 2);
        let strike = CombatMove::new("strike", MoveType::Force, 3).with_domains(&[Domain::Combat]);
        let guard = CombatMove::new("guard", MoveType::Defend, 1).with_domains(&[Domain::Combat]);

        let mut rng = make_test_rng();
        let outcome = resolve_opposed_with_rng(
            &actor,
            &strike,
            &target,
            &guard,
            true,
            &ContestConstants::default(),
            &mut rng,
        );

        assert_eq!(outcome.method, ResolutionMethod::Dice);
        // Rolls carry the domain rating bonus on top of 1..=20
        assert!(outcome.actor_roll >= 4 && outcome.actor_roll <= 23);
        assert!(outcome.target_roll >= 3 && outcome.target_roll <= 22);
        assert_eq!(outcome.actor_success, outcome.actor_roll > outcome.target_roll);
    }

    #[test]
    fn test_failure_produces_no_magnitude_or_momentum() {
        let actor = fighter("ash", 0);
        let target = fighter("bran", 0);
        let strike = CombatMove::new("strike", MoveType::Force, 5);
        let guard = CombatMove::new("guard", MoveType::Defend, 1);

        let constants = ContestConstants::default();
        let mut rng = make_test_rng();
        // Run until a failed contest shows up
        loop {
            let outcome =
                resolve_opposed_with_rng(&actor, &strike, &target, &guard, true, &constants, &mut rng);
            if !outcome.actor_success {
                assert_eq!(outcome.effect_magnitude, 0);
                assert_eq!(outcome.actor_momentum_delta, 0);
                assert_eq!(outcome.target_momentum_delta, 0);
                break;
            }
        }
    }

    #[test]
    fn test_success_carries_base_damage_and_symmetric_momentum() {
        let actor = fighter("ash", 10);
        let target = fighter("bran", 0);
        let strike = CombatMove::new("strike", MoveType::Force, 5).with_domains(&[Domain::Combat]);
        let stumble = CombatMove::new("stumble", MoveType::Focus, 0);

        let constants = ContestConstants::default();
        let mut rng = make_test_rng();
        loop {
            let outcome =
                resolve_opposed_with_rng(&actor, &strike, &target, &stumble, true, &constants, &mut rng);
            if outcome.actor_success {
                assert_eq!(outcome.effect_magnitude, 5);
                assert_eq!(outcome.actor_momentum_delta, 1);
                assert_eq!(outcome.target_momentum_delta, -1);
                break;
            }
        }
    }

    #[test]
    fn test_threshold_path_outside_combat() {
        // Rating 5 channeler against rating 0 opposition, out of combat:
        // utility action, one-sided, so threshold resolution applies.
        let actor = fighter("ash", 0).with_rating(Domain::Spirit, 5);
        let target = fighter("bran", 0);
        let channel = CombatMove::new("channel", MoveType::Focus, 2).with_domains(&[Domain::Spirit]);
        let idle = CombatMove::new("guard", MoveType::Defend, 0);

        let constants = ContestConstants::default();
        let mut rng = make_test_rng();
        let outcome =
            resolve_opposed_with_rng(&actor, &channel, &target, &idle, false, &constants, &mut rng);

        assert_eq!(outcome.method, ResolutionMethod::Threshold);
        // score = 5 * 3 + 4 = 19 vs difficulty 12
        assert_eq!(outcome.actor_roll, 19);
        assert_eq!(outcome.target_roll, 12);
        assert!(outcome.actor_success);
    }

    #[test]
    fn test_threshold_score_meeting_difficulty_succeeds() {
        // Threshold checks succeed on score >= difficulty, so an exact
        // tie passes, matching threshold_check.
        let actor = fighter("ash", 0).with_rating(Domain::Craft, 3);
        let target = fighter("bran", 0);
        let tinker = CombatMove::new("tinker", MoveType::Focus, 0).with_domains(&[Domain::Craft]);
        let idle = CombatMove::new("guard", MoveType::Defend, 0);

        let mut constants = ContestConstants::default();
        constants.default_difficulty = 13;
        let mut rng = make_test_rng();
        let outcome =
            resolve_opposed_with_rng(&actor, &tinker, &target, &idle, false, &constants, &mut rng);

        assert_eq!(outcome.method, ResolutionMethod::Threshold);
        // score = 3 * 3 + 4 = 13, exactly the difficulty
        assert_eq!(outcome.actor_roll, 13);
        assert_eq!(outcome.target_roll, 13);
        assert!(outcome.actor_success);
    }

    #[test]
    fn test_type_advantage_signal() {
        let actor = fighter("ash", 3);
        let target = fighter("bran", 3);
        let strike = CombatMove::new("strike", MoveType::Force, 3);
        let feint = CombatMove::new("feint", MoveType::Trick, 2);

        let constants = ContestConstants::default();
        let mut rng = make_test_rng();
        let outcome =
            resolve_opposed_with_rng(&actor, &strike, &target, &feint, true, &constants, &mut rng);
        assert_eq!(outcome.type_advantage, 1);

        let outcome =
            resolve_opposed_with_rng(&actor, &feint, &target, &strike, true, &constants, &mut rng);
        assert_eq!(outcome.type_advantage, -1);
    }
}
