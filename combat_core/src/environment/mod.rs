//! EnvironmentEngine - Once-per-round passive hazard effects
//!
//! Hazards apply to every combatant independent of chosen actions. Each
//! active tag's effect is applied exactly once per combatant per round.

use crate::combatant::CombatantState;
use crate::config::HazardConstants;
use crate::types::{Domain, EnvironmentTag, Status};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-combatant report for one hazard application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardReport {
    pub tag: EnvironmentTag,
    pub combatant: String,
    /// Health change (negative for damage)
    pub health_delta: i32,
    /// Stamina change (negative for drain)
    pub stamina_delta: i32,
    /// Spirit change (positive for restoration)
    pub spirit_delta: i32,
    /// Status added by this application, if any
    pub status_added: Option<Status>,
}

impl HazardReport {
    fn neutral(tag: EnvironmentTag, combatant: &str) -> Self {
        HazardReport {
            tag,
            combatant: combatant.to_string(),
            health_delta: 0,
            stamina_delta: 0,
            spirit_delta: 0,
            status_added: None,
        }
    }

    /// Whether this application changed nothing
    pub fn is_neutral(&self) -> bool {
        self.health_delta == 0
            && self.stamina_delta == 0
            && self.spirit_delta == 0
            && self.status_added.is_none()
    }
}

/// Apply every active hazard tag to every combatant, once each, using an
/// ambient RNG
pub fn apply_round<'a>(
    tags: &[EnvironmentTag],
    combatants: impl IntoIterator<Item = &'a mut CombatantState>,
    constants: &HazardConstants,
) -> Vec<HazardReport> {
    let mut rng = rand::thread_rng();
    apply_round_with_rng(tags, combatants, constants, &mut rng)
}

/// Apply every active hazard tag to every combatant with a provided RNG
/// (for deterministic testing)
pub fn apply_round_with_rng<'a>(
    tags: &[EnvironmentTag],
    combatants: impl IntoIterator<Item = &'a mut CombatantState>,
    constants: &HazardConstants,
    rng: &mut impl Rng,
) -> Vec<HazardReport> {
    // Duplicate tags in the active set still apply only once
    let mut seen: Vec<EnvironmentTag> = Vec::new();
    for &tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }

    let mut reports = Vec::new();
    for combatant in combatants {
        for &tag in &seen {
            reports.push(apply_tag(tag, combatant, constants, rng));
        }
    }
    reports
}

/// Apply a single hazard tag to a single combatant
pub fn apply_tag(
    tag: EnvironmentTag,
    combatant: &mut CombatantState,
    constants: &HazardConstants,
    rng: &mut impl Rng,
) -> HazardReport {
    let mut report = HazardReport::neutral(tag, &combatant.name);

    match tag {
        EnvironmentTag::Burning => {
            let mut chip = constants.burn_chip as f64;
            if combatant.is_strong(Domain::Fire) {
                chip *= 0.5;
            }
            if combatant.is_weak(Domain::Water) {
                chip *= 1.5;
            }
            if combatant.statuses.contains(Status::Protected) {
                chip *= 0.7;
            }
            report.health_delta = -combatant.health.spend(chip.round() as i32);
            if combatant.statuses.add(Status::Burning) {
                report.status_added = Some(Status::Burning);
            }
        }
        EnvironmentTag::Freezing => {
            let mut drain = constants.freeze_drain as f64;
            if combatant.is_weak(Domain::Ice) {
                drain *= 1.5;
            }
            if combatant.is_strong(Domain::Fire) {
                drain *= 0.5;
            }
            report.stamina_delta = -combatant.stamina.spend(drain.round() as i32);
            if combatant.is_weak(Domain::Ice) {
                report.health_delta = -combatant.health.spend(1);
                if combatant.statuses.add(Status::Slowed) {
                    report.status_added = Some(Status::Slowed);
                }
            }
        }
        EnvironmentTag::Electrified => {
            let mut shock = constants.shock_damage as f64;
            if combatant.is_strong(Domain::Spark) {
                shock *= 0.5;
            }
            if combatant.rating(Domain::Water) > 0 {
                shock *= 1.5;
            }
            if combatant.statuses.contains(Status::Soaked) {
                shock *= 1.5;
            }
            report.health_delta = -combatant.health.spend(shock.round() as i32);
            if rng.gen::<f64>() < constants.shock_stun_chance && combatant.statuses.add(Status::Stunned) {
                report.status_added = Some(Status::Stunned);
            }
        }
        EnvironmentTag::Inspirational => {
            let mut restore = constants.inspire_restore;
            if combatant.rating(Domain::Spirit) > 0 {
                restore *= 2;
            }
            report.spirit_delta = combatant.spirit.restore(restore);
            if rng.gen::<f64>() < constants.inspire_chance && combatant.statuses.add(Status::Inspired) {
                report.status_added = Some(Status::Inspired);
            }
        }
        EnvironmentTag::Toxic => {
            let mut poison = constants.toxin_damage as f64;
            if combatant.is_strong(Domain::Nature) {
                poison *= 0.5;
            }
            if combatant.statuses.contains(Status::Weakened) {
                poison *= 1.5;
            }
            report.health_delta = -combatant.health.spend(poison.round() as i32);
            if rng.gen::<f64>() < constants.poison_chance && combatant.statuses.add(Status::Poisoned) {
                report.status_added = Some(Status::Poisoned);
            }
        }
        // Flooded, Windy, Chaotic, Confined shape exchange damage, not
        // round upkeep
        EnvironmentTag::Flooded
        | EnvironmentTag::Windy
        | EnvironmentTag::Chaotic
        | EnvironmentTag::Confined => {}
    }

    report
}
