//! Damage computation - turning contest signals into a final damage value

mod calculation;

pub use calculation::{calculate_damage, DamageBreakdown};
