use crate::creature::CreatureHandle;

/// The sole sanctioned caller of persistent base-stat mutation. A thin
/// façade: it only forwards to the creature's buff operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trainer;

impl Trainer {
    pub fn new() -> Self {
        Trainer
    }

    /// Permanently raise a creature's base health. An absent target is a
    /// silent no-op. Returns the new base health when applied. The amount is
    /// not validated; negative buffs weaken.
    pub fn apply_health_buff(&self, creature: Option<&CreatureHandle>, amount: i32) -> Option<i32> {
        creature.map(|c| c.borrow_mut().buff_base_health(amount))
    }

    /// Permanently raise a creature's base attack. An absent target is a
    /// silent no-op. Returns the new base attack when applied.
    pub fn apply_attack_buff(&self, creature: Option<&CreatureHandle>, amount: i32) -> Option<i32> {
        creature.map(|c| c.borrow_mut().buff_base_attack(amount))
    }
}
