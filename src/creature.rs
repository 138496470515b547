use crate::arena::events::{BattleEvent, EventBus};
use schema::{BaseStats, Capability, Kind};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a creature. The driver owns its handles and rosters hold
/// clones of them; everything runs on a single logical thread, so interior
/// mutability is enough. A pair of opposing rosters must not share a handle.
pub type CreatureHandle = Rc<RefCell<CreatureInst>>;

/// One creature instance: persistent base stats plus battle-scoped current
/// stats. Base stats move only through the trainer buff operations; current
/// stats are rewritten every battle by reset, arena elimination, and damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureInst {
    name: String,
    kind: Kind,
    capabilities: Vec<Capability>,
    base_health: i32,
    base_attack: i32,
    current_health: i32,
    current_attack: i32,
}

/// Read-only snapshot of a creature's battle state, suitable for textual or
/// structured display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureStatus {
    pub name: String,
    pub kind: Kind,
    pub current_health: i32,
    pub current_attack: i32,
    pub defeated: bool,
}

impl CreatureInst {
    /// Create a creature with the default capability set for its kind.
    pub fn new(name: impl Into<String>, kind: Kind, stats: BaseStats) -> Self {
        Self::with_capabilities(name, kind, stats, kind.default_capabilities())
    }

    /// Create a creature with an explicit capability set. The set is fixed
    /// for the life of the creature.
    pub fn with_capabilities(
        name: impl Into<String>,
        kind: Kind,
        stats: BaseStats,
        capabilities: Vec<Capability>,
    ) -> Self {
        CreatureInst {
            name: name.into(),
            kind,
            capabilities,
            base_health: stats.health,
            base_attack: stats.attack,
            current_health: stats.health.max(0),
            current_attack: stats.attack,
        }
    }

    /// Wrap this creature in a shared handle for roster membership.
    pub fn into_handle(self) -> CreatureHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Whether this creature's fixed capability set contains the tag.
    pub fn has_capability(&self, tag: Capability) -> bool {
        self.capabilities.contains(&tag)
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn current_attack(&self) -> i32 {
        self.current_attack
    }

    pub fn base_health(&self) -> i32 {
        self.base_health
    }

    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    /// Subtract `amount` from current health, clamping at zero. Returns true
    /// if the creature is defeated afterwards. A negative amount heals; the
    /// amount is deliberately not validated.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current_health = (self.current_health - amount).max(0);
        !self.is_alive()
    }

    /// Overwrite current health for this battle, clamping at zero. Used by
    /// the arena eligibility gate; base health is untouched.
    pub fn set_current_health(&mut self, value: i32) {
        self.current_health = value.max(0);
    }

    /// Restore both current stats to their persistent baselines.
    pub fn reset_to_base(&mut self) {
        self.current_health = self.base_health.max(0);
        self.current_attack = self.base_attack;
    }

    /// Raise the persistent health baseline and mirror it into the current
    /// value immediately. Returns the new base. Called via the trainer in
    /// normal operation.
    pub fn buff_base_health(&mut self, amount: i32) -> i32 {
        self.base_health += amount;
        self.current_health = self.base_health.max(0);
        self.base_health
    }

    /// Raise the persistent attack baseline and mirror it into the current
    /// value immediately. Returns the new base.
    pub fn buff_base_attack(&mut self, amount: i32) -> i32 {
        self.base_attack += amount;
        self.current_attack = self.base_attack;
        self.base_attack
    }

    /// Strike `target` with this creature's current attack power, emitting
    /// the kind-flavored narration and the damage record. Returns true if
    /// the target was defeated by this hit.
    pub fn perform_attack(&self, target: &mut CreatureInst, events: &mut EventBus) -> bool {
        events.push(BattleEvent::AttackLanded {
            attacker: self.name.clone(),
            attacker_kind: self.kind,
            target: target.name.clone(),
        });
        let amount = self.current_attack;
        let defeated = target.take_damage(amount);
        events.push(BattleEvent::DamageDealt {
            target: target.name.clone(),
            amount,
            remaining_health: target.current_health,
        });
        defeated
    }

    pub fn status(&self) -> CreatureStatus {
        CreatureStatus {
            name: self.name.clone(),
            kind: self.kind,
            current_health: self.current_health,
            current_attack: self.current_attack,
            defeated: !self.is_alive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shark(health: i32, attack: i32) -> CreatureInst {
        CreatureInst::new("Finny", Kind::Shark, BaseStats { health, attack })
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut c = shark(50, 30);
        assert!(!c.take_damage(20));
        assert_eq!(c.current_health(), 30);
        assert!(c.take_damage(100));
        assert_eq!(c.current_health(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_negative_damage_heals() {
        // Negative amounts are accepted without validation and increase
        // health; this mirrors the unvalidated buff path.
        let mut c = shark(50, 30);
        c.take_damage(30);
        c.take_damage(-10);
        assert_eq!(c.current_health(), 30);
    }

    #[test]
    fn test_reset_restores_base_after_any_damage() {
        let mut c = shark(50, 30);
        c.take_damage(49);
        c.reset_to_base();
        assert_eq!(c.current_health(), 50);
        assert_eq!(c.current_attack(), 30);

        c.take_damage(500);
        c.reset_to_base();
        assert_eq!(c.current_health(), 50);
    }

    #[test]
    fn test_buffs_update_base_and_current_together() {
        let mut c = shark(50, 30);
        let new_base = c.buff_base_health(25);
        assert_eq!(new_base, 75);
        assert_eq!(c.base_health(), 75);
        assert_eq!(c.current_health(), 75);

        c.buff_base_attack(10);
        assert_eq!(c.base_attack(), 40);
        assert_eq!(c.current_attack(), 40);
    }

    #[test]
    fn test_buffs_compose_additively() {
        let mut split = shark(50, 30);
        split.buff_base_health(10);
        split.buff_base_health(15);

        let mut single = shark(50, 30);
        single.buff_base_health(25);

        assert_eq!(split.base_health(), single.base_health());
        assert_eq!(split.current_health(), single.current_health());
    }

    #[test]
    fn test_buff_survives_reset_damage_does_not() {
        let mut c = shark(50, 30);
        c.buff_base_attack(25);
        c.take_damage(40);
        c.reset_to_base();
        assert_eq!(c.current_health(), 50);
        assert_eq!(c.current_attack(), 55);
    }

    #[test]
    fn test_capability_set_fixed_at_construction() {
        let eagle = CreatureInst::new("Sky", Kind::Eagle, BaseStats { health: 75, attack: 35 });
        assert!(eagle.has_capability(Capability::Fly));
        assert!(eagle.has_capability(Capability::Run));
        assert!(!eagle.has_capability(Capability::Swim));

        let odd = CreatureInst::with_capabilities(
            "Nessie",
            Kind::Shark,
            BaseStats { health: 80, attack: 20 },
            vec![Capability::Swim, Capability::Run],
        );
        assert!(odd.has_capability(Capability::Run));
    }

    #[test]
    fn test_perform_attack_uses_current_attack_and_narrates() {
        let attacker = shark(50, 30);
        let mut target = CreatureInst::new("Sky", Kind::Eagle, BaseStats { health: 75, attack: 35 });
        let mut events = EventBus::new();

        let defeated = attacker.perform_attack(&mut target, &mut events);
        assert!(!defeated);
        assert_eq!(target.current_health(), 45);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events.events()[0],
            BattleEvent::AttackLanded { attacker_kind: Kind::Shark, .. }
        ));
        assert!(matches!(
            events.events()[1],
            BattleEvent::DamageDealt { amount: 30, remaining_health: 45, .. }
        ));
    }

    #[test]
    fn test_status_reflects_latest_mutation() {
        let mut c = shark(50, 30);
        c.take_damage(50);
        let status = c.status();
        assert_eq!(status.current_health, 0);
        assert!(status.defeated);
        assert_eq!(status.kind, Kind::Shark);
    }
}
