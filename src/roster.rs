use crate::arena::events::{BattleEvent, EventBus};
use crate::creature::{CreatureHandle, CreatureStatus};
use schema::Arena;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Shared handle to a fully assembled roster. Every roster operation the
/// engine needs takes `&self` (mutation happens through the creature
/// handles), so plain `Rc` is enough to share one roster between the driver
/// and the arena engine.
pub type RosterHandle = Rc<Roster>;

/// A named, ordered group of creatures fighting as one side. Insertion order
/// is both display order and attack order. Members are shared handles; the
/// roster is reused across every battle of a process run.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    label: String,
    members: Vec<CreatureHandle>,
}

/// Read-only snapshot of a roster and its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterStatus {
    pub label: String,
    pub total_living_health: i32,
    pub members: Vec<CreatureStatus>,
}

impl Roster {
    pub fn new(label: impl Into<String>) -> Self {
        Roster {
            label: label.into(),
            members: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn members(&self) -> &[CreatureHandle] {
        &self.members
    }

    /// Append a creature to the roster. An absent handle is a silent no-op
    /// by policy, not an error.
    pub fn add_member(&mut self, creature: Option<CreatureHandle>) {
        if let Some(creature) = creature {
            self.members.push(creature);
        }
    }

    /// Look up a member handle by creature name, for driver-side buffing.
    pub fn member_named(&self, name: &str) -> Option<CreatureHandle> {
        self.members
            .iter()
            .find(|m| m.borrow().name() == name)
            .cloned()
    }

    /// Sum of current health over living members.
    pub fn total_living_health(&self) -> i32 {
        self.members
            .iter()
            .filter(|m| m.borrow().is_alive())
            .map(|m| m.borrow().current_health())
            .sum()
    }

    pub fn has_living_members(&self) -> bool {
        self.members.iter().any(|m| m.borrow().is_alive())
    }

    /// First member in roster order that is still alive.
    pub fn first_living_member(&self) -> Option<CreatureHandle> {
        self.members
            .iter()
            .find(|m| m.borrow().is_alive())
            .cloned()
    }

    /// Zero the current health of every living member the arena does not
    /// support. Base stats are untouched, so eliminated members return at
    /// the next reset; this is a one-way gate for the current battle only.
    pub fn apply_arena_eligibility(&self, arena: Arena, events: &mut EventBus) {
        for member in &self.members {
            let mut creature = member.borrow_mut();
            if !creature.is_alive() {
                continue;
            }
            if arena.supports(creature.capabilities()) {
                events.push(BattleEvent::CreatureSuited {
                    name: creature.name().to_string(),
                    arena,
                });
            } else {
                creature.set_current_health(0);
                events.push(BattleEvent::CreatureEliminated {
                    name: creature.name().to_string(),
                    arena,
                });
            }
        }
    }

    /// One attack sweep against the opposing roster: each living member, in
    /// roster order, strikes the opponent's first living member. The sweep
    /// stops as soon as no living opponent remains, so later attackers lose
    /// their action for the round.
    pub fn attack_opponent(&self, opponent: &Roster, events: &mut EventBus) {
        events.push(BattleEvent::RosterAttacks {
            attacker_label: self.label.clone(),
            defender_label: opponent.label.clone(),
        });
        for attacker in &self.members {
            if !attacker.borrow().is_alive() {
                continue;
            }
            let Some(target) = opponent.first_living_member() else {
                break;
            };
            let defeated = attacker
                .borrow()
                .perform_attack(&mut target.borrow_mut(), events);
            if defeated {
                events.push(BattleEvent::CreatureDefeated {
                    name: target.borrow().name().to_string(),
                    roster_label: opponent.label.clone(),
                });
            }
        }
    }

    /// Reset every member to its persistent baseline, undoing damage and
    /// arena elimination alike. Emits a status notification per member.
    pub fn reset_all_members(&self, events: &mut EventBus) {
        for member in &self.members {
            let mut creature = member.borrow_mut();
            creature.reset_to_base();
            events.push(BattleEvent::ResetApplied {
                name: creature.name().to_string(),
                health: creature.current_health(),
                attack: creature.current_attack(),
            });
        }
    }

    pub fn status(&self) -> RosterStatus {
        RosterStatus {
            label: self.label.clone(),
            total_living_health: self.total_living_health(),
            members: self.members.iter().map(|m| m.borrow().status()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::CreatureInst;
    use pretty_assertions::assert_eq;
    use schema::{BaseStats, Capability, Kind};

    fn handle(name: &str, kind: Kind, health: i32, attack: i32) -> CreatureHandle {
        CreatureInst::new(name, kind, BaseStats { health, attack }).into_handle()
    }

    fn swim_roster(label: &str, specs: &[(&str, i32, i32)]) -> Roster {
        let mut roster = Roster::new(label);
        for (name, health, attack) in specs {
            roster.add_member(Some(handle(name, Kind::Shark, *health, *attack)));
        }
        roster
    }

    #[test]
    fn test_add_member_ignores_absent_handle() {
        let mut roster = Roster::new("Alpha");
        roster.add_member(None);
        assert!(roster.members().is_empty());

        roster.add_member(Some(handle("Finny", Kind::Shark, 50, 30)));
        assert_eq!(roster.members().len(), 1);
    }

    #[test]
    fn test_total_living_health_skips_the_dead() {
        let roster = swim_roster("Alpha", &[("A", 50, 10), ("B", 40, 10), ("C", 30, 10)]);
        assert_eq!(roster.total_living_health(), 120);

        roster.members()[1].borrow_mut().set_current_health(0);
        assert_eq!(roster.total_living_health(), 80);
        assert!(roster.has_living_members());
    }

    #[test]
    fn test_first_living_member_follows_roster_order() {
        let roster = swim_roster("Alpha", &[("A", 50, 10), ("B", 40, 10)]);
        assert_eq!(roster.first_living_member().unwrap().borrow().name(), "A");

        roster.members()[0].borrow_mut().set_current_health(0);
        assert_eq!(roster.first_living_member().unwrap().borrow().name(), "B");

        roster.members()[1].borrow_mut().set_current_health(0);
        assert!(roster.first_living_member().is_none());
    }

    #[test]
    fn test_member_named_lookup() {
        let roster = swim_roster("Alpha", &[("Finny", 50, 30)]);
        assert!(roster.member_named("Finny").is_some());
        assert!(roster.member_named("Jaws").is_none());
    }

    #[test]
    fn test_sea_eligibility_zeroes_non_swimmers_only() {
        let mut roster = Roster::new("Mixed");
        roster.add_member(Some(handle("Finny", Kind::Shark, 50, 30)));
        roster.add_member(Some(handle("Leo", Kind::Lion, 100, 45)));
        roster.add_member(Some(handle("Sky", Kind::Eagle, 75, 35)));

        let mut events = EventBus::new();
        roster.apply_arena_eligibility(Arena::Sea, &mut events);

        assert_eq!(roster.members()[0].borrow().current_health(), 50);
        assert_eq!(roster.members()[1].borrow().current_health(), 0);
        assert_eq!(roster.members()[2].borrow().current_health(), 0);

        let eliminated: Vec<_> = events
            .events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::CreatureEliminated { .. }))
            .collect();
        assert_eq!(eliminated.len(), 2);
    }

    #[test]
    fn test_eligibility_skips_already_dead_members() {
        let roster = swim_roster("Alpha", &[("A", 50, 10), ("B", 40, 10)]);
        roster.members()[0].borrow_mut().set_current_health(0);

        let mut events = EventBus::new();
        roster.apply_arena_eligibility(Arena::Sea, &mut events);

        // Only the living swimmer gets a suitability event.
        assert_eq!(events.len(), 1);
        assert!(matches!(events.events()[0], BattleEvent::CreatureSuited { .. }));
    }

    #[test]
    fn test_attack_sweep_stops_when_opponent_is_wiped() {
        // Two attackers, but the first one finishes off the only defender:
        // the second attacker must not act this round.
        let attackers = swim_roster("Alpha", &[("A1", 50, 40), ("A2", 50, 40)]);
        let defenders = swim_roster("Bravo", &[("B1", 30, 10)]);

        let mut events = EventBus::new();
        attackers.attack_opponent(&defenders, &mut events);

        let strikes: Vec<_> = events
            .events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::AttackLanded { .. }))
            .collect();
        assert_eq!(strikes.len(), 1);
    }

    #[test]
    fn test_attack_sweep_retargets_after_a_kill() {
        // First defender dies to the first attacker; the second attacker
        // must fall through to the next living defender.
        let attackers = swim_roster("Alpha", &[("A1", 50, 40), ("A2", 50, 40)]);
        let defenders = swim_roster("Bravo", &[("B1", 30, 10), ("B2", 60, 10)]);

        let mut events = EventBus::new();
        attackers.attack_opponent(&defenders, &mut events);

        assert_eq!(defenders.members()[0].borrow().current_health(), 0);
        assert_eq!(defenders.members()[1].borrow().current_health(), 20);

        let defeated: Vec<_> = events
            .events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::CreatureDefeated { .. }))
            .collect();
        assert_eq!(defeated.len(), 1);
    }

    #[test]
    fn test_dead_attackers_do_not_act() {
        let attackers = swim_roster("Alpha", &[("A1", 50, 40), ("A2", 50, 40)]);
        attackers.members()[0].borrow_mut().set_current_health(0);
        let defenders = swim_roster("Bravo", &[("B1", 100, 10)]);

        let mut events = EventBus::new();
        attackers.attack_opponent(&defenders, &mut events);

        // Only A2 strikes.
        assert_eq!(defenders.members()[0].borrow().current_health(), 60);
        let strikes = events
            .events()
            .iter()
            .filter(|e| matches!(e, BattleEvent::AttackLanded { .. }))
            .count();
        assert_eq!(strikes, 1);
    }

    #[test]
    fn test_reset_restores_arena_eliminated_members() {
        let mut roster = Roster::new("Alpha");
        roster.add_member(Some(handle("Leo", Kind::Lion, 100, 45)));

        let mut events = EventBus::new();
        roster.apply_arena_eligibility(Arena::Sea, &mut events);
        assert!(!roster.has_living_members());

        roster.reset_all_members(&mut events);
        assert_eq!(roster.members()[0].borrow().current_health(), 100);
        assert!(roster.has_living_members());
    }

    #[test]
    fn test_status_snapshot() {
        let roster = swim_roster("Alpha", &[("A", 50, 10), ("B", 40, 10)]);
        roster.members()[1].borrow_mut().set_current_health(0);

        let status = roster.status();
        assert_eq!(status.label, "Alpha");
        assert_eq!(status.total_living_health, 50);
        assert_eq!(status.members.len(), 2);
        assert!(status.members[1].defeated);
        assert!(roster
            .members()
            .iter()
            .any(|m| m.borrow().has_capability(Capability::Swim)));
    }
}
