use crate::arena::history::BattleOutcome;
use schema::{Arena, Kind};
use serde::{Deserialize, Serialize};

/// Everything observable that happens during one battle. Events are the
/// engine's only side channel: engine code never prints, it pushes events,
/// and callers decide between debug output, narration, or silence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Battle setup
    ResetApplied {
        name: String,
        health: i32,
        attack: i32,
    },
    ArenaSelected {
        arena: Arena,
    },
    CreatureSuited {
        name: String,
        arena: Arena,
    },
    CreatureEliminated {
        name: String,
        arena: Arena,
    },

    // Round loop
    RoundStarted {
        number: u32,
    },
    RoundEnded,
    RosterAttacks {
        attacker_label: String,
        defender_label: String,
    },
    AttackLanded {
        attacker: String,
        attacker_kind: Kind,
        target: String,
    },
    DamageDealt {
        target: String,
        amount: i32,
        remaining_health: i32,
    },
    CreatureDefeated {
        name: String,
        roster_label: String,
    },

    // Battle end
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::ResetApplied { name, health, attack } => Some(format!(
                "{} has been reset. HP: {}, AP: {}",
                name, health, attack
            )),
            BattleEvent::ArenaSelected { arena } => {
                Some(format!("======= Battle starting in {} Arena! =======", arena))
            }
            BattleEvent::CreatureSuited { name, arena } => {
                Some(format!("{} is suited for {} Arena.", name, arena))
            }
            BattleEvent::CreatureEliminated { name, arena } => Some(format!(
                "{} is not suited for {} Arena and is eliminated for this battle.",
                name, arena
            )),
            BattleEvent::RoundStarted { number } => Some(format!("--- Round {} ---", number)),
            BattleEvent::RoundEnded => {
                None // Silent - round ending is obvious from context
            }
            BattleEvent::RosterAttacks { attacker_label, defender_label } => Some(format!(
                "Team {} is attacking Team {}:",
                attacker_label, defender_label
            )),
            BattleEvent::AttackLanded { attacker, attacker_kind, target } => {
                Some(attacker_kind.attack_flavor(attacker, target))
            }
            BattleEvent::DamageDealt { target, amount, remaining_health } => Some(format!(
                "{} takes {} damage. Current health: {}",
                target, amount, remaining_health
            )),
            BattleEvent::CreatureDefeated { name, roster_label } => Some(format!(
                "{} from Team {} has been defeated!",
                name, roster_label
            )),
            BattleEvent::BattleEnded { outcome } => Some(format!("Battle result: {}", outcome)),
        }
    }
}

/// Ordered collection of the events of one battle.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events using their formatted text. Silent events are skipped.
    pub fn print_formatted(&self) {
        for event in &self.events {
            if let Some(formatted) = event.format() {
                println!("{}", formatted);
            }
        }
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}
