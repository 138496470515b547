use crate::capability::Capability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Creature kind. Fixed at creation; discriminates attack flavor and the
/// default capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Lion,
    Elephant,
    Eagle,
    Shark,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Kind {
    /// The capability set a creature of this kind is born with.
    pub fn default_capabilities(self) -> Vec<Capability> {
        match self {
            Kind::Lion => vec![Capability::Run],
            Kind::Elephant => vec![Capability::Run],
            Kind::Eagle => vec![Capability::Fly, Capability::Run],
            Kind::Shark => vec![Capability::Swim],
        }
    }

    /// The attack narration for this kind.
    pub fn attack_flavor(self, attacker: &str, target: &str) -> String {
        match self {
            Kind::Lion => format!("{} bites {}!", attacker, target),
            Kind::Elephant => format!("{} attacks {} with ivory!", attacker, target),
            Kind::Eagle => format!("{} attacks {} from the air!", attacker, target),
            Kind::Shark => format!("{} bites {} in the sea!", attacker, target),
        }
    }
}

/// Persistent baseline stats for one creature. Health and attack use signed
/// integers: negative buff and damage amounts are accepted without
/// validation, and health clamps at zero on every write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: i32,
    pub attack: i32,
}
