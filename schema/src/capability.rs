use serde::{Deserialize, Serialize};
use strum::Display;

/// Movement capability tag. A creature's capability set is fixed at
/// construction and never mutated afterwards; arena eligibility is resolved
/// by querying the set, not by downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Capability {
    Fly,
    Swim,
    Run,
}

impl Capability {
    /// One-line locomotion flavor for roster introductions.
    pub fn flavor_line(&self, name: &str) -> String {
        match self {
            Capability::Fly => format!("{} is flying!", name),
            Capability::Swim => format!("{} is swimming!", name),
            Capability::Run => format!("{} is running!", name),
        }
    }
}
