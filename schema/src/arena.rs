use crate::capability::Capability;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Battle environment. One arena is drawn per battle and gates which
/// capabilities keep a creature in the fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Arena {
    Sea,
    Air,
    Ground,
}

impl Arena {
    /// Whether a creature with the given capability set can fight here.
    ///
    /// Sea requires Swim, Air requires Fly, and Ground accepts either Run
    /// or Fly (a flier can always touch down).
    pub fn supports(self, capabilities: &[Capability]) -> bool {
        match self {
            Arena::Sea => capabilities.contains(&Capability::Swim),
            Arena::Air => capabilities.contains(&Capability::Fly),
            Arena::Ground => {
                capabilities.contains(&Capability::Run) || capabilities.contains(&Capability::Fly)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_accepts_fliers_without_run() {
        assert!(Arena::Ground.supports(&[Capability::Fly]));
        assert!(Arena::Ground.supports(&[Capability::Run]));
        assert!(!Arena::Ground.supports(&[Capability::Swim]));
    }

    #[test]
    fn test_sea_and_air_are_single_capability() {
        assert!(Arena::Sea.supports(&[Capability::Swim]));
        assert!(!Arena::Sea.supports(&[Capability::Fly, Capability::Run]));
        assert!(Arena::Air.supports(&[Capability::Fly, Capability::Run]));
        assert!(!Arena::Air.supports(&[Capability::Run]));
    }

    #[test]
    fn test_empty_capability_set_fits_nowhere() {
        use strum::IntoEnumIterator;
        for arena in Arena::iter() {
            assert!(!arena.supports(&[]));
        }
    }
}
