use serde::{Deserialize, Serialize};
use std::fmt;

/// How a victory was earned.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictoryCondition {
    /// The opposing roster had no arena-suitable members left after filtering.
    ArenaElimination,
    /// The opposing roster was fought down to zero living members.
    CombatElimination,
}

/// Why a battle ended without a winner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCondition {
    /// Neither roster had an arena-suitable member.
    ArenaElimination,
    /// Both rosters ended with zero living members.
    MutualElimination,
    /// The round cap was exceeded with both rosters still standing.
    Stalemate,
}

/// Terminal outcome of one battle. Rendered labels match the classic
/// history format: a bare team name for a combat win, otherwise the
/// condition in parentheses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleOutcome {
    Victory {
        winner: String,
        condition: VictoryCondition,
    },
    Draw(DrawCondition),
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleOutcome::Victory { winner, condition } => match condition {
                VictoryCondition::CombatElimination => write!(f, "{}", winner),
                VictoryCondition::ArenaElimination => {
                    write!(f, "{} (Won by Arena Elimination)", winner)
                }
            },
            BattleOutcome::Draw(condition) => match condition {
                DrawCondition::ArenaElimination => write!(f, "Draw (Arena Elimination)"),
                DrawCondition::MutualElimination => write!(f, "Draw (Mutual Elimination)"),
                DrawCondition::Stalemate => write!(f, "Draw (Stalemate)"),
            },
        }
    }
}

/// Append-only record of battle outcomes across repeated engine invocations
/// on the same roster pair. Lives for the process lifetime.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BattleHistory {
    records: Vec<BattleOutcome>,
}

impl BattleHistory {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Append one outcome. Records are never mutated or removed.
    pub fn record(&mut self, outcome: BattleOutcome) {
        self.records.push(outcome);
    }

    /// All recorded outcomes in insertion order. The iterator is restartable:
    /// call again for a fresh pass.
    pub fn all(&self) -> impl Iterator<Item = &BattleOutcome> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Print the 1-indexed history listing.
    pub fn print(&self) {
        println!("--- Overall Battle History ---");
        if self.records.is_empty() {
            println!("No battles have been recorded yet.");
            return;
        }
        for (i, outcome) in self.records.iter().enumerate() {
            println!("Battle {} Winner: {}", i + 1, outcome);
        }
        println!("----------------------------");
    }
}
