use crate::arena::events::{BattleEvent, EventBus};
use crate::arena::history::{BattleHistory, BattleOutcome, DrawCondition, VictoryCondition};
use crate::errors::{ArenaError, ArenaResult, RosterSide};
use crate::roster::{Roster, RosterHandle};
use schema::Arena;

/// Round cap: exceeding it forces "Draw (Stalemate)".
pub const MAX_ROUNDS: u32 = 20;

/// Source of arena picks. Battles draw one arena each; tests script the
/// sequence so outcomes are reproducible, while production play samples
/// uniformly from the three arenas.
#[derive(Debug, Clone)]
pub struct ArenaRng {
    scripted: Option<Vec<Arena>>,
    index: usize,
}

impl ArenaRng {
    pub fn new_for_test(picks: Vec<Arena>) -> Self {
        Self {
            scripted: Some(picks),
            index: 0,
        }
    }

    pub fn new_random() -> Self {
        Self {
            scripted: None,
            index: 0,
        }
    }

    /// Draw the arena for the next battle.
    pub fn next_arena(&mut self) -> Arena {
        match &self.scripted {
            Some(picks) => {
                if self.index >= picks.len() {
                    panic!(
                        "ArenaRng exhausted! Scripted {} picks but another battle started.",
                        picks.len()
                    );
                }
                let arena = picks[self.index];
                self.index += 1;
                arena
            }
            None => {
                use rand::Rng;
                let mut rng = rand::rng();
                match rng.random_range(0..3) {
                    0 => Arena::Sea,
                    1 => Arena::Air,
                    _ => Arena::Ground,
                }
            }
        }
    }
}

/// Everything one battle produced: the drawn arena, rounds fought, the
/// recorded outcome, and the full event stream.
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub arena: Arena,
    pub rounds: u32,
    pub outcome: BattleOutcome,
    pub events: EventBus,
}

/// Orchestrates battles between one fixed pair of rosters and records each
/// outcome. A battle runs Reset -> EligibilityFilter -> RoundLoop ->
/// Resolved; roster and creature state is mutated in place, so the same
/// engine can be invoked repeatedly on the same pair.
pub struct BattleArena {
    team_a: Option<RosterHandle>,
    team_b: Option<RosterHandle>,
    history: BattleHistory,
}

impl BattleArena {
    pub fn new(team_a: Option<RosterHandle>, team_b: Option<RosterHandle>) -> Self {
        BattleArena {
            team_a,
            team_b,
            history: BattleHistory::new(),
        }
    }

    pub fn history(&self) -> &BattleHistory {
        &self.history
    }

    /// Run one battle to completion. Returns a configuration error without
    /// recording anything if either roster reference is absent; every other
    /// path appends exactly one outcome to the history.
    pub fn start_battle(&mut self, rng: &mut ArenaRng) -> ArenaResult<BattleReport> {
        let team_a = self
            .team_a
            .clone()
            .ok_or(ArenaError::RosterMissing(RosterSide::A))?;
        let team_b = self
            .team_b
            .clone()
            .ok_or(ArenaError::RosterMissing(RosterSide::B))?;

        let mut events = EventBus::new();

        // Reset: both rosters return to their persistent baselines,
        // restoring members eliminated by the previous battle's arena.
        team_a.reset_all_members(&mut events);
        team_b.reset_all_members(&mut events);

        // EligibilityFilter: one arena per battle, applied to both sides
        // independently.
        let arena = rng.next_arena();
        events.push(BattleEvent::ArenaSelected { arena });
        team_a.apply_arena_eligibility(arena, &mut events);
        team_b.apply_arena_eligibility(arena, &mut events);

        let a_lives = team_a.has_living_members();
        let b_lives = team_b.has_living_members();
        if !a_lives && !b_lives {
            return self.finish(arena, 0, BattleOutcome::Draw(DrawCondition::ArenaElimination), events);
        }
        if !a_lives {
            let outcome = BattleOutcome::Victory {
                winner: team_b.label().to_string(),
                condition: VictoryCondition::ArenaElimination,
            };
            return self.finish(arena, 0, outcome, events);
        }
        if !b_lives {
            let outcome = BattleOutcome::Victory {
                winner: team_a.label().to_string(),
                condition: VictoryCondition::ArenaElimination,
            };
            return self.finish(arena, 0, outcome, events);
        }

        // RoundLoop: A sweeps first every round. A side that is wiped
        // mid-round never gets its counter-sweep.
        let mut round = 1u32;
        let rounds_fought = loop {
            events.push(BattleEvent::RoundStarted { number: round });

            team_a.attack_opponent(&team_b, &mut events);
            if !team_b.has_living_members() {
                break round;
            }

            team_b.attack_opponent(&team_a, &mut events);
            if !team_a.has_living_members() {
                break round;
            }

            events.push(BattleEvent::RoundEnded);
            round += 1;
            if round > MAX_ROUNDS {
                break MAX_ROUNDS;
            }
        };

        let outcome = resolve_outcome(&team_a, &team_b);
        self.finish(arena, rounds_fought, outcome, events)
    }

    fn finish(
        &mut self,
        arena: Arena,
        rounds: u32,
        outcome: BattleOutcome,
        mut events: EventBus,
    ) -> ArenaResult<BattleReport> {
        events.push(BattleEvent::BattleEnded {
            outcome: outcome.clone(),
        });
        self.history.record(outcome.clone());
        Ok(BattleReport {
            arena,
            rounds,
            outcome,
            events,
        })
    }
}

/// Determine the final outcome from post-loop living status. Both sides
/// still standing means the round cap fired; both sides down is kept for
/// totality even though the sequential round loop cannot produce it.
pub fn resolve_outcome(team_a: &Roster, team_b: &Roster) -> BattleOutcome {
    match (team_a.has_living_members(), team_b.has_living_members()) {
        (true, false) => BattleOutcome::Victory {
            winner: team_a.label().to_string(),
            condition: VictoryCondition::CombatElimination,
        },
        (false, true) => BattleOutcome::Victory {
            winner: team_b.label().to_string(),
            condition: VictoryCondition::CombatElimination,
        },
        (false, false) => BattleOutcome::Draw(DrawCondition::MutualElimination),
        (true, true) => BattleOutcome::Draw(DrawCondition::Stalemate),
    }
}
