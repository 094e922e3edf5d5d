use crate::club::{Player, PlayerCollection, Team};
use log::debug;
use serde::{Deserialize, Serialize};

pub const LINEUP_SIZE: usize = 9;

/// Batting order and starting pitcher for one game, by player id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub batters: Vec<u32>,
    pub starting_pitcher: u32,
    /// (starter taken out, bench player sent in)
    pub substitutions: Vec<(u32, u32)>,
}

impl Lineup {
    /// None when the roster cannot field nine players.
    pub fn select(team: &Team, players: &PlayerCollection) -> Option<Lineup> {
        let roster: Vec<&Player> = players.by_ids(&team.roster).collect();

        if roster.len() < LINEUP_SIZE {
            return None;
        }

        let (starters, bench) = roster.split_at(LINEUP_SIZE);

        let mut batters = Vec::with_capacity(LINEUP_SIZE);
        let mut substitutions = Vec::new();
        let mut used_bench = Vec::new();

        for starter in starters {
            if !starter.is_injured() {
                batters.push(starter.id);
                continue;
            }

            let replacement = bench
                .iter()
                .find(|p| !p.is_injured() && !used_bench.contains(&p.id));

            match replacement {
                Some(replacement) => {
                    debug!(
                        "{}: {} replaces injured {}",
                        team.name, replacement.full_name, starter.full_name
                    );

                    used_bench.push(replacement.id);
                    substitutions.push((starter.id, replacement.id));
                    batters.push(replacement.id);
                }
                None => batters.push(starter.id),
            }
        }

        let starting_pitcher = Self::best_pitcher(roster.iter().copied().filter(|p| !p.is_injured()))
            .or_else(|| Self::best_pitcher(roster.iter().copied()))?;

        Some(Lineup {
            batters,
            starting_pitcher: starting_pitcher.id,
            substitutions,
        })
    }

    /// Highest pitching skill; the earliest roster entry wins ties.
    fn best_pitcher<'p>(candidates: impl Iterator<Item = &'p Player>) -> Option<&'p Player> {
        candidates.fold(None::<&'p Player>, |best, candidate| match best {
            Some(current) if current.pitching_skill() >= candidate.pitching_skill() => Some(current),
            _ => Some(candidate),
        })
    }
}
