use crate::league::{ScheduledGame, SeasonSchedule};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulePolicy {
    /// Repeat pairing rounds until every team reaches the target, skipping satisfied pairs.
    #[default]
    FillToTarget,
    /// Only whole round-robins; a team plays `target / (teams - 1)` times every opponent.
    CompleteRounds,
}

impl FromStr for SchedulePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "fill" | "fill-to-target" => Ok(SchedulePolicy::FillToTarget),
            "rounds" | "complete-rounds" => Ok(SchedulePolicy::CompleteRounds),
            other => Err(format!("unknown schedule policy: {}", other)),
        }
    }
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    pub fn generate(
        team_ids: &[u32],
        games_per_team: u32,
        policy: SchedulePolicy,
        start_date: NaiveDate,
    ) -> SeasonSchedule {
        let pairs = Self::pairings(team_ids);

        if pairs.is_empty() || games_per_team == 0 {
            return SeasonSchedule::new(Vec::new(), games_per_team, start_date);
        }

        let matchups = match policy {
            SchedulePolicy::FillToTarget => Self::fill_to_target(team_ids, &pairs, games_per_team),
            SchedulePolicy::CompleteRounds => {
                let rounds = games_per_team as usize / (team_ids.len() - 1);
                Self::complete_rounds(&pairs, rounds)
            }
        };

        let games = Self::assign_days(matchups);

        debug!(
            "generated schedule: {} teams, {} games, target {} per team",
            team_ids.len(),
            games.len(),
            games_per_team
        );

        SeasonSchedule::new(games, games_per_team, start_date)
    }

    /// Every unordered pair once, ordered by circle-method rounds so that
    /// consecutive pairs involve disjoint teams.
    pub fn pairings(team_ids: &[u32]) -> Vec<(u32, u32)> {
        if team_ids.len() < 2 {
            return Vec::new();
        }

        let mut slots: Vec<Option<u32>> = team_ids.iter().copied().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let n = slots.len();
        let mut pairs = Vec::with_capacity(team_ids.len() * (team_ids.len() - 1) / 2);

        for _ in 0..n - 1 {
            for i in 0..n / 2 {
                if let (Some(a), Some(b)) = (slots[i], slots[n - 1 - i]) {
                    pairs.push((a, b));
                }
            }

            slots[1..].rotate_right(1);
        }

        pairs
    }

    fn fill_to_target(team_ids: &[u32], pairs: &[(u32, u32)], target: u32) -> Vec<(u32, u32)> {
        let mut counts: HashMap<u32, u32> = team_ids.iter().map(|id| (*id, 0)).collect();
        let mut matchups = Vec::new();
        let mut round = 0usize;

        while counts.values().any(|count| *count < target) {
            for &(a, b) in pairs {
                if counts[&a] >= target && counts[&b] >= target {
                    continue;
                }

                matchups.push(Self::orient(a, b, round));

                *counts.entry(a).or_insert(0) += 1;
                *counts.entry(b).or_insert(0) += 1;
            }

            round += 1;
        }

        matchups
    }

    fn complete_rounds(pairs: &[(u32, u32)], rounds: usize) -> Vec<(u32, u32)> {
        (0..rounds)
            .flat_map(|round| pairs.iter().map(move |&(a, b)| Self::orient(a, b, round)))
            .collect()
    }

    /// Home/away parity flips every round.
    fn orient(a: u32, b: u32, round: usize) -> (u32, u32) {
        if round % 2 == 0 { (a, b) } else { (b, a) }
    }

    fn assign_days(matchups: Vec<(u32, u32)>) -> Vec<ScheduledGame> {
        let mut next_free: HashMap<u32, u32> = HashMap::new();

        matchups
            .into_iter()
            .enumerate()
            .map(|(idx, (home, away))| {
                let day = next_free
                    .get(&home)
                    .copied()
                    .unwrap_or(0)
                    .max(next_free.get(&away).copied().unwrap_or(0));

                next_free.insert(home, day + 1);
                next_free.insert(away, day + 1);

                ScheduledGame::new(idx as u32, home, away, day)
            })
            .collect()
    }
}
