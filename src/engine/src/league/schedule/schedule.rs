use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub home: u16,
    pub away: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub day: u32,
    pub played: bool,
    pub score: Option<GameScore>,
}

impl ScheduledGame {
    pub fn new(id: u32, home_team_id: u32, away_team_id: u32, day: u32) -> Self {
        ScheduledGame {
            id,
            home_team_id,
            away_team_id,
            day,
            played: false,
            score: None,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// One season's fixture list. Teams are referenced by id only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonSchedule {
    pub games: Vec<ScheduledGame>,
    pub target_games: u32,
    pub start_date: NaiveDate,
}

impl SeasonSchedule {
    pub fn new(games: Vec<ScheduledGame>, target_games: u32, start_date: NaiveDate) -> Self {
        SeasonSchedule {
            games,
            target_games,
            start_date,
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn game(&self, id: u32) -> Option<&ScheduledGame> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn games_on(&self, day: u32) -> impl Iterator<Item = &ScheduledGame> {
        self.games.iter().filter(move |g| g.day == day)
    }

    pub fn team_games(&self, team_id: u32) -> impl Iterator<Item = &ScheduledGame> {
        self.games.iter().filter(move |g| g.involves(team_id))
    }

    pub fn next_for(&self, team_id: u32) -> Option<&ScheduledGame> {
        self.games
            .iter()
            .find(|g| !g.played && g.involves(team_id))
    }

    /// Number of distinct days, i.e. one past the last day index.
    pub fn days(&self) -> u32 {
        self.games.iter().map(|g| g.day + 1).max().unwrap_or(0)
    }

    /// First day that still has an unplayed game.
    pub fn current_day(&self) -> Option<u32> {
        self.games
            .iter()
            .filter(|g| !g.played)
            .map(|g| g.day)
            .min()
    }

    pub fn date_of(&self, day: u32) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(day as u64))
            .unwrap_or(self.start_date)
    }

    pub fn played_count(&self) -> usize {
        self.games.iter().filter(|g| g.played).count()
    }

    pub fn is_complete(&self) -> bool {
        self.games.iter().all(|g| g.played)
    }

    pub fn mark_played(&mut self, id: u32, score: Option<GameScore>) {
        if let Some(game) = self.games.iter_mut().find(|g| g.id == id) {
            game.played = true;
            game.score = score;
        }
    }

    /// Scheduled games per team.
    pub fn realized_counts(&self) -> BTreeMap<u32, u32> {
        let mut counts = BTreeMap::new();

        for game in &self.games {
            *counts.entry(game.home_team_id).or_insert(0) += 1;
            *counts.entry(game.away_team_id).or_insert(0) += 1;
        }

        counts
    }

    /// Realized count minus the requested target, per team.
    pub fn drift(&self) -> BTreeMap<u32, i64> {
        self.realized_counts()
            .into_iter()
            .map(|(team_id, count)| (team_id, count as i64 - self.target_games as i64))
            .collect()
    }

    pub fn home_games(&self, team_id: u32) -> usize {
        self.games.iter().filter(|g| g.home_team_id == team_id).count()
    }
}
