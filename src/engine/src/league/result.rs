use crate::club::Injury;
use crate::league::LeagueTable;
use crate::r#match::GameResult;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    Completed,
    Cancelled,
}

/// Everything committed for one schedule day.
#[derive(Debug, Clone)]
pub struct DayResult {
    pub day: u32,
    pub date: NaiveDate,
    pub games: Vec<GameResult>,
    pub injuries: Vec<(u32, Injury)>,
    pub recovered: Vec<u32>,
    pub level_ups: u32,
    pub cancelled: bool,
}

impl DayResult {
    pub fn new(day: u32, date: NaiveDate) -> Self {
        DayResult {
            day,
            date,
            games: Vec::new(),
            injuries: Vec::new(),
            recovered: Vec::new(),
            level_ups: 0,
            cancelled: false,
        }
    }

    pub fn completed_games(&self) -> usize {
        self.games.iter().filter(|g| g.is_completed()).count()
    }

    pub fn void_games(&self) -> usize {
        self.games.len() - self.completed_games()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonProgress {
    pub day: u32,
    pub days_total: u32,
    pub games_played: usize,
    pub games_total: usize,
}

impl SeasonProgress {
    pub fn fraction(&self) -> f32 {
        if self.games_total == 0 {
            1.0
        } else {
            self.games_played as f32 / self.games_total as f32
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonResult {
    pub status: RunStatus,
    pub days_played: u32,
    pub games_played: usize,
    pub void_games: usize,
    pub injuries: usize,
    pub elapsed_ms: u128,
    pub table: LeagueTable,
}

impl SeasonResult {
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }
}
