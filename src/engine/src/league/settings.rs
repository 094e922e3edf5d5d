use crate::league::SchedulePolicy;
use crate::r#match::{ExtraInningsPolicy, StrategyKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GAMES_PER_TEAM: u32 = 143;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSettings {
    pub games_per_team: u32,
    pub seed: u64,
    pub strategy: StrategyKind,
    pub extra_innings: ExtraInningsPolicy,
    pub schedule_policy: SchedulePolicy,
    pub start_date: NaiveDate,
    pub record_events: bool,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        SeasonSettings {
            games_per_team: DEFAULT_GAMES_PER_TEAM,
            seed: 0,
            strategy: StrategyKind::AtBat,
            extra_innings: ExtraInningsPolicy::TieAfterCap,
            schedule_policy: SchedulePolicy::FillToTarget,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 27).unwrap_or_default(),
            record_events: true,
        }
    }
}

impl SeasonSettings {
    pub fn with_games_per_team(mut self, games_per_team: u32) -> Self {
        self.games_per_team = games_per_team;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_extra_innings(mut self, extra_innings: ExtraInningsPolicy) -> Self {
        self.extra_innings = extra_innings;
        self
    }

    pub fn with_schedule_policy(mut self, schedule_policy: SchedulePolicy) -> Self {
        self.schedule_policy = schedule_policy;
        self
    }
}
