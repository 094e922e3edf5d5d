use serde::{Deserialize, Serialize};

/// Season counters. Everything only ever grows during a season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub games: u32,

    // batting
    pub at_bats: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub rbi: u32,
    pub runs: u32,
    pub stolen_bases: u32,

    // pitching
    pub outs_pitched: u32,
    pub batters_faced: u32,
    pub runs_allowed: u32,
    pub hits_allowed: u32,
    pub walks_allowed: u32,
    pub pitcher_strikeouts: u32,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
}

fn ratio(numerator: f32, denominator: f32) -> f32 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl PlayerStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singles(&self) -> u32 {
        self.hits
            .saturating_sub(self.doubles + self.triples + self.home_runs)
    }

    pub fn total_bases(&self) -> u32 {
        self.singles() + 2 * self.doubles + 3 * self.triples + 4 * self.home_runs
    }

    pub fn batting_average(&self) -> f32 {
        ratio(self.hits as f32, self.at_bats as f32)
    }

    pub fn on_base_percentage(&self) -> f32 {
        ratio(
            (self.hits + self.walks) as f32,
            (self.at_bats + self.walks) as f32,
        )
    }

    pub fn slugging_percentage(&self) -> f32 {
        ratio(self.total_bases() as f32, self.at_bats as f32)
    }

    pub fn era(&self) -> f32 {
        ratio(self.runs_allowed as f32 * 27.0, self.outs_pitched as f32)
    }

    pub fn whip(&self) -> f32 {
        ratio(
            (self.walks_allowed + self.hits_allowed) as f32 * 3.0,
            self.outs_pitched as f32,
        )
    }

    /// Innings in box-score notation: 20 outs -> 6.2
    pub fn innings_pitched(&self) -> f32 {
        (self.outs_pitched / 3) as f32 + (self.outs_pitched % 3) as f32 / 10.0
    }

    pub fn merge(&mut self, other: &PlayerStatistics) {
        self.games += other.games;

        self.at_bats += other.at_bats;
        self.hits += other.hits;
        self.doubles += other.doubles;
        self.triples += other.triples;
        self.home_runs += other.home_runs;
        self.walks += other.walks;
        self.strikeouts += other.strikeouts;
        self.rbi += other.rbi;
        self.runs += other.runs;
        self.stolen_bases += other.stolen_bases;

        self.outs_pitched += other.outs_pitched;
        self.batters_faced += other.batters_faced;
        self.runs_allowed += other.runs_allowed;
        self.hits_allowed += other.hits_allowed;
        self.walks_allowed += other.walks_allowed;
        self.pitcher_strikeouts += other.pitcher_strikeouts;
        self.wins += other.wins;
        self.losses += other.losses;
        self.saves += other.saves;
    }
}
