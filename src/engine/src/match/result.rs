use crate::club::{Injury, InjuryModel};
use crate::league::League;
use crate::r#match::{BoxScore, GameSquad, HalfInningResult, HalfInningSide, STAMINA_PER_BATTER};
use log::{debug, info};
use rand::RngExt;
use serde::Serialize;
use std::cmp::Ordering;

/// Stamina every participant loses for playing a game, on top of pitching load.
pub const POST_GAME_FATIGUE: f32 = 5.0;
pub const GAME_EXPERIENCE: u32 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub home_team_id: u32,
    pub away_team_id: u32,

    pub home_score: u16,
    pub away_score: u16,
    pub innings: Vec<HalfInningResult>,
    pub walk_off: bool,

    pub home_pitcher: Option<u32>,
    pub away_pitcher: Option<u32>,
    pub winning_pitcher: Option<u32>,
    pub losing_pitcher: Option<u32>,

    pub box_score: BoxScore,
    pub participants: Vec<u32>,

    completed: bool,
}

impl GameResult {
    /// Game that could not be played; it never touches standings or stats.
    pub fn void(home_team_id: u32, away_team_id: u32) -> Self {
        GameResult {
            home_team_id,
            away_team_id,
            home_score: 0,
            away_score: 0,
            innings: Vec::new(),
            walk_off: false,
            home_pitcher: None,
            away_pitcher: None,
            winning_pitcher: None,
            losing_pitcher: None,
            box_score: BoxScore::default(),
            participants: Vec::new(),
            completed: false,
        }
    }

    pub fn completed(
        home: &GameSquad,
        away: &GameSquad,
        home_score: u16,
        away_score: u16,
        innings: Vec<HalfInningResult>,
        walk_off: bool,
        mut box_score: BoxScore,
    ) -> Self {
        let mut participants = home.participants();
        participants.extend(away.participants());

        for id in &participants {
            box_score.line(*id).games += 1;
        }

        let (winning_pitcher, losing_pitcher) = match home_score.cmp(&away_score) {
            Ordering::Greater => (Some(home.pitcher.id), Some(away.pitcher.id)),
            Ordering::Less => (Some(away.pitcher.id), Some(home.pitcher.id)),
            Ordering::Equal => (None, None),
        };

        if let Some(id) = winning_pitcher {
            box_score.line(id).wins += 1;
        }

        if let Some(id) = losing_pitcher {
            box_score.line(id).losses += 1;
        }

        GameResult {
            home_team_id: home.team_id,
            away_team_id: away.team_id,
            home_score,
            away_score,
            innings,
            walk_off,
            home_pitcher: Some(home.pitcher.id),
            away_pitcher: Some(away.pitcher.id),
            winning_pitcher,
            losing_pitcher,
            box_score,
            participants,
            completed: true,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_tie(&self) -> bool {
        self.completed && self.home_score == self.away_score
    }

    pub fn winner(&self) -> Option<u32> {
        if !self.completed {
            return None;
        }

        match self.home_score.cmp(&self.away_score) {
            Ordering::Greater => Some(self.home_team_id),
            Ordering::Less => Some(self.away_team_id),
            Ordering::Equal => None,
        }
    }

    pub fn loser(&self) -> Option<u32> {
        self.winner().map(|winner| {
            if winner == self.home_team_id {
                self.away_team_id
            } else {
                self.home_team_id
            }
        })
    }

    pub fn innings_played(&self) -> u8 {
        self.innings.iter().map(|half| half.inning).max().unwrap_or(0)
    }

    pub fn line_score(&self, side: HalfInningSide) -> Vec<u16> {
        self.innings
            .iter()
            .filter(|half| half.side == side)
            .map(|half| half.runs)
            .collect()
    }

    pub fn hits(&self, side: HalfInningSide) -> u16 {
        self.innings
            .iter()
            .filter(|half| half.side == side)
            .map(|half| half.hits)
            .sum()
    }

    pub fn events(&self) -> impl Iterator<Item = &String> {
        self.innings.iter().flat_map(|half| half.events.iter())
    }

    /// Commits the game: team records, season stats, fatigue, experience and in-game injury checks.
    pub fn process<R: RngExt>(&self, league: &mut League, rng: &mut R) -> GameCommit {
        let mut commit = GameCommit::new(self.home_team_id, self.away_team_id);

        if !self.completed {
            return commit;
        }

        let (home, away) = league
            .teams
            .pair_mut(self.home_team_id, self.away_team_id)
            .unwrap_or_else(|| {
                panic!(
                    "game refers to teams missing from the league: {} vs {}",
                    self.away_team_id, self.home_team_id
                )
            });

        match self.home_score.cmp(&self.away_score) {
            Ordering::Greater => {
                home.record_win();
                away.record_loss();
            }
            Ordering::Less => {
                away.record_win();
                home.record_loss();
            }
            Ordering::Equal => {
                home.record_tie();
                away.record_tie();
            }
        }

        for (id, line) in &self.box_score.lines {
            if let Some(player) = league.players.find_mut(*id) {
                player.statistics.merge(line);
            }
        }

        for id in &self.participants {
            let Some(player) = league.players.find_mut(*id) else {
                continue;
            };

            let batters_faced = self.box_score.get(*id).map_or(0, |line| line.batters_faced);

            player.apply_fatigue(POST_GAME_FATIGUE + batters_faced as f32 * STAMINA_PER_BATTER);
            commit.level_ups += player.gain_experience(GAME_EXPERIENCE, rng);

            if let Some(injury) = InjuryModel::check_for_injury(player, true, rng) {
                info!(
                    "🚑 {} injured: {} ({}, {} days)",
                    player.full_name, injury.description, injury.severity, injury.days_remaining
                );
                commit.injuries.push((*id, injury));
            }
        }

        debug!(
            "committed game {} vs {}: {} injuries",
            self.away_team_id,
            self.home_team_id,
            commit.injuries.len()
        );

        commit
    }
}

/// Side effects produced while committing a game.
#[derive(Debug, Clone, Default)]
pub struct GameCommit {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub injuries: Vec<(u32, Injury)>,
    pub level_ups: u32,
}

impl GameCommit {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        GameCommit {
            home_team_id,
            away_team_id,
            injuries: Vec::new(),
            level_ups: 0,
        }
    }
}
