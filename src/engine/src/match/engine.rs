use crate::club::{PlayerCollection, Team};
use crate::r#match::{
    BoxScore, GameOutcomeStrategy, GameResult, GameSquad, HalfInningContext, HalfInningResult,
    HalfInningSide, StrategyKind,
};
use log::{debug, warn};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const REGULATION_INNINGS: u8 = 9;
pub const EXTRA_INNINGS_CAP: u8 = 12;
pub const DECISIVE_INNINGS_CAP: u8 = 30;

/// What happens when the score is still level after the extra-inning window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraInningsPolicy {
    /// Stop after the 12th and credit both teams with a tie.
    #[default]
    TieAfterCap,
    /// Keep playing until someone leads; a tie is only recorded at the 30-inning safety cap.
    /// That tie is a deliberate last-resort guard against an endless game.
    Decisive,
}

impl ExtraInningsPolicy {
    pub fn max_innings(&self) -> u8 {
        match self {
            ExtraInningsPolicy::TieAfterCap => EXTRA_INNINGS_CAP,
            ExtraInningsPolicy::Decisive => DECISIVE_INNINGS_CAP,
        }
    }
}

impl FromStr for ExtraInningsPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "tie" => Ok(ExtraInningsPolicy::TieAfterCap),
            "decisive" => Ok(ExtraInningsPolicy::Decisive),
            other => Err(format!("unknown extra innings policy: {}", other)),
        }
    }
}

struct SideState {
    lineup_index: usize,
    pitcher_stamina: f32,
}

/// Working state of one game. Nothing here leaves the game until the result is committed.
pub struct GameState<'g> {
    home: &'g GameSquad,
    away: &'g GameSquad,
    home_side: SideState,
    away_side: SideState,
    box_score: BoxScore,
    record_events: bool,
}

impl<'g> GameState<'g> {
    pub fn new(home: &'g GameSquad, away: &'g GameSquad, record_events: bool) -> Self {
        GameState {
            home,
            away,
            home_side: SideState {
                lineup_index: 0,
                pitcher_stamina: home.pitcher.current_stamina,
            },
            away_side: SideState {
                lineup_index: 0,
                pitcher_stamina: away.pitcher.current_stamina,
            },
            box_score: BoxScore::default(),
            record_events,
        }
    }

    pub fn half(&mut self, side: HalfInningSide) -> HalfInningContext<'_, 'g> {
        match side {
            HalfInningSide::Top => HalfInningContext {
                batting: self.away,
                fielding: self.home,
                lineup_index: &mut self.away_side.lineup_index,
                pitcher_stamina: &mut self.home_side.pitcher_stamina,
                box_score: &mut self.box_score,
                record_events: self.record_events,
            },
            HalfInningSide::Bottom => HalfInningContext {
                batting: self.home,
                fielding: self.away,
                lineup_index: &mut self.home_side.lineup_index,
                pitcher_stamina: &mut self.away_side.pitcher_stamina,
                box_score: &mut self.box_score,
                record_events: self.record_events,
            },
        }
    }

    pub fn into_box_score(self) -> BoxScore {
        self.box_score
    }
}

/// Inning control loop: regulation, extra innings and walk-off rules.
pub struct GameSimulator {
    strategy: Box<dyn GameOutcomeStrategy>,
    extra_innings: ExtraInningsPolicy,
    record_events: bool,
}

impl GameSimulator {
    pub fn new(strategy: StrategyKind, extra_innings: ExtraInningsPolicy) -> Self {
        GameSimulator {
            strategy: strategy.create(),
            extra_innings,
            record_events: true,
        }
    }

    pub fn with_strategy(strategy: Box<dyn GameOutcomeStrategy>, extra_innings: ExtraInningsPolicy) -> Self {
        GameSimulator {
            strategy,
            extra_innings,
            record_events: true,
        }
    }

    pub fn with_events(mut self, record_events: bool) -> Self {
        self.record_events = record_events;
        self
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn extra_innings(&self) -> ExtraInningsPolicy {
        self.extra_innings
    }

    /// Builds both squads and plays. A team that cannot field nine players yields a void result.
    pub fn play(
        &self,
        home: &Team,
        away: &Team,
        players: &PlayerCollection,
        rng: &mut StdRng,
    ) -> GameResult {
        match (GameSquad::build(home, players), GameSquad::build(away, players)) {
            (Some(home_squad), Some(away_squad)) => self.simulate(&home_squad, &away_squad, rng),
            _ => {
                warn!(
                    "game {} vs {} voided: roster too small to field a lineup",
                    away.name, home.name
                );
                GameResult::void(home.id, away.id)
            }
        }
    }

    pub fn simulate(&self, home: &GameSquad, away: &GameSquad, rng: &mut StdRng) -> GameResult {
        let mut state = GameState::new(home, away, self.record_events);
        let max_innings = self.extra_innings.max_innings().max(REGULATION_INNINGS);

        let mut innings: Vec<HalfInningResult> = Vec::with_capacity(REGULATION_INNINGS as usize * 2);
        let mut home_score: u16 = 0;
        let mut away_score: u16 = 0;
        let mut walk_off = false;
        let mut inning: u8 = 1;

        while inning <= REGULATION_INNINGS || (inning <= max_innings && home_score == away_score) {
            let top = self.strategy.play_half_inning(
                state.half(HalfInningSide::Top),
                inning,
                HalfInningSide::Top,
                rng,
            );

            away_score += top.runs;
            innings.push(top);

            if inning >= REGULATION_INNINGS && home_score > away_score {
                break;
            }

            let trailing_before = home_score <= away_score;

            let mut bottom = self.strategy.play_half_inning(
                state.half(HalfInningSide::Bottom),
                inning,
                HalfInningSide::Bottom,
                rng,
            );

            home_score += bottom.runs;

            if inning >= REGULATION_INNINGS && home_score > away_score {
                walk_off = trailing_before;

                if walk_off && self.record_events {
                    bottom.events.push(format!("Walk-off! {} win it in the {}", home.team_name, inning));
                }

                innings.push(bottom);
                break;
            }

            innings.push(bottom);
            inning += 1;
        }

        debug!(
            "{} {} - {} {} ({} halves)",
            away.team_name,
            away_score,
            home_score,
            home.team_name,
            innings.len()
        );

        GameResult::completed(
            home,
            away,
            home_score,
            away_score,
            innings,
            walk_off,
            state.into_box_score(),
        )
    }
}
