use crate::club::PlayerStatistics;
use crate::r#match::{BaseRunningEngine, GameSquad, PlateAppearanceOutcome, PlateAppearanceResolver};
use log::warn;
use rand::RngExt;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

/// Stamina the pitcher loses for every batter faced.
pub const STAMINA_PER_BATTER: f32 = 1.0;

/// Upper bound on plate appearances in one half; only reachable with a hopeless pitching mismatch.
pub const MAX_PLATE_APPEARANCES_PER_HALF: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HalfInningSide {
    Top,
    Bottom,
}

impl Display for HalfInningSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            HalfInningSide::Top => write!(f, "Top"),
            HalfInningSide::Bottom => write!(f, "Bottom"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HalfInningResult {
    pub inning: u8,
    pub side: HalfInningSide,
    pub runs: u16,
    pub hits: u16,
    pub events: Vec<String>,
}

impl HalfInningResult {
    pub fn new(inning: u8, side: HalfInningSide) -> Self {
        HalfInningResult {
            inning,
            side,
            runs: 0,
            hits: 0,
            events: Vec::new(),
        }
    }
}

/// Per-player counters for one game, keyed by player id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoxScore {
    pub lines: BTreeMap<u32, PlayerStatistics>,
}

impl BoxScore {
    pub fn line(&mut self, player_id: u32) -> &mut PlayerStatistics {
        self.lines.entry(player_id).or_default()
    }

    pub fn get(&self, player_id: u32) -> Option<&PlayerStatistics> {
        self.lines.get(&player_id)
    }

    pub fn total<F: Fn(&PlayerStatistics) -> u32>(&self, ids: &[u32], counter: F) -> u32 {
        ids.iter()
            .filter_map(|id| self.lines.get(id))
            .map(counter)
            .sum()
    }
}

/// What one half-inning may touch: the two squads and the in-game state of each side.
pub struct HalfInningContext<'a, 'g> {
    pub batting: &'g GameSquad,
    pub fielding: &'g GameSquad,
    pub lineup_index: &'a mut usize,
    pub pitcher_stamina: &'a mut f32,
    pub box_score: &'a mut BoxScore,
    pub record_events: bool,
}

pub struct InningSimulator;

impl InningSimulator {
    pub fn simulate<R: RngExt>(
        ctx: HalfInningContext<'_, '_>,
        inning: u8,
        side: HalfInningSide,
        rng: &mut R,
    ) -> HalfInningResult {
        let mut result = HalfInningResult::new(inning, side);

        let lineup = &ctx.batting.batters;
        if lineup.is_empty() {
            return result;
        }

        let pitcher = &ctx.fielding.pitcher;
        let mut engine = BaseRunningEngine::new();
        let mut plate_appearances = 0;

        while !engine.is_complete() {
            if plate_appearances >= MAX_PLATE_APPEARANCES_PER_HALF {
                warn!(
                    "{} {}: {} batted around past the limit, closing the half",
                    side, inning, ctx.batting.team_name
                );
                break;
            }

            let batter = &lineup[*ctx.lineup_index % lineup.len()];

            let outcome = PlateAppearanceResolver::resolve(
                &batter.batter_profile(),
                &pitcher.pitcher_profile(*ctx.pitcher_stamina),
                rng,
            );

            *ctx.pitcher_stamina = (*ctx.pitcher_stamina - STAMINA_PER_BATTER).max(0.0);

            let transition = engine.apply(outcome);

            Self::record_batter(ctx.box_score.line(batter.id), outcome, transition.rbi);
            Self::record_pitcher(ctx.box_score.line(pitcher.id), outcome, transition.runs);

            result.runs += transition.runs as u16;
            if outcome.is_hit() {
                result.hits += 1;
            }

            if ctx.record_events && (transition.runs > 0 || outcome == PlateAppearanceOutcome::HomeRun) {
                result.events.push(Self::describe(
                    inning,
                    side,
                    &batter.name,
                    outcome,
                    transition.runs,
                ));
            }

            *ctx.lineup_index = (*ctx.lineup_index + 1) % lineup.len();
            plate_appearances += 1;
        }

        result
    }

    fn record_batter(line: &mut PlayerStatistics, outcome: PlateAppearanceOutcome, rbi: u8) {
        if outcome.is_at_bat() {
            line.at_bats += 1;
        }

        if outcome.is_hit() {
            line.hits += 1;
        }

        match outcome {
            PlateAppearanceOutcome::HomeRun => {
                line.home_runs += 1;
                line.runs += 1;
            }
            PlateAppearanceOutcome::Triple => line.triples += 1,
            PlateAppearanceOutcome::Double => line.doubles += 1,
            PlateAppearanceOutcome::Walk => line.walks += 1,
            PlateAppearanceOutcome::StrikeOut => line.strikeouts += 1,
            PlateAppearanceOutcome::Single | PlateAppearanceOutcome::Out => {}
        }

        line.rbi += rbi as u32;
    }

    fn record_pitcher(line: &mut PlayerStatistics, outcome: PlateAppearanceOutcome, runs: u8) {
        line.batters_faced += 1;
        line.runs_allowed += runs as u32;

        if outcome.is_hit() {
            line.hits_allowed += 1;
        }

        match outcome {
            PlateAppearanceOutcome::Walk => line.walks_allowed += 1,
            PlateAppearanceOutcome::StrikeOut => {
                line.pitcher_strikeouts += 1;
                line.outs_pitched += 1;
            }
            PlateAppearanceOutcome::Out => line.outs_pitched += 1,
            _ => {}
        }
    }

    fn describe(
        inning: u8,
        side: HalfInningSide,
        batter: &str,
        outcome: PlateAppearanceOutcome,
        runs: u8,
    ) -> String {
        match runs {
            0 => format!("{} {}: {} {}", side, inning, batter, outcome),
            1 => format!("{} {}: {} {}, 1 run scores", side, inning, batter, outcome),
            _ => format!("{} {}: {} {}, {} runs score", side, inning, batter, outcome, runs),
        }
    }
}
