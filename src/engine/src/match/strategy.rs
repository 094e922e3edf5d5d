use crate::r#match::{
    HalfInningContext, HalfInningResult, HalfInningSide, InningSimulator, STAMINA_PER_BATTER,
};
use crate::shared::RandomUtils;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a half-inning is turned into runs. The inning loop around it is shared.
pub trait GameOutcomeStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn play_half_inning(
        &self,
        ctx: HalfInningContext<'_, '_>,
        inning: u8,
        side: HalfInningSide,
        rng: &mut StdRng,
    ) -> HalfInningResult;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Plate appearance by plate appearance.
    #[default]
    AtBat,
    /// Team-rating Poisson draw per half-inning.
    RunDistribution,
}

impl StrategyKind {
    pub fn create(&self) -> Box<dyn GameOutcomeStrategy> {
        match self {
            StrategyKind::AtBat => Box::new(AtBatStrategy),
            StrategyKind::RunDistribution => Box::new(RunDistributionStrategy),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "atbat" | "at-bat" => Ok(StrategyKind::AtBat),
            "distribution" => Ok(StrategyKind::RunDistribution),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}

pub struct AtBatStrategy;

impl GameOutcomeStrategy for AtBatStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::AtBat
    }

    fn play_half_inning(
        &self,
        ctx: HalfInningContext<'_, '_>,
        inning: u8,
        side: HalfInningSide,
        rng: &mut StdRng,
    ) -> HalfInningResult {
        InningSimulator::simulate(ctx, inning, side, rng)
    }
}

pub struct RunDistributionStrategy;

impl RunDistributionStrategy {
    pub const RUNS_PER_GAME: f64 = 3.8;
    pub const RATING_SPREAD: f64 = 150.0;
    pub const MIN_LAMBDA: f64 = 0.01;

    /// Expected runs in one half-inning for an offense against a pitching staff.
    pub fn lambda(offense: f32, defense: f32) -> f64 {
        let per_game = Self::RUNS_PER_GAME * (1.0 + (offense - defense) as f64 / Self::RATING_SPREAD);

        (per_game / 9.0).max(Self::MIN_LAMBDA)
    }
}

impl GameOutcomeStrategy for RunDistributionStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RunDistribution
    }

    fn play_half_inning(
        &self,
        ctx: HalfInningContext<'_, '_>,
        inning: u8,
        side: HalfInningSide,
        rng: &mut StdRng,
    ) -> HalfInningResult {
        let lambda = Self::lambda(ctx.batting.batting_rating, ctx.fielding.pitching_rating);
        let runs = RandomUtils::poisson(lambda, rng);

        let batters_faced = 3 + runs;

        let pitcher = ctx.box_score.line(ctx.fielding.pitcher.id);
        pitcher.outs_pitched += 3;
        pitcher.batters_faced += batters_faced;
        pitcher.runs_allowed += runs;

        *ctx.pitcher_stamina = (*ctx.pitcher_stamina - batters_faced as f32 * STAMINA_PER_BATTER).max(0.0);

        let mut result = HalfInningResult::new(inning, side);
        result.runs = runs as u16;

        if ctx.record_events && runs > 0 {
            result.events.push(format!(
                "{} {}: {} score {}",
                side, inning, ctx.batting.team_name, runs
            ));
        }

        result
    }
}
