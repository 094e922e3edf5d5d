use color_eyre::eyre::{Result, eyre};
use database::GeneratorSettings;
use engine::{ExtraInningsPolicy, SchedulePolicy, SeasonSettings, StrategyKind};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Host configuration, read from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub season: SeasonSettings,
    pub generator: GeneratorSettings,
    pub load_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
    pub leaders: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let seed: u64 = read("SEASON_SEED", 0)?;

        let defaults = SeasonSettings::default();

        let season = SeasonSettings::default()
            .with_seed(seed)
            .with_games_per_team(read("GAMES_PER_TEAM", defaults.games_per_team)?)
            .with_strategy(read::<StrategyKind>("STRATEGY", defaults.strategy)?)
            .with_extra_innings(read::<ExtraInningsPolicy>("EXTRA_INNINGS", defaults.extra_innings)?)
            .with_schedule_policy(read::<SchedulePolicy>("SCHEDULE", defaults.schedule_policy)?);

        let generator_defaults = GeneratorSettings::default();

        let generator = GeneratorSettings {
            teams: read("TEAMS", generator_defaults.teams)?,
            roster_size: read("ROSTER_SIZE", generator_defaults.roster_size)?,
            seed,
        };

        Ok(AppConfig {
            season,
            generator,
            load_path: env::var("LOAD_PATH").ok().map(PathBuf::from),
            save_path: env::var("SAVE_PATH").ok().map(PathBuf::from),
            leaders: read("LEADERS", 5)?,
        })
    }
}

fn read<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| eyre!("invalid {}={:?}: {}", name, value, e)),
        Err(_) => Ok(default),
    }
}
