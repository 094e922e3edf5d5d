mod config;
mod report;

use color_eyre::Result;
use config::AppConfig;
use database::{DatabaseGenerator, LeagueStore};
use engine::utils::TimeEstimation;
use engine::{League, SeasonRunner};
use env_logger::Env;
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = AppConfig::from_env()?;

    let (league, estimated) = TimeEstimation::estimate(|| prepare_league(&config));
    let league = league?;

    info!("league ready: {} ms", estimated);

    let cancellation = Arc::new(AtomicBool::new(false));

    let interrupt = Arc::clone(&cancellation);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping after the current game");
            interrupt.store(true, Ordering::SeqCst);
        }
    });

    let settings = config.season.clone();

    let (league, result) = tokio::task::spawn_blocking(move || {
        let mut league = league;
        let mut runner = SeasonRunner::new(&league, settings).with_cancellation(cancellation);

        let mut reported = 0;
        let result = runner.simulate_all(&mut league, |progress| {
            let percent = (progress.fraction() * 100.0) as u32;

            if percent >= reported + 10 {
                reported = percent - percent % 10;
                info!("📅 day {}/{}: {}% of games played", progress.day, progress.days_total, percent);
            }
        });

        (league, result)
    })
    .await?;

    report::print_standings(&result.table);
    report::print_leaders(&league.leaders(config.leaders));

    if let Some(path) = &config.save_path {
        LeagueStore::save(path, &league)?;
    }

    Ok(())
}

fn prepare_league(config: &AppConfig) -> Result<League> {
    match &config.load_path {
        Some(path) => {
            let mut league = LeagueStore::load(path)?;
            league.reset_season();
            Ok(league)
        }
        None => Ok(DatabaseGenerator::generate(&config.generator)),
    }
}
