use crate::league::{
    DayResult, GameScore, League, RunStatus, ScheduleGenerator, ScheduledGame, SeasonProgress,
    SeasonResult, SeasonSchedule, SeasonSettings,
};
use crate::r#match::{GameResult, GameSimulator};
use crate::shared::RandomUtils;
use crate::utils::{Logging, TimeEstimation};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Drives one season over a league: schedule, games, daily recovery.
pub struct SeasonRunner {
    settings: SeasonSettings,
    schedule: SeasonSchedule,
    simulator: GameSimulator,
    cancellation: Arc<AtomicBool>,
    results: Vec<GameResult>,
    days_played: u32,
}

impl SeasonRunner {
    pub fn new(league: &League, settings: SeasonSettings) -> Self {
        let schedule = ScheduleGenerator::generate(
            &league.teams.ids(),
            settings.games_per_team,
            settings.schedule_policy,
            settings.start_date,
        );

        for (team_id, drift) in schedule.drift() {
            if drift != 0 {
                debug!("team {} scheduled {:+} games off target", team_id, drift);
            }
        }

        let simulator = GameSimulator::new(settings.strategy, settings.extra_innings)
            .with_events(settings.record_events);

        SeasonRunner {
            settings,
            schedule,
            simulator,
            cancellation: Arc::new(AtomicBool::new(false)),
            results: Vec::new(),
            days_played: 0,
        }
    }

    /// Shares an external flag; setting it stops the run before the next game commit.
    pub fn with_cancellation(mut self, cancellation: Arc<AtomicBool>) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn cancellation(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancellation)
    }

    pub fn cancel(&self) {
        self.cancellation.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.load(Ordering::SeqCst)
    }

    pub fn settings(&self) -> &SeasonSettings {
        &self.settings
    }

    pub fn schedule(&self) -> &SeasonSchedule {
        &self.schedule
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn is_finished(&self) -> bool {
        self.schedule.is_complete()
    }

    pub fn progress(&self) -> SeasonProgress {
        SeasonProgress {
            day: self.days_played,
            days_total: self.schedule.days(),
            games_played: self.schedule.played_count(),
            games_total: self.schedule.len(),
        }
    }

    // ========== DAY ==========

    /// Plays the next unplayed day. None once the schedule is exhausted.
    ///
    /// Games of a day never share a team, so they are simulated in parallel against
    /// the same league snapshot, each with its own random stream, and committed in
    /// schedule order afterwards.
    pub fn simulate_day(&mut self, league: &mut League) -> Option<DayResult> {
        let day = self.schedule.current_day()?;
        let mut day_result = DayResult::new(day, self.schedule.date_of(day));

        let games: Vec<ScheduledGame> = self
            .schedule
            .games_on(day)
            .filter(|g| !g.played)
            .cloned()
            .collect();

        let played = Self::play_games(&self.simulator, self.settings.seed, league, &games);

        for (game_id, result, mut rng) in played {
            if self.is_cancelled() {
                warn!("season cancelled on day {} before game {}", day, game_id);
                day_result.cancelled = true;
                break;
            }

            let commit = result.process(league, &mut rng);

            let score = result.is_completed().then_some(GameScore {
                home: result.home_score,
                away: result.away_score,
            });
            self.schedule.mark_played(game_id, score);

            day_result.injuries.extend(commit.injuries);
            day_result.level_ups += commit.level_ups;
            day_result.games.push(result.clone());
            self.results.push(result);
        }

        if !day_result.cancelled {
            day_result.recovered = league.advance_day();
            self.days_played += 1;
        }

        debug!(
            "day {} ({}): {} games, {} injuries",
            day,
            day_result.date,
            day_result.games.len(),
            day_result.injuries.len()
        );

        Some(day_result)
    }

    fn play_games(
        simulator: &GameSimulator,
        seed: u64,
        league: &League,
        games: &[ScheduledGame],
    ) -> Vec<(u32, GameResult, StdRng)> {
        games
            .par_iter()
            .map(|game| {
                let home = league.teams.by_id(game.home_team_id);
                let away = league.teams.by_id(game.away_team_id);

                let mut rng = RandomUtils::stream(seed, game.id as u64);

                let message = format!("play game {}: {} at {}", game.id, away.name, home.name);
                let result = Logging::estimate_result(
                    || simulator.play(home, away, &league.players, &mut rng),
                    &message,
                );

                (game.id, result, rng)
            })
            .collect()
    }

    // ========== SEASON ==========

    /// Plays every remaining day, reporting after each one.
    pub fn simulate_all<F>(&mut self, league: &mut League, mut on_progress: F) -> SeasonResult
    where
        F: FnMut(&SeasonProgress),
    {
        info!(
            "⚾ season started: {} teams, {} games over {} days",
            league.teams.len(),
            self.schedule.len(),
            self.schedule.days()
        );

        let ((void_games, injuries), elapsed_ms) = TimeEstimation::estimate(|| {
            let mut void_games = 0;
            let mut injuries = 0;

            while let Some(day) = self.simulate_day(league) {
                void_games += day.void_games();
                injuries += day.injuries.len();

                on_progress(&self.progress());

                if day.cancelled {
                    break;
                }
            }

            (void_games, injuries)
        });

        let status = if self.is_finished() {
            RunStatus::Completed
        } else {
            RunStatus::Cancelled
        };

        let table = league.table();

        match (status, table.leader()) {
            (RunStatus::Completed, Some(leader)) => info!(
                "🏆 season complete in {} ms: {} finish first at {}-{}-{}",
                elapsed_ms, leader.team_name, leader.wins, leader.losses, leader.ties
            ),
            (RunStatus::Completed, None) => info!("🏆 season complete in {} ms", elapsed_ms),
            (RunStatus::Cancelled, _) => warn!(
                "⛔ season cancelled after {} of {} games",
                self.schedule.played_count(),
                self.schedule.len()
            ),
        }

        SeasonResult {
            status,
            days_played: self.days_played,
            games_played: self.schedule.played_count(),
            void_games,
            injuries,
            elapsed_ms,
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerCollection, PlayerSkills, Team, TeamCollection};
    use crate::r#match::StrategyKind;
    use crate::shared::FullName;

    #[test]
    fn test_full_season_reaches_targets() {
        let mut league = league(4, 12);
        let mut runner = SeasonRunner::new(&league, settings(6, 11));

        let result = runner.simulate_all(&mut league, |_| {});

        assert!(result.is_completed());
        assert!(runner.is_finished());
        assert_eq!(result.games_played, runner.schedule().len());

        let counts = runner.schedule().realized_counts();
        for team in league.teams.iter() {
            assert_eq!(team.games_played(), counts[&team.id]);
        }
    }

    #[test]
    fn test_standings_balance() {
        let mut league = league(4, 12);
        let mut runner = SeasonRunner::new(&league, settings(9, 3));

        runner.simulate_all(&mut league, |_| {});

        let wins: u32 = league.teams.iter().map(|t| t.wins).sum();
        let losses: u32 = league.teams.iter().map(|t| t.losses).sum();
        let ties: u32 = league.teams.iter().map(|t| t.ties).sum();

        assert_eq!(wins, losses);
        assert_eq!(ties % 2, 0);
        assert_eq!((wins + losses + ties) as usize, runner.schedule().len() * 2);
    }

    #[test]
    fn test_same_seed_same_season() {
        let first = run(4, 6, 42);
        let second = run(4, 6, 42);

        let records = |league: &League| -> Vec<(u32, u32, u32)> {
            league.teams.iter().map(|t| (t.wins, t.losses, t.ties)).collect()
        };

        assert_eq!(records(&first), records(&second));

        let hits = |league: &League| -> Vec<u32> {
            league.players.iter().map(|p| p.statistics.hits).collect()
        };

        assert_eq!(hits(&first), hits(&second));
    }

    #[test]
    fn test_day_by_day() {
        let mut league = league(4, 12);
        let mut runner = SeasonRunner::new(&league, settings(3, 5));

        let first = runner.simulate_day(&mut league).unwrap();

        assert_eq!(first.day, 0);
        assert_eq!(first.games.len(), 2);
        assert_eq!(first.date, runner.schedule().start_date);
        assert!(runner.schedule().games_on(0).all(|g| g.played));

        let mut days = 1;
        while runner.simulate_day(&mut league).is_some() {
            days += 1;
        }

        assert_eq!(days, runner.schedule().days());
        assert!(runner.simulate_day(&mut league).is_none());
    }

    #[test]
    fn test_cancellation_keeps_committed_games() {
        let mut league = league(4, 12);
        let mut runner = SeasonRunner::new(&league, settings(6, 8));

        runner.simulate_day(&mut league).unwrap();
        runner.cancel();

        let result = runner.simulate_all(&mut league, |_| {});

        assert_eq!(result.status, RunStatus::Cancelled);
        assert_eq!(result.games_played, 2);
        assert_eq!(runner.results().len(), 2);

        let played: u32 = league.teams.iter().map(|t| t.games_played()).sum();
        assert_eq!(played, 4);
    }

    #[test]
    fn test_void_games_are_marked_played() {
        let mut league = league(4, 12);
        league.teams.by_id_mut(4).roster.truncate(3);

        let mut runner = SeasonRunner::new(&league, settings(3, 1));
        let result = runner.simulate_all(&mut league, |_| {});

        assert!(result.is_completed());
        assert_eq!(result.void_games, 3);
        assert_eq!(league.teams.by_id(4).games_played(), 0);
        assert!(runner
            .schedule()
            .team_games(4)
            .all(|g| g.played && g.score.is_none()));
    }

    #[test]
    fn test_progress_reports_every_day() {
        let mut league = league(4, 12);
        let mut runner = SeasonRunner::new(&league, settings(3, 2));

        let mut reports = Vec::new();
        runner.simulate_all(&mut league, |progress| reports.push(*progress));

        assert_eq!(reports.len() as u32, runner.schedule().days());
        assert_eq!(reports.last().map(|p| p.fraction()), Some(1.0));
    }

    #[test]
    fn test_distribution_strategy_season() {
        let mut league = league(4, 12);
        let mut runner = SeasonRunner::new(
            &league,
            settings(6, 9).with_strategy(StrategyKind::RunDistribution),
        );

        let result = runner.simulate_all(&mut league, |_| {});

        assert!(result.is_completed());
        assert!(runner.results().iter().all(|r| r.is_completed()));
    }

    fn run(teams: u32, games: u32, seed: u64) -> League {
        let mut league = league(teams, 12);
        let mut runner = SeasonRunner::new(&league, settings(games, seed));

        runner.simulate_all(&mut league, |_| {});

        league
    }

    fn settings(games_per_team: u32, seed: u64) -> SeasonSettings {
        SeasonSettings::default()
            .with_games_per_team(games_per_team)
            .with_seed(seed)
    }

    fn league(teams: u32, roster_size: u32) -> League {
        let players: Vec<Player> = (1..=teams * roster_size)
            .map(|id| {
                let skill = 45.0 + (id % 7) as f32 * 5.0;

                Player::builder()
                    .id(id)
                    .full_name(FullName::new("Season".to_string(), format!("Player{}", id)))
                    .skills(PlayerSkills::uniform(skill))
                    .build()
                    .unwrap()
            })
            .collect();

        let teams: Vec<Team> = (0..teams)
            .map(|idx| {
                let first = idx * roster_size + 1;

                Team::new(idx + 1, format!("Club {}", idx + 1))
                    .with_roster((first..first + roster_size).collect())
            })
            .collect();

        League::new(1, "Season League".to_string(), TeamCollection::new(teams), PlayerCollection::new(players))
    }
}
