use crate::club::{PlayerCollection, PlayerTraining, PlayerTrainingResult, TeamCollection, TrainingSession};
use crate::league::{LeagueLeaders, LeagueTable};
use crate::r#match::{GameCommit, GameResult, GameSimulator};
use log::{debug, info, warn};
use rand::RngExt;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stamina a healthy player gets back at the end of every season day.
pub const DAILY_STAMINA_RECOVERY: f32 = 10.0;

/// Player arena plus the teams that reference it by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,

    pub teams: TeamCollection,
    pub players: PlayerCollection,
}

impl League {
    pub fn new(id: u32, name: String, teams: TeamCollection, players: PlayerCollection) -> Self {
        League {
            id,
            name,
            teams,
            players,
        }
    }

    pub fn table(&self) -> LeagueTable {
        LeagueTable::from_teams(&self.teams)
    }

    pub fn leaders(&self, limit: usize) -> LeagueLeaders {
        LeagueLeaders::collect(&self.players, limit)
    }

    // ========== GAMES ==========

    /// Plays and commits a single game. Unknown team ids are a programming error.
    pub fn play_game(
        &mut self,
        simulator: &GameSimulator,
        home_team_id: u32,
        away_team_id: u32,
        rng: &mut StdRng,
    ) -> (GameResult, GameCommit) {
        let result = simulator.play(
            self.teams.by_id(home_team_id),
            self.teams.by_id(away_team_id),
            &self.players,
            rng,
        );

        let commit = result.process(self, rng);

        (result, commit)
    }

    // ========== CONDITION ==========

    /// End of a season day: healthy players recover stamina, injured ones heal one day.
    /// Returns the ids of players who came back from injury.
    pub fn advance_day(&mut self) -> Vec<u32> {
        let mut recovered = Vec::new();

        for player in self.players.iter_mut() {
            if player.is_injured() {
                if player.advance_recovery(1) {
                    info!("💪 {} is back from injury", player.full_name);
                    recovered.push(player.id);
                }
            } else {
                player.recover(DAILY_STAMINA_RECOVERY);
            }
        }

        recovered
    }

    pub fn train<R: RngExt>(
        &mut self,
        player_id: u32,
        session: TrainingSession,
        rng: &mut R,
    ) -> Option<PlayerTrainingResult> {
        let player = self.players.find(player_id)?;

        let result = PlayerTraining::train(player, session, rng);
        result.process(&mut self.players, rng);

        Some(result)
    }

    // ========== SEASON ==========

    pub fn reset_season(&mut self) {
        for player in self.players.iter_mut() {
            player.reset_season();
        }

        for team in self.teams.iter_mut() {
            team.reset_record();
        }

        debug!("league {} reset for a new season", self.name);
    }

    // ========== INTEGRITY ==========

    /// Checks that the arena is consistent: unique ids, every roster id resolves,
    /// no player on two rosters.
    pub fn validate(&self) -> Result<(), String> {
        let mut player_ids = HashSet::new();
        for player in self.players.iter() {
            if !player_ids.insert(player.id) {
                return Err(format!("duplicate player id {}", player.id));
            }
        }

        let mut team_ids = HashSet::new();
        let mut rostered = HashSet::new();

        for team in self.teams.iter() {
            if !team_ids.insert(team.id) {
                return Err(format!("duplicate team id {}", team.id));
            }

            for player_id in &team.roster {
                if !player_ids.contains(player_id) {
                    return Err(format!("team {} refers to unknown player {}", team.name, player_id));
                }

                if !rostered.insert(*player_id) {
                    return Err(format!("player {} is on more than one roster", player_id));
                }
            }
        }

        Ok(())
    }

    /// Re-establishes value ranges after loading.
    pub fn normalize(&mut self) {
        for player in self.players.iter_mut() {
            player.normalize();
        }

        let unassigned = self
            .players
            .iter()
            .filter(|p| self.teams.team_of(p.id).is_none())
            .count();

        if unassigned > 0 {
            warn!("{} players in league {} are not on any roster", unassigned, self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Injury, InjurySeverity, Player, PlayerSkills, SkillAttribute, Team, TrainingCategory};
    use crate::r#match::{ExtraInningsPolicy, StrategyKind};
    use crate::shared::{FullName, RandomUtils};

    #[test]
    fn test_play_game_commits_once() {
        let mut league = league();
        let simulator = GameSimulator::new(StrategyKind::AtBat, ExtraInningsPolicy::TieAfterCap);

        let (result, _) = league.play_game(&simulator, 1, 2, &mut RandomUtils::seeded(5));

        assert!(result.is_completed());
        assert_eq!(league.teams.by_id(1).games_played(), 1);
        assert_eq!(league.teams.by_id(2).games_played(), 1);
    }

    #[test]
    fn test_play_game_with_short_roster_is_void() {
        let mut league = league();
        league.teams.by_id_mut(2).roster.truncate(5);

        let simulator = GameSimulator::new(StrategyKind::AtBat, ExtraInningsPolicy::TieAfterCap);
        let (result, commit) = league.play_game(&simulator, 1, 2, &mut RandomUtils::seeded(5));

        assert!(!result.is_completed());
        assert!(commit.injuries.is_empty());
        assert_eq!(league.teams.by_id(1).games_played(), 0);
    }

    #[test]
    #[should_panic(expected = "no team with id")]
    fn test_play_game_unknown_team_panics() {
        let mut league = league();
        let simulator = GameSimulator::new(StrategyKind::AtBat, ExtraInningsPolicy::TieAfterCap);

        league.play_game(&simulator, 1, 99, &mut RandomUtils::seeded(5));
    }

    #[test]
    fn test_advance_day_recovers_and_heals() {
        let mut league = league();
        let mut rng = RandomUtils::seeded(1);

        let tired = league.players.find_mut(1).unwrap();
        tired.apply_fatigue(30.0);

        let hurt = league.players.find_mut(2).unwrap();
        hurt.injure(Injury::with_severity(InjurySeverity::Minor, &mut rng));
        let days = hurt.attributes.injury.as_ref().unwrap().days_remaining;

        let mut recovered = Vec::new();
        for _ in 0..days {
            recovered.extend(league.advance_day());
        }

        assert_eq!(recovered, vec![2]);
        assert!(!league.players.find(2).unwrap().is_injured());

        let tired = league.players.find(1).unwrap();
        assert!(tired.attributes.current_stamina > tired.skills.stamina - 30.0);
        assert!(tired.attributes.current_stamina <= tired.skills.stamina);
    }

    #[test]
    fn test_train_applies_result() {
        let mut league = league();
        let mut rng = RandomUtils::seeded(3);
        let before = league.players.find(4).unwrap().skills.speed;

        let result = league
            .train(4, TrainingSession::new(TrainingCategory::Speed, 50), &mut rng)
            .unwrap();

        let after = league.players.find(4).unwrap().skills.speed;
        assert_eq!(after, (before + result.gain(SkillAttribute::Speed)).min(100.0));
        assert!(league.train(999, TrainingSession::default(), &mut rng).is_none());
    }

    #[test]
    fn test_reset_season() {
        let mut league = league();
        let simulator = GameSimulator::new(StrategyKind::AtBat, ExtraInningsPolicy::TieAfterCap);
        league.play_game(&simulator, 1, 2, &mut RandomUtils::seeded(8));

        league.reset_season();

        assert!(league.teams.iter().all(|t| t.games_played() == 0));
        assert!(league.players.iter().all(|p| p.statistics.games == 0));
        assert!(league.players.iter().all(|p| !p.is_injured()));
    }

    #[test]
    fn test_validate() {
        let mut league = league();
        assert!(league.validate().is_ok());

        league.teams.by_id_mut(1).roster.push(500);
        assert!(league.validate().unwrap_err().contains("unknown player 500"));

        let mut league = self::league();
        league.teams.by_id_mut(1).roster.push(13);
        assert!(league.validate().unwrap_err().contains("more than one roster"));
    }

    #[test]
    fn test_normalize_restores_ranges() {
        let mut league = league();

        let player = league.players.find_mut(3).unwrap();
        player.attributes.morale = 140.0;
        player.attributes.current_stamina = player.skills.stamina + 25.0;

        league.normalize();

        let player = league.players.find(3).unwrap();
        assert_eq!(player.attributes.morale, 100.0);
        assert_eq!(player.attributes.current_stamina, player.skills.stamina);
    }

    fn league() -> League {
        let players: Vec<Player> = (1..=24)
            .map(|id| {
                Player::builder()
                    .id(id)
                    .full_name(FullName::new("Test".to_string(), format!("Player{}", id)))
                    .skills(PlayerSkills::uniform(60.0))
                    .build()
                    .unwrap()
            })
            .collect();

        let teams = vec![
            Team::new(1, "Harbor".to_string()).with_roster((1..=12).collect()),
            Team::new(2, "Valley".to_string()).with_roster((13..=24).collect()),
        ];

        League::new(1, "Test League".to_string(), TeamCollection::new(teams), PlayerCollection::new(players))
    }
}
