use crate::club::{DraftPick, Player, PlayerCollection};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEAM_RATING: f32 = 50.0;
pub const DEFAULT_TEAM_CASH: f64 = 1_000_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,

    /// Player ids; the first nine are the starting lineup.
    pub roster: Vec<u32>,

    pub wins: u32,
    pub losses: u32,
    pub ties: u32,

    pub cash: f64,
    pub draft_picks: Vec<DraftPick>,
}

impl Team {
    pub fn new(id: u32, name: String) -> Self {
        Team {
            id,
            name,
            roster: Vec::new(),
            wins: 0,
            losses: 0,
            ties: 0,
            cash: DEFAULT_TEAM_CASH,
            draft_picks: Vec::new(),
        }
    }

    pub fn with_roster(mut self, roster: Vec<u32>) -> Self {
        self.roster = roster;
        self
    }

    // ========== RECORD ==========

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    pub fn win_percentage(&self) -> f32 {
        let games = self.games_played();

        if games == 0 {
            0.0
        } else {
            self.wins as f32 / games as f32
        }
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn record_tie(&mut self) {
        self.ties += 1;
    }

    pub fn reset_record(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.ties = 0;
    }

    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }

    // ========== RATINGS ==========

    fn average_rating<F>(&self, players: &PlayerCollection, skill: F) -> f32
    where
        F: Fn(&Player) -> f32,
    {
        let values: Vec<f32> = players.by_ids(&self.roster).map(skill).collect();

        if values.is_empty() {
            return DEFAULT_TEAM_RATING;
        }

        values.iter().sum::<f32>() / values.len() as f32
    }

    pub fn batting_rating(&self, players: &PlayerCollection) -> f32 {
        self.average_rating(players, |p| p.batting_skill())
    }

    pub fn pitching_rating(&self, players: &PlayerCollection) -> f32 {
        self.average_rating(players, |p| p.pitching_skill())
    }

    pub fn rating(&self, players: &PlayerCollection) -> f32 {
        self.average_rating(players, |p| p.overall_skill())
    }

    // ========== ROSTER & ASSETS ==========

    pub fn contains_player(&self, player_id: u32) -> bool {
        self.roster.contains(&player_id)
    }

    pub fn add_player(&mut self, player_id: u32) {
        if !self.contains_player(player_id) {
            self.roster.push(player_id);
        }
    }

    pub fn remove_player(&mut self, player_id: u32) -> bool {
        match self.roster.iter().position(|id| *id == player_id) {
            Some(index) => {
                self.roster.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_pick(&mut self, pick: DraftPick) {
        if !self.draft_picks.contains(&pick) {
            self.draft_picks.push(pick);
        }
    }

    pub fn remove_pick(&mut self, pick: &DraftPick) -> bool {
        match self.draft_picks.iter().position(|p| p == pick) {
            Some(index) => {
                self.draft_picks.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerSkills;
    use crate::shared::FullName;

    #[test]
    fn test_win_percentage() {
        let mut team = Team::new(1, "Harbor Gulls".to_string());
        assert_eq!(team.win_percentage(), 0.0);

        team.record_win();
        team.record_win();
        team.record_win();
        team.record_loss();

        assert_eq!(team.games_played(), 4);
        assert_eq!(team.win_percentage(), 0.75);
        assert_eq!(team.record(), "3-1-0");
    }

    #[test]
    fn test_ties_count_as_games() {
        let mut team = Team::new(1, "Harbor Gulls".to_string());
        team.record_win();
        team.record_tie();

        assert_eq!(team.games_played(), 2);
        assert_eq!(team.win_percentage(), 0.5);
    }

    #[test]
    fn test_empty_roster_ratings_default() {
        let team = Team::new(1, "Harbor Gulls".to_string());
        let players = PlayerCollection::default();

        assert_eq!(team.batting_rating(&players), 50.0);
        assert_eq!(team.pitching_rating(&players), 50.0);
        assert_eq!(team.rating(&players), 50.0);
    }

    #[test]
    fn test_ratings_average_roster() {
        let players = PlayerCollection::new(vec![player(1, 40.0), player(2, 80.0), player(3, 10.0)]);
        let team = Team::new(1, "Harbor Gulls".to_string()).with_roster(vec![1, 2]);

        assert!((team.batting_rating(&players) - 60.0).abs() < 1e-4);
        assert!((team.pitching_rating(&players) - 60.0).abs() < 1e-4);
        assert!((team.rating(&players) - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_roster_changes() {
        let mut team = Team::new(1, "Harbor Gulls".to_string()).with_roster(vec![1, 2]);

        team.add_player(2);
        team.add_player(3);
        assert_eq!(team.roster, vec![1, 2, 3]);

        assert!(team.remove_player(1));
        assert!(!team.remove_player(1));
        assert_eq!(team.roster, vec![2, 3]);
    }

    #[test]
    fn test_draft_picks() {
        let mut team = Team::new(1, "Harbor Gulls".to_string());
        let pick = DraftPick::new(1, 4);

        team.add_pick(pick);
        team.add_pick(pick);
        assert_eq!(team.draft_picks.len(), 1);

        assert!(team.remove_pick(&pick));
        assert!(!team.remove_pick(&pick));
    }

    fn player(id: u32, value: f32) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::new("A".to_string(), format!("B{}", id)))
            .skills(PlayerSkills::uniform(value))
            .build()
            .unwrap()
    }
}
