use crate::club::{Lineup, Player, PlayerCollection, PlayerSkills, Team};
use crate::r#match::{BatterProfile, PitcherProfile};

/// Read-only copy of a player taken before the game starts.
#[derive(Debug, Clone)]
pub struct GamePlayer {
    pub id: u32,
    pub name: String,
    pub skills: PlayerSkills,
    pub current_stamina: f32,
}

impl GamePlayer {
    pub fn from_player(player: &Player) -> Self {
        GamePlayer {
            id: player.id,
            name: player.full_name.short(),
            skills: player.skills,
            current_stamina: player.attributes.current_stamina,
        }
    }

    pub fn batter_profile(&self) -> BatterProfile {
        BatterProfile {
            contact: self.skills.contact,
            power: self.skills.power,
        }
    }

    pub fn pitcher_profile(&self, current_stamina: f32) -> PitcherProfile {
        PitcherProfile {
            control: self.skills.control,
            current_stamina,
            breaking: self.skills.breaking,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSquad {
    pub team_id: u32,
    pub team_name: String,

    pub batters: Vec<GamePlayer>,
    pub pitcher: GamePlayer,

    pub batting_rating: f32,
    pub pitching_rating: f32,
}

impl GameSquad {
    /// None when the team cannot field a lineup.
    pub fn build(team: &Team, players: &PlayerCollection) -> Option<GameSquad> {
        let lineup = Lineup::select(team, players)?;

        let batters: Vec<GamePlayer> = players
            .by_ids(&lineup.batters)
            .map(GamePlayer::from_player)
            .collect();

        let pitcher = players
            .find(lineup.starting_pitcher)
            .map(GamePlayer::from_player)?;

        Some(GameSquad {
            team_id: team.id,
            team_name: team.name.clone(),
            batters,
            pitcher,
            batting_rating: team.batting_rating(players),
            pitching_rating: team.pitching_rating(players),
        })
    }

    /// Every player id that takes part, pitcher included, without duplicates.
    pub fn participants(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.batters.iter().map(|p| p.id).collect();

        if !ids.contains(&self.pitcher.id) {
            ids.push(self.pitcher.id);
        }

        ids
    }
}
