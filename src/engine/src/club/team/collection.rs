use crate::club::Team;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamCollection {
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(teams: Vec<Team>) -> Self {
        TeamCollection { teams }
    }

    /// Panics on an unknown id: callers only pass ids taken from this league.
    pub fn by_id(&self, id: u32) -> &Team {
        self.find(id)
            .unwrap_or_else(|| panic!("no team with id = {}", id))
    }

    pub fn by_id_mut(&mut self, id: u32) -> &mut Team {
        self.find_mut(id)
            .unwrap_or_else(|| panic!("no team with id = {}", id))
    }

    pub fn find(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Two distinct teams borrowed mutably at once.
    pub fn pair_mut(&mut self, first: u32, second: u32) -> Option<(&mut Team, &mut Team)> {
        if first == second {
            return None;
        }

        let first_index = self.teams.iter().position(|t| t.id == first)?;
        let second_index = self.teams.iter().position(|t| t.id == second)?;

        if first_index < second_index {
            let (left, right) = self.teams.split_at_mut(second_index);
            Some((&mut left[first_index], &mut right[0]))
        } else {
            let (left, right) = self.teams.split_at_mut(first_index);
            Some((&mut right[0], &mut left[second_index]))
        }
    }

    /// Team whose roster holds the player.
    pub fn team_of(&self, player_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.contains_player(player_id))
    }

    pub fn ids(&self) -> Vec<u32> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.teams.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
