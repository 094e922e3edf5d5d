use crate::club::Player;
use serde::{Deserialize, Serialize};

/// Arena of every player in a league, addressed by id. Teams only hold ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn add_range(&mut self, players: Vec<Player>) {
        for player in players {
            self.players.push(player);
        }
    }

    pub fn find(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }

    pub fn take_player(&mut self, id: u32) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    pub fn by_ids<'a>(&'a self, ids: &'a [u32]) -> impl Iterator<Item = &'a Player> + 'a {
        ids.iter().filter_map(move |id| self.find(*id))
    }

    pub fn next_id(&self) -> u32 {
        self.players.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerSkills;
    use crate::shared::FullName;

    #[test]
    fn test_find_by_id() {
        let collection = PlayerCollection::new(vec![player(3), player(9)]);

        assert_eq!(collection.find(9).map(|p| p.id), Some(9));
        assert!(collection.find(4).is_none());
        assert!(collection.contains(3));
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut collection = PlayerCollection::new(vec![player(3)]);

        if let Some(player) = collection.find_mut(3) {
            player.statistics.hits = 5;
        }

        assert_eq!(collection.find(3).map(|p| p.statistics.hits), Some(5));
    }

    #[test]
    fn test_by_ids_skips_unknown_and_keeps_order() {
        let collection = PlayerCollection::new(vec![player(1), player(2), player(3)]);

        let ids: Vec<u32> = collection.by_ids(&[3, 8, 1]).map(|p| p.id).collect();

        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_take_player() {
        let mut collection = PlayerCollection::new(vec![player(1), player(2)]);

        assert_eq!(collection.take_player(1).map(|p| p.id), Some(1));
        assert_eq!(collection.len(), 1);
        assert!(collection.take_player(1).is_none());
    }

    #[test]
    fn test_next_id() {
        assert_eq!(PlayerCollection::default().next_id(), 1);
        assert_eq!(PlayerCollection::new(vec![player(4), player(11)]).next_id(), 12);
    }

    fn player(id: u32) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::new("First".to_string(), format!("Last{}", id)))
            .skills(PlayerSkills::default())
            .build()
            .unwrap()
    }
}
