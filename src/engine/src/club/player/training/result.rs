use crate::club::{Injury, PlayerCollection, SkillAttribute, TrainingCategory};
use itertools::Itertools;
use log::{debug, warn};
use rand::RngExt;

pub struct PlayerTrainingResult {
    pub player_id: u32,
    pub category: TrainingCategory,
    pub success: bool,
    pub message: String,

    pub gains: Vec<(SkillAttribute, f32)>,
    pub morale_change: f32,
    pub stamina_recovery: f32,
    pub fatigue: f32,
    pub experience: u32,
    pub injury: Option<Injury>,
}

impl PlayerTrainingResult {
    pub fn new(player_id: u32, category: TrainingCategory) -> Self {
        PlayerTrainingResult {
            player_id,
            category,
            success: false,
            message: String::new(),
            gains: Vec::new(),
            morale_change: 0.0,
            stamina_recovery: 0.0,
            fatigue: 0.0,
            experience: 0,
            injury: None,
        }
    }

    pub fn add_gain(&mut self, attribute: SkillAttribute, amount: f32) {
        self.gains.push((attribute, amount));
    }

    pub fn gain(&self, attribute: SkillAttribute) -> f32 {
        self.gains
            .iter()
            .filter(|(a, _)| *a == attribute)
            .map(|(_, amount)| amount)
            .sum()
    }

    pub fn describe_gains(&self) -> String {
        if self.gains.is_empty() && self.morale_change > 0.0 {
            return format!("Morale +{}", self.morale_change);
        }

        self.gains
            .iter()
            .map(|(attribute, amount)| format!("{:?} +{}", attribute, amount))
            .join(", ")
    }

    /// Apply the session to the player
    pub fn process<R: RngExt>(&self, players: &mut PlayerCollection, rng: &mut R) {
        let Some(player) = players.find_mut(self.player_id) else {
            warn!("training result for unknown player {}", self.player_id);
            return;
        };

        for (attribute, amount) in &self.gains {
            player.skills.improve(*attribute, *amount);
        }

        if self.morale_change > 0.0 {
            player.attributes.raise_morale(self.morale_change);
        } else if self.morale_change < 0.0 {
            player.attributes.lower_morale(-self.morale_change);
        }

        if self.stamina_recovery > 0.0 {
            player.recover(self.stamina_recovery);
        }

        if self.experience > 0 {
            player.gain_experience(self.experience, rng);
        }

        if self.fatigue > 0.0 {
            player.apply_fatigue(self.fatigue);
        }

        if let Some(injury) = &self.injury {
            player.injure(injury.clone());
        }

        debug!("training {:?}: {}", self.category, self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerSkills};
    use crate::shared::{FullName, RandomUtils};

    #[test]
    fn test_gain_sums_by_attribute() {
        let mut result = PlayerTrainingResult::new(1, TrainingCategory::Fielding);
        result.add_gain(SkillAttribute::Defense, 2.0);
        result.add_gain(SkillAttribute::Arm, 1.0);

        assert_eq!(result.gain(SkillAttribute::Defense), 2.0);
        assert_eq!(result.gain(SkillAttribute::Speed), 0.0);
        assert_eq!(result.describe_gains(), "Defense +2, Arm +1");
    }

    #[test]
    fn test_process_unknown_player_is_ignored() {
        let mut rng = RandomUtils::seeded(1);
        let mut players = PlayerCollection::default();

        let mut result = PlayerTrainingResult::new(99, TrainingCategory::Speed);
        result.add_gain(SkillAttribute::Speed, 2.0);

        result.process(&mut players, &mut rng);

        assert!(players.is_empty());
    }

    #[test]
    fn test_process_applies_negative_morale() {
        let mut rng = RandomUtils::seeded(1);
        let mut players = PlayerCollection::new(vec![Player::builder()
            .id(5)
            .full_name(FullName::new("Sho".to_string(), "Ito".to_string()))
            .skills(PlayerSkills::default())
            .build()
            .unwrap()]);

        let mut result = PlayerTrainingResult::new(5, TrainingCategory::Batting);
        result.morale_change = -2.0;
        result.process(&mut players, &mut rng);

        assert_eq!(players.players[0].attributes.morale, 48.0);
    }
}
