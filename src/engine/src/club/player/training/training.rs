use crate::club::{Injury, InjurySeverity, Player, PlayerTrainingResult, SkillAttribute};
use rand::RngExt;
use serde::{Deserialize, Serialize};

pub const TRAINING_MIN_STAMINA: f32 = 20.0;
pub const TRAINING_INJURY_INTENSITY: u8 = 70;

/// Flat injury chance for high-intensity sessions. Deliberately kept apart from `InjuryModel`.
pub const TRAINING_INJURY_PROBABILITY: f64 = 0.05;

const TIRED_MORALE_PENALTY: f32 = 2.0;
const MIN_TRAINING_FATIGUE: f32 = 5.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingCategory {
    Batting,
    Pitching,
    Fielding,
    Speed,
    Mental,
    Recovery,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub category: TrainingCategory,
    pub intensity: u8,
}

impl TrainingSession {
    pub fn new(category: TrainingCategory, intensity: u8) -> Self {
        TrainingSession {
            category,
            intensity: intensity.min(100),
        }
    }
}

impl Default for TrainingSession {
    fn default() -> Self {
        TrainingSession::new(TrainingCategory::Batting, 50)
    }
}

pub struct PlayerTraining;

impl PlayerTraining {
    /// Works out what a session does to the player; nothing is applied until `process`.
    pub fn train<R: RngExt>(
        player: &Player,
        session: TrainingSession,
        rng: &mut R,
    ) -> PlayerTrainingResult {
        let intensity = session.intensity.min(100) as u32;
        let mut result = PlayerTrainingResult::new(player.id, session.category);

        if player.attributes.current_stamina < TRAINING_MIN_STAMINA
            && session.category != TrainingCategory::Recovery
        {
            result.morale_change = -TIRED_MORALE_PENALTY;
            result.message = format!("{} is too tired to train effectively.", player.full_name);
            return result;
        }

        match session.category {
            TrainingCategory::Batting => {
                let gain = (rng.random_range(1..=3) + intensity / 25) / 2;
                result.add_gain(SkillAttribute::Contact, gain as f32);
                result.add_gain(SkillAttribute::Power, gain as f32);
                result.experience = 10 + intensity / 5;
            }
            TrainingCategory::Pitching => {
                let gain = (rng.random_range(1..=3) + intensity / 25) / 2;
                result.add_gain(SkillAttribute::Control, gain as f32);
                result.add_gain(SkillAttribute::Breaking, gain as f32);
                result.experience = 10 + intensity / 5;
            }
            TrainingCategory::Fielding => {
                let gain = rng.random_range(1..=2) + intensity / 30;
                result.add_gain(SkillAttribute::Defense, gain as f32);
                result.add_gain(SkillAttribute::Arm, (gain / 2) as f32);
                result.experience = 8 + intensity / 6;
            }
            TrainingCategory::Speed => {
                let gain = rng.random_range(1..=2) + intensity / 30;
                result.add_gain(SkillAttribute::Speed, gain as f32);
                result.experience = 8 + intensity / 6;
            }
            TrainingCategory::Mental => {
                result.morale_change = (10 + intensity / 10) as f32;
                result.experience = 5;
            }
            TrainingCategory::Recovery => {
                let recovery = (15 + intensity / 5) as f32;

                result.stamina_recovery = recovery;
                result.success = true;
                result.message = format!("{} recovered {} stamina.", player.full_name, recovery);
                return result;
            }
        }

        result.fatigue = MIN_TRAINING_FATIGUE.max((intensity / 10) as f32);

        if session.intensity > TRAINING_INJURY_INTENSITY
            && rng.random::<f64>() < TRAINING_INJURY_PROBABILITY
        {
            result.injury = Some(Injury::with_severity(InjurySeverity::Minor, rng));
            result.message = format!("{} was injured during training!", player.full_name);
            return result;
        }

        result.success = true;
        result.message = format!(
            "{} trained {:?}. Gained: {}",
            player.full_name,
            session.category,
            result.describe_gains()
        );

        result
    }
}
