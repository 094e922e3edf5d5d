use crate::club::player::builder::PlayerBuilder;
use crate::club::{
    Injury, PitcherAptitudes, PitcherRole, PlayerAttributes, PlayerSkills, PlayerStatistics,
    SkillAttribute, MORALE_DEFAULT_VALUE,
};
use crate::shared::FullName;
use log::debug;
use rand::RngExt;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const EXPERIENCE_PER_LEVEL: u32 = 100;

const LOW_STAMINA_MORALE_THRESHOLD: f32 = 10.0;
const LOW_STAMINA_MORALE_PENALTY: f32 = 5.0;
const LEVEL_UP_MORALE_BONUS: f32 = 3.0;
const INJURY_MORALE_PENALTY: f32 = 15.0;
const RECOVERY_MORALE_BONUS: f32 = 10.0;
const RECOVERY_STAMINA_BONUS: f32 = 20.0;

const LEVEL_UP_ATTRIBUTES: [SkillAttribute; 6] = [
    SkillAttribute::Contact,
    SkillAttribute::Power,
    SkillAttribute::Speed,
    SkillAttribute::Defense,
    SkillAttribute::Stamina,
    SkillAttribute::Control,
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,

    pub skills: PlayerSkills,
    pub aptitudes: PitcherAptitudes,
    pub attributes: PlayerAttributes,

    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn is_injured(&self) -> bool {
        self.attributes.is_injured
    }

    pub fn batting_skill(&self) -> f32 {
        self.skills.batting()
    }

    pub fn pitching_skill(&self) -> f32 {
        self.skills.pitching()
    }

    pub fn fielding_skill(&self) -> f32 {
        self.skills.fielding()
    }

    pub fn overall_skill(&self) -> f32 {
        self.skills.overall()
    }

    pub fn preferred_pitcher_role(&self) -> PitcherRole {
        self.aptitudes.preferred_role()
    }

    /// Every full level raises one random attribute by 1-3 and lifts morale.
    pub fn gain_experience<R: RngExt>(&mut self, xp: u32, rng: &mut R) -> u32 {
        self.attributes.experience += xp;

        let mut levels = 0;

        while self.attributes.experience >= EXPERIENCE_PER_LEVEL {
            self.attributes.experience -= EXPERIENCE_PER_LEVEL;
            self.level_up(rng);
            levels += 1;
        }

        levels
    }

    fn level_up<R: RngExt>(&mut self, rng: &mut R) {
        let attribute = LEVEL_UP_ATTRIBUTES[rng.random_range(0..LEVEL_UP_ATTRIBUTES.len())];
        let delta = rng.random_range(1..=3) as f32;

        let applied = self.skills.improve(attribute, delta);

        if attribute == SkillAttribute::Stamina {
            self.attributes
                .restore_stamina(applied, self.skills.stamina);
        }

        self.attributes.raise_morale(LEVEL_UP_MORALE_BONUS);

        debug!("player {} level up: {:?} +{}", self.id, attribute, applied);
    }

    pub fn apply_fatigue(&mut self, amount: f32) {
        self.attributes.drain_stamina(amount);

        if self.attributes.current_stamina < LOW_STAMINA_MORALE_THRESHOLD {
            self.attributes.lower_morale(LOW_STAMINA_MORALE_PENALTY);
        }
    }

    pub fn recover(&mut self, amount: f32) {
        self.attributes
            .restore_stamina(amount, self.skills.stamina);
        self.attributes.raise_morale(1.0);
    }

    pub fn injure(&mut self, injury: Injury) {
        self.attributes.is_injured = true;
        self.attributes.injury = Some(injury);
        self.attributes.lower_morale(INJURY_MORALE_PENALTY);
    }

    pub fn advance_recovery(&mut self, days: u32) -> bool {
        if !self.attributes.is_injured {
            return false;
        }

        let healed = match self.attributes.injury.as_mut() {
            Some(injury) => {
                injury.days_remaining = injury.days_remaining.saturating_sub(days);
                injury.is_healed()
            }
            None => true,
        };

        if healed {
            self.attributes.is_injured = false;
            self.attributes.injury = None;
            self.attributes.raise_morale(RECOVERY_MORALE_BONUS);
            self.attributes
                .restore_stamina(RECOVERY_STAMINA_BONUS, self.skills.stamina);
        }

        healed
    }

    pub fn reset_season(&mut self) {
        self.statistics = PlayerStatistics::new();
        self.attributes.current_stamina = self.skills.stamina;
        self.attributes.is_injured = false;
        self.attributes.injury = None;
        self.attributes.morale = MORALE_DEFAULT_VALUE;
        self.attributes.experience = 0;
    }

    /// Clamps skills, aptitudes and condition back into range.
    pub fn normalize(&mut self) {
        self.skills.clamp();
        self.aptitudes.clamp();
        self.attributes.normalize(self.skills.stamina);
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::InjurySeverity;
    use crate::shared::RandomUtils;

    #[test]
    fn test_gain_experience_below_level() {
        let mut rng = RandomUtils::seeded(1);
        let mut player = player();

        let levels = player.gain_experience(60, &mut rng);

        assert_eq!(levels, 0);
        assert_eq!(player.attributes.experience, 60);
        assert_eq!(player.skills, PlayerSkills::uniform(60.0));
    }

    #[test]
    fn test_gain_experience_levels_up() {
        let mut rng = RandomUtils::seeded(2);
        let mut player = player();
        let before = total(&player.skills);

        let levels = player.gain_experience(250, &mut rng);

        assert_eq!(levels, 2);
        assert_eq!(player.attributes.experience, 50);
        assert_eq!(player.attributes.morale, 56.0);

        let gained = total(&player.skills) - before;
        assert!((2.0..=6.0).contains(&gained), "gained {}", gained);
    }

    #[test]
    fn test_apply_fatigue_lowers_morale_when_exhausted() {
        let mut player = player();
        player.attributes.current_stamina = 12.0;

        player.apply_fatigue(5.0);

        assert_eq!(player.attributes.current_stamina, 7.0);
        assert_eq!(player.attributes.morale, 45.0);
    }

    #[test]
    fn test_apply_fatigue_keeps_morale_when_rested() {
        let mut player = player();

        player.apply_fatigue(5.0);

        assert_eq!(player.attributes.current_stamina, 55.0);
        assert_eq!(player.attributes.morale, 50.0);
    }

    #[test]
    fn test_recover_caps_at_base_stamina() {
        let mut player = player();
        player.attributes.current_stamina = 50.0;

        player.recover(30.0);

        assert_eq!(player.attributes.current_stamina, 60.0);
        assert_eq!(player.attributes.morale, 51.0);
    }

    #[test]
    fn test_reset_season() {
        let mut rng = RandomUtils::seeded(3);
        let mut player = player();
        player.statistics.hits = 40;
        player.attributes.current_stamina = 5.0;
        player.attributes.morale = 90.0;
        player.attributes.experience = 70;
        player.injure(crate::club::Injury::with_severity(InjurySeverity::Severe, &mut rng));

        player.reset_season();

        assert_eq!(player.statistics, PlayerStatistics::new());
        assert_eq!(player.attributes.current_stamina, 60.0);
        assert_eq!(player.attributes.morale, 50.0);
        assert_eq!(player.attributes.experience, 0);
        assert!(!player.is_injured());
    }

    #[test]
    fn test_normalize() {
        let mut player = player();
        player.skills.stamina = 40.0;
        player.skills.power = 120.0;

        player.normalize();

        assert_eq!(player.skills.power, 100.0);
        assert_eq!(player.attributes.current_stamina, 40.0);
    }

    #[test]
    fn test_preferred_pitcher_role_follows_aptitudes() {
        let mut player = player();

        player.aptitudes = PitcherAptitudes {
            starter: 40.0,
            middle: 55.0,
            closer: 70.0,
        };
        assert_eq!(player.preferred_pitcher_role(), PitcherRole::Closer);

        player.aptitudes.starter = 70.0;
        assert_eq!(player.preferred_pitcher_role(), PitcherRole::Starter);

        player.aptitudes.closer = 30.0;
        player.aptitudes.starter = 30.0;
        assert_eq!(player.preferred_pitcher_role(), PitcherRole::Middle);
    }

    fn total(skills: &PlayerSkills) -> f32 {
        skills.contact
            + skills.power
            + skills.speed
            + skills.arm
            + skills.defense
            + skills.stamina
            + skills.control
            + skills.breaking
    }

    fn player() -> Player {
        Player::builder()
            .id(7)
            .full_name(FullName::new("Daichi".to_string(), "Mori".to_string()))
            .skills(PlayerSkills::uniform(60.0))
            .build()
            .unwrap()
    }
}
