use crate::club::{PitcherAptitudes, Player, PlayerAttributes, PlayerSkills, PlayerStatistics};
use crate::shared::FullName;

const DEFAULT_AGE: u8 = 25;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<FullName>,
    skills: Option<PlayerSkills>,
    aptitudes: Option<PitcherAptitudes>,
    age: Option<u8>,
    attributes: Option<PlayerAttributes>,
    statistics: Option<PlayerStatistics>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn aptitudes(mut self, aptitudes: PitcherAptitudes) -> Self {
        self.aptitudes = Some(aptitudes);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn statistics(mut self, statistics: PlayerStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let skills = self.skills.ok_or("skills is required")?;

        let mut attributes = self
            .attributes
            .unwrap_or_else(|| PlayerAttributes::fresh(DEFAULT_AGE, skills.stamina));

        if let Some(age) = self.age {
            attributes.age = age;
        }

        let mut player = Player {
            id: self.id.ok_or("id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            skills,
            aptitudes: self.aptitudes.unwrap_or_default(),
            attributes,
            statistics: self.statistics.unwrap_or_default(),
        };

        player.normalize();

        Ok(player)
    }
}
