use serde::{Deserialize, Serialize};

pub const SKILL_MIN_VALUE: f32 = 0.0;
pub const SKILL_MAX_VALUE: f32 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillAttribute {
    Contact,
    Power,
    Speed,
    Arm,
    Defense,
    Stamina,
    Control,
    Breaking,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub contact: f32,
    pub power: f32,
    pub speed: f32,
    pub arm: f32,
    pub defense: f32,
    /// Base stamina; the in-season value lives in `PlayerAttributes::current_stamina`.
    pub stamina: f32,
    pub control: f32,
    pub breaking: f32,
}

impl Default for PlayerSkills {
    fn default() -> Self {
        PlayerSkills::uniform(50.0)
    }
}

impl PlayerSkills {
    pub fn uniform(value: f32) -> Self {
        PlayerSkills {
            contact: value,
            power: value,
            speed: value,
            arm: value,
            defense: value,
            stamina: value,
            control: value,
            breaking: value,
        }
    }

    pub fn batting(&self) -> f32 {
        self.contact * 0.65 + self.power * 0.35
    }

    pub fn pitching(&self) -> f32 {
        self.stamina * 0.4 + self.control * 0.4 + self.breaking * 0.2
    }

    pub fn fielding(&self) -> f32 {
        self.defense * 0.5 + self.arm * 0.3 + self.speed * 0.2
    }

    pub fn overall(&self) -> f32 {
        (self.batting() + self.pitching() + self.fielding()) / 3.0
    }

    pub fn get(&self, attribute: SkillAttribute) -> f32 {
        match attribute {
            SkillAttribute::Contact => self.contact,
            SkillAttribute::Power => self.power,
            SkillAttribute::Speed => self.speed,
            SkillAttribute::Arm => self.arm,
            SkillAttribute::Defense => self.defense,
            SkillAttribute::Stamina => self.stamina,
            SkillAttribute::Control => self.control,
            SkillAttribute::Breaking => self.breaking,
        }
    }

    fn get_mut(&mut self, attribute: SkillAttribute) -> &mut f32 {
        match attribute {
            SkillAttribute::Contact => &mut self.contact,
            SkillAttribute::Power => &mut self.power,
            SkillAttribute::Speed => &mut self.speed,
            SkillAttribute::Arm => &mut self.arm,
            SkillAttribute::Defense => &mut self.defense,
            SkillAttribute::Stamina => &mut self.stamina,
            SkillAttribute::Control => &mut self.control,
            SkillAttribute::Breaking => &mut self.breaking,
        }
    }

    /// Raises an attribute, capped at the maximum. Returns the amount actually applied.
    pub fn improve(&mut self, attribute: SkillAttribute, amount: f32) -> f32 {
        let value = self.get_mut(attribute);
        let before = *value;

        *value = (before + amount).clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);

        *value - before
    }

    pub fn clamp(&mut self) {
        for value in [
            &mut self.contact,
            &mut self.power,
            &mut self.speed,
            &mut self.arm,
            &mut self.defense,
            &mut self.stamina,
            &mut self.control,
            &mut self.breaking,
        ] {
            *value = (*value).clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitcherRole {
    Starter,
    Middle,
    Closer,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitcherAptitudes {
    pub starter: f32,
    pub middle: f32,
    pub closer: f32,
}

impl Default for PitcherAptitudes {
    fn default() -> Self {
        PitcherAptitudes {
            starter: 50.0,
            middle: 50.0,
            closer: 50.0,
        }
    }
}

impl PitcherAptitudes {
    pub fn get(&self, role: PitcherRole) -> f32 {
        match role {
            PitcherRole::Starter => self.starter,
            PitcherRole::Middle => self.middle,
            PitcherRole::Closer => self.closer,
        }
    }

    /// Starter wins ties, then closer, then middle relief.
    pub fn preferred_role(&self) -> PitcherRole {
        if self.starter >= self.middle && self.starter >= self.closer {
            PitcherRole::Starter
        } else if self.closer >= self.middle {
            PitcherRole::Closer
        } else {
            PitcherRole::Middle
        }
    }

    pub fn clamp(&mut self) {
        self.starter = self.starter.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        self.middle = self.middle.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
        self.closer = self.closer.clamp(SKILL_MIN_VALUE, SKILL_MAX_VALUE);
    }
}
