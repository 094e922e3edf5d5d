use crate::club::Player;
use rand::RngExt;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const INJURY_BASE_PROBABILITY: f64 = 0.01;

const LOW_STAMINA_THRESHOLD: f32 = 30.0;
const EXHAUSTED_STAMINA_THRESHOLD: f32 = 15.0;
const VETERAN_AGE: u8 = 32;
const OLD_VETERAN_AGE: u8 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjurySeverity {
    Minor,
    Moderate,
    Severe,
    CareerThreatening,
}

impl InjurySeverity {
    /// Inclusive (min_days, max_days) recovery window
    pub fn recovery_days(&self) -> (u32, u32) {
        match self {
            InjurySeverity::Minor => (1, 3),
            InjurySeverity::Moderate => (4, 7),
            InjurySeverity::Severe => (8, 21),
            InjurySeverity::CareerThreatening => (60, 180),
        }
    }

    fn descriptions(&self) -> &'static [&'static str] {
        match self {
            InjurySeverity::Minor => &[
                "Muscle soreness",
                "Minor bruise",
                "Slight strain",
                "Fatigue",
            ],
            InjurySeverity::Moderate => &[
                "Pulled muscle",
                "Sprained ankle",
                "Finger jam",
                "Back stiffness",
            ],
            InjurySeverity::Severe => &[
                "Torn ligament",
                "Fractured bone",
                "Shoulder injury",
                "Knee injury",
            ],
            InjurySeverity::CareerThreatening => &[
                "ACL tear",
                "Elbow ligament reconstruction",
                "Severe back injury",
                "Career-threatening injury",
            ],
        }
    }

    /// Minor 60%, moderate 25%, severe 13%, career-threatening 2%.
    pub fn roll<R: RngExt>(rng: &mut R) -> Self {
        let roll = rng.random::<f64>();

        if roll < 0.60 {
            InjurySeverity::Minor
        } else if roll < 0.85 {
            InjurySeverity::Moderate
        } else if roll < 0.98 {
            InjurySeverity::Severe
        } else {
            InjurySeverity::CareerThreatening
        }
    }
}

impl Display for InjurySeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            InjurySeverity::Minor => "minor",
            InjurySeverity::Moderate => "moderate",
            InjurySeverity::Severe => "severe",
            InjurySeverity::CareerThreatening => "career-threatening",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    pub severity: InjurySeverity,
    pub description: String,
    pub days_remaining: u32,
}

impl Injury {
    pub fn with_severity<R: RngExt>(severity: InjurySeverity, rng: &mut R) -> Self {
        let (min_days, max_days) = severity.recovery_days();
        let descriptions = severity.descriptions();

        Injury {
            severity,
            description: descriptions[rng.random_range(0..descriptions.len())].to_string(),
            days_remaining: rng.random_range(min_days..=max_days),
        }
    }

    pub fn generate<R: RngExt>(rng: &mut R) -> Self {
        let severity = InjurySeverity::roll(rng);
        Self::with_severity(severity, rng)
    }

    pub fn is_healed(&self) -> bool {
        self.days_remaining == 0
    }
}

/// Stamina- and age-sensitive injury checks shared by games and the daily loop.
pub struct InjuryModel;

impl InjuryModel {
    pub fn probability(current_stamina: f32, age: u8, in_game: bool) -> f64 {
        let mut probability = INJURY_BASE_PROBABILITY;

        if current_stamina < LOW_STAMINA_THRESHOLD {
            probability *= 2.0;
        }

        if current_stamina < EXHAUSTED_STAMINA_THRESHOLD {
            probability *= 2.0;
        }

        if age > VETERAN_AGE {
            probability *= 1.5;
        }

        if age > OLD_VETERAN_AGE {
            probability *= 2.0;
        }

        if in_game {
            probability *= 1.2;
        }

        probability
    }

    /// Rolls without touching the player. Already injured players are never re-injured.
    pub fn roll<R: RngExt>(player: &Player, in_game: bool, rng: &mut R) -> Option<Injury> {
        if player.is_injured() {
            return None;
        }

        let probability = Self::probability(
            player.attributes.current_stamina,
            player.attributes.age,
            in_game,
        );

        if rng.random::<f64>() < probability {
            Some(Injury::generate(rng))
        } else {
            None
        }
    }

    pub fn check_for_injury<R: RngExt>(
        player: &mut Player,
        in_game: bool,
        rng: &mut R,
    ) -> Option<Injury> {
        let injury = Self::roll(player, in_game, rng)?;

        player.injure(injury.clone());

        Some(injury)
    }

    /// Returns true when the player came back from the injury during this call.
    pub fn advance_recovery(player: &mut Player, days: u32) -> bool {
        player.advance_recovery(days)
    }
}
