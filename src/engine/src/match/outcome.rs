use rand::RngExt;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateAppearanceOutcome {
    HomeRun,
    Triple,
    Double,
    Single,
    Walk,
    StrikeOut,
    Out,
}

impl PlateAppearanceOutcome {
    pub const ALL: [PlateAppearanceOutcome; 7] = [
        PlateAppearanceOutcome::HomeRun,
        PlateAppearanceOutcome::Triple,
        PlateAppearanceOutcome::Double,
        PlateAppearanceOutcome::Single,
        PlateAppearanceOutcome::Walk,
        PlateAppearanceOutcome::StrikeOut,
        PlateAppearanceOutcome::Out,
    ];

    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            PlateAppearanceOutcome::HomeRun
                | PlateAppearanceOutcome::Triple
                | PlateAppearanceOutcome::Double
                | PlateAppearanceOutcome::Single
        )
    }

    pub fn is_out(&self) -> bool {
        matches!(
            self,
            PlateAppearanceOutcome::StrikeOut | PlateAppearanceOutcome::Out
        )
    }

    /// Walks do not count as official at-bats.
    pub fn is_at_bat(&self) -> bool {
        *self != PlateAppearanceOutcome::Walk
    }
}

impl Display for PlateAppearanceOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            PlateAppearanceOutcome::HomeRun => "home run",
            PlateAppearanceOutcome::Triple => "triple",
            PlateAppearanceOutcome::Double => "double",
            PlateAppearanceOutcome::Single => "single",
            PlateAppearanceOutcome::Walk => "walk",
            PlateAppearanceOutcome::StrikeOut => "strikeout",
            PlateAppearanceOutcome::Out => "out",
        };

        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterProfile {
    pub contact: f32,
    pub power: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitcherProfile {
    pub control: f32,
    pub current_stamina: f32,
    pub breaking: f32,
}

pub struct PlateAppearanceResolver;

impl PlateAppearanceResolver {
    const SWING_RANGE: u32 = 50;

    pub fn batter_score(batter: &BatterProfile, swing: u32) -> f32 {
        batter.contact * 0.6 + batter.power * 0.4 + swing as f32
    }

    pub fn pitcher_score(pitcher: &PitcherProfile, delivery: u32) -> f32 {
        pitcher.control * 0.5 + pitcher.current_stamina * 0.3 + pitcher.breaking * 0.2 + delivery as f32
    }

    /// One plate appearance. Pure: the caller owns every stat change.
    pub fn resolve<R: RngExt>(
        batter: &BatterProfile,
        pitcher: &PitcherProfile,
        rng: &mut R,
    ) -> PlateAppearanceOutcome {
        let batter_score = Self::batter_score(batter, rng.random_range(0..Self::SWING_RANGE));
        let pitcher_score = Self::pitcher_score(pitcher, rng.random_range(0..Self::SWING_RANGE));

        Self::classify(batter_score - pitcher_score, rng)
    }

    pub fn classify<R: RngExt>(diff: f32, rng: &mut R) -> PlateAppearanceOutcome {
        if diff > 50.0 {
            PlateAppearanceOutcome::HomeRun
        } else if diff > 40.0 {
            if rng.random::<f64>() < 0.3 {
                PlateAppearanceOutcome::Triple
            } else {
                PlateAppearanceOutcome::Double
            }
        } else if diff > 30.0 {
            if rng.random::<f64>() < 0.5 {
                PlateAppearanceOutcome::Double
            } else {
                PlateAppearanceOutcome::Single
            }
        } else if diff > 10.0 {
            PlateAppearanceOutcome::Single
        } else if diff > 0.0 {
            if rng.random::<f64>() < 0.5 {
                PlateAppearanceOutcome::Single
            } else {
                PlateAppearanceOutcome::Out
            }
        } else if diff > -20.0 {
            PlateAppearanceOutcome::Out
        } else if diff > -40.0 {
            PlateAppearanceOutcome::StrikeOut
        } else if rng.random::<f64>() < 0.2 {
            PlateAppearanceOutcome::Walk
        } else {
            PlateAppearanceOutcome::StrikeOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::RandomUtils;
    use std::collections::HashMap;

    #[test]
    fn test_deterministic_bands() {
        let mut rng = RandomUtils::seeded(1);

        assert_eq!(PlateAppearanceResolver::classify(50.5, &mut rng), PlateAppearanceOutcome::HomeRun);
        assert!(PlateAppearanceResolver::classify(30.5, &mut rng).is_hit());
        assert_eq!(PlateAppearanceResolver::classify(20.0, &mut rng), PlateAppearanceOutcome::Single);
        assert_eq!(PlateAppearanceResolver::classify(0.0, &mut rng), PlateAppearanceOutcome::Out);
        assert_eq!(PlateAppearanceResolver::classify(-20.0, &mut rng), PlateAppearanceOutcome::StrikeOut);
        assert_eq!(PlateAppearanceResolver::classify(-39.9, &mut rng), PlateAppearanceOutcome::StrikeOut);
    }

    #[test]
    fn test_band_boundaries_are_exclusive() {
        let mut rng = RandomUtils::seeded(2);

        for _ in 0..200 {
            // exactly 50 falls into the triple/double band
            let outcome = PlateAppearanceResolver::classify(50.0, &mut rng);
            assert!(matches!(outcome, PlateAppearanceOutcome::Triple | PlateAppearanceOutcome::Double));

            let outcome = PlateAppearanceResolver::classify(10.0, &mut rng);
            assert!(matches!(outcome, PlateAppearanceOutcome::Single | PlateAppearanceOutcome::Out));
        }
    }

    #[test]
    fn test_random_bands_only_produce_their_outcomes() {
        let mut rng = RandomUtils::seeded(3);

        for _ in 0..500 {
            let deep = PlateAppearanceResolver::classify(-60.0, &mut rng);
            assert!(matches!(deep, PlateAppearanceOutcome::Walk | PlateAppearanceOutcome::StrikeOut));

            let gap = PlateAppearanceResolver::classify(35.0, &mut rng);
            assert!(matches!(gap, PlateAppearanceOutcome::Double | PlateAppearanceOutcome::Single));
        }
    }

    #[test]
    fn test_walk_share_in_deep_band() {
        let mut rng = RandomUtils::seeded(4);

        let walks = (0..10_000)
            .filter(|_| PlateAppearanceResolver::classify(-45.0, &mut rng) == PlateAppearanceOutcome::Walk)
            .count();

        assert!((1800..2200).contains(&walks), "walks: {}", walks);
    }

    #[test]
    fn test_scores() {
        let batter = BatterProfile { contact: 80.0, power: 80.0 };
        let pitcher = PitcherProfile {
            control: 40.0,
            current_stamina: 40.0,
            breaking: 40.0,
        };

        assert!((PlateAppearanceResolver::batter_score(&batter, 10) - 90.0).abs() < 1e-4);
        assert!((PlateAppearanceResolver::pitcher_score(&pitcher, 0) - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_seeded_distribution_is_pinned() {
        let batter = BatterProfile { contact: 80.0, power: 80.0 };
        let pitcher = PitcherProfile {
            control: 40.0,
            current_stamina: 40.0,
            breaking: 40.0,
        };

        let counts = distribution(&batter, &pitcher, 20260101);

        // batter +40 before the swing/delivery draws: diff spans (-9, 89), so no strikeouts or walks
        let expected = HashMap::from([
            (PlateAppearanceOutcome::HomeRun, 305),
            (PlateAppearanceOutcome::Triple, 46),
            (PlateAppearanceOutcome::Double, 243),
            (PlateAppearanceOutcome::Single, 359),
            (PlateAppearanceOutcome::Out, 47),
        ]);

        assert_eq!(counts, expected);
        assert_eq!(counts, distribution(&batter, &pitcher, 20260101));
    }

    fn distribution(
        batter: &BatterProfile,
        pitcher: &PitcherProfile,
        seed: u64,
    ) -> HashMap<PlateAppearanceOutcome, u32> {
        let mut rng = RandomUtils::seeded(seed);
        let mut counts = HashMap::new();

        for _ in 0..1000 {
            let outcome = PlateAppearanceResolver::resolve(batter, pitcher, &mut rng);
            *counts.entry(outcome).or_insert(0) += 1;
        }

        counts
    }
}
