use crate::loaders::NamesEntity;
use engine::shared::FullName;
use engine::{PitcherAptitudes, Player, PlayerSkills};
use rand::RngExt;

const MIN_OVERALL: i32 = 40;
const MAX_OVERALL: i32 = 90;

const MIN_AGE: u8 = 19;
const MAX_AGE: u8 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Batter,
    Pitcher,
}

pub struct PlayerGenerator {
    first_names: Vec<String>,
    last_names: Vec<String>,
    next_id: u32,
}

impl PlayerGenerator {
    pub fn with_names(names: &NamesEntity) -> Self {
        PlayerGenerator {
            first_names: names.first_names.clone(),
            last_names: names.last_names.clone(),
            next_id: 1,
        }
    }

    pub fn generate<R: RngExt>(&mut self, kind: PlayerKind, rng: &mut R) -> Player {
        let overall = rng.random_range(MIN_OVERALL..=MAX_OVERALL);

        let id = self.next_id;
        self.next_id += 1;

        Player::builder()
            .id(id)
            .full_name(FullName::new(
                Self::pick(&self.first_names, rng),
                Self::pick(&self.last_names, rng),
            ))
            .skills(Self::generate_skills(kind, overall, rng))
            .aptitudes(Self::generate_aptitudes(kind, overall, rng))
            .age(rng.random_range(MIN_AGE..=MAX_AGE))
            .build()
            .expect("generated player is missing required fields")
    }

    fn generate_skills<R: RngExt>(kind: PlayerKind, overall: i32, rng: &mut R) -> PlayerSkills {
        // pitchers hit poorly, position players barely pitch
        let (hitting, throwing) = match kind {
            PlayerKind::Batter => (overall, overall - 30),
            PlayerKind::Pitcher => (overall - 25, overall),
        };

        PlayerSkills {
            contact: Self::around(hitting, 10, rng),
            power: Self::around(hitting, 15, rng),
            speed: Self::around(overall, 20, rng),
            arm: Self::around(overall, 20, rng),
            defense: Self::around(overall, 20, rng),
            stamina: Self::around(overall, 20, rng),
            control: Self::around(throwing, 20, rng),
            breaking: Self::around(throwing, 20, rng),
        }
    }

    fn generate_aptitudes<R: RngExt>(kind: PlayerKind, overall: i32, rng: &mut R) -> PitcherAptitudes {
        match kind {
            PlayerKind::Batter => PitcherAptitudes {
                starter: Self::around(20, 10, rng),
                middle: Self::around(20, 10, rng),
                closer: Self::around(20, 10, rng),
            },
            PlayerKind::Pitcher => PitcherAptitudes {
                starter: Self::around(overall, 25, rng),
                middle: Self::around(overall, 25, rng),
                closer: Self::around(overall, 25, rng),
            },
        }
    }

    /// `base` plus a uniform offset in `[-spread, spread]`, kept inside [1, 100].
    fn around<R: RngExt>(base: i32, spread: i32, rng: &mut R) -> f32 {
        (base + rng.random_range(-spread..=spread)).clamp(1, 100) as f32
    }

    fn pick<R: RngExt>(values: &[String], rng: &mut R) -> String {
        if values.is_empty() {
            return String::from("Unknown");
        }

        values[rng.random_range(0..values.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::NamesLoader;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ids_are_sequential() {
        let mut generator = PlayerGenerator::with_names(&NamesLoader::load());
        let mut rng = StdRng::seed_from_u64(1);

        let first = generator.generate(PlayerKind::Batter, &mut rng);
        let second = generator.generate(PlayerKind::Pitcher, &mut rng);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_skills_in_range() {
        let mut generator = PlayerGenerator::with_names(&NamesLoader::load());
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..200 {
            let player = generator.generate(PlayerKind::Pitcher, &mut rng);
            let skills = player.skills;

            for value in [
                skills.contact,
                skills.power,
                skills.speed,
                skills.arm,
                skills.defense,
                skills.stamina,
                skills.control,
                skills.breaking,
            ] {
                assert!((1.0..=100.0).contains(&value));
            }

            assert!((MIN_AGE..=MAX_AGE).contains(&player.attributes.age));
            assert_eq!(player.attributes.current_stamina, skills.stamina);
        }
    }

    #[test]
    fn test_pitchers_out_pitch_batters() {
        let mut generator = PlayerGenerator::with_names(&NamesLoader::load());
        let mut rng = StdRng::seed_from_u64(3);

        let average = |kind: PlayerKind, generator: &mut PlayerGenerator, rng: &mut StdRng| -> (f32, f32) {
            let players: Vec<Player> = (0..100).map(|_| generator.generate(kind, rng)).collect();

            let pitching: f32 = players.iter().map(|p| p.pitching_skill()).sum::<f32>() / 100.0;
            let batting: f32 = players.iter().map(|p| p.batting_skill()).sum::<f32>() / 100.0;

            (pitching, batting)
        };

        let (pitcher_pitching, pitcher_batting) = average(PlayerKind::Pitcher, &mut generator, &mut rng);
        let (batter_pitching, batter_batting) = average(PlayerKind::Batter, &mut generator, &mut rng);

        assert!(pitcher_pitching > batter_pitching);
        assert!(batter_batting > pitcher_batting);
    }

    #[test]
    fn test_same_seed_same_player() {
        let names = NamesLoader::load();

        let first = PlayerGenerator::with_names(&names).generate(PlayerKind::Batter, &mut StdRng::seed_from_u64(9));
        let second = PlayerGenerator::with_names(&names).generate(PlayerKind::Batter, &mut StdRng::seed_from_u64(9));

        assert_eq!(first.full_name.to_string(), second.full_name.to_string());
        assert_eq!(first.skills, second.skills);
    }
}
