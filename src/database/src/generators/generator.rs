use crate::generators::{PlayerGenerator, PlayerKind};
use crate::loaders::{NamesEntity, NamesLoader};
use engine::shared::RandomUtils;
use engine::{DraftPick, League, Player, PlayerCollection, Team, TeamCollection};
use log::info;
use rand::RngExt;

pub const DEFAULT_TEAMS: u32 = 6;
pub const DEFAULT_ROSTER_SIZE: u32 = 25;
pub const DRAFT_ROUNDS: u8 = 3;

/// Share of a roster made of pitchers (12 of 25).
const PITCHER_SHARE: f32 = 12.0 / 25.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub teams: u32,
    pub roster_size: u32,
    pub seed: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            teams: DEFAULT_TEAMS,
            roster_size: DEFAULT_ROSTER_SIZE,
            seed: 0,
        }
    }
}

impl GeneratorSettings {
    pub fn pitchers(&self) -> u32 {
        (self.roster_size as f32 * PITCHER_SHARE).round() as u32
    }

    pub fn batters(&self) -> u32 {
        self.roster_size - self.pitchers()
    }
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(settings: &GeneratorSettings) -> League {
        Self::generate_with_names(settings, &NamesLoader::load())
    }

    pub fn generate_with_names(settings: &GeneratorSettings, names: &NamesEntity) -> League {
        let mut rng = RandomUtils::seeded(settings.seed);
        let mut player_generator = PlayerGenerator::with_names(names);

        let mut players = Vec::with_capacity((settings.teams * settings.roster_size) as usize);
        let mut teams = Vec::with_capacity(settings.teams as usize);

        for idx in 0..settings.teams {
            let roster = Self::generate_roster(settings, &mut player_generator, &mut rng);
            let roster_ids = roster.iter().map(|p| p.id).collect();

            let mut team = Team::new(idx + 1, Self::team_name(names, idx)).with_roster(roster_ids);

            for round in 1..=DRAFT_ROUNDS {
                let overall = (round as u32 - 1) * settings.teams + idx + 1;
                team.add_pick(DraftPick::new(round, overall as u16));
            }

            players.extend(roster);
            teams.push(team);
        }

        info!(
            "🧢 generated league: {} teams, {} players (seed {})",
            teams.len(),
            players.len(),
            settings.seed
        );

        League::new(
            1,
            String::from("Pennant League"),
            TeamCollection::new(teams),
            PlayerCollection::new(players),
        )
    }

    /// Position players first so the first nine form the default lineup.
    fn generate_roster<R: RngExt>(
        settings: &GeneratorSettings,
        player_generator: &mut PlayerGenerator,
        rng: &mut R,
    ) -> Vec<Player> {
        let mut roster = Vec::with_capacity(settings.roster_size as usize);

        for _ in 0..settings.batters() {
            roster.push(player_generator.generate(PlayerKind::Batter, rng));
        }

        for _ in 0..settings.pitchers() {
            roster.push(player_generator.generate(PlayerKind::Pitcher, rng));
        }

        roster
    }

    fn team_name(names: &NamesEntity, idx: u32) -> String {
        if names.team_names.is_empty() {
            return format!("Team {}", idx + 1);
        }

        let count = names.team_names.len() as u32;
        let base = &names.team_names[(idx % count) as usize];

        match idx / count {
            0 => base.clone(),
            cycle => format!("{} {}", base, cycle + 1),
        }
    }
}
