use crate::club::{Player, PlayerCollection, PlayerStatistics};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;

/// Minimum at-bats to qualify for the batting average list.
pub const MIN_AT_BATS: u32 = 30;
/// Minimum outs recorded (10 innings) to qualify for the ERA list.
pub const MIN_OUTS_PITCHED: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderEntry {
    pub player_id: u32,
    pub name: String,
    pub value: f32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LeagueLeaders {
    pub batting_average: Vec<LeaderEntry>,
    pub home_runs: Vec<LeaderEntry>,
    pub rbi: Vec<LeaderEntry>,
    pub era: Vec<LeaderEntry>,
    pub wins: Vec<LeaderEntry>,
    pub strikeouts: Vec<LeaderEntry>,
}

impl LeagueLeaders {
    pub fn collect(players: &PlayerCollection, limit: usize) -> Self {
        LeagueLeaders {
            batting_average: Self::top(
                players,
                limit,
                |s| s.at_bats >= MIN_AT_BATS,
                |s| s.batting_average(),
                false,
            ),
            home_runs: Self::top(players, limit, |s| s.home_runs > 0, |s| s.home_runs as f32, false),
            rbi: Self::top(players, limit, |s| s.rbi > 0, |s| s.rbi as f32, false),
            era: Self::top(
                players,
                limit,
                |s| s.outs_pitched >= MIN_OUTS_PITCHED,
                |s| s.era(),
                true,
            ),
            wins: Self::top(players, limit, |s| s.wins > 0, |s| s.wins as f32, false),
            strikeouts: Self::top(
                players,
                limit,
                |s| s.pitcher_strikeouts > 0,
                |s| s.pitcher_strikeouts as f32,
                false,
            ),
        }
    }

    fn top<Q, V>(players: &PlayerCollection, limit: usize, qualifies: Q, value: V, ascending: bool) -> Vec<LeaderEntry>
    where
        Q: Fn(&PlayerStatistics) -> bool,
        V: Fn(&PlayerStatistics) -> f32,
    {
        players
            .iter()
            .filter(|p| qualifies(&p.statistics))
            .map(|p| Self::entry(p, value(&p.statistics)))
            .sorted_by(|a, b| {
                let order = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
                let order = if ascending { order } else { order.reverse() };

                order.then(a.player_id.cmp(&b.player_id))
            })
            .take(limit)
            .collect()
    }

    fn entry(player: &Player, value: f32) -> LeaderEntry {
        LeaderEntry {
            player_id: player.id,
            name: player.full_name.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerSkills;
    use crate::shared::FullName;

    #[test]
    fn test_home_run_leaders_sorted_desc() {
        let players = players(&[(1, stats_hr(10)), (2, stats_hr(25)), (3, stats_hr(0)), (4, stats_hr(25))]);

        let leaders = LeagueLeaders::collect(&players, 2);

        let ids: Vec<u32> = leaders.home_runs.iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(leaders.home_runs[0].value, 25.0);
    }

    #[test]
    fn test_batting_average_needs_at_bats() {
        let mut hot = PlayerStatistics::new();
        hot.at_bats = 10;
        hot.hits = 8;

        let mut regular = PlayerStatistics::new();
        regular.at_bats = 100;
        regular.hits = 30;

        let leaders = LeagueLeaders::collect(&players(&[(1, hot), (2, regular)]), 5);

        assert_eq!(leaders.batting_average.len(), 1);
        assert_eq!(leaders.batting_average[0].player_id, 2);
        assert!((leaders.batting_average[0].value - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_era_ascending() {
        let mut ace = PlayerStatistics::new();
        ace.outs_pitched = 90;
        ace.runs_allowed = 5;

        let mut average = PlayerStatistics::new();
        average.outs_pitched = 90;
        average.runs_allowed = 15;

        let mut spot = PlayerStatistics::new();
        spot.outs_pitched = 6;

        let leaders = LeagueLeaders::collect(&players(&[(1, average), (2, ace), (3, spot)]), 5);

        let ids: Vec<u32> = leaders.era.iter().map(|e| e.player_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(leaders.era[0].value, 1.5);
    }

    #[test]
    fn test_empty_lists() {
        let leaders = LeagueLeaders::collect(&players(&[(1, PlayerStatistics::new())]), 5);

        assert!(leaders.wins.is_empty());
        assert!(leaders.strikeouts.is_empty());
        assert!(leaders.rbi.is_empty());
    }

    fn stats_hr(home_runs: u32) -> PlayerStatistics {
        let mut stats = PlayerStatistics::new();
        stats.home_runs = home_runs;
        stats
    }

    fn players(data: &[(u32, PlayerStatistics)]) -> PlayerCollection {
        PlayerCollection::new(
            data.iter()
                .map(|(id, stats)| {
                    Player::builder()
                        .id(*id)
                        .full_name(FullName::new("Lead".to_string(), format!("Er{}", id)))
                        .skills(PlayerSkills::default())
                        .statistics(*stats)
                        .build()
                        .unwrap()
                })
                .collect(),
        )
    }
}
