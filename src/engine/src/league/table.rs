use crate::club::{Team, TeamCollection};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub win_percentage: f32,
    pub games_behind: f32,
}

impl LeagueTableRow {
    fn from_team(team: &Team) -> Self {
        LeagueTableRow {
            team_id: team.id,
            team_name: team.name.clone(),
            wins: team.wins,
            losses: team.losses,
            ties: team.ties,
            win_percentage: team.win_percentage(),
            games_behind: 0.0,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// Standings, recomputed from team records on demand.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn from_teams(teams: &TeamCollection) -> Self {
        let mut rows: Vec<LeagueTableRow> = teams.iter().map(LeagueTableRow::from_team).collect();

        rows.sort_by(Self::compare);

        if let Some((top_wins, top_losses)) = rows.first().map(|r| (r.wins, r.losses)) {
            for row in rows.iter_mut() {
                let diff = (top_wins as i64 - row.wins as i64) + (row.losses as i64 - top_losses as i64);
                row.games_behind = diff as f32 / 2.0;
            }
        }

        LeagueTable { rows }
    }

    /// Wins desc, losses asc, win% desc; team id keeps the order stable.
    fn compare(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
        b.wins
            .cmp(&a.wins)
            .then(a.losses.cmp(&b.losses))
            .then(
                b.win_percentage
                    .partial_cmp(&a.win_percentage)
                    .unwrap_or(Ordering::Equal),
            )
            .then(a.team_id.cmp(&b.team_id))
    }

    pub fn leader(&self) -> Option<&LeagueTableRow> {
        self.rows.first()
    }

    pub fn position(&self, team_id: u32) -> Option<usize> {
        self.rows.iter().position(|r| r.team_id == team_id).map(|idx| idx + 1)
    }

    pub fn get(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|r| r.team_id == team_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeagueTableRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
