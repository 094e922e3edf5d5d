use crate::club::DraftPick;
use crate::league::League;
use log::info;
use serde::{Deserialize, Serialize};

/// Something a team can hand to another team. No valuation is attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TradeAsset {
    Player(u32),
    Cash(f64),
    Pick(DraftPick),
}

impl League {
    pub fn transfer_player(&mut self, player_id: u32, from_team_id: u32, to_team_id: u32) -> Result<(), String> {
        self.transfer(from_team_id, to_team_id, &[TradeAsset::Player(player_id)])
    }

    pub fn transfer_cash(&mut self, amount: f64, from_team_id: u32, to_team_id: u32) -> Result<(), String> {
        self.transfer(from_team_id, to_team_id, &[TradeAsset::Cash(amount)])
    }

    pub fn transfer_pick(&mut self, pick: DraftPick, from_team_id: u32, to_team_id: u32) -> Result<(), String> {
        self.transfer(from_team_id, to_team_id, &[TradeAsset::Pick(pick)])
    }

    /// Two-way trade. Either both sides are valid and everything moves, or nothing does.
    pub fn trade(
        &mut self,
        first_team_id: u32,
        first_assets: &[TradeAsset],
        second_team_id: u32,
        second_assets: &[TradeAsset],
    ) -> Result<(), String> {
        self.check_assets(first_team_id, second_team_id, first_assets)?;
        self.check_assets(second_team_id, first_team_id, second_assets)?;

        self.move_assets(first_team_id, second_team_id, first_assets);
        self.move_assets(second_team_id, first_team_id, second_assets);

        Ok(())
    }

    fn transfer(&mut self, from_team_id: u32, to_team_id: u32, assets: &[TradeAsset]) -> Result<(), String> {
        self.check_assets(from_team_id, to_team_id, assets)?;
        self.move_assets(from_team_id, to_team_id, assets);

        Ok(())
    }

    fn check_assets(&self, from_team_id: u32, to_team_id: u32, assets: &[TradeAsset]) -> Result<(), String> {
        if from_team_id == to_team_id {
            return Err("cannot trade with the same team".to_string());
        }

        let from = self
            .teams
            .find(from_team_id)
            .ok_or_else(|| format!("unknown team {}", from_team_id))?;

        if self.teams.find(to_team_id).is_none() {
            return Err(format!("unknown team {}", to_team_id));
        }

        let mut cash = 0.0f64;

        for asset in assets {
            match asset {
                TradeAsset::Player(player_id) => {
                    if !from.contains_player(*player_id) {
                        return Err(format!("player {} is not on {}", player_id, from.name));
                    }
                }
                TradeAsset::Cash(amount) => {
                    if !amount.is_finite() || *amount <= 0.0 {
                        return Err(format!("invalid cash amount {}", amount));
                    }
                    cash += *amount;
                }
                TradeAsset::Pick(pick) => {
                    if !from.draft_picks.contains(pick) {
                        return Err(format!("{} does not own pick {}", from.name, pick));
                    }
                }
            }
        }

        if cash > from.cash {
            return Err(format!("{} cannot afford {:.0}", from.name, cash));
        }

        Ok(())
    }

    fn move_assets(&mut self, from_team_id: u32, to_team_id: u32, assets: &[TradeAsset]) {
        let Some((from, to)) = self.teams.pair_mut(from_team_id, to_team_id) else {
            return;
        };

        for asset in assets {
            match asset {
                TradeAsset::Player(player_id) => {
                    if from.remove_player(*player_id) {
                        to.add_player(*player_id);
                    }
                }
                TradeAsset::Cash(amount) => {
                    from.cash -= *amount;
                    to.cash += *amount;
                }
                TradeAsset::Pick(pick) => {
                    if from.remove_pick(pick) {
                        to.add_pick(*pick);
                    }
                }
            }

            info!("🔁 {:?} moved from {} to {}", asset, from.name, to.name);
        }
    }
}
