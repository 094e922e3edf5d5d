use crate::club::Injury;
use serde::{Deserialize, Serialize};

pub const MORALE_MIN_VALUE: f32 = 0.0;
pub const MORALE_MAX_VALUE: f32 = 100.0;
pub const MORALE_DEFAULT_VALUE: f32 = 50.0;

/// Mutable condition of a player during a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub age: u8,
    pub morale: f32,
    pub current_stamina: f32,
    pub experience: u32,

    pub is_injured: bool,
    pub injury: Option<Injury>,
}

impl PlayerAttributes {
    pub fn fresh(age: u8, stamina: f32) -> Self {
        PlayerAttributes {
            age,
            morale: MORALE_DEFAULT_VALUE,
            current_stamina: stamina,
            experience: 0,
            is_injured: false,
            injury: None,
        }
    }

    pub fn raise_morale(&mut self, amount: f32) {
        self.morale = (self.morale + amount).clamp(MORALE_MIN_VALUE, MORALE_MAX_VALUE);
    }

    pub fn lower_morale(&mut self, amount: f32) {
        self.morale = (self.morale - amount).clamp(MORALE_MIN_VALUE, MORALE_MAX_VALUE);
    }

    pub fn restore_stamina(&mut self, amount: f32, base: f32) {
        self.current_stamina = (self.current_stamina + amount).clamp(0.0, base);
    }

    pub fn drain_stamina(&mut self, amount: f32) {
        self.current_stamina = (self.current_stamina - amount).max(0.0);
    }

    pub fn stamina_percentage(&self, base: f32) -> u32 {
        if base <= 0.0 {
            return 0;
        }

        (self.current_stamina * 100.0 / base).floor() as u32
    }

    /// Re-establishes the condition invariants against the player's base stamina.
    pub fn normalize(&mut self, base_stamina: f32) {
        self.morale = self.morale.clamp(MORALE_MIN_VALUE, MORALE_MAX_VALUE);
        self.current_stamina = self.current_stamina.clamp(0.0, base_stamina);

        if self.injury.as_ref().is_some_and(|injury| injury.is_healed()) {
            self.injury = None;
        }

        self.is_injured = self.injury.is_some();
    }
}
