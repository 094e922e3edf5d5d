use crate::r#match::PlateAppearanceOutcome;
use std::fmt::{Display, Formatter, Result};

pub const OUTS_PER_HALF_INNING: u8 = 3;

/// Occupied bases. Runner identity is not tracked, only position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseState {
    first: bool,
    second: bool,
    third: bool,
}

impl BaseState {
    pub fn empty() -> Self {
        BaseState::default()
    }

    pub fn loaded() -> Self {
        BaseState {
            first: true,
            second: true,
            third: true,
        }
    }

    pub fn with_runners(bases: &[u8]) -> Self {
        let mut state = BaseState::empty();

        for base in bases {
            match base {
                1 => state.first = true,
                2 => state.second = true,
                3 => state.third = true,
                _ => {}
            }
        }

        state
    }

    pub fn is_occupied(&self, base: u8) -> bool {
        match base {
            1 => self.first,
            2 => self.second,
            3 => self.third,
            _ => false,
        }
    }

    pub fn runners(&self) -> u8 {
        self.first as u8 + self.second as u8 + self.third as u8
    }

    pub fn is_empty(&self) -> bool {
        self.runners() == 0
    }

    pub fn is_loaded(&self) -> bool {
        self.runners() == 3
    }

    /// Moves runners for one outcome and returns the runs that scored.
    pub fn advance(&mut self, outcome: PlateAppearanceOutcome) -> u8 {
        match outcome {
            PlateAppearanceOutcome::HomeRun => {
                let runs = self.runners() + 1;
                *self = BaseState::empty();
                runs
            }
            PlateAppearanceOutcome::Triple => {
                let runs = self.runners();
                *self = BaseState::with_runners(&[3]);
                runs
            }
            PlateAppearanceOutcome::Double => {
                let runs = self.second as u8 + self.third as u8;
                *self = BaseState {
                    first: false,
                    second: true,
                    third: self.first,
                };
                runs
            }
            PlateAppearanceOutcome::Single => {
                let runs = self.second as u8 + self.third as u8;
                *self = BaseState {
                    first: true,
                    second: self.first,
                    third: false,
                };
                runs
            }
            PlateAppearanceOutcome::Walk => {
                let mut runs = 0;

                if self.first {
                    if self.second {
                        if self.third {
                            runs = 1;
                        } else {
                            self.third = true;
                        }
                    } else {
                        self.second = true;
                    }
                }

                self.first = true;
                runs
            }
            PlateAppearanceOutcome::StrikeOut | PlateAppearanceOutcome::Out => 0,
        }
    }
}

impl Display for BaseState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mark = |occupied: bool, base: char| if occupied { base } else { '-' };

        write!(
            f,
            "[{}{}{}]",
            mark(self.first, '1'),
            mark(self.second, '2'),
            mark(self.third, '3')
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayTransition {
    pub runs: u8,
    pub rbi: u8,
    pub outs_recorded: u8,
}

/// Base/out state machine for one half-inning.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseRunningEngine {
    bases: BaseState,
    outs: u8,
}

impl BaseRunningEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(bases: BaseState, outs: u8) -> Self {
        BaseRunningEngine {
            bases,
            outs: outs.min(OUTS_PER_HALF_INNING),
        }
    }

    pub fn bases(&self) -> BaseState {
        self.bases
    }

    pub fn outs(&self) -> u8 {
        self.outs
    }

    pub fn is_complete(&self) -> bool {
        self.outs >= OUTS_PER_HALF_INNING
    }

    pub fn apply(&mut self, outcome: PlateAppearanceOutcome) -> PlayTransition {
        debug_assert!(!self.is_complete(), "play applied after the third out");

        if outcome.is_out() {
            self.outs += 1;

            return PlayTransition {
                runs: 0,
                rbi: 0,
                outs_recorded: 1,
            };
        }

        let runs = self.bases.advance(outcome);

        PlayTransition {
            runs,
            rbi: runs,
            outs_recorded: 0,
        }
    }
}
