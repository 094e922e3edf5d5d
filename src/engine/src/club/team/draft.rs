use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftPick {
    pub round: u8,
    pub overall: u16,
}

impl DraftPick {
    pub fn new(round: u8, overall: u16) -> Self {
        DraftPick { round, overall }
    }
}

impl Display for DraftPick {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "R{}-P{}", self.round, self.overall)
    }
}
