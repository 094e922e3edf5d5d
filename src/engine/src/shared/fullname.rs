use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn new(first_name: String, last_name: String) -> Self {
        FullName {
            first_name,
            last_name,
        }
    }

    /// "J. Smith" form used in box scores and play-by-play lines.
    pub fn short(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}. {}", initial, self.last_name),
            None => self.last_name.clone(),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
