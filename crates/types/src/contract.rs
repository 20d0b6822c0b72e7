use crate::board::{Partnership, Position};
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoubleStatus {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub double_status: DoubleStatus,
    pub declarer: Position,
}

impl Contract {
    pub fn partnership(&self) -> Partnership {
        self.declarer.partnership()
    }

    pub fn belongs_to(&self, partnership: Partnership) -> bool {
        self.partnership() == partnership
    }

    pub fn is_game(&self) -> bool {
        self.level >= self.strain.game_level()
    }

    pub fn is_slam(&self) -> bool {
        self.level >= 6
    }

    pub fn is_grand_slam(&self) -> bool {
        self.level == 7
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doubling = match self.double_status {
            DoubleStatus::Undoubled => "",
            DoubleStatus::Doubled => "X",
            DoubleStatus::Redoubled => "XX",
        };
        write!(
            f,
            "{}{}{} by {}",
            self.level,
            self.strain.to_char(),
            doubling,
            self.declarer
        )
    }
}
