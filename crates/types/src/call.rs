use crate::error::CallError;
use crate::strain::Strain;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid { level: u8, strain: Strain },
}

impl Call {
    /// A contract call, checked for a level in 1..=7.
    pub fn bid(level: u8, strain: Strain) -> Result<Call, CallError> {
        if (1..=7).contains(&level) {
            Ok(Call::Bid { level, strain })
        } else {
            Err(CallError::InvalidLevel(level))
        }
    }

    /// Every contract call, cheapest first.
    pub fn all_bids() -> impl Iterator<Item = Call> {
        (1..=7u8).flat_map(|level| Strain::ALL.into_iter().map(move |strain| Call::Bid { level, strain }))
    }

    pub fn is_bid(&self) -> bool {
        matches!(self, Call::Bid { .. })
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Call::Pass)
    }

    /// Returns the level of this call, if it's a bid.
    pub fn level(&self) -> Option<u8> {
        match self {
            Call::Bid { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Returns the strain of this call, if it's a bid.
    pub fn strain(&self) -> Option<Strain> {
        match self {
            Call::Bid { strain, .. } => Some(*strain),
            _ => None,
        }
    }

    /// Returns the suit of this call, if it's a suited bid.
    pub fn suit(&self) -> Option<Suit> {
        self.strain().and_then(|s| s.to_suit())
    }

    /// True when both are bids and `self` is strictly higher on the ladder.
    pub fn outranks(&self, other: &Call) -> bool {
        match (self, other) {
            (
                Call::Bid { level, strain },
                Call::Bid {
                    level: other_level,
                    strain: other_strain,
                },
            ) => (level, strain) > (other_level, other_strain),
            _ => false,
        }
    }

    /// True when this bid reaches game in its strain.
    pub fn is_game_or_higher(&self) -> bool {
        match self {
            Call::Bid { level, strain } => *level >= strain.game_level(),
            _ => false,
        }
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain.to_char()),
        }
    }
}

impl FromStr for Call {
    type Err = CallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        match token.as_str() {
            "P" | "PASS" => return Ok(Call::Pass),
            "X" | "DBL" | "DOUBLE" => return Ok(Call::Double),
            "XX" | "RDBL" | "REDOUBLE" => return Ok(Call::Redouble),
            _ => {}
        }
        let invalid = || CallError::InvalidToken(s.to_string());
        let mut chars = token.chars();
        let level = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(invalid)? as u8;
        let strain = chars.next().and_then(Strain::from_char).ok_or_else(invalid)?;
        let rest: String = chars.collect();
        let trailing_ok = rest.is_empty() || (strain == Strain::NoTrump && rest == "T");
        if !trailing_ok {
            return Err(invalid());
        }
        Call::bid(level, strain)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("P".parse::<Call>(), Ok(Call::Pass));
        assert_eq!("pass".parse::<Call>(), Ok(Call::Pass));
        assert_eq!("X".parse::<Call>(), Ok(Call::Double));
        assert_eq!("XX".parse::<Call>(), Ok(Call::Redouble));
        assert_eq!(
            "1N".parse::<Call>(),
            Ok(Call::Bid {
                level: 1,
                strain: Strain::NoTrump
            })
        );
        assert_eq!("3NT".parse::<Call>(), "3N".parse::<Call>());
        assert_eq!(
            "7s".parse::<Call>(),
            Ok(Call::Bid {
                level: 7,
                strain: Strain::Spades
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("8C".parse::<Call>(), Err(CallError::InvalidLevel(8)));
        assert_eq!("0H".parse::<Call>(), Err(CallError::InvalidLevel(0)));
        assert!(matches!("1Z".parse::<Call>(), Err(CallError::InvalidToken(_))));
        assert!(matches!("1HT".parse::<Call>(), Err(CallError::InvalidToken(_))));
        assert!(matches!("".parse::<Call>(), Err(CallError::InvalidToken(_))));
    }

    #[test]
    fn test_bid_constructor_checks_level() {
        assert!(Call::bid(1, Strain::Clubs).is_ok());
        assert_eq!(Call::bid(0, Strain::Clubs), Err(CallError::InvalidLevel(0)));
    }

    #[test]
    fn test_outranks() {
        let one_spade: Call = "1S".parse().unwrap();
        let one_nt: Call = "1N".parse().unwrap();
        let two_clubs: Call = "2C".parse().unwrap();
        assert!(one_nt.outranks(&one_spade));
        assert!(two_clubs.outranks(&one_nt));
        assert!(!one_spade.outranks(&one_spade));
        assert!(!Call::Pass.outranks(&one_spade));
    }

    #[test]
    fn test_all_bids_ascending() {
        let bids: Vec<Call> = Call::all_bids().collect();
        assert_eq!(bids.len(), 35);
        assert!(bids.windows(2).all(|w| w[1].outranks(&w[0])));
    }

    #[test]
    fn test_render() {
        assert_eq!(Call::Redouble.to_string(), "XX");
        assert_eq!("4S".parse::<Call>().unwrap().to_string(), "4S");
        assert!("4S".parse::<Call>().unwrap().is_game_or_higher());
        assert!(!"4D".parse::<Call>().unwrap().is_game_or_higher());
    }
}
