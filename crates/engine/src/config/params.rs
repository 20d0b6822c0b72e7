//! Parameter blocks for individual conventions.
//!
//! Every struct is `#[serde(default)]`, so a partial or empty `params`
//! mapping reads as the defaults below.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrongTwoClubsParams {
    pub min_hcp: u8,
    /// Responder needs this much for a positive reply.
    pub positive_min_hcp: u8,
}

impl Default for StrongTwoClubsParams {
    fn default() -> Self {
        Self {
            min_hcp: 22,
            positive_min_hcp: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotrumpOpeningParams {
    pub one_nt_min_hcp: u8,
    pub one_nt_max_hcp: u8,
    pub two_nt_min_hcp: u8,
    pub two_nt_max_hcp: u8,
}

impl Default for NotrumpOpeningParams {
    fn default() -> Self {
        Self {
            one_nt_min_hcp: 15,
            one_nt_max_hcp: 17,
            two_nt_min_hcp: 20,
            two_nt_max_hcp: 21,
        }
    }
}

impl NotrumpOpeningParams {
    /// The opening range for a notrump opening at `level`.
    pub fn range(&self, level: u8) -> Option<(u8, u8)> {
        match level {
            1 => Some((self.one_nt_min_hcp, self.one_nt_max_hcp)),
            2 => Some((self.two_nt_min_hcp, self.two_nt_max_hcp)),
            _ => None,
        }
    }
}

/// Strength band for weak twos and preempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeakBandParams {
    pub min_hcp: u8,
    pub max_hcp: u8,
    pub vul_min_hcp: u8,
    pub vul_max_hcp: u8,
}

impl Default for WeakBandParams {
    fn default() -> Self {
        Self {
            min_hcp: 5,
            max_hcp: 10,
            vul_min_hcp: 7,
            vul_max_hcp: 11,
        }
    }
}

impl WeakBandParams {
    pub fn band(&self, vulnerable: bool) -> (u8, u8) {
        if vulnerable {
            (self.vul_min_hcp, self.vul_max_hcp)
        } else {
            (self.min_hcp, self.max_hcp)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jacoby2ntParams {
    pub min_hcp: u8,
}

impl Default for Jacoby2ntParams {
    fn default() -> Self {
        Self { min_hcp: 13 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaymanParams {
    pub min_hcp: u8,
    pub over_two_nt_min_hcp: u8,
}

impl Default for StaymanParams {
    fn default() -> Self {
        Self {
            min_hcp: 8,
            over_two_nt_min_hcp: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TakeoutDoubleParams {
    pub min_hcp: u8,
    /// Any shape doubles with this much.
    pub strong_hcp: u8,
    pub balancing_min_hcp: u8,
    pub max_level: u8,
}

impl Default for TakeoutDoubleParams {
    fn default() -> Self {
        Self {
            min_hcp: 11,
            strong_hcp: 17,
            balancing_min_hcp: 8,
            max_level: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegativeDoubleParams {
    pub one_level_min_hcp: u8,
    pub higher_min_hcp: u8,
    pub max_level: u8,
}

impl Default for NegativeDoubleParams {
    fn default() -> Self {
        Self {
            one_level_min_hcp: 6,
            higher_min_hcp: 8,
            max_level: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveDoubleParams {
    pub min_hcp: u8,
    pub max_level: u8,
}

impl Default for ResponsiveDoubleParams {
    fn default() -> Self {
        Self {
            min_hcp: 8,
            max_level: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportDoubleParams {
    /// Highest level of partner's suit at which the double still applies.
    pub ceiling_level: u8,
}

impl Default for SupportDoubleParams {
    fn default() -> Self {
        Self { ceiling_level: 2 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReopeningDoubleParams {
    pub min_hcp: u8,
    /// Opener's maximum length in the opponents' suit.
    pub max_length: u8,
}

impl Default for ReopeningDoubleParams {
    fn default() -> Self {
        Self {
            min_hcp: 12,
            max_length: 2,
        }
    }
}

/// Michaels and the Unusual 2NT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoSuitedParams {
    pub min_hcp: u8,
    pub max_hcp: u8,
}

impl Default for TwoSuitedParams {
    fn default() -> Self {
        Self {
            min_hcp: 8,
            max_hcp: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueBidRaiseParams {
    pub min_support: u8,
    pub min_support_points: u8,
}

impl Default for CueBidRaiseParams {
    fn default() -> Self {
        Self {
            min_support: 4,
            min_support_points: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeakJumpOvercallParams {
    pub min_hcp: u8,
    pub max_hcp: u8,
    pub min_length: u8,
}

impl Default for WeakJumpOvercallParams {
    fn default() -> Self {
        Self {
            min_hcp: 5,
            max_hcp: 10,
            min_length: 6,
        }
    }
}

/// Order of the first two Roman Key Card replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyCardEncoding {
    /// 5♣ shows 1 or 4, 5♦ shows 0 or 3.
    #[default]
    #[serde(rename = "1430")]
    FourteenThirty,
    /// 5♣ shows 0 or 3, 5♦ shows 1 or 4.
    #[serde(rename = "3014")]
    ThirtyFourteen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyCardParams {
    pub encoding: KeyCardEncoding,
}

/// DONT, Cappelletti and Landy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotrumpDefenseParams {
    pub min_hcp: u8,
    pub penalty_double_min_hcp: u8,
}

impl Default for NotrumpDefenseParams {
    fn default() -> Self {
        Self {
            min_hcp: 8,
            penalty_double_min_hcp: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrongClubSystem {
    /// Double shows the majors, the cheapest notrump the minors.
    #[default]
    Mathe,
    /// DONT-style: double a one-suiter, suit bids that suit and a higher one.
    Dont,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrongClubDefenseParams {
    pub system: StrongClubSystem,
    pub min_hcp: u8,
}

impl Default for StrongClubDefenseParams {
    fn default() -> Self {
        Self {
            system: StrongClubSystem::Mathe,
            min_hcp: 6,
        }
    }
}
