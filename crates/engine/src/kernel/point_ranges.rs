//! Combined-strength tables

use types::Strain;

/// Point range requirements for bidding
pub struct PointRanges;

impl PointRanges {
    pub const GAME_THRESHOLD: u8 = 25;
    pub const SLAM_THRESHOLD: u8 = 33;
    pub const GRAND_SLAM_THRESHOLD: u8 = 37;

    /// Minimum combined points required for a suited bid at the given level.
    pub fn min_points_for_suited_bid(level: u8) -> u8 {
        match level {
            1 => 16,
            2 => 19,
            3 => 22,
            4 => 25,
            5 => 28,
            6 => 33,
            7 => 37,
            _ => 40,
        }
    }

    /// Minimum combined points required for a notrump bid at the given level.
    pub fn min_points_for_nt_bid(level: u8) -> u8 {
        match level {
            1 => 19,
            2 => 22,
            3 => 25,
            4 => 28,
            5 => 30,
            6 => 33,
            7 => 37,
            _ => 40,
        }
    }
}

impl PointRanges {
    /// Combined points needed for a bid in `strain` at `level`.
    pub fn min_points_for_bid(level: u8, strain: Strain) -> u8 {
        if strain.is_suit() {
            Self::min_points_for_suited_bid(level)
        } else {
            Self::min_points_for_nt_bid(level)
        }
    }

    /// Combined points needed to raise into a known fit at `level`.
    pub fn min_points_for_raise(level: u8) -> u8 {
        const SUPPORT_VALUES: [u8; 7] = [18, 18, 22, 25, 28, 33, 37];
        match level {
            1..=7 => SUPPORT_VALUES[level as usize - 1],
            _ => 40,
        }
    }
}
