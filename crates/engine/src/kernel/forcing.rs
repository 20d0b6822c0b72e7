//! Whether the seat on turn is allowed to pass.

use crate::bid::NaturalKind;
use crate::dsl::annotations::Annotation;
use crate::kernel::AuctionModel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Forcing {
    None,
    /// Partner's last call demands one more bid.
    OneRound,
    /// Our side must keep bidding until game.
    GameForcing,
}

impl Forcing {
    pub fn of(model: &AuctionModel) -> Self {
        let auction = &model.auction;
        let side = auction.current_partnership();
        let below_game = !auction
            .current_contract()
            .is_some_and(|contract| contract.belongs_to(side) && contract.is_game());

        if below_game && model.game_forcing() {
            return Forcing::GameForcing;
        }
        if below_game && partner_forced_us(model) {
            return Forcing::OneRound;
        }
        Forcing::None
    }

    pub fn allows_pass(self) -> bool {
        self == Forcing::None
    }
}

/// Partner's call two back was forcing and RHO passed over it.
fn partner_forced_us(model: &AuctionModel) -> bool {
    let auction = &model.auction;
    let len = auction.len();
    if len < 2 {
        return false;
    }
    let entries = auction.entries();
    if !entries[len - 1].call.is_pass() {
        return false;
    }
    let partner = auction.current_player().partner();
    let Some(interpretation) = model
        .interpretations()
        .iter()
        .find(|interpretation| interpretation.index == len - 2)
    else {
        return false;
    };
    if interpretation.seat != partner || !interpretation.annotations.contains(&Annotation::Forcing) {
        return false;
    }
    if interpretation.tag.is_natural(NaturalKind::NewSuit) {
        // Only an unpassed responder's new suit forces.
        let passed_before = entries[..interpretation.index]
            .iter()
            .any(|entry| entry.seat == partner && entry.call.is_pass());
        let opened = auction.opener() == Some(partner);
        return !passed_before && !opened;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use types::{Auction, Position};

    fn forcing(dealer: Position, calls: &str) -> Forcing {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(dealer, calls);
        Forcing::of(&AuctionModel::from_auction(&auction, &config))
    }

    #[test]
    fn test_new_suit_response_forces_opener() {
        assert_eq!(forcing(Position::North, "1C P 1H P"), Forcing::OneRound);
    }

    #[test]
    fn test_passed_hand_new_suit_does_not_force() {
        assert_eq!(forcing(Position::North, "P P 1C P 1H P"), Forcing::None);
    }

    #[test]
    fn test_interference_releases_one_round_force() {
        assert_eq!(forcing(Position::North, "1C P 1H 1S"), Forcing::None);
    }

    #[test]
    fn test_two_clubs_forces_to_game() {
        assert_eq!(forcing(Position::North, "2C P"), Forcing::GameForcing);
        assert_eq!(forcing(Position::North, "2C P 2D P"), Forcing::GameForcing);
        assert_eq!(forcing(Position::North, "2C P 2D P 2N P"), Forcing::GameForcing);
    }

    #[test]
    fn test_game_ends_the_force() {
        assert_eq!(forcing(Position::North, "2C P 2D P 2N P 3N P"), Forcing::None);
    }

    #[test]
    fn test_opening_does_not_force() {
        assert_eq!(forcing(Position::North, "1S P"), Forcing::None);
    }
}
