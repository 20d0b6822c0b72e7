use crate::conventions::{catalog, ConventionId};
use crate::kernel::AuctionModel;
use std::fmt::Debug;
use types::{Call, Position, Strain};

pub trait CallPredicate: Send + Sync + Debug {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool;
}

#[derive(Debug)]
pub struct NotCall(pub Box<dyn CallPredicate>);
impl CallPredicate for NotCall {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        !self.0.check(model, call)
    }
}

pub fn not_call(predicate: impl CallPredicate + 'static) -> NotCall {
    NotCall(Box::new(predicate))
}

#[derive(Debug)]
pub struct IsLevel(pub u8);
impl CallPredicate for IsLevel {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.level() == Some(self.0)
    }
}

#[derive(Debug)]
pub struct IsCall(pub u8, pub Strain);
impl CallPredicate for IsCall {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        let (level, strain) = (self.0, self.1);
        call.level() == Some(level) && call.strain() == Some(strain)
    }
}

#[derive(Debug)]
pub struct IsStrain(pub Strain);
impl CallPredicate for IsStrain {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.strain() == Some(self.0)
    }
}

#[derive(Debug)]
pub struct IsNotrump;
impl CallPredicate for IsNotrump {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.strain() == Some(Strain::NoTrump)
    }
}

#[derive(Debug)]
pub struct IsSuit;
impl CallPredicate for IsSuit {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.suit().is_some()
    }
}

#[derive(Debug)]
pub struct IsNewSuit;
impl CallPredicate for IsNewSuit {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        if let Some(suit) = call.suit() {
            Position::ALL
                .iter()
                .all(|p| !model.hand(*p).has_shown_suit(suit))
        } else {
            false
        }
    }
}

#[derive(Debug)]
pub struct IsMajorSuit;
impl CallPredicate for IsMajorSuit {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.strain().map(|s| s.is_major()).unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct IsMinorSuit;
impl CallPredicate for IsMinorSuit {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.strain().map(|s| s.is_minor()).unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct MinLevel(pub u8);
impl CallPredicate for MinLevel {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.level().map(|l| l >= self.0).unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct MaxLevel(pub u8);
impl CallPredicate for MaxLevel {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.level().map(|l| l <= self.0).unwrap_or(false)
    }
}

/// Returns the minimum legal level for a given strain, based on the last bid in the auction.
/// Returns None if there is no previous bid.
fn min_level_for_strain(model: &AuctionModel, strain: Strain) -> Option<u8> {
    let (_, last) = model.auction.last_bid()?;
    let last_level = last.level()?;
    let last_strain = last.strain()?;
    Some(if strain > last_strain {
        last_level
    } else {
        last_level + 1
    })
}

/// Checks if a bid is a jump (at least one level higher than necessary).
#[derive(Debug)]
pub struct IsJump;
impl CallPredicate for IsJump {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        if let (Some(level), Some(strain)) = (call.level(), call.strain()) {
            if let Some(min_level) = min_level_for_strain(model, strain) {
                return level == min_level + 1;
            }
        }
        false
    }
}

/// The lowest legal bid in its strain.
#[derive(Debug)]
pub struct IsCheapest;
impl CallPredicate for IsCheapest {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        call.strain()
            .is_some_and(|strain| model.auction.minimum_bid_in(strain) == Some(*call))
    }
}

#[derive(Debug)]
pub struct IsPass;
impl CallPredicate for IsPass {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        matches!(call, Call::Pass)
    }
}

#[derive(Debug)]
pub struct IsDouble;
impl CallPredicate for IsDouble {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        matches!(call, Call::Double)
    }
}

#[derive(Debug)]
pub struct IsGameLevel;
impl CallPredicate for IsGameLevel {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.strain()
            .zip(call.level())
            .is_some_and(|(strain, level)| level == strain.game_level())
    }
}

#[derive(Debug)]
pub struct AtMostGame;
impl CallPredicate for AtMostGame {
    fn check(&self, _model: &AuctionModel, call: &Call) -> bool {
        call.strain()
            .zip(call.level())
            .is_some_and(|(strain, level)| level <= strain.game_level())
    }
}

/// Game in the strain of partner's last bid.
#[derive(Debug)]
pub struct IsGameInPartnerStrain;
impl CallPredicate for IsGameInPartnerStrain {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        let partner = model.auction.current_player().partner();
        let partner_strain = model.auction.last_action_by(partner).and_then(|c| c.strain());
        partner_strain.is_some() && call.strain() == partner_strain && IsGameLevel.check(model, call)
    }
}

#[derive(Debug)]
pub struct BidderHasShownSuit;
impl CallPredicate for BidderHasShownSuit {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        if let Some(suit) = call.suit() {
            return model.bidder_hand().has_shown_suit(suit);
        }
        false
    }
}

#[derive(Debug)]
pub struct PartnerHasShownSuit;
impl CallPredicate for PartnerHasShownSuit {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        if let Some(suit) = call.suit() {
            return model.partner_hand().has_shown_suit(suit);
        }
        false
    }
}

/// Checks that no opponent has shown the same suit as this call.
/// Uses opponent HandModels (semantic meaning) rather than raw bid strains,
/// so conventional bids like Stayman (2C) won't be treated as showing clubs.
#[derive(Debug)]
pub struct OpponentHasNotShownSuit;
impl CallPredicate for OpponentHasNotShownSuit {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        if let Some(suit) = call.suit() {
            return !model.lho_hand().has_shown_suit(suit)
                && !model.rho_hand().has_shown_suit(suit);
        }
        true
    }
}

#[derive(Debug)]
pub struct CuebidRhoSuit;
impl CallPredicate for CuebidRhoSuit {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        let rho = model.auction.current_player().rho();
        if let Some(strain) = call.strain() {
            return model.auction.last_call_by(rho).and_then(|c| c.strain()) == Some(strain);
        }
        false
    }
}

/// A bid in a suit either opponent has shown.
#[derive(Debug)]
pub struct CuebidOpponentSuit;
impl CallPredicate for CuebidOpponentSuit {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        call.suit().is_some() && !OpponentHasNotShownSuit.check(model, call)
    }
}

/// No enabled convention claims this call as its ask.
#[derive(Debug)]
pub struct NotConventional;
impl CallPredicate for NotConventional {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        catalog()
            .recognize(&model.auction, model.config, call)
            .is_none()
    }
}

/// The enabled convention `id` claims this call as its ask.
#[derive(Debug)]
pub struct Recognized(pub ConventionId);
impl CallPredicate for Recognized {
    fn check(&self, model: &AuctionModel, call: &Call) -> bool {
        catalog().recognizes(self.0, &model.auction, model.config, call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use types::Auction;

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    #[test]
    fn test_cuebid_predicates() {
        let config = ConventionConfig::default();
        // North opens 1D. For East, RHO is North.
        let auction = Auction::bidding(Position::North, "1D");
        let model = AuctionModel::from_auction(&auction, &config);

        assert!(CuebidRhoSuit.check(&model, &call("2D")));
        assert!(!CuebidRhoSuit.check(&model, &call("2S")));
        assert!(CuebidOpponentSuit.check(&model, &call("2D")));
        assert!(!CuebidOpponentSuit.check(&model, &call("2S")));
    }

    #[test]
    fn test_jump_and_cheapest() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1D");
        let model = AuctionModel::from_auction(&auction, &config);

        assert!(IsCheapest.check(&model, &call("1S")));
        assert!(!IsCheapest.check(&model, &call("2S")));
        assert!(IsJump.check(&model, &call("2S")));
        assert!(!IsJump.check(&model, &call("2C")));
    }

    #[test]
    fn test_conventional_calls() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1N P");
        let model = AuctionModel::from_auction(&auction, &config);

        assert!(Recognized(ConventionId::Stayman).check(&model, &call("2C")));
        assert!(!NotConventional.check(&model, &call("2C")));
        assert!(NotConventional.check(&model, &call("3C")));
    }

    #[test]
    fn test_game_levels() {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(Position::North, "1H P");
        let model = AuctionModel::from_auction(&auction, &config);

        assert!(IsGameLevel.check(&model, &call("4H")));
        assert!(!IsGameLevel.check(&model, &call("4C")));
        assert!(AtMostGame.check(&model, &call("3H")));
        assert!(!AtMostGame.check(&model, &call("5H")));
        assert!(IsGameInPartnerStrain.check(&model, &call("4H")));
        assert!(!IsGameInPartnerStrain.check(&model, &call("4S")));
    }
}
