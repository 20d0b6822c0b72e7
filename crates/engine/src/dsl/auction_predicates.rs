use crate::bid::{BidTag, ConventionRole, NaturalKind};
use crate::conventions::{catalog, notrump, two_suited, ConventionId};
use crate::dsl::Param;
use crate::kernel::AuctionModel;
use std::fmt::Debug;
use types::{Call, Strain, Suit};

pub trait AuctionPredicate: Send + Sync + Debug {
    fn check(&self, auction: &AuctionModel) -> bool;
}

pub fn not_auction(predicate: impl AuctionPredicate + 'static) -> NotAuction {
    NotAuction(Box::new(predicate))
}

#[derive(Debug)]
pub struct NotAuction(pub Box<dyn AuctionPredicate>);
impl AuctionPredicate for NotAuction {
    fn check(&self, model: &AuctionModel) -> bool {
        !self.0.check(model)
    }
}

#[derive(Debug)]
pub struct IsSeat(pub u8);
impl AuctionPredicate for IsSeat {
    fn check(&self, model: &AuctionModel) -> bool {
        model.auction.current_seat() == self.0
    }
}

#[derive(Debug)]
pub struct IsNotOpen;
impl AuctionPredicate for IsNotOpen {
    fn check(&self, model: &AuctionModel) -> bool {
        !model.auction.is_opened()
    }
}

#[derive(Debug)]
pub struct PartnerLimited;
impl AuctionPredicate for PartnerLimited {
    fn check(&self, model: &AuctionModel) -> bool {
        model.partner_hand().max_hcp.is_some()
    }
}

#[derive(Debug)]
pub struct WeOpened;
impl AuctionPredicate for WeOpened {
    fn check(&self, model: &AuctionModel) -> bool {
        model
            .auction
            .opener()
            .map(|p| p.partnership() == model.auction.current_partnership())
            .unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct TheyOpened;
impl AuctionPredicate for TheyOpened {
    fn check(&self, model: &AuctionModel) -> bool {
        model
            .auction
            .opener()
            .map(|p| p.partnership() == model.auction.current_partnership().opponent())
            .unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct PartnerOpened;
impl AuctionPredicate for PartnerOpened {
    fn check(&self, model: &AuctionModel) -> bool {
        model.auction.opener() == Some(model.auction.current_player().partner())
    }
}

#[derive(Debug)]
pub struct BidderOpened;
impl AuctionPredicate for BidderOpened {
    fn check(&self, model: &AuctionModel) -> bool {
        model.auction.opener() == Some(model.auction.current_player())
    }
}

/// Directly over partner's 1NT or 2NT opening.
#[derive(Debug)]
pub struct PartnerOpenedNotrump;
impl AuctionPredicate for PartnerOpenedNotrump {
    fn check(&self, model: &AuctionModel) -> bool {
        notrump::partner_notrump_opening(&model.auction).is_some()
    }
}

/// Partner's one-level major opening is still the last bid.
#[derive(Debug)]
pub struct PartnerOpenedMajor;
impl AuctionPredicate for PartnerOpenedMajor {
    fn check(&self, model: &AuctionModel) -> bool {
        let partner = model.auction.current_player().partner();
        match (model.auction.opening(), model.auction.last_bid()) {
            (Some((opener, opening)), Some((_, last))) => {
                opener == partner
                    && opening == last
                    && opening.level() == Some(1)
                    && opening.strain().is_some_and(Strain::is_major)
            }
            _ => false,
        }
    }
}

/// Partner's one-level suit opening is still the last bid.
#[derive(Debug)]
pub struct PartnerOpenedOneOfASuit;
impl AuctionPredicate for PartnerOpenedOneOfASuit {
    fn check(&self, model: &AuctionModel) -> bool {
        let partner = model.auction.current_player().partner();
        match (model.auction.opening(), model.auction.last_bid()) {
            (Some((opener, opening)), Some((_, last))) => {
                opener == partner
                    && opening == last
                    && opening.level() == Some(1)
                    && opening.suit().is_some()
            }
            _ => false,
        }
    }
}

/// Checks that RHO's call (the last call in the auction) was not a pass.
/// This identifies "direct seat" — we are acting immediately after an opponent's action.
#[derive(Debug)]
pub struct RhoMadeLastBid;
impl AuctionPredicate for RhoMadeLastBid {
    fn check(&self, model: &AuctionModel) -> bool {
        model
            .auction
            .last_call()
            .map(|last| !last.call.is_pass())
            .unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct RhoPassed;
impl AuctionPredicate for RhoPassed {
    fn check(&self, model: &AuctionModel) -> bool {
        model
            .auction
            .last_call()
            .is_some_and(|last| last.call.is_pass())
    }
}

/// RHO's last call was a suit bid.
#[derive(Debug)]
pub struct RhoBidSuit;
impl AuctionPredicate for RhoBidSuit {
    fn check(&self, model: &AuctionModel) -> bool {
        model
            .auction
            .last_call()
            .is_some_and(|last| last.call.suit().is_some())
    }
}

/// RHO raised the suit their partner bid.
#[derive(Debug)]
pub struct OpponentsRaised;
impl AuctionPredicate for OpponentsRaised {
    fn check(&self, model: &AuctionModel) -> bool {
        let me = model.auction.current_player();
        let Some(rho_suit) = model.auction.last_call_by(me.rho()).and_then(|c| c.suit()) else {
            return false;
        };
        model.auction.last_call().is_some_and(|last| last.seat == me.rho())
            && model.auction.last_action_by(me.lho()).and_then(|c| c.suit()) == Some(rho_suit)
    }
}

/// Checks that our partnership has only passed (no bids, doubles, or redoubles).
#[derive(Debug)]
pub struct WeHaveOnlyPassed;
impl AuctionPredicate for WeHaveOnlyPassed {
    fn check(&self, model: &AuctionModel) -> bool {
        let our_partnership = model.auction.current_partnership();
        model
            .auction
            .iter()
            .all(|(position, call)| position.partnership() != our_partnership || call.is_pass())
    }
}

#[derive(Debug)]
pub struct BidderHasNotActed;
impl AuctionPredicate for BidderHasNotActed {
    fn check(&self, model: &AuctionModel) -> bool {
        let me = model.auction.current_player();
        model.auction.last_action_by(me).is_none()
    }
}

/// Checks that the last bid in the auction is at most the given level.
#[derive(Debug)]
pub struct LastBidMaxLevel(pub u8);
impl AuctionPredicate for LastBidMaxLevel {
    fn check(&self, model: &AuctionModel) -> bool {
        model
            .auction
            .last_bid()
            .and_then(|(_, call)| call.level())
            .map(|l| l <= self.0)
            .unwrap_or(false)
    }
}

/// Like [`LastBidMaxLevel`] with the level taken from configuration.
#[derive(Debug)]
pub struct LastBidAtMost(pub Param);
impl AuctionPredicate for LastBidAtMost {
    fn check(&self, model: &AuctionModel) -> bool {
        LastBidMaxLevel((self.0)(model)).check(model)
    }
}

#[derive(Debug)]
pub struct LastBidIsSuit;
impl AuctionPredicate for LastBidIsSuit {
    fn check(&self, model: &AuctionModel) -> bool {
        model
            .auction
            .last_bid()
            .is_some_and(|(_, call)| call.suit().is_some())
    }
}

/// Partner's most recent non-pass call was read as this natural kind.
#[derive(Debug)]
pub struct PartnerLast(pub NaturalKind);
impl AuctionPredicate for PartnerLast {
    fn check(&self, model: &AuctionModel) -> bool {
        let partner = model.auction.current_player().partner();
        model
            .last_interpretation_by(partner)
            .is_some_and(|i| i.tag == BidTag::Natural(self.0))
    }
}

/// Our own most recent non-pass call was read as this natural kind.
#[derive(Debug)]
pub struct BidderLast(pub NaturalKind);
impl AuctionPredicate for BidderLast {
    fn check(&self, model: &AuctionModel) -> bool {
        let me = model.auction.current_player();
        model
            .last_interpretation_by(me)
            .is_some_and(|i| i.tag == BidTag::Natural(self.0))
    }
}

/// Partner's most recent non-pass call was an ask of this convention.
#[derive(Debug)]
pub struct PartnerLastAsked(pub ConventionId);
impl AuctionPredicate for PartnerLastAsked {
    fn check(&self, model: &AuctionModel) -> bool {
        let partner = model.auction.current_player().partner();
        model
            .last_interpretation_by(partner)
            .is_some_and(|i| i.tag == BidTag::ask(self.0))
    }
}

/// Partner has just made this convention's ask and RHO passed.
#[derive(Debug)]
pub struct PartnerAsked(pub ConventionId);
impl AuctionPredicate for PartnerAsked {
    fn check(&self, model: &AuctionModel) -> bool {
        catalog()
            .partner_asked(self.0, &model.auction, model.config)
            .is_some()
    }
}

/// Our own ask of this convention has just been answered.
#[derive(Debug)]
pub struct OurAskAnswered(pub ConventionId);
impl AuctionPredicate for OurAskAnswered {
    fn check(&self, model: &AuctionModel) -> bool {
        catalog()
            .answered(self.0, &model.auction, model.config)
            .is_some()
    }
}

/// Partner's last bid invites game: a natural invitation or a
/// non-game continuation after their own ask was answered.
#[derive(Debug)]
pub struct PartnerInvited;
impl AuctionPredicate for PartnerInvited {
    fn check(&self, model: &AuctionModel) -> bool {
        let partner = model.auction.current_player().partner();
        let Some(interpretation) = model.last_interpretation_by(partner) else {
            return false;
        };
        let call = interpretation.call;
        let invites = match interpretation.tag {
            BidTag::Natural(NaturalKind::Invitation) => true,
            BidTag::Convention {
                role: ConventionRole::Continuation,
                id: ConventionId::Stayman | ConventionId::JacobyTransfers,
            } => {
                call.level().is_some_and(|l| l >= 2) && !call.is_game_or_higher()
                    && call.strain().is_some_and(|s| s == Strain::NoTrump || s.is_major())
            }
            _ => false,
        };
        invites
            && model.auction.last_bid().map(|(_, c)| c) == Some(call)
            && RhoPassed.check(model)
    }
}

/// LHO made the last bid and both partner and RHO passed it.
#[derive(Debug)]
pub struct IsBalancingSeat;
impl AuctionPredicate for IsBalancingSeat {
    fn check(&self, model: &AuctionModel) -> bool {
        let entries = model.auction.entries();
        let len = entries.len();
        if len < 3 {
            return false;
        }
        let lho = model.auction.current_player().lho();
        entries[len - 1].call.is_pass()
            && entries[len - 2].call.is_pass()
            && entries[len - 3].seat == lho
            && entries[len - 3].call.is_bid()
    }
}

/// Some major has not been bid by anyone.
#[derive(Debug)]
pub struct HasUnbidMajor;
impl AuctionPredicate for HasUnbidMajor {
    fn check(&self, model: &AuctionModel) -> bool {
        Suit::MAJORS
            .into_iter()
            .any(|major| !model.auction.iter().any(|(_, call)| call.suit() == Some(major)))
    }
}

/// Fourth seat with the Rule of 15 in use.
#[derive(Debug)]
pub struct UsesRuleOfFifteen;
impl AuctionPredicate for UsesRuleOfFifteen {
    fn check(&self, model: &AuctionModel) -> bool {
        model.config.is_enabled(ConventionId::RuleOfFifteen) && model.auction.current_seat() == 4
    }
}

/// The opponents opened 1NT and nobody has acted since.
#[derive(Debug)]
pub struct OpponentsOpenedOneNotrump;
impl AuctionPredicate for OpponentsOpenedOneNotrump {
    fn check(&self, model: &AuctionModel) -> bool {
        two_suited::defense_spot(&model.auction)
            == Some(Call::Bid {
                level: 1,
                strain: Strain::NoTrump,
            })
    }
}
