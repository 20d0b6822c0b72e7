//! Auction state analysis

use crate::bid::BidTag;
use crate::config::ConventionConfig;
use crate::dsl::annotations::Annotation;
use crate::kernel::{CallInterpreter, HandModel};
use serde::Serialize;
use types::{Auction, Call, Position, Suit};

/// How one call of the auction was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub index: usize,
    pub seat: Position,
    pub call: Call,
    pub rule_name: String,
    pub tag: BidTag,
    pub annotations: Vec<Annotation>,
}

/// Analysis of the current auction state.
///
/// Models are stored in a flat array indexed by `Position::idx()`. Getter
/// methods rotate into the perspective of `auction.current_player()`.
#[derive(Debug, Clone, Serialize)]
pub struct AuctionModel<'a> {
    /// The auction state
    pub auction: Auction,
    #[serde(skip)]
    pub config: &'a ConventionConfig,
    /// Per-position profiles indexed by Position::idx()
    hands: [HandModel; 4],
    /// One entry per call that some rule explained
    interpretations: Vec<Interpretation>,
}

impl<'a> AuctionModel<'a> {
    pub fn bidder_hand(&self) -> &HandModel {
        self.hand(self.auction.current_player())
    }

    pub fn partner_hand(&self) -> &HandModel {
        self.hand(self.auction.current_player().partner())
    }

    pub fn lho_hand(&self) -> &HandModel {
        self.hand(self.auction.current_player().lho())
    }

    pub fn rho_hand(&self) -> &HandModel {
        self.hand(self.auction.current_player().rho())
    }

    pub fn hand(&self, position: Position) -> &HandModel {
        &self.hands[position.idx()]
    }

    pub fn interpretations(&self) -> &[Interpretation] {
        &self.interpretations
    }

    /// The reading of `seat`'s most recent non-pass call.
    pub fn last_interpretation_by(&self, seat: Position) -> Option<&Interpretation> {
        self.interpretations
            .iter()
            .rev()
            .find(|interpretation| interpretation.seat == seat && !interpretation.call.is_pass())
    }

    pub fn partner_min_hcp(&self) -> u8 {
        self.partner_hand().min_hcp.unwrap_or(0)
    }

    /// The suit partner bid most recently and has shown length in.
    pub fn partner_suit(&self) -> Option<Suit> {
        let partner = self.auction.current_player().partner();
        let suit = self.auction.last_action_by(partner)?.suit()?;
        self.partner_hand().has_shown_suit(suit).then_some(suit)
    }

    /// Whether our side has made a game-forcing call. The force lasts until
    /// game is reached.
    pub fn game_forcing(&self) -> bool {
        let side = self.auction.current_partnership();
        self.interpretations.iter().any(|interpretation| {
            interpretation.seat.partnership() == side
                && interpretation.annotations.contains(&Annotation::GameForcing)
        })
    }

    /// Analyze the auction to build models of all four hands.
    ///
    /// Each call is interpreted against the prefix that preceded it, so the
    /// model grows one call at a time.
    pub fn from_auction(auction: &Auction, config: &'a ConventionConfig) -> Self {
        let mut model = Self {
            auction: auction.truncated(0),
            config,
            hands: Default::default(),
            interpretations: Vec::new(),
        };

        for (index, (position, call)) in auction.iter().enumerate() {
            if let Some(semantics) = CallInterpreter::interpret(&model, call) {
                for constraint in &semantics.shows {
                    model.hands[position.idx()].apply_constraint(*constraint);
                }
                model.interpretations.push(Interpretation {
                    index,
                    seat: position,
                    call: *call,
                    rule_name: semantics.rule_name,
                    tag: semantics.tag,
                    annotations: semantics.annotations,
                });
            }
            model.auction = auction.truncated(index + 1);
        }

        model
    }
}
