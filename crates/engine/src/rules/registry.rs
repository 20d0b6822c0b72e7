use crate::conventions::two_suited;
use crate::dsl::rule::Rule;
use crate::kernel::{AuctionModel, Forcing};
use crate::rules::{competitive, defense, forced, natural, opening, responses};
use once_cell::sync::Lazy;
use serde::Serialize;
use types::{Call, Strain};

/// The tiers of the decision cascade, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LayerKind {
    Forced,
    Defense,
    Opening,
    Response,
    Competitive,
    Natural,
}

impl LayerKind {
    pub const ALL: [LayerKind; 6] = [
        LayerKind::Forced,
        LayerKind::Defense,
        LayerKind::Opening,
        LayerKind::Response,
        LayerKind::Competitive,
        LayerKind::Natural,
    ];

    /// Whether the seat on turn is in a position this layer handles.
    pub fn is_active(self, model: &AuctionModel, forcing: Forcing) -> bool {
        let auction = &model.auction;
        let me = auction.current_player();
        let side = auction.current_partnership();
        match self {
            LayerKind::Forced => forcing == Forcing::GameForcing,
            LayerKind::Defense => {
                two_suited::defense_spot(auction)
                    == Some(Call::Bid {
                        level: 1,
                        strain: Strain::NoTrump,
                    })
                    || two_suited::strong_club_spot(auction, model.config)
            }
            LayerKind::Opening => !auction.is_opened(),
            LayerKind::Response => auction
                .last_action_by(me.partner())
                .is_some_and(|call| call.is_bid()),
            LayerKind::Competitive => auction
                .iter()
                .any(|(seat, call)| seat.partnership() != side && !call.is_pass()),
            LayerKind::Natural => !auction
                .current_contract()
                .is_some_and(|contract| contract.belongs_to(side)),
        }
    }
}

pub struct Layer {
    pub kind: LayerKind,
    pub rules: Vec<Box<dyn Rule>>,
}

/// Registry of all bidding rules, grouped into layers
pub struct RuleRegistry {
    layers: Vec<Layer>,
    forced_continuation: Vec<Box<dyn Rule>>,
}

static REGISTRY: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::standard);

/// The process-wide rule set. Rules hold no configuration.
pub fn registry() -> &'static RuleRegistry {
    &REGISTRY
}

impl RuleRegistry {
    pub fn standard() -> Self {
        let layers = LayerKind::ALL
            .into_iter()
            .map(|kind| Layer {
                kind,
                rules: match kind {
                    LayerKind::Forced => forced::rules(),
                    LayerKind::Defense => defense::rules(),
                    LayerKind::Opening => opening::rules(),
                    LayerKind::Response => responses::rules(),
                    LayerKind::Competitive => competitive::rules(),
                    LayerKind::Natural => natural::rules(),
                },
            })
            .collect();
        Self {
            layers,
            forced_continuation: forced::continuation_rules(),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The layers that apply to the seat on turn, in priority order.
    pub fn active_layers(&self, model: &AuctionModel, forcing: Forcing) -> Vec<&Layer> {
        self.layers
            .iter()
            .filter(|layer| layer.kind.is_active(model, forcing))
            .collect()
    }

    /// The generic rules that keep a forcing sequence alive.
    pub fn forced_continuation(&self) -> &[Box<dyn Rule>] {
        &self.forced_continuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConventionConfig;
    use types::{Auction, Position};

    fn active(dealer: Position, calls: &str) -> Vec<LayerKind> {
        let config = ConventionConfig::default();
        let auction = Auction::bidding(dealer, calls);
        let model = AuctionModel::from_auction(&auction, &config);
        registry()
            .active_layers(&model, Forcing::of(&model))
            .into_iter()
            .map(|layer| layer.kind)
            .collect()
    }

    #[test]
    fn test_every_layer_has_rules() {
        for layer in registry().layers() {
            assert!(!layer.rules.is_empty(), "{:?} has no rules", layer.kind);
        }
        assert!(!registry().forced_continuation().is_empty());
    }

    #[test]
    fn test_opening_seat() {
        assert_eq!(
            active(Position::North, ""),
            vec![LayerKind::Opening, LayerKind::Natural]
        );
    }

    #[test]
    fn test_response_outranks_competition() {
        let layers = active(Position::North, "1H 1S");
        assert_eq!(
            layers,
            vec![LayerKind::Response, LayerKind::Competitive, LayerKind::Natural]
        );
    }

    #[test]
    fn test_defense_against_notrump() {
        let layers = active(Position::North, "1N");
        assert_eq!(layers[0], LayerKind::Defense);
        assert!(layers.contains(&LayerKind::Competitive));
    }

    #[test]
    fn test_strong_two_clubs_forces_responder() {
        let layers = active(Position::North, "2C P");
        assert_eq!(layers[0], LayerKind::Forced);
        assert!(layers.contains(&LayerKind::Response));
    }
}
