//! Responding to partner: notrump responses, raises, new suits, opener's
//! rebids and the advance of partner's overcalls and preempts.

use crate::config::params::{
    CueBidRaiseParams, Jacoby2ntParams, NegativeDoubleParams, SupportDoubleParams,
};
use crate::conventions::ConventionId;
use crate::dsl::auction_predicates::{
    BidderHasNotActed, BidderOpened, HasUnbidMajor, LastBidAtMost, PartnerInvited, PartnerLast,
    PartnerLastAsked, PartnerLimited, PartnerOpened, PartnerOpenedMajor, PartnerOpenedNotrump,
    PartnerOpenedOneOfASuit, RhoBidSuit, RhoMadeLastBid, RhoPassed, WeOpened,
};
use crate::dsl::call_predicates::{
    not_call, AtMostGame, BidderHasShownSuit, CuebidOpponentSuit, CuebidRhoSuit, IsCall,
    IsCheapest, IsDouble, IsGameInPartnerStrain, IsGameLevel, IsJump, IsLevel, IsMajorSuit,
    IsMinorSuit, IsNewSuit, IsNotrump, IsPass, IsSuit, MinLevel, NotConventional,
    OpponentHasNotShownSuit, PartnerHasShownSuit,
};
use crate::dsl::rule::Rule;
use crate::dsl::shows::{
    ShowBalanced, ShowBetterContractIsRemote, ShowCombinedHcpRange, ShowExactLengthInPartnerSuit,
    ShowHcpRange, ShowMaxHcp, ShowMinHcp, ShowMinHcpFrom, ShowMinLengthInPartnerSuit,
    ShowMinLengthInUnbidMajors, ShowMinSuitLength, ShowSemiBalanced, ShowStopperInOpponentSuit,
    ShowSufficientValues, ShowSupportLength, ShowSupportPointsInPartnerSuit, ShowSupportValues,
};
use crate::kernel::AuctionModel;
use crate::rule;
use crate::rules::conventional::{replies_and_continuations, ConventionAsk, GENERATED};
use types::Strain;

pub fn rules() -> Vec<Box<dyn Rule>> {
    let mut rules = replies_and_continuations(&GENERATED);
    let rest: Vec<Box<dyn Rule>> = vec![
        Box::new(ConventionAsk(ConventionId::Gerber)),
        Box::new(ConventionAsk(ConventionId::JacobyTransfers)),
        Box::new(ConventionAsk(ConventionId::Stayman)),
        Box::new(QuantitativeFourNotrump),
        Box::new(SixNotrumpRaise),
        Box::new(ThreeNotrumpRaise),
        Box::new(TwoNotrumpInvite),
        Box::new(PassPartnerNotrump),
        Box::new(AcceptInvitation),
        Box::new(DeclineInvitation),
        Box::new(ConventionAsk(ConventionId::Blackwood)),
        Box::new(ConventionAsk(ConventionId::RomanKeyCard)),
        Box::new(CueBidRaise),
        Box::new(CueRaiseGame),
        Box::new(CueRaiseMinimum),
        Box::new(Jacoby2ntResponse),
        Box::new(SupportDouble),
        Box::new(NegativeDouble),
        Box::new(RaisePreemptToGame),
        Box::new(NewSuitOverPreempt),
        Box::new(PassPreempt),
        Box::new(AdvanceCueBid),
        Box::new(RaisePartnerOvercall),
        Box::new(NewSuitAdvance),
        Box::new(NotrumpAdvance),
        Box::new(PassAdvance),
        Box::new(SupportPartner),
        Box::new(JumpShiftResponse),
        Box::new(NewSuitAtLevelOne),
        Box::new(NewMajorAtLevelTwo),
        Box::new(NewMinorAtLevelTwo),
        Box::new(OneNotrumpResponse),
        Box::new(TwoNotrumpResponse),
        Box::new(ThreeNotrumpResponse),
        Box::new(OneNotrumpRebid),
        Box::new(JumpNotrumpRebid),
        Box::new(RebidOwnSuit),
        Box::new(NaturalNotrump),
        Box::new(BetterContractRemote),
        Box::new(PassResponse),
    ];
    rules.extend(rest);
    rules
}

fn three(_: &AuctionModel) -> u8 {
    3
}

fn four(_: &AuctionModel) -> u8 {
    4
}

fn cue_raise_support(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<CueBidRaiseParams>(ConventionId::CueBidRaise)
        .min_support
}

fn cue_raise_points(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<CueBidRaiseParams>(ConventionId::CueBidRaise)
        .min_support_points
}

fn jacoby_min_hcp(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<Jacoby2ntParams>(ConventionId::Jacoby2nt)
        .min_hcp
}

fn support_double_ceiling(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<SupportDoubleParams>(ConventionId::SupportDouble)
        .ceiling_level
}

fn negative_double_max_level(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<NegativeDoubleParams>(ConventionId::NegativeDouble)
        .max_level
}

/// More is needed once the opponents push the auction past the one level.
fn negative_double_min_hcp(model: &AuctionModel) -> u8 {
    let params: NegativeDoubleParams = model.config.params(ConventionId::NegativeDouble);
    match model.auction.last_bid().and_then(|(_, call)| call.level()) {
        Some(1) => params.one_level_min_hcp,
        _ => params.higher_min_hcp,
    }
}

/// Accepting needs more than the minimum already shown.
fn accept_min_hcp(model: &AuctionModel) -> u8 {
    model.bidder_hand().min_hcp.unwrap_or(0) + 1
}

rule! {
    QuantitativeFourNotrump: "Quantitative 4NT",
    tag: Natural(Raise),
    auction: [PartnerOpenedNotrump],
    call: [IsCall(4, Strain::NoTrump), NotConventional],
    shows: [ShowCombinedHcpRange(31, 32), ShowSemiBalanced]
}

rule! {
    SixNotrumpRaise: "6NT Raise",
    tag: Natural(Raise),
    auction: [PartnerOpenedNotrump],
    call: [IsCall(6, Strain::NoTrump)],
    shows: [ShowCombinedHcpRange(33, 36), ShowSemiBalanced]
}

rule! {
    ThreeNotrumpRaise: "3NT Raise",
    tag: Natural(Raise),
    auction: [PartnerOpenedNotrump],
    call: [IsCall(3, Strain::NoTrump)],
    shows: [ShowCombinedHcpRange(25, 30)]
}

rule! {
    TwoNotrumpInvite: "2NT Invitation",
    tag: Natural(Invitation),
    auction: [PartnerOpenedNotrump],
    call: [IsCall(2, Strain::NoTrump)],
    shows: [ShowCombinedHcpRange(23, 24)]
}

rule! {
    PassPartnerNotrump: "Pass (Notrump Opening)",
    tag: Natural(Pass),
    auction: [PartnerOpenedNotrump],
    call: [IsPass],
    shows: [ShowCombinedHcpRange(0, 22)]
}

rule! {
    AcceptInvitation: "Accept Invitation",
    tag: Natural(Raise),
    auction: [BidderOpened, PartnerInvited],
    call: [IsGameInPartnerStrain],
    shows: [ShowMinHcpFrom(accept_min_hcp)]
}

rule! {
    DeclineInvitation: "Decline Invitation",
    tag: Natural(Pass),
    auction: [BidderOpened, PartnerInvited],
    call: [IsPass],
    shows: []
}

rule! {
    CueBidRaise: "Cue-Bid Raise",
    tag: Ask(CueBidRaise),
    auction: [PartnerOpened, RhoBidSuit, BidderHasNotActed],
    call: [CuebidRhoSuit, IsCheapest],
    shows: [
        ShowMinLengthInPartnerSuit(cue_raise_support),
        ShowSupportPointsInPartnerSuit(cue_raise_points),
    ],
    annotations: [Forcing, Artificial]
}

rule! {
    CueRaiseGame: "Cue-Bid Raise Reply (Game)",
    tag: Reply(CueBidRaise),
    auction: [BidderOpened, PartnerLastAsked(ConventionId::CueBidRaise), RhoPassed],
    call: [IsGameLevel, BidderHasShownSuit],
    shows: [ShowMinHcp(15)]
}

rule! {
    CueRaiseMinimum: "Cue-Bid Raise Reply (Minimum)",
    tag: Reply(CueBidRaise),
    auction: [BidderOpened, PartnerLastAsked(ConventionId::CueBidRaise), RhoPassed],
    call: [IsSuit, BidderHasShownSuit, IsCheapest],
    shows: [ShowMaxHcp(14)]
}

rule! {
    Jacoby2ntResponse: "Jacoby 2NT",
    tag: Ask(Jacoby2nt),
    auction: [PartnerOpenedMajor, BidderHasNotActed, RhoPassed],
    call: [IsCall(2, Strain::NoTrump)],
    shows: [ShowMinHcpFrom(jacoby_min_hcp), ShowMinLengthInPartnerSuit(four)],
    annotations: [GameForcing, Artificial]
}

rule! {
    SupportDouble: "Support Double",
    tag: Natural(SupportDouble),
    requires: SupportDouble,
    auction: [
        BidderOpened,
        PartnerLast(crate::bid::NaturalKind::NewSuit),
        RhoMadeLastBid,
        LastBidAtMost(support_double_ceiling),
    ],
    call: [IsDouble],
    shows: [ShowExactLengthInPartnerSuit(3)],
    annotations: [Artificial]
}

rule! {
    NegativeDouble: "Negative Double",
    tag: Natural(NegativeDouble),
    requires: NegativeDouble,
    auction: [
        PartnerOpened,
        BidderHasNotActed,
        RhoBidSuit,
        LastBidAtMost(negative_double_max_level),
        HasUnbidMajor,
    ],
    call: [IsDouble],
    shows: [ShowMinLengthInUnbidMajors(4), ShowMinHcpFrom(negative_double_min_hcp)],
    annotations: [Forcing]
}

rule! {
    RaisePreemptToGame: "Raise Preempt to Game",
    tag: Natural(Raise),
    auction: [PartnerLast(crate::bid::NaturalKind::Preempt), RhoPassed, BidderHasNotActed],
    call: [IsGameInPartnerStrain],
    shows: [ShowMinLengthInPartnerSuit(three), ShowMinHcp(16)]
}

rule! {
    NewSuitOverPreempt: "New Suit over Preempt",
    tag: Natural(Response),
    auction: [PartnerLast(crate::bid::NaturalKind::Preempt), RhoPassed, BidderHasNotActed],
    call: [IsSuit, IsNewSuit, not_call(IsJump)],
    shows: [ShowMinSuitLength(5), ShowMinHcp(16)],
    annotations: [Forcing],
    chooser: Longest
}

rule! {
    PassPreempt: "Pass (Preempt)",
    tag: Natural(Pass),
    auction: [PartnerLast(crate::bid::NaturalKind::Preempt), RhoPassed],
    call: [IsPass],
    shows: [ShowMaxHcp(15)]
}

rule! {
    AdvanceCueBid: "Cue-Bid Advance",
    tag: Natural(Advance),
    auction: [PartnerLast(crate::bid::NaturalKind::Overcall), BidderHasNotActed],
    call: [CuebidOpponentSuit, IsCheapest],
    shows: [ShowMinLengthInPartnerSuit(three), ShowMinHcp(11)],
    annotations: [Forcing, Artificial]
}

rule! {
    RaisePartnerOvercall: "Raise Partner's Overcall",
    tag: Natural(Raise),
    auction: [PartnerLast(crate::bid::NaturalKind::Overcall), BidderHasNotActed],
    call: [IsSuit, PartnerHasShownSuit, IsCheapest],
    shows: [ShowMinLengthInPartnerSuit(three), ShowHcpRange(6, 10)]
}

rule! {
    NewSuitAdvance: "New Suit (Advance)",
    tag: Natural(Advance),
    auction: [PartnerLast(crate::bid::NaturalKind::Overcall), BidderHasNotActed],
    call: [IsSuit, IsNewSuit, not_call(IsJump), OpponentHasNotShownSuit],
    shows: [ShowMinSuitLength(5), ShowSufficientValues],
    chooser: Longest
}

rule! {
    NotrumpAdvance: "Notrump Advance",
    tag: Natural(Advance),
    auction: [PartnerLast(crate::bid::NaturalKind::Overcall), BidderHasNotActed],
    call: [IsNotrump],
    shows: [ShowSemiBalanced, ShowStopperInOpponentSuit, ShowSufficientValues]
}

rule! {
    PassAdvance: "Pass (Advance)",
    tag: Natural(Pass),
    auction: [PartnerLast(crate::bid::NaturalKind::Overcall)],
    call: [IsPass],
    shows: [ShowMaxHcp(12)]
}

rule! {
    SupportPartner: "Support Partner",
    tag: Natural(Raise),
    auction: [WeOpened],
    call: [IsSuit, PartnerHasShownSuit, AtMostGame],
    shows: [ShowSupportLength, ShowSupportValues],
    chooser: Highest
}

rule! {
    JumpShiftResponse: "Jump Shift Response",
    tag: Natural(NewSuit),
    auction: [PartnerOpened, BidderHasNotActed],
    call: [IsSuit, IsJump, IsNewSuit],
    shows: [ShowMinSuitLength(5), ShowMinHcp(19)],
    annotations: [GameForcing],
    chooser: Longest
}

rule! {
    NewSuitAtLevelOne: "New Suit",
    tag: Natural(NewSuit),
    auction: [PartnerOpened, BidderHasNotActed],
    call: [IsLevel(1), IsNewSuit],
    shows: [ShowMinSuitLength(4), ShowMinHcp(6)],
    annotations: [Forcing],
    chooser: Longest
}

rule! {
    NewMajorAtLevelTwo: "New Major",
    tag: Natural(NewSuit),
    auction: [PartnerOpened, BidderHasNotActed],
    call: [IsLevel(2), not_call(IsJump), IsNewSuit, IsMajorSuit],
    shows: [ShowMinSuitLength(5), ShowMinHcp(10)],
    annotations: [Forcing]
}

rule! {
    NewMinorAtLevelTwo: "New Minor",
    tag: Natural(NewSuit),
    auction: [PartnerOpened, BidderHasNotActed],
    call: [IsLevel(2), not_call(IsJump), IsNewSuit, IsMinorSuit],
    shows: [ShowMinSuitLength(4), ShowMinHcp(10)],
    annotations: [Forcing],
    chooser: Longest
}

rule! {
    OneNotrumpResponse: "1NT Response",
    tag: Natural(Notrump),
    auction: [PartnerOpenedOneOfASuit, BidderHasNotActed, RhoPassed],
    call: [IsCall(1, Strain::NoTrump)],
    shows: [ShowHcpRange(6, 10)]
}

rule! {
    TwoNotrumpResponse: "2NT Response",
    tag: Natural(Notrump),
    auction: [PartnerOpenedOneOfASuit, BidderHasNotActed, RhoPassed],
    call: [IsCall(2, Strain::NoTrump)],
    shows: [ShowHcpRange(13, 15), ShowBalanced],
    annotations: [GameForcing]
}

rule! {
    ThreeNotrumpResponse: "3NT Response",
    tag: Natural(Notrump),
    auction: [PartnerOpenedOneOfASuit, BidderHasNotActed, RhoPassed],
    call: [IsCall(3, Strain::NoTrump)],
    shows: [ShowHcpRange(16, 18), ShowBalanced]
}

rule! {
    OneNotrumpRebid: "1NT Rebid",
    tag: Natural(Rebid),
    auction: [BidderOpened, PartnerLast(crate::bid::NaturalKind::NewSuit)],
    call: [IsCall(1, Strain::NoTrump)],
    shows: [ShowHcpRange(12, 14), ShowBalanced]
}

rule! {
    JumpNotrumpRebid: "2NT Jump Rebid",
    tag: Natural(Rebid),
    auction: [BidderOpened, PartnerLast(crate::bid::NaturalKind::NewSuit)],
    call: [IsCall(2, Strain::NoTrump), IsJump],
    shows: [ShowHcpRange(18, 19), ShowBalanced]
}

rule! {
    RebidOwnSuit: "Rebid Suit",
    tag: Natural(Rebid),
    auction: [WeOpened],
    call: [IsSuit, not_call(PartnerHasShownSuit), BidderHasShownSuit],
    shows: [ShowMinSuitLength(6), ShowSufficientValues]
}

rule! {
    NaturalNotrump: "Natural Notrump",
    tag: Natural(Notrump),
    auction: [WeOpened],
    call: [MinLevel(2), IsNotrump],
    shows: [ShowSemiBalanced, ShowStopperInOpponentSuit, ShowSufficientValues]
}

rule! {
    BetterContractRemote: "Pass (Better Contract Remote)",
    tag: Natural(Pass),
    auction: [WeOpened, PartnerLimited],
    call: [IsPass],
    shows: [ShowBetterContractIsRemote]
}

rule! {
    PassResponse: "Pass (Response)",
    tag: Natural(Pass),
    auction: [PartnerOpened, BidderHasNotActed, RhoPassed],
    call: [IsPass],
    shows: [ShowMaxHcp(5)]
}
