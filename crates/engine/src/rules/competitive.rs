//! Acting over the opponents: overcalls, takeout and other doubles, and
//! the answers to partner's competitive calls.

use crate::bid::NaturalKind;
use crate::config::params::{
    ReopeningDoubleParams, ResponsiveDoubleParams, TakeoutDoubleParams, WeakJumpOvercallParams,
};
use crate::conventions::ConventionId;
use crate::dsl::auction_predicates::{
    BidderHasNotActed, BidderOpened, IsBalancingSeat, LastBidAtMost, LastBidIsSuit,
    LastBidMaxLevel, OpponentsRaised, PartnerLast, RhoMadeLastBid, RhoPassed, TheyOpened,
    WeHaveOnlyPassed,
};
use crate::dsl::call_predicates::{
    not_call, AtMostGame, BidderHasShownSuit, IsCall, IsCheapest, IsDouble, IsJump, IsLevel,
    IsMajorSuit, IsNotrump, IsSuit, MaxLevel, NotConventional, OpponentHasNotShownSuit,
    PartnerHasShownSuit,
};
use crate::dsl::planner::TakeoutDoublePlanner;
use crate::dsl::rule::Rule;
use crate::dsl::shows::{
    ShowBalanced, ShowHcpBand, ShowHcpRange, ShowMaxLengthInOpponentSuit, ShowMinHcpFrom,
    ShowMinSuitLength, ShowMinSuitLengthFrom, ShowSemiBalanced, ShowStopperInOpponentSuit,
    ShowSupportForUnbidSuits, ShowSupportLength, ShowSupportValues, ShowThreeOfTopFiveOrBetter,
};
use crate::kernel::AuctionModel;
use crate::rule;
use crate::rules::conventional::{replies_and_continuations, ConventionAsk, GENERATED};
use types::Strain;

pub fn rules() -> Vec<Box<dyn Rule>> {
    let mut rules = replies_and_continuations(&GENERATED);
    let rest: Vec<Box<dyn Rule>> = vec![
        Box::new(JumpAdvanceOfDouble),
        Box::new(NotrumpAdvanceOfDouble),
        Box::new(SuitAdvanceOfDouble),
        Box::new(RaiseAfterNegativeDouble),
        Box::new(RebidAfterNegativeDouble),
        Box::new(NotrumpAfterNegativeDouble),
        Box::new(ResponsiveDouble),
        Box::new(ReopeningDouble),
        Box::new(BalancingTakeoutDouble),
        Box::new(ConventionAsk(ConventionId::Michaels)),
        Box::new(ConventionAsk(ConventionId::UnusualNotrump)),
        Box::new(WeakJumpOvercall),
        Box::new(OneNotrumpOvercall),
        Box::new(TakeoutDouble),
        Box::new(OneLevelOvercall),
        Box::new(TwoLevelOvercall),
    ];
    rules.extend(rest);
    rules
}

fn takeout(model: &AuctionModel) -> TakeoutDoubleParams {
    model.config.params(ConventionId::TakeoutDouble)
}

fn takeout_min_hcp(model: &AuctionModel) -> u8 {
    takeout(model).min_hcp
}

fn takeout_max_level(model: &AuctionModel) -> u8 {
    takeout(model).max_level
}

fn balancing_min_hcp(model: &AuctionModel) -> u8 {
    takeout(model).balancing_min_hcp
}

fn responsive_min_hcp(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<ResponsiveDoubleParams>(ConventionId::ResponsiveDouble)
        .min_hcp
}

fn responsive_max_level(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<ResponsiveDoubleParams>(ConventionId::ResponsiveDouble)
        .max_level
}

fn reopening_min_hcp(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<ReopeningDoubleParams>(ConventionId::ReopeningDouble)
        .min_hcp
}

fn reopening_max_length(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<ReopeningDoubleParams>(ConventionId::ReopeningDouble)
        .max_length
}

fn weak_jump_band(model: &AuctionModel) -> (u8, u8) {
    let params: WeakJumpOvercallParams = model.config.params(ConventionId::WeakJumpOvercalls);
    (params.min_hcp, params.max_hcp)
}

fn weak_jump_length(model: &AuctionModel) -> u8 {
    model
        .config
        .params::<WeakJumpOvercallParams>(ConventionId::WeakJumpOvercalls)
        .min_length
}

fn notrump_overcall_band(model: &AuctionModel) -> (u8, u8) {
    let general = &model.config.general;
    (general.notrump_overcall_min_hcp, general.notrump_overcall_max_hcp)
}

fn one_level_length(model: &AuctionModel) -> u8 {
    model.config.general.one_level_min_length
}

fn two_level_length(model: &AuctionModel) -> u8 {
    model.config.general.two_level_min_length
}

fn one_level_overcall_min_hcp(model: &AuctionModel) -> u8 {
    model.config.general.one_level_overcall_min_hcp
}

fn two_level_overcall_min_hcp(model: &AuctionModel) -> u8 {
    model.config.general.two_level_overcall_min_hcp
}

rule! {
    JumpAdvanceOfDouble: "Jump Advance of Takeout Double",
    tag: Natural(Advance),
    auction: [PartnerLast(NaturalKind::TakeoutDouble), RhoPassed, BidderHasNotActed],
    call: [IsSuit, IsJump, OpponentHasNotShownSuit],
    shows: [ShowMinSuitLength(4), ShowHcpRange(9, 11)],
    chooser: Longest
}

rule! {
    NotrumpAdvanceOfDouble: "Notrump Advance of Takeout Double",
    tag: Natural(Advance),
    auction: [PartnerLast(NaturalKind::TakeoutDouble), RhoPassed, BidderHasNotActed],
    call: [IsNotrump, IsCheapest],
    shows: [ShowStopperInOpponentSuit, ShowHcpRange(6, 10)]
}

rule! {
    SuitAdvanceOfDouble: "Advance of Takeout Double",
    tag: Natural(Advance),
    auction: [PartnerLast(NaturalKind::TakeoutDouble), RhoPassed, BidderHasNotActed],
    call: [IsSuit, IsCheapest, OpponentHasNotShownSuit],
    shows: [ShowMinSuitLength(3)],
    chooser: Longest
}

rule! {
    RaiseAfterNegativeDouble: "Major after Negative Double",
    tag: Natural(Rebid),
    auction: [BidderOpened, PartnerLast(NaturalKind::NegativeDouble)],
    call: [IsMajorSuit, PartnerHasShownSuit, OpponentHasNotShownSuit, AtMostGame],
    shows: [ShowSupportLength, ShowSupportValues],
    chooser: Highest
}

rule! {
    RebidAfterNegativeDouble: "Rebid after Negative Double",
    tag: Natural(Rebid),
    auction: [BidderOpened, PartnerLast(NaturalKind::NegativeDouble)],
    call: [IsSuit, BidderHasShownSuit, IsCheapest],
    shows: [ShowMinSuitLength(6)]
}

rule! {
    NotrumpAfterNegativeDouble: "Notrump after Negative Double",
    tag: Natural(Rebid),
    auction: [BidderOpened, PartnerLast(NaturalKind::NegativeDouble)],
    call: [IsNotrump, IsCheapest],
    shows: [ShowStopperInOpponentSuit, ShowSemiBalanced]
}

rule! {
    ResponsiveDouble: "Responsive Double",
    tag: Natural(ResponsiveDouble),
    requires: ResponsiveDouble,
    auction: [
        PartnerLast(NaturalKind::TakeoutDouble),
        OpponentsRaised,
        LastBidAtMost(responsive_max_level),
    ],
    call: [IsDouble],
    shows: [ShowMinHcpFrom(responsive_min_hcp), ShowSupportForUnbidSuits],
    annotations: [Artificial]
}

rule! {
    ReopeningDouble: "Reopening Double",
    tag: Natural(ReopeningDouble),
    requires: ReopeningDouble,
    auction: [BidderOpened, IsBalancingSeat, LastBidMaxLevel(2)],
    call: [IsDouble],
    shows: [
        ShowMinHcpFrom(reopening_min_hcp),
        ShowMaxLengthInOpponentSuit(reopening_max_length),
    ]
}

rule! {
    BalancingTakeoutDouble: "Balancing Takeout Double",
    tag: Natural(TakeoutDouble),
    requires: TakeoutDouble,
    auction: [
        TheyOpened,
        WeHaveOnlyPassed,
        IsBalancingSeat,
        LastBidIsSuit,
        LastBidAtMost(takeout_max_level),
    ],
    call: [IsDouble],
    shows: [ShowMinHcpFrom(balancing_min_hcp), ShowSupportForUnbidSuits],
    annotations: [Forcing],
    planner: TakeoutDoublePlanner
}

rule! {
    WeakJumpOvercall: "Weak Jump Overcall",
    tag: Natural(Preempt),
    requires: WeakJumpOvercalls,
    auction: [TheyOpened, WeHaveOnlyPassed, RhoMadeLastBid],
    call: [IsSuit, IsJump, MaxLevel(3), OpponentHasNotShownSuit],
    shows: [
        ShowMinSuitLengthFrom(weak_jump_length),
        ShowHcpBand(weak_jump_band),
        ShowThreeOfTopFiveOrBetter,
    ],
    annotations: [Overcall]
}

rule! {
    OneNotrumpOvercall: "Notrump Overcall",
    tag: Natural(Overcall),
    auction: [TheyOpened, WeHaveOnlyPassed, RhoMadeLastBid],
    call: [IsCall(1, Strain::NoTrump)],
    shows: [ShowHcpBand(notrump_overcall_band), ShowBalanced, ShowStopperInOpponentSuit],
    annotations: [NotrumpSystemsOn, Overcall]
}

rule! {
    TakeoutDouble: "Takeout Double",
    tag: Natural(TakeoutDouble),
    requires: TakeoutDouble,
    auction: [
        TheyOpened,
        WeHaveOnlyPassed,
        RhoMadeLastBid,
        LastBidIsSuit,
        LastBidAtMost(takeout_max_level),
    ],
    call: [IsDouble],
    shows: [ShowMinHcpFrom(takeout_min_hcp), ShowSupportForUnbidSuits],
    annotations: [Forcing],
    planner: TakeoutDoublePlanner
}

rule! {
    OneLevelOvercall: "Suited Overcall",
    tag: Natural(Overcall),
    auction: [TheyOpened, WeHaveOnlyPassed],
    call: [IsLevel(1), IsSuit, OpponentHasNotShownSuit, NotConventional],
    shows: [
        ShowMinSuitLengthFrom(one_level_length),
        ShowMinHcpFrom(one_level_overcall_min_hcp),
    ],
    annotations: [Overcall],
    chooser: Longest
}

rule! {
    TwoLevelOvercall: "Suited Overcall",
    tag: Natural(Overcall),
    auction: [TheyOpened, WeHaveOnlyPassed],
    call: [IsLevel(2), IsSuit, not_call(IsJump), OpponentHasNotShownSuit, NotConventional],
    shows: [
        ShowMinSuitLengthFrom(two_level_length),
        ShowMinHcpFrom(two_level_overcall_min_hcp),
    ],
    annotations: [Overcall],
    chooser: Longest
}
