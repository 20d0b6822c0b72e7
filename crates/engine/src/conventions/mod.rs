//! Convention catalog
//!
//! Every partnership agreement the engine knows about has an identifier, a
//! category in the configuration tree and, for artificial calls, a
//! recognizer (is this call our ask, and what does a reply encode?) and a
//! response generator (what do we reply with this hand?). Whether a
//! convention is on, and its parameters, always come from the live
//! [`ConventionConfig`].

pub mod openings;
pub mod slam;
pub mod notrump;
pub mod two_suited;

use crate::config::ConventionConfig;
use crate::kernel::HandConstraint;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use types::{Auction, Call, Hand, Suit};

/// Top-level groups of the configuration tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Openings,
    Responses,
    NotrumpResponses,
    CompetitiveActions,
    SlamAsking,
    Defenses,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Openings,
        Category::Responses,
        Category::NotrumpResponses,
        Category::CompetitiveActions,
        Category::SlamAsking,
        Category::Defenses,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Openings => "openings",
            Category::Responses => "responses",
            Category::NotrumpResponses => "notrump_responses",
            Category::CompetitiveActions => "competitive_actions",
            Category::SlamAsking => "slam_asking",
            Category::Defenses => "defenses",
        }
    }
}

/// Conventions of which at most one may be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusiveGroup {
    NotrumpDefense,
    AceAsking,
}

impl ExclusiveGroup {
    pub fn members(self) -> &'static [ConventionId] {
        match self {
            ExclusiveGroup::NotrumpDefense => &[
                ConventionId::Dont,
                ConventionId::Cappelletti,
                ConventionId::Landy,
            ],
            ExclusiveGroup::AceAsking => &[ConventionId::Blackwood, ConventionId::RomanKeyCard],
        }
    }
}

/// Stable identifier of a convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConventionId {
    StrongTwoClubs,
    NotrumpOpenings,
    WeakTwos,
    Preempts,
    RuleOfFifteen,
    Jacoby2nt,
    Stayman,
    JacobyTransfers,
    TakeoutDouble,
    NegativeDouble,
    ResponsiveDouble,
    SupportDouble,
    ReopeningDouble,
    Michaels,
    UnusualNotrump,
    CueBidRaise,
    WeakJumpOvercalls,
    Blackwood,
    RomanKeyCard,
    Gerber,
    Dont,
    Cappelletti,
    Landy,
    StrongClubDefense,
}

impl ConventionId {
    /// All conventions in catalog order.
    pub const ALL: [ConventionId; 24] = [
        ConventionId::StrongTwoClubs,
        ConventionId::NotrumpOpenings,
        ConventionId::WeakTwos,
        ConventionId::Preempts,
        ConventionId::RuleOfFifteen,
        ConventionId::Jacoby2nt,
        ConventionId::Stayman,
        ConventionId::JacobyTransfers,
        ConventionId::TakeoutDouble,
        ConventionId::NegativeDouble,
        ConventionId::ResponsiveDouble,
        ConventionId::SupportDouble,
        ConventionId::ReopeningDouble,
        ConventionId::Michaels,
        ConventionId::UnusualNotrump,
        ConventionId::CueBidRaise,
        ConventionId::WeakJumpOvercalls,
        ConventionId::Blackwood,
        ConventionId::RomanKeyCard,
        ConventionId::Gerber,
        ConventionId::Dont,
        ConventionId::Cappelletti,
        ConventionId::Landy,
        ConventionId::StrongClubDefense,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConventionId::StrongTwoClubs => "strong_two_clubs",
            ConventionId::NotrumpOpenings => "notrump_openings",
            ConventionId::WeakTwos => "weak_twos",
            ConventionId::Preempts => "preempts",
            ConventionId::RuleOfFifteen => "rule_of_fifteen",
            ConventionId::Jacoby2nt => "jacoby_2nt",
            ConventionId::Stayman => "stayman",
            ConventionId::JacobyTransfers => "jacoby_transfers",
            ConventionId::TakeoutDouble => "takeout_double",
            ConventionId::NegativeDouble => "negative_double",
            ConventionId::ResponsiveDouble => "responsive_double",
            ConventionId::SupportDouble => "support_double",
            ConventionId::ReopeningDouble => "reopening_double",
            ConventionId::Michaels => "michaels",
            ConventionId::UnusualNotrump => "unusual_notrump",
            ConventionId::CueBidRaise => "cue_bid_raise",
            ConventionId::WeakJumpOvercalls => "weak_jump_overcalls",
            ConventionId::Blackwood => "blackwood",
            ConventionId::RomanKeyCard => "roman_key_card",
            ConventionId::Gerber => "gerber",
            ConventionId::Dont => "dont",
            ConventionId::Cappelletti => "cappelletti",
            ConventionId::Landy => "landy",
            ConventionId::StrongClubDefense => "strong_club_defense",
        }
    }

    /// Human-readable name used in explanations.
    pub fn label(self) -> &'static str {
        match self {
            ConventionId::StrongTwoClubs => "Strong 2♣",
            ConventionId::NotrumpOpenings => "Notrump Openings",
            ConventionId::WeakTwos => "Weak Twos",
            ConventionId::Preempts => "Preempts",
            ConventionId::RuleOfFifteen => "Rule of 15",
            ConventionId::Jacoby2nt => "Jacoby 2NT",
            ConventionId::Stayman => "Stayman",
            ConventionId::JacobyTransfers => "Jacoby Transfer",
            ConventionId::TakeoutDouble => "Takeout Double",
            ConventionId::NegativeDouble => "Negative Double",
            ConventionId::ResponsiveDouble => "Responsive Double",
            ConventionId::SupportDouble => "Support Double",
            ConventionId::ReopeningDouble => "Reopening Double",
            ConventionId::Michaels => "Michaels Cue Bid",
            ConventionId::UnusualNotrump => "Unusual 2NT",
            ConventionId::CueBidRaise => "Cue-Bid Raise",
            ConventionId::WeakJumpOvercalls => "Weak Jump Overcall",
            ConventionId::Blackwood => "Blackwood",
            ConventionId::RomanKeyCard => "Roman Key Card Blackwood",
            ConventionId::Gerber => "Gerber",
            ConventionId::Dont => "DONT",
            ConventionId::Cappelletti => "Cappelletti",
            ConventionId::Landy => "Landy",
            ConventionId::StrongClubDefense => "Strong Club Defense",
        }
    }

    pub fn category(self) -> Category {
        match self {
            ConventionId::StrongTwoClubs
            | ConventionId::NotrumpOpenings
            | ConventionId::WeakTwos
            | ConventionId::Preempts
            | ConventionId::RuleOfFifteen => Category::Openings,
            ConventionId::Jacoby2nt => Category::Responses,
            ConventionId::Stayman | ConventionId::JacobyTransfers => Category::NotrumpResponses,
            ConventionId::TakeoutDouble
            | ConventionId::NegativeDouble
            | ConventionId::ResponsiveDouble
            | ConventionId::SupportDouble
            | ConventionId::ReopeningDouble
            | ConventionId::Michaels
            | ConventionId::UnusualNotrump
            | ConventionId::CueBidRaise
            | ConventionId::WeakJumpOvercalls => Category::CompetitiveActions,
            ConventionId::Blackwood | ConventionId::RomanKeyCard | ConventionId::Gerber => {
                Category::SlamAsking
            }
            ConventionId::Dont
            | ConventionId::Cappelletti
            | ConventionId::Landy
            | ConventionId::StrongClubDefense => Category::Defenses,
        }
    }

    pub fn group(self) -> Option<ExclusiveGroup> {
        match self {
            ConventionId::Dont | ConventionId::Cappelletti | ConventionId::Landy => {
                Some(ExclusiveGroup::NotrumpDefense)
            }
            ConventionId::Blackwood | ConventionId::RomanKeyCard => Some(ExclusiveGroup::AceAsking),
            _ => None,
        }
    }
}

impl fmt::Display for ConventionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConventionId {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConventionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| crate::error::ConfigError::UnknownConvention(s.to_string()))
    }
}

impl TryFrom<String> for ConventionId {
    type Error = crate::error::ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ConventionId> for String {
    fn from(id: ConventionId) -> Self {
        id.as_str().to_string()
    }
}

/// The suits a two-suited call promises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShownSuits {
    /// Both named suits.
    Both(Suit, Suit),
    /// The named suit and an unspecified minor.
    WithMinor(Suit),
    /// The named suit and an unspecified major.
    WithMajor(Suit),
    /// The named suit and an unspecified higher-ranking suit.
    WithHigher(Suit),
}

impl ShownSuits {
    /// The suits that could be the partner of the anchor suit.
    pub fn candidates(self) -> Vec<Suit> {
        match self {
            ShownSuits::Both(_, b) => vec![b],
            ShownSuits::WithMinor(a) => Suit::MINORS.into_iter().filter(|&s| s != a).collect(),
            ShownSuits::WithMajor(a) => Suit::MAJORS.into_iter().filter(|&s| s != a).collect(),
            ShownSuits::WithHigher(a) => Suit::ALL.into_iter().filter(|&s| s > a).collect(),
        }
    }

    pub fn anchor(self) -> Suit {
        match self {
            ShownSuits::Both(a, _)
            | ShownSuits::WithMinor(a)
            | ShownSuits::WithMajor(a)
            | ShownSuits::WithHigher(a) => a,
        }
    }

    /// Whether `hand` holds the shape: one suit `long`+, the other `short`+.
    pub fn held_by(self, hand: &Hand, long: u8, short: u8) -> bool {
        let anchor = hand.length(self.anchor());
        self.candidates().into_iter().any(|other| {
            let other = hand.length(other);
            (anchor >= long && other >= short) || (anchor >= short && other >= long)
        })
    }
}

impl fmt::Display for ShownSuits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShownSuits::Both(a, b) => write!(f, "{} and {}", a.symbol(), b.symbol()),
            ShownSuits::WithMinor(a) => write!(f, "{} and a minor", a.symbol()),
            ShownSuits::WithMajor(a) => write!(f, "{} and a major", a.symbol()),
            ShownSuits::WithHigher(a) => write!(f, "{} and a higher suit", a.symbol()),
        }
    }
}

/// What an artificial call or a reply to one encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Meaning {
    AceAsk,
    KeyCardAsk { trump: Suit },
    /// Ace count is one of the set bits of `mask`.
    Aces { mask: u8 },
    /// Key-card count is one of the set bits of `mask`.
    KeyCards { trump: Suit, mask: u8, queen: Option<bool> },
    MajorAsk,
    MajorReply { hearts: bool, spades: bool },
    Transfer { to: Suit },
    Accepted { suit: Suit },
    Waiting,
    Relay,
    OneSuited,
    /// A natural long suit, to play.
    LongSuit { suit: Suit },
    TwoSuited { suits: ShownSuits, min_length: u8 },
}

/// Counts encoded by a bit mask, lowest first.
pub fn mask_counts(mask: u8) -> impl Iterator<Item = u8> {
    (0..8u8).filter(move |count| mask & (1 << count) != 0)
}

/// "1 ace", "0 or 4 aces".
pub fn describe_counts(mask: u8, singular: &str, plural: &str) -> String {
    let counts: Vec<String> = mask_counts(mask).map(|c| c.to_string()).collect();
    let noun = if mask == 1 << 1 { singular } else { plural };
    format!("{} {}", counts.join(" or "), noun)
}

impl fmt::Display for Meaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meaning::AceAsk => write!(f, "asks for aces"),
            Meaning::KeyCardAsk { trump } => write!(f, "asks for key cards in {}", trump.symbol()),
            Meaning::Aces { mask } => write!(f, "{}", describe_counts(*mask, "ace", "aces")),
            Meaning::KeyCards { trump, mask, queen } => {
                let counts = describe_counts(*mask, "key card", "key cards");
                write!(f, "{counts} for {}", trump.symbol())?;
                match queen {
                    Some(true) => write!(f, " with the queen"),
                    Some(false) => write!(f, " without the queen"),
                    None => Ok(()),
                }
            }
            Meaning::MajorAsk => write!(f, "asks for a four-card major"),
            Meaning::MajorReply { hearts: false, spades: false } => write!(f, "no four-card major"),
            Meaning::MajorReply { hearts: true, .. } => write!(f, "four hearts"),
            Meaning::MajorReply { spades: true, .. } => write!(f, "four spades, not four hearts"),
            Meaning::Transfer { to } => write!(f, "transfer to {}", to.symbol()),
            Meaning::Accepted { suit } => write!(f, "completes the transfer to {}", suit.symbol()),
            Meaning::Waiting => write!(f, "waiting"),
            Meaning::Relay => write!(f, "relay, asks for the other suit"),
            Meaning::OneSuited => write!(f, "a long single suit"),
            Meaning::LongSuit { suit } => write!(f, "six or more {}, to play", suit.symbol()),
            Meaning::TwoSuited { suits, min_length } => {
                write!(f, "{}+ cards in {}", min_length, suits)
            }
        }
    }
}

impl Meaning {
    /// The hand constraints a call with this meaning shows.
    pub fn constraints(&self) -> Vec<HandConstraint> {
        match *self {
            Meaning::Aces { mask } => vec![HandConstraint::KeyCards { trump: None, mask }],
            Meaning::KeyCards { trump, mask, queen } => {
                let mut shows = vec![HandConstraint::KeyCards {
                    trump: Some(trump),
                    mask,
                }];
                if let Some(held) = queen {
                    shows.push(HandConstraint::TrumpQueen(trump, held));
                }
                shows
            }
            Meaning::MajorReply { hearts: true, .. } => {
                vec![HandConstraint::MinLength(Suit::Hearts, 4)]
            }
            Meaning::MajorReply { spades: true, .. } => vec![
                HandConstraint::MinLength(Suit::Spades, 4),
                HandConstraint::MaxLength(Suit::Hearts, 3),
            ],
            Meaning::MajorReply { .. } => vec![
                HandConstraint::MaxLength(Suit::Hearts, 3),
                HandConstraint::MaxLength(Suit::Spades, 3),
            ],
            Meaning::Transfer { to } => vec![HandConstraint::MinLength(to, 5)],
            Meaning::LongSuit { suit } => vec![HandConstraint::MinLength(suit, 6)],
            Meaning::TwoSuited {
                suits: ShownSuits::Both(a, b),
                min_length,
            } => vec![
                HandConstraint::MinLength(a, min_length),
                HandConstraint::MinLength(b, min_length),
            ],
            Meaning::TwoSuited { suits, min_length } => {
                vec![HandConstraint::MinLength(suits.anchor(), min_length)]
            }
            Meaning::AceAsk
            | Meaning::KeyCardAsk { .. }
            | Meaning::MajorAsk
            | Meaning::Accepted { .. }
            | Meaning::Waiting
            | Meaning::Relay
            | Meaning::OneSuited => Vec::new(),
        }
    }
}

/// Identifies the asks of one convention and decodes the replies to them.
pub trait Recognizer: Send + Sync {
    /// Whether `call`, about to be made by the seat on turn in `auction`,
    /// is this convention's ask.
    fn recognizes(&self, auction: &Auction, config: &ConventionConfig, call: &Call) -> bool;

    /// What the ask shows by itself.
    fn describe(&self, _auction: &Auction, _config: &ConventionConfig, _call: &Call) -> Option<Meaning> {
        None
    }

    /// What `reply`, about to be made by the seat on turn, encodes. The ask
    /// is partner's last call.
    fn decode(&self, _auction: &Auction, _config: &ConventionConfig, _reply: &Call) -> Option<Meaning> {
        None
    }
}

/// Produces the canonical replies to one convention's asks.
pub trait ResponseGenerator: Send + Sync {
    /// Reply for the seat on turn, whose partner just asked.
    fn reply(&self, auction: &Auction, config: &ConventionConfig, hand: &Hand) -> Option<Call>;

    /// The asker's next call once partner has replied.
    fn continuation(&self, _auction: &Auction, _config: &ConventionConfig, _hand: &Hand) -> Option<Call> {
        None
    }
}

pub struct CatalogEntry {
    pub id: ConventionId,
    pub recognizer: Option<Box<dyn Recognizer>>,
    pub generator: Option<Box<dyn ResponseGenerator>>,
}

/// The fixed list of conventions the engine implements.
pub struct ConventionCatalog {
    entries: Vec<CatalogEntry>,
}

static CATALOG: Lazy<ConventionCatalog> = Lazy::new(ConventionCatalog::standard);

/// The process-wide catalog. It holds no configuration.
pub fn catalog() -> &'static ConventionCatalog {
    &CATALOG
}

/// Partner's ask awaiting our reply: the auction before the ask and the ask
/// itself. RHO must have passed.
pub fn pending_ask(auction: &Auction) -> Option<(Auction, Call)> {
    let len = auction.len();
    if len < 2 {
        return None;
    }
    let entries = auction.entries();
    let rho = entries[len - 1];
    let ask = entries[len - 2];
    if !rho.call.is_pass() || ask.seat != auction.current_player().partner() {
        return None;
    }
    Some((auction.truncated(len - 2), ask.call))
}

/// Our own ask that partner has just answered: the auction before the ask,
/// the ask and the reply. Both opponents must have passed.
pub fn answered_ask(auction: &Auction) -> Option<(Auction, Call, Call)> {
    let len = auction.len();
    if len < 4 {
        return None;
    }
    let entries = auction.entries();
    let ask = entries[len - 4];
    let reply = entries[len - 2];
    if ask.seat != auction.current_player()
        || !entries[len - 3].call.is_pass()
        || !entries[len - 1].call.is_pass()
    {
        return None;
    }
    Some((auction.truncated(len - 4), ask.call, reply.call))
}

impl ConventionCatalog {
    fn standard() -> Self {
        use notrump::{JacobyTransfers, Stayman};
        use openings::StrongTwoClubs;
        use slam::{Blackwood, Gerber, RomanKeyCard};
        use two_suited::{Cappelletti, Dont, Landy, Michaels, StrongClubDefense, UnusualNotrump};

        fn entry<T>(id: ConventionId, convention: T) -> CatalogEntry
        where
            T: Recognizer + ResponseGenerator + Copy + 'static,
        {
            CatalogEntry {
                id,
                recognizer: Some(Box::new(convention)),
                generator: Some(Box::new(convention)),
            }
        }

        let mut entries = Vec::new();
        for id in ConventionId::ALL {
            entries.push(match id {
                ConventionId::StrongTwoClubs => entry(id, StrongTwoClubs),
                ConventionId::Stayman => entry(id, Stayman),
                ConventionId::JacobyTransfers => entry(id, JacobyTransfers),
                ConventionId::Michaels => entry(id, Michaels),
                ConventionId::UnusualNotrump => entry(id, UnusualNotrump),
                ConventionId::Blackwood => entry(id, Blackwood),
                ConventionId::RomanKeyCard => entry(id, RomanKeyCard),
                ConventionId::Gerber => entry(id, Gerber),
                ConventionId::Dont => entry(id, Dont),
                ConventionId::Cappelletti => entry(id, Cappelletti),
                ConventionId::Landy => entry(id, Landy),
                ConventionId::StrongClubDefense => entry(id, StrongClubDefense),
                _ => CatalogEntry {
                    id,
                    recognizer: None,
                    generator: None,
                },
            });
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, id: ConventionId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Whether the enabled convention `id` claims `call` as its ask.
    pub fn recognizes(
        &self,
        id: ConventionId,
        auction: &Auction,
        config: &ConventionConfig,
        call: &Call,
    ) -> bool {
        config.is_enabled(id)
            && self
                .entry(id)
                .and_then(|entry| entry.recognizer.as_ref())
                .is_some_and(|recognizer| recognizer.recognizes(auction, config, call))
    }

    /// The first enabled convention that claims `call`.
    pub fn recognize(
        &self,
        auction: &Auction,
        config: &ConventionConfig,
        call: &Call,
    ) -> Option<ConventionId> {
        self.entries
            .iter()
            .map(|entry| entry.id)
            .find(|&id| self.recognizes(id, auction, config, call))
    }

    pub fn describe(
        &self,
        id: ConventionId,
        auction: &Auction,
        config: &ConventionConfig,
        call: &Call,
    ) -> Option<Meaning> {
        if !self.recognizes(id, auction, config, call) {
            return None;
        }
        self.entry(id)?
            .recognizer
            .as_ref()?
            .describe(auction, config, call)
    }

    /// Partner's pending ask, if it belongs to `id`.
    pub fn partner_asked(
        &self,
        id: ConventionId,
        auction: &Auction,
        config: &ConventionConfig,
    ) -> Option<Call> {
        let (before, ask) = pending_ask(auction)?;
        self.recognizes(id, &before, config, &ask).then_some(ask)
    }

    /// Our own ask belonging to `id` and partner's reply to it.
    pub fn answered(
        &self,
        id: ConventionId,
        auction: &Auction,
        config: &ConventionConfig,
    ) -> Option<(Call, Call)> {
        let (before, ask, reply) = answered_ask(auction)?;
        self.recognizes(id, &before, config, &ask)
            .then_some((ask, reply))
    }

    /// What `reply`, about to be made by the seat on turn, means as an
    /// answer to partner's `id` ask.
    pub fn decode(
        &self,
        id: ConventionId,
        auction: &Auction,
        config: &ConventionConfig,
        reply: &Call,
    ) -> Option<Meaning> {
        self.partner_asked(id, auction, config)?;
        self.entry(id)?
            .recognizer
            .as_ref()?
            .decode(auction, config, reply)
    }

    pub fn reply(
        &self,
        id: ConventionId,
        auction: &Auction,
        config: &ConventionConfig,
        hand: &Hand,
    ) -> Option<Call> {
        self.partner_asked(id, auction, config)?;
        let call = self.entry(id)?.generator.as_ref()?.reply(auction, config, hand)?;
        auction.is_legal(&call).then_some(call)
    }

    pub fn continuation(
        &self,
        id: ConventionId,
        auction: &Auction,
        config: &ConventionConfig,
        hand: &Hand,
    ) -> Option<Call> {
        self.answered(id, auction, config)?;
        let call = self
            .entry(id)?
            .generator
            .as_ref()?
            .continuation(auction, config, hand)?;
        auction.is_legal(&call).then_some(call)
    }
}
