// cspell:ignore AKQJT AKQJ
use crate::card::Card;
use crate::error::HandError;
use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    /// No singletons, no voids, max one doubleton (4-3-3-3, 4-4-3-2, 5-3-3-2)
    Balanced,
    /// One singleton OR two doubletons, no voids (5-4-2-2, 6-3-2-2)
    SemiBalanced,
    /// Everything else (contains singletons/voids beyond SemiBalanced)
    Unbalanced,
}

/// How distributional points are counted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    /// Void 3, singleton 2, doubleton 1.
    #[default]
    Shortness,
    /// One point for every card beyond the fourth in a suit.
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Distribution {
    pub spades: u8,
    pub hearts: u8,
    pub diamonds: u8,
    pub clubs: u8,
}

impl Distribution {
    pub fn max() -> Self {
        Self {
            spades: 13,
            hearts: 13,
            diamonds: 13,
            clubs: 13,
        }
    }

    pub fn length(&self, suit: Suit) -> u8 {
        match suit {
            Suit::Spades => self.spades,
            Suit::Hearts => self.hearts,
            Suit::Diamonds => self.diamonds,
            Suit::Clubs => self.clubs,
        }
    }

    pub fn set_length(&mut self, suit: Suit, length: u8) {
        match suit {
            Suit::Spades => self.spades = length,
            Suit::Hearts => self.hearts = length,
            Suit::Diamonds => self.diamonds = length,
            Suit::Clubs => self.clubs = length,
        }
    }

    /// Suit lengths, longest first (e.g. `[5, 3, 3, 2]`).
    pub fn sorted_lengths(&self) -> [u8; 4] {
        let mut d = [self.spades, self.hearts, self.diamonds, self.clubs];
        d.sort_by(|a, b| b.cmp(a));
        d
    }
}

/// The set of shapes a partnership treats as balanced for notrump bidding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancedShapes {
    patterns: Vec<[u8; 4]>,
}

impl Default for BalancedShapes {
    fn default() -> Self {
        Self {
            patterns: vec![[4, 3, 3, 3], [4, 4, 3, 2], [5, 3, 3, 2]],
        }
    }
}

impl BalancedShapes {
    pub fn with_5422(include: bool) -> Self {
        let mut shapes = Self::default();
        if include {
            shapes.patterns.push([5, 4, 2, 2]);
        }
        shapes
    }

    pub fn contains(&self, distribution: &Distribution) -> bool {
        let lengths = distribution.sorted_lengths();
        self.patterns.iter().any(|p| *p == lengths)
    }
}

/// A complete 13-card hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != 13 {
            return Err(HandError::WrongCardCount(cards.len()));
        }
        let mut seen = HashSet::with_capacity(13);
        for card in &cards {
            if !seen.insert(*card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }
        let mut hand = Self { cards };
        hand.sort();
        Ok(hand)
    }

    /// Parse a hand string in the format "Clubs.Diamonds.Hearts.Spades".
    pub fn parse(s: &str) -> Result<Self, HandError> {
        crate::io::hand_parser::parse_hand(s)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    pub fn has_card(&self, suit: Suit, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.suit == suit && c.rank == rank)
    }

    pub fn aces(&self) -> u8 {
        self.cards.iter().filter(|c| c.rank == Rank::Ace).count() as u8
    }

    pub fn distribution(&self) -> Distribution {
        Distribution {
            spades: self.length(Suit::Spades),
            hearts: self.length(Suit::Hearts),
            diamonds: self.length(Suit::Diamonds),
            clubs: self.length(Suit::Clubs),
        }
    }

    fn sort(&mut self) {
        // Spades first, high cards first within a suit.
        self.cards
            .sort_by(|a, b| b.suit.cmp(&a.suit).then(b.rank.cmp(&a.rank)));
    }

    /// Distributional points as shown to the player. Bidding decisions only
    /// ever use the shortness count through `support_points`.
    pub fn distribution_points(&self, mode: DistributionMode) -> u8 {
        match mode {
            DistributionMode::Shortness => Suit::ALL
                .iter()
                .map(|&s| shortness_points(self.length(s)))
                .sum(),
            DistributionMode::Length => Suit::ALL
                .iter()
                .map(|&s| self.length(s).saturating_sub(4))
                .sum(),
        }
    }

    /// Dummy points: HCP plus shortness outside the trump suit.
    pub fn support_points(&self, trump: Suit) -> u8 {
        let shortness: u8 = Suit::ALL
            .iter()
            .filter(|&&s| s != trump)
            .map(|&s| shortness_points(self.length(s)))
            .sum();
        self.hcp() + shortness
    }

    /// Returns the shape classification of this hand
    pub fn shape(&self) -> Shape {
        let sorted_lengths = self.distribution().sorted_lengths();

        let longest = sorted_lengths[0];
        let doubleton_count = sorted_lengths.iter().filter(|&&l| l == 2).count();
        let singleton_count = sorted_lengths.iter().filter(|&&l| l == 1).count();
        let void_count = sorted_lengths.iter().filter(|&&l| l == 0).count();

        if singleton_count == 0 && void_count == 0 && doubleton_count <= 1 {
            Shape::Balanced
        } else if longest <= 6 && void_count == 0 && (singleton_count == 1 || doubleton_count == 2)
        {
            Shape::SemiBalanced
        } else {
            Shape::Unbalanced
        }
    }

    /// Returns true if the hand is balanced (4-3-3-3, 4-4-3-2, 5-3-3-2)
    pub fn is_balanced(&self) -> bool {
        matches!(self.shape(), Shape::Balanced)
    }

    /// Balanced according to the partnership's accepted shapes.
    pub fn is_balanced_for(&self, shapes: &BalancedShapes) -> bool {
        shapes.contains(&self.distribution())
    }

    /// Returns true if the hand is semi-balanced (5-4-2-2, 6-3-2-2, etc.)
    pub fn is_semi_balanced(&self) -> bool {
        matches!(self.shape(), Shape::SemiBalanced)
    }

    /// A stopper is the ace, the king with at least one guard, or the queen
    /// with the jack or ten and at least two guards.
    pub fn has_stopper(&self, suit: Suit) -> bool {
        let len = self.length(suit);
        let has = |rank| self.has_card(suit, rank);
        has(Rank::Ace)
            || (has(Rank::King) && len >= 2)
            || (has(Rank::Queen) && (has(Rank::Jack) || has(Rank::Ten)) && len >= 3)
    }

    /// Returns the longest suit in the hand (the lowest-ranking one on ties).
    pub fn longest_suit(&self) -> Suit {
        let mut max_len = 0;
        let mut longest = Suit::Clubs;

        for suit in Suit::ALL {
            let len = self.length(suit);
            if len > max_len {
                max_len = len;
                longest = suit;
            }
        }

        longest
    }

    /// Count how many of the top N honors (A, K, Q, J, T) the hand holds in a suit.
    ///
    /// `top_honors(suit, 3)` counts honors among {A, K, Q}.
    /// `top_honors(suit, 5)` counts honors among {A, K, Q, J, T}.
    pub fn top_honors(&self, suit: Suit, n: u8) -> u8 {
        const HONOR_RANKS: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
        let top_n = &HONOR_RANKS[..(n as usize).min(HONOR_RANKS.len())];
        self.cards
            .iter()
            .filter(|c| c.suit == suit && top_n.contains(&c.rank))
            .count() as u8
    }

    /// Returns all suits that are tied for the longest length
    pub fn longest_suits(&self) -> Vec<Suit> {
        let max_len = Suit::ALL.iter().map(|&s| self.length(s)).max().unwrap_or(0);
        Suit::ALL
            .into_iter()
            .filter(|&s| self.length(s) == max_len)
            .collect()
    }
}

fn shortness_points(length: u8) -> u8 {
    match length {
        0 => 3,
        1 => 2,
        2 => 1,
        _ => 0,
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suits: Vec<String> = Suit::ALL
            .iter()
            .map(|&suit| {
                Rank::DESCENDING
                    .iter()
                    .filter(|&&rank| self.has_card(suit, rank))
                    .map(|rank| rank.to_char())
                    .collect()
            })
            .collect();
        write!(f, "{}", suits.join("."))
    }
}
