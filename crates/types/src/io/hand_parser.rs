use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;
use crate::rank::Rank;
use crate::suit::Suit;

/// Parses a hand string in the format "Clubs.Diamonds.Hearts.Spades".
///
/// Suits appear in ascending order of rank (C, D, H, S). The result must be
/// a complete 13-card hand.
pub fn parse_hand(s: &str) -> Result<Hand, HandError> {
    let suits: Vec<&str> = s.trim().split('.').collect();
    if suits.len() != 4 {
        return Err(HandError::MalformedSuits(s.to_string()));
    }
    let mut cards = Vec::with_capacity(13);
    for (suit, suit_str) in Suit::ALL.into_iter().zip(suits) {
        for c in suit_str.chars().filter(|c| !c.is_whitespace()) {
            let rank = Rank::from_char(c).ok_or_else(|| HandError::InvalidRank {
                rank: c,
                text: s.to_string(),
            })?;
            cards.push(Card { suit, rank });
        }
    }
    Hand::new(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_hand() {
        let hand = parse_hand("AK2.QJ3.T987.654").unwrap();
        assert_eq!(hand.cards().len(), 13);
        assert_eq!(hand.length(Suit::Clubs), 3);
        assert_eq!(hand.length(Suit::Hearts), 4);
    }

    #[test]
    fn test_parse_rejects_short_hand() {
        assert_eq!(
            parse_hand("AK.QJ.T9.65"),
            Err(HandError::WrongCardCount(8))
        );
    }

    #[test]
    fn test_parse_rejects_missing_suit() {
        assert!(matches!(
            parse_hand("AKQJT98765432.."),
            Err(HandError::MalformedSuits(_))
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_card() {
        assert!(matches!(
            parse_hand("AA2.QJ3.T987.654"),
            Err(HandError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_rank() {
        assert!(matches!(
            parse_hand("AKZ.QJ3.T987.6543"),
            Err(HandError::InvalidRank { rank: 'Z', .. })
        ));
    }
}
