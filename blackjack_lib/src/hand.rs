use crate::card::Card;
use std::fmt::Display;

/// Computes the value of a hand of blackjack.
///
/// Every ace is first counted as 1. If the hand holds at least one ace and counting one of them
/// as 11 does not take the total past 21, 10 is added exactly once. The returned total may be
/// greater than 21, in which case the hand is busted.
pub fn sum_cards(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut ace = false;
    for card in cards {
        total += card.val();
        ace |= card.is_ace();
    }
    if ace && total + 10 <= 21 {
        total += 10;
    }
    total
}

/// Check if a hand is a natural blackjack, i.e. exactly two cards totaling 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && sum_cards(cards) == 21
}

/// Check if a hand is busted.
pub fn is_busted(cards: &[Card]) -> bool {
    sum_cards(cards) > 21
}

/// Check if two cards form a pair that may be split. Only equal ranks count, a ten and a king
/// have the same value but are not a pair.
pub fn can_split_cards(card1: &Card, card2: &Card) -> bool {
    card1.rank == card2.rank
}

/// An ordered hand of cards. The total is never cached, it is recomputed from the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Hand {
        Hand { cards }
    }

    /// Method for receiving a card, the card is placed at the end of the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the first card of the hand, used when splitting a pair.
    pub(crate) fn take_first(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    pub fn value(&self) -> u8 {
        sum_cards(&self.cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    /// Returns true if the hand is exactly two cards of equal rank.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && can_split_cards(&self.cards[0], &self.cards[1])
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "[{}] ({})", cards, self.value())
    }
}
