use crate::card::{Card, Rank, Suit};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;

/// Number of cards in a single standard deck.
pub const CARDS_PER_DECK: usize = 52;

/// A shoe made of one or more standard decks. Cards are dealt from the front.
pub struct Deck {
    cards: VecDeque<Card>,
    num_decks: usize,
    shuffle_threshold: usize,
    rng: StdRng,
}

impl Deck {
    /// Associated function to create a new shuffled shoe of `num_decks` standard decks.
    /// If `seed` is given the shuffles are reproducible, otherwise the generator is seeded from entropy.
    /// A shoe always holds at least one deck.
    pub fn new(num_decks: usize, seed: Option<u64>) -> Deck {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut deck = Deck {
            cards: VecDeque::new(),
            num_decks: num_decks.max(1),
            shuffle_threshold: 0,
            rng,
        };
        deck.rebuild();
        deck
    }

    /// Associated function to create a deck that deals `cards` in the given order.
    /// The reshuffle threshold is taken from the size of the stacked deck, once the deck is
    /// rebuilt it becomes a regular shuffled shoe of `num_decks` decks.
    pub fn stacked(num_decks: usize, cards: Vec<Card>) -> Deck {
        let shuffle_threshold = cards.len() / 4;
        Deck {
            cards: cards.into(),
            num_decks: num_decks.max(1),
            shuffle_threshold,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Method that throws away the remaining cards, builds a full shoe and shuffles it.
    pub fn rebuild(&mut self) {
        let mut cards = Vec::with_capacity(self.num_decks * CARDS_PER_DECK);
        for _ in 0..self.num_decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards.shuffle(&mut self.rng);
        self.shuffle_threshold = cards.len() / 4;
        self.cards = cards.into();
        info!(
            "rebuilt shoe of {} deck(s), {} cards",
            self.num_decks,
            self.cards.len()
        );
    }

    /// Returns true when a quarter or less of the shoe remains.
    pub fn needs_shuffle(&self) -> bool {
        self.cards.len() <= self.shuffle_threshold
    }

    /// Deals the next card from the front of the shoe.
    pub fn get_next_card(&mut self) -> Card {
        if self.cards.is_empty() {
            warn!("shoe ran out of cards in the middle of a round, rebuilding");
            self.rebuild();
        }
        match self.cards.pop_front() {
            Some(card) => card,
            None => unreachable!("a rebuilt shoe always holds at least one deck"),
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    pub fn shuffle_threshold(&self) -> usize {
        self.shuffle_threshold
    }
}
