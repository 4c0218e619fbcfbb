use crate::card::Card;
use crate::hand::{is_natural, Hand};
use crate::money::Money;
use log::debug;
use std::collections::{BTreeSet, HashSet};
use std::fmt::Display;

/// The options a player may choose from while playing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerAction {
    Hit,
    Stand,
    DoubleDown,
    Split,
    Quit,
}

impl PlayerAction {
    /// The key a player types to choose this option.
    pub fn key(&self) -> char {
        match self {
            PlayerAction::Hit => 'H',
            PlayerAction::Stand => 'S',
            PlayerAction::DoubleDown => 'D',
            PlayerAction::Split => 'Y',
            PlayerAction::Quit => 'Q',
        }
    }

    /// Returns the action bound to `key`, case insensitive.
    pub fn from_key(key: char) -> Option<PlayerAction> {
        match key.to_ascii_uppercase() {
            'H' => Some(PlayerAction::Hit),
            'S' => Some(PlayerAction::Stand),
            'D' => Some(PlayerAction::DoubleDown),
            'Y' => Some(PlayerAction::Split),
            'Q' => Some(PlayerAction::Quit),
            _ => None,
        }
    }
}

impl Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PlayerAction::Hit => "hit",
            PlayerAction::Stand => "stand",
            PlayerAction::DoubleDown => "double down",
            PlayerAction::Split => "split",
            PlayerAction::Quit => "quit",
        };
        write!(f, "{}", label)
    }
}

/// Where a single player hand is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    Active,
    Blackjack,
    Bust,
    Stood,
}

impl HandStatus {
    pub fn is_final(&self) -> bool {
        *self != HandStatus::Active
    }
}

/// One of the player's hands together with its bookkeeping.
#[derive(Debug, Clone)]
pub struct PlayerHand {
    pub hand: Hand,
    status: HandStatus,
    fresh: bool,
    wager: Option<u32>,
}

impl PlayerHand {
    fn new(hand: Hand, fresh: bool) -> PlayerHand {
        PlayerHand {
            hand,
            status: HandStatus::Active,
            fresh,
            wager: None,
        }
    }

    pub fn status(&self) -> HandStatus {
        self.status
    }

    /// A fresh hand holds the two dealt cards and has neither been hit nor split.
    pub fn is_fresh(&self) -> bool {
        self.fresh && self.hand.len() == 2
    }

    /// The wager recorded when the hand was finalised, if it has been.
    pub fn wager(&self) -> Option<u32> {
        self.wager
    }

    fn finalize(&mut self, status: HandStatus, bet: u32) {
        self.status = status;
        self.wager = Some(bet);
    }
}

/// Returns the bet after doubling or splitting. The bet doubles but never grows past the
/// player's balance.
pub fn raise_bet(bet: u32, balance: Money) -> u32 {
    let cap = balance.whole_units().clamp(0, u32::MAX as i64) as u32;
    u32::max(bet, u32::min(bet.saturating_mul(2), cap))
}

/// The state of a single round: the dealer's hand, the player's hands, the shared bet and the
/// hands that made a natural blackjack.
///
/// The player's hands form a work queue. `hand_idx` points at the hand currently being played,
/// splitting appends a new hand at the end, so hands created by a split are visited after every
/// hand that already existed.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub dealers_hand: Hand,
    hands: Vec<PlayerHand>,
    bet: u32,
    blackjacks: HashSet<usize>,
    hand_idx: usize,
}

impl RoundState {
    /// Associated function to create the state of a round after the initial deal.
    pub fn new(players_hand: Hand, dealers_hand: Hand, bet: u32) -> RoundState {
        RoundState {
            dealers_hand,
            hands: vec![PlayerHand::new(players_hand, true)],
            bet,
            blackjacks: HashSet::new(),
            hand_idx: 0,
        }
    }

    /// Getter method for the shared bet of the round.
    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn hands(&self) -> &[PlayerHand] {
        &self.hands
    }

    /// Indices of the hands that made a natural blackjack.
    pub fn blackjacks(&self) -> &HashSet<usize> {
        &self.blackjacks
    }

    /// Index of the hand currently being played, `None` once every hand is finished.
    pub fn current_index(&self) -> Option<usize> {
        if self.hand_idx < self.hands.len() {
            Some(self.hand_idx)
        } else {
            None
        }
    }

    pub fn current_hand(&self) -> Option<&PlayerHand> {
        self.hands.get(self.hand_idx)
    }

    /// Method for determining whether or not the players turn is over
    pub fn turn_is_over(&self) -> bool {
        self.hand_idx >= self.hands.len()
    }

    pub fn dealer_has_blackjack(&self) -> bool {
        is_natural(self.dealers_hand.cards())
    }

    /// Returns true if at least one player hand stood and still has to be compared against a
    /// dealer hand that has been played out.
    pub fn has_live_hand(&self) -> bool {
        self.hands.iter().any(|h| h.status == HandStatus::Stood)
    }

    /// Checks the current hand for a bust, a natural or a total of 21 and finalises it if needed.
    /// Returns true if the hand was finalised and the turn moved on to the next hand.
    pub fn resolve_current_hand(&mut self) -> bool {
        let idx = self.hand_idx;
        let bet = self.bet;
        let Some(player_hand) = self.hands.get_mut(idx) else {
            return false;
        };
        let status = if player_hand.hand.is_busted() {
            HandStatus::Bust
        } else if player_hand.hand.is_natural() {
            self.blackjacks.insert(idx);
            HandStatus::Blackjack
        } else if player_hand.hand.value() == 21 {
            HandStatus::Stood
        } else {
            return false;
        };
        debug!("hand {} finalised as {:?}", idx, status);
        player_hand.finalize(status, bet);
        self.hand_idx += 1;
        true
    }

    /// Public method for producing the options the player may choose to play the current hand.
    /// Hit, stand and quit are always available, double down only on a fresh hand when the balance
    /// leaves room to raise the bet, split only on a fresh pair.
    pub fn playing_options(&self, balance: Money) -> BTreeSet<PlayerAction> {
        let mut options = BTreeSet::new();
        options.insert(PlayerAction::Hit);
        options.insert(PlayerAction::Stand);
        options.insert(PlayerAction::Quit);
        if let Some(current) = self.current_hand() {
            if current.is_fresh() && raise_bet(self.bet, balance) > self.bet {
                options.insert(PlayerAction::DoubleDown);
            }
            if current.is_fresh() && current.hand.is_pair() {
                options.insert(PlayerAction::Split);
            }
        }
        options
    }

    /// Deals `card` to the current hand. Any card after the initial deal makes the hand stale.
    pub fn receive_card(&mut self, card: Card) {
        if let Some(current) = self.hands.get_mut(self.hand_idx) {
            current.hand.receive_card(card);
            current.fresh = false;
        }
    }

    /// Method to stand on the current hand, moving the turn on to the next hand.
    pub fn stand(&mut self) {
        let bet = self.bet;
        if let Some(current) = self.hands.get_mut(self.hand_idx) {
            current.finalize(HandStatus::Stood, bet);
            self.hand_idx += 1;
        }
    }

    /// Method that implements the wager side of doubling down, returns the new bet.
    pub fn double_down(&mut self, balance: Money) -> u32 {
        self.bet = raise_bet(self.bet, balance);
        self.bet
    }

    /// Method that implements the logic for splitting. The first card of the current hand moves
    /// into a new hand appended after every pending hand, both hands are left with one card.
    /// Returns the new bet.
    pub fn split(&mut self, balance: Money) -> u32 {
        self.bet = raise_bet(self.bet, balance);
        if let Some(current) = self.hands.get_mut(self.hand_idx) {
            if let Some(card) = current.hand.take_first() {
                current.fresh = false;
                self.hands
                    .push(PlayerHand::new(Hand::from_cards(vec![card]), false));
            }
        }
        self.bet
    }

    /// Finalises every hand that is still active, used when the dealer's natural ends the
    /// player's turn early.
    pub fn close_remaining(&mut self) {
        while !self.turn_is_over() {
            self.stand();
        }
    }
}
