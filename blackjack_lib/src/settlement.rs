use crate::card::Card;
use crate::hand::{is_natural, sum_cards, Hand};
use crate::money::Money;
use crate::player::RoundState;
use std::fmt::Display;

/// How a single player hand ended against the dealer. The variants are listed in the order the
/// settlement rules are checked, the first rule that matches decides the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerBlackjack,
    DealerBlackjack,
    Push,
    DealerHigher,
    PlayerHigher,
}

impl Outcome {
    /// Settles a player hand against the dealer's final hand.
    pub fn settle(players_hand: &[Card], dealers_hand: &[Card]) -> Outcome {
        let player = sum_cards(players_hand);
        let dealer = sum_cards(dealers_hand);
        if player > 21 {
            Outcome::PlayerBust
        } else if dealer > 21 {
            Outcome::DealerBust
        } else if is_natural(players_hand) && dealer != 21 {
            Outcome::PlayerBlackjack
        } else if is_natural(dealers_hand) {
            Outcome::DealerBlackjack
        } else if player == dealer {
            Outcome::Push
        } else if player < dealer {
            Outcome::DealerHigher
        } else {
            Outcome::PlayerHigher
        }
    }

    /// The change to the player's balance for a hand played for `wager`.
    /// A natural pays 3 to 2, every other win pays even money.
    pub fn payout(&self, wager: u32) -> Money {
        let wager = Money::from(wager);
        match self {
            Outcome::PlayerBust | Outcome::DealerBlackjack | Outcome::DealerHigher => -wager,
            Outcome::DealerBust | Outcome::PlayerHigher => wager,
            Outcome::PlayerBlackjack => wager.scale(3, 2),
            Outcome::Push => Money::ZERO,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(
            self,
            Outcome::DealerBust | Outcome::PlayerBlackjack | Outcome::PlayerHigher
        )
    }

    pub fn is_loss(&self) -> bool {
        matches!(
            self,
            Outcome::PlayerBust | Outcome::DealerBlackjack | Outcome::DealerHigher
        )
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Outcome::PlayerBust => "You busted!",
            Outcome::DealerBust => "Dealer busted!",
            Outcome::PlayerBlackjack => "You got a blackjack!",
            Outcome::DealerBlackjack => "Dealer got a blackjack!",
            Outcome::Push => "Push - keep your bet.",
            Outcome::DealerHigher => "Dealer wins.",
            Outcome::PlayerHigher => "You win.",
        };
        write!(f, "{}", message)
    }
}

/// The settlement of a single player hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSettlement {
    pub hand_index: usize,
    pub players_hand: Hand,
    pub outcome: Outcome,
    pub wager: u32,
    pub amount: Money,
}

/// Everything that happened in a settled round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub settlements: Vec<HandSettlement>,
    pub dealers_hand: Hand,
    pub player_blackjacks: usize,
}

impl RoundReport {
    /// Settles every player hand of `round`, in the order the hands were created, against the
    /// dealer's hand. A hand that was never finalised is played for the round's current bet.
    pub fn from_round(round: &RoundState) -> RoundReport {
        let dealer = round.dealers_hand.cards();
        let settlements = round
            .hands()
            .iter()
            .enumerate()
            .map(|(i, player_hand)| {
                let outcome = Outcome::settle(player_hand.hand.cards(), dealer);
                let wager = player_hand.wager().unwrap_or(round.bet());
                HandSettlement {
                    hand_index: i,
                    players_hand: player_hand.hand.clone(),
                    outcome,
                    wager,
                    amount: outcome.payout(wager),
                }
            })
            .collect();
        RoundReport {
            settlements,
            dealers_hand: round.dealers_hand.clone(),
            player_blackjacks: round.blackjacks().len(),
        }
    }

    /// The total change to the player's balance over every hand of the round.
    pub fn net(&self) -> Money {
        self.settlements.iter().map(|s| s.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Diamonds)).collect()
    }

    fn settle(player: &[Rank], dealer: &[Rank]) -> Outcome {
        Outcome::settle(&cards(player), &cards(dealer))
    }

    #[test]
    fn player_bust_loses_even_if_dealer_busts() {
        let outcome = settle(
            &[Rank::Ten, Rank::Nine, Rank::Five],
            &[Rank::Ten, Rank::Six, Rank::King],
        );
        assert_eq!(outcome, Outcome::PlayerBust);
        assert_eq!(outcome.payout(10), -Money::from_units(10));
    }

    #[test]
    fn dealer_bust_pays_even_money() {
        let outcome = settle(&[Rank::Ten, Rank::Two], &[Rank::Ten, Rank::Six, Rank::King]);
        assert_eq!(outcome, Outcome::DealerBust);
        assert_eq!(outcome.payout(10), Money::from_units(10));
    }

    #[test]
    fn natural_pays_three_to_two() {
        let outcome = settle(&[Rank::Ace, Rank::King], &[Rank::Ten, Rank::Five]);
        assert_eq!(outcome, Outcome::PlayerBlackjack);
        assert_eq!(outcome.payout(10), Money::from_units(15));
        assert_eq!(outcome.payout(5), Money::from_cents(750));
    }

    #[test]
    fn natural_beats_dealer_twenty() {
        let outcome = settle(&[Rank::Ace, Rank::Queen], &[Rank::Ten, Rank::King]);
        assert_eq!(outcome, Outcome::PlayerBlackjack);
    }

    #[test]
    fn natural_pushes_dealer_three_card_twenty_one() {
        let outcome = settle(&[Rank::Ace, Rank::Queen], &[Rank::Ten, Rank::Five, Rank::Six]);
        assert_eq!(outcome, Outcome::Push);
        assert_eq!(outcome.payout(10), Money::from_units(0));
    }

    #[test]
    fn dealer_natural_beats_three_card_twenty_one() {
        let outcome = settle(&[Rank::Seven, Rank::Seven, Rank::Seven], &[Rank::Ace, Rank::Jack]);
        assert_eq!(outcome, Outcome::DealerBlackjack);
        assert_eq!(outcome.payout(10), -Money::from_units(10));
    }

    #[test]
    fn two_naturals_follow_rule_order() {
        let outcome = settle(&[Rank::Ace, Rank::King], &[Rank::Ace, Rank::Jack]);
        assert_eq!(outcome, Outcome::DealerBlackjack);
    }

    #[test]
    fn equal_totals_push() {
        let outcome = settle(&[Rank::Ten, Rank::Eight], &[Rank::Nine, Rank::Nine]);
        assert_eq!(outcome, Outcome::Push);
    }

    #[test]
    fn higher_total_wins() {
        assert_eq!(
            settle(&[Rank::Five, Rank::Six, Rank::Eight], &[Rank::Seven, Rank::Nine, Rank::Four]),
            Outcome::DealerHigher
        );
        assert_eq!(
            settle(&[Rank::Ten, Rank::Ten], &[Rank::Ten, Rank::Seven]),
            Outcome::PlayerHigher
        );
    }

    #[test]
    fn three_card_twenty_one_is_not_a_natural() {
        let outcome = settle(&[Rank::Seven, Rank::Seven, Rank::Seven], &[Rank::Ten, Rank::Nine]);
        assert_eq!(outcome, Outcome::PlayerHigher);
        assert_eq!(outcome.payout(10), Money::from_units(10));
    }
}
