use crate::deck::Deck;
use crate::hand::Hand;
use crate::money::Money;
use crate::player::{PlayerAction, RoundState};
use crate::prompt::{ActionPrompt, TableDisplay, TableView};
use crate::settlement::RoundReport;
use crate::BlackjackGameError;
use log::{debug, info};

/// The dealer stands on any total of at least this much.
pub const DEALER_STANDS_ON: u8 = 17;

/// How a round ended.
#[derive(Debug, Clone)]
pub enum RoundResult {
    Settled(RoundReport),
    /// The player quit in the middle of the round, nothing was settled.
    Quit,
}

/// Struct for the blackjack table. The table owns the shoe and runs a round from the deal to
/// the settlement.
pub struct BlackjackTable {
    deck: Deck,
}

impl BlackjackTable {
    pub fn new(deck: Deck) -> BlackjackTable {
        BlackjackTable { deck }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rebuilds and reshuffles the shoe when a quarter or less of it remains.
    /// Returns true if the shoe was reshuffled.
    pub fn prepare_deck(&mut self) -> bool {
        if self.deck.needs_shuffle() {
            info!(
                "{} cards left, at or below the threshold of {}, shuffling",
                self.deck.remaining(),
                self.deck.shuffle_threshold()
            );
            self.deck.rebuild();
            true
        } else {
            false
        }
    }

    /// Deals two cards to the player and then two cards to the dealer.
    pub fn deal_hand(&mut self, bet: u32) -> RoundState {
        let mut players_hand = Hand::new();
        let mut dealers_hand = Hand::new();
        for _ in 0..2 {
            players_hand.receive_card(self.deck.get_next_card());
        }
        for _ in 0..2 {
            dealers_hand.receive_card(self.deck.get_next_card());
        }
        debug!("dealt player {}, dealer {}", players_hand, dealers_hand);
        RoundState::new(players_hand, dealers_hand, bet)
    }

    /// Deals another card to the current hand.
    fn hit(&mut self, round: &mut RoundState) {
        let card = self.deck.get_next_card();
        debug!("hit: {}", card);
        round.receive_card(card);
    }

    /// Method for implementing the logic needed to double down: the bet is raised, exactly one
    /// card is dealt and the hand is finished.
    fn double_down(&mut self, round: &mut RoundState, balance: Money) {
        round.double_down(balance);
        self.hit(round);
        if !round.resolve_current_hand() {
            round.stand();
        }
    }

    /// Takes the round, the chosen `option` and the player's balance and plays the option on the
    /// current hand. An option that is not available for the current hand is returned as an error
    /// and nothing changes.
    pub fn play_option(
        &mut self,
        round: &mut RoundState,
        option: PlayerAction,
        balance: Money,
    ) -> Result<(), BlackjackGameError> {
        if round.turn_is_over() || !round.playing_options(balance).contains(&option) {
            return Err(BlackjackGameError::OptionUnavailable(option));
        }
        debug!("playing {} on hand {:?}", option, round.current_index());
        match option {
            PlayerAction::Hit => self.hit(round),
            PlayerAction::Stand => round.stand(),
            PlayerAction::DoubleDown => self.double_down(round, balance),
            PlayerAction::Split => {
                round.split(balance);
            }
            PlayerAction::Quit => {}
        }
        Ok(())
    }

    /// Plays the dealer's hand: the dealer hits on 16 or less and stands on 17 or more.
    /// The dealer only draws when a player hand is left standing and the dealer has no natural.
    pub fn play_dealer_hand(&mut self, round: &mut RoundState) {
        if round.dealer_has_blackjack() || !round.has_live_hand() {
            return;
        }
        while round.dealers_hand.value() < DEALER_STANDS_ON {
            let card = self.deck.get_next_card();
            debug!("dealer draws {}", card);
            round.dealers_hand.receive_card(card);
        }
    }

    /// Method for finishing the round and deciding which hands win or lose.
    pub fn finish_hand(&mut self, round: &mut RoundState) -> RoundReport {
        self.play_dealer_hand(round);
        RoundReport::from_round(round)
    }

    /// Plays a complete round for `bet`.
    ///
    /// The player's hands are played in order, including the hands created by splitting, which
    /// are visited after every hand that existed before them. A dealer natural ends the player's
    /// turn once the current hand has been checked for a natural of its own. Invalid input is reported to `display` and the same hand is asked again.
    pub fn play_round<A, D>(
        &mut self,
        bet: u32,
        balance: Money,
        input: &mut A,
        display: &mut D,
    ) -> Result<RoundResult, BlackjackGameError>
    where
        A: ActionPrompt + ?Sized,
        D: TableDisplay + ?Sized,
    {
        let mut round = self.deal_hand(bet);

        while !round.turn_is_over() {
            if round.resolve_current_hand() {
                continue;
            }
            if round.dealer_has_blackjack() {
                debug!("dealer has a natural, ending the player's turn");
                round.close_remaining();
                break;
            }

            let options = round.playing_options(balance);
            let choice = {
                let view = player_view(&round, true);
                display.show_table(&view);
                input.decide_option(&view, &options)
            };
            let option = match choice {
                Ok(option) if options.contains(&option) => option,
                Ok(option) => {
                    display.show_error(&BlackjackGameError::OptionUnavailable(option));
                    continue;
                }
                Err(e) if e.is_recoverable() => {
                    display.show_error(&e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            if option == PlayerAction::Quit {
                info!("player quit in the middle of the round");
                return Ok(RoundResult::Quit);
            }
            self.play_option(&mut round, option, balance)?;
            if matches!(option, PlayerAction::DoubleDown | PlayerAction::Split) {
                display.show_bet_raised(option, round.bet());
            }
        }

        let report = self.finish_hand(&mut round);
        let dealer_total = report.dealers_hand.value();
        for settlement in report.settlements.iter() {
            display.show_table(&TableView {
                dealers_cards: report.dealers_hand.cards(),
                hide_hole_card: false,
                dealer_total: Some(dealer_total),
                players_cards: settlement.players_hand.cards(),
                player_total: settlement.players_hand.value(),
                hand_index: settlement.hand_index,
                hand_count: report.settlements.len(),
                bet: settlement.wager,
            });
            display.show_settlement(settlement, dealer_total);
        }
        info!(
            "round settled: dealer {}, net {}",
            report.dealers_hand,
            report.net()
        );
        Ok(RoundResult::Settled(report))
    }
}

/// Builds the view of the table for the hand currently being played.
fn player_view(round: &RoundState, hide_hole_card: bool) -> TableView<'_> {
    let dealers_cards = round.dealers_hand.cards();
    let (players_cards, hand_index) = match (round.current_hand(), round.current_index()) {
        (Some(current), Some(idx)) => (current.hand.cards(), idx),
        _ => (&[][..], round.hands().len()),
    };
    TableView {
        dealers_cards,
        hide_hole_card,
        dealer_total: if hide_hole_card {
            None
        } else {
            Some(round.dealers_hand.value())
        },
        players_cards,
        player_total: crate::hand::sum_cards(players_cards),
        hand_index,
        hand_count: round.hands().len(),
        bet: round.bet(),
    }
}
