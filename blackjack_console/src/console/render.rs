use blackjack_lib::{Card, TableView};

/// Renders `cards` side by side as ASCII art. When `hide_first` is true the first card is drawn
/// face down.
pub fn render_cards(cards: &[Card], hide_first: bool) -> String {
    let mut rows: [String; 5] = Default::default();
    for (i, card) in cards.iter().enumerate() {
        let (value, suit) = if hide_first && i == 0 {
            (" ".to_string(), " ")
        } else {
            (card.rank.label().to_string(), card.suit.symbol())
        };
        rows[0].push_str(" -----   ");
        rows[1].push_str(&format!("|{0}   {0}|  ", suit));
        rows[2].push_str(&format!("| {:>2}  |  ", value));
        rows[3].push_str(&format!("|{0}   {0}|  ", suit));
        rows[4].push_str(" -----   ");
    }
    rows.iter()
        .map(|r| r.trim_end().to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Renders the dealer's cards above the player's hand, with their totals.
pub fn render_table(view: &TableView<'_>) -> String {
    let dealer_total = match view.dealer_total {
        Some(total) => total.to_string(),
        None => "?".to_string(),
    };
    let hand_label = if view.hand_count > 1 {
        format!(" - hand {} of {}", view.hand_index + 1, view.hand_count)
    } else {
        String::new()
    };
    format!(
        "Dealer Cards ({})\n{}\nPlayer Cards{} ({}), bet {}\n{}",
        dealer_total,
        render_cards(view.dealers_cards, view.hide_hole_card),
        hand_label,
        view.player_total,
        view.bet,
        render_cards(view.players_cards, false),
    )
}
