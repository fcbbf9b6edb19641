//! Forgiving conversions between observed tokens and cards.
//!
//! Screen readers hand us tokens like `"ah"`, `"10s"` or garbage. Nothing in
//! here fails on bad input: malformed tokens are dropped and duplicates are
//! collapsed, keeping the order in which cards were first seen.
use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// Parses one token. `None` for anything that is not a card.
pub fn normalize_card(token: &str) -> Option<Card> {
    Card::try_from(token)
        .inspect_err(|e| log::debug!("dropping card token: {}", e))
        .ok()
}

/// Parses tokens into an ordered set: invalid entries are skipped and
/// repeats keep their first position.
pub fn normalize_cards<S: AsRef<str>>(tokens: &[S]) -> Vec<Card> {
    dedup(tokens.iter().filter_map(|t| normalize_card(t.as_ref())))
}

/// Unions any number of dead-card sources into one ordered set.
pub fn merge_dead_cards(sources: &[&[Card]]) -> Vec<Card> {
    dedup(sources.iter().flat_map(|cards| cards.iter().copied()))
}

/// Street implied by the visible board.
pub fn street_from_board(board: &[Card]) -> Street {
    Street::from_board(board.len())
}

/// Position of the card in a sorted deck, `0..52`.
pub fn card_to_index(card: Card) -> usize {
    u8::from(card) as usize
}

/// Inverse of [`card_to_index`].
pub fn index_to_card(index: usize) -> anyhow::Result<Card> {
    u8::try_from(index)
        .map_err(|_| format!("card index out of range: {}", index))
        .and_then(Card::try_from)
        .map_err(anyhow::Error::msg)
}

fn dedup(cards: impl Iterator<Item = Card>) -> Vec<Card> {
    let mut seen = Hand::empty();
    cards
        .filter(|card| {
            let fresh = !seen.contains(card);
            seen.insert(*card);
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for index in 0..52 {
            let card = index_to_card(index).unwrap();
            assert_eq!(card_to_index(card), index);
            assert_eq!(index_to_card(card_to_index(card)).unwrap(), card);
        }
    }

    #[test]
    fn index_out_of_range() {
        assert!(index_to_card(52).is_err());
        assert!(index_to_card(usize::MAX).is_err());
    }

    #[test]
    fn normalizes_tokens() {
        assert_eq!(normalize_card("10s").map(|c| c.to_string()), Some("Ts".into()));
        assert_eq!(normalize_card("aH").map(|c| c.to_string()), Some("Ah".into()));
        assert_eq!(normalize_card("Ahh"), None);
        assert_eq!(normalize_card("Zz"), None);
        assert_eq!(normalize_card(""), None);
    }

    #[test]
    fn filters_and_dedups_in_order() {
        let cards = normalize_cards(&["Kd", "junk", "Ah", "kd", "10c", "Tc"]);
        let cards = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(cards, vec!["Kd", "Ah", "Tc"]);
    }

    #[test]
    fn merges_dead_sources() {
        let a = normalize_cards(&["2c", "3d"]);
        let b = normalize_cards(&["3d", "4h"]);
        let merged = merge_dead_cards(&[a.as_slice(), b.as_slice(), &[]]);
        assert_eq!(merged, normalize_cards(&["2c", "3d", "4h"]));
    }

    #[test]
    fn street_by_board_size() {
        assert_eq!(street_from_board(&[]), Street::Pref);
        assert_eq!(street_from_board(&normalize_cards(&["2c", "3d", "4h"])), Street::Flop);
        assert_eq!(street_from_board(&normalize_cards(&["2c", "3d", "4h", "5s"])), Street::Turn);
        assert_eq!(street_from_board(&normalize_cards(&["2c", "3d", "4h", "5s", "6s"])), Street::Rive);
    }
}
