use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends Hand with the ability to remove random cards from itself.
///
/// A deck is just the set of cards that are not known to be anywhere else.
/// Drawing is uniform over what remains and never repeats a card.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::full())
    }
    /// every card not in `known`
    pub fn without(known: Hand) -> Self {
        Self(known.complement())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
    /// remove a random card from the deck, None once exhausted
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        let n = self.0.size();
        if n == 0 {
            return None;
        }
        let mut bits = u64::from(self.0);
        for _ in 0..rng.random_range(0..n) {
            bits &= bits - 1;
        }
        let card = Card::try_from(bits.trailing_zeros() as u8).ok()?;
        self.remove(card);
        Some(card)
    }
    /// remove `n` random cards as a Hand, None if fewer than `n` remain
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Option<Hand> {
        if self.size() < n {
            return None;
        }
        (0..n)
            .map(|_| self.draw(rng))
            .try_fold(Hand::empty(), |hand, card| card.map(|c| Hand::add(hand, Hand::from(c))))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
