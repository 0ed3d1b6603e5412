use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered, owned sequence of distinct cards.
///
/// Cards leave the deck from the front via [`Deck::deal`], which is
/// irreversible. [`Deck::new`] is sorted; call [`Deck::shuffle`] (or build
/// with [`Deck::shuffled`]) before dealing a real hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh, sorted 52-card deck.
    pub fn new() -> Self {
        Self(Card::all().collect())
    }
    /// Creates a fresh 52-card deck in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }
    /// Creates a sorted deck holding every card not in `known`.
    pub fn without(known: Hand) -> Self {
        Self(known.complement().collect())
    }
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes and returns the first `n` cards.
    ///
    /// # Panics
    ///
    /// If `n` exceeds the remaining cards. Running a deck dry is a caller bug.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(
            n <= self.0.len(),
            "not enough cards in the deck to deal {} (have {})",
            n,
            self.0.len()
        );
        self.0.drain(..n).collect()
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Hole {
        match self.deal(2).as_slice() {
            [a, b] => Hole::from((*a, *b)),
            _ => unreachable!("deal(2) yields two cards"),
        }
    }
}
