use super::card::Card;
use super::street::Street;

/// The community cards. Append-only within a hand, cleared between hands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
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
    pub fn street(&self) -> Street {
        match self.0.len() {
            0..=2 => Street::Pref,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::Rive,
        }
    }
    pub fn extend(&mut self, cards: Vec<Card>) {
        assert!(self.0.len() + cards.len() <= 5, "board holds at most 5 cards");
        self.0.extend(cards);
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}  ", card)?;
        }
        Ok(())
    }
}
