use super::card::Card;
use super::hand::Hand;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
    pub fn is_pair(&self) -> bool {
        self.0[0].rank() == self.0[1].rank()
    }
    pub fn is_suited(&self) -> bool {
        self.0[0].suit() == self.0[1].suit()
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "hole cards must be distinct");
        Self([a, b])
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        Hand::from(hole.0.as_slice())
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = anyhow::Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] if a != b => Ok(Self([*a, *b])),
            [_, _] => Err(anyhow::anyhow!("hole cards must be distinct")),
            _ => Err(anyhow::anyhow!("hole needs exactly 2 cards, got {}", cards.len())),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}
