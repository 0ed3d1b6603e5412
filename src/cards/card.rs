use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52` for array indexing
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards parse from strings like `"As"` (ace of spades), `"Tc"` or `"10C"`
/// (ten of clubs). Use [`Card::parse`] for whitespace-separated lists.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// All 52 cards in encoding order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..52u8).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
/// the suit is always the last character, the rank is everything before it
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|&i| i > 0)
            .ok_or_else(|| anyhow::anyhow!("card needs a rank and a suit: {:?}", s))?;
        let rank = Rank::try_from(&s[..split])?;
        let suit = Suit::try_from(&s[split..])?;
        Ok(Card::from((rank, suit)))
    }
}

impl Card {
    /// Parses a whitespace-separated list of cards, e.g. `"AS KS QS JS 10S"`.
    pub fn parse(s: &str) -> anyhow::Result<Vec<Self>> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<anyhow::Result<Vec<Self>>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn parses_both_notations() {
        let a = Card::try_from("10S").unwrap();
        let b = Card::try_from("Ts").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rank(), Rank::Ten);
        assert_eq!(a.suit(), Suit::Spade);
        assert_eq!(a.to_string(), "Ts");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("Ax").is_err());
        assert!(Card::try_from("1s").is_err());
    }

    #[test]
    fn ordered_by_rank_first() {
        let two = Card::try_from("2s").unwrap();
        let ace = Card::try_from("Ac").unwrap();
        assert!(two < ace);
    }

    #[test]
    fn parse_list() {
        let cards = Card::parse("AS KS QS JS 10S").unwrap();
        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(|c| c.suit() == Suit::Spade));
    }
}
