/// The ten hand categories, weakest to strongest.
///
/// The discriminant is the category's ordinal, so `Ord` and [`Category::ordinal`]
/// always agree. Kickers are tracked separately in [`Kickers`].
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOAK = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOAK = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const fn all() -> [Self; 10] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOAK,
            Self::StraightFlush,
            Self::RoyalFlush,
        ]
    }
    /// 1 for High Card through 10 for Royal Flush.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOAK => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOAK => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
