use super::category::Category;
use super::kicks::Kickers;

/// A hand's strength.
///
/// The category decides first and the kickers break ties, so the derived
/// `Ord` is exactly the lexicographic (category, tiebreaker) comparison.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Strength {
    category: Category,
    kickers: Kickers,
}

impl Strength {
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
}

impl From<(Category, Kickers)> for Strength {
    fn from((category, kickers): (Category, Kickers)) -> Self {
        Self { category, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}{}", self.category, self.kickers)
    }
}
