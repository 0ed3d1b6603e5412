use super::card::Card;
use super::category::Category;
use super::hole::Hole;
use super::kicks::Kickers;
use super::rank::Rank;
use super::strength::Strength;

/// 2 3 4 5 A
const WHEEL: u16 = 0b_1000000001111;
/// 5 4 3 2 A, the ace plays low. Grouping by count alone would lead with
/// the ace and put the wheel above a king-high straight, so it is special-cased
/// to rank as five-high.
const WHEEL_KICKERS: [Rank; 5] = [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];

/// Every 5-card index subset of 7 cards, in lexicographic order.
///
/// For 5 or 6 cards the subsets whose indices all fall below the card count
/// are exactly the C(5,5) = 1 and C(6,5) = 6 combinations.
pub const COMBINATIONS: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 5],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// Ranks exactly five cards.
///
/// Counts ranks into a histogram and checks suits once, then reads the
/// category off the count pattern. Precedence follows the standard ladder
/// from Royal Flush down to High Card.
pub struct Evaluator {
    counts: [u8; 13],
    ranks: u16,
    flush: bool,
}

impl From<&[Card; 5]> for Evaluator {
    fn from(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 13];
        for card in cards.iter() {
            counts[card.rank().index() as usize] += 1;
        }
        Self {
            counts,
            ranks: cards.iter().map(|c| u16::from(c.rank())).fold(0, |a, b| a | b),
            flush: cards.iter().all(|c| c.suit() == cards[0].suit()),
        }
    }
}

impl Evaluator {
    pub fn find_category(&self) -> Category {
        let straight = self.is_straight() || self.is_wheel();
        let royal = self.has(Rank::Ace) && self.has(Rank::Ten);
        match self.pattern() {
            _ if straight && self.flush && royal => Category::RoyalFlush,
            _ if straight && self.flush => Category::StraightFlush,
            [4, 1, ..] => Category::FourOAK,
            [3, 2, ..] => Category::FullHouse,
            _ if self.flush => Category::Flush,
            _ if straight => Category::Straight,
            [3, 1, 1, ..] => Category::ThreeOAK,
            [2, 2, 1, ..] => Category::TwoPair,
            [2, 1, 1, 1, ..] => Category::OnePair,
            _ => Category::HighCard,
        }
    }
    pub fn find_kickers(&self) -> Kickers {
        if self.is_wheel() {
            Kickers::from(WHEEL_KICKERS)
        } else {
            Kickers::from(self.counts)
        }
    }

    /// five distinct ranks spanning exactly four index positions
    fn is_straight(&self) -> bool {
        self.ranks.count_ones() == 5 && self.ranks >> self.ranks.trailing_zeros() == 0b11111
    }
    fn is_wheel(&self) -> bool {
        self.ranks == WHEEL
    }
    fn has(&self, rank: Rank) -> bool {
        self.ranks & u16::from(rank) != 0
    }
    /// occurrence counts, largest first, zero padded
    fn pattern(&self) -> [u8; 5] {
        let mut pattern = [0u8; 5];
        let mut i = 0;
        for n in (1..=5u8).rev() {
            for &count in self.counts.iter() {
                if count == n && i < pattern.len() {
                    pattern[i] = n;
                    i += 1;
                }
            }
        }
        pattern
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        Strength::from((evaluator.find_category(), evaluator.find_kickers()))
    }
}

/// Ranks a 5-card hand.
pub fn evaluate_hand(cards: &[Card; 5]) -> Strength {
    Strength::from(Evaluator::from(cards))
}

/// Finds the strongest 5-card subset of up to seven cards.
///
/// Returns `None` when fewer than five cards are given.
pub fn best_of(cards: &[Card]) -> Option<(Strength, [Card; 5])> {
    assert!(cards.len() <= 7, "at most 7 cards, got {}", cards.len());
    COMBINATIONS
        .iter()
        .filter(|combo| combo.iter().all(|&i| i < cards.len()))
        .map(|combo| combo.map(|i| cards[i]))
        .map(|five| (evaluate_hand(&five), five))
        .fold(None, |best, (strength, five)| match best {
            Some((top, _)) if top >= strength => best,
            _ => Some((strength, five)),
        })
}

/// Finds the strongest 5-card hand from hole plus community cards.
///
/// Returns `None` before the flop, when fewer than five cards exist.
pub fn find_best_hand(hole: &Hole, community: &[Card]) -> Option<(Strength, [Card; 5])> {
    assert!(community.len() <= 5, "at most 5 community cards");
    let n = 2 + community.len();
    let mut pool = [hole.cards()[0]; 7];
    pool[..2].copy_from_slice(hole.cards());
    pool[2..n].copy_from_slice(community);
    best_of(&pool[..n])
}
