use std::cmp::Ordering;

/// Raw trial counts from the hero's point of view.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.wins + self.ties + self.losses
    }
    /// hero strength compared against the best opponent
    pub fn record(&mut self, result: Ordering) {
        match result {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_sum() {
        let mut a = Tally::default();
        a.record(Ordering::Greater);
        a.record(Ordering::Greater);
        a.record(Ordering::Less);
        let mut b = Tally::default();
        b.record(Ordering::Equal);
        let sum = [a, b].into_iter().sum::<Tally>();
        assert_eq!(sum, Tally { wins: 2, ties: 1, losses: 1 });
        assert_eq!(sum.total(), 4);
    }
}
