use super::rank::Rank;

/// A hand's tiebreaker: five ranks in order of importance.
///
/// Ranks are grouped by how often they occur, groups are ordered by
/// (count desc, rank desc), and each rank is repeated by its count.
/// A full house of kings over twos reads `K K K 2 2`, a flush or high card
/// simply lists its ranks from high to low. Comparison is lexicographic.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Kickers([Rank; 5]);

impl Kickers {
    pub fn ranks(&self) -> &[Rank; 5] {
        &self.0
    }
}

impl From<[Rank; 5]> for Kickers {
    fn from(ranks: [Rank; 5]) -> Self {
        Self(ranks)
    }
}

/// rank histogram isomorphism, indexed by Rank::index()
impl From<[u8; 13]> for Kickers {
    fn from(counts: [u8; 13]) -> Self {
        let mut ranks = [Rank::MIN; 5];
        let mut i = 0;
        for n in (1..=5u8).rev() {
            for rank in Rank::all().into_iter().rev() {
                if counts[rank.index() as usize] == n {
                    for _ in 0..n {
                        if i < ranks.len() {
                            ranks[i] = rank;
                            i += 1;
                        }
                    }
                }
            }
        }
        Self(ranks)
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0.iter() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
