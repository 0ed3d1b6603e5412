use super::tally::Tally;
use super::verdict::Verdict;
use crate::Probability;

/// Monte Carlo win, tie, and loss rates with the counts behind them.
///
/// `equity` credits a tie with an even share among everyone at the table,
/// `win_prob + tie_prob / (opponents + 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Estimate {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    pub win_prob: Probability,
    pub tie_prob: Probability,
    pub lose_prob: Probability,
    pub equity: Probability,
}

impl Estimate {
    pub fn new(tally: Tally, opponents: usize) -> Self {
        let total = tally.total().max(1) as Probability;
        let win_prob = tally.wins as Probability / total;
        let tie_prob = tally.ties as Probability / total;
        let lose_prob = tally.losses as Probability / total;
        Self {
            wins: tally.wins,
            ties: tally.ties,
            losses: tally.losses,
            win_prob,
            tie_prob,
            lose_prob,
            equity: win_prob + tie_prob / (opponents + 1) as Probability,
        }
    }
    pub fn tally(&self) -> Tally {
        Tally {
            wins: self.wins,
            ties: self.ties,
            losses: self.losses,
        }
    }
    pub fn verdict(&self, opponents: usize) -> Verdict {
        Verdict::from_equity(self.equity, opponents)
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "win {:>6.2}%  tie {:>6.2}%  lose {:>6.2}%  equity {:>6.2}%",
            self.win_prob * 100.,
            self.tie_prob * 100.,
            self.lose_prob * 100.,
            self.equity * 100.
        )
    }
}
