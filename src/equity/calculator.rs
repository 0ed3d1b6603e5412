use super::error::EquityError;
use super::estimate::Estimate;
use super::tally::Tally;
use super::verdict::Verdict;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::evaluator::find_best_hand;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Monte Carlo win probability against random or known opponent holdings.
///
/// Trials are split into fixed batches of [`crate::SIMULATION_BATCH`], each
/// with a `SmallRng` seeded from the caller's rng, and run on the rayon pool.
/// Counts are summed at the end, so a seeded caller sees the same estimate
/// however the batches get scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    simulations: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(crate::NUM_SIMULATIONS)
    }
}

impl Calculator {
    pub fn new(simulations: usize) -> Self {
        assert!(simulations > 0, "need at least one simulation");
        Self { simulations }
    }
    pub fn simulations(&self) -> usize {
        self.simulations
    }

    /// Estimates the hero's chances against `opponents` random hands.
    pub fn calculate_win_probability<R: Rng + ?Sized>(
        &self,
        hole: &[Card],
        community: &[Card],
        opponents: usize,
        rng: &mut R,
    ) -> Result<Estimate, EquityError> {
        let scenario = Scenario::new(hole, community, &vec![None; opponents])?;
        Ok(self.estimate(&scenario, rng))
    }

    /// Like [`Calculator::calculate_win_probability`] with some or all of the
    /// opponents' holdings fixed. `None` seats are dealt at random.
    pub fn calculate_vs_specific_hands<R: Rng + ?Sized>(
        &self,
        hole: &[Card],
        community: &[Card],
        opponents: &[Option<Hole>],
        rng: &mut R,
    ) -> Result<Estimate, EquityError> {
        let scenario = Scenario::new(hole, community, opponents)?;
        Ok(self.estimate(&scenario, rng))
    }

    /// Describes the hero's equity relative to a fair share of the pot.
    pub fn get_hand_strength<R: Rng + ?Sized>(
        &self,
        hole: &[Card],
        community: &[Card],
        opponents: usize,
        rng: &mut R,
    ) -> Result<Verdict, EquityError> {
        self.calculate_win_probability(hole, community, opponents, rng)
            .map(|estimate| estimate.verdict(opponents))
    }

    fn estimate<R: Rng + ?Sized>(&self, scenario: &Scenario, rng: &mut R) -> Estimate {
        let batch = crate::SIMULATION_BATCH;
        let seeds = (0..self.simulations.div_ceil(batch))
            .map(|_| rng.random::<u64>())
            .collect::<Vec<u64>>();
        let tally = seeds
            .into_par_iter()
            .enumerate()
            .map(|(i, seed)| {
                let trials = std::cmp::min(batch, self.simulations - i * batch);
                scenario.run(trials, seed)
            })
            .reduce(Tally::default, |a, b| a + b);
        let estimate = Estimate::new(tally, scenario.villains.len());
        log::trace!("{} vs {} opponents: {}", scenario.hero, scenario.villains.len(), estimate);
        estimate
    }
}

/// Validated inputs for one estimate plus the cards still unseen.
struct Scenario {
    hero: Hole,
    community: Vec<Card>,
    villains: Vec<Option<Hole>>,
    unseen: Deck,
}

impl Scenario {
    fn new(
        hole: &[Card],
        community: &[Card],
        villains: &[Option<Hole>],
    ) -> Result<Self, EquityError> {
        if hole.len() != 2 {
            return Err(EquityError::HoleCards(hole.len()));
        }
        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::CommunityCards(community.len()));
        }
        if villains.is_empty() {
            return Err(EquityError::NoOpponents);
        }
        let mut known = Hand::empty();
        let fixed = villains.iter().flatten().flat_map(|h| h.cards().iter());
        for card in hole.iter().chain(community.iter()).chain(fixed) {
            if known.contains(card) {
                return Err(EquityError::DuplicateCard(*card));
            }
            known.insert(*card);
        }
        let needed = 2 * villains.iter().filter(|v| v.is_none()).count() + 5 - community.len();
        let remaining = 52 - known.size();
        if needed > remaining {
            return Err(EquityError::InsufficientCards { needed, remaining });
        }
        Ok(Self {
            hero: Hole::from((hole[0], hole[1])),
            community: community.to_vec(),
            villains: villains.to_vec(),
            unseen: Deck::without(known),
        })
    }

    fn run(&self, trials: usize, seed: u64) -> Tally {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut deck = self.unseen.clone();
        let mut tally = Tally::default();
        for _ in 0..trials {
            deck.shuffle(rng);
            tally.record(self.trial(deck.cards()));
        }
        tally
    }

    /// Plays one runout off the top of a shuffled `deck`.
    fn trial(&self, deck: &[Card]) -> Ordering {
        let mut draw = deck.iter().copied();
        let villains = self
            .villains
            .iter()
            .map(|fixed| match fixed {
                Some(hole) => *hole,
                None => Self::deal(&mut draw),
            })
            .collect::<Vec<Hole>>();
        let mut board = self.community.clone();
        board.extend(draw.by_ref().take(5 - self.community.len()));
        let hero = Self::strength(&self.hero, &board);
        let best = villains
            .iter()
            .map(|villain| Self::strength(villain, &board))
            .max();
        match best {
            Some(best) => hero.cmp(&best),
            None => Ordering::Greater,
        }
    }

    fn deal(draw: &mut impl Iterator<Item = Card>) -> Hole {
        match (draw.next(), draw.next()) {
            (Some(a), Some(b)) => Hole::from((a, b)),
            _ => unreachable!("scenario guarantees enough unseen cards"),
        }
    }

    fn strength(hole: &Hole, board: &[Card]) -> Option<Strength> {
        find_best_hand(hole, board).map(|(strength, _)| strength)
    }
}
