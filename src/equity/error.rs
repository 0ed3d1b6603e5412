use crate::cards::card::Card;
use thiserror::Error;

/// Rejected equity inputs. Raised before any trial runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquityError {
    #[error("player must have exactly 2 hole cards, got {0}")]
    HoleCards(usize),
    #[error("community cards must be 0, 3, 4, or 5 cards, got {0}")]
    CommunityCards(usize),
    #[error("must have at least 1 opponent")]
    NoOpponents,
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("not enough cards to deal: need {needed}, {remaining} remain")]
    InsufficientCards { needed: usize, remaining: usize },
}
