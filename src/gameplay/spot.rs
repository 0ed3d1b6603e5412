use super::blinds::Blinds;
use super::position::Position;
use crate::Chips;
use crate::cards::card::Card;
use crate::cards::street::Street;

/// Everything a decider may look at when it is asked to act.
///
/// A snapshot, detached from the [`GameState`] it was taken from.
///
/// [`GameState`]: super::game::GameState
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub street: Street,
    pub community: Vec<Card>,
    pub current_bet: Chips,
    pub to_call: Chips,
    pub stack: Chips,
    pub pot: Chips,
    pub position: Position,
    /// other players still holding cards
    pub opponents: usize,
    pub blinds: Blinds,
}

impl Spot {
    /// `to_call / (pot + to_call)`, zero when both are zero.
    pub fn pot_odds(&self) -> f32 {
        match self.pot + self.to_call {
            0 => 0.,
            total => self.to_call as f32 / total as f32,
        }
    }
    /// stack measured in big blinds
    pub fn stack_depth(&self) -> f32 {
        match self.blinds.big {
            0 => 0.,
            big => self.stack as f32 / big as f32,
        }
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} pot {} to call {} stack {} ({}, {} opponents)",
            self.street, self.pot, self.to_call, self.stack, self.position, self.opponents
        )
    }
}
