use super::action::Action;
use super::player::Player;
use super::spot::Spot;

/// The source of actions for a betting round.
///
/// Bots and scripted test drivers both plug in here. Any
/// `FnMut(&Player, &Spot) -> Action` closure is a decider.
pub trait Decider {
    fn decide(&mut self, player: &Player, spot: &Spot) -> Action;
}

impl<F> Decider for F
where
    F: FnMut(&Player, &Spot) -> Action,
{
    fn decide(&mut self, player: &Player, spot: &Spot) -> Action {
        self(player, spot)
    }
}
