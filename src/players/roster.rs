use super::bot::Bot;
use super::robot::Robot;
use super::style::Style;
use crate::PlayerId;
use crate::gameplay::action::Action;
use crate::gameplay::decider::Decider;
use crate::gameplay::player::Player;
use crate::gameplay::spot::Spot;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One robot per seat, indexed by player id.
#[derive(Debug, Clone)]
pub struct Roster(Vec<Robot>);

impl Roster {
    /// Seats `n` bots. A mixed roster cycles through the presets in order,
    /// otherwise each bot draws its style at random. Every bot gets its own
    /// rng stream derived from `seed`.
    pub fn new(n: usize, mixed: bool, seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let presets = Style::all();
        Self(
            (0..n)
                .map(|i| {
                    let style = match mixed {
                        true => presets[i % presets.len()],
                        false => Style::choose(rng),
                    };
                    Bot::new(style, rng.random())
                })
                .map(Robot::new)
                .collect(),
        )
    }
    pub fn from_robots(robots: Vec<Robot>) -> Self {
        Self(robots)
    }
    pub fn get(&self, id: PlayerId) -> Option<&Robot> {
        self.0.get(id)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Robot> {
        self.0.iter()
    }
}

impl Decider for Roster {
    fn decide(&mut self, player: &Player, spot: &Spot) -> Action {
        match self.0.get_mut(player.id()) {
            Some(robot) => robot.decide(player, spot),
            None => {
                log::warn!("no bot seated for P{}", player.id());
                match spot.to_call {
                    0 => Action::Check,
                    _ => Action::Fold,
                }
            }
        }
    }
}
