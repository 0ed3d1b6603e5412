use super::bot::Bot;
use crate::gameplay::action::Action;
use crate::gameplay::decider::Decider;
use crate::gameplay::player::Player;
use crate::gameplay::spot::Spot;

/// How a [`Robot`] sizes the raises its bot asks for.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Sizing {
    /// raise by one big blind, capped by the stack
    #[default]
    BigBlind,
    /// raise by whatever the bot computed
    Engine,
}

/// Seats a [`Bot`] at the table as a [`Decider`].
#[derive(Debug, Clone)]
pub struct Robot {
    bot: Bot,
    sizing: Sizing,
}

impl Robot {
    pub fn new(bot: Bot) -> Self {
        Self {
            bot,
            sizing: Sizing::default(),
        }
    }
    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
    pub fn sizing(&self) -> Sizing {
        self.sizing
    }
}

impl Decider for Robot {
    fn decide(&mut self, player: &Player, spot: &Spot) -> Action {
        let Some(hole) = player.hole() else {
            log::warn!("P{} asked to act without cards", player.id());
            return match spot.to_call {
                0 => Action::Check,
                _ => Action::Fold,
            };
        };
        match (self.bot.decide_action(hole, spot), self.sizing) {
            (Action::Raise(_), Sizing::BigBlind) => Action::Raise(spot.blinds.big.min(spot.stack)),
            (action, _) => action,
        }
    }
}

impl std::fmt::Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hole::Hole;
    use crate::cards::street::Street;
    use crate::gameplay::blinds::Blinds;
    use crate::gameplay::position::Position;
    use crate::players::style::Style;

    fn spot() -> Spot {
        Spot {
            street: Street::Pref,
            community: vec![],
            current_bet: 0,
            to_call: 0,
            stack: 1000,
            pot: 30,
            position: Position::Late,
            opponents: 1,
            blinds: Blinds::new(5, 10),
        }
    }
    fn aces() -> Player {
        let mut player = Player::new(0, 1000);
        player.receive(Hole::try_from("As Ah").unwrap());
        player
    }

    #[test]
    fn big_blind_sizing_overrides_the_bot() {
        let mut robot = Robot::new(Bot::new(Style::Tag, 0));
        let actions = (0..20).map(|_| robot.decide(&aces(), &spot())).collect::<Vec<_>>();
        assert!(actions.iter().all(|a| matches!(a, Action::Check | Action::Raise(10))));
        assert!(actions.contains(&Action::Raise(10)));
    }

    #[test]
    fn engine_sizing_keeps_the_bot_amount() {
        let mut robot = Robot::new(Bot::new(Style::Tag, 0)).with_sizing(Sizing::Engine);
        let actions = (0..20).map(|_| robot.decide(&aces(), &spot())).collect::<Vec<_>>();
        assert!(actions.contains(&Action::Raise(250)));
    }

    #[test]
    fn no_cards_means_no_bet() {
        let mut robot = Robot::new(Bot::new(Style::Lag, 0));
        let player = Player::new(1, 1000);
        assert_eq!(robot.decide(&player, &spot()), Action::Check);
    }
}
