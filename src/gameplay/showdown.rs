use super::player::Player;
use super::pot::Pot;
use super::pot::create_side_pots_by;
use crate::Chips;
use crate::PlayerId;
use crate::cards::card::Card;
use crate::cards::category::Category;
use crate::cards::evaluator::find_best_hand;
use crate::cards::strength::Strength;
use std::collections::BTreeMap;

/// What one player collects at the end of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Payout {
    pub id: PlayerId,
    pub reward: Chips,
    /// `None` when everyone else folded and no cards were shown
    pub category: Option<Category>,
}

/// Settles a finished hand from what each player committed over all streets.
///
/// Wagers are layered into pots with [`create_side_pots_by`]. Chips left
/// behind by folded players are dead money and join the main pot. Each
/// pot goes to its strongest eligible hand. A split shares the pot evenly
/// and leftover chips go one apiece to the winners in seat order.
pub struct Showdown<'a> {
    players: &'a [Player],
    board: &'a [Card],
}

impl<'a> Showdown<'a> {
    pub fn new(players: &'a [Player], board: &'a [Card]) -> Self {
        Self { players, board }
    }

    pub fn pots(&self) -> Vec<Pot> {
        let dead = self
            .players
            .iter()
            .filter(|p| p.is_folded())
            .map(Player::spent)
            .sum::<Chips>();
        let mut pots = create_side_pots_by(self.players, Player::spent);
        match pots.first_mut() {
            Some(main) => main.add(dead),
            None if dead > 0 => pots.push(Pot::new(dead, self.unfolded().collect())),
            None => {}
        }
        pots
    }

    pub fn payouts(&self) -> Vec<Payout> {
        let unfolded = self.unfolded().collect::<Vec<PlayerId>>();
        if let [winner] = unfolded.as_slice() {
            let total = self.players.iter().map(Player::spent).sum();
            return vec![Payout {
                id: *winner,
                reward: total,
                category: None,
            }];
        }
        let strengths = self.strengths();
        let mut rewards = BTreeMap::<PlayerId, Chips>::new();
        for pot in self.pots() {
            let best = pot.eligible().iter().map(|id| strengths[id]).max();
            let winners = pot
                .eligible()
                .iter()
                .copied()
                .filter(|id| Some(strengths[id]) == best)
                .collect::<Vec<PlayerId>>();
            if winners.is_empty() {
                continue;
            }
            let share = pot.amount() / winners.len() as Chips;
            let remainder = pot.amount() as usize % winners.len();
            for (i, id) in winners.iter().enumerate() {
                let bonus = if i < remainder { 1 } else { 0 };
                *rewards.entry(*id).or_default() += share + bonus;
            }
        }
        rewards
            .into_iter()
            .filter(|(_, reward)| *reward > 0)
            .map(|(id, reward)| Payout {
                id,
                reward,
                category: strengths[&id].map(|s| s.category()),
            })
            .collect()
    }

    fn unfolded(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().filter(|p| !p.is_folded()).map(Player::id)
    }

    fn strengths(&self) -> BTreeMap<PlayerId, Option<Strength>> {
        self.players
            .iter()
            .filter(|p| !p.is_folded())
            .map(|p| {
                let strength = p
                    .hole()
                    .and_then(|hole| find_best_hand(hole, self.board))
                    .map(|(strength, _)| strength);
                (p.id(), strength)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hole::Hole;

    fn seat(id: PlayerId, hole: &str, spent: Chips) -> Player {
        let mut player = Player::new(id, 1000);
        player.receive(Hole::try_from(hole).unwrap());
        player.commit(spent);
        player
    }
    fn board() -> Vec<Card> {
        Card::parse("2c 7d 9h Jc Ks").unwrap()
    }
    fn reward(payouts: &[Payout], id: PlayerId) -> Chips {
        payouts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.reward)
            .unwrap_or(0)
    }

    #[test]
    fn best_hand_takes_everything() {
        let players = vec![seat(0, "Ah Ad", 100), seat(1, "Qh Qd", 100), seat(2, "3h 4d", 100)];
        let board = board();
        let payouts = Showdown::new(&players, &board).payouts();
        assert_eq!(
            payouts,
            vec![Payout {
                id: 0,
                reward: 300,
                category: Some(Category::OnePair),
            }]
        );
    }

    #[test]
    fn short_stack_wins_only_the_main_pot() {
        let players = vec![seat(0, "Ah Ad", 50), seat(1, "Qh Qd", 200), seat(2, "3h 4d", 200)];
        let board = board();
        let payouts = Showdown::new(&players, &board).payouts();
        assert_eq!(reward(&payouts, 0), 150);
        assert_eq!(reward(&payouts, 1), 300);
        assert_eq!(reward(&payouts, 2), 0);
    }

    #[test]
    fn folded_money_is_dead() {
        let mut players = vec![seat(0, "Ah Ad", 50), seat(1, "Qh Qd", 50), seat(2, "3h 4d", 80)];
        players[2].fold();
        let board = board();
        let showdown = Showdown::new(&players, &board);
        assert_eq!(showdown.pots().iter().map(Pot::amount).sum::<Chips>(), 180);
        let payouts = showdown.payouts();
        assert_eq!(reward(&payouts, 0), 180);
        assert_eq!(reward(&payouts, 2), 0);
    }

    #[test]
    fn split_gives_odd_chips_in_seat_order() {
        let mut players = vec![
            seat(0, "Ah 3d", 33),
            seat(1, "As 4c", 33),
            seat(2, "Ac 5h", 33),
            seat(3, "2d 8s", 1),
        ];
        players[3].fold();
        let board = Card::parse("Kd Kh Qs Js Tc").unwrap();
        let payouts = Showdown::new(&players, &board).payouts();
        assert_eq!(reward(&payouts, 0), 34);
        assert_eq!(reward(&payouts, 1), 33);
        assert_eq!(reward(&payouts, 2), 33);
        assert!(payouts.iter().all(|p| p.category == Some(Category::Straight)));
    }

    #[test]
    fn last_player_standing_needs_no_cards() {
        let mut players = vec![seat(0, "2c 3d", 10), seat(1, "Ah Ad", 40), seat(2, "Kh Kd", 5)];
        players[1].fold();
        players[2].fold();
        let payouts = Showdown::new(&players, &[]).payouts();
        assert_eq!(
            payouts,
            vec![Payout {
                id: 0,
                reward: 55,
                category: None,
            }]
        );
    }

    #[test]
    fn awards_add_up_to_the_pot() {
        let mut players = vec![
            seat(0, "Ah Kd", 75),
            seat(1, "7h 7s", 300),
            seat(2, "Qc Jc", 300),
            seat(3, "9s 9d", 120),
            seat(4, "4h 4c", 20),
        ];
        players[4].fold();
        let board = Card::parse("Ac 7c 2c 9h 3s").unwrap();
        let payouts = Showdown::new(&players, &board).payouts();
        assert_eq!(payouts.iter().map(|p| p.reward).sum::<Chips>(), 815);
        assert_eq!(reward(&payouts, 2), 815);
    }
}
