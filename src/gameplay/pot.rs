use crate::Chips;
use crate::PlayerId;
use super::player::Player;
use std::collections::BTreeSet;

/// A pot and the players who can win it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Pot {
    amount: Chips,
    eligible: BTreeSet<PlayerId>,
}

impl Pot {
    pub fn new(amount: Chips, eligible: BTreeSet<PlayerId>) -> Self {
        Self { amount, eligible }
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn eligible(&self) -> &BTreeSet<PlayerId> {
        &self.eligible
    }
    pub fn is_eligible(&self, id: PlayerId) -> bool {
        self.eligible.contains(&id)
    }
    pub fn add(&mut self, amount: Chips) {
        self.amount += amount;
    }
}

/// Splits the current street's wagers into a main pot and side pots.
pub fn create_side_pots(players: &[Player]) -> Vec<Pot> {
    create_side_pots_by(players, Player::total_bet_this_round)
}

/// Layers non-folded contributions into pots, main pot first.
///
/// Each distinct positive contribution is a level. The pot at level `L_i`
/// takes `L_i - L_{i-1}` from every contributor who reached it, and only
/// those contributors are eligible. Folded players are skipped entirely,
/// so eligibility shrinks from one pot to the next.
pub fn create_side_pots_by<F>(players: &[Player], contribution: F) -> Vec<Pot>
where
    F: Fn(&Player) -> Chips,
{
    let contributors = players
        .iter()
        .filter(|p| !p.is_folded())
        .map(|p| (p.id(), contribution(p)))
        .filter(|(_, amount)| *amount > 0)
        .collect::<Vec<(PlayerId, Chips)>>();
    let levels = contributors
        .iter()
        .map(|(_, amount)| *amount)
        .collect::<BTreeSet<Chips>>();
    let mut prev = 0;
    let mut pots = Vec::with_capacity(levels.len());
    for level in levels {
        let eligible = contributors
            .iter()
            .filter(|(_, amount)| *amount >= level)
            .map(|(id, _)| *id)
            .collect::<BTreeSet<PlayerId>>();
        let amount = (level - prev) * eligible.len() as Chips;
        pots.push(Pot::new(amount, eligible));
        prev = level;
    }
    pots
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>7} {:?}", self.amount, self.eligible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(bets: &[Chips]) -> Vec<Player> {
        bets.iter()
            .enumerate()
            .map(|(i, bet)| {
                let mut player = Player::new(i, 1000);
                player.commit(*bet);
                player
            })
            .collect()
    }
    fn ids(ids: &[PlayerId]) -> BTreeSet<PlayerId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn unequal_all_ins_layer_into_side_pots() {
        let pots = create_side_pots(&table(&[50, 150, 200, 250]));
        let amounts = pots.iter().map(Pot::amount).collect::<Vec<_>>();
        assert_eq!(amounts, vec![200, 300, 100, 50]);
        assert_eq!(pots[0].eligible(), &ids(&[0, 1, 2, 3]));
        assert_eq!(pots[1].eligible(), &ids(&[1, 2, 3]));
        assert_eq!(pots[2].eligible(), &ids(&[2, 3]));
        assert_eq!(pots[3].eligible(), &ids(&[3]));
    }

    #[test]
    fn equal_bets_make_one_pot() {
        let pots = create_side_pots(&table(&[100, 100, 100]));
        assert_eq!(pots, vec![Pot::new(300, ids(&[0, 1, 2]))]);
    }

    #[test]
    fn folded_wagers_are_excluded() {
        let mut players = table(&[100, 250, 100, 50]);
        players[1].fold();
        let pots = create_side_pots(&players);
        assert_eq!(pots.iter().map(Pot::amount).sum::<Chips>(), 250);
        assert!(pots.iter().all(|pot| !pot.is_eligible(1)));
        assert_eq!(pots[0], Pot::new(150, ids(&[0, 2, 3])));
        assert_eq!(pots[1], Pot::new(100, ids(&[0, 2])));
    }

    #[test]
    fn pots_sum_and_nest() {
        let players = table(&[30, 0, 480, 75, 75, 900]);
        let pots = create_side_pots(&players);
        let wagered = players.iter().map(Player::total_bet_this_round).sum::<Chips>();
        assert_eq!(pots.iter().map(Pot::amount).sum::<Chips>(), wagered);
        for (outer, inner) in pots.iter().zip(pots.iter().skip(1)) {
            assert!(outer.eligible().is_superset(inner.eligible()));
        }
        assert!(pots.iter().all(|pot| !pot.is_eligible(1)));
    }

    #[test]
    fn nobody_betting_means_no_pots() {
        assert!(create_side_pots(&table(&[0, 0])).is_empty());
        assert!(create_side_pots(&[]).is_empty());
        let mut players = table(&[40]);
        players[0].fold();
        assert!(create_side_pots(&players).is_empty());
    }

    #[test]
    fn custom_contribution() {
        let mut players = table(&[20, 20]);
        players.iter_mut().for_each(Player::reset_for_new_street);
        players[1].commit(30);
        assert_eq!(create_side_pots(&players), vec![Pot::new(30, ids(&[1]))]);
        let pots = create_side_pots_by(&players, Player::spent);
        assert_eq!(pots[0], Pot::new(40, ids(&[0, 1])));
        assert_eq!(pots[1], Pot::new(30, ids(&[1])));
    }
}
