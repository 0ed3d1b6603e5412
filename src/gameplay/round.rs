use super::action::Action;
use super::decider::Decider;
use super::game::GameState;
use crate::PlayerId;
use crate::cards::street::Street;
use std::collections::BTreeSet;

/// One street of betting.
///
/// Action starts left of the big blind pre-flop and left of the button
/// afterwards, then walks the table skipping folded and all-in seats. A
/// raise reopens the action for everyone else. The round settles once at
/// most one player holds cards, or every player who can still bet has
/// acted since the last raise and matched the current bet.
#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    actor: usize,
    acted: BTreeSet<PlayerId>,
}

impl BettingRound {
    pub fn new(street: Street, game: &GameState) -> Self {
        let actor = match street {
            Street::Pref => game.seat(3),
            _ => game.seat(1),
        };
        Self {
            street,
            actor,
            acted: BTreeSet::new(),
        }
    }

    /// Plays a full street against `decider`, mutating `game` in place.
    pub fn run<D: Decider + ?Sized>(street: Street, game: &mut GameState, decider: &mut D) {
        Self::new(street, game).play(game, decider)
    }

    pub fn play<D: Decider + ?Sized>(&mut self, game: &mut GameState, decider: &mut D) {
        log::debug!("{} betting, pot {}", self.street, game.pot());
        while !self.is_settled(game) {
            let id = self.next_live(game);
            let spot = game.spot(id);
            let action = decider.decide(game.player(id), &spot);
            self.apply(game, id, action);
            self.actor = (id + 1) % game.n();
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn acted(&self) -> &BTreeSet<PlayerId> {
        &self.acted
    }

    /// Applies `action` for player `id` and returns the action as it took
    /// effect. Checking into a bet folds. A raise of nothing, or one too
    /// short to lift the current bet, plays as a call.
    pub fn apply(&mut self, game: &mut GameState, id: PlayerId, action: Action) -> Action {
        let to_call = game.player(id).to_call(game.current_bet());
        let applied = match action {
            Action::Fold => {
                game.fold(id);
                Action::Fold
            }
            Action::Check if to_call == 0 => Action::Check,
            Action::Check => {
                log::warn!("P{} cannot check facing {}, folding", id, to_call);
                game.fold(id);
                Action::Fold
            }
            Action::Call | Action::Raise(0) => {
                game.commit(id, to_call);
                self.lift(game, id);
                Action::Call
            }
            Action::Raise(amount) => {
                let moved = game.commit(id, to_call.saturating_add(amount));
                if self.lift(game, id) {
                    self.acted.clear();
                    Action::Raise(moved - to_call)
                } else {
                    Action::Call
                }
            }
        };
        self.acted.insert(id);
        log::debug!(
            "P{} {:<10} stack {:>6} bet {:>6} pot {:>6}",
            id,
            applied,
            game.player(id).stack(),
            game.player(id).total_bet_this_round(),
            game.pot()
        );
        applied
    }

    /// Raises the current bet to the player's total if it is higher.
    fn lift(&self, game: &mut GameState, id: PlayerId) -> bool {
        let total = game.player(id).total_bet_this_round();
        if total > game.current_bet() {
            game.set_current_bet(total);
            true
        } else {
            false
        }
    }

    fn next_live(&self, game: &GameState) -> PlayerId {
        (0..game.n())
            .map(|i| (self.actor + i) % game.n())
            .find(|&i| game.player(i).is_live())
            .unwrap_or(self.actor)
    }

    pub fn is_settled(&self, game: &GameState) -> bool {
        if game.unfolded().count() <= 1 {
            return true;
        }
        let bet = game.current_bet();
        let live = game.live().collect::<Vec<_>>();
        match live.as_slice() {
            [] => true,
            [last] if last.total_bet_this_round() >= bet => true,
            _ => live
                .iter()
                .all(|p| self.acted.contains(&p.id()) && p.total_bet_this_round() == bet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;
    use crate::gameplay::blinds::Blinds;
    use crate::gameplay::player::Player;
    use crate::gameplay::spot::Spot;

    fn table(stacks: &[Chips]) -> GameState {
        let mut game = GameState::from_stacks(stacks, Blinds::new(5, 10));
        game.reset_for_new_hand();
        game
    }
    /// replays a fixed script; panics if the round asks for more
    fn script(actions: Vec<(PlayerId, Action)>) -> impl FnMut(&Player, &Spot) -> Action {
        let mut actions = actions.into_iter();
        move |player: &Player, _: &Spot| match actions.next() {
            Some((id, action)) => {
                assert_eq!(player.id(), id, "unexpected actor");
                action
            }
            None => panic!("round asked P{} for an extra action", player.id()),
        }
    }

    #[test]
    fn preflop_starts_left_of_big_blind() {
        let mut game = table(&[1000; 4]);
        game.set_button(1);
        game.post_blinds();
        let mut decider = script(vec![
            (0, Action::Call),
            (1, Action::Call),
            (2, Action::Call),
            (3, Action::Check),
        ]);
        BettingRound::run(Street::Pref, &mut game, &mut decider);
        assert_eq!(game.pot(), 40);
        assert!(game.players().iter().all(|p| p.total_bet_this_round() == 10));
    }

    #[test]
    fn postflop_starts_left_of_button() {
        let mut game = table(&[1000; 3]);
        let mut decider = script(vec![
            (1, Action::Check),
            (2, Action::Check),
            (0, Action::Check),
        ]);
        BettingRound::run(Street::Flop, &mut game, &mut decider);
        assert_eq!(game.pot(), 0);
    }

    #[test]
    fn raise_reopens_action() {
        let mut game = table(&[1000; 3]);
        let mut decider = script(vec![
            (1, Action::Check),
            (2, Action::Raise(50)),
            (0, Action::Call),
            (1, Action::Raise(100)),
            (2, Action::Call),
            (0, Action::Fold),
        ]);
        BettingRound::run(Street::Flop, &mut game, &mut decider);
        assert_eq!(game.current_bet(), 150);
        assert!(game.player(0).is_folded());
        assert_eq!(game.player(1).total_bet_this_round(), 150);
        assert_eq!(game.player(2).total_bet_this_round(), 150);
        assert_eq!(game.pot(), 350);
    }

    #[test]
    fn everyone_folds_to_the_bet() {
        let mut game = table(&[1000; 4]);
        let mut decider = script(vec![
            (1, Action::Raise(20)),
            (2, Action::Fold),
            (3, Action::Fold),
            (0, Action::Fold),
        ]);
        BettingRound::run(Street::Turn, &mut game, &mut decider);
        assert_eq!(game.unfolded().count(), 1);
        assert_eq!(game.pot(), 20);
    }

    #[test]
    fn short_call_lifts_nothing_and_settles() {
        let mut game = table(&[1000, 1000, 40]);
        let mut decider = script(vec![
            (1, Action::Raise(100)),
            (2, Action::Call),
            (0, Action::Call),
        ]);
        BettingRound::run(Street::Flop, &mut game, &mut decider);
        assert!(game.player(2).is_all_in());
        assert_eq!(game.player(2).total_bet_this_round(), 40);
        assert_eq!(game.current_bet(), 100);
        assert_eq!(game.pot(), 240);
    }

    #[test]
    fn short_all_in_raise_plays_as_call() {
        let mut game = table(&[1000, 1000, 60]);
        let mut round = BettingRound::new(Street::Flop, &game);
        assert_eq!(round.apply(&mut game, 1, Action::Raise(100)), Action::Raise(100));
        assert_eq!(round.apply(&mut game, 2, Action::Raise(500)), Action::Call);
        assert_eq!(game.current_bet(), 100);
        assert_eq!(round.acted().len(), 2);
    }

    #[test]
    fn all_in_raise_over_the_bet_reopens() {
        let mut game = table(&[1000, 1000, 150]);
        let mut round = BettingRound::new(Street::Flop, &game);
        round.apply(&mut game, 1, Action::Raise(100));
        assert_eq!(round.apply(&mut game, 2, Action::Raise(500)), Action::Raise(50));
        assert_eq!(game.current_bet(), 150);
        assert_eq!(round.acted().iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn illegal_check_folds() {
        let mut game = table(&[1000; 3]);
        let mut round = BettingRound::new(Street::Flop, &game);
        round.apply(&mut game, 1, Action::Raise(10));
        assert_eq!(round.apply(&mut game, 2, Action::Check), Action::Fold);
        assert!(game.player(2).is_folded());
    }

    #[test]
    fn zero_raise_is_a_call() {
        let mut game = table(&[1000; 2]);
        game.post_blinds();
        let mut round = BettingRound::new(Street::Pref, &game);
        assert_eq!(round.apply(&mut game, 1, Action::Raise(0)), Action::Call);
        assert_eq!(game.player(1).total_bet_this_round(), 10);
    }

    #[test]
    fn nobody_left_to_act() {
        let mut game = table(&[100, 100, 100]);
        game.commit(0, 100);
        game.commit(1, 100);
        let mut decider = |_: &Player, _: &Spot| -> Action { panic!("no one should act") };
        BettingRound::run(Street::Flop, &mut game, &mut decider);
        game.set_current_bet(100);
        assert!(!BettingRound::new(Street::Flop, &game).is_settled(&game));
        game.commit(2, 100);
        BettingRound::run(Street::Flop, &mut game, &mut decider);
    }

    #[test]
    fn lone_live_player_must_still_match() {
        let mut game = table(&[1000, 50, 1000]);
        game.set_button(0);
        let mut decider = script(vec![(1, Action::Raise(50)), (2, Action::Call), (0, Action::Fold)]);
        BettingRound::run(Street::Flop, &mut game, &mut decider);
        assert!(game.player(1).is_all_in());
        assert_eq!(game.player(2).total_bet_this_round(), 50);
    }
}
