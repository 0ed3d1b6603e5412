use super::decider::Decider;
use super::game::GameState;
use super::round::BettingRound;
use super::showdown::Payout;
use super::showdown::Showdown;
use crate::Chips;
use crate::cards::card::Card;
use crate::cards::street::Street;
use rand::Rng;

/// The result of one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    pub hand: usize,
    pub pot: Chips,
    pub board: Vec<Card>,
    pub payouts: Vec<Payout>,
}

/// Drives a hand from blinds to settlement.
pub struct Dealer;

impl Dealer {
    /// Plays one complete hand on `game`.
    ///
    /// Streets are skipped once a single player holds cards. When everyone
    /// left is all-in the remaining board is still dealt, each round simply
    /// settles without asking anyone to act. The button moves on afterwards.
    pub fn play<D, R>(game: &mut GameState, decider: &mut D, rng: &mut R) -> Outcome
    where
        D: Decider + ?Sized,
        R: Rng + ?Sized,
    {
        game.reset_for_new_hand();
        log::info!("hand {} button P{}", game.hand_number(), game.button());
        game.post_blinds();
        game.deal_hole_cards(rng);
        for player in game.players().iter().filter(|p| !p.is_folded()) {
            if let Some(hole) = player.hole() {
                log::debug!("P{} dealt {}", player.id(), hole);
            }
        }
        BettingRound::run(Street::Pref, game, decider);
        for street in [Street::Flop, Street::Turn, Street::Rive] {
            if game.unfolded().count() <= 1 {
                break;
            }
            game.reset_for_new_street();
            let cards = game.reveal(street);
            log::debug!("{} {:?}", street, cards.iter().map(Card::to_string).collect::<Vec<_>>());
            BettingRound::run(street, game, decider);
        }
        Self::settle(game)
    }

    /// Pays out the pot and advances the button.
    pub fn settle(game: &mut GameState) -> Outcome {
        let payouts = Showdown::new(game.players(), game.community()).payouts();
        let pot = game.take_pot();
        for payout in payouts.iter() {
            game.award(payout.id, payout.reward);
            match payout.category {
                Some(category) => log::info!("P{} wins {} with {}", payout.id, payout.reward, category),
                None => log::info!("P{} wins {} uncontested", payout.id, payout.reward),
            }
        }
        let outcome = Outcome {
            hand: game.hand_number(),
            pot,
            board: game.community().to_vec(),
            payouts,
        };
        game.advance_button();
        outcome
    }
}
