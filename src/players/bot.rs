use super::style::Style;
use crate::Chips;
use crate::Probability;
use crate::cards::card::Card;
use crate::cards::evaluator::find_best_hand;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::equity::calculator::Calculator;
use crate::gameplay::action::Action;
use crate::gameplay::spot::Spot;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A heuristic player.
///
/// Weighs Monte Carlo equity against pot odds, scaled by table position and
/// its [`Style`]. Besides the style it only owns an equity calculator and
/// the rng that drives its coin flips, so decisions carry no memory of
/// earlier hands.
#[derive(Debug, Clone)]
pub struct Bot {
    style: Style,
    calculator: Calculator,
    rng: SmallRng,
}

impl Bot {
    pub fn new(style: Style, seed: u64) -> Self {
        Self {
            style,
            calculator: Calculator::new(crate::BOT_SIMULATIONS),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn with_calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = calculator;
        self
    }
    pub fn style(&self) -> Style {
        self.style
    }

    /// Chooses an action for `hole` at `spot`.
    ///
    /// A returned `Raise` carries the increment over `spot.to_call`. The
    /// total it commits is sized by [`Bot::raise_amount`], or a quarter of
    /// the stack when opening an unbet street.
    pub fn decide_action(&mut self, hole: &Hole, spot: &Spot) -> Action {
        if spot.to_call > spot.stack {
            let equity = self.equity(hole, spot);
            log::trace!("{} facing all-in for {}: equity {:.3}", self.style, spot.to_call, equity);
            return if equity > 0.40 { Action::Call } else { Action::Fold };
        }
        let equity = self.equity(hole, spot);
        let strength = Self::hand_strength(hole, &spot.community);
        let pot_odds = spot.pot_odds();
        let multiplier = spot.position.multiplier();
        log::trace!(
            "{} {} equity {:.3} strength {:.3} pot odds {:.3} depth {:.1} {}",
            self.style,
            hole,
            equity,
            strength,
            pot_odds,
            spot.stack_depth(),
            spot.position
        );
        let aggression = self.style.aggression();
        if spot.to_call == 0 {
            let strong = strength > 0.65 || (equity > 0.65 && spot.opponents <= 2);
            if strong && self.rng.random::<Probability>() < aggression {
                return Action::Raise((spot.stack as Probability * 0.25) as Chips);
            }
            return Action::Check;
        }
        let fold_threshold = (0.35 + 0.30 * self.style.tightness()) * multiplier;
        if equity < fold_threshold {
            Action::Fold
        } else if equity >= 0.8 * pot_odds || equity > 0.5 {
            if self.rng.random::<Probability>() < aggression && strength > 0.4 {
                let total = self.raise_amount(spot.to_call, spot.stack, strength);
                Action::Raise(total - spot.to_call)
            } else {
                Action::Call
            }
        } else {
            Action::Fold
        }
    }

    /// Total chips to commit when raising. Grows from `to_call` toward half
    /// the stack with aggression and strength, never beyond the stack.
    pub fn raise_amount(&self, to_call: Chips, stack: Chips, strength: Probability) -> Chips {
        let ceiling = (stack as Probability * 0.5).floor();
        let spread = ceiling - to_call as Probability;
        let amount = to_call as Probability + spread * self.style.aggression() * strength;
        (amount as Chips).clamp(to_call, stack.max(to_call))
    }

    /// Monte Carlo equity, or the rank heuristic if the estimate fails.
    pub fn equity(&mut self, hole: &Hole, spot: &Spot) -> Probability {
        if spot.opponents < 1 {
            return 0.5;
        }
        match self.calculator.calculate_win_probability(
            hole.cards(),
            &spot.community,
            spot.opponents,
            &mut self.rng,
        ) {
            Ok(estimate) => estimate.equity,
            Err(e) => {
                log::warn!("equity estimate failed ({}), using hand strength", e);
                Self::hand_strength(hole, &spot.community)
            }
        }
    }

    /// Hand strength in `[0, 1]`: a closed form before the flop, the best
    /// category over ten afterwards.
    pub fn hand_strength(hole: &Hole, community: &[Card]) -> Probability {
        if community.len() < 3 {
            return Self::preflop_strength(hole);
        }
        find_best_hand(hole, community)
            .map(|(strength, _)| strength.category().ordinal() as Probability / 10.)
            .unwrap_or(0.)
    }

    /// Pairs score 0.60 to 1.00 by rank. Ace, then king or queen, hands
    /// get fixed tiers with a suited bonus. Everything else scales with
    /// its high card.
    pub fn preflop_strength(hole: &Hole) -> Probability {
        let [a, b] = *hole.cards();
        let hi = std::cmp::max(a.rank(), b.rank());
        let lo = std::cmp::min(a.rank(), b.rank());
        let scale = (hi.value() - 2) as Probability / 12.;
        let suited = hole.is_suited();
        match hi {
            _ if hole.is_pair() => 0.60 + scale * 0.40,
            Rank::Ace => {
                let base = match lo.value() {
                    v if v >= 10 => 0.75,
                    v if v >= 6 => 0.50,
                    _ => 0.35,
                };
                base + if suited { 0.15 } else { 0. }
            }
            Rank::King | Rank::Queen => 0.55 + if suited { 0.10 } else { 0. },
            _ if suited => 0.30 + scale * 0.20,
            _ => 0.15 + scale * 0.15,
        }
    }
}

impl std::fmt::Display for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Bot-{}", self.style.name())
    }
}
