use crate::Chips;
use crate::PlayerId;
use crate::cards::hole::Hole;

/// Where a player stands within the current hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

/// A seated player.
///
/// `stake` is what the player has put in on the current street and `spent`
/// is everything committed since the hand began. Folding sticks until the
/// next [`Player::reset_for_new_hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    stack: Chips,
    hole: Option<Hole>,
    stake: Chips,
    spent: Chips,
    state: State,
}

impl Player {
    pub fn new(id: PlayerId, stack: Chips) -> Self {
        Self {
            id,
            stack,
            hole: None,
            stake: 0,
            spent: 0,
            state: State::Betting,
        }
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn hole(&self) -> Option<&Hole> {
        self.hole.as_ref()
    }
    pub fn total_bet_this_round(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn is_folded(&self) -> bool {
        self.state == State::Folding
    }
    pub fn is_all_in(&self) -> bool {
        self.state == State::Shoving
    }
    /// still able to put chips in: neither folded nor all-in
    pub fn is_live(&self) -> bool {
        self.state == State::Betting && self.stack > 0
    }
    pub fn to_call(&self, current_bet: Chips) -> Chips {
        current_bet.saturating_sub(self.stake)
    }

    pub fn receive(&mut self, hole: Hole) {
        self.hole = Some(hole);
    }
    pub fn fold(&mut self) {
        self.state = State::Folding;
    }
    /// Moves up to `amount` from stack to the table and returns what moved.
    /// Emptying the stack puts the player all-in.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let amount = std::cmp::min(amount, self.stack);
        self.stack -= amount;
        self.stake += amount;
        self.spent += amount;
        if self.stack == 0 && self.state == State::Betting {
            self.state = State::Shoving;
        }
        amount
    }
    pub fn win(&mut self, amount: Chips) {
        self.stack += amount;
    }
    pub fn reset_for_new_street(&mut self) {
        self.stake = 0;
    }
    pub fn reset_for_new_hand(&mut self) {
        self.hole = None;
        self.stake = 0;
        self.spent = 0;
        self.state = State::Betting;
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Betting => write!(f, "P"),
            Self::Shoving => write!(f, "S"),
            Self::Folding => write!(f, "F"),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hole = self.hole.map(|h| h.to_string()).unwrap_or_else(|| "-- --".into());
        write!(
            f,
            "{:<3}{}   {}  {:>7} {:>7}",
            self.id, self.state, hole, self.stack, self.stake
        )
    }
}
