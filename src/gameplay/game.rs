use super::blinds::Blinds;
use super::player::Player;
use super::position::Position;
use super::spot::Spot;
use crate::Chips;
use crate::PlayerId;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::street::Street;
use rand::Rng;

/// The table: seats, button, community cards and the chips in play.
///
/// One `GameState` lives for a whole session. Hand-scoped fields are
/// cleared by [`GameState::reset_for_new_hand`] and street-scoped ones by
/// [`GameState::reset_for_new_street`].
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    board: Board,
    deck: Deck,
    blinds: Blinds,
    button: usize,
    current_bet: Chips,
    pot: Chips,
    hand: usize,
}

impl GameState {
    /// Seats `n` players with equal stacks, button on seat 0.
    pub fn new(n: usize, stack: Chips, blinds: Blinds) -> Self {
        Self::from_stacks(&vec![stack; n], blinds)
    }
    pub fn from_stacks(stacks: &[Chips], blinds: Blinds) -> Self {
        assert!(
            (2..=crate::MAX_PLAYERS).contains(&stacks.len()),
            "table seats 2 to {} players, got {}",
            crate::MAX_PLAYERS,
            stacks.len()
        );
        Self {
            players: stacks
                .iter()
                .enumerate()
                .map(|(id, stack)| Player::new(id, *stack))
                .collect(),
            board: Board::empty(),
            deck: Deck::new(),
            blinds,
            button: 0,
            current_bet: 0,
            pot: 0,
            hand: 0,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }
    pub fn n(&self) -> usize {
        self.players.len()
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn set_button(&mut self, button: usize) {
        self.button = button % self.n();
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
    pub fn community(&self) -> &[Card] {
        self.board.cards()
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn hand_number(&self) -> usize {
        self.hand
    }
    /// players still holding cards
    pub fn unfolded(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_folded())
    }
    /// players who can still put chips in
    pub fn live(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_live())
    }
    pub fn seat(&self, offset: usize) -> usize {
        (self.button + offset) % self.n()
    }

    /// Starts the next hand. Players without chips sit it out folded.
    pub fn reset_for_new_hand(&mut self) {
        self.hand += 1;
        self.board.clear();
        self.deck = Deck::new();
        self.current_bet = 0;
        self.pot = 0;
        for player in self.players.iter_mut() {
            player.reset_for_new_hand();
            if player.stack() == 0 {
                player.fold();
            }
        }
    }
    pub fn reset_for_new_street(&mut self) {
        self.current_bet = 0;
        for player in self.players.iter_mut() {
            player.reset_for_new_street();
        }
    }
    pub fn advance_button(&mut self) {
        self.button = (self.button + 1) % self.n();
    }

    /// Small blind left of the button, big blind left of that, each capped
    /// by the poster's stack. The larger posted blind becomes the bet to match.
    pub fn post_blinds(&mut self) -> (Chips, Chips) {
        let sb = self.seat(1);
        let bb = self.seat(2);
        let small = self.commit(sb, self.blinds.small);
        let big = self.commit(bb, self.blinds.big);
        self.current_bet = std::cmp::max(small, big);
        log::debug!("P{} posts small blind {}, P{} posts big blind {}", sb, small, bb, big);
        (small, big)
    }
    /// Shuffles a fresh deck and deals two cards to every seated player.
    pub fn deal_hole_cards<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck = Deck::shuffled(rng);
        for player in self.players.iter_mut() {
            player.receive(self.deck.hole());
        }
    }
    /// Turns over the community cards for `street`.
    pub fn reveal(&mut self, street: Street) -> Vec<Card> {
        let cards = self.deck.deal(street.n_revealed());
        self.board.extend(cards.clone());
        cards
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Moves up to `amount` of a player's stack into the pot.
    pub fn commit(&mut self, id: PlayerId, amount: Chips) -> Chips {
        let moved = self.players[id].commit(amount);
        self.pot += moved;
        moved
    }
    pub fn fold(&mut self, id: PlayerId) {
        self.players[id].fold();
    }
    pub fn set_current_bet(&mut self, bet: Chips) {
        self.current_bet = bet;
    }
    /// Empties the pot, returning what it held.
    pub fn take_pot(&mut self) -> Chips {
        std::mem::take(&mut self.pot)
    }
    pub fn award(&mut self, id: PlayerId, amount: Chips) {
        self.players[id].win(amount);
    }

    /// The decision context for player `id`.
    pub fn spot(&self, id: PlayerId) -> Spot {
        let player = self.player(id);
        Spot {
            street: self.board.street(),
            community: self.community().to_vec(),
            current_bet: self.current_bet,
            to_call: player.to_call(self.current_bet),
            stack: player.stack(),
            pot: self.pot,
            position: Position::from_seat(id, self.button, self.n()),
            opponents: self.unfolded().filter(|p| p.id() != id).count(),
            blinds: self.blinds,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "hand {:<5} button {:<3} pot {}", self.hand, self.button, self.pot)?;
        writeln!(f, "board {}", self.board)?;
        for player in self.players.iter() {
            writeln!(f, "{}", player)?;
        }
        Ok(())
    }
}
