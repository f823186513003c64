//! The Old Maid state machine.
//!
//! ## Phases
//!
//! `Dealing → AwaitingTurn → ResolvingTurn → (AwaitingTurn | Eliminating | Concluded)`
//!
//! Dealing happens once in [`OldMaid::deal`]. Each call to
//! [`OldMaid::play_turn`] resolves one turn completely: the draw, the
//! drawer's pair removal, any eliminations and the loss check. Only
//! `AwaitingTurn` and `Concluded` are observable between calls.
//!
//! ## Ending
//!
//! The game ends when exactly two players remain after a turn in which
//! nobody ran out of cards: the one holding the joker loses. If
//! eliminations leave a single player, that player (who must hold the
//! joker) loses. A cancelled prompt ends the game as `Aborted`.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::events::{GameEvent, HandSummary, PlayerRef, TurnObserver};
use super::input::{parse_choice, DrawPrompt, TurnInput};
use crate::cards::{deal, shuffled_deck, Card, Hand};
use crate::core::error::GameError;
use crate::core::player::{Controller, Player, PlayerId};
use crate::core::rng::{GameRng, RandomSource};

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The last joker holder.
    Loser(PlayerRef),
    /// The human cancelled; no loser was decided.
    Aborted,
}

impl Outcome {
    /// The losing player, if the game was resolved.
    #[must_use]
    pub fn loser(&self) -> Option<&PlayerRef> {
        match self {
            Outcome::Loser(player) => Some(player),
            Outcome::Aborted => None,
        }
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted)
    }
}

/// Phase visible between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingTurn,
    Concluded(Outcome),
}

/// What one call to `play_turn` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResolution {
    /// A card moved and play passes to the next player.
    Continued,
    /// These players ran out of cards; play continues.
    Eliminated(Vec<PlayerRef>),
    /// The game is over (possibly already was).
    Concluded(Outcome),
}

/// One game from deal to resolution.
///
/// Generic over the randomness source so tests can replay exact deals and
/// computer draws.
#[derive(Clone, Debug)]
pub struct OldMaid<R: RandomSource = GameRng> {
    /// Active roster in turn order. Every member holds at least one card.
    roster: Vec<Player>,
    /// Position in `roster` of the player who acts next.
    turn_index: usize,
    phase: Phase,
    /// Turns started so far.
    turn_number: u32,
    /// Players who ran out of cards, in finishing order.
    finished: Vec<PlayerRef>,
    /// Every pair discarded so far, initial deal included.
    discarded: Vec<Card>,
    rng: R,
}

impl<R: RandomSource> OldMaid<R> {
    /// Shuffle a fresh deck, deal it round-robin to `players` and discard
    /// the initial pairs.
    ///
    /// Any hands the players already hold are replaced. The human takes the
    /// first turn.
    pub fn deal(mut players: Vec<Player>, mut rng: R) -> Self {
        let deck = shuffled_deck(&mut rng);

        let mut hands = vec![Hand::new(); players.len()];
        deal(deck, &mut hands);
        for (player, hand) in players.iter_mut().zip(hands) {
            *player.hand_mut() = hand;
        }

        let game = Self::from_roster(players, rng);
        debug!(
            "dealt to {} players, {} cards paired off",
            game.roster.len() + game.finished.len(),
            game.discarded.len()
        );
        game
    }

    /// Start from players that already hold their cards.
    ///
    /// Initial pairs are discarded and anyone left empty-handed finishes
    /// straight away. The human takes the first turn, or the first seat if
    /// there is no human left.
    pub fn from_roster(players: Vec<Player>, rng: R) -> Self {
        let mut game = Self {
            roster: players,
            turn_index: 0,
            phase: Phase::AwaitingTurn,
            turn_number: 0,
            finished: Vec::new(),
            discarded: Vec::new(),
            rng,
        };

        for player in &mut game.roster {
            game.discarded.extend(player.remove_pairs());
        }
        let (empty, holding): (Vec<_>, Vec<_>) = std::mem::take(&mut game.roster)
            .into_iter()
            .partition(Player::hand_is_empty);
        for player in &empty {
            info!("{} finished on the deal", player.name());
        }
        game.finished.extend(empty.iter().map(PlayerRef::from));
        game.roster = holding;

        game.turn_index = game.roster.iter().position(Player::is_human).unwrap_or(0);
        if game.roster.len() < 2 {
            game.settle_last_player();
        }
        game
    }

    /// Active roster in turn order.
    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Look up an active player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The outcome once the game has concluded.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Concluded(outcome) => Some(outcome),
            Phase::AwaitingTurn => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Concluded(_))
    }

    /// Position in the roster of the player who acts next.
    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// The player who acts next, while the game is running.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        if self.is_over() {
            return None;
        }
        self.roster.get(self.turn_index)
    }

    /// The player the active player will draw from.
    #[must_use]
    pub fn draw_target(&self) -> Option<&Player> {
        if self.is_over() || self.roster.is_empty() {
            return None;
        }
        self.roster.get(self.next_index(self.turn_index))
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Players who have run out of cards, in finishing order.
    #[must_use]
    pub fn finished(&self) -> &[PlayerRef] {
        &self.finished
    }

    /// Every card discarded in pairs so far.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Cards still in play across the roster.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.roster.iter().map(Player::hand_size).sum()
    }

    /// Active players currently holding the joker.
    pub fn joker_holders(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter().filter(|p| p.has_joker())
    }

    /// Hand summaries for every active player.
    #[must_use]
    pub fn summaries(&self) -> Vec<HandSummary> {
        self.roster.iter().map(HandSummary::of).collect()
    }

    /// The randomness source, for inspecting seeds or scripted calls.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Announce the dealt table.
    pub fn announce_start<O: TurnObserver + ?Sized>(&self, observer: &mut O) {
        observer.observe(&GameEvent::Started {
            hands: self.summaries(),
            finished: self.finished.clone(),
        });
        if let Some(outcome) = self.outcome() {
            observer.observe(&GameEvent::Concluded(outcome.clone()));
        }
    }

    /// Play turns until the game concludes.
    pub fn run<I, O>(&mut self, input: &mut I, observer: &mut O) -> Result<Outcome, GameError>
    where
        I: TurnInput + ?Sized,
        O: TurnObserver + ?Sized,
    {
        if self.turn_number == 0 {
            self.announce_start(observer);
        }
        loop {
            if let TurnResolution::Concluded(outcome) = self.play_turn(input, observer)? {
                return Ok(outcome);
            }
        }
    }

    /// Resolve one complete turn.
    ///
    /// On a concluded game this does nothing and returns the outcome.
    /// `OutOfRange` can only come back if a draw index escaped validation.
    pub fn play_turn<I, O>(
        &mut self,
        input: &mut I,
        observer: &mut O,
    ) -> Result<TurnResolution, GameError>
    where
        I: TurnInput + ?Sized,
        O: TurnObserver + ?Sized,
    {
        if let Some(outcome) = self.outcome() {
            return Ok(TurnResolution::Concluded(outcome.clone()));
        }

        let active = self.turn_index;
        let target = self.next_index(active);
        self.turn_number += 1;
        observer.observe(&GameEvent::TurnStarted {
            turn: self.turn_number,
            active: (&self.roster[active]).into(),
            target: (&self.roster[target]).into(),
            hands: self.summaries(),
        });

        let Some(index) = self.choose_draw(active, target, input, observer) else {
            info!("{} cancelled the game", self.roster[active].name());
            return Ok(TurnResolution::Concluded(self.conclude(Outcome::Aborted, observer)));
        };

        let card = {
            let (drawer, source) = pair_mut(&mut self.roster, active, target);
            drawer.draw_from(source, index)?
        };
        trace!(
            "{} drew {} from {} (position {})",
            self.roster[active].name(),
            card,
            self.roster[target].name(),
            index
        );
        observer.observe(&GameEvent::CardDrawn {
            drawer: (&self.roster[active]).into(),
            source: (&self.roster[target]).into(),
            card,
            revealed: self.roster[active].is_human(),
        });

        let pairs = self.roster[active].remove_pairs();
        if !pairs.is_empty() {
            observer.observe(&GameEvent::PairsDiscarded {
                player: (&self.roster[active]).into(),
                cards: pairs.clone(),
            });
            self.discarded.extend(pairs);
        }

        let emptied: SmallVec<[usize; 2]> = [active, target]
            .into_iter()
            .filter(|&i| self.roster[i].hand_is_empty())
            .collect();
        if !emptied.is_empty() {
            return Ok(self.eliminate(active, &emptied, observer));
        }

        if self.roster.len() == 2 {
            let loser = {
                let mut holders = self.joker_holders();
                match (holders.next(), holders.next()) {
                    (Some(player), None) => Some(PlayerRef::from(player)),
                    _ => None,
                }
            };
            if let Some(loser) = loser {
                let outcome = Outcome::Loser(loser);
                return Ok(TurnResolution::Concluded(self.conclude(outcome, observer)));
            }
        }

        self.turn_index = target;
        Ok(TurnResolution::Continued)
    }

    /// Pick the position to draw from the target's hand.
    ///
    /// `None` means the human cancelled.
    fn choose_draw<I, O>(
        &mut self,
        active: usize,
        target: usize,
        input: &mut I,
        observer: &mut O,
    ) -> Option<usize>
    where
        I: TurnInput + ?Sized,
        O: TurnObserver + ?Sized,
    {
        let size = self.roster[target].hand_size();
        match self.roster[active].controller() {
            Controller::Computer => Some(self.rng.next_index(size)),
            Controller::Human => {
                let prompt = DrawPrompt {
                    drawer: (&self.roster[active]).into(),
                    target: (&self.roster[target]).into(),
                    target_hand_size: size,
                };
                loop {
                    let text = input.choose_card(&prompt)?;
                    match parse_choice(&text, size) {
                        Ok(index) => return Some(index),
                        Err(err) => {
                            warn!("rejected choice from {}: {}", prompt.drawer, err);
                            observer.observe(&GameEvent::InvalidChoice {
                                input: text,
                                reason: err.to_string(),
                            });
                        }
                    }
                }
            }
        }
    }

    /// Remove the players at `emptied` and hand the turn to whoever follows
    /// `active` among the survivors.
    fn eliminate<O>(&mut self, active: usize, emptied: &[usize], observer: &mut O) -> TurnResolution
    where
        O: TurnObserver + ?Sized,
    {
        let len = self.roster.len();
        let next_id = (1..=len)
            .map(|step| (active + step) % len)
            .find(|i| !emptied.contains(i))
            .map(|i| self.roster[i].id());

        let mut gone = Vec::with_capacity(emptied.len());
        for &i in emptied {
            let player = PlayerRef::from(&self.roster[i]);
            info!("{} ran out of cards", player);
            observer.observe(&GameEvent::PlayerFinished {
                player: player.clone(),
            });
            gone.push(player);
        }
        self.roster.retain(|p| !gone.iter().any(|g| g.id == p.id()));
        self.finished.extend(gone.iter().cloned());

        self.turn_index = next_id
            .and_then(|id| self.roster.iter().position(|p| p.id() == id))
            .unwrap_or(0);

        if self.roster.len() < 2 {
            let outcome = self.settle_last_player();
            observer.observe(&GameEvent::Concluded(outcome.clone()));
            return TurnResolution::Concluded(outcome);
        }
        TurnResolution::Eliminated(gone)
    }

    /// Conclude a game that has at most one player left.
    fn settle_last_player(&mut self) -> Outcome {
        debug_assert!(self.roster.len() <= 1);
        let outcome = match self.roster.first() {
            Some(last) => Outcome::Loser(last.into()),
            None => {
                warn!("no players left holding cards");
                Outcome::Aborted
            }
        };
        if let Outcome::Loser(loser) = &outcome {
            info!("{} is left holding the joker", loser);
        }
        self.turn_index = 0;
        self.phase = Phase::Concluded(outcome.clone());
        outcome
    }

    fn conclude<O>(&mut self, outcome: Outcome, observer: &mut O) -> Outcome
    where
        O: TurnObserver + ?Sized,
    {
        match &outcome {
            Outcome::Loser(loser) => info!("{} loses holding the joker", loser),
            Outcome::Aborted => info!("game aborted after {} turns", self.turn_number),
        }
        self.phase = Phase::Concluded(outcome.clone());
        observer.observe(&GameEvent::Concluded(outcome.clone()));
        outcome
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.roster.len()
    }
}

/// Borrow two distinct roster entries mutably.
fn pair_mut(roster: &mut [Player], a: usize, b: usize) -> (&mut Player, &mut Player) {
    assert_ne!(a, b, "a player cannot draw from themselves");
    if a < b {
        let (left, right) = roster.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = roster.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit, DECK_SIZE};
    use crate::core::rng::ScriptedRng;
    use crate::rules::events::{EventLog, Silent};
    use crate::rules::input::ScriptedInput;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::suited(suit, Rank::new(rank).unwrap())
    }

    fn player(id: u8, name: &str, controller: Controller, cards: &[Card]) -> Player {
        Player::new(PlayerId::new(id), name, controller).with_hand(cards.iter().copied().collect())
    }

    fn table() -> Vec<Player> {
        vec![
            Player::new(PlayerId::new(0), "You", Controller::Human),
            Player::new(PlayerId::new(1), "CPU1", Controller::Computer),
            Player::new(PlayerId::new(2), "CPU2", Controller::Computer),
            Player::new(PlayerId::new(3), "CPU3", Controller::Computer),
        ]
    }

    #[test]
    fn test_deal_conserves_cards() {
        let game = OldMaid::deal(table(), GameRng::new(42));

        assert_eq!(game.cards_in_hands() + game.discarded().len(), DECK_SIZE);
        assert_eq!(game.discarded().len() % 2, 0);
        assert_eq!(game.joker_holders().count(), 1);
        assert_eq!(game.phase(), &Phase::AwaitingTurn);
        assert_eq!(game.turn_number(), 0);

        for p in game.roster() {
            for rank in Rank::all() {
                assert!(p.hand().count_rank(rank) <= 1);
            }
        }
    }

    #[test]
    fn test_human_moves_first() {
        let mut players = table();
        players.rotate_left(2);
        let game = OldMaid::deal(players, GameRng::new(5));

        assert!(game.active_player().unwrap().is_human());
        assert_eq!(game.draw_target().unwrap().name(), "CPU1");
    }

    #[test]
    fn test_from_roster_discards_pairs_and_finishes_empty_hands() {
        let players = vec![
            player(0, "A", Controller::Human, &[card(2, Suit::Hearts), card(2, Suit::Spades)]),
            player(1, "B", Controller::Computer, &[card(3, Suit::Hearts), Card::Joker]),
            player(2, "C", Controller::Computer, &[card(3, Suit::Clubs)]),
        ];
        let game = OldMaid::from_roster(players, ScriptedRng::default());

        assert_eq!(game.roster().len(), 2);
        assert_eq!(game.finished().len(), 1);
        assert_eq!(game.finished()[0].name, "A");
        assert_eq!(game.discarded().len(), 2);
        // No human left, so the first remaining seat starts.
        assert_eq!(game.active_player().unwrap().name(), "B");
    }

    #[test]
    fn test_human_draw_uses_chosen_index() {
        let players = vec![
            player(0, "You", Controller::Human, &[card(4, Suit::Hearts)]),
            player(1, "CPU1", Controller::Computer, &[card(9, Suit::Clubs), card(10, Suit::Clubs)]),
            player(2, "CPU2", Controller::Computer, &[Card::Joker, card(4, Suit::Spades)]),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::default());
        let mut input = ScriptedInput::new([Some("1")]);
        let mut log = EventLog::new();

        let resolution = game.play_turn(&mut input, &mut log).unwrap();

        assert_eq!(resolution, TurnResolution::Continued);
        assert_eq!(game.roster()[0].hand().get(1), Some(card(10, Suit::Clubs)));
        assert_eq!(game.roster()[1].hand_size(), 1);
        assert_eq!(game.turn_index(), 1);
        assert_eq!(input.prompts()[0].target_hand_size, 2);
        let ten_of_clubs = card(10, Suit::Clubs);
        assert!(log.events.iter().any(|e| matches!(
            e,
            GameEvent::CardDrawn { revealed: true, card, .. } if *card == ten_of_clubs
        )));
    }

    #[test]
    fn test_invalid_input_is_reprompted() {
        let players = vec![
            player(0, "You", Controller::Human, &[card(4, Suit::Hearts)]),
            player(1, "CPU1", Controller::Computer, &[card(9, Suit::Clubs), card(10, Suit::Clubs)]),
            player(2, "CPU2", Controller::Computer, &[Card::Joker]),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::default());
        let mut input = ScriptedInput::new([Some("x"), Some("5"), Some("0")]);
        let mut log = EventLog::new();

        game.play_turn(&mut input, &mut log).unwrap();

        assert_eq!(input.prompts().len(), 3);
        let rejected = log
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::InvalidChoice { .. }))
            .count();
        assert_eq!(rejected, 2);
        assert_eq!(game.roster()[0].hand().get(1), Some(card(9, Suit::Clubs)));
    }

    #[test]
    fn test_cancel_aborts_without_moving_cards() {
        let mut game = OldMaid::deal(table(), GameRng::new(9));
        let before: Vec<_> = game.roster().to_vec();
        let mut input = ScriptedInput::new([None::<String>]);
        let mut log = EventLog::new();

        let resolution = game.play_turn(&mut input, &mut log).unwrap();

        assert_eq!(resolution, TurnResolution::Concluded(Outcome::Aborted));
        assert_eq!(game.outcome(), Some(&Outcome::Aborted));
        assert_eq!(game.roster(), before.as_slice());
        assert!(matches!(log.events.last(), Some(GameEvent::Concluded(Outcome::Aborted))));

        // Further turns are no-ops.
        assert_eq!(
            game.play_turn(&mut input, &mut Silent).unwrap(),
            TurnResolution::Concluded(Outcome::Aborted)
        );
        assert_eq!(game.turn_number(), 1);
    }

    #[test]
    fn test_computer_draw_uses_rng() {
        let players = vec![
            player(0, "You", Controller::Human, &[card(8, Suit::Hearts)]),
            player(1, "CPU1", Controller::Computer, &[card(5, Suit::Clubs)]),
            player(
                2,
                "CPU2",
                Controller::Computer,
                &[card(6, Suit::Clubs), Card::Joker, card(7, Suit::Clubs)],
            ),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::new(vec![2]));
        game.turn_index = 1;

        game.play_turn(&mut ScriptedInput::default(), &mut Silent).unwrap();

        assert_eq!(game.rng().calls(), 1);
        assert_eq!(game.roster()[1].hand().get(1), Some(card(7, Suit::Clubs)));
        assert_eq!(game.roster()[2].hand_size(), 2);
    }

    #[test]
    fn test_active_player_eliminated_after_pair() {
        let players = vec![
            player(0, "You", Controller::Human, &[card(4, Suit::Hearts), card(11, Suit::Hearts)]),
            player(1, "CPU1", Controller::Computer, &[card(9, Suit::Clubs)]),
            player(2, "CPU2", Controller::Computer, &[card(9, Suit::Hearts), Card::Joker]),
            player(
                3,
                "CPU3",
                Controller::Computer,
                &[card(4, Suit::Spades), card(11, Suit::Clubs)],
            ),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::new(vec![0]));
        game.turn_index = 1;
        let mut log = EventLog::new();

        let resolution = game.play_turn(&mut ScriptedInput::default(), &mut log).unwrap();

        let cpu1 = PlayerRef { id: PlayerId::new(1), name: "CPU1".to_string() };
        assert_eq!(resolution, TurnResolution::Eliminated(vec![cpu1.clone()]));
        assert_eq!(game.roster().len(), 3);
        assert!(game.player(PlayerId::new(1)).is_none());
        assert_eq!(game.finished(), &[cpu1]);
        // CPU2 followed CPU1, so CPU2 is up next.
        assert_eq!(game.active_player().unwrap().name(), "CPU2");
        assert!(game.turn_index() < game.roster().len());
    }

    #[test]
    fn test_elimination_at_end_of_roster_wraps() {
        let players = vec![
            player(0, "You", Controller::Human, &[card(4, Suit::Hearts)]),
            player(1, "CPU1", Controller::Computer, &[card(9, Suit::Clubs), Card::Joker]),
            player(2, "CPU2", Controller::Computer, &[card(2, Suit::Clubs), card(6, Suit::Spades)]),
            player(3, "CPU3", Controller::Computer, &[card(4, Suit::Spades)]),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::new(vec![0]));
        game.turn_index = 3;

        let resolution = game.play_turn(&mut ScriptedInput::default(), &mut Silent).unwrap();

        // CPU3 pairs its 4 with the human's 4; both hands are now empty.
        assert!(matches!(resolution, TurnResolution::Eliminated(ref gone) if gone.len() == 2));
        assert_eq!(game.roster().len(), 2);
        assert_eq!(game.turn_index(), 0);
        assert_eq!(game.active_player().unwrap().name(), "CPU1");
    }

    #[test]
    fn test_two_player_loss() {
        // B draws A's only non-joker card without making a pair.
        let players = vec![
            player(0, "A", Controller::Human, &[Card::Joker, card(3, Suit::Hearts)]),
            player(1, "B", Controller::Computer, &[card(7, Suit::Clubs)]),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::new(vec![1]));
        game.turn_index = 1;
        let mut log = EventLog::new();

        let resolution = game.play_turn(&mut ScriptedInput::default(), &mut log).unwrap();

        let a = PlayerRef { id: PlayerId::new(0), name: "A".to_string() };
        assert_eq!(resolution, TurnResolution::Concluded(Outcome::Loser(a.clone())));
        assert_eq!(game.outcome().and_then(Outcome::loser), Some(&a));
        assert_eq!(game.roster()[0].hand().iter().collect::<Vec<_>>(), vec![Card::Joker]);
        assert_eq!(game.roster()[1].hand_size(), 2);
        assert!(matches!(log.events.last(), Some(GameEvent::Concluded(Outcome::Loser(_)))));
    }

    #[test]
    fn test_last_player_standing_loses() {
        let players = vec![
            player(0, "A", Controller::Human, &[Card::Joker, card(3, Suit::Hearts)]),
            player(1, "B", Controller::Computer, &[card(3, Suit::Clubs)]),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::new(vec![1]));
        game.turn_index = 1;

        let resolution = game.play_turn(&mut ScriptedInput::default(), &mut Silent).unwrap();

        assert!(matches!(
            resolution,
            TurnResolution::Concluded(Outcome::Loser(ref p)) if p.name == "A"
        ));
        assert_eq!(game.roster().len(), 1);
        assert_eq!(game.finished()[0].name, "B");
    }

    #[test]
    fn test_draw_target_emptied_is_eliminated() {
        let players = vec![
            player(0, "You", Controller::Human, &[card(5, Suit::Hearts)]),
            player(1, "CPU1", Controller::Computer, &[card(12, Suit::Clubs)]),
            player(2, "CPU2", Controller::Computer, &[Card::Joker, card(8, Suit::Clubs)]),
        ];
        let mut game = OldMaid::from_roster(players, ScriptedRng::default());
        let mut input = ScriptedInput::new([Some("0")]);

        let resolution = game.play_turn(&mut input, &mut Silent).unwrap();

        assert!(matches!(
            resolution,
            TurnResolution::Eliminated(ref gone) if gone[0].name == "CPU1"
        ));
        assert_eq!(game.roster().len(), 2);
        assert_eq!(game.active_player().unwrap().name(), "CPU2");
    }

    #[test]
    fn test_run_seeded_game_to_completion() {
        let mut game = OldMaid::deal(table(), GameRng::new(2024));
        let mut input = ScriptedInput::repeating("0", 10_000);
        let mut log = EventLog::new();

        let outcome = game.run(&mut input, &mut log).unwrap();

        let loser = outcome.loser().expect("game should resolve");
        assert!(game.player(loser.id).unwrap().has_joker());
        assert_eq!(game.cards_in_hands() + game.discarded().len(), DECK_SIZE);
        assert!(matches!(log.events.first(), Some(GameEvent::Started { .. })));
        assert_eq!(log.turns() as u32, game.turn_number());
    }

    #[test]
    fn test_pair_mut() {
        let mut roster = table();
        let (a, b) = pair_mut(&mut roster, 3, 0);
        assert_eq!(a.name(), "CPU3");
        assert_eq!(b.name(), "You");
    }
}
