//! The race session: players, board, dice and turn order.
//!
//! Two ways to advance the game:
//!
//! - `play_one_round`: every seat takes one turn, in seat order.
//! - `play_round_single_step`: one seat per call, skipping seats that are
//!   out of fuel, with the turn cursor carried across calls.
//!
//! The game is over as soon as somebody reaches the finish square, or when
//! every player has run out of fuel.

use im::Vector;
use smallvec::SmallVec;

use super::player::{Player, TokenColour};
use super::snapshot::GameSnapshot;
use crate::board::{Board, Square};
use crate::core::{
    validate_player_count, Die, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result, Roll,
    TurnRecord, SEAT_NAMES,
};
use crate::rules::{GameOutcome, Phase};

/// One game session.
///
/// All state lives here; cloning is cheap because the turn history is a
/// persistent vector.
///
/// ## Example
///
/// ```
/// use space_race::race::SpaceRaceGame;
///
/// let mut game = SpaceRaceGame::new(3, 42).unwrap();
/// while !game.is_game_complete() {
///     game.play_one_round().unwrap();
/// }
/// let outcome = game.outcome().unwrap();
/// assert!(!outcome.winners.is_empty() || outcome.all_depleted);
/// ```
#[derive(Clone, Debug)]
pub struct SpaceRaceGame<R = Die> {
    board: Board,
    players: PlayerMap<Player>,
    dice: (R, R),
    turn_counter: usize,
    round: u32,
    game_complete: bool,
    all_players_depleted: bool,
    phase: Phase,
    history: Vector<TurnRecord>,
}

impl SpaceRaceGame<Die> {
    /// A session with `player_count` players and dice seeded from `seed`.
    pub fn new(player_count: usize, seed: u64) -> Result<Self> {
        let (die1, die2) = Die::pair(&GameRng::new(seed));
        Self::with_dice(player_count, die1, die2)
    }

    /// A session built from a configuration.
    ///
    /// Without a configured seed the dice are seeded from the OS.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!("dice seed {}", rng.seed());

        let (die1, die2) = Die::pair(&rng);
        Self::with_dice(config.player_count, die1, die2)
    }
}

impl<R: Roll> SpaceRaceGame<R> {
    /// A session with `player_count` players rolling the given dice.
    pub fn with_dice(player_count: usize, die1: R, die2: R) -> Result<Self> {
        let players = seat_players(player_count)?;
        log::info!("new game with {} players", player_count);

        Ok(Self {
            board: Board::set_up(),
            players,
            dice: (die1, die2),
            turn_counter: 0,
            round: 0,
            game_complete: false,
            all_players_depleted: false,
            phase: Phase::Setup,
            history: Vector::new(),
        })
    }

    /// Start a fresh game on the same dice.
    ///
    /// Rebuilds the board and seats `player_count` new players named "One"
    /// to "Six". Fails without touching the session if the count is not 2-6.
    pub fn set_up_players(&mut self, player_count: usize) -> Result<()> {
        let players = seat_players(player_count)?;
        log::info!("new game with {} players", player_count);

        self.board = Board::set_up();
        self.players = players;
        self.turn_counter = 0;
        self.round = 0;
        self.game_complete = false;
        self.all_players_depleted = false;
        self.phase = Phase::Setup;
        self.history = Vector::new();
        Ok(())
    }

    /// Play again: same as [`set_up_players`](Self::set_up_players), the
    /// dice carry on where the last game left them.
    pub fn new_game(&mut self, player_count: usize) -> Result<()> {
        self.set_up_players(player_count)
    }

    /// Every seat takes one turn, in seat order.
    ///
    /// Seats that cannot move still use up their turn. Returns the records
    /// of the round.
    pub fn play_one_round(&mut self) -> Result<SmallVec<[TurnRecord; 6]>> {
        self.ensure_playable()?;
        self.begin_turn();

        let mut records = SmallVec::new();
        for seat in PlayerId::all(self.number_of_players()) {
            records.push(self.take_turn(seat)?);
            self.turn_counter += 1;
        }

        self.check_all_player_fuel();
        self.update_phase();
        Ok(records)
    }

    /// The next seat with fuel takes one turn.
    ///
    /// Seats without power are passed over, except the last seat of the
    /// round, which is always visited.
    pub fn play_round_single_step(&mut self) -> Result<TurnRecord> {
        self.ensure_playable()?;
        self.begin_turn();
        self.check_all_player_fuel();

        let last = self.number_of_players() - 1;
        while self.turn_counter < last && !self.players[seat_at(self.turn_counter)].has_power() {
            log::trace!("{} is out of fuel, skipping", seat_at(self.turn_counter));
            self.turn_counter += 1;
        }

        let record = self.take_turn(seat_at(self.turn_counter))?;
        self.turn_counter += 1;

        self.update_phase();
        Ok(record)
    }

    /// End the game if every player is out of fuel.
    ///
    /// Returns whether everybody is depleted.
    pub fn check_all_player_fuel(&mut self) -> bool {
        let depleted = self.players.values().filter(|p| !p.has_power()).count();

        if depleted == self.number_of_players() {
            if !self.all_players_depleted {
                log::info!("all players are out of fuel");
            }
            self.all_players_depleted = true;
            self.game_complete = true;
            self.phase = Phase::GameOver;
        }

        self.all_players_depleted
    }

    // === Queries ===

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// A single player.
    pub fn player(&self, seat: PlayerId) -> Result<&Player> {
        self.players.get(seat).ok_or(GameError::NoSuchPlayer(seat))
    }

    /// A single player, for presentation tweaks such as the token colour.
    pub fn player_mut(&mut self, seat: PlayerId) -> Result<&mut Player> {
        self.players.get_mut(seat).ok_or(GameError::NoSuchPlayer(seat))
    }

    #[must_use]
    pub fn number_of_players(&self) -> usize {
        self.players.player_count()
    }

    /// Somebody finished or everybody ran dry.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.game_complete
    }

    #[must_use]
    pub fn all_players_depleted(&self) -> bool {
        self.all_players_depleted
    }

    /// Raw turn cursor.
    ///
    /// Equals `number_of_players()` right after the last seat of a round;
    /// it wraps back to 0 when the next turn starts.
    #[must_use]
    pub fn turn_counter(&self) -> usize {
        self.turn_counter
    }

    /// Seat the cursor points at for the next turn, before skipping.
    #[must_use]
    pub fn next_seat(&self) -> PlayerId {
        if self.turn_counter >= self.number_of_players() {
            PlayerId::new(0)
        } else {
            seat_at(self.turn_counter)
        }
    }

    /// Rounds started so far (0 before the first turn).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn square_at(&self, index: usize) -> Result<&Square> {
        self.board.square_at(index)
    }

    /// Every turn taken this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Seats on the finish square.
    #[must_use]
    pub fn winners(&self) -> SmallVec<[PlayerId; 6]> {
        self.players
            .iter()
            .filter(|(_, p)| p.at_finish())
            .map(|(seat, _)| seat)
            .collect()
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.game_complete.then(|| GameOutcome {
            winners: self.winners(),
            all_depleted: self.all_players_depleted,
        })
    }

    /// A serialisable copy of the session state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            turn_counter: self.turn_counter,
            round: self.round,
            phase: self.phase,
            game_complete: self.game_complete,
            all_players_depleted: self.all_players_depleted,
        }
    }

    // === Internals ===

    fn ensure_playable(&self) -> Result<()> {
        if !self.phase.is_playable() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Wrap the cursor at the end of a round.
    fn begin_turn(&mut self) {
        if self.turn_counter >= self.number_of_players() {
            self.turn_counter = 0;
        }
        if self.turn_counter == 0 {
            self.round += 1;
            log::debug!("round {}", self.round);
        }
    }

    fn take_turn(&mut self, seat: PlayerId) -> Result<TurnRecord> {
        let player = self.players.get_mut(seat).ok_or(GameError::NoSuchPlayer(seat))?;
        let movement = player.play(&self.board, &mut self.dice.0, &mut self.dice.1)?;

        if player.at_finish() {
            if !self.game_complete {
                log::info!("{} reached the finish in round {}", player.name(), self.round);
            }
            self.game_complete = true;
        }

        let record = TurnRecord {
            round: self.round,
            player: seat,
            movement,
        };
        self.history.push_back(record);
        Ok(record)
    }

    fn update_phase(&mut self) {
        let round_finished = self.turn_counter >= self.number_of_players();
        self.phase = Phase::after_turn(self.game_complete, round_finished);
    }
}

fn seat_at(index: usize) -> PlayerId {
    PlayerId::new(index as u8)
}

fn seat_players(player_count: usize) -> Result<PlayerMap<Player>> {
    let player_count = validate_player_count(player_count)?;

    PlayerMap::try_new(player_count, |seat| -> Result<Player> {
        let mut player = Player::new(SEAT_NAMES[seat.index()])?;
        player.set_token_colour(Some(TokenColour::for_seat(seat)));
        Ok(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LoadedDie, Move, SkipReason, FINISH_SQUARE, INITIAL_FUEL_AMOUNT};

    fn loaded_game(player_count: usize, a: u8, b: u8) -> SpaceRaceGame<LoadedDie> {
        SpaceRaceGame::with_dice(player_count, LoadedDie::constant(a), LoadedDie::constant(b))
            .unwrap()
    }

    #[test]
    fn test_set_up_players() {
        for count in 2..=6 {
            let game = SpaceRaceGame::new(count, 1).unwrap();

            assert_eq!(game.number_of_players(), count);
            assert_eq!(game.phase(), Phase::Setup);
            assert_eq!(game.turn_counter(), 0);
            assert!(!game.is_game_complete());
            assert!(!game.all_players_depleted());

            for (seat, player) in game.players().iter() {
                assert_eq!(player.name(), SEAT_NAMES[seat.index()]);
                assert_eq!(player.position(), 0);
                assert_eq!(player.fuel(), INITIAL_FUEL_AMOUNT);
                assert!(player.has_power());
                assert!(!player.at_finish());
                assert_eq!(player.token_colour(), Some(TokenColour::for_seat(seat)));
            }
        }
    }

    #[test]
    fn test_rejects_bad_player_count() {
        assert_eq!(SpaceRaceGame::new(1, 1).unwrap_err(), GameError::InvalidPlayerCount(1));
        assert_eq!(SpaceRaceGame::new(7, 1).unwrap_err(), GameError::InvalidPlayerCount(7));

        let mut game = SpaceRaceGame::new(3, 1).unwrap();
        assert_eq!(game.set_up_players(0), Err(GameError::InvalidPlayerCount(0)));
        assert_eq!(game.number_of_players(), 3);
    }

    #[test]
    fn test_play_one_round_visits_every_seat() {
        let mut game = loaded_game(4, 3, 4);

        let records = game.play_one_round().unwrap();

        assert_eq!(records.len(), 4);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.player, PlayerId::new(i as u8));
            assert_eq!(record.round, 1);
        }
        assert_eq!(game.turn_counter(), 4);
        assert_eq!(game.phase(), Phase::RoundComplete);
        assert_eq!(game.round(), 1);
        assert!(game.players().values().all(|p| p.position() == 7));
    }

    #[test]
    fn test_cursor_wraps_at_next_round() {
        let mut game = loaded_game(3, 3, 4);

        game.play_one_round().unwrap();
        assert_eq!(game.turn_counter(), 3);
        assert_eq!(game.next_seat(), PlayerId::new(0));

        game.play_one_round().unwrap();
        assert_eq!(game.turn_counter(), 3);
        assert_eq!(game.round(), 2);
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_finish_ends_game() {
        // 11 per turn: 11, 22, 33, 44, 55 are all ordinary
        let mut game = loaded_game(2, 5, 6);

        for _ in 0..4 {
            game.play_one_round().unwrap();
            assert!(!game.is_game_complete());
        }
        game.play_one_round().unwrap();

        assert!(game.is_game_complete());
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.players().values().all(|p| p.position() == FINISH_SQUARE));

        let outcome = game.outcome().unwrap();
        assert_eq!(outcome.winners.as_slice(), &[PlayerId::new(0), PlayerId::new(1)]);
        assert!(!outcome.all_depleted);

        assert_eq!(game.play_one_round().unwrap_err(), GameError::GameOver);
        assert_eq!(game.play_round_single_step().unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_check_all_player_fuel() {
        let mut game = SpaceRaceGame::new(2, 5).unwrap();

        game.player_mut(PlayerId::new(0)).unwrap().refuel(0);
        assert!(!game.check_all_player_fuel());
        assert!(!game.is_game_complete());

        game.player_mut(PlayerId::new(1)).unwrap().refuel(0);
        assert!(game.check_all_player_fuel());
        assert!(game.all_players_depleted());
        assert!(game.is_game_complete());
        assert_eq!(game.phase(), Phase::GameOver);

        let outcome = game.outcome().unwrap();
        assert!(outcome.all_depleted);
        assert!(outcome.is_draw());
    }

    #[test]
    fn test_single_step_skips_depleted_seat() {
        let mut game = loaded_game(2, 5, 6);
        game.player_mut(PlayerId::new(0)).unwrap().refuel(0);

        let record = game.play_round_single_step().unwrap();
        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(game.turn_counter(), 2);
        assert_eq!(game.phase(), Phase::RoundComplete);

        let record = game.play_round_single_step().unwrap();
        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(game.turn_counter(), 2);

        assert_eq!(game.player(PlayerId::new(0)).unwrap().position(), 0);
        assert_eq!(game.player(PlayerId::new(1)).unwrap().position(), 22);
    }

    #[test]
    fn test_single_step_visits_depleted_last_seat() {
        let mut game = loaded_game(2, 3, 4);
        game.player_mut(PlayerId::new(1)).unwrap().refuel(0);

        let first = game.play_round_single_step().unwrap();
        assert_eq!(first.player, PlayerId::new(0));
        assert_eq!(game.phase(), Phase::Rotating);

        let second = game.play_round_single_step().unwrap();
        assert_eq!(second.player, PlayerId::new(1));
        assert_eq!(second.movement, Move::Skipped(SkipReason::OutOfFuel));
        assert_eq!(game.turn_counter(), 2);
    }

    #[test]
    fn test_set_up_players_resets_session() {
        let mut game = loaded_game(2, 5, 6);
        while !game.is_game_complete() {
            game.play_one_round().unwrap();
        }

        game.set_up_players(5).unwrap();

        assert_eq!(game.number_of_players(), 5);
        assert!(!game.is_game_complete());
        assert!(!game.all_players_depleted());
        assert_eq!(game.turn_counter(), 0);
        assert_eq!(game.round(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.phase(), Phase::Setup);
        assert!(game.outcome().is_none());
    }

    #[test]
    fn test_new_game_after_finish() {
        let mut game = loaded_game(2, 5, 6);
        while !game.is_game_complete() {
            game.play_one_round().unwrap();
        }
        assert_eq!(game.play_one_round().unwrap_err(), GameError::GameOver);

        game.new_game(3).unwrap();

        assert_eq!(game.phase(), Phase::Setup);
        let records = game.play_one_round().unwrap();
        assert_eq!(records.len(), 3);
        assert!(game.players().values().all(|p| p.position() == 11));
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_new_game_rejects_bad_count() {
        let mut game = loaded_game(2, 5, 6);
        game.play_one_round().unwrap();

        assert_eq!(game.new_game(7).unwrap_err(), GameError::InvalidPlayerCount(7));
        assert_eq!(game.number_of_players(), 2);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_player_lookup() {
        let mut game = SpaceRaceGame::new(2, 9).unwrap();
        assert_eq!(game.player(PlayerId::new(1)).unwrap().name(), "Two");
        assert_eq!(
            game.player(PlayerId::new(2)).unwrap_err(),
            GameError::NoSuchPlayer(PlayerId::new(2))
        );
        assert!(game.player_mut(PlayerId::new(6)).is_err());
    }

    #[test]
    fn test_square_at() {
        let game = SpaceRaceGame::new(2, 9).unwrap();
        assert_eq!(game.square_at(2).unwrap().destination(), 22);
        assert_eq!(game.square_at(99).unwrap_err(), GameError::SquareOutOfRange(99));
    }

    #[test]
    fn test_from_config_is_reproducible() {
        let config = GameConfig::new(3).unwrap().with_seed(1234);
        let mut a = SpaceRaceGame::from_config(&config).unwrap();
        let mut b = SpaceRaceGame::from_config(&config).unwrap();

        for _ in 0..3 {
            if a.is_game_complete() {
                break;
            }
            assert_eq!(a.play_one_round().unwrap(), b.play_one_round().unwrap());
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
