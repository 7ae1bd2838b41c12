use crate::error::{InputError, SessionError};

use super::board::{Board, GameOutcome};
use super::player::{Player, PlayerId, PlayerName, Seats};

/// Front-end hooks the blocking turn protocol calls into.
pub trait TurnIo {
    /// Show the board before asking `active` for a column.
    fn show_board(&mut self, board: &Board, active: &Player) -> Result<(), SessionError>;

    /// Ask `player` for a column, as raw text.
    fn request_column(&mut self, player: &Player) -> Result<String, SessionError>;

    /// Tell `player` why their last choice was refused.
    fn reject_column(&mut self, player: &Player, reason: InputError) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// The choice was refused; the same player should choose again.
    Rejected(InputError),
    GameOver,
}

/// A chip that was accepted and placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: PlayerId,
    /// 1-based column number.
    pub column: usize,
    /// 0-based row, counted from the bottom.
    pub row: usize,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult<'a> {
    Winner(&'a Player),
    Draw,
}

/// Turn controller: two identified players taking alternating turns on one
/// board. Player one opens every round.
#[derive(Debug, Clone)]
pub struct Game {
    seats: Seats,
    board: Board,
    active: PlayerId,
    round: u32,
}

impl Game {
    pub fn new(player_one: PlayerName, player_two: PlayerName) -> Self {
        Game {
            seats: Seats::new(player_one, player_two),
            board: Board::new(),
            active: PlayerId::One,
            round: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        self.seats.get(id)
    }

    /// The player whose turn it is, or who made the final move once the
    /// game is over.
    pub fn active_player(&self) -> &Player {
        self.seats.get(self.active)
    }

    /// 1-based number of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Final result, `None` while the game is in progress.
    pub fn result(&self) -> Option<GameResult<'_>> {
        match self.outcome() {
            GameOutcome::InProgress => None,
            GameOutcome::Win(id) => Some(GameResult::Winner(self.player(id))),
            GameOutcome::Draw => Some(GameResult::Draw),
        }
    }

    /// Validate and apply one column choice for the active player.
    ///
    /// Turns pass to the other player only while the game is still going.
    pub fn submit_column(&mut self, raw: &str) -> Result<Placement, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        let player = self.active;
        let column = self
            .board
            .check_column(raw)
            .into_result()
            .map_err(TurnError::Rejected)?;
        let row = self
            .board
            .drop_chip(column, player)
            .map_err(TurnError::Rejected)?;

        let outcome = self.board.outcome();
        tracing::debug!(player = %player, column, row, round = self.round, "chip dropped");

        if !outcome.is_terminal() {
            if player == PlayerId::Two {
                self.round += 1;
            }
            self.active = player.other();
        }

        Ok(Placement {
            player,
            column,
            row,
            outcome,
        })
    }

    /// Run one turn for the active player, asking again until a column is
    /// accepted.
    pub fn play_turn<T: TurnIo>(&mut self, io: &mut T) -> Result<Placement, SessionError> {
        loop {
            io.show_board(&self.board, self.active_player())?;
            let raw = io.request_column(self.active_player())?;

            match self.submit_column(&raw) {
                Ok(placement) => return Ok(placement),
                Err(TurnError::Rejected(reason)) => {
                    tracing::debug!(player = %self.active, input = %raw.trim(), %reason, "column rejected");
                    io.reject_column(self.active_player(), reason)?;
                }
                Err(TurnError::GameOver) => return Err(SessionError::GameOver),
            }
        }
    }

    /// Player one moves, then player two unless player one just ended the
    /// game.
    pub fn play_round<T: TurnIo>(&mut self, io: &mut T) -> Result<GameOutcome, SessionError> {
        let first = self.play_turn(io)?;
        if first.outcome.is_terminal() {
            return Ok(first.outcome);
        }
        Ok(self.play_turn(io)?.outcome)
    }

    /// Play rounds until the board reports a win or a draw.
    pub fn play<T: TurnIo>(&mut self, io: &mut T) -> Result<GameResult<'_>, SessionError> {
        while !self.is_over() {
            self.play_round(io)?;
        }

        match self.outcome() {
            GameOutcome::Win(id) => {
                tracing::info!(winner = self.player(id).name(), rounds = self.round, "game won");
                Ok(GameResult::Winner(self.player(id)))
            }
            _ => {
                tracing::info!(rounds = self.round, "game drawn");
                Ok(GameResult::Draw)
            }
        }
    }
}
