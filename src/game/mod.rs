//! Core Connect Four game logic: the board with its win/draw scan, player
//! identities, and the turn controller that alternates the two players.

mod board;
mod player;
mod turn;

pub use board::{Board, Cell, ColumnCheck, GameOutcome, COLS, ROWS, WIN_LENGTH};
pub use player::{Player, PlayerId, PlayerName};
pub use turn::{Game, GameResult, Placement, TurnError, TurnIo};
