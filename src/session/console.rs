use std::io::{BufRead, Write};

use crate::config::DisplayConfig;
use crate::error::{InputError, SessionError};
use crate::game::{Board, Game, GameResult, Player, PlayerId, PlayerName, TurnIo};

use super::render::board_to_text;

/// Line-oriented front end over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Console {
            input,
            output,
            display,
        }
    }

    /// Play games until the players decline a new one, returns how many
    /// games were finished.
    pub fn run(&mut self, offer_replay: bool) -> Result<u32, SessionError> {
        let mut games = 0;
        loop {
            self.play_game()?;
            games += 1;

            if !offer_replay || !self.ask_replay()? {
                break;
            }
        }

        writeln!(self.output, "\nHave a nice day!")?;
        Ok(games)
    }

    /// Identify both players, then play one game to its end.
    pub fn play_game(&mut self) -> Result<(), SessionError> {
        let player_one = self.ask_name(PlayerId::One)?;
        let player_two = self.ask_name(PlayerId::Two)?;
        tracing::info!(%player_one, %player_two, "game started");

        let mut game = Game::new(player_one, player_two);
        game.play(self)?;

        self.print_board(game.board())?;
        match game.result() {
            Some(GameResult::Winner(player)) => {
                writeln!(self.output, "\n{} is the winner!", player.name())?
            }
            _ => writeln!(self.output, "\nIt's a draw!")?,
        }
        Ok(())
    }

    /// Ask for a player's name until a non-blank one is given.
    pub fn ask_name(&mut self, id: PlayerId) -> Result<PlayerName, SessionError> {
        loop {
            writeln!(self.output, "What's player {id} name?")?;
            let line = self.read_line()?;
            match PlayerName::parse(&line) {
                Ok(name) => return Ok(name),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// `true` only for an explicit `y`. Closed input counts as no.
    pub fn ask_replay(&mut self) -> Result<bool, SessionError> {
        writeln!(
            self.output,
            "\nWould you like to play a new game? Type 'y' to start a new game!"
        )?;
        match self.read_line() {
            Ok(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
            Err(SessionError::InputClosed) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn print_board(&mut self, board: &Board) -> Result<(), SessionError> {
        writeln!(self.output, "\n{}", board_to_text(board, &self.display))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        // Raw bytes, so a line that is not UTF-8 is refused by the prompt
        // instead of failing the read.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> TurnIo for Console<R, W> {
    fn show_board(&mut self, board: &Board, _active: &Player) -> Result<(), SessionError> {
        self.print_board(board)
    }

    fn request_column(&mut self, player: &Player) -> Result<String, SessionError> {
        writeln!(self.output, "\n{}, pick a column:", player.name())?;
        self.read_line()
    }

    fn reject_column(&mut self, _player: &Player, reason: InputError) -> Result<(), SessionError> {
        writeln!(self.output, "{reason}")?;
        Ok(())
    }
}
