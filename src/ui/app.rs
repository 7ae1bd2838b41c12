use crate::config::DisplayConfig;
use crate::game::{Game, GameResult, PlayerId, PlayerName, TurnError, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// What the screen is currently asking for.
#[derive(Debug, Clone)]
pub enum Phase {
    /// Typing the name for `seat`; `first` holds player one's name once given.
    Naming {
        seat: PlayerId,
        input: String,
        first: Option<PlayerName>,
    },
    Playing {
        game: Game,
        selected_column: usize,
    },
    Finished {
        game: Game,
    },
}

impl Phase {
    fn start() -> Self {
        Phase::Naming {
            seat: PlayerId::One,
            input: String::new(),
            first: None,
        }
    }
}

pub struct App {
    phase: Phase,
    offer_replay: bool,
    display: DisplayConfig,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(offer_replay: bool, display: DisplayConfig) -> Self {
        App {
            phase: Phase::start(),
            offer_replay,
            display,
            should_quit: false,
            message: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn offer_replay(&self) -> bool {
        self.offer_replay
    }

    /// Glyphs for the board cells.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        let phase = std::mem::replace(&mut self.phase, Phase::start());
        self.phase = match phase {
            Phase::Naming { seat, input, first } => self.handle_naming_key(key, seat, input, first),
            Phase::Playing {
                game,
                selected_column,
            } => self.handle_playing_key(key, game, selected_column),
            Phase::Finished { game } => self.handle_finished_key(key, game),
        };
    }

    fn handle_naming_key(
        &mut self,
        key: KeyEvent,
        seat: PlayerId,
        mut input: String,
        first: Option<PlayerName>,
    ) -> Phase {
        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => match PlayerName::parse(&input) {
                Ok(name) => {
                    self.message = None;
                    return match (seat, first) {
                        (PlayerId::Two, Some(player_one)) => {
                            tracing::info!(player_one = %player_one, player_two = %name, "game started");
                            Phase::Playing {
                                game: Game::new(player_one, name),
                                selected_column: COLS / 2,
                            }
                        }
                        _ => Phase::Naming {
                            seat: PlayerId::Two,
                            input: String::new(),
                            first: Some(name),
                        },
                    };
                }
                Err(err) => self.message = Some(err.to_string()),
            },
            _ => {}
        }
        Phase::Naming { seat, input, first }
    }

    fn handle_playing_key(&mut self, key: KeyEvent, mut game: Game, mut selected: usize) -> Phase {
        let raw = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Left => {
                selected = selected.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if selected + 1 < COLS {
                    selected += 1;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some((selected + 1).to_string()),
            KeyCode::Char(c) if c.is_ascii_digit() => Some(c.to_string()),
            _ => None,
        };

        let Some(raw) = raw else {
            return Phase::Playing {
                game,
                selected_column: selected,
            };
        };

        match game.submit_column(&raw) {
            Ok(placement) => {
                selected = placement.column - 1;
                self.message = None;
                if placement.outcome.is_terminal() {
                    self.message = Some(result_message(&game));
                    return Phase::Finished { game };
                }
            }
            Err(TurnError::Rejected(reason)) => {
                tracing::debug!(input = %raw, %reason, "column rejected");
                self.message = Some(reason.to_string());
            }
            Err(TurnError::GameOver) => {
                self.message = Some(result_message(&game));
                return Phase::Finished { game };
            }
        }

        Phase::Playing {
            game,
            selected_column: selected,
        }
    }

    fn handle_finished_key(&mut self, key: KeyEvent, game: Game) -> Phase {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') if self.offer_replay => {
                self.message = Some("New game started!".to_string());
                Phase::start()
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Enter => {
                self.should_quit = true;
                Phase::Finished { game }
            }
            _ => Phase::Finished { game },
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

pub(crate) fn result_message(game: &Game) -> String {
    match game.result() {
        Some(GameResult::Winner(player)) => format!("{} is the winner!", player.name()),
        Some(GameResult::Draw) => "It's a draw!".to_string(),
        None => String::new(),
    }
}
