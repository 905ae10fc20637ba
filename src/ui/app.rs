use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::ai::{Policy, PolicyKind};
use crate::error::BoardError;
use crate::game::doubles::{ConnectMMock, ConnectMStub};
use crate::game::{BoardConfig, ConnectM, PieceColor};

/// Who controls one side of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
    Greedy,
}

/// Which board implementation the front-end plays on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BoardMode {
    /// The real engine
    Real,
    /// Accepts every move, never finishes
    Stub,
    /// Bottom row only, fixed winner after m moves
    Mock,
}

impl BoardMode {
    pub fn build(self, config: &BoardConfig) -> Result<Box<dyn ConnectM>, BoardError> {
        let BoardConfig { rows, cols, m } = *config;
        Ok(match self {
            BoardMode::Real => Box::new(config.build()?),
            BoardMode::Stub => Box::new(ConnectMStub::new(rows, cols, m)?),
            BoardMode::Mock => Box::new(ConnectMMock::new(rows, cols, m)?),
        })
    }
}

/// Terminal front-end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Pause before a bot moves, so its play can be followed.
    pub bot_delay_ms: u64,
    /// Yellow (moves first)
    pub player1: PlayerKind,
    /// Red
    pub player2: PlayerKind,
    pub mode: BoardMode,
}

impl Default for TuiConfig {
    fn default() -> Self {
        TuiConfig {
            bot_delay_ms: 500,
            player1: PlayerKind::Human,
            player2: PlayerKind::Human,
            mode: BoardMode::Real,
        }
    }
}

struct Seat {
    name: String,
    bot: Option<Box<dyn Policy + Send>>,
}

impl Seat {
    fn new(number: usize, kind: PlayerKind, color: PieceColor) -> Self {
        let (name, bot) = match kind {
            PlayerKind::Human => (format!("Player {number}"), None),
            PlayerKind::Random => (
                format!("Random Bot {number}"),
                Some(PolicyKind::Random.build(color, color.other(), None)),
            ),
            PlayerKind::Greedy => (
                format!("Greedy Bot {number}"),
                Some(PolicyKind::Greedy.build(color, color.other(), None)),
            ),
        };
        Seat { name, bot }
    }
}

pub struct App {
    board: Box<dyn ConnectM>,
    yellow: Seat,
    red: Seat,
    current: PieceColor,
    selected_column: usize,
    bot_delay: Duration,
    bot_due: Option<Instant>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board: Box<dyn ConnectM>, config: &TuiConfig) -> Self {
        let selected_column = board.num_cols() / 2; // Start in middle
        App {
            board,
            yellow: Seat::new(1, config.player1, PieceColor::Yellow),
            red: Seat::new(2, config.player2, PieceColor::Red),
            current: PieceColor::Yellow,
            selected_column,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
            bot_due: None,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    pub fn board(&self) -> &dyn ConnectM {
        self.board.as_ref()
    }

    pub fn current(&self) -> PieceColor {
        self.current
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn seat(&self, color: PieceColor) -> &Seat {
        match color {
            PieceColor::Yellow => &self.yellow,
            PieceColor::Red => &self.red,
        }
    }

    fn human_to_move(&self) -> bool {
        self.seat(self.current).bot.is_none()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
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
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.board.reset();
                self.current = PieceColor::Yellow;
                self.bot_due = None;
                self.selected_column = self.board.num_cols() / 2;
                self.message = Some("New game started!".to_string());
                info!("board reset");
            }
            _ if !self.human_to_move() || self.board.is_done() => {
                if self.board.is_done() {
                    self.message = Some("Game over! Press 'r' to restart.".to_string());
                }
            }
            KeyCode::Left => {
                self.message = None;
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                self.message = None;
                if self.selected_column + 1 < self.board.num_cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.board.num_cols() {
                    self.selected_column = col;
                }
                self.play(col);
            }
            _ => {}
        }
    }

    /// Let a bot move once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.board.is_done() || self.human_to_move() {
            self.bot_due = None;
            return;
        }

        let due = *self.bot_due.get_or_insert(now + self.bot_delay);
        if now < due {
            return;
        }
        self.bot_due = None;

        let color = self.current;
        let suggestion = match color {
            PieceColor::Yellow => self.yellow.bot.as_mut(),
            PieceColor::Red => self.red.bot.as_mut(),
        }
        .and_then(|bot| bot.suggest_move(self.board.as_ref()));

        match suggestion {
            Some(col) => {
                self.selected_column = col;
                self.play(col);
            }
            None => self.message = Some(format!("{} has no move!", self.seat(color).name)),
        }
    }

    /// Drop the current player's piece and pass the turn
    fn play(&mut self, col: usize) {
        match self.board.drop_piece(col, self.current) {
            Ok(()) => {
                debug!(col, color = self.current.name(), "move applied");
                self.current = self.current.other();
                self.message = if self.board.is_done() {
                    Some(match self.board.winner() {
                        Some(winner) => format!("The winner is {}!", self.seat(winner).name),
                        None => "It's a tie!".to_string(),
                    })
                } else {
                    None
                };
            }
            Err(BoardError::IllegalMove { col }) if col >= self.board.num_cols() => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(_) => {
                self.message = Some("Column is full!".to_string());
            }
        }
    }

    /// Header text and the color to draw it in
    fn status(&self) -> (String, Option<PieceColor>) {
        if self.board.is_done() {
            return match self.board.winner() {
                Some(winner) => (
                    format!("Game Over  |  {} wins", self.seat(winner).name),
                    Some(winner),
                ),
                None => ("Game Over  |  Tie".to_string(), None),
            };
        }
        let seat = self.seat(self.current);
        (
            format!("{} to move  ({})", seat.name, self.current.name()),
            Some(self.current),
        )
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let (status, color) = self.status();
        super::game_view::render(
            frame,
            &self.board.grid(),
            self.board.m(),
            self.selected_column,
            &status,
            color,
            &self.message,
        );
    }
}
