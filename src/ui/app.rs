use crate::ai::Agent;
use crate::game::{GameOutcome, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive match: the human plays Red, the configured agent answers
/// as Yellow.
pub struct App {
    game_state: GameState,
    bot: Box<dyn Agent>,
    board_size: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board_size: usize, bot: Box<dyn Agent>) -> Self {
        App {
            game_state: GameState::new(board_size),
            bot,
            board_size,
            selected_column: board_size / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

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
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < self.board_size - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_turn();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::new(self.board_size);
                self.selected_column = self.board_size / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece, then let the bot answer.
    fn play_turn(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if let Err(err) = self.game_state.apply_move_mut(self.selected_column) {
            self.message = Some(err.to_string());
            return;
        }

        if !self.game_state.is_terminal() {
            let piece = self.game_state.current_player();
            let col = self.bot.select_move(self.game_state.board(), piece);
            if let Err(err) = self.game_state.apply_move_mut(col) {
                self.message = Some(format!("{} chose column {col}: {err}", self.bot.name()));
                return;
            }
        }

        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) => {
                    format!("{} wins!", player.name())
                }
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.bot.name(),
        );
    }
}
