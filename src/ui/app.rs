use crate::config::AppConfig;
use crate::game::{Game, MoveError, MoveOutcome};
use crate::ui::{board_widget, game_view};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Size of the last drawn frame, for mapping pointer clicks.
    frame_area: Rect,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let game = Game::new(config.board.rows, config.board.cols, config.game.first_player);
        App {
            selected_column: config.board.cols / 2, // Start in middle
            game,
            should_quit: false,
            message: None,
            frame_area: Rect::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let completed = terminal.draw(|f| self.render(f))?;
            self.frame_area = completed.area;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle terminal events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.selected_column = self.game.board().cols() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Left click drops into the column under the pointer. Clicks off the
    /// board are ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let area = game_view::board_area(self.frame_area);
        let cols = self.game.board().cols();
        let Some(col) = board_widget::column_at(area, cols, mouse.column, mouse.row) else {
            debug!(x = mouse.column, y = mouse.row, "click outside board ignored");
            return;
        };

        self.message = None;
        self.selected_column = col;
        self.drop_piece();
    }

    /// Record the frame size without drawing
    pub fn set_frame_area(&mut self, area: Rect) {
        self.frame_area = area;
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game.play(self.selected_column) {
            Ok(MoveOutcome::Won { winner, .. }) => {
                self.message = Some(format!("Player {} wins!", winner.number()));
            }
            Ok(MoveOutcome::Placed { .. }) => {}
            Err(MoveError::ColumnFull(col)) => {
                self.message = Some(format!("Column {} is full!", col + 1));
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver { .. }) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, x: u16, y: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::default();
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.game().current_player(), Player::Red);
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_piece() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().board().get(5, 3), Cell::Occupied(Player::Red));
        assert_eq!(app.game().current_player(), Player::Yellow);
    }

    #[test]
    fn test_full_column_message() {
        let mut config = AppConfig::default();
        config.board.rows = 2;
        let mut app = App::new(&config);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column 4 is full!"));
        assert_eq!(app.game().current_player(), Player::Red);
    }

    #[test]
    fn test_win_then_drops_are_refused() {
        let mut app = App::default();
        // Red in column 3, Yellow in column 4, four times for Red
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Player 1 wins!"));
        assert_eq!(app.game().winner(), Some(Player::Red));

        let before = app.game().clone();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_restart() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message(), Some("New game started!"));
        assert!(app.game().board().is_column_playable(3));
        assert_eq!(app.game().board().get(5, 3), Cell::Empty);
        assert_eq!(app.game().current_player(), Player::Red);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_drops_in_column_under_pointer() {
        let mut app = App::default();
        app.set_frame_area(Rect::new(0, 0, 80, 24));
        // Board area starts at y = 3, first cell at x = 30
        click(&mut app, 31, 8);
        assert_eq!(app.selected_column(), 0);
        assert_eq!(app.game().board().get(5, 0), Cell::Occupied(Player::Red));
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let mut app = App::default();
        app.set_frame_area(Rect::new(0, 0, 80, 24));
        click(&mut app, 2, 8);
        assert_eq!(app.game(), &Game::default());
        assert_eq!(app.selected_column(), 3);
    }
}
