use crate::config::KeyBindings;
use crate::core::{Cell, GAME_TITLE, HistoryChange, Level, UserAction, Vec2};
use crate::input::InputDispatcher;
use crate::models::GameRenderState;
use crate::runner::{GameView, InputSource};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub fn setup_terminal() -> Result<ConsoleTerminal, Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Draws a level in the level-file alphabet, with `*` for a box on a goal and
/// `+` for the player on a goal.
pub fn render_level_to_string(level: &Level) -> String {
    let mut result = String::new();
    for y in 0..level.height() {
        for x in 0..level.width() {
            let pos = Vec2::new(x, y);
            let has_player = pos == level.player();
            let has_box = level.has_box_at(&pos);
            let ch = match level.cell_at(&pos) {
                Some(Cell::Wall) | None => '#',
                Some(Cell::Floor) => match (has_player, has_box) {
                    (true, _) => '@',
                    (false, true) => '$',
                    (false, false) => ' ',
                },
                Some(Cell::Goal) => match (has_player, has_box) {
                    (true, _) => '+',
                    (false, true) => '*',
                    (false, false) => '.',
                },
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

fn describe_change(change: HistoryChange) -> &'static str {
    match change {
        HistoryChange::Moved => "moved",
        HistoryChange::Pushed => "pushed a box",
        HistoryChange::Blocked => "blocked",
        HistoryChange::Undone => "undone",
        HistoryChange::NothingToUndo => "nothing to undo",
        HistoryChange::Unchanged => "-",
    }
}

pub fn status_line(state: &GameRenderState<'_>) -> String {
    let level = &state.snapshot.level;
    let mut status = format!(
        "Moves: {} | Pushes: {} | Boxes home: {}/{}",
        state.snapshot.moves,
        state.snapshot.pushes,
        level.boxes_on_goals(),
        level.boxes().len(),
    );
    if let Some(change) = state.last_change {
        status.push_str(&format!(" | Last: {}", describe_change(change)));
    }
    status
}

/// The ratatui front end: board on top, status and instructions below.
pub struct TerminalView {
    terminal: ConsoleTerminal,
    controls: String,
}

impl TerminalView {
    pub fn new(terminal: ConsoleTerminal, bindings: &KeyBindings) -> Self {
        TerminalView {
            terminal,
            controls: bindings.describe(),
        }
    }
}

impl GameView for TerminalView {
    fn draw(&mut self, state: &GameRenderState<'_>) -> Result<(), Box<dyn std::error::Error>> {
        let board = render_level_to_string(&state.snapshot.level);
        let status = status_line(state);
        let instructions = if state.won {
            "You win! Press any key to quit.".to_string()
        } else {
            format!("Controls: {}", self.controls)
        };

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(LayoutDirection::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(3),
                    Constraint::Length(3),
                ])
                .split(f.area());

            let game_paragraph = Paragraph::new(board)
                .block(Block::default().borders(Borders::ALL).title(GAME_TITLE))
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center);
            f.render_widget(game_paragraph, chunks[0]);

            let status_paragraph = Paragraph::new(status)
                .block(Block::default().borders(Borders::ALL).title("Status"))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(status_paragraph, chunks[1]);

            let instruction_style = if state.won {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let instruction_paragraph = Paragraph::new(instructions)
                .block(Block::default().borders(Borders::ALL).title("Instructions"))
                .style(instruction_style)
                .alignment(Alignment::Center);
            f.render_widget(instruction_paragraph, chunks[2]);
        })?;
        Ok(())
    }
}

/// Reads key presses from the terminal, blocking until one arrives.
pub struct TerminalInput {
    dispatcher: InputDispatcher,
}

impl TerminalInput {
    pub fn new(dispatcher: InputDispatcher) -> Self {
        TerminalInput { dispatcher }
    }
}

impl InputSource for TerminalInput {
    fn next_action(&mut self) -> Result<UserAction, Box<dyn std::error::Error>> {
        loop {
            // Resizes, mouse events and key releases are not input.
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(self.dispatcher.dispatch(code));
            }
        }
    }
}
