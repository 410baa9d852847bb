//! TUI application state and logic
//!
//! The app owns the board, the round counter, and the win/loss calls.
//! The evaluator only ever sees completed guesses.

use crate::core::{Code, Color, Score};
use crate::game::{Evaluator, SecretSource, UniformRandom};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// One board row: guess slots and, once checked, its score
#[derive(Debug, Clone)]
pub struct Row {
    pub slots: Vec<Option<Color>>,
    pub score: Option<Score>,
}

impl Row {
    fn empty(length: usize) -> Self {
        Self {
            slots: vec![None; length],
            score: None,
        }
    }

    /// Whether every slot holds a peg
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Guessing,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
}

/// Application state
pub struct App<S: SecretSource = UniformRandom> {
    pub evaluator: Evaluator<S>,
    pub rounds: usize,
    pub rows: Vec<Row>,
    pub current_row: usize,
    pub selected: usize,
    pub phase: Phase,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<S: SecretSource> App<S> {
    #[must_use]
    pub fn new(evaluator: Evaluator<S>, rounds: usize) -> Self {
        let length = evaluator.code_length();

        let mut app = Self {
            evaluator,
            rounds,
            rows: (0..rounds).map(|_| Row::empty(length)).collect(),
            current_row: 0,
            selected: 0,
            phase: Phase::Guessing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Fill the row and press Enter to check.",
            MessageStyle::Info,
        );
        app
    }

    /// Length of the secret being guessed
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.evaluator.code_length()
    }

    pub fn select_prev(&mut self) {
        let count = self.evaluator.palette().len();
        self.selected = (self.selected + count - 1) % count;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.evaluator.palette().len();
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.evaluator.palette().len() {
            self.selected = index;
        }
    }

    /// Place the selected palette color into the next empty slot
    pub fn place_selected(&mut self) {
        let color = self.evaluator.palette().colors()[self.selected];
        self.place_color(color);
    }

    /// Place a color by its palette label, if the label matches one
    pub fn place_label(&mut self, label: char) {
        if let Some(color) = self.evaluator.palette().color_of(label) {
            self.place_color(color);
        }
    }

    fn place_color(&mut self, color: Color) {
        if self.phase != Phase::Guessing {
            return;
        }

        let row = &mut self.rows[self.current_row];
        if let Some(slot) = row.slots.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(color);
        }
    }

    /// Clear the last filled slot of the current row
    pub fn erase_last(&mut self) {
        if self.phase != Phase::Guessing {
            return;
        }

        let row = &mut self.rows[self.current_row];
        if let Some(slot) = row.slots.iter_mut().rev().find(|slot| slot.is_some()) {
            *slot = None;
        }
    }

    /// Check the current row against the secret
    ///
    /// An incomplete row is rejected here; the evaluator is never called
    /// with a partial guess.
    pub fn check_row(&mut self) {
        if self.phase != Phase::Guessing {
            return;
        }

        if !self.rows[self.current_row].is_full() {
            self.add_message("Please fill all slots", MessageStyle::Error);
            return;
        }

        let guess: Code = self.rows[self.current_row]
            .slots
            .iter()
            .copied()
            .flatten()
            .collect();

        match self.evaluator.check_guess(&guess) {
            Ok(score) => {
                self.rows[self.current_row].score = Some(score);
                self.finish_turn(score);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_turn(&mut self, score: Score) {
        let length = self.code_length();

        if score.is_win(length) {
            self.phase = Phase::Won;
            self.stats.played += 1;
            self.stats.won += 1;
            self.add_message("You guessed it!", MessageStyle::Success);
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else if self.current_row + 1 == self.rounds {
            self.phase = Phase::Lost;
            self.stats.played += 1;

            match self.evaluator.show_secret() {
                Ok(secret) => self.add_message(
                    &format!("You lost! The secret was {secret}"),
                    MessageStyle::Error,
                ),
                Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            }
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(&score.to_string(), MessageStyle::Info);
            self.current_row += 1;
        }
    }

    /// Start a new game with a fresh secret
    pub fn new_game(&mut self) {
        let length = self.code_length();

        if let Err(err) = self.evaluator.init(length) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        self.rows = (0..self.rounds).map(|_| Row::empty(length)).collect();
        self.current_row = 0;
        self.phase = Phase::Guessing;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: SecretSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SecretSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.phase {
                Phase::Won | Phase::Lost => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Game over: ignore other keys
                    }
                },
                Phase::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Left => {
                        app.select_prev();
                    }
                    KeyCode::Right => {
                        app.select_next();
                    }
                    KeyCode::Backspace => {
                        app.erase_last();
                    }
                    KeyCode::Enter => {
                        app.check_row();
                    }
                    KeyCode::Char(' ') => {
                        app.place_selected();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(index) = c.to_digit(10)
                            && index >= 1
                        {
                            app.select_index(index as usize - 1);
                        }
                    }
                    KeyCode::Char(c) => {
                        app.place_label(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
