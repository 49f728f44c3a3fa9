//! Main TUI application state and logic

use crate::algorithms::{Algorithm, Mode};
use crate::player::PlaybackError;
use crate::session::{Session, SessionError};
use crate::snapshot::Value;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    render_bars_pane, render_info_pane, render_stats_pane, render_status_bar, BarsRenderData,
    StatsRenderData, StatusRenderData,
};

/// Speed change per `+` / `-` press
const SPEED_STEP: u16 = 10;

/// Array size change per `[` / `]` press
const SIZE_STEP: usize = 5;

/// The main application state
pub struct App {
    /// The session being visualized
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Digits typed into the target prompt; `None` while the prompt is closed
    pub target_input: Option<String>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around an already built session
    pub fn new(mut session: Session) -> Self {
        let status_message = session
            .take_notice()
            .unwrap_or_else(|| String::from("Ready!"));
        App {
            session,
            should_quit: false,
            status_message,
            target_input: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance timed playback
            let player = self.session.player_mut();
            if player.is_playing() {
                player.tick(Instant::now());
                if !player.is_playing() {
                    self.status_message = "Playback complete".to_string();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let now = Instant::now();

        // Create layout: bars on the left, stats and info on the right, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(11), Constraint::Min(0)])
            .split(columns[1]);

        let elements = self.session.current_frame().to_vec();
        let session = &self.session;
        let player = session.player();
        let algorithm = session.algorithm();
        let target = match session.mode() {
            Mode::Search => session.target(),
            Mode::Sort => None,
        };

        let title = match target {
            Some(target) => format!(" {} | target {} ", algorithm.label(), target),
            None => format!(" {} ", algorithm.label()),
        };
        let roles = session.current_roles();
        render_bars_pane(
            frame,
            columns[0],
            &BarsRenderData {
                title,
                elements: &elements,
                roles: &roles,
            },
        );

        render_stats_pane(
            frame,
            right_rows[0],
            &StatsRenderData {
                analytics: player.analytics(now),
                speed: player.speed(),
                size: session.size(),
                target,
                step: player.current(),
            },
        );

        render_info_pane(frame, right_rows[1], algorithm);

        render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                mode: session.mode(),
                current_step: player.cursor(),
                total_steps: player.len(),
                is_playing: player.is_playing(),
                target_input: self.target_input.as_deref(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.target_input.is_some() {
            self.handle_target_key(key);
            return;
        }

        let now = Instant::now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let player = self.session.player_mut();
                player.pause(now);
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if player.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.session.player_mut().pause(now);
                self.step_backward(now);
            }
            KeyCode::Right => {
                self.session.player_mut().pause(now);
                self.step_forward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = now;
                    self.toggle_play(now);
                }
            }
            KeyCode::Enter => {
                self.session.player_mut().jump_to_end(now);
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                let player = self.session.player_mut();
                player.pause(now);
                player.rewind(now);
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') => {
                let result = self.session.reset(now);
                self.apply(result, "New array");
            }
            KeyCode::Char('s') => {
                let result = self.session.shuffle(now);
                self.apply(result, "Shuffled");
            }
            KeyCode::Char('a') | KeyCode::Tab => {
                self.select_algorithm(self.session.algorithm().next(), now);
            }
            KeyCode::Char('A') | KeyCode::BackTab => {
                self.select_algorithm(self.session.algorithm().prev(), now);
            }
            KeyCode::Char('m') => {
                let mode = self.session.mode().toggle();
                let result = self.session.set_mode(mode, now);
                self.apply(result, &format!("{} mode", mode));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.session.player().speed().faster(SPEED_STEP);
                self.session.set_speed(speed);
                self.status_message = format!("Speed {}", speed);
            }
            KeyCode::Char('-') => {
                let speed = self.session.player().speed().slower(SPEED_STEP);
                self.session.set_speed(speed);
                self.status_message = format!("Speed {}", speed);
            }
            KeyCode::Char(']') => {
                let size = self.session.size().saturating_add(SIZE_STEP);
                let result = self.session.set_size(size, now);
                let message = format!("Size {}", self.session.size());
                self.apply(result, &message);
            }
            KeyCode::Char('[') => {
                let size = self.session.size().saturating_sub(SIZE_STEP);
                let result = self.session.set_size(size, now);
                let message = format!("Size {}", self.session.size());
                self.apply(result, &message);
            }
            KeyCode::Char('t') => {
                if self.session.mode() == Mode::Search {
                    self.session.player_mut().pause(now);
                    self.target_input = Some(String::new());
                } else {
                    self.status_message = "Targets apply in search mode (m)".to_string();
                }
            }
            _ => {}
        }
    }

    /// Keys while the target prompt is open
    fn handle_target_key(&mut self, key: KeyEvent) {
        let Some(input) = self.target_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || (c == '-' && input.is_empty()) => {
                input.push(c);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => {
                self.target_input = None;
                self.status_message = "Target unchanged".to_string();
            }
            KeyCode::Enter => {
                let text = self.target_input.take().unwrap_or_default();
                match text.parse::<Value>() {
                    Ok(target) => {
                        let result = self.session.set_target(target, Instant::now());
                        self.apply(result, &format!("Target {}", target));
                    }
                    Err(_) => {
                        self.status_message = format!("Not a number: '{}'", text);
                    }
                }
            }
            _ => {}
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm, now: Instant) {
        let result = self.session.set_algorithm(algorithm, now);
        self.apply(result, algorithm.label());
    }

    /// Report the outcome of a session change in the status bar
    fn apply(&mut self, result: Result<(), SessionError>, success: &str) {
        self.status_message = match result {
            Ok(()) => self
                .session
                .take_notice()
                .unwrap_or_else(|| success.to_string()),
            Err(e) => format!("Error: {}", e),
        };
    }

    fn toggle_play(&mut self, now: Instant) {
        let player = self.session.player_mut();
        if player.is_playing() {
            player.pause(now);
            self.status_message = "Paused".to_string();
            return;
        }

        // Replay from the start once the end is reached
        if player.at_end() {
            player.rewind(now);
        }
        self.status_message = match player.play(now) {
            Ok(()) => "Playing...".to_string(),
            Err(e) => format!("Cannot play: {}", e),
        };
    }

    /// Step forward in the sequence
    fn step_forward(&mut self) {
        match self.session.player_mut().step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
            }
            Err(PlaybackError::AtEnd) => {
                self.status_message = "Cannot step forward: already at the last step".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward in the sequence
    fn step_backward(&mut self, now: Instant) {
        match self.session.player_mut().step_backward(now) {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
            }
            Err(PlaybackError::AtStart) => {
                self.status_message = "Cannot step backward: already at the first step".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
