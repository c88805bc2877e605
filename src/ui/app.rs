//! Main TUI application state and logic

use crate::config::Config;
use crate::engine::{AnimationLoop, LoopEvent, LoopState, Speed};
use crate::render::DrawList;
use crate::sorting::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// The animation loop driving the scheduler
    pub animation: AnimationLoop,

    /// Latest frame produced by the renderer
    pub frame: Option<DrawList>,

    /// Dimensions applied by the resize key
    pub resize_to: (u32, u32),

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Origin of the timeline passed to the animation loop
    pub started_at: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a paused animation loop
    pub fn new(animation: AnimationLoop, config: &Config) -> Self {
        let mut frame = None;
        animation.redraw(&mut frame);

        App {
            animation,
            frame,
            resize_to: (config.bar_width, config.bar_height),
            should_quit: false,
            status_message: String::from("Ready! Press space to start"),
            started_at: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Time elapsed on the animation timeline
    fn now(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = self.now();
            let loop_event = self.animation.poll(now, &mut self.frame);
            self.on_loop_event(loop_event);

            // Use poll with timeout so ticks keep firing without input
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

        // Canvas and picker on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(18)])
            .split(main_chunks[0]);

        let scheduler = self.animation.scheduler();
        let title = format!("{} sort", self.animation.selected());

        super::panes::render_bars_pane(frame, columns[0], self.frame.as_ref(), &title);

        super::panes::render_algorithms_pane(
            frame,
            columns[1],
            self.animation.selected(),
            scheduler.active_algorithm(),
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                algorithm: scheduler
                    .active_algorithm()
                    .unwrap_or(self.animation.selected()),
                speed: self.animation.speed(),
                steps: scheduler.steps_taken(),
                cycles: self.animation.cycles_completed(),
                state: self.animation.state(),
                is_sorted: scheduler.active_session().is_none() && self.animation.bars().is_sorted(),
            },
        );
    }

    /// Update the status line from what the animation loop just did
    fn on_loop_event(&mut self, event: LoopEvent) {
        match event {
            LoopEvent::Idle => {}
            LoopEvent::Stepped(_) => {
                self.status_message = format!("Sorting with {}...", self.animation.selected());
            }
            LoopEvent::CycleCompleted(completion) => {
                self.status_message = format!(
                    "Sorted with {} in {} steps",
                    completion.algorithm, completion.steps
                );
            }
            LoopEvent::CycleStarted { algorithm, .. } => {
                self.status_message = format!("New bars, sorting with {}", algorithm);
            }
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let now = self.now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys pick an algorithm for the next cycle
            KeyCode::Char(c @ '1'..='6') => {
                let picked = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| Algorithm::ALL.get(i).copied());
                if let Some(algorithm) = picked {
                    self.select(algorithm);
                }
            }
            KeyCode::Tab => {
                self.select(self.animation.selected().next());
            }
            KeyCode::BackTab => {
                self.select(self.animation.selected().prev());
            }
            KeyCode::Char('s') => self.set_speed(Speed::Slow),
            KeyCode::Char('m') => self.set_speed(Speed::Medium),
            KeyCode::Char('f') => self.set_speed(Speed::Fast),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_speed(self.animation.speed().faster());
            }
            KeyCode::Char('-') => {
                self.set_speed(self.animation.speed().slower());
            }
            KeyCode::Char('r') => {
                self.animation.randomize(now, &mut self.frame);
                self.status_message = "New random bars".to_string();
            }
            KeyCode::Char('z') => {
                let (width, height) = self.resize_to;
                self.animation.resize(width, height, &mut self.frame);
                self.status_message = format!("Resized bars to {}x{}, paused", width, height);
            }
            KeyCode::Enter => {
                let algorithm = self.animation.selected();
                self.animation.apply(algorithm, now, &mut self.frame);
                self.status_message = format!("Sorting fresh bars with {}", algorithm);
            }
            KeyCode::Char(' ') => {
                // Toggle the loop (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = match self.animation.toggle(now) {
                        LoopState::Running => "Playing...".to_string(),
                        LoopState::Paused => "Paused".to_string(),
                    };
                }
            }
            _ => {}
        }
    }

    fn select(&mut self, algorithm: Algorithm) {
        self.animation.select(algorithm);
        self.status_message = if self.animation.scheduler().active_session().is_some() {
            format!("{} selected for the next cycle", algorithm)
        } else {
            format!("{} selected", algorithm)
        };
    }

    fn set_speed(&mut self, speed: Speed) {
        self.animation.change_speed(speed);
        self.status_message = format!("Speed: {}", speed);
    }
}
