//! TUI Application state and event handling.

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::navigation::NavigationState;
use crate::registry::ProjectRegistry;
use crate::screens;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Dashboard state, independent of the terminal
pub struct Dashboard {
    /// Registered projects
    registry: ProjectRegistry,
    /// Current page
    navigation: NavigationState,
    /// Exit flag
    should_quit: bool,
}

impl Dashboard {
    /// Dashboard over the given projects, starting on the home page
    pub fn new(registry: ProjectRegistry) -> Self {
        Self {
            registry,
            navigation: NavigationState::default(),
            should_quit: false,
        }
    }

    /// Current page
    pub fn navigation(&self) -> NavigationState {
        self.navigation
    }

    /// Whether the user asked to quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Registered projects
    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Handle keyboard input
    ///
    /// On a project page the project sees the key first.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        match self.navigation {
            NavigationState::Home { .. } => match key {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
                    self.navigation.select_next(self.registry.len());
                }
                KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => {
                    self.navigation.select_prev();
                }
                KeyCode::Enter => {
                    if self.navigation.open(&self.registry.ids()) {
                        info!(project = ?self.navigation.current_project(), "opened project");
                    }
                }
                _ => {}
            },
            NavigationState::ProjectDetail { project_id } => {
                if self.registry.get_mut(project_id)?.handle_key(key) {
                    return Ok(());
                }
                match key {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Esc | KeyCode::Char('b') => {
                        self.navigation.back();
                        debug!(project_id, "back to home");
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Draw the current page
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.size();

        // Create main layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(area);

        match self.navigation {
            NavigationState::Home { selected } => {
                screens::draw_header(frame, chunks[0], "Home");
                screens::draw_home(frame, chunks[1], &self.registry, selected);
            }
            NavigationState::ProjectDetail { project_id } => match self.registry.get(project_id) {
                Ok(project) => {
                    screens::draw_header(frame, chunks[0], project.title());
                    project.draw(frame, chunks[1]);
                }
                Err(e) => {
                    screens::draw_header(frame, chunks[0], project_id);
                    let message = Paragraph::new(e.to_string())
                        .style(Style::default().fg(Color::Red))
                        .block(Block::default().borders(Borders::ALL));
                    frame.render_widget(message, chunks[1]);
                }
            },
        }

        screens::draw_footer(frame, chunks[2], &self.navigation);
    }
}

/// Terminal front end for [`Dashboard`]
pub struct TuiApp {
    /// Dashboard state
    dashboard: Dashboard,
    /// Event poll interval
    tick_rate: Duration,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application and take over the terminal.
    ///
    /// The configuration is validated before the terminal is touched.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        config.validate()?;
        let dashboard = Dashboard::new(ProjectRegistry::builtin(config));

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            dashboard,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            terminal,
        })
    }

    /// Run the TUI event loop
    pub fn run(&mut self) -> Result<()> {
        info!(projects = self.dashboard.registry().len(), "dashboard started");

        loop {
            let dashboard = &self.dashboard;
            self.terminal.draw(|frame| dashboard.draw(frame))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Err(e) = self.dashboard.handle_key(key.code) {
                            warn!(error = %e, "key handling failed");
                        }
                    }
                }
            }

            if self.dashboard.should_quit() {
                break;
            }
        }

        info!("dashboard stopped");
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
