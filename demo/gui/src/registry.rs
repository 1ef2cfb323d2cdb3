//! Project registry.
//!
//! Projects are compiled in and registered by [`ProjectRegistry::builtin`].
//! The home page lists them as cards in registration order.

use crossterm::event::KeyCode;
use ratatui::prelude::*;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::projects::OptionPricerProject;

/// A page reachable from the home screen.
pub trait Project {
    /// Stable identifier, e.g. `p01_option_pricer`
    fn id(&self) -> &'static str;

    /// Card title
    fn title(&self) -> &'static str;

    /// Card icon
    fn icon(&self) -> &'static str;

    /// One-line card description
    fn description(&self) -> &'static str;

    /// Render the project page into `area`.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Handle a key press. Returns `false` when the key is not used so the
    /// dashboard can apply its own binding.
    fn handle_key(&mut self, key: KeyCode) -> bool;
}

/// Ordered collection of projects.
pub struct ProjectRegistry {
    projects: Vec<Box<dyn Project>>,
}

impl ProjectRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
        }
    }

    /// Registry with every project shipped in this crate.
    pub fn builtin(config: &DashboardConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(OptionPricerProject::new(config)));
        registry
    }

    /// Append a project; it becomes the last card.
    pub fn register(&mut self, project: Box<dyn Project>) {
        tracing::debug!(id = project.id(), "registered project");
        self.projects.push(project);
    }

    /// Project ids in card order
    pub fn ids(&self) -> Vec<&'static str> {
        self.projects.iter().map(|p| p.id()).collect()
    }

    /// Number of registered projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether no project is registered
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects in card order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Project + 'static)> {
        self.projects.iter().map(|p| p.as_ref())
    }

    /// Look up a project by id.
    ///
    /// # Errors
    /// `DashboardError::UnknownProject` if nothing is registered under `id`.
    pub fn get(&self, id: &str) -> Result<&(dyn Project + 'static)> {
        self.projects
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
            .ok_or_else(|| DashboardError::UnknownProject(id.to_string()))
    }

    /// Mutable lookup by id.
    ///
    /// # Errors
    /// `DashboardError::UnknownProject` if nothing is registered under `id`.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut (dyn Project + 'static)> {
        self.projects
            .iter_mut()
            .find(|p| p.id() == id)
            .map(|p| p.as_mut())
            .ok_or_else(|| DashboardError::UnknownProject(id.to_string()))
    }
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
