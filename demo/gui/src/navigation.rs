//! Navigation state machine.
//!
//! Two states: the home page with a highlighted project card, and the detail
//! page of one project. Every transition returns whether it applied; an
//! invalid transition leaves the state untouched.

/// Where the user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    /// Project cards, one of them highlighted
    Home {
        /// Index of the highlighted card
        selected: usize,
    },
    /// A single project page
    ProjectDetail {
        /// Registered id of the open project
        project_id: &'static str,
    },
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::Home { selected: 0 }
    }
}

impl NavigationState {
    /// Highlight the next card, if there is one.
    pub fn select_next(&mut self, project_count: usize) -> bool {
        match self {
            Self::Home { selected } if *selected + 1 < project_count => {
                *selected += 1;
                true
            }
            _ => false,
        }
    }

    /// Highlight the previous card, if there is one.
    pub fn select_prev(&mut self) -> bool {
        match self {
            Self::Home { selected } if *selected > 0 => {
                *selected -= 1;
                true
            }
            _ => false,
        }
    }

    /// Open the highlighted card. `project_ids` is in card order.
    pub fn open(&mut self, project_ids: &[&'static str]) -> bool {
        match *self {
            Self::Home { selected } => match project_ids.get(selected) {
                Some(&project_id) => {
                    *self = Self::ProjectDetail { project_id };
                    true
                }
                None => false,
            },
            Self::ProjectDetail { .. } => false,
        }
    }

    /// Return to the home page.
    pub fn back(&mut self) -> bool {
        match self {
            Self::ProjectDetail { .. } => {
                *self = Self::default();
                true
            }
            Self::Home { .. } => false,
        }
    }

    /// Id of the open project, if any.
    pub fn current_project(&self) -> Option<&'static str> {
        match self {
            Self::ProjectDetail { project_id } => Some(*project_id),
            Self::Home { .. } => None,
        }
    }
}
