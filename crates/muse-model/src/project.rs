//! Project and User
//!
//! A project is a named container of brief-runs owned by one user. The user
//! record is also the unit of local persistence (keyed by username).

use crate::brief_run::BriefRun;
use crate::ids::{BriefId, ProjectId};
use serde::{Deserialize, Serialize};

/// UI language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Zh,
}

/// Named container of brief-runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub archived: bool,
    pub runs: Vec<BriefRun>,
}

impl Project {
    /// Create an empty project
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            archived: false,
            runs: Vec::new(),
        }
    }

    /// Find a run by brief id
    #[must_use]
    pub fn run(&self, id: BriefId) -> Option<&BriefRun> {
        self.runs.iter().find(|r| r.id == id)
    }

    /// Mutable lookup by brief id
    pub fn run_mut(&mut self, id: BriefId) -> Option<&mut BriefRun> {
        self.runs.iter_mut().find(|r| r.id == id)
    }

    /// Remove a run; returns it when present
    pub fn remove_run(&mut self, id: BriefId) -> Option<BriefRun> {
        let idx = self.runs.iter().position(|r| r.id == id)?;
        Some(self.runs.remove(idx))
    }
}

/// Identity plus preferences and owned projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Local-store key
    pub username: String,
    pub language: Language,
    pub avatar: Option<String>,
    pub projects: Vec<Project>,
}

impl User {
    /// Create a user with no projects
    #[inline]
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            language: Language::default(),
            avatar: None,
            projects: Vec::new(),
        }
    }

    /// Find a project by id
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Mutable lookup by project id
    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Find a project by name (used for inline creation on brief submit)
    #[must_use]
    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }
}
