//! Local durable store
//!
//! Synchronous key-value semantics keyed by username; the stored value is
//! the whole [`User`] record (projects and runs included). Two
//! implementations: an in-memory map for tests and sessions without a disk,
//! and a JSON-file-per-user store.

use crate::error::StoreError;
use dashmap::DashMap;
use muse_model::{BriefId, ProjectId, User};
use std::path::PathBuf;

/// Key-value access to the local user record
pub trait LocalStore: Send + Sync {
    /// Load a user record
    fn get(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Store (replace) a user record
    fn put(&self, username: &str, user: &User) -> Result<(), StoreError>;

    /// Delete one brief-run from a user's project
    ///
    /// # Errors
    /// [`StoreError::NotFound`] when the user, project, or brief is absent;
    /// local deletion failures are genuine data problems and are surfaced.
    fn delete_brief(
        &self,
        username: &str,
        project_id: ProjectId,
        brief_id: BriefId,
    ) -> Result<(), StoreError>;
}

fn remove_brief(user: &mut User, project_id: ProjectId, brief_id: BriefId) -> Result<(), StoreError> {
    let project = user
        .project_mut(project_id)
        .ok_or_else(|| StoreError::NotFound(format!("project {project_id}")))?;
    project
        .remove_run(brief_id)
        .map(|_| ())
        .ok_or_else(|| StoreError::NotFound(format!("brief {brief_id}")))
}

/// In-memory local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, User>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.records.get(username).map(|r| r.value().clone()))
    }

    fn put(&self, username: &str, user: &User) -> Result<(), StoreError> {
        self.records.insert(username.to_string(), user.clone());
        Ok(())
    }

    fn delete_brief(
        &self,
        username: &str,
        project_id: ProjectId,
        brief_id: BriefId,
    ) -> Result<(), StoreError> {
        let mut entry = self
            .records
            .get_mut(username)
            .ok_or_else(|| StoreError::NotFound(format!("user {username}")))?;
        remove_brief(entry.value_mut(), project_id, brief_id)
    }
}

/// JSON file per user under a root directory
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open (creating the root directory if needed)
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, username: &str) -> PathBuf {
        self.root.join(format!("{username}.json"))
    }
}

impl LocalStore for JsonFileStore {
    fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        let path = self.path_for(username);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn put(&self, username: &str, user: &User) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(user)?;
        // write-then-rename keeps a crash from truncating the record
        let path = self.path_for(username);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(tmp, path)?;
        Ok(())
    }

    fn delete_brief(
        &self,
        username: &str,
        project_id: ProjectId,
        brief_id: BriefId,
    ) -> Result<(), StoreError> {
        let mut user = self
            .get(username)?
            .ok_or_else(|| StoreError::NotFound(format!("user {username}")))?;
        remove_brief(&mut user, project_id, brief_id)?;
        self.put(username, &user)
    }
}
