//! Dual-persistence coordinator
//!
//! Saves a mutated brief-run to two independent sinks: the local durable
//! store (always) and the remote store (when a remote session exists). Each
//! attempt runs in its own failure boundary; neither blocks or rolls back
//! the other. The in-memory state is the source of truth for the session:
//! persistence is layered durability, and auto-save failures are reported
//! in the returned [`SaveOutcome`], never raised.
//!
//! Deletion is asymmetric: local failure is surfaced (a genuine local data
//! problem), remote failure is logged and swallowed (the remote copy is
//! additive and may be reconciled or orphaned).

use crate::error::StoreError;
use crate::local::LocalStore;
use crate::remote::RemoteStore;
use crate::retry::{with_retry, RetryPolicy};
use dashmap::DashSet;
use muse_model::{BriefId, BriefRun, ProjectId, User};
use std::sync::Arc;

/// Result pair of one auto-save: independent channels, never a thrown error
#[derive(Debug)]
pub struct SaveOutcome {
    pub local: Result<(), StoreError>,
    /// `None` when no remote session exists
    pub remote: Option<Result<(), StoreError>>,
}

impl SaveOutcome {
    /// The local durable copy was written
    #[inline]
    #[must_use]
    pub fn locally_saved(&self) -> bool {
        self.local.is_ok()
    }

    /// Every attempted sink succeeded
    #[inline]
    #[must_use]
    pub fn fully_saved(&self) -> bool {
        self.local.is_ok() && self.remote.as_ref().map_or(true, |r| r.is_ok())
    }
}

/// Orchestrates best-effort writes to both stores
pub struct Coordinator {
    local: Arc<dyn LocalStore>,
    remote: Option<Arc<dyn RemoteStore>>,
    retry: RetryPolicy,
    /// Brief ids already created remotely this session; later saves update
    created_remotely: DashSet<BriefId>,
}

impl Coordinator {
    /// Coordinator with only the local sink
    #[must_use]
    pub fn local_only(local: Arc<dyn LocalStore>) -> Self {
        Self {
            local,
            remote: None,
            retry: RetryPolicy::default(),
            created_remotely: DashSet::new(),
        }
    }

    /// Coordinator with both sinks
    #[must_use]
    pub fn with_remote(local: Arc<dyn LocalStore>, remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            local,
            remote: Some(remote),
            retry: RetryPolicy::default(),
            created_remotely: DashSet::new(),
        }
    }

    /// Replace the remote retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Whether a remote session exists
    #[inline]
    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Persist the user record locally, surfacing failure
    ///
    /// For explicit user-initiated actions (project create/archive) where a
    /// local write problem must reach the user.
    ///
    /// # Errors
    /// Local store failure.
    pub fn persist_user(&self, user: &User) -> Result<(), StoreError> {
        self.local.put(&user.username, user)
    }

    /// Persist a mutated run to both sinks, best-effort
    ///
    /// Remote first when a session exists, local always. Failures are
    /// logged at warn and reported in the outcome; a failed remote save
    /// just means this run is not backed up until the next mutation
    /// triggers another attempt.
    pub async fn auto_save(&self, user: &User, run: &BriefRun) -> SaveOutcome {
        let remote = match &self.remote {
            None => None,
            Some(remote) => {
                let result = self.save_remote(remote.as_ref(), run).await;
                if let Err(error) = &result {
                    tracing::warn!(brief = %run.id, error = %error, "remote auto-save failed");
                }
                Some(result)
            }
        };

        let local = self.local.put(&user.username, user);
        if let Err(error) = &local {
            tracing::warn!(user = %user.username, error = %error, "local auto-save failed");
        }

        SaveOutcome { local, remote }
    }

    async fn save_remote(&self, remote: &dyn RemoteStore, run: &BriefRun) -> Result<(), StoreError> {
        if self.created_remotely.contains(&run.id) {
            with_retry(&self.retry, || {
                remote.update_brief_proposals(run.id, &run.proposals)
            })
            .await?;
        } else {
            with_retry(&self.retry, || remote.create_brief(run)).await?;
            self.created_remotely.insert(run.id);
        }
        Ok(())
    }

    /// Delete a run: local authoritative, remote best-effort
    ///
    /// # Errors
    /// Local deletion failure only.
    pub async fn delete_brief(
        &self,
        username: &str,
        project_id: ProjectId,
        brief_id: BriefId,
    ) -> Result<(), StoreError> {
        let local = self.local.delete_brief(username, project_id, brief_id);

        if let Some(remote) = &self.remote {
            if let Err(error) = with_retry(&self.retry, || remote.delete_brief(brief_id)).await {
                tracing::warn!(brief = %brief_id, error = %error, "remote delete failed");
            }
            self.created_remotely.remove(&brief_id);
        }

        local
    }

    /// Archive a run remotely and persist the updated user locally
    ///
    /// Same asymmetry as delete: the local write is authoritative.
    ///
    /// # Errors
    /// Local persistence failure only.
    pub async fn archive_brief(&self, user: &User, brief_id: BriefId) -> Result<(), StoreError> {
        let local = self.local.put(&user.username, user);

        if let Some(remote) = &self.remote {
            if let Err(error) = with_retry(&self.retry, || remote.archive_brief(brief_id)).await {
                tracing::warn!(brief = %brief_id, error = %error, "remote archive failed");
            }
        }

        local
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("has_remote", &self.remote.is_some())
            .field("retry", &self.retry)
            .finish()
    }
}
