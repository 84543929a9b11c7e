//! Remote store contract
//!
//! Networked, keyed by brief id alone. Implementations are expected to run
//! their calls through [`crate::retry::with_retry`]; the coordinator treats
//! every remote result as best-effort.

use crate::error::StoreError;
use async_trait::async_trait;
use muse_model::{BriefId, BriefRun, Proposal};
use serde::{Deserialize, Serialize};

/// The remote copy of a brief-run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefRecord {
    pub id: BriefId,
    pub proposals: Vec<Proposal>,
    pub archived: bool,
}

/// Async remote persistence for brief-runs
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Create the remote record for a new run
    async fn create_brief(&self, run: &BriefRun) -> Result<BriefRecord, StoreError>;

    /// Replace the proposals of an existing record
    async fn update_brief_proposals(
        &self,
        id: BriefId,
        proposals: &[Proposal],
    ) -> Result<BriefRecord, StoreError>;

    /// Delete the remote record
    async fn delete_brief(&self, id: BriefId) -> Result<(), StoreError>;

    /// Archive the remote record
    async fn archive_brief(&self, id: BriefId) -> Result<(), StoreError>;
}
