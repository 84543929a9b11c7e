//! Failure-isolation tests for the dual-persistence coordinator.

use async_trait::async_trait;
use muse_model::{BriefId, BriefRun, CreativeType, InitialBrief, Project, ProjectId, Proposal, User};
use muse_store::{
    BriefRecord, Coordinator, LocalStore, MemoryStore, RemoteStore, RetryPolicy, StoreError,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Local store whose writes can be forced to fail.
#[derive(Default)]
struct FlakyLocal {
    inner: MemoryStore,
    fail_puts: AtomicBool,
    fail_deletes: AtomicBool,
}

impl LocalStore for FlakyLocal {
    fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.inner.get(username)
    }

    fn put(&self, username: &str, user: &User) -> Result<(), StoreError> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(StoreError::Io("disk full".to_string()));
        }
        self.inner.put(username, user)
    }

    fn delete_brief(
        &self,
        username: &str,
        project_id: ProjectId,
        brief_id: BriefId,
    ) -> Result<(), StoreError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StoreError::Io("disk full".to_string()));
        }
        self.inner.delete_brief(username, project_id, brief_id)
    }
}

/// Remote store whose calls can be forced to fail; counts attempts.
#[derive(Default)]
struct FlakyRemote {
    failing: AtomicBool,
    creates: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
}

impl FlakyRemote {
    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Network("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RemoteStore for FlakyRemote {
    async fn create_brief(&self, run: &BriefRun) -> Result<BriefRecord, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(BriefRecord {
            id: run.id,
            proposals: run.proposals.clone(),
            archived: false,
        })
    }

    async fn update_brief_proposals(
        &self,
        id: BriefId,
        proposals: &[Proposal],
    ) -> Result<BriefRecord, StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(BriefRecord {
            id,
            proposals: proposals.to_vec(),
            archived: false,
        })
    }

    async fn delete_brief(&self, _id: BriefId) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check()
    }

    async fn archive_brief(&self, _id: BriefId) -> Result<(), StoreError> {
        self.check()
    }
}

fn seeded_user() -> (User, ProjectId, BriefRun) {
    let mut user = User::new("ada");
    let mut project = Project::new("Drinks");
    let run = BriefRun::new(InitialBrief {
        text: "Energy drink slogan".to_string(),
        creative_type: CreativeType::Slogan,
    });
    let project_id = project.id;
    project.runs.push(run.clone());
    user.projects.push(project);
    (user, project_id, run)
}

#[tokio::test]
async fn remote_failure_does_not_block_local_save() {
    let local = Arc::new(FlakyLocal::default());
    let remote = Arc::new(FlakyRemote::default());
    remote.failing.store(true, Ordering::SeqCst);

    let coordinator = Coordinator::with_remote(local.clone(), remote.clone())
        .with_retry_policy(RetryPolicy::immediate(2));

    let (user, _, run) = seeded_user();
    let outcome = coordinator.auto_save(&user, &run).await;

    assert!(outcome.locally_saved());
    assert!(!outcome.fully_saved());
    assert!(outcome.remote.unwrap().is_err());
    assert_eq!(local.get("ada").unwrap(), Some(user));
}

#[tokio::test]
async fn local_failure_does_not_block_remote_save_and_never_raises() {
    let local = Arc::new(FlakyLocal::default());
    local.fail_puts.store(true, Ordering::SeqCst);
    let remote = Arc::new(FlakyRemote::default());

    let coordinator = Coordinator::with_remote(local.clone(), remote.clone())
        .with_retry_policy(RetryPolicy::immediate(2));

    let (user, _, run) = seeded_user();
    let outcome = coordinator.auto_save(&user, &run).await;

    assert!(!outcome.locally_saved());
    assert_eq!(outcome.remote, Some(Ok(())));
    assert_eq!(remote.creates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn second_save_updates_instead_of_recreating() {
    let local = Arc::new(FlakyLocal::default());
    let remote = Arc::new(FlakyRemote::default());
    let coordinator = Coordinator::with_remote(local, remote.clone())
        .with_retry_policy(RetryPolicy::immediate(2));

    let (user, _, run) = seeded_user();
    coordinator.auto_save(&user, &run).await;
    coordinator.auto_save(&user, &run).await;

    assert_eq!(remote.creates.load(Ordering::SeqCst), 1);
    assert_eq!(remote.updates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_remote_create_is_reattempted_on_next_mutation() {
    let local = Arc::new(FlakyLocal::default());
    let remote = Arc::new(FlakyRemote::default());
    remote.failing.store(true, Ordering::SeqCst);
    let coordinator = Coordinator::with_remote(local, remote.clone())
        .with_retry_policy(RetryPolicy::immediate(1));

    let (user, _, run) = seeded_user();
    coordinator.auto_save(&user, &run).await;
    assert_eq!(remote.creates.load(Ordering::SeqCst), 1);

    // backend recovers; next mutation still runs a create, not an update
    remote.failing.store(false, Ordering::SeqCst);
    let outcome = coordinator.auto_save(&user, &run).await;
    assert!(outcome.fully_saved());
    assert_eq!(remote.creates.load(Ordering::SeqCst), 2);
    assert_eq!(remote.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn local_delete_failure_is_surfaced() {
    let local = Arc::new(FlakyLocal::default());
    let remote = Arc::new(FlakyRemote::default());
    let coordinator = Coordinator::with_remote(local.clone(), remote.clone())
        .with_retry_policy(RetryPolicy::immediate(1));

    let (user, project_id, run) = seeded_user();
    coordinator.auto_save(&user, &run).await;

    local.fail_deletes.store(true, Ordering::SeqCst);
    let result = coordinator.delete_brief("ada", project_id, run.id).await;
    assert_eq!(result, Err(StoreError::Io("disk full".to_string())));
}

#[tokio::test]
async fn remote_delete_failure_is_swallowed() {
    let local = Arc::new(FlakyLocal::default());
    let remote = Arc::new(FlakyRemote::default());
    let coordinator = Coordinator::with_remote(local.clone(), remote.clone())
        .with_retry_policy(RetryPolicy::immediate(1));

    let (user, project_id, run) = seeded_user();
    coordinator.auto_save(&user, &run).await;

    remote.failing.store(true, Ordering::SeqCst);
    let result = coordinator.delete_brief("ada", project_id, run.id).await;
    assert_eq!(result, Ok(()));
    assert!(remote.deletes.load(Ordering::SeqCst) >= 1);
    // the local record really lost the run
    let after = local.get("ada").unwrap().unwrap();
    assert!(after.projects[0].runs.is_empty());
}

#[tokio::test]
async fn local_only_session_reports_no_remote_channel() {
    let local = Arc::new(FlakyLocal::default());
    let coordinator = Coordinator::local_only(local);
    let (user, _, run) = seeded_user();

    let outcome = coordinator.auto_save(&user, &run).await;
    assert!(outcome.fully_saved());
    assert!(outcome.remote.is_none());
}
