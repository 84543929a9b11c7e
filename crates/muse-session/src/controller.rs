//! Session controller
//!
//! Owns the in-memory session state (the source of truth for the UI),
//! drives the stage machine, calls the collaborator through the retry
//! wrapper, applies the pure engines, and hands every mutation to the
//! dual-persistence coordinator.
//!
//! Mutation discipline: at most one in-flight mutating operation per run,
//! enforced by the `task_running` gate. Collaborator results are merged
//! into state only after the whole call chain succeeds; a failure restores
//! the pre-action stage (or the designated fallback), resets the gate, and
//! sets a short message in the error overlay.

use crate::error::SessionError;
use crate::stage::{validate_transition, Stage, StageError};
use chrono::Utc;
use muse_collab::retry::{call_with_retry, timeouts, RetryPolicy};
use muse_collab::{coerce, inspiration, Collaborator, RawProposal};
use muse_model::{
    BriefId, BriefRun, CreativeType, InitialBrief, InspirationCase, Project, ProjectId, Proposal,
    ProposalId, User,
};
use muse_refine::RefinementEdit;
use muse_store::Coordinator;
use muse_version::ReplacementContent;
use std::sync::Arc;

/// How the user picked a project on brief submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSelector {
    /// An existing project was selected
    Existing(ProjectId),
    /// The user typed a name; created inline unless it already exists
    New(String),
}

/// A brief-run in flight between clarification and generation
#[derive(Debug, Clone)]
struct PendingRun {
    project_id: ProjectId,
    run: BriefRun,
    questions: Vec<String>,
    /// Preserved across generation failures so the user can retry
    answers: Vec<String>,
}

/// Everything a proposal mutation needs, snapshotted before any await
struct MutationCtx {
    proposal: Proposal,
    brief: String,
    creative_type: CreativeType,
}

/// The session state machine and orchestrator
pub struct SessionController {
    collaborator: Arc<dyn Collaborator>,
    coordinator: Coordinator,
    retry: RetryPolicy,
    stage: Stage,
    user: Option<User>,
    active_project: Option<ProjectId>,
    active_brief: Option<BriefId>,
    pending: Option<PendingRun>,
    /// Where Back/Finish goes; consumed exactly once
    return_to_project: Option<ProjectId>,
    /// Error overlay text; dismissing resumes the underlying stage
    error: Option<String>,
    /// Cooperative single-writer gate over proposal mutations.
    ///
    /// Through `&mut self` alone the methods already serialize, so the gate
    /// is held only for the duration of one call. It becomes load-bearing
    /// when a frontend drives the controller through a shared handle (a
    /// mutex or actor mailbox) and re-enters while an operation is awaiting:
    /// the second caller gets [`SessionError::Busy`] instead of interleaved
    /// mutations.
    task_running: bool,
}

impl SessionController {
    /// Create a logged-out controller
    #[must_use]
    pub fn new(collaborator: Arc<dyn Collaborator>, coordinator: Coordinator) -> Self {
        Self {
            collaborator,
            coordinator,
            retry: RetryPolicy::default(),
            stage: Stage::LoggedOut,
            user: None,
            active_project: None,
            active_brief: None,
            pending: None,
            return_to_project: None,
            error: None,
            task_running: false,
        }
    }

    /// Replace the collaborator retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    // --- accessors -----------------------------------------------------

    #[inline]
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_task_running(&self) -> bool {
        self.task_running
    }

    #[inline]
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn return_to_project(&self) -> Option<ProjectId> {
        self.return_to_project
    }

    /// Clarification questions awaiting answers, if any
    #[must_use]
    pub fn pending_questions(&self) -> Option<&[String]> {
        self.pending.as_ref().map(|p| p.questions.as_slice())
    }

    /// The active run, once generation has installed it
    #[must_use]
    pub fn current_run(&self) -> Option<&BriefRun> {
        let user = self.user.as_ref()?;
        user.project(self.active_project?)?.run(self.active_brief?)
    }

    // --- auth ----------------------------------------------------------

    /// Enter the session with a resolved identity
    ///
    /// Authentication itself is an external capability; the caller hands
    /// over the user record (fresh or loaded from the local store).
    pub fn login(&mut self, user: User) -> Result<(), SessionError> {
        self.transition(Stage::Home)?;
        tracing::info!(user = %user.username, "session started");
        self.user = Some(user);
        Ok(())
    }

    /// Clear all in-memory session state and return to `LoggedOut`
    pub fn logout(&mut self) {
        tracing::info!("session ended");
        self.stage = Stage::LoggedOut;
        self.user = None;
        self.active_project = None;
        self.active_brief = None;
        self.pending = None;
        self.return_to_project = None;
        self.error = None;
        self.task_running = false;
    }

    // --- navigation ----------------------------------------------------

    pub fn open_project_list(&mut self) -> Result<(), SessionError> {
        self.transition(Stage::ProjectList)
    }

    pub fn open_project(&mut self, project_id: ProjectId) -> Result<(), SessionError> {
        let user = self.user.as_ref().ok_or(SessionError::NotLoggedIn)?;
        if user.project(project_id).is_none() {
            return Err(SessionError::NoSuchProject);
        }
        self.transition(Stage::ProjectDetail)?;
        self.active_project = Some(project_id);
        Ok(())
    }

    /// Reopen a saved run's results from its project page
    ///
    /// Sets the return pointer so leaving the results goes back to the
    /// project, same as a brief submitted from there.
    pub fn open_run(
        &mut self,
        project_id: ProjectId,
        brief_id: BriefId,
    ) -> Result<(), SessionError> {
        let user = self.user.as_ref().ok_or(SessionError::NotLoggedIn)?;
        let project = user.project(project_id).ok_or(SessionError::NoSuchProject)?;
        if project.run(brief_id).is_none() {
            return Err(SessionError::NoSuchBrief);
        }
        self.transition(Stage::Results)?;
        self.return_to_project = Some(project_id);
        self.active_project = Some(project_id);
        self.active_brief = Some(brief_id);
        Ok(())
    }

    /// Navigate home mid-flow; drops the return-to-project pointer
    pub fn go_home(&mut self) -> Result<(), SessionError> {
        self.transition(Stage::Home)?;
        self.return_to_project = None;
        self.active_project = None;
        Ok(())
    }

    pub fn open_settings(&mut self) -> Result<(), SessionError> {
        self.transition(Stage::Settings)
    }

    /// Leave the current run view; consumes the return pointer once
    pub fn finish(&mut self) -> Result<(), SessionError> {
        let target = match self.return_to_project.take() {
            Some(project_id)
                if self
                    .user
                    .as_ref()
                    .is_some_and(|u| u.project(project_id).is_some()) =>
            {
                self.active_project = Some(project_id);
                Stage::ProjectDetail
            }
            _ => Stage::Home,
        };
        self.transition(target)
    }

    /// Dismiss the error overlay; the underlying stage resumes unchanged
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // --- projects ------------------------------------------------------

    /// Explicit project creation; the local write failure is surfaced
    pub fn create_project(&mut self, name: &str) -> Result<ProjectId, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::Validation("project name is empty".to_string()));
        }
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        if user.project_by_name(name).is_some() {
            return Err(SessionError::Validation(format!(
                "project `{name}` already exists"
            )));
        }
        let project = Project::new(name);
        let project_id = project.id;
        user.projects.push(project);

        let snapshot = user.clone();
        self.coordinator.persist_user(&snapshot).map_err(|e| {
            let err = SessionError::from(e);
            self.error = Some(err.user_message().to_string());
            err
        })?;
        Ok(project_id)
    }

    /// Archive a project; remote archive of its runs is best-effort
    pub async fn archive_project(&mut self, project_id: ProjectId) -> Result<(), SessionError> {
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        let project = user
            .project_mut(project_id)
            .ok_or(SessionError::NoSuchProject)?;
        project.archived = true;
        let run_ids: Vec<BriefId> = project.runs.iter().map(|r| r.id).collect();

        let snapshot = user.clone();
        self.coordinator.persist_user(&snapshot)?;
        for brief_id in run_ids {
            // local copy already written above; this adds the remote archive
            self.coordinator.archive_brief(&snapshot, brief_id).await?;
        }
        Ok(())
    }

    /// Delete one run: local deletion authoritative, remote best-effort
    pub async fn delete_brief(
        &mut self,
        project_id: ProjectId,
        brief_id: BriefId,
    ) -> Result<(), SessionError> {
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        let project = user
            .project_mut(project_id)
            .ok_or(SessionError::NoSuchProject)?;
        project
            .remove_run(brief_id)
            .ok_or(SessionError::NoSuchBrief)?;
        if self.active_brief == Some(brief_id) {
            self.active_brief = None;
        }

        let username = user.username.clone();
        self.coordinator
            .delete_brief(&username, project_id, brief_id)
            .await
            .map_err(|e| {
                let err = SessionError::from(e);
                self.error = Some(err.user_message().to_string());
                err
            })
    }

    // --- brief flow ----------------------------------------------------

    /// Submit a brief from Home or a project page
    ///
    /// Resolves (or inline-creates) the project and runs the clarification
    /// call. Failure falls back to Home: no refinement context exists yet
    /// to retry against.
    pub async fn submit_brief(
        &mut self,
        text: &str,
        creative_type: CreativeType,
        selector: ProjectSelector,
    ) -> Result<(), SessionError> {
        if !matches!(self.stage, Stage::Home | Stage::ProjectDetail) {
            return Err(SessionError::Stage(StageError {
                from: self.stage,
                to: Stage::AwaitingRefinementAnswers,
            }));
        }
        if text.trim().is_empty() {
            return Err(SessionError::Validation("brief text is empty".to_string()));
        }
        self.begin_task()?;

        if self.stage == Stage::ProjectDetail {
            self.return_to_project = self.active_project;
        }

        let (project_id, project_name) = match self.resolve_project(selector) {
            Ok(resolved) => resolved,
            Err(e) => {
                self.task_running = false;
                return Err(e);
            }
        };

        let collaborator = Arc::clone(&self.collaborator);
        let retry = self.retry.clone();
        let text = text.to_string();
        let result = call_with_retry(&retry, timeouts::BRIEF_REFINEMENT, || {
            collaborator.refine_brief(&text, creative_type, Some(&project_name))
        })
        .await;

        match result {
            Ok(refined) => {
                let mut run = BriefRun::new(InitialBrief {
                    text,
                    creative_type,
                });
                run.refined_brief_text = Some(refined.summary);
                self.pending = Some(PendingRun {
                    project_id,
                    run,
                    questions: refined.questions,
                    answers: Vec::new(),
                });
                self.task_running = false;
                self.transition(Stage::AwaitingRefinementAnswers)
            }
            Err(e) => Err(self.fail(Some(Stage::Home), e.into())),
        }
    }

    /// Answer the clarification questions and generate proposals
    ///
    /// Runs inspiration search, relevance filtering, and proposal
    /// generation; installs three version-1 threads on success. Any
    /// failure rolls back to `AwaitingRefinementAnswers` with the answers
    /// preserved, never back to Home, and never stuck in `Generating`.
    pub async fn submit_answers(&mut self, answers: Vec<String>) -> Result<(), SessionError> {
        self.require_stage(Stage::AwaitingRefinementAnswers)?;
        self.begin_task()?;

        let Some(pending) = self.pending.as_mut() else {
            self.task_running = false;
            return Err(SessionError::NoSuchBrief);
        };
        pending.answers = answers;

        let creative_type = pending.run.initial_brief.creative_type;
        let summary = pending.run.refined_brief_text.clone().unwrap_or_default();
        let answer_block = pending.answers.join("\n");
        let context = if answer_block.trim().is_empty() {
            summary
        } else {
            format!("{summary}\n\nClarifications:\n{answer_block}")
        };
        let project_id = pending.project_id;
        let project_name = match self
            .user
            .as_ref()
            .ok_or(SessionError::NotLoggedIn)
            .and_then(|u| u.project(project_id).ok_or(SessionError::NoSuchProject))
        {
            Ok(project) => project.name.clone(),
            Err(e) => {
                self.task_running = false;
                return Err(e);
            }
        };

        self.stage = Stage::Generating;

        let collaborator = Arc::clone(&self.collaborator);
        let retry = self.retry.clone();
        let generated = async {
            let cases = call_with_retry(&retry, timeouts::INSPIRATIONS, || {
                collaborator.inspirations(&context, creative_type)
            })
            .await?;
            let kept = inspiration::filter_inspirations(cases);

            let raw = call_with_retry(&retry, timeouts::PROPOSAL_GENERATION, || {
                collaborator.generate_proposals(&context, &kept, &project_name)
            })
            .await?;
            coerce::expect_proposal_count(&raw)?;
            Ok::<_, muse_collab::CollabError>((kept, raw))
        }
        .await;

        match generated {
            Ok((kept, raw)) => {
                // only now does state mutate; the whole chain succeeded
                let run = match self.install_generated(project_id, context, kept, raw) {
                    Ok(run) => run,
                    Err(e) => {
                        return Err(self.fail(Some(Stage::AwaitingRefinementAnswers), e));
                    }
                };
                let brief_id = run.id;
                self.active_project = Some(project_id);
                self.active_brief = Some(brief_id);
                self.auto_save(&run).await;
                self.task_running = false;
                self.stage = Stage::Results;
                tracing::info!(brief = %brief_id, "proposals generated");
                Ok(())
            }
            Err(e) => Err(self.fail(Some(Stage::AwaitingRefinementAnswers), e.into())),
        }
    }

    /// Push the generated proposals into the owning project
    ///
    /// Any failure here must go through `fail` so the controller is never
    /// left in `Generating` with the gate held.
    fn install_generated(
        &mut self,
        project_id: ProjectId,
        context: String,
        inspirations: Vec<InspirationCase>,
        raw: Vec<RawProposal>,
    ) -> Result<BriefRun, SessionError> {
        let mut pending = self.pending.take().ok_or(SessionError::NoSuchBrief)?;
        pending.run.refined_brief_text = Some(context);
        pending.run.inspirations = inspirations;
        pending.run.proposals = raw.into_iter().map(RawProposal::into_thread).collect();

        let run = pending.run;
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        let project = user
            .project_mut(project_id)
            .ok_or(SessionError::NoSuchProject)?;
        project.runs.push(run.clone());
        Ok(run)
    }

    /// Back out of the clarification step; consumes the return pointer
    pub fn cancel_refinement(&mut self) -> Result<(), SessionError> {
        self.require_stage(Stage::AwaitingRefinementAnswers)?;
        self.pending = None;
        self.finish()
    }

    // --- proposal mutations --------------------------------------------

    /// Regenerate a proposal from feedback, bumping its version
    pub async fn optimize(
        &mut self,
        proposal_id: ProposalId,
        feedback: &str,
    ) -> Result<(), SessionError> {
        self.require_stage(Stage::Results)?;
        if feedback.trim().is_empty() {
            return Err(SessionError::Validation("feedback is empty".to_string()));
        }
        self.begin_task()?;
        let ctx = match self.mutation_context(proposal_id) {
            Ok(ctx) => ctx,
            Err(e) => return Err(self.fail(None, e)),
        };

        let collaborator = Arc::clone(&self.collaborator);
        let retry = self.retry.clone();
        let feedback = feedback.to_string();
        let result = call_with_retry(&retry, timeouts::PROPOSAL_OPTIMIZATION, || {
            collaborator.optimize_proposal(&ctx.proposal, &feedback, &ctx.brief)
        })
        .await;

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail(None, e.into())),
        };
        let replacement = ReplacementContent {
            core_idea: raw.core_idea,
            detailed_description: raw.detailed_description,
            example: raw.example,
            why_it_works: raw.why_it_works,
        };
        let next = match muse_version::optimize(&ctx.proposal, replacement, Some(&ctx.brief)) {
            Ok(next) => next,
            Err(e) => return Err(self.fail(None, e.into())),
        };
        self.finish_mutation(next).await
    }

    /// Generate the expression (refinement) layer for a proposal
    pub async fn refine(&mut self, proposal_id: ProposalId) -> Result<(), SessionError> {
        self.require_stage(Stage::Results)?;
        self.begin_task()?;
        let ctx = match self.mutation_context(proposal_id) {
            Ok(ctx) => ctx,
            Err(e) => return Err(self.fail(None, e)),
        };

        let collaborator = Arc::clone(&self.collaborator);
        let retry = self.retry.clone();
        let result = call_with_retry(&retry, timeouts::EXPRESSION_REFINEMENT, || {
            collaborator.refine_expression(&ctx.proposal, ctx.creative_type, &ctx.brief)
        })
        .await;

        match result {
            Ok(refinement) => {
                let next = muse_refine::attach_first(&ctx.proposal, refinement);
                self.finish_mutation(next).await
            }
            Err(e) => Err(self.fail(None, e.into())),
        }
    }

    /// Save a user edit of the expression layer (auto-saved, no AI call)
    pub async fn save_refinement_edit(
        &mut self,
        proposal_id: ProposalId,
        edit: RefinementEdit,
    ) -> Result<(), SessionError> {
        self.require_stage(Stage::Results)?;
        self.begin_task()?;
        let ctx = match self.mutation_context(proposal_id) {
            Ok(ctx) => ctx,
            Err(e) => return Err(self.fail(None, e)),
        };
        let next = muse_refine::save_user_edit(&ctx.proposal, edit, Utc::now());
        self.finish_mutation(next).await
    }

    /// Finalize the live version with a generated execution plan
    pub async fn execute(&mut self, proposal_id: ProposalId) -> Result<(), SessionError> {
        self.require_stage(Stage::Results)?;
        self.begin_task()?;
        let ctx = match self.mutation_context(proposal_id) {
            Ok(ctx) => ctx,
            Err(e) => return Err(self.fail(None, e)),
        };
        self.plan_and_finalize(ctx.proposal.clone(), &ctx).await
    }

    /// Promote a historical snapshot to a new live version and execute it
    ///
    /// The promoted copy is only installed once the execution plan call
    /// succeeds; a failure leaves the thread exactly as it was.
    pub async fn promote_and_execute(
        &mut self,
        proposal_id: ProposalId,
        snapshot_version: u32,
    ) -> Result<(), SessionError> {
        self.require_stage(Stage::Results)?;
        self.begin_task()?;
        let ctx = match self.mutation_context(proposal_id) {
            Ok(ctx) => ctx,
            Err(e) => return Err(self.fail(None, e)),
        };
        let Some(snapshot) = ctx.proposal.snapshot_at(snapshot_version).cloned() else {
            return Err(self.fail(None, SessionError::NoSuchProposal));
        };
        let promoted = match muse_version::promote(&ctx.proposal, &snapshot, Some(&ctx.brief)) {
            Ok(promoted) => promoted,
            Err(e) => return Err(self.fail(None, e.into())),
        };
        self.plan_and_finalize(promoted, &ctx).await
    }

    async fn plan_and_finalize(
        &mut self,
        proposal: Proposal,
        ctx: &MutationCtx,
    ) -> Result<(), SessionError> {
        let collaborator = Arc::clone(&self.collaborator);
        let retry = self.retry.clone();
        let result = call_with_retry(&retry, timeouts::EXECUTION_PLAN, || {
            collaborator.execution_plan(&proposal, ctx.creative_type, &ctx.brief)
        })
        .await;

        let plan = match result {
            Ok(plan) => plan,
            Err(e) => return Err(self.fail(None, e.into())),
        };
        match muse_version::finalize(&proposal, plan) {
            Ok(finalized) => self.finish_mutation(finalized).await,
            Err(e) => Err(self.fail(None, e.into())),
        }
    }

    // --- internals -----------------------------------------------------

    fn transition(&mut self, to: Stage) -> Result<(), SessionError> {
        validate_transition(self.stage, to)?;
        tracing::debug!(from = ?self.stage, ?to, "stage transition");
        self.stage = to;
        Ok(())
    }

    fn require_stage(&self, stage: Stage) -> Result<(), SessionError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(SessionError::Stage(StageError {
                from: self.stage,
                to: stage,
            }))
        }
    }

    fn begin_task(&mut self) -> Result<(), SessionError> {
        if self.task_running {
            return Err(SessionError::Busy);
        }
        self.task_running = true;
        Ok(())
    }

    /// Roll back a failed operation: reset the gate, set the overlay, and
    /// move to the designated fallback stage if one applies.
    fn fail(&mut self, fallback: Option<Stage>, error: SessionError) -> SessionError {
        tracing::warn!(error = %error, "session operation failed");
        self.task_running = false;
        self.error = Some(error.user_message().to_string());
        if let Some(stage) = fallback {
            self.stage = stage;
            if stage == Stage::Home {
                self.return_to_project = None;
            }
        }
        error
    }

    fn resolve_project(
        &mut self,
        selector: ProjectSelector,
    ) -> Result<(ProjectId, String), SessionError> {
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        match selector {
            ProjectSelector::Existing(project_id) => user
                .project(project_id)
                .map(|p| (project_id, p.name.clone()))
                .ok_or(SessionError::NoSuchProject),
            ProjectSelector::New(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(SessionError::Validation(
                        "project name is empty".to_string(),
                    ));
                }
                if let Some(existing) = user.project_by_name(&name) {
                    return Ok((existing.id, existing.name.clone()));
                }
                let project = Project::new(name.clone());
                let project_id = project.id;
                user.projects.push(project);
                Ok((project_id, name))
            }
        }
    }

    fn mutation_context(&self, proposal_id: ProposalId) -> Result<MutationCtx, SessionError> {
        let run = self.current_run().ok_or(SessionError::NoSuchBrief)?;
        let proposal = run
            .proposal(proposal_id)
            .cloned()
            .ok_or(SessionError::NoSuchProposal)?;
        let brief = run
            .refined_brief_text
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(SessionError::MissingBrief)?;
        Ok(MutationCtx {
            proposal,
            brief,
            creative_type: run.initial_brief.creative_type,
        })
    }

    /// Install a mutated proposal into the active run, auto-save, and
    /// release the gate.
    async fn finish_mutation(&mut self, next: Proposal) -> Result<(), SessionError> {
        let install = self.install_proposal(next);
        match install {
            Ok(run) => {
                self.auto_save(&run).await;
                self.task_running = false;
                Ok(())
            }
            Err(e) => Err(self.fail(None, e)),
        }
    }

    fn install_proposal(&mut self, next: Proposal) -> Result<BriefRun, SessionError> {
        let project_id = self.active_project.ok_or(SessionError::NoSuchProject)?;
        let brief_id = self.active_brief.ok_or(SessionError::NoSuchBrief)?;
        let user = self.user.as_mut().ok_or(SessionError::NotLoggedIn)?;
        let run = user
            .project_mut(project_id)
            .ok_or(SessionError::NoSuchProject)?
            .run_mut(brief_id)
            .ok_or(SessionError::NoSuchBrief)?;
        let slot = run
            .proposal_mut(next.id)
            .ok_or(SessionError::NoSuchProposal)?;
        *slot = next;
        Ok(run.clone())
    }

    /// Best-effort persistence; outcomes are logged by the coordinator and
    /// never block the workflow.
    async fn auto_save(&self, run: &BriefRun) {
        if let Some(user) = self.user.as_ref() {
            let outcome = self.coordinator.auto_save(user, run).await;
            tracing::debug!(
                brief = %run.id,
                local_ok = outcome.locally_saved(),
                fully_ok = outcome.fully_saved(),
                "auto-save attempted"
            );
        }
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("stage", &self.stage)
            .field("task_running", &self.task_running)
            .field("active_project", &self.active_project)
            .field("active_brief", &self.active_brief)
            .finish()
    }
}
