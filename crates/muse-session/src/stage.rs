//! Application stage state machine
//!
//! Stages are driven by user actions and async outcomes; every async branch
//! has a rollback target, so the machine can never be stranded in
//! [`Stage::Generating`].

use serde::{Deserialize, Serialize};

/// Application stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    LoggedOut,
    Home,
    ProjectList,
    ProjectDetail,
    AwaitingRefinementAnswers,
    Generating,
    Results,
    Settings,
}

/// Illegal stage transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal stage transition: {from:?} -> {to:?}")]
pub struct StageError {
    pub from: Stage,
    pub to: Stage,
}

/// Stages reachable from `from`
///
/// Logout is reachable from every logged-in stage.
pub fn allowed_transitions(from: Stage) -> Vec<Stage> {
    use Stage::*;
    match from {
        LoggedOut => vec![Home],
        Home => vec![ProjectList, AwaitingRefinementAnswers, Settings, LoggedOut],
        ProjectList => vec![Home, ProjectDetail, Settings, LoggedOut],
        ProjectDetail => vec![
            Home,
            ProjectList,
            AwaitingRefinementAnswers,
            Results,
            Settings,
            LoggedOut,
        ],
        AwaitingRefinementAnswers => vec![Generating, Home, ProjectDetail, LoggedOut],
        Generating => vec![Results, AwaitingRefinementAnswers, Home, LoggedOut],
        Results => vec![Home, ProjectDetail, Settings, LoggedOut],
        Settings => vec![Home, ProjectList, LoggedOut],
    }
}

/// Validate a transition against the table
pub fn validate_transition(from: Stage, to: Stage) -> Result<(), StageError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(StageError { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_always_has_a_rollback() {
        let targets = allowed_transitions(Stage::Generating);
        assert!(targets.contains(&Stage::Results));
        assert!(targets.contains(&Stage::AwaitingRefinementAnswers));
        assert!(targets.contains(&Stage::Home));
    }

    #[test]
    fn logout_reachable_from_every_logged_in_stage() {
        use Stage::*;
        for from in [
            Home,
            ProjectList,
            ProjectDetail,
            AwaitingRefinementAnswers,
            Generating,
            Results,
            Settings,
        ] {
            assert!(
                allowed_transitions(from).contains(&LoggedOut),
                "logout missing from {from:?}"
            );
        }
    }

    #[test]
    fn logged_out_only_reaches_home() {
        assert_eq!(allowed_transitions(Stage::LoggedOut), vec![Stage::Home]);
        assert!(validate_transition(Stage::LoggedOut, Stage::Results).is_err());
    }

    #[test]
    fn brief_submit_paths() {
        assert!(validate_transition(Stage::Home, Stage::AwaitingRefinementAnswers).is_ok());
        assert!(validate_transition(Stage::ProjectDetail, Stage::AwaitingRefinementAnswers).is_ok());
        assert!(validate_transition(Stage::AwaitingRefinementAnswers, Stage::Generating).is_ok());
        assert!(validate_transition(Stage::Generating, Stage::Results).is_ok());
    }

    #[test]
    fn no_direct_home_to_results() {
        assert!(validate_transition(Stage::Home, Stage::Results).is_err());
        assert!(validate_transition(Stage::Home, Stage::Generating).is_err());
    }
}
