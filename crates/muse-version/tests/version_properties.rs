use muse_model::{Proposal, ProposalContent};
use muse_version::{optimize, promote, ReplacementContent, VersionError};
use proptest::prelude::*;

const BRIEF: Option<&str> = Some("context brief");

fn content() -> ProposalContent {
    ProposalContent {
        concept_title: "Constant Title".to_string(),
        core_idea: "v1 core".to_string(),
        detailed_description: "v1 detail".to_string(),
        example: "v1 example".to_string(),
        why_it_works: "v1 works".to_string(),
    }
}

fn replacement(step: usize) -> ReplacementContent {
    ReplacementContent {
        core_idea: format!("core {step}"),
        detailed_description: format!("detail {step}"),
        example: format!("example {step}"),
        why_it_works: format!("works {step}"),
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Optimize,
    /// Promote the history entry at (seed % history.len())
    Promote(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Optimize),
        (0usize..32).prop_map(Op::Promote),
    ]
}

proptest! {
    /// Any sequence of optimize/promote keeps versions strictly increasing
    /// and the history set exactly {1, ..., version-1}.
    #[test]
    fn version_monotonicity_and_contiguity(ops in prop::collection::vec(op_strategy(), 0..24)) {
        let mut live = Proposal::new_thread(content());

        for (step, op) in ops.into_iter().enumerate() {
            let previous_version = live.version;
            let next = match op {
                Op::Optimize => optimize(&live, replacement(step), BRIEF).unwrap(),
                Op::Promote(seed) => {
                    if live.history.is_empty() {
                        continue;
                    }
                    let snap = live.history[seed % live.history.len()].clone();
                    promote(&live, &snap, BRIEF).unwrap()
                }
            };

            prop_assert!(next.version > previous_version);
            prop_assert_eq!(next.version, previous_version + 1);
            prop_assert!(next.version_set_is_contiguous());
            prop_assert_eq!(&next.content.concept_title, "Constant Title");
            live = next;
        }
    }

    /// Snapshots already in history are never mutated by later operations.
    #[test]
    fn history_immutability(ops in prop::collection::vec(op_strategy(), 1..16)) {
        let mut live = Proposal::new_thread(content());

        for (step, op) in ops.into_iter().enumerate() {
            let recorded = live.history.clone();
            let next = match op {
                Op::Optimize => optimize(&live, replacement(step), BRIEF).unwrap(),
                Op::Promote(seed) => {
                    if live.history.is_empty() {
                        continue;
                    }
                    let snap = live.history[seed % live.history.len()].clone();
                    promote(&live, &snap, BRIEF).unwrap()
                }
            };

            // the new history extends the old one by exactly one frozen copy
            prop_assert_eq!(next.history.len(), recorded.len() + 1);
            prop_assert_eq!(&next.history[..recorded.len()], &recorded[..]);
            live = next;
        }
    }
}

#[test]
fn promotion_of_old_snapshot_does_not_rewind() {
    let mut live = Proposal::new_thread(content());
    for step in 0..4 {
        live = optimize(&live, replacement(step), BRIEF).unwrap();
    }
    assert_eq!(live.version, 5);

    let v2 = live.snapshot_at(2).unwrap().clone();
    let promoted = promote(&live, &v2, BRIEF).unwrap();
    assert_eq!(promoted.version, 6);
    assert_eq!(promoted.content.core_idea, v2.content.core_idea);
}

#[test]
fn operations_without_context_leave_state_untouched() {
    let live = Proposal::new_thread(content());
    let before = live.clone();
    assert_eq!(
        optimize(&live, replacement(0), None),
        Err(VersionError::MissingBriefContext)
    );
    assert_eq!(live, before);
}
