//! Durability tests for the JSON-file local store.

use muse_model::{BriefRun, CreativeType, InitialBrief, Project, User};
use muse_store::{JsonFileStore, LocalStore, StoreError};
use pretty_assertions::assert_eq;

fn seeded_user() -> User {
    let mut user = User::new("ada");
    let mut project = Project::new("Drinks");
    project.runs.push(BriefRun::new(InitialBrief {
        text: "Energy drink slogan".to_string(),
        creative_type: CreativeType::Slogan,
    }));
    user.projects.push(project);
    user
}

#[test]
fn round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    let user = seeded_user();

    store.put("ada", &user).unwrap();

    // a fresh handle reads what the first one wrote
    let reopened = JsonFileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get("ada").unwrap(), Some(user));
}

#[test]
fn missing_user_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("ghost").unwrap(), None);
}

#[test]
fn delete_brief_persists_the_removal() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    let user = seeded_user();
    let project_id = user.projects[0].id;
    let brief_id = user.projects[0].runs[0].id;

    store.put("ada", &user).unwrap();
    store.delete_brief("ada", project_id, brief_id).unwrap();

    let after = store.get("ada").unwrap().unwrap();
    assert!(after.projects[0].runs.is_empty());
}

#[test]
fn deleting_unknown_brief_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    let user = seeded_user();
    let project_id = user.projects[0].id;

    store.put("ada", &user).unwrap();
    let result = store.delete_brief("ada", project_id, muse_model::BriefId::new());
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
