//! Then steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::then;
use todo_app::todo::{
    domain::{TodoItem, TodoListKind},
    services::TodoServiceError,
};

fn descriptions(world: &TodoWorld, kind: TodoListKind) -> Result<Vec<String>, eyre::Report> {
    let list = run_async(world.service.list(kind))?;
    Ok(list
        .items
        .iter()
        .map(TodoItem::description)
        .map(|description| description.as_str().to_owned())
        .collect())
}

fn list_kind(name: &str) -> Result<TodoListKind, eyre::Report> {
    match name {
        "active" => Ok(TodoListKind::Active),
        "completed" => Ok(TodoListKind::Completed),
        other => Err(eyre::eyre!("unknown list {other:?} in scenario")),
    }
}

#[then(r#"the {list} list shows "{description}""#)]
fn list_shows(world: &TodoWorld, list: String, description: String) -> Result<(), eyre::Report> {
    let shown = descriptions(world, list_kind(&list)?)?;
    if shown != [description.clone()] {
        return Err(eyre::eyre!(
            "expected the {list} list to hold only {description:?}, found {shown:?}"
        ));
    }
    Ok(())
}

#[then("the {list} list is empty")]
fn list_is_empty(world: &TodoWorld, list: String) -> Result<(), eyre::Report> {
    let shown = descriptions(world, list_kind(&list)?)?;
    if !shown.is_empty() {
        return Err(eyre::eyre!("expected the {list} list to be empty, found {shown:?}"));
    }
    Ok(())
}

#[then("the request is rejected as invalid")]
fn request_rejected_as_invalid(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))?;
    if !matches!(result, Err(TodoServiceError::Validation(_))) {
        return Err(eyre::eyre!("expected a validation error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the request fails with "{message}""#)]
fn request_fails_with(world: &TodoWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))?;
    match result {
        Err(err @ TodoServiceError::NotFound(_)) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected failure {message:?}, got {other:?}")),
    }
}
