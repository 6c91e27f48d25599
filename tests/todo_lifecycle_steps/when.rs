//! When steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::when;
use todo_app::todo::domain::TodoItemId;

#[when(r#"I add a task "{description}""#)]
fn add_task(world: &mut TodoWorld, description: String) {
    world.last_result = Some(run_async(world.service.create(&description)));
}

#[when("I add a task with an empty description")]
fn add_task_with_empty_description(world: &mut TodoWorld) {
    world.last_result = Some(run_async(world.service.create("")));
}

#[when(r#"I complete the task "{description}""#)]
fn complete_task(world: &mut TodoWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&description)?;
    world.last_result = Some(run_async(world.service.complete(id)));
    Ok(())
}

#[when("I complete a task that does not exist")]
fn complete_missing_task(world: &mut TodoWorld) {
    world.last_result = Some(run_async(world.service.complete(TodoItemId::new(404))));
}

#[when(r#"I rename the task "{current}" to "{renamed}""#)]
fn rename_task(
    world: &mut TodoWorld,
    current: String,
    renamed: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&current)?;
    world.last_result = Some(run_async(world.service.edit(id, &renamed)));
    Ok(())
}

#[when(r#"I delete the task "{description}""#)]
fn delete_task(world: &mut TodoWorld, description: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&description)?;
    world.last_result = Some(run_async(world.service.delete(id)));
    Ok(())
}
