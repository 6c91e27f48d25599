//! Given steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty todo list")]
fn empty_todo_list(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let board = run_async(world.service.index()).wrap_err("load board")?;
    if !board.active.is_empty() || !board.completed.is_empty() {
        return Err(eyre::eyre!("expected a fresh store, found {board:?}"));
    }
    Ok(())
}

#[given(r#"a completed task "{description}""#)]
fn completed_task(world: &mut TodoWorld, description: String) -> Result<(), eyre::Report> {
    run_async(world.service.create(&description)).wrap_err("create task in scenario setup")?;
    let id = world.id_of(&description)?;
    run_async(world.service.complete(id)).wrap_err("complete task in scenario setup")?;
    Ok(())
}
