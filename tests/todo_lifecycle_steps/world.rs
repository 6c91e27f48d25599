//! Shared world state for todo lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_app::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{TodoItem, TodoItemId},
    services::{TodoList, TodoService, TodoServiceError},
};

/// Service type used by the BDD world.
pub type TestTodoService = TodoService<InMemoryTodoRepository, DefaultClock>;

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub service: TestTodoService,
    pub last_result: Option<Result<TodoList, TodoServiceError>>,
}

impl TodoWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            last_result: None,
        }
    }

    /// Looks up a stored task by its description.
    pub fn task_named(&self, description: &str) -> Result<TodoItem, eyre::Report> {
        let board = run_async(self.service.index())?;
        board
            .active
            .into_iter()
            .chain(board.completed)
            .find(|item| item.description().as_str() == description)
            .ok_or_else(|| eyre::eyre!("no task described as {description:?}"))
    }

    /// Returns the identifier of the task with the given description.
    pub fn id_of(&self, description: &str) -> Result<TodoItemId, eyre::Report> {
        self.task_named(description).map(|item| item.id())
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
