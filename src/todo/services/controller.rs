//! Controller service mapping todo actions onto repository calls.
//!
//! Every mutating operation answers with a freshly queried list, so callers
//! always render the store's post-mutation state rather than an echo of the
//! changed record.

use crate::todo::{
    domain::{
        Description, NewTodoItem, TodoDomainError, TodoItem, TodoItemId, TodoListKind,
        sort_by_creation,
    },
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Operations that can fail with a not-found signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoOperation {
    /// Editing a task description.
    Edit,
    /// Toggling task completion.
    Complete,
    /// Deleting a task.
    Delete,
}

impl TodoOperation {
    /// Returns the fixed human-readable message reported when the task is
    /// missing.
    #[must_use]
    pub const fn not_found_message(self) -> &'static str {
        match self {
            Self::Edit => "Task to edit not found",
            Self::Complete => "Task to complete not found",
            Self::Delete => "Task to delete not found",
        }
    }
}

impl fmt::Display for TodoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Edit => "edit",
            Self::Complete => "complete",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TodoDomainError),
    /// The addressed task does not exist, or an edit supplied an empty
    /// description.
    #[error("{}", .0.not_found_message())]
    NotFound(TodoOperation),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// One of the two task lists, ordered ascending by creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    /// Which list the items belong to.
    pub kind: TodoListKind,
    /// Items in display order.
    pub items: Vec<TodoItem>,
}

/// Both task lists, as shown on the full page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoBoard {
    /// Incomplete items in creation order.
    pub active: Vec<TodoItem>,
    /// Completed items in creation order.
    pub completed: Vec<TodoItem>,
}

/// Todo controller service.
///
/// Holds the store handle it was constructed with; the HTTP layer builds one
/// per request from shared state.
pub struct TodoService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TodoService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns both lists for the full page.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    pub async fn index(&self) -> TodoServiceResult<TodoBoard> {
        let (mut completed, mut active): (Vec<TodoItem>, Vec<TodoItem>) = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .partition(TodoItem::is_completed);
        sort_by_creation(&mut active);
        sort_by_creation(&mut completed);
        Ok(TodoBoard { active, completed })
    }

    /// Returns the active list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    pub async fn active_list(&self) -> TodoServiceResult<TodoList> {
        self.list(TodoListKind::Active).await
    }

    /// Returns the completed list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    pub async fn completed_list(&self) -> TodoServiceResult<TodoList> {
        self.list(TodoListKind::Completed).await
    }

    /// Returns the requested list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    pub async fn list(&self, kind: TodoListKind) -> TodoServiceResult<TodoList> {
        let items = match kind {
            TodoListKind::Active => self.repository.list_active().await?,
            TodoListKind::Completed => self.repository.list_completed().await?,
        };
        Ok(TodoList { kind, items })
    }

    /// Creates a task and returns the active list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the description is empty
    /// or [`TodoServiceError::Repository`] when the store fails.
    pub async fn create(&self, description: &str) -> TodoServiceResult<TodoList> {
        let validated = Description::new(description)?;
        let new_item = NewTodoItem::new(validated, &*self.clock);
        let created = self.repository.insert(&new_item).await?;
        tracing::info!(task_id = %created.id(), "task created");
        self.active_list().await
    }

    /// Replaces a task description and returns the active list.
    ///
    /// An empty description is reported as not found, the same as an unknown
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the task is missing or the
    /// description is empty, or [`TodoServiceError::Repository`] when the
    /// store fails.
    pub async fn edit(&self, id: TodoItemId, description: &str) -> TodoServiceResult<TodoList> {
        let operation = TodoOperation::Edit;
        let Ok(validated) = Description::new(description) else {
            tracing::debug!(task_id = %id, "edit rejected: empty description");
            return Err(TodoServiceError::NotFound(operation));
        };
        let mut item = self.find(id, operation).await?;
        item.rename(validated);
        self.persist(&item, operation).await?;
        tracing::info!(task_id = %id, "task description updated");
        self.active_list().await
    }

    /// Flips a task's completion flag and returns the list the task moved to.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the task is missing or
    /// [`TodoServiceError::Repository`] when the store fails.
    pub async fn complete(&self, id: TodoItemId) -> TodoServiceResult<TodoList> {
        let operation = TodoOperation::Complete;
        let mut item = self.find(id, operation).await?;
        let new_kind = item.toggle_completion();
        self.persist(&item, operation).await?;
        tracing::info!(task_id = %id, list = new_kind.as_str(), "task completion toggled");
        self.list(new_kind).await
    }

    /// Deletes a task and returns the list it belonged to.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the task is missing or
    /// [`TodoServiceError::Repository`] when the store fails.
    pub async fn delete(&self, id: TodoItemId) -> TodoServiceResult<TodoList> {
        let operation = TodoOperation::Delete;
        let prior_kind = self.find(id, operation).await?.list_kind();
        self.repository
            .delete(id)
            .await
            .map_err(|err| not_found_for(err, operation))?;
        tracing::info!(task_id = %id, list = prior_kind.as_str(), "task deleted");
        self.list(prior_kind).await
    }

    async fn find(&self, id: TodoItemId, operation: TodoOperation) -> TodoServiceResult<TodoItem> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(task_id = %id, %operation, "task not found");
            TodoServiceError::NotFound(operation)
        })
    }

    async fn persist(&self, item: &TodoItem, operation: TodoOperation) -> TodoServiceResult<()> {
        self.repository
            .update(item)
            .await
            .map_err(|err| not_found_for(err, operation))
    }
}

/// Maps a store-level miss (a concurrent delete) onto the operation's
/// not-found signal.
fn not_found_for(err: TodoRepositoryError, operation: TodoOperation) -> TodoServiceError {
    match err {
        TodoRepositoryError::NotFound(_) => TodoServiceError::NotFound(operation),
        other @ TodoRepositoryError::Persistence(_) => TodoServiceError::Repository(other),
    }
}
