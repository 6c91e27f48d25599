//! Repository port for todo item persistence and listing.

use crate::todo::domain::{NewTodoItem, TodoItem, TodoItemId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo item persistence contract.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every stored item in no guaranteed order.
    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Returns incomplete items ordered ascending by creation time.
    async fn list_active(&self) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Returns completed items ordered ascending by creation time.
    async fn list_completed(&self) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: TodoItemId) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Stores a new item, assigning it a fresh identifier.
    async fn insert(&self, new_item: &NewTodoItem) -> TodoRepositoryResult<TodoItem>;

    /// Persists the description and completion flag of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not exist.
    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()>;

    /// Removes an item permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not exist.
    async fn delete(&self, id: TodoItemId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The item was not found.
    #[error("todo item not found: {0}")]
    NotFound(TodoItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
