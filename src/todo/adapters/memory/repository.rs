//! In-memory repository for tests and the `in_memory` storage mode.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{
        NewTodoItem, PersistedTodoItemData, TodoItem, TodoItemId, TodoListKind, sort_by_creation,
    },
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers come from a counter that starts at 1 and is never rewound, so
/// deleted identifiers are not reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    items: BTreeMap<TodoItemId, TodoItem>,
    last_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn list_by_kind(&self, kind: TodoListKind) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.read()?;
        let mut items: Vec<TodoItem> = state
            .items
            .values()
            .filter(|item| item.list_kind() == kind)
            .cloned()
            .collect();
        sort_by_creation(&mut items);
        Ok(items)
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.read()?;
        Ok(state.items.values().cloned().collect())
    }

    async fn list_active(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.list_by_kind(TodoListKind::Active)
    }

    async fn list_completed(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.list_by_kind(TodoListKind::Completed)
    }

    async fn find_by_id(&self, id: TodoItemId) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.read()?;
        Ok(state.items.get(&id).cloned())
    }

    async fn insert(&self, new_item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.write()?;
        let next_id = state.last_id.checked_add(1).ok_or_else(|| {
            TodoRepositoryError::persistence(std::io::Error::other("todo identifiers exhausted"))
        })?;
        state.last_id = next_id;
        let item = TodoItem::from_new(TodoItemId::new(next_id), new_item.clone());
        state.items.insert(item.id(), item.clone());
        Ok(item)
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .items
            .get_mut(&item.id())
            .ok_or(TodoRepositoryError::NotFound(item.id()))?;
        // Creation time is immutable; only the mutable columns are written.
        *stored = TodoItem::from_persisted(PersistedTodoItemData {
            id: stored.id(),
            description: item.description().clone(),
            is_completed: item.is_completed(),
            created_at: stored.created_at(),
        });
        Ok(())
    }

    async fn delete(&self, id: TodoItemId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .items
            .remove(&id)
            .map(drop)
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
