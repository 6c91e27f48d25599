//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoItemRow, TodoItemRow},
    schema::todo_items,
};
use crate::todo::{
    domain::{
        Description, NewTodoItem, PersistedTodoItemData, TodoItem, TodoItemId, TodoListKind,
    },
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent schema for the `todo_items` table.
const CREATE_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_todo_items/up.sql");

/// Builds a connection pool for the given database URL.
///
/// Building the pool opens its initial connections, so call this from a
/// blocking context.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when the pool cannot
/// establish its connections.
pub fn build_pool(database_url: &str, max_size: u32) -> TodoRepositoryResult<TodoPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(TodoRepositoryError::persistence)
}

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todo_items` table and its index when missing.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the DDL fails.
    pub async fn ensure_schema(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_SCHEMA_SQL)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }

    async fn list_by_kind(&self, kind: TodoListKind) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(move |connection| {
            let rows = todo_items::table
                .filter(todo_items::is_completed.eq(kind.is_completed()))
                .order((todo_items::created_at.asc(), todo_items::id.asc()))
                .select(TodoItemRow::as_select())
                .load::<TodoItemRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(|connection| {
            let rows = todo_items::table
                .select(TodoItemRow::as_select())
                .load::<TodoItemRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn list_active(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.list_by_kind(TodoListKind::Active).await
    }

    async fn list_completed(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.list_by_kind(TodoListKind::Completed).await
    }

    async fn find_by_id(&self, id: TodoItemId) -> TodoRepositoryResult<Option<TodoItem>> {
        self.run_blocking(move |connection| {
            let row = todo_items::table
                .find(id.value())
                .select(TodoItemRow::as_select())
                .first::<TodoItemRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn insert(&self, new_item: &NewTodoItem) -> TodoRepositoryResult<TodoItem> {
        let new_row = NewTodoItemRow {
            description: new_item.description().as_str().to_owned(),
            is_completed: false,
            created_at: new_item.created_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todo_items::table)
                .values(&new_row)
                .returning(TodoItemRow::as_returning())
                .get_result::<TodoItemRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_item(row)
        })
        .await
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let id = item.id();
        let description = item.description().as_str().to_owned();
        let is_completed = item.is_completed();

        self.run_blocking(move |connection| {
            let affected = diesel::update(todo_items::table.find(id.value()))
                .set((
                    todo_items::description.eq(description),
                    todo_items::is_completed.eq(is_completed),
                ))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TodoItemId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todo_items::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_item(row: TodoItemRow) -> TodoRepositoryResult<TodoItem> {
    let TodoItemRow {
        id,
        description,
        is_completed,
        created_at,
    } = row;

    let validated = Description::new(description).map_err(TodoRepositoryError::persistence)?;
    Ok(TodoItem::from_persisted(PersistedTodoItemData {
        id: TodoItemId::new(id),
        description: validated,
        is_completed,
        created_at,
    }))
}
