//! Diesel row models for todo persistence.

use super::schema::todo_items;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoItemRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for todo records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo_items)]
pub struct NewTodoItemRow {
    /// Task description.
    pub description: String,
    /// Completion flag, always `false` for new rows.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
