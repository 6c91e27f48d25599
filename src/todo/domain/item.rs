//! Todo item aggregate and list classification.

use super::{Description, TodoItemId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Which of the two task lists an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoListKind {
    /// Items that are not yet completed.
    Active,
    /// Items marked as completed.
    Completed,
}

impl TodoListKind {
    /// Returns the list holding items with the given completion flag.
    #[must_use]
    pub const fn for_completion(is_completed: bool) -> Self {
        if is_completed {
            Self::Completed
        } else {
            Self::Active
        }
    }

    /// Returns the completion flag shared by every item in this list.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// A task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    description: Description,
    created_at: DateTime<Utc>,
}

impl NewTodoItem {
    /// Creates an unsaved task stamped with the current clock time.
    #[must_use]
    pub fn new(description: Description, clock: &impl Clock) -> Self {
        Self {
            description,
            created_at: clock.utc(),
        }
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Todo item aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: TodoItemId,
    description: Description,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoItemData {
    /// Store-assigned identifier.
    pub id: TodoItemId,
    /// Persisted description.
    pub description: Description,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Reconstructs a todo item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoItemData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            is_completed: data.is_completed,
            created_at: data.created_at,
        }
    }

    /// Builds the stored form of a new item once the store assigned an id.
    #[must_use]
    pub fn from_new(id: TodoItemId, new_item: NewTodoItem) -> Self {
        Self {
            id,
            description: new_item.description,
            is_completed: false,
            created_at: new_item.created_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoItemId {
        self.id
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns whether the item is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the list this item currently belongs to.
    #[must_use]
    pub const fn list_kind(&self) -> TodoListKind {
        TodoListKind::for_completion(self.is_completed)
    }

    /// Replaces the description, leaving every other field untouched.
    pub fn rename(&mut self, description: Description) {
        self.description = description;
    }

    /// Flips the completion flag and returns the list the item moved to.
    pub const fn toggle_completion(&mut self) -> TodoListKind {
        self.is_completed = !self.is_completed;
        self.list_kind()
    }
}

/// Orders items ascending by creation time, falling back to id.
pub(crate) fn sort_by_creation(items: &mut [TodoItem]) {
    items.sort_by(|left, right| {
        left.created_at
            .cmp(&right.created_at)
            .then_with(|| left.id.cmp(&right.id))
    });
}
