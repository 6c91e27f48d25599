//! Domain model for todo items.
//!
//! A todo item is a short description with a completion flag. All
//! infrastructure concerns stay outside of the domain boundary.

mod error;
mod ids;
mod item;

pub use error::TodoDomainError;
pub use ids::{Description, TodoItemId};
pub use item::{NewTodoItem, PersistedTodoItemData, TodoItem, TodoListKind};
pub(crate) use item::sort_by_creation;
