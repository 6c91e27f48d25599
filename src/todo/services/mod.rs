//! Application services for todo orchestration.

mod controller;

pub use controller::{
    TodoBoard, TodoList, TodoOperation, TodoService, TodoServiceError, TodoServiceResult,
};
