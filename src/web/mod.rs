//! HTTP surface of the todo application.
//!
//! Routes mirror the controller actions: `GET` endpoints return the page or a
//! list fragment, `POST` endpoints take form-encoded bodies and answer with
//! the list fragment affected by the mutation.

mod error;
mod forms;
mod handlers;
mod state;

pub use error::WebError;
pub use forms::{CreateTaskForm, EditTaskForm, TaskIdForm};
pub use handlers::{
    HX_RETARGET, HX_TRIGGER, TASKS_CHANGED_EVENT, active_tasks, complete_task, completed_tasks,
    create_task, delete_task, edit_task, index,
};
pub use state::{AppState, TodoController};

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Builds the application router with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/Todo", get(index))
        .route("/Todo/Index", get(index))
        .route("/Todo/GetActiveTasks", get(active_tasks))
        .route("/Todo/GetCompletedTasks", get(completed_tasks))
        .route("/Todo/Create", post(create_task))
        .route("/Todo/Edit", post(edit_task))
        .route("/Todo/Complete", post(complete_task))
        .route("/Todo/Delete", post(delete_task))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
