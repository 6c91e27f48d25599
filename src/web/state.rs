//! Shared application state and per-request controller construction.

use crate::todo::{ports::TodoRepository, services::TodoService};
use crate::view::TodoRenderer;
use axum::extract::FromRef;
use mockable::DefaultClock;
use std::sync::Arc;

/// Controller type used by the HTTP handlers.
pub type TodoController = TodoService<dyn TodoRepository, DefaultClock>;

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn TodoRepository>,
    clock: Arc<DefaultClock>,
    renderer: Arc<TodoRenderer>,
}

impl AppState {
    /// Creates application state around a store handle and a renderer.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>, renderer: TodoRenderer) -> Self {
        Self {
            repository,
            clock: Arc::new(DefaultClock),
            renderer: Arc::new(renderer),
        }
    }
}

/// Each request gets its own controller bound to the shared store handle.
impl FromRef<AppState> for TodoController {
    fn from_ref(state: &AppState) -> Self {
        TodoService::new(Arc::clone(&state.repository), Arc::clone(&state.clock))
    }
}

impl FromRef<AppState> for Arc<TodoRenderer> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.renderer)
    }
}
