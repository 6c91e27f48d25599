//! Request handlers for the todo routes.

use super::{
    error::WebError,
    forms::{CreateTaskForm, EditTaskForm, TaskIdForm},
    state::TodoController,
};
use crate::todo::{
    domain::TodoItemId,
    services::{TodoList, TodoOperation, TodoServiceError},
};
use crate::view::TodoRenderer;
use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::HeaderName;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

/// htmx response header naming the element the fragment replaces.
pub const HX_RETARGET: HeaderName = HeaderName::from_static("hx-retarget");

/// htmx response header naming client-side events to fire.
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// Event that makes the page refresh both list regions.
pub const TASKS_CHANGED_EVENT: &str = "tasks-changed";

/// `GET /`, `/Todo` and `/Todo/Index`: the full page.
///
/// # Errors
///
/// Returns [`WebError`] when the store or the renderer fails.
pub async fn index(
    State(controller): State<TodoController>,
    State(renderer): State<Arc<TodoRenderer>>,
) -> Result<Html<String>, WebError> {
    let board = controller.index().await?;
    Ok(Html(renderer.render_page(&board)?))
}

/// `GET /Todo/GetActiveTasks`: the active list fragment.
///
/// # Errors
///
/// Returns [`WebError`] when the store or the renderer fails.
pub async fn active_tasks(
    State(controller): State<TodoController>,
    State(renderer): State<Arc<TodoRenderer>>,
) -> Result<Html<String>, WebError> {
    let list = controller.active_list().await?;
    Ok(Html(renderer.render_list(&list)?))
}

/// `GET /Todo/GetCompletedTasks`: the completed list fragment.
///
/// # Errors
///
/// Returns [`WebError`] when the store or the renderer fails.
pub async fn completed_tasks(
    State(controller): State<TodoController>,
    State(renderer): State<Arc<TodoRenderer>>,
) -> Result<Html<String>, WebError> {
    let list = controller.completed_list().await?;
    Ok(Html(renderer.render_list(&list)?))
}

/// `POST /Todo/Create`.
///
/// # Errors
///
/// Returns a 400 [`WebError`] when the description is empty or missing.
pub async fn create_task(
    State(controller): State<TodoController>,
    State(renderer): State<Arc<TodoRenderer>>,
    body: Result<Form<CreateTaskForm>, FormRejection>,
) -> Result<Response, WebError> {
    let form = form_or_default(body);
    let list = controller.create(&form.description).await?;
    fragment_response(&renderer, &list)
}

/// `POST /Todo/Edit`.
///
/// # Errors
///
/// Returns a 404 [`WebError`] when the task is unknown or the description is
/// empty.
pub async fn edit_task(
    State(controller): State<TodoController>,
    State(renderer): State<Arc<TodoRenderer>>,
    body: Result<Form<EditTaskForm>, FormRejection>,
) -> Result<Response, WebError> {
    let form = form_or_default(body);
    let id = parse_id(&form.id, TodoOperation::Edit)?;
    let list = controller.edit(id, &form.description).await?;
    fragment_response(&renderer, &list)
}

/// `POST /Todo/Complete`.
///
/// # Errors
///
/// Returns a 404 [`WebError`] when the task is unknown.
pub async fn complete_task(
    State(controller): State<TodoController>,
    State(renderer): State<Arc<TodoRenderer>>,
    body: Result<Form<TaskIdForm>, FormRejection>,
) -> Result<Response, WebError> {
    let form = form_or_default(body);
    let id = parse_id(&form.id, TodoOperation::Complete)?;
    let list = controller.complete(id).await?;
    fragment_response(&renderer, &list)
}

/// `POST /Todo/Delete`.
///
/// # Errors
///
/// Returns a 404 [`WebError`] when the task is unknown.
pub async fn delete_task(
    State(controller): State<TodoController>,
    State(renderer): State<Arc<TodoRenderer>>,
    body: Result<Form<TaskIdForm>, FormRejection>,
) -> Result<Response, WebError> {
    let form = form_or_default(body);
    let id = parse_id(&form.id, TodoOperation::Delete)?;
    let list = controller.delete(id).await?;
    fragment_response(&renderer, &list)
}

/// Treats an unreadable body (no content type, duplicated fields) as one with
/// every field absent, so the controller reports it like an empty field.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    form.map_or_else(
        |rejection| {
            tracing::debug!(error = %rejection, "form body rejected, treating fields as absent");
            T::default()
        },
        |Form(body)| body,
    )
}

/// A missing or malformed identifier cannot name a stored task.
fn parse_id(raw: &str, operation: TodoOperation) -> Result<TodoItemId, WebError> {
    raw.parse::<TodoItemId>()
        .map_err(|_| WebError::from(TodoServiceError::NotFound(operation)))
}

/// Renders a mutation result and points htmx at the region it belongs to.
fn fragment_response(renderer: &TodoRenderer, list: &TodoList) -> Result<Response, WebError> {
    let html = renderer.render_list(list)?;
    let target = format!("#{}", TodoRenderer::region_id(list.kind));
    Ok((
        [
            (HX_RETARGET, target),
            (HX_TRIGGER, TASKS_CHANGED_EVENT.to_owned()),
        ],
        Html(html),
    )
        .into_response())
}
