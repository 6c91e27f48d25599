//! Page and list-fragment renderer.

use crate::todo::{
    domain::{TodoItem, TodoListKind},
    services::{TodoBoard, TodoList},
};
use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;

const PAGE_TEMPLATE: &str = "index.html";
const LIST_TEMPLATE: &str = "task_list.html";

/// Error returned when a template fails to load or render.
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Template data for one task row.
#[derive(Debug, Serialize)]
struct TaskRow<'a> {
    id: i64,
    description: &'a str,
    is_completed: bool,
    created_at: String,
}

impl<'a> TaskRow<'a> {
    fn from_item(item: &'a TodoItem) -> Self {
        Self {
            id: item.id().value(),
            description: item.description().as_str(),
            is_completed: item.is_completed(),
            created_at: item.created_at().format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

fn rows(items: &[TodoItem]) -> Vec<TaskRow<'_>> {
    items.iter().map(TaskRow::from_item).collect()
}

/// Renders the full page shell and the shared task-list fragment.
#[derive(Debug)]
pub struct TodoRenderer {
    environment: Environment<'static>,
}

impl TodoRenderer {
    /// Creates a renderer with the embedded templates loaded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment.add_template(PAGE_TEMPLATE, include_str!("templates/index.html"))?;
        environment.add_template(LIST_TEMPLATE, include_str!("templates/task_list.html"))?;
        Ok(Self { environment })
    }

    /// Renders the full page with both task lists.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when rendering fails.
    pub fn render_page(&self, board: &TodoBoard) -> Result<String, RenderError> {
        let template = self.environment.get_template(PAGE_TEMPLATE)?;
        let html = template.render(context! {
            active => rows(&board.active),
            completed => rows(&board.completed),
        })?;
        Ok(html)
    }

    /// Renders one task list as a fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when rendering fails.
    pub fn render_list(&self, list: &TodoList) -> Result<String, RenderError> {
        let template = self.environment.get_template(LIST_TEMPLATE)?;
        let html = template.render(context! {
            list => list.kind.as_str(),
            tasks => rows(&list.items),
        })?;
        Ok(html)
    }

    /// Returns the DOM element id of the page region showing `kind`.
    #[must_use]
    pub const fn region_id(kind: TodoListKind) -> &'static str {
        match kind {
            TodoListKind::Active => "active-tasks",
            TodoListKind::Completed => "completed-tasks",
        }
    }
}
