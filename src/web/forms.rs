//! Form bodies accepted by the mutating endpoints.
//!
//! Every field defaults to empty so that a missing field reaches the
//! controller and is reported the same way as an empty one. Handlers also
//! fall back to the default when the body cannot be decoded at all.
//!
//! Percent-encoded bytes that are not valid UTF-8 are decoded lossily, so
//! `description=caf%FF` is stored as `caf\u{FFFD}`.

use serde::Deserialize;

/// Body of `POST /Todo/Create`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskForm {
    /// Description of the new task.
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /Todo/Edit`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditTaskForm {
    /// Raw task identifier.
    #[serde(default)]
    pub id: String,
    /// Replacement description.
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /Todo/Complete` and `POST /Todo/Delete`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskIdForm {
    /// Raw task identifier.
    #[serde(default)]
    pub id: String,
}
