//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo item records.
    todo_items (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Task description.
        description -> Text,
        /// Completion flag.
        is_completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
