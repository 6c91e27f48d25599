//! Unit tests for the todo domain, in-memory store, and controller service.
