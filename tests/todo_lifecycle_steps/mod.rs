//! Step definitions for the todo lifecycle scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
