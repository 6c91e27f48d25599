//! Todo: a server-rendered task list.
//!
//! Users create, edit, complete, and delete short text tasks through HTML
//! pages whose lists refresh as fragments after every change.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: todo items and their invariants, free of infrastructure
//! - **Ports**: the repository trait the controller depends on
//! - **Adapters**: in-memory and `PostgreSQL` repositories
//!
//! # Modules
//!
//! - [`todo`]: domain, store port and adapters, controller service
//! - [`view`]: page and list-fragment rendering
//! - [`web`]: HTTP routes and handlers
//! - [`config`]: environment configuration
//! - [`telemetry`]: tracing setup

pub mod config;
pub mod telemetry;
pub mod todo;
pub mod view;
pub mod web;
