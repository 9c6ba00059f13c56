//! # Core Application Logic
//!
//! This module contains the tracker's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Book / Catalog       │
//!                    │  • search::filter()     │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`]: The immutable `Book` record
//! - [`catalog`]: Library and recommendation lists
//! - [`search`]: Title filter for the library grid
//! - [`state`]: The `App` and `Session` structs
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file loading and resolution (the one module with I/O)

pub mod action;
pub mod book;
pub mod catalog;
pub mod config;
pub mod search;
pub mod state;
