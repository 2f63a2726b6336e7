//! # Core Application Logic
//!
//! This module contains mangarank's business logic.
//! It knows nothing about any specific UI technology or transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (controller)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Plain    │      │  Ranking   │
//!     │  Adapter   │      │   output   │      │  sources   │
//!     │ (ratatui)  │      │  (stdout)  │      │ (reqwest)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item`, the ranked entity
//! - [`category`]: the closed `Category` enum and its descriptor registry
//! - [`format`]: compact number formatting for stats
//! - [`fetch`]: per-source fetch state and the readiness reducer
//! - [`selection`]: selection store and navigator collaborators
//! - [`state`]: `App`, the aggregate controller
//! - [`action`]: `Action` / `Effect` and `update()`
//! - [`config`]: layered configuration

pub mod action;
pub mod category;
pub mod config;
pub mod fetch;
pub mod format;
pub mod item;
pub mod selection;
pub mod state;
