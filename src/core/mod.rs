//! # Core Application Logic
//!
//! This module contains croprec's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Form (raw fields)    │
//!                    │  • validate()           │
//!                    │  • rank()               │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │ recommend  │
//!             │  Adapter   │          │ (reqwest)  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`form`]: raw field values and the fixed choice lists
//! - [`validate`]: raw fields → normalized payload
//! - [`ranking`]: recommendation ordering for display
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod form;
pub mod ranking;
pub mod state;
pub mod validate;
