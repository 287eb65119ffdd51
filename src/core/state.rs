//! # Application State
//!
//! Core business state for croprec. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn RecommendationSource>  // prediction backend
//! ├── api_base_url: String                   // shown in the title bar
//! ├── form: FormFields                       // raw field values
//! ├── ranking: Ranking                       // last successful result, sorted
//! ├── updated_at: Option<DateTime<Local>>    // when `ranking` arrived
//! ├── display_mode: DisplayMode              // table or podium
//! ├── status_message: String                 // status bar text
//! ├── is_loading: bool                       // request in flight
//! ├── error: Option<String>                  // inline error banner
//! └── notification: Option<Notification>     // transient toast
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::DisplayMode;
use crate::core::config::{MAX_NOTIFICATION_SECS, ResolvedConfig};
use crate::core::form::FormFields;
use crate::core::ranking::Ranking;
use crate::recommend::RecommendationSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast that disappears on its own once `expires_at` has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: String,
    pub expires_at: Instant,
}

/// `now + duration`, saturating at the longest supported notification.
fn expiry(duration: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(duration)
        .unwrap_or_else(|| now + Duration::from_secs(MAX_NOTIFICATION_SECS))
}

impl Notification {
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success",
            message: message.into(),
            expires_at: expiry(duration),
        }
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error",
            message: message.into(),
            expires_at: expiry(duration),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct App {
    pub source: Arc<dyn RecommendationSource>,
    pub api_base_url: String,
    pub form: FormFields,
    pub ranking: Ranking,
    pub updated_at: Option<DateTime<Local>>,
    pub display_mode: DisplayMode,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub notification: Option<Notification>,
    pub notification_duration: Duration,
}

impl App {
    pub fn new(source: Arc<dyn RecommendationSource>, config: &ResolvedConfig) -> Self {
        Self {
            source,
            api_base_url: config.api_base_url.clone(),
            form: FormFields::default(),
            ranking: Ranking::Empty,
            updated_at: None,
            display_mode: config.display_mode,
            status_message: String::from("Fill in the form and press Enter"),
            is_loading: false,
            error: None,
            notification: None,
            notification_duration: config.notification_duration,
        }
    }
}
