//! # Actions
//!
//! Everything that can happen in croprec becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Backend responds? That's `Action::RecommendationsReceived(list)`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and returns an `Effect` describing any I/O the caller must perform.
//! No network calls happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Instant;

use chrono::Local;
use log::{debug, info, warn};

use crate::core::form::FormField;
use crate::core::ranking::rank;
use crate::core::state::{App, Notification};
use crate::core::validate::validate;
use crate::recommend::{RecommendRequest, Recommendation, RequestError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A field's raw value changed.
    EditField { field: FormField, value: String },
    /// The user asked for recommendations.
    Submit,
    /// The backend answered successfully.
    RecommendationsReceived(Vec<Recommendation>),
    /// The request failed (transport, non-2xx or bad body).
    RequestFailed(RequestError),
    ToggleDisplayMode,
    /// Periodic clock signal, used to expire notifications.
    Tick(Instant),
    DismissNotification,
    Quit,
}

/// Side effects requested by `update`. The caller performs them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Send this payload to the recommendation source.
    SpawnRequest(RecommendRequest),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditField { field, value } => {
            app.form = app.form.with(field, value);
            app.error = None;
            Effect::None
        }
        Action::Submit => {
            if app.is_loading {
                debug!("Submit ignored: request already in flight");
                app.status_message = String::from("Still waiting for the previous request...");
                return Effect::None;
            }
            app.error = None;
            match validate(&app.form) {
                Ok(payload) => {
                    info!(
                        "Submitting form: year={}, season={}, state={}",
                        payload.crop_year, payload.season, payload.state
                    );
                    app.is_loading = true;
                    app.status_message = String::from("Fetching recommendations...");
                    Effect::SpawnRequest(payload)
                }
                Err(e) => {
                    warn!("Validation failed on {:?}: {}", e.field, e);
                    app.error = Some(e.to_string());
                    app.status_message = format!("Check {}", e.field.label());
                    Effect::None
                }
            }
        }
        Action::RecommendationsReceived(list) => {
            info!("Recommendations received: {} entries", list.len());
            app.is_loading = false;
            app.ranking = rank(&list);
            app.updated_at = Some(Local::now());
            app.status_message = format!("{} recommendations", list.len());
            app.notification = Some(Notification::success(
                "Crop recommendations fetched successfully!",
                app.notification_duration,
            ));
            Effect::None
        }
        Action::RequestFailed(err) => {
            warn!("Recommendation request failed: {}", err);
            app.is_loading = false;
            // Previous results stay on screen.
            app.error = Some(format!("Error fetching recommendations: {err}"));
            app.status_message = String::from("Request failed");
            app.notification = Some(Notification::error(
                format!("Failed to fetch recommendations: {err}"),
                app.notification_duration,
            ));
            Effect::None
        }
        Action::ToggleDisplayMode => {
            app.display_mode = app.display_mode.next();
            app.status_message = format!("View: {}", app.display_mode.label());
            Effect::None
        }
        Action::Tick(now) => {
            if app.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
                app.notification = None;
            }
            Effect::None
        }
        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
