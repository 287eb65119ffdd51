//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! `update()` never performs I/O. When it returns `Effect::SpawnRequest`,
//! the loop spawns one tokio task that calls the recommendation source and
//! sends the outcome back as an `Action` over an mpsc channel. The loop
//! drains that channel between frames.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 250ms, redraws on events, incoming actions, or
//!   when a notification needs to expire.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::recommend::{
    HttpRecommendationClient, RecommendRequest, RecommendationSource, RequestError,
};
use crate::tui::component::EventHandler;
use crate::tui::components::{CropForm, CropFormState, FormEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: CropFormState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: CropFormState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock  // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the recommendation source for the resolved backend URL.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn RecommendationSource> {
    Arc::new(HttpRecommendationClient::new(config.api_base_url.clone()))
}

/// Translate a terminal event into a core action, routing form keys
/// through the `CropForm` component.
fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ToggleDisplayMode => Some(Action::ToggleDisplayMode),
        TuiEvent::DismissNotification => Some(Action::DismissNotification),
        TuiEvent::Resize => None,
        _ => {
            let mut form = CropForm::new(&mut tui.form, &app.form);
            form.handle_event(event).map(|form_event| match form_event {
                FormEvent::Edit { field, value } => Action::EditField { field, value },
                FormEvent::Submit => Action::Submit,
            })
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    info!("Using recommendation source '{}' at {}", source.name(), config.api_base_url);
    let mut app = App::new(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = dispatch(&app, &mut tui, &event) else {
                continue;
            };
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::SpawnRequest(payload) => {
                    spawn_request(app.source.clone(), payload, tx.clone());
                }
                Effect::None => {}
            }
        }

        // Handle background task actions (request outcomes)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                break 'main;
            }
        }

        let had_notification = app.notification.is_some();
        update(&mut app, Action::Tick(Instant::now()));
        if had_notification && app.notification.is_none() {
            needs_redraw = true;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs one request on the tokio runtime and reports the outcome as an Action.
///
/// The request runs in its own task so that a panic inside the source still
/// produces `RequestFailed` and the loading state is cleared.
fn spawn_request(
    source: Arc<dyn RecommendationSource>,
    payload: RecommendRequest,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning recommendation request via '{}'", source.name());
    tokio::spawn(async move {
        let request_start = Instant::now();
        let request = tokio::spawn(async move {
            match source.recommend(&payload).await {
                Ok(list) => Action::RecommendationsReceived(list),
                Err(e) => {
                    info!("Request error: {}", e);
                    Action::RequestFailed(e)
                }
            }
        });
        let action = match request.await {
            Ok(action) => action,
            Err(e) => {
                warn!("Request task failed: {}", e);
                Action::RequestFailed(RequestError::Network(format!("request task failed: {e}")))
            }
        };
        debug!(
            "Request finished in {}ms",
            request_start.elapsed().as_millis()
        );
        if tx.send(action).is_err() {
            warn!("Failed to send request outcome: receiver dropped");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::FormField;
    use crate::recommend::Recommendation;
    use crate::test_support::{StubSource, filled_app, test_app};
    use async_trait::async_trait;

    /// A source whose request task panics.
    struct PanickingSource;

    #[async_trait]
    impl RecommendationSource for PanickingSource {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn recommend(
            &self,
            _request: &RecommendRequest,
        ) -> Result<Vec<Recommendation>, RequestError> {
            panic!("model crashed")
        }
    }

    fn payload() -> RecommendRequest {
        crate::core::validate::validate(&filled_app().form).unwrap()
    }

    #[tokio::test]
    async fn test_spawn_request_reports_success() {
        let source = Arc::new(StubSource {
            result: Ok(vec![Recommendation::new("Rice", 0.8)]),
        });
        let (tx, rx) = mpsc::channel();
        spawn_request(source, payload(), tx).await.unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            Action::RecommendationsReceived(vec![Recommendation::new("Rice", 0.8)])
        );
    }

    #[tokio::test]
    async fn test_spawn_request_reports_failure() {
        let err = RequestError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        let source = Arc::new(StubSource { result: Err(err.clone()) });
        let (tx, rx) = mpsc::channel();
        spawn_request(source, payload(), tx).await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), Action::RequestFailed(err));
    }

    #[tokio::test]
    async fn test_spawn_request_reports_panicked_task_as_failure() {
        let (tx, rx) = mpsc::channel();
        spawn_request(Arc::new(PanickingSource), payload(), tx).await.unwrap();

        let action = rx.try_recv().unwrap();
        assert!(matches!(
            action,
            Action::RequestFailed(RequestError::Network(ref msg)) if msg.contains("request task failed")
        ));

        let mut app = filled_app();
        update(&mut app, Action::Submit);
        update(&mut app, action);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_dispatch_routes_typing_to_focused_field() {
        let app = test_app();
        let mut tui = TuiState::new();
        let action = dispatch(&app, &mut tui, &TuiEvent::InputChar('2'));
        assert_eq!(
            action,
            Some(Action::EditField {
                field: FormField::CropYear,
                value: "2".to_string(),
            })
        );
    }

    #[test]
    fn test_dispatch_global_keys() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::Quit), Some(Action::Quit));
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::ForceQuit), Some(Action::Quit));
        assert_eq!(
            dispatch(&app, &mut tui, &TuiEvent::ToggleDisplayMode),
            Some(Action::ToggleDisplayMode)
        );
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::Resize), None);
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::Submit), Some(Action::Submit));
    }

    #[test]
    fn test_dispatch_moves_focus() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, &TuiEvent::NextField), None);
        assert_eq!(tui.form.focused, FormField::Season);
    }
}
