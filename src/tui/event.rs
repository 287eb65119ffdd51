use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    Submit,
    ToggleDisplayMode,
    DismissNotification,

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    ClearField,
    NextField,
    PrevField,
    ChoiceNext,
    ChoicePrev,
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            // Some terminals report releases too; only presses count
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleDisplayMode),
                (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(TuiEvent::ClearField),
                (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::DismissNotification),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(TuiEvent::NextField),
                (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(TuiEvent::PrevField),
                (_, KeyCode::Right) => Some(TuiEvent::ChoiceNext),
                (_, KeyCode::Left) => Some(TuiEvent::ChoicePrev),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
