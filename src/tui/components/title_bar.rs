//! # TitleBar Component
//!
//! Top status bar: application name, backend address, current view, and the
//! status message (with a spinner while a request is in flight).
//!
//! Purely presentational. It receives all data as props and has no internal
//! state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&app.api_base_url, &app.status_message, app.display_mode);
//! title_bar.render(frame, area);
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::DisplayMode;
use crate::tui::component::Component;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct TitleBar<'a> {
    pub api_base_url: &'a str,
    pub status_message: &'a str,
    pub display_mode: DisplayMode,
    /// `Some(frame)` while loading; drives the spinner.
    pub spinner_frame: Option<usize>,
}

impl<'a> TitleBar<'a> {
    pub fn new(api_base_url: &'a str, status_message: &'a str, display_mode: DisplayMode) -> Self {
        Self {
            api_base_url,
            status_message,
            display_mode,
            spinner_frame: None,
        }
    }

    pub fn loading(mut self, spinner_frame: usize) -> Self {
        self.spinner_frame = Some(spinner_frame);
        self
    }

    fn status_text(&self) -> String {
        match self.spinner_frame {
            Some(frame) => format!("{} {}", SPINNER[frame % SPINNER.len()], self.status_message),
            None => self.status_message.to_string(),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled(
                "Crop Recommendation",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", self.api_base_url), dim),
            Span::styled(format!(" | View: {}", self.display_mode.label()), dim),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_text(), Style::default().fg(Color::Yellow)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
