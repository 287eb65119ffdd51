//! # Toast Component
//!
//! Success/error notification drawn over the top-right corner of the screen.
//! Expiry is handled by the core (`Action::Tick`); this only draws.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::state::{Notification, NotificationKind};
use crate::tui::component::Component;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;

pub struct Toast<'a> {
    pub notification: &'a Notification,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Top-right placement, clipped to the available area.
    pub fn area(outer: Rect) -> Rect {
        let width = TOAST_WIDTH.min(outer.width);
        let height = TOAST_HEIGHT.min(outer.height);
        Rect {
            x: outer.x + outer.width.saturating_sub(width + 1),
            y: outer.y + 1.min(outer.height.saturating_sub(height)),
            width,
            height,
        }
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = Self::area(area);
        let color = match self.notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Ctrl+D ").right_aligned());

        let body = Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}
