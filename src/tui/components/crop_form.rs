//! # CropForm Component
//!
//! The seven input fields, one per line. Text fields take typed characters;
//! Season and State are choice fields cycled with ←/→ (or by typing the
//! first letter of an option).
//!
//! ## State Management
//!
//! Field values are NOT owned here. They live in `App::form` and reach this
//! component as a prop; edits are emitted as `FormEvent::Edit` and applied by
//! `core::update`. The only persistent state is which field has focus
//! (`CropFormState`).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CropFormState` lives in `TuiState`
//! - `CropForm` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::form::{FormField, FormFields};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width reserved for the label column (marker + label + padding).
const LABEL_WIDTH: usize = 24;

/// Rows needed to draw the whole form, borders included.
pub const FORM_HEIGHT: u16 = FormField::ALL.len() as u16 + 2;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A field's value should change to `value`.
    Edit { field: FormField, value: String },
    /// User pressed Enter.
    Submit,
}

/// Persistent form state: which field has focus.
#[derive(Debug, Clone)]
pub struct CropFormState {
    pub focused: FormField,
}

impl Default for CropFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CropFormState {
    pub fn new() -> Self {
        Self {
            focused: FormField::CropYear,
        }
    }
}

/// Transient wrapper: focus state plus the current values as props.
pub struct CropForm<'a> {
    state: &'a mut CropFormState,
    fields: &'a FormFields,
    /// Dims the form while a request is in flight.
    pub busy: bool,
}

impl<'a> CropForm<'a> {
    pub fn new(state: &'a mut CropFormState, fields: &'a FormFields) -> Self {
        Self {
            state,
            fields,
            busy: false,
        }
    }

    fn edit(&self, value: String) -> Option<FormEvent> {
        let field = self.state.focused;
        (value != self.fields.get(field)).then_some(FormEvent::Edit { field, value })
    }

    fn handle_text(&self, event: &TuiEvent) -> Option<FormEvent> {
        let current = self.fields.get(self.state.focused);
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                let mut value = current.to_string();
                value.push(*c);
                self.edit(value)
            }
            TuiEvent::Paste(text) => {
                // Single-line fields: drop line breaks from pasted text
                let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
                self.edit(format!("{current}{pasted}"))
            }
            TuiEvent::Backspace => {
                let mut value = current.to_string();
                value.pop();
                self.edit(value)
            }
            TuiEvent::ClearField => self.edit(String::new()),
            _ => None,
        }
    }

    fn handle_choice(&self, event: &TuiEvent, choices: &[&str]) -> Option<FormEvent> {
        let current = self.fields.get(self.state.focused);
        let position = choices.iter().position(|c| *c == current);
        match event {
            TuiEvent::ChoiceNext => {
                let next = position.map_or(0, |i| (i + 1) % choices.len());
                self.edit(choices[next].to_string())
            }
            TuiEvent::ChoicePrev => {
                let prev = position.map_or(choices.len() - 1, |i| {
                    (i + choices.len() - 1) % choices.len()
                });
                self.edit(choices[prev].to_string())
            }
            TuiEvent::InputChar(c) => {
                // Type-ahead: jump to the next option starting with this letter
                let start = position.map_or(0, |i| i + 1);
                let wanted = c.to_lowercase().to_string();
                (0..choices.len())
                    .map(|offset| choices[(start + offset) % choices.len()])
                    .find(|choice| choice.to_lowercase().starts_with(&wanted))
                    .and_then(|choice| self.edit(choice.to_string()))
            }
            TuiEvent::Backspace | TuiEvent::ClearField => self.edit(String::new()),
            _ => None,
        }
    }

    fn field_line(&self, field: FormField) -> Line<'static> {
        let focused = field == self.state.focused;
        let value = self.fields.get(field);
        let marker = if focused { "▸ " } else { "  " };
        let required = if field.is_required() { "*" } else { " " };
        let label = format!("{marker}{}{required}", field.label());

        let label_style = if focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value_span = if value.is_empty() {
            Span::styled(
                field.placeholder().to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else if field.choices().is_some() {
            Span::styled(format!("‹ {value} ›"), Style::default().fg(Color::Cyan))
        } else {
            Span::styled(value.to_string(), Style::default().fg(Color::White))
        };

        Line::from(vec![
            Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
            value_span,
        ])
    }
}

impl Component for CropForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = FormField::ALL.iter().map(|f| self.field_line(*f)).collect();

        let border_style = if self.busy {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Crop Details ")
            .title_bottom(Line::from(" * required ").right_aligned());

        frame.render_widget(Paragraph::new(lines).block(block), area);

        // Cursor sits after the value of the focused text field
        let focused = self.state.focused;
        if focused.choices().is_none() && !self.busy {
            let row = FormField::ALL
                .iter()
                .position(|f| *f == focused)
                .unwrap_or_default() as u16;
            let value_width = self.fields.get(focused).width() as u16;
            let x = area.x + 1 + LABEL_WIDTH as u16 + value_width;
            let y = area.y + 1 + row;
            if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
                frame.set_cursor_position((x, y));
            }
        }
    }
}

impl EventHandler for CropForm<'_> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::NextField => {
                self.state.focused = self.state.focused.next();
                None
            }
            TuiEvent::PrevField => {
                self.state.focused = self.state.focused.prev();
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submit),
            _ => match self.state.focused.choices() {
                Some(choices) => self.handle_choice(event, choices),
                None => self.handle_text(event),
            },
        }
    }
}
