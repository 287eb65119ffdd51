use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::crop_form::FORM_HEIGHT;
use crate::tui::components::{CropForm, RecommendationTable, TitleBar, Toast};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

const HELP_TEXT: &str =
    " Tab/↑↓ Field  ←/→ Choose  Enter Submit  Ctrl+U Clear  Ctrl+T View  Esc Quit ";

/// Height of the error banner when shown (one text line plus borders).
const ERROR_BANNER_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let banner_height = if app.error.is_some() { ERROR_BANNER_HEIGHT } else { 0 };
    let layout = Layout::vertical([
        Length(1),
        Length(banner_height),
        Length(FORM_HEIGHT),
        Min(0),
        Length(1),
    ]);
    let [title_area, banner_area, form_area, results_area, help_area] =
        layout.areas(frame.area());

    let mut title_bar = TitleBar::new(&app.api_base_url, &app.status_message, app.display_mode);
    if app.is_loading {
        title_bar = title_bar.loading(spinner_frame);
    }
    title_bar.render(frame, title_area);

    if let Some(error_msg) = &app.error {
        draw_error_banner(frame, banner_area, error_msg);
    }

    let mut form = CropForm::new(&mut tui.form, &app.form);
    form.busy = app.is_loading;
    form.render(frame, form_area);

    RecommendationTable::new(&app.ranking, app.display_mode)
        .updated_at(app.updated_at)
        .render(frame, results_area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            HELP_TEXT,
            Style::default().fg(Color::DarkGray),
        ))),
        help_area,
    );

    // Overlay goes last so it sits on top
    if let Some(notification) = &app.notification {
        let screen = frame.area();
        Toast::new(notification).render(frame, screen);
    }
}

fn draw_error_banner(frame: &mut Frame, area: Rect, error_msg: &str) {
    let banner = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::recommend::{Recommendation, RequestError};
    use crate::test_support::{filled_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_initial_screen() {
        let text = draw(&test_app());
        assert!(text.contains("Crop Details"));
        assert!(text.contains("No recommendations available."));
        assert!(text.contains("Enter Submit"));
    }

    #[test]
    fn test_draw_validation_error_banner() {
        let mut app = test_app();
        update(&mut app, Action::Submit);
        let text = draw(&app);
        assert!(text.contains("Please enter a valid Crop Year (1900-2100)."));
    }

    #[test]
    fn test_draw_results_and_success_toast() {
        let mut app = filled_app();
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::RecommendationsReceived(vec![
                Recommendation::new("Rice", 0.3),
                Recommendation::new("Wheat", 0.7),
            ]),
        );
        let text = draw(&app);
        assert!(text.contains("70.00%"));
        assert!(text.contains("Success"));
    }

    #[test]
    fn test_draw_failure_keeps_results() {
        let mut app = filled_app();
        update(&mut app, Action::RecommendationsReceived(vec![Recommendation::new("Rice", 0.9)]));
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::RequestFailed(RequestError::Network("connection refused".to_string())),
        );
        let text = draw(&app);
        assert!(text.contains("Error fetching recommendations"));
        assert!(text.contains("90.00%"));
    }
}
