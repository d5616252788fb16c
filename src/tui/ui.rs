use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::rotator::Sibling;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Countdown, QuestionPanel, Sidebar, TitleBar};

/// Split the frame into title, sidebar and question panel.
fn layout(area: Rect) -> (Rect, Rect, Rect) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(area);
    let [sidebar_area, main_area] =
        Layout::horizontal([Percentage(25), Percentage(75)]).areas(body_area);
    (title_area, sidebar_area, main_area)
}

/// Top-right corner of the question panel, inset by one cell.
fn countdown_area(main_area: Rect, width: u16) -> Rect {
    let width = width.min(main_area.width.saturating_sub(2));
    let height = Countdown::HEIGHT.min(main_area.height.saturating_sub(2));
    Rect::new(
        (main_area.x + main_area.width).saturating_sub(width + 1),
        main_area.y + 1,
        width,
        height,
    )
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let (title_area, sidebar_area, main_area) = layout(frame.area());
    let view = app.rotator.view();

    TitleBar::new(app.source_name.clone(), app.status_message.clone()).render(frame, title_area);

    let siblings: &[Sibling] = &view.siblings;
    Sidebar::new(&mut tui.sidebar, view.current_topic, siblings).render(frame, sidebar_area);

    let question = view.current_question.map(|e| e.question.as_str());
    QuestionPanel::new(view.current_topic, question).render(frame, main_area);

    if !app.is_loading() {
        let mut countdown = Countdown::new(view.remaining_secs, app.paused);
        let area = countdown_area(main_area, countdown.width());
        countdown.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{sample_set, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_loading() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("3:00"));
    }

    #[test]
    fn test_draw_active() {
        let mut app = test_app();
        update(&mut app, Action::QuestionsLoaded(sample_set()));
        update(&mut app, Action::Tick);
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("Topic: math"));
        assert!(text.contains("2+2?"));
        assert!(text.contains("2:59"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn test_countdown_area_is_top_right_inside_panel() {
        let main_area = Rect::new(25, 1, 75, 23);
        let area = countdown_area(main_area, 8);
        assert_eq!(area, Rect::new(91, 2, 8, 3));
    }

    #[test]
    fn test_layout_splits_quarter_sidebar() {
        let (title, sidebar, main) = layout(Rect::new(0, 0, 100, 24));
        assert_eq!(title.height, 1);
        assert_eq!(sidebar.width, 25);
        assert_eq!(main.width, 75);
        assert_eq!(main.x, 25);
    }
}
