use crate::core::layout;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{IndicatorBar, SlideStrip, TitleBar};
use crate::tui::TuiState;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

const HELP_TEXT: &str = "←/→ navigate   1-9 jump   drag to swipe   hover to pause   q quit";

/// Draw one frame and record the hit regions for mouse input.
///
/// Roles and the active indicator are recomputed from deck state here, every
/// frame. Nothing presentational survives between frames except the recorded
/// regions, which exist purely for hit testing.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, strip_area, indicator_area, help_area] = layout.areas(frame.area());

    let current = layout::active_indicator(&app.deck);
    TitleBar::new(current, app.deck.len(), &app.status_message, app.autoplay_paused)
        .render(frame, title_area);

    if app.deck.is_empty() {
        draw_empty_view(frame, strip_area);
        tui.container_area = Rect::default();
        tui.slide_areas.clear();
        tui.indicator_areas.clear();
    } else {
        let roles = layout::assign(&app.deck);
        tui.container_area = strip_area;
        tui.slide_areas = SlideStrip::new(app, &roles).render(frame, strip_area);
        tui.indicator_areas = IndicatorBar::new(&app.deck).render(frame, indicator_area);
    }

    let help = Paragraph::new(Span::styled(
        HELP_TEXT,
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_empty_view(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("No slides configured")
        .block(Block::bordered())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(placeholder, area);
}
