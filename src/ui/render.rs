use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, BUTTON_BG, CARD_BORDER, HEADER_TEXT, PENDING};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const CARD_WIDTH: u16 = 30;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let lines = counter_lines(app);
    let card_height = lines.len().saturating_add(2) as u16;
    let card = centered_rect_by_size(body, CARD_WIDTH, card_height);
    let block = Block::default()
        .title(Span::styled(" Counter ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        card,
    );

    frame.render_widget(Footer::new(app.increment_key()).widget(footer), footer);
}

fn counter_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Value: {}", app.counter_value()),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Increment ]",
            Style::default().fg(HEADER_TEXT).bg(BUTTON_BG),
        )),
    ];

    let pending = app.pending_increments();
    if pending > 0 {
        lines.push(Line::from(Span::styled(
            format!("{pending} queued"),
            Style::default().fg(PENDING),
        )));
    }

    lines
}
