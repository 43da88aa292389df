//! 折叠面板视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染折叠面板，每节一行标题，展开的一节在标题下方显示正文
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app);
    let cursor = app.cursors.section.index;
    let focused = app.focus.is_content();

    let mut lines = vec![Line::from("")];

    for (i, section) in app.page.accordion.sections().iter().enumerate() {
        let is_selected = focused && i == cursor;
        let prefix = if is_selected { "▶ " } else { "  " };
        let marker = if section.open { "▾" } else { "▸" };

        let title_style = if is_selected {
            c.selected()
        } else if section.open {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, title_style),
            Span::styled(format!("{marker} {}", section.title), title_style),
        ]));

        if section.open {
            for text in section.body.lines() {
                lines.push(Line::styled(format!("      {text}"), Style::default().fg(c.muted)));
            }
            lines.push(Line::from(""));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
