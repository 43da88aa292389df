//! 标签页视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染标签页：上方标签按钮，下方为激活的面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app);
    let tabs = &app.page.tabs;
    let cursor = app.cursors.tab.index;
    let focused = app.focus.is_content();

    let mut lines = vec![Line::from("")];

    // 标签按钮
    let mut tab_spans = vec![Span::raw("  ")];
    for (i, control) in tabs.controls().iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::styled(" | ", Style::default().fg(c.muted)));
        }

        let mut style = if control.active {
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(c.muted)
        };
        if focused && i == cursor {
            style = style.bg(c.selected_bg).fg(c.selected_fg);
        }

        tab_spans.push(Span::styled(format!(" {} ", control.label), style));
    }
    lines.push(Line::from(tab_spans));

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  ────────────────────────────────────────",
        Style::default().fg(c.border),
    ));
    lines.push(Line::from(""));

    // 面板内容：只显示激活的面板
    let active_panels: Vec<_> = tabs.panels().iter().filter(|panel| panel.active).collect();
    if active_panels.is_empty() {
        lines.push(Line::styled(
            "  (no panel is active)",
            Style::default().fg(c.muted),
        ));
    }
    for panel in active_panels {
        for text in panel.content.lines() {
            lines.push(Line::styled(format!("  {text}"), Style::default().fg(c.fg)));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
