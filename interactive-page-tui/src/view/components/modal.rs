//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::{colors, ThemeColors};

/// 帮助弹窗中的快捷键列表
const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Tab", "Next region (theme button / pages / content)"),
    ("Shift+Tab", "Previous region"),
    ("↑↓ / jk", "Move cursor"),
    ("1-3", "Open page (in page list)"),
    ("Enter", "Click / submit"),
    ("Space", "Check the terms box"),
    ("Alt+t", "Toggle light / dark theme"),
    ("Esc", "Back / close"),
    ("Alt+h / ?", "Show this help"),
    ("Alt+q", "Quit"),
];

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    let c = colors(app);
    match modal {
        Modal::Error { title, message } => render_error(frame, &c, title, message),
        Modal::Help => render_help(frame, &c),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, c: &ThemeColors, title: &str, message: &str) {
    let area = centered_rect(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Using the built-in page.", Style::default().fg(c.muted)),
        Line::styled("Press Esc or Enter to close", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame, c: &ThemeColors) {
    let height = HELP_ENTRIES.len() as u16 + 6;
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    let inner = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), area.height.saturating_sub(2));
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::styled("Shortcuts", Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];

    for (key, desc) in HELP_ENTRIES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<11}"), c.hint_key()),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Press Esc to close the help", Style::default().fg(c.muted)));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
