//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, FormRow, Page};
use crate::view::theme::colors;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app);

    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, c.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, c.hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(c.statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Focus")];

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::ThemeToggle => {
            hints.push(("Enter", "Toggle Theme"));
        }
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigation"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Tabs => {
                hints.push(("←→", "Select"));
                hints.push(("Enter", "Activate Tab"));
            }
            Page::Accordion => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "Expand/Collapse"));
            }
            Page::Registration => {
                hints.push(("↑↓", "Field"));
                match app.current_form_row() {
                    FormRow::Terms => hints.push(("Space", "Check")),
                    FormRow::Field(_) => hints.push(("Enter", "Submit")),
                    FormRow::Submit => hints.push(("Enter", "Register")),
                }
                hints.push(("Esc", "Back"));
            }
        },
    }

    hints.push(("Alt+t", "Theme"));
    hints.push(("Alt+q", "Quit"));

    hints
}
