//! 注册表单视图
//!
//! 每个输入框一行，校验失败时标红并在下方显示错误信息。
//! 成功提示显示在表单底部，到期后由 Tick 移除。

use interactive_page_core::validation::FormField;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{form_rows, App, FormRow};
use crate::view::theme::{colors, ThemeColors};

/// 标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 密码框中每个字符显示为一个圆点
const MASK: &str = "•";

/// 渲染注册表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app);
    let form = &app.page.form;
    let focused = app.focus.is_content();
    let current = app.current_form_row();

    let mut lines = vec![Line::from("")];

    for row in form_rows(form) {
        let is_selected = focused && row == current;
        match row {
            FormRow::Field(i) => {
                if let Some(field) = form.fields().get(i) {
                    render_field(&mut lines, &c, field, is_selected);
                }
            }
            FormRow::Terms => {
                if let Some(terms) = form.terms() {
                    let prefix = if is_selected { "▶ " } else { "  " };
                    let checkbox = if terms.checked { "[x]" } else { "[ ]" };
                    let style = if is_selected { c.selected() } else { Style::default().fg(c.fg) };

                    lines.push(Line::from(vec![
                        Span::styled(prefix, style),
                        Span::styled(format!("{checkbox} I agree to the Terms and Conditions"), style),
                    ]));
                    push_error(&mut lines, &c, terms.error.as_deref());
                }
            }
            FormRow::Submit => {
                lines.push(Line::from(""));
                let style = if is_selected {
                    c.selected()
                } else {
                    Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(vec![
                    Span::raw(if is_selected { "▶ " } else { "  " }),
                    Span::styled("[ Register ]", style),
                ]));
            }
        }
    }

    // 成功提示
    if !app.page.notices.is_empty() {
        lines.push(Line::from(""));
        for notice in app.page.notices.notices() {
            lines.push(Line::styled(
                format!("  ✔ {}", notice.text),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 渲染单个输入框及其错误信息
fn render_field<'a>(lines: &mut Vec<Line<'a>>, c: &ThemeColors, field: &'a FormField, is_selected: bool) {
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if field.invalid {
        Style::default().fg(c.error).add_modifier(Modifier::UNDERLINED)
    } else if is_selected {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(field.label.width());

    let shown = if field.secret {
        MASK.repeat(field.value.chars().count())
    } else {
        field.value.clone()
    };
    let caret = if is_selected { "▎" } else { "" };

    lines.push(Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(field.label.as_str(), label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(shown, value_style),
        Span::styled(caret, Style::default().fg(c.highlight)),
    ]));

    push_error(lines, c, field.error.as_deref());
}

/// 错误信息为空时不占行
fn push_error(lines: &mut Vec<Line<'_>>, c: &ThemeColors, error: Option<&str>) {
    if let Some(text) = error.filter(|text| !text.is_empty()) {
        lines.push(Line::styled(
            format!("    ⚠ {text}"),
            Style::default().fg(c.error),
        ));
    }
}
