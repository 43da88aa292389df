//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors(app);
    let size = frame.area();

    // 整个页面随主题换底色
    frame.render_widget(Block::default().style(Style::default().bg(c.bg).fg(c.fg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22), // 左侧导航
            Constraint::Percentage(78), // 右侧内容
        ])
        .split(content_area);

    let nav_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧导航
    components::navigation::render(app, frame, nav_area);

    // 渲染右侧内容
    render_page_content(app, frame, page_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏，右侧是主题切换按钮
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app);
    let bar_style = Style::default().bg(c.highlight).fg(c.selected_fg);

    let title = format!(" Interactive Page v{}", env!("CARGO_PKG_VERSION"));
    let button = format!(" {} ", app.page.theme.label());

    let button_style = if app.focus.is_theme_toggle() {
        Style::default()
            .bg(c.selected_fg)
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        bar_style.add_modifier(Modifier::BOLD)
    };

    // 按钮靠右，中间用空格填满
    let gap = (area.width as usize)
        .saturating_sub(title.width())
        .saturating_sub(button.width());

    let line = Line::from(vec![
        Span::styled(title, bar_style),
        Span::styled(" ".repeat(gap), bar_style),
        Span::styled(button, button_style),
    ]);

    frame.render_widget(Paragraph::new(line).style(bar_style), area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app);

    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前页面渲染具体内容
    match app.current_page {
        Page::Tabs => pages::tabs::render(app, frame, inner_area),
        Page::Accordion => pages::accordion::render(app, frame, inner_area),
        Page::Registration => pages::registration::render(app, frame, inner_area),
    }
}
