//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app);

    let block = Block::default()
        .title(" Pages ")
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(app.focus.is_navigation()));

    // 构建导航项列表
    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let is_open = nav_item.page == app.current_page;
            let prefix = if is_selected { "▶ " } else { "  " };

            // 数字键可直接跳转
            let content = format!("{}{} {} {}", prefix, i + 1, nav_item.icon, nav_item.page.title());

            let style = if is_selected {
                c.selected()
            } else if is_open {
                Style::default().fg(c.highlight)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(c.selected());

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
