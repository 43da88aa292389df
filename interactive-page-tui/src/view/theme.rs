//! 主题和样式定义
//!
//! 配色由核心库的 ThemeState 决定，每一帧从 App 中读取

use interactive_page_core::ThemeState;
use ratatui::style::{Color, Modifier, Style};

use crate::model::App;

/// 获取当前主题的颜色方案
pub fn colors(app: &App) -> ThemeColors {
    ThemeColors::for_state(app.page.theme.state())
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    pub fn for_state(state: ThemeState) -> Self {
        match state {
            ThemeState::Dark => Self::dark(),
            ThemeState::Light => Self::light(),
        }
    }

    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            success: Color::Rgb(34, 134, 58),
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 边框样式，焦点所在区域高亮
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar(&self) -> Style {
        Style::default().bg(self.highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc(&self) -> Style {
        Style::default().fg(Color::Rgb(230, 230, 230))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme_state() {
        assert_eq!(ThemeColors::for_state(ThemeState::Dark).bg, ThemeColors::dark().bg);
        assert_eq!(ThemeColors::for_state(ThemeState::Light).bg, ThemeColors::light().bg);
        assert_ne!(ThemeColors::dark().fg, ThemeColors::light().fg);
    }
}
