//! 焦点状态定义

/// 焦点区域
///
/// Tab 键按 标题栏 → 导航 → 内容 的顺序循环。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 标题栏上的主题切换按钮
    ThemeToggle,
    /// 左侧导航面板
    #[default]
    Navigation,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    /// 下一个焦点区域
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FocusPanel::ThemeToggle => FocusPanel::Navigation,
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::ThemeToggle,
        }
    }

    /// 上一个焦点区域
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FocusPanel::ThemeToggle => FocusPanel::Content,
            FocusPanel::Navigation => FocusPanel::ThemeToggle,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_theme_toggle(self) -> bool {
        matches!(self, FocusPanel::ThemeToggle)
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
