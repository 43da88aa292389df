//! 页面路由状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 标签页演示
    #[default]
    Tabs,
    /// 折叠面板
    Accordion,
    /// 注册表单
    Registration,
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Tabs => "Tabs",
            Page::Accordion => "Accordion",
            Page::Registration => "Registration",
        }
    }

    /// 是否是需要文本输入的页面（字符键不作为快捷键处理）
    pub fn takes_text_input(&self) -> bool {
        matches!(self, Page::Registration)
    }
}
