//! 导航相关消息

/// 导航消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 打开选中的页面
    Confirm,
    /// 直接打开第 n 个页面（数字键）
    Jump(usize),
}
