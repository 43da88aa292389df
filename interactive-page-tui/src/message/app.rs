//! 应用主消息枚举

use std::time::Instant;

use super::{ContentMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个区域
    FocusNext,

    /// 焦点移到上一个区域
    FocusPrev,

    /// 点击主题切换按钮
    ToggleTheme,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 返回（关闭弹窗或把焦点交还导航栏）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 主循环时钟，用于执行到期的定时移除
    Tick(Instant),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
