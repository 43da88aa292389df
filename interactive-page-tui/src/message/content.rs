//! 内容面板消息
//!
//! 光标移动、点击，以及注册表单中的输入与提交

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 光标 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 点击 ==========
    /// 点击光标所在项（标签按钮 / 折叠面板标题）
    Click,

    // ========== 注册表单专用 ==========
    /// 在当前输入框中输入字符
    Input(char),
    /// 删除当前输入框最后一个字符
    Backspace,
    /// 勾选/取消勾选条款
    ToggleTerms,
    /// 提交表单
    Submit,
}
