//! 弹窗/对话框状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助
    Help,
    /// 错误提示（如配置文件无法读取）
    Error { title: String, message: String },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗，None 表示没有弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }
}
