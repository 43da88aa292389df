//! 应用主状态结构

use interactive_page_core::PageState;

use super::{CursorState, FocusPanel, FormRow, ModalState, NavigationState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点区域
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 页面组件状态（主题、标签页、折叠面板、表单、提示）
    pub page: PageState,

    /// 各页面光标
    pub cursors: CursorState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(page: PageState) -> Self {
        let mut cursors = CursorState::default();
        // 光标初始停在标记中已激活的标签上
        if let Some(active) = page.tabs.active_control() {
            cursors.tab.index = active;
        }

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::default(),
            status_message: None,
            page,
            cursors,
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 表单光标当前所在的行
    pub fn current_form_row(&self) -> FormRow {
        super::form_rows(&self.page.form)
            .get(self.cursors.form.index)
            .copied()
            .unwrap_or(FormRow::Submit)
    }

    /// 表单光标所在输入框的字段名
    pub fn current_field_name(&self) -> Option<&str> {
        match self.current_form_row() {
            FormRow::Field(i) => self.page.form.fields().get(i).map(|f| f.name.as_str()),
            FormRow::Terms | FormRow::Submit => None,
        }
    }
}
