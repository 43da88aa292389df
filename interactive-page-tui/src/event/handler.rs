//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::{App, FormRow, Page};




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                                  // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    // '?' 在输入框中是普通字符
    if key.modifiers.is_empty() && key.code == KeyCode::Char('?') && !is_typing(app) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab / Shift+Tab: 切换焦点区域
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    // 根据焦点位置处理按键
    if app.focus.is_theme_toggle() {
        handle_theme_toggle_keys(key)
    } else if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 焦点在内容面板的输入框上
fn is_typing(app: &App) -> bool {
    app.focus.is_content()
        && app.current_page.takes_text_input()
        && app.current_field_name().is_some()
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    // 帮助和错误弹窗只响应关闭按键
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::GoBack,
        _ => AppMessage::Noop,
    }
}

/// 处理标题栏主题按钮的按键
fn handle_theme_toggle_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::ToggleTheme,
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectNext);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }

    match key.code {
        KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // 1-9: 直接打开对应页面
        KeyCode::Char(ch @ '1'..='9') => {
            let index = (ch as usize) - ('1' as usize);
            AppMessage::Navigation(NavigationMessage::Jump(index))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Tabs | Page::Accordion => handle_list_keys(key),
        Page::Registration => handle_registration_keys(key, app),
    }
}

/// 处理标签页与折叠面板的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ← ↑ 或 k: 上一项
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // → ↓ 或 j: 下一项
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // Enter / Space: 点击
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Content(ContentMessage::Click),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理注册表单的按键
fn handle_registration_keys(key: KeyEvent, app: &App) -> AppMessage {
    let row = app.current_form_row();

    match key.code {
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        // Enter: 输入框中直接提交，其余行相当于点击
        KeyCode::Enter => match row {
            FormRow::Field(_) => AppMessage::Content(ContentMessage::Submit),
            FormRow::Terms | FormRow::Submit => AppMessage::Content(ContentMessage::Click),
        },

        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),

        // Space: 在条款行上勾选
        KeyCode::Char(' ') if row == FormRow::Terms => {
            AppMessage::Content(ContentMessage::ToggleTerms)
        }

        // 字符输入（允许 Shift 输入大写字母和符号）
        KeyCode::Char(ch)
            if matches!(row, FormRow::Field(_))
                && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            AppMessage::Content(ContentMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}
