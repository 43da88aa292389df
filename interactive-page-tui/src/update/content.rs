//! 内容面板更新逻辑
//!
//! 把光标移动留在界面层，把点击、输入和提交转交给核心库

use std::time::Instant;

use interactive_page_core::SubmissionOutcome;

use crate::message::ContentMessage;
use crate::model::{form_rows, App, FormRow, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 光标 ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
        }
        ContentMessage::SelectFirst => {
            handle_select_first(app);
        }
        ContentMessage::SelectLast => {
            handle_select_last(app);
        }

        // ========== 点击 ==========
        ContentMessage::Click => {
            handle_click(app);
        }

        // ========== 注册表单 ==========
        ContentMessage::Input(ch) => {
            handle_input(app, Some(ch));
        }
        ContentMessage::Backspace => {
            handle_input(app, None);
        }
        ContentMessage::ToggleTerms => {
            app.page.form.toggle_terms();
        }
        ContentMessage::Submit => {
            handle_submit(app, Instant::now());
        }
    }
}

/// 当前页面可选中的项数
fn item_count(app: &App) -> usize {
    match app.current_page {
        Page::Tabs => app.page.tabs.len(),
        Page::Accordion => app.page.accordion.len(),
        Page::Registration => form_rows(&app.page.form).len(),
    }
}

// ========== 光标处理 ==========

fn handle_select_previous(app: &mut App) {
    match app.current_page {
        Page::Tabs => app.cursors.tab.select_previous(),
        Page::Accordion => app.cursors.section.select_previous(),
        Page::Registration => app.cursors.form.select_previous(),
    }
}

fn handle_select_next(app: &mut App) {
    let len = item_count(app);
    match app.current_page {
        Page::Tabs => app.cursors.tab.select_next(len),
        Page::Accordion => app.cursors.section.select_next(len),
        Page::Registration => app.cursors.form.select_next(len),
    }
}

fn handle_select_first(app: &mut App) {
    match app.current_page {
        Page::Tabs => app.cursors.tab.select_first(),
        Page::Accordion => app.cursors.section.select_first(),
        Page::Registration => app.cursors.form.select_first(),
    }
}

fn handle_select_last(app: &mut App) {
    let len = item_count(app);
    match app.current_page {
        Page::Tabs => app.cursors.tab.select_last(len),
        Page::Accordion => app.cursors.section.select_last(len),
        Page::Registration => app.cursors.form.select_last(len),
    }
}

// ========== 点击处理 ==========

fn handle_click(app: &mut App) {
    match app.current_page {
        Page::Tabs => app.page.tabs.click(app.cursors.tab.index),
        Page::Accordion => app.page.accordion.click(app.cursors.section.index),
        Page::Registration => match app.current_form_row() {
            FormRow::Terms => app.page.form.toggle_terms(),
            // 在输入框中按 Enter 与点击提交按钮效果相同
            FormRow::Field(_) | FormRow::Submit => handle_submit(app, Instant::now()),
        },
    }
}

// ========== 表单处理 ==========

/// 修改当前输入框的文本；`None` 表示删除最后一个字符。
///
/// 每次文本变化都会触发该输入框绑定的校验。
fn handle_input(app: &mut App, ch: Option<char>) {
    let Some(name) = app.current_field_name().map(str::to_owned) else {
        return;
    };
    let Some(mut value) = app.page.form.value(&name).map(str::to_owned) else {
        return;
    };

    match ch {
        Some(ch) => value.push(ch),
        None => {
            if value.pop().is_none() {
                // 文本没有变化，不触发校验
                return;
            }
        }
    }

    app.page.form.input(&name, value);
}

fn handle_submit(app: &mut App, now: Instant) {
    match app.page.submit(now) {
        SubmissionOutcome::Succeeded(_) => {
            app.cursors.form.select_first();
            app.clear_status();
        }
        SubmissionOutcome::TermsNotAccepted => {
            app.set_status("Please accept the terms before submitting");
        }
        SubmissionOutcome::Invalid => {
            app.set_status("Please fix the highlighted fields");
        }
    }
}
