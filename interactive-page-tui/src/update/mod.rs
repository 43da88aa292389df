//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!     页面组件的行为全部在 interactive-page-core 中实现，这里只负责转交：
//!         AppMessage::ToggleTheme          → app.page.theme.toggle()
//!         ContentMessage::Click            → tabs.click() / accordion.click()
//!         ContentMessage::Input(c)         → form.input()（触发实时校验）
//!         ContentMessage::Submit           → page.submit()
//!         AppMessage::Tick(now)            → page.tick(now)（移除到期提示）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.next();
            }
        }

        AppMessage::FocusPrev => {
            if !app.modal.is_open() {
                app.focus = app.focus.prev();
            }
        }

        AppMessage::ToggleTheme => {
            app.page.theme.toggle();
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if !app.focus.is_navigation() {
                app.focus = FocusPanel::Navigation;
            }
            app.clear_status();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Tick(now) => {
            app.page.tick(now);
        }

        AppMessage::Noop => {}
    }
}
