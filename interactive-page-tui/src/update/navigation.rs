//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => open_selected(app),

        NavigationMessage::Jump(index) => {
            if index < app.navigation.items.len() {
                app.navigation.selected = index;
                open_selected(app);
            }
        }
    }
}

/// 打开选中的页面，并把焦点交给内容面板
fn open_selected(app: &mut App) {
    if let Some(page) = app.navigation.current_page() {
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app.clear_status(); // 切换页面时清除状态消息
    }
}
