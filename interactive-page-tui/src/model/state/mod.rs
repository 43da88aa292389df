//! 界面状态模块
//!
//! 只保存终端界面自己的状态（光标、弹窗）。
//! 页面上各组件的业务状态由核心库的 `PageState` 持有。

mod cursor;
mod modal;

pub use cursor::{form_rows, Cursor, CursorState, FormRow};
pub use modal::{Modal, ModalState};
