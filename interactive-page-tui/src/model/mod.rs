//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是终端界面状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（主题按钮 / 导航 / 内容）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 光标与弹窗
//!
//!     值得一提的是，页面上各组件的业务状态并不在这里定义：
//!         - 主题、标签页、折叠面板、注册表单、成功提示都属于
//!             interactive-page-core 的 PageState，App 只是持有它；
//!         - 这里定义的只是“终端如何呈现与操作它们”的状态，
//!             比如光标停在哪个标签上、焦点在哪个区域。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub page: PageState,                // 页面组件状态（核心库）
//!             pub cursors: CursorState,           // 各页面光标
//!             pub modal: ModalState,              // 弹窗状态
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     三个区域：ThemeToggle（标题栏按钮）、Navigation、Content
//!
//!     数据流：
//!         用户按 Tab / Shift+Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::FocusNext / FocusPrev
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.next()
//!             ↓
//!         view 层根据焦点设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、光标（CursorState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     光标相当于鼠标指针：↑↓ 移动光标，Enter 相当于“点击”。
//!     点击会被转交给核心库：
//!         Tabs         → app.page.tabs.click(cursor)
//!         Accordion    → app.page.accordion.click(cursor)
//!         Registration → 输入 / 勾选条款 / 提交
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavigationState};
pub use page::Page;
pub use state::{form_rows, CursorState, FormRow, Modal, ModalState};
