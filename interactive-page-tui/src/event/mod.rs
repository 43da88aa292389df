//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ContentMsg│               ▼               │   │
//！│  │   ┌─────────┐          │ NavMsg    │          ┌──────────┐         │   │
//！│  │   │  View   │          │ Tick      │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                             ┌───────────────────┐        │
//！│      │  终端   │                             │ interactive-page- │        │
//！│      │ (Util)  │                             │       core        │        │
//！│      └─────────┘                             └───────────────────┘        │
//！└─────────────────────────────────────────────────────────────────────────────┘


//! 
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//! 
//! 
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event}; 
//! 
//! 
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!             
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//! 
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!         poll 超时后主循环照常前进一轮并发出 Tick，
//!         所以成功提示即使在没有按键时也会按时消失。
//! 
//! 
//!         · handle_event    事件分发
//! 
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，发至以下几个函数处理
//!             Event::Resize(Width , height)       // 终端窗口大小发生变化，重绘终端
//!             Event::Mouse(MouseEvent)            // 鼠标事件（不处理）
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - Ctrl+C / Alt+q 始终退出；
//!                 - 有弹窗打开时，只有 Enter / Esc 生效（关闭弹窗）；
//!                 - 全局快捷键（Alt+t 主题、Alt+h 帮助、Esc、Tab），就地处理；
//!                 - 焦点位于主题按钮，Enter / Space 切换主题；
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 内容面板键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     标签页 / 折叠面板：
//!             ←↑ k        → ContentMessage::SelectPrevious
//!             →↓ j        → ContentMessage::SelectNext
//!             Enter Space → ContentMessage::Click
//!
//!     注册表单：
//!             ↑ / ↓       → 在输入框、条款、提交按钮之间移动
//!             字符输入     → ContentMessage::Input(c)（触发实时校验）
//!             Backspace   → ContentMessage::Backspace
//!             Space       → 在条款行上为 ContentMessage::ToggleTerms
//!             Enter       → ContentMessage::Click（条款行勾选，其余提交）
//! 
//! 
//!     在 src/event/handler.rs 中，有：
//!         pub fn handle_event(event: Event , app: &App) -> AppMessage {
//!             ...                                          ↑↑↑↑↑↑↑↑↑↑
//!             ...                                          返回一个 AppMessage 类型
//!         }
//!
//!     即，handler.rs 使用 message 层定义的 AppMessage 枚举类型，
//!     创建一个对应的枚举值并返回。
//!     在 src/app.rs 中，有：
//!         update::update(app , msg);
//!                              ↑↑↑                    // 在此作为参数传入 update 层
//! 

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
