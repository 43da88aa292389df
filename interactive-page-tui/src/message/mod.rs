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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 按键被翻译成“点击”、“输入”、“提交”这类与终端无关的消息，
//! Update 层再把它们转交给核心库。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod content;        // 内容面板子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     除了按键，主循环每一轮还会发出一条 AppMessage::Tick(now)，
//!     让到期的成功提示得以移除。
//!

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
