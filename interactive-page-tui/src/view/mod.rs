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
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧都根据 App 重新绘制整个界面。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 + 导航 + 内容 + 状态栏）
//!         mod components;         // 导航面板、状态栏、弹窗
//!         mod pages;              // 标签页、折叠面板、注册表单
//!         pub mod theme;          // 配色
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────────────────┐
//!         │ Interactive Page v0.1.0                   [ 🌓 Dark Mode ]│  ← 标题栏，右侧为主题按钮
//!         ├──────────────┬───────────────────────────────────────────┤
//!         │ ▶ 1 ▤ Tabs   │  Tab 1 | Tab 2 | Tab 3                    │
//!         │   2 ≡ Accord │  ───────────────────                      │
//!         │   3 ✎ Regist │  Content for Tab 1                        │
//!         ├──────────────┴───────────────────────────────────────────┤
//!         │ Tab Switch Focus │ ↑↓ Navigation │ Alt+t Theme │ ...     │  ← 状态栏
//!         └──────────────────────────────────────────────────────────┘
//!
//!
//!     配色：
//!         没有全局主题变量。每个渲染函数通过 theme::colors(app)
//!         从 app.page.theme 取得当前配色，所以切换主题后下一帧立即生效。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
