//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 负责终端的初始化和恢复，以及日志输出。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logger;         // 文件日志（fern）
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logger::init_logger;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     日志：
//!         界面独占终端，日志写在文件里：
//!             [2026-01-01 12:00:00.000 INFO interactive_page_core::submission] ...
//!
//!         未配置 [logging] file 时写到 <系统缓存目录>/interactive-page/interactive-page.log，
//!         文件打不开就不记录日志，应用照常运行。
//!
//!
//!     终端：
//!         init_terminal()     启用 raw mode、进入备用屏幕，并注册 panic 钩子
//!         restore_terminal()  在 app::run 返回后执行，无论成功失败
//!         Term                Terminal<CrosstermBackend<Stdout>> 的别名
//!

mod logger;
mod terminal;

pub use logger::init_logger;
pub use terminal::{init_terminal, restore_terminal, Term};
