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
//!
//! src/backend/mod.rs
//! Backend 层：与界面无关的外部资源
//!
//! 这个应用没有网络或持久化需求，Backend 层只负责读取配置文件。
//! 页面行为本身由 interactive-page-core 提供，不经过这一层。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;             // 配置服务（TOML 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         配置文件位置，按顺序查找：
//!             1. 环境变量 INTERACTIVE_PAGE_CONFIG
//!             2. <系统配置目录>/interactive-page/config.toml
//!
//!         文件内容：
//!             [logging]
//!             level = "info"                  // trace / debug / info / warn / error
//!             file = "/path/to/page.log"      // 可选
//!
//!             [markup.tabs]                   // 可选，自定义页面结构
//!             controls = [...]
//!             panels = [...]
//!
//!         文件不存在时返回默认配置；读取或解析失败返回 ConfigError，
//!         main.rs 会退回默认配置并以错误弹窗提示。
//!

mod config_service;

pub use config_service::{AppConfig, ConfigError, ConfigService, LocalConfigService, LoggingConfig};
