//! Interactive Page TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置文件 (`backend/`)
//!
//! 页面组件（主题切换、标签页、折叠面板、注册表单、成功提示）的行为
//! 都在 `interactive-page-core` 中，本 crate 只负责终端上的呈现与操作。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()   // 读取配置文件（失败时退回默认配置）
//!     init_logger()               // 初始化文件日志
//!     PageState::load()           // 由页面标记构建组件状态
//!     model::App::new()           // 创建 APP 实例
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!     配置或页面标记有误时不会直接退出：
//!         使用内置页面启动，并在第一帧弹出错误弹窗说明原因。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use interactive_page_core::{PageMarkup, PageState};

use backend::{AppConfig, ConfigService, LocalConfigService};
use util::{init_logger, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let service = LocalConfigService::new();
    let (config, config_error) = match service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    };

    // 2. 初始化日志
    if let Some(log_path) = init_logger(&config.logging)? {
        log::info!("Log file: {}", log_path.display());
    }
    log::info!("Config file: {:?}", service.path());
    if let Some(error) = &config_error {
        log::error!("{error}");
    }

    // 3. 构建页面状态
    let (page, markup_error) = load_page(config.markup.as_ref())?;

    // 4. 创建应用实例
    let mut app = model::App::new(page);
    if let Some(message) = config_error {
        app.modal.show_error("Configuration Error", message);
    } else if let Some(message) = markup_error {
        app.modal.show_error("Page Markup Error", message);
    }

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}

/// 构建页面状态；自定义标记无效时退回内置页面，并返回错误描述
fn load_page(markup: Option<&PageMarkup>) -> Result<(PageState, Option<String>)> {
    if let Some(markup) = markup {
        match PageState::load(markup) {
            Ok(page) => return Ok((page, None)),
            Err(e) => {
                log::error!("Invalid page markup, falling back to the built-in page: {e}");
                let page = PageState::load(&PageMarkup::default())?;
                return Ok((page, Some(e.to_string())));
            }
        }
    }

    Ok((PageState::load(&PageMarkup::default())?, None))
}
