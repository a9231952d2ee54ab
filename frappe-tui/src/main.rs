//! FRAPPE TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口，其执行：
//! fn `main()` {
//!
//!     Args::parse()           // 命令行参数
//!     load_config()           // 配置文件 + 命令行覆盖
//!     init_logging()          // 日志写入文件（终端被 TUI 占用）
//!     Runtime::new()          // tokio 多线程运行时，后台请求在其上执行
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use frappe_core::{RenderOrder, ServiceContext};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::{AppConfig, Backend, ConfigService, CoreService, JsonConfigService, DEFAULT_BASE_URL};
use model::{App, Page};
use util::{init_terminal, restore_terminal};

#[derive(Parser, Debug)]
#[command(
    name = "frappe-tui",
    version,
    about = "Terminal client for the FRAPPE recommender",
    long_about = "Browse users, their installed items and their recommendations, \
                  and install or remove items.\n\nExamples:\n  \
                  frappe-tui --base-url http://localhost:8000/api/v2\n  \
                  frappe-tui --user 4a3b2c --order request"
)]
struct Args {
    #[arg(short = 'b', long, value_name = "URL", help = "Backend base URL (overrides the config file).")]
    base_url: Option<String>,

    #[arg(short = 'u', long, value_name = "USER", help = "Open this user's items directly.")]
    user: Option<String>,

    #[arg(short = 'c', long, value_name = "FILE", help = "Config file (default: <config dir>/frappe-tui/config.json).")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Log file (default: <data dir>/frappe-tui/frappe-tui.log).")]
    log_file: Option<PathBuf>,

    #[arg(long, value_name = "LOCALE", help = "Preferred locale of item names, e.g. en-US.")]
    locale: Option<String>,

    #[arg(long, value_name = "ORDER", value_parser = parse_render_order, help = "List order: arrival or request.")]
    order: Option<RenderOrder>,
}

fn parse_render_order(value: &str) -> Result<RenderOrder, String> {
    match value {
        "arrival" => Ok(RenderOrder::Arrival),
        "request" => Ok(RenderOrder::Request),
        other => Err(format!("unknown order '{other}', expected arrival or request")),
    }
}

/// 读取配置文件，再用命令行参数覆盖
fn load_config(args: &Args) -> Result<AppConfig> {
    let service = match &args.config {
        Some(path) => JsonConfigService::new(path),
        None => JsonConfigService::default_location()?,
    };
    let mut config = service.load()?;

    if let Some(ref url) = args.base_url {
        config.client.base_url.clone_from(url);
    }
    if config.client.base_url.trim().is_empty() {
        config.client.base_url = DEFAULT_BASE_URL.to_string();
    }
    if let Some(ref locale) = args.locale {
        config.locale.clone_from(locale);
    }
    if let Some(order) = args.order {
        config.client.render_order = order;
    }
    if args.log_file.is_some() {
        config.log_file.clone_from(&args.log_file);
    }
    Ok(config)
}

/// 日志写入文件，级别由 `RUST_LOG` 控制（默认 info）
fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let path = match &config.log_file {
        Some(path) => path.clone(),
        None => dirs::data_local_dir()
            .context("cannot determine the data directory")?
            .join("frappe-tui")
            .join("frappe-tui.log"),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    Ok(path)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    let log_path = init_logging(&config)?;
    tracing::info!("Starting FRAPPE TUI against {}, logging to {}", config.client.base_url, log_path.display());

    view::theme::set_theme(config.theme);

    // 1. 后台运行时与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("frappe-worker")
        .build()?;
    let ctx = Arc::new(ServiceContext::connect(config.client.clone())?);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = CoreService::new(ctx, runtime.handle().clone(), tx, config.users_page_size);

    // 2. 创建应用实例，开始加载第一页用户
    let mut app = App::new(config.client.base_url.clone(), config.locale.clone(), config.client.page_size);
    app.users.begin_loading(0);
    backend.load_users(0);
    if let Some(user) = args.user {
        app.installed.begin_loading();
        app.recommended.begin_loading();
        backend.load_user_items(&user);
        app.current_page = Page::UserItems { user };
    }

    // 3. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 4. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    runtime.shutdown_background();
    tracing::info!("FRAPPE TUI exited");
    result
}
