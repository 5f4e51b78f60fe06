//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     while let Ok(result) = rx.try_recv() {          // 取出后台加载结果（不阻塞）
//!         update::update(&mut app , CountriesLoaded / LoadFailed)
//!     }
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//!     处理 update 留下的副作用请求：重新加载 / 保存语言
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{AppConfig, ConfigService, CountryLoader, LoadResult};
use crate::event;
use crate::i18n::current_language;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 主循环依赖的后端服务
pub struct Services<'a> {
    pub loader: &'a CountryLoader,
    pub results: &'a mut UnboundedReceiver<LoadResult>,
    pub config_service: &'a dyn ConfigService,
    pub config: &'a mut AppConfig,
}

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, services: &mut Services<'_>) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 处理后台加载结果
        while let Ok(result) = services.results.try_recv() {
            let msg = match result {
                Ok(countries) => AppMessage::CountriesLoaded(countries),
                Err(e) => AppMessage::LoadFailed(e.to_string()),
            };
            update::update(app, msg);
        }

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 副作用
        if app.take_reload_request() {
            services.loader.spawn_load();
        }
        if app.take_language_change() {
            services.config.language = current_language().code().to_string();
            if let Err(e) = services.config_service.save(services.config) {
                log::warn!("Failed to save language setting: {e:#}");
            }
        }
    }

    Ok(())
}
