//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 内容区子消息处理（主页 / 详情页）
//!         mod navigation;     // 路由跳转（打开国家、返回、回主页）
//!
//!     需要后台参与的操作（重新加载、保存语言）只在 Model 上打标记，
//!     由主循环（app.rs）取出后执行。
//!

mod content;
mod navigation;

use crate::i18n::{current_language, set_language, t};
use crate::message::{AppMessage, ModalMessage};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(ModalMessage::Close) => {
            app.modal.close();
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.current_page().is_detail_page() {
                navigation::back(app);
            }
        }

        AppMessage::Refresh => {
            app.reload_requested = true;
            app.set_status(t().status_bar.reloading);
        }

        AppMessage::CountriesLoaded(countries) => {
            let count = countries.len();
            app.set_countries(countries);
            app.set_status(format!("{count} {}", t().status_bar.loaded));
        }

        AppMessage::LoadFailed(error) => {
            // 集合保持为空：详情页显示未找到，而不是一直加载
            if app.countries.is_none() {
                app.set_countries(Vec::new());
            }
            app.set_status(format!("{}: {error}", t().status_bar.load_failed));
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CycleLanguage => {
            let lang = current_language().next();
            set_language(lang);
            app.language_changed = true;
            app.set_status(format!(
                "{}: {}",
                t().status_bar.language_changed,
                lang.display_name()
            ));
        }

        AppMessage::Noop => {}
    }
}
