//! 路由跳转
//!
//! 所有跳转都经过 HistoryRouter，跳转后同步详情页。

use countries_core::{go_back, NavState, Navigator, Route};

use crate::model::App;

/// 应用内打开某个国家的详情页
pub fn open_country(app: &mut App, name: impl Into<String>) {
    app.router
        .navigate(Route::Country(name.into()), NavState::in_app());
    app.clear_status();
    app.sync_pages();
}

/// 应用内回到主页（未找到页的 Home 链接）
pub fn open_home(app: &mut App) {
    app.router.navigate(Route::Home, NavState::in_app());
    app.clear_status();
}

/// 详情页的返回按钮
pub fn back(app: &mut App) {
    let intent = app.router.intent();
    go_back(intent, &mut app.router);
    app.clear_status();
    app.sync_pages();
}
