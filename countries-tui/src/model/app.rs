//! 应用主状态结构

use countries_core::{CountryRecord, NavState, Route};

use super::{DetailState, HistoryRouter, HomeState, ModalState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 历史路由
    pub router: HistoryRouter,

    /// 国家集合（None = 加载中）
    pub countries: Option<Vec<CountryRecord>>,
    /// 集合版本号，每次替换集合递增
    pub revision: u64,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 主页状态
    pub home: HomeState,
    /// 详情页状态
    pub detail: DetailState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 请求主循环重新加载集合
    pub reload_requested: bool,
    /// 请求主循环保存语言设置
    pub language_changed: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new(initial: Route, state: NavState) -> Self {
        let mut app = Self {
            should_quit: false,
            router: HistoryRouter::new(initial, state),
            countries: None,
            revision: 0,
            status_message: None,
            home: HomeState::new(),
            detail: DetailState::new(),
            modal: ModalState::new(),
            reload_requested: false,
            language_changed: false,
        };
        app.sync_pages();
        app
    }

    /// 当前页面
    pub fn current_page(&self) -> Page {
        Page::from(&self.router.current().route)
    }

    /// 已加载的集合
    pub fn collection(&self) -> Option<&[CountryRecord]> {
        self.countries.as_deref()
    }

    /// 替换集合
    pub fn set_countries(&mut self, countries: Vec<CountryRecord>) {
        self.countries = Some(countries);
        self.revision += 1;
        let visible = self
            .collection()
            .map_or(0, |all| self.home.visible(all).len());
        self.home.clamp(visible);
        self.sync_pages();
    }

    /// 当前页面为详情页时，让详情页与路由和集合保持同步
    pub fn sync_pages(&mut self) {
        if let Route::Country(name) = &self.router.current().route {
            self.detail
                .show(name, self.countries.as_deref(), self.revision);
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 取出重新加载请求
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// 取出语言变更标记
    pub fn take_language_change(&mut self) -> bool {
        std::mem::take(&mut self.language_changed)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::Home, NavState::direct())
    }
}
