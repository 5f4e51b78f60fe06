//! 页面状态定义

use countries_core::Route;

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页（国家列表）
    #[default]
    Home,
    /// 国家详情页
    Country { name: String },
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &str {
        match self {
            Page::Home => t().common.home,
            Page::Country { name } => name,
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::Country { .. })
    }
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::Country(name) => Page::Country { name: name.clone() },
        }
    }
}
