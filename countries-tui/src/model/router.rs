//! 历史路由
//!
//! 以栈的形式保存访问过的位置，实现 countries-core 的 Navigator trait。

use countries_core::{NavState, NavigationIntent, Navigator, Route};

/// 一条历史记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub state: NavState,
}

/// 历史路由
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    /// 当前位置
    current: Location,
    /// 之前的位置，末尾为最近一条
    previous: Vec<Location>,
}

impl HistoryRouter {
    /// 以初始位置创建路由
    pub fn new(route: Route, state: NavState) -> Self {
        Self {
            current: Location { route, state },
            previous: Vec::new(),
        }
    }

    /// 当前位置
    pub fn current(&self) -> &Location {
        &self.current
    }

    /// 当前位置的导航意图
    pub fn intent(&self) -> NavigationIntent {
        self.current().state.into()
    }

    /// 历史深度
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.previous.len() + 1
    }
}

impl Navigator for HistoryRouter {
    fn navigate(&mut self, route: Route, state: NavState) {
        log::debug!("navigate {} (from: {})", route.path(), state.from);
        let next = Location { route, state };
        self.previous.push(std::mem::replace(&mut self.current, next));
    }

    fn navigate_back(&mut self) {
        if let Some(location) = self.previous.pop() {
            self.current = location;
            log::debug!("navigate back to {}", self.current.route.path());
        } else {
            log::debug!("navigate back ignored: history has a single entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_core::go_back;

    fn country(name: &str) -> Route {
        Route::Country(name.to_string())
    }

    #[test]
    fn in_app_back_pops_one_entry() {
        let mut router = HistoryRouter::new(Route::Home, NavState::direct());
        router.navigate(country("France"), NavState::in_app());
        router.navigate(country("Germany"), NavState::in_app());

        go_back(router.intent(), &mut router);
        assert_eq!(router.current().route, country("France"));
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn direct_entry_back_goes_home_marked() {
        let mut router = HistoryRouter::new(country("Japan"), NavState::direct());
        assert_eq!(router.intent(), NavigationIntent::Direct);

        go_back(router.intent(), &mut router);
        assert_eq!(router.current().route, Route::Home);
        assert_eq!(router.current().state, NavState::in_app());
        assert_eq!(router.depth(), 2);

        // 回到主页后的返回链留在应用内
        router.navigate(country("Chile"), NavState::in_app());
        go_back(router.intent(), &mut router);
        assert_eq!(router.current().route, Route::Home);
    }

    #[test]
    fn back_on_single_entry_is_noop() {
        let mut router = HistoryRouter::new(Route::Home, NavState::direct());
        router.navigate_back();
        assert_eq!(router.depth(), 1);
        assert_eq!(router.current().route, Route::Home);
    }
}
