//! 主页（国家列表）状态

use countries_core::{filter_countries, regions, CountryRecord};

/// 主页状态
#[derive(Debug, Default)]
pub struct HomeState {
    /// 搜索词
    pub query: String,
    /// 地区筛选，None 表示全部
    pub region: Option<String>,
    /// 当前选中的索引（相对于筛选后的列表）
    pub selected: usize,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 筛选后的列表
    pub fn visible<'a>(&self, all: &'a [CountryRecord]) -> Vec<&'a CountryRecord> {
        filter_countries(all, &self.query, self.region.as_deref())
    }

    /// 当前选中的国家
    pub fn selected_country<'a>(&self, all: &'a [CountryRecord]) -> Option<&'a CountryRecord> {
        self.visible(all).get(self.selected).copied()
    }

    /// 输入搜索字符
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    /// 删除最后一个搜索字符
    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.selected = 0;
        }
    }

    /// 清空搜索
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    /// 切换到下一个地区：全部 → 第一个地区 → … → 最后一个地区 → 全部
    pub fn cycle_region(&mut self, all: &[CountryRecord]) {
        let regions = regions(all);
        self.region = match &self.region {
            None => regions.first().cloned(),
            Some(current) => regions
                .iter()
                .position(|r| r == current)
                .and_then(|i| regions.get(i + 1))
                .cloned(),
        };
        self.selected = 0;
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 集合替换后修正选中项
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Vec<CountryRecord> {
        let mut list = Vec::new();
        for (name, region) in [
            ("Chile", "Americas"),
            ("France", "Europe"),
            ("Peru", "Americas"),
            ("Japan", "Asia"),
        ] {
            let mut c = CountryRecord::named(name);
            c.region = region.to_string();
            list.push(c);
        }
        list
    }

    #[test]
    fn search_resets_selection() {
        let all = collection();
        let mut home = HomeState::new();
        home.select_next(all.len());
        home.select_next(all.len());
        assert_eq!(home.selected, 2);

        home.push_char('p');
        assert_eq!(home.selected, 0);
        let names: Vec<&str> = home.visible(&all).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Peru", "Japan"]);
        assert_eq!(home.selected_country(&all).map(|c| c.name.as_str()), Some("Peru"));

        home.pop_char();
        assert_eq!(home.visible(&all).len(), 4);
    }

    #[test]
    fn region_cycle_wraps_to_all() {
        let all = collection();
        let mut home = HomeState::new();
        home.cycle_region(&all);
        assert_eq!(home.region.as_deref(), Some("Americas"));
        home.cycle_region(&all);
        assert_eq!(home.region.as_deref(), Some("Asia"));
        home.cycle_region(&all);
        assert_eq!(home.region.as_deref(), Some("Europe"));
        home.cycle_region(&all);
        assert_eq!(home.region, None);
    }

    #[test]
    fn selection_bounds() {
        let mut home = HomeState::new();
        home.select_previous();
        assert_eq!(home.selected, 0);
        home.select_last(4);
        assert_eq!(home.selected, 3);
        home.select_next(4);
        assert_eq!(home.selected, 3);
        home.clamp(2);
        assert_eq!(home.selected, 1);
        home.select_next(0);
        home.clamp(0);
        assert_eq!(home.selected, 0);
    }
}
