//! 国家详情页状态

use countries_core::{resolve_borders, BorderLink, CountryPage, CountryRecord, CountryView};

/// 详情页状态
#[derive(Debug)]
pub struct DetailState {
    /// 查找结果（Loading / NotFound / Found）
    pub page: CountryPage,
    /// 邻国徽章
    pub borders: Vec<BorderLink>,
    /// 当前选中的徽章
    pub selected_border: usize,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            page: CountryPage::new(String::new()),
            borders: Vec::new(),
            selected_border: 0,
        }
    }

    pub fn view(&self) -> &CountryView {
        self.page.view()
    }

    /// 让详情页指向 `target` 并与集合同步
    pub fn show(&mut self, target: &str, collection: Option<&[CountryRecord]>, revision: u64) {
        self.page.set_target(target);
        if self.page.sync(collection, revision) {
            self.borders = match (self.page.view().record(), collection) {
                (Some(record), Some(all)) => resolve_borders(all, record.border_ids()),
                _ => Vec::new(),
            };
            self.selected_border = 0;
        } else if collection.is_none() {
            self.borders.clear();
            self.selected_border = 0;
        }
    }

    /// 选择上一个徽章
    pub fn select_previous_border(&mut self) {
        self.selected_border = self.selected_border.saturating_sub(1);
    }

    /// 选择下一个徽章
    pub fn select_next_border(&mut self) {
        if self.selected_border + 1 < self.borders.len() {
            self.selected_border += 1;
        }
    }

    /// 当前选中的徽章
    pub fn selected_border(&self) -> Option<&BorderLink> {
        self.borders.get(self.selected_border)
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}
