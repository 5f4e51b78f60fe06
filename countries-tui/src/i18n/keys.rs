//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `home.*`, `country.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 主页（国家列表）文本
    pub home: HomeTexts,
    /// 国家详情页文本
    pub country: CountryTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub back: &'static str,
    pub home: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
    pub help: &'static str,
    pub language: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
    pub quit: &'static str,      // "Alt+q"
    pub help: &'static str,      // "?"
    pub language: &'static str,  // "Alt+l"
    pub reload: &'static str,    // "Alt+r"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub region: &'static str,
    pub clear_search: &'static str,
    pub neighbors: &'static str,
    pub go_home: &'static str,
    pub reload: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub title: &'static str,
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub region: &'static str,
    pub all_regions: &'static str,
    pub no_results: &'static str,
    pub no_data: &'static str,
    pub countries: &'static str,
}

/// 国家详情页文本
pub struct CountryTexts {
    pub not_found: &'static str,
    pub flag: &'static str,
    pub native_name: &'static str,
    pub native_names: &'static str,
    pub population: &'static str,
    pub region: &'static str,
    pub sub_region: &'static str,
    pub capital: &'static str,
    pub capitals: &'static str,
    pub top_level_domain: &'static str,
    pub currencies: &'static str,
    pub languages: &'static str,
    pub border_countries: &'static str,
    pub no_borders: &'static str,
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub loaded: &'static str,
    pub load_failed: &'static str,
    pub reloading: &'static str,
    pub language_changed: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub home: &'static str,
    pub country: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助弹窗中的动作说明
pub struct HelpActionTexts {
    pub quit: &'static str,
    pub help: &'static str,
    pub reload: &'static str,
    pub language: &'static str,
    pub type_to_search: &'static str,
    pub move_selection: &'static str,
    pub cycle_region: &'static str,
    pub open_country: &'static str,
    pub clear_search: &'static str,
    pub select_neighbor: &'static str,
    pub open_neighbor: &'static str,
    pub back: &'static str,
}
