//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, CountryTexts, HelpActionTexts, HelpTexts, HintTexts, HomeTexts,
    KeyNames, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "世界国家浏览器",
        loading: "加载中...",
        back: "返回",
        home: "主页",
        close: "关闭",
        quit: "退出",
        help: "帮助",
        language: "语言",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            quit: "Alt+q",
            help: "?",
            language: "Alt+l",
            reload: "Alt+r",
        },
        actions: ActionTexts {
            select: "选择",
            open: "打开",
            back: "返回",
            region: "地区",
            clear_search: "清空搜索",
            neighbors: "邻国",
            go_home: "主页",
            reload: "重新加载",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        title: "你想去哪里？",
        search: "搜索",
        search_placeholder: "输入国家名称...",
        region: "地区",
        all_regions: "全部",
        no_results: "没有符合筛选条件的国家",
        no_data: "尚未加载国家数据",
        countries: "个国家",
    },

    // 中文没有单复数之分，两种形式使用相同文本
    country: CountryTexts {
        not_found: "没有可显示的国家...",
        flag: "国旗",
        native_name: "本地名称",
        native_names: "本地名称",
        population: "人口",
        region: "地区",
        sub_region: "次区域",
        capital: "首都",
        capitals: "首都",
        top_level_domain: "顶级域名",
        currencies: "货币",
        languages: "语言",
        border_countries: "接壤国家",
        no_borders: "无",
    },

    status_bar: StatusBarTexts {
        loaded: "个国家已加载",
        load_failed: "国家数据加载失败",
        reloading: "重新加载中...",
        language_changed: "语言",
    },

    help: HelpTexts {
        title: "快捷键",
        global: "全局",
        home: "国家列表",
        country: "国家详情",
        actions: HelpActionTexts {
            quit: "退出",
            help: "显示帮助",
            reload: "重新加载数据文件",
            language: "切换语言",
            type_to_search: "输入名称进行搜索",
            move_selection: "移动选择",
            cycle_region: "切换地区筛选",
            open_country: "打开选中的国家",
            clear_search: "清空搜索",
            select_neighbor: "选择接壤国家",
            open_neighbor: "打开接壤国家 / 主页链接",
            back: "返回",
        },
    },
};
