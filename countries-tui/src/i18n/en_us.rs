//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, CountryTexts, HelpActionTexts, HelpTexts, HintTexts, HomeTexts,
    KeyNames, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Countries Explorer",
        loading: "Loading...",
        back: "Back",
        home: "Home",
        close: "Close",
        quit: "Quit",
        help: "Help",
        language: "Language",
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
            select: "Select",
            open: "Open",
            back: "Back",
            region: "Region",
            clear_search: "Clear search",
            neighbors: "Neighbors",
            go_home: "Home",
            reload: "Reload",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        title: "Where in the world?",
        search: "Search",
        search_placeholder: "Type a country name...",
        region: "Region",
        all_regions: "All",
        no_results: "No country matches the current filter",
        no_data: "No countries loaded",
        countries: "countries",
    },

    country: CountryTexts {
        not_found: "No country to display...",
        flag: "Flag",
        native_name: "Native Name",
        native_names: "Native Names",
        population: "Population",
        region: "Region",
        sub_region: "Sub Region",
        capital: "Capital",
        capitals: "Capitals",
        top_level_domain: "Top Level Domain",
        currencies: "Currencies",
        languages: "Languages",
        border_countries: "Border Countries",
        no_borders: "None",
    },

    status_bar: StatusBarTexts {
        loaded: "countries loaded",
        load_failed: "Failed to load countries",
        reloading: "Reloading...",
        language_changed: "Language",
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        global: "Global",
        home: "Country list",
        country: "Country details",
        actions: HelpActionTexts {
            quit: "Quit",
            help: "Show this help",
            reload: "Reload data file",
            language: "Switch language",
            type_to_search: "Type to search by name",
            move_selection: "Move selection",
            cycle_region: "Cycle region filter",
            open_country: "Open selected country",
            clear_search: "Clear search",
            select_neighbor: "Select border country",
            open_neighbor: "Open border country / Home link",
            back: "Back",
        },
    },
};
