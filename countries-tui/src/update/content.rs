//! 内容区更新逻辑

use countries_core::CountryView;

use crate::message::ContentMessage;
use crate::model::{App, Page};

use super::navigation;

/// 处理内容区消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page() {
        Page::Home => update_home(app, msg),
        Page::Country { .. } => update_country(app, msg),
    }
}

// ========== 主页 ==========

fn update_home(app: &mut App, msg: ContentMessage) {
    let visible = app
        .collection()
        .map_or(0, |all| app.home.visible(all).len());

    match msg {
        ContentMessage::SelectPrevious => app.home.select_previous(),
        ContentMessage::SelectNext => app.home.select_next(visible),
        ContentMessage::SelectFirst => app.home.select_first(),
        ContentMessage::SelectLast => app.home.select_last(visible),
        ContentMessage::Confirm => {
            let name = app
                .collection()
                .and_then(|all| app.home.selected_country(all))
                .map(|c| c.name.clone());
            if let Some(name) = name {
                navigation::open_country(app, name);
            }
        }
        ContentMessage::Input(c) => app.home.push_char(c),
        ContentMessage::Backspace => app.home.pop_char(),
        ContentMessage::ClearQuery => app.home.clear_query(),
        ContentMessage::CycleRegion => {
            if let Some(all) = app.countries.as_deref() {
                app.home.cycle_region(all);
            }
        }
        ContentMessage::PrevBorder | ContentMessage::NextBorder => {}
    }
}

// ========== 详情页 ==========

fn update_country(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::PrevBorder => app.detail.select_previous_border(),
        ContentMessage::NextBorder => app.detail.select_next_border(),
        ContentMessage::Confirm => {
            let not_found = matches!(app.detail.view(), CountryView::NotFound { .. });
            let border = app.detail.selected_border().map(|b| b.target().to_string());
            if not_found {
                navigation::open_home(app);
            } else if let Some(target) = border {
                navigation::open_country(app, target);
            }
        }
        ContentMessage::Backspace => navigation::back(app),
        _ => {}
    }
}
