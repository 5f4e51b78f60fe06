//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，任意 Esc / Enter / q 关闭弹窗
    if app.modal.is_open() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                AppMessage::Modal(ModalMessage::Close)
            }
            _ => AppMessage::Noop,
        };
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_F1.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }

    match app.current_page() {
        Page::Home => handle_home_keys(key),
        Page::Country { .. } => handle_country_keys(key),
    }
}

/// 主页：列表选择 + 搜索输入
fn handle_home_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearQuery);
    }
    if DefaultKeymap::UP.matches(&key) {
        return AppMessage::Content(ContentMessage::SelectPrevious);
    }
    if DefaultKeymap::DOWN.matches(&key) {
        return AppMessage::Content(ContentMessage::SelectNext);
    }
    if DefaultKeymap::FIRST.matches(&key) {
        return AppMessage::Content(ContentMessage::SelectFirst);
    }
    if DefaultKeymap::LAST.matches(&key) {
        return AppMessage::Content(ContentMessage::SelectLast);
    }
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }
    if DefaultKeymap::REGION.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleRegion);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        // 国家名不含 '?'，留给帮助
        KeyCode::Char('?') => AppMessage::ShowHelp,
        KeyCode::Char(c) if is_text_input(key.modifiers) => {
            AppMessage::Content(ContentMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 详情页：返回、邻国徽章
fn handle_country_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::PREV_BORDER.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevBorder);
    }
    if DefaultKeymap::NEXT_BORDER.matches(&key) {
        return AppMessage::Content(ContentMessage::NextBorder);
    }
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        // vim 风格
        KeyCode::Char('h') => AppMessage::Content(ContentMessage::PrevBorder),
        KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextBorder),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

/// 普通字符输入（允许 Shift 输入大写）
fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}
