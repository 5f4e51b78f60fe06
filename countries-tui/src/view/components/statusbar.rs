//! 状态栏组件

use countries_core::CountryView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    match app.current_page() {
        Page::Home => {
            hints.push((keys.arrows_ud, actions.select));
            hints.push((keys.enter, actions.open));
            hints.push((keys.tab, actions.region));
            hints.push((keys.esc, actions.clear_search));
        }
        Page::Country { .. } => {
            hints.push((keys.esc, actions.back));
            match app.detail.view() {
                CountryView::Found(_) if !app.detail.borders.is_empty() => {
                    hints.push((keys.arrows_lr, actions.neighbors));
                    hints.push((keys.enter, actions.open));
                }
                CountryView::NotFound { .. } => {
                    hints.push((keys.enter, actions.go_home));
                }
                _ => {}
            }
        }
    }

    hints.push((keys.reload, actions.reload));
    hints.push((keys.help, texts.common.help));
    hints.push((keys.language, texts.common.language));
    hints.push((keys.quit, texts.common.quit));

    hints
}
